//! End-to-end tests for the scripted scenario battery

use rsdecode::corruption::RandomCorruptor;
use rsdecode::reporters::SilentReporter;
use rsdecode::session::{scripted_scenarios, Scenario, Session};
use rsdecode::ListDecoderConfig;

#[test]
fn test_battery_outcomes() {
    let scenarios = scripted_scenarios();
    for seed in [0u64, 1, 42] {
        let mut session = Session::new(RandomCorruptor::seeded(seed), ListDecoderConfig::default());
        let reports = session.run_all(&scenarios, &SilentReporter::new());
        assert_eq!(reports.len(), scenarios.len());

        for report in &reports {
            let Scenario { message, errors, length } = &report.scenario;
            let k = message.len();
            assert_eq!(report.corrupted_positions.len(), *errors);

            // Unique decoding is guaranteed exactly when n >= 2e + k and e >= 1
            if *errors >= 1 && *length >= 2 * errors + k {
                assert!(report.unique_recovered(), "{:?} seed {}", report.scenario, seed);
            }
            if let Ok(decoding) = &report.unique {
                assert!(decoding.error_positions.len() <= *errors);
            }
            if let Ok(list) = &report.list {
                for candidate in list {
                    assert!(report.received.mismatches(candidate) <= *errors);
                }
            }
        }

        // "a" with no errors is listed; "abc" with 3 errors in 10 is recovered
        assert!(reports[0].list_contains_original());
        assert!(reports[8].unique_recovered());
        // "abc" in 30 symbols is listed with 17 and with 15 errors
        assert!(reports[10].list_contains_original());
        assert!(reports[12].list_contains_original());
    }
}

#[test]
fn test_custom_scenario() {
    let mut session = Session::new(RandomCorruptor::seeded(8), ListDecoderConfig::sequential());
    let report = session
        .run(&Scenario::new("Reed-Solomon", 5, 40), &SilentReporter::new())
        .unwrap();
    assert!(report.unique_recovered());
    assert!(report.list_contains_original());
}
