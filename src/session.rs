//! End-to-end decoding sessions
//!
//! A session takes a text message, encodes it over GF(257) at the points
//! `0..n`, corrupts `e` symbols and runs both decoders on the received word.
//! Decoder failures are part of the report; only malformed scenarios (a
//! message that is not bytes, `n` too large, `e > n`) fail the session itself.

use crate::corruption::Corruptor;
use crate::error::{Result, RsError};
use crate::galois::FIELD_PRIME;
use crate::poly::Poly;
use crate::reed_solomon::{
    berlekamp_welch, message_polynomial, symbols_from_text, Codeword, Encoder, ListDecoder,
    ListDecoderConfig, UniqueDecoding,
};
use crate::reporters::DecodeReporter;
use log::info;

/// One run: a message, the number of symbols to corrupt (also the decoders'
/// error budget) and the codeword length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub message: String,
    pub errors: usize,
    pub length: usize,
}

impl Scenario {
    pub fn new(message: impl Into<String>, errors: usize, length: usize) -> Self {
        Self {
            message: message.into(),
            errors,
            length,
        }
    }

    /// Message length k in symbols
    pub fn message_length(&self) -> usize {
        self.message.chars().count()
    }
}

/// The scripted battery: `(message, e, n)` triples covering trivial codes,
/// unique decoding at and beyond `n = 2e + k`, and list decoding past half
/// the minimum distance
pub fn scripted_scenarios() -> Vec<Scenario> {
    [
        ("a", 0, 1),
        ("a", 1, 1),
        ("ab", 0, 2),
        ("ab", 1, 4),
        ("ab", 2, 5),
        ("abc", 2, 7),
        ("abc", 2, 8),
        ("abc", 3, 8),
        ("abc", 3, 10),
        ("abc", 4, 10),
        ("abc", 17, 30),
        ("abc", 18, 30),
        ("abc", 15, 30),
    ]
    .into_iter()
    .map(|(message, errors, length)| Scenario::new(message, errors, length))
    .collect()
}

/// Everything one scenario produced
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub scenario: Scenario,
    /// The true message polynomial
    pub message: Poly<FIELD_PRIME>,
    pub encoded: Codeword<FIELD_PRIME>,
    pub received: Codeword<FIELD_PRIME>,
    pub corrupted_positions: Vec<usize>,
    pub unique: std::result::Result<UniqueDecoding<FIELD_PRIME>, RsError>,
    pub list: std::result::Result<Vec<Poly<FIELD_PRIME>>, RsError>,
}

impl SessionReport {
    /// Whether unique decoding returned the true message
    pub fn unique_recovered(&self) -> bool {
        matches!(&self.unique, Ok(decoding) if decoding.message == self.message)
    }

    /// Whether the true message is among the list decoding candidates
    pub fn list_contains_original(&self) -> bool {
        matches!(&self.list, Ok(list) if list.contains(&self.message))
    }
}

/// Runs scenarios with a given corruptor and list decoder configuration
pub struct Session<C: Corruptor<FIELD_PRIME>> {
    corruptor: C,
    decoder: ListDecoder,
}

impl<C: Corruptor<FIELD_PRIME>> Session<C> {
    pub fn new(corruptor: C, config: ListDecoderConfig) -> Self {
        Self {
            corruptor,
            decoder: ListDecoder::new(config),
        }
    }

    /// Encode, corrupt and decode one scenario, reporting each stage
    pub fn run(
        &mut self,
        scenario: &Scenario,
        reporter: &dyn DecodeReporter,
    ) -> Result<SessionReport> {
        let symbols = symbols_from_text(&scenario.message)?;
        let k = symbols.len();
        reporter.report_scenario_start(scenario, k);

        let encoder = Encoder::with_length(scenario.length)?;
        let encoded = encoder.encode(&symbols)?;
        let message = message_polynomial(&symbols);
        reporter.report_encoded(&message, &encoded);

        let mut received = encoded.clone();
        let corrupted_positions = self
            .corruptor
            .corrupt(&mut received, scenario.errors)?;
        reporter.report_corrupted(&received, &corrupted_positions);

        let unique = berlekamp_welch(&received, k, scenario.errors);
        reporter.report_unique_result(&unique, k);

        let list = self.decoder.decode(&received, k, scenario.errors);
        reporter.report_list_result(&list, k);

        let report = SessionReport {
            scenario: scenario.clone(),
            message,
            encoded,
            received,
            corrupted_positions,
            unique,
            list,
        };
        info!(
            "Scenario {:?} (e = {}, n = {}): unique {}, list {}",
            scenario.message,
            scenario.errors,
            scenario.length,
            if report.unique_recovered() { "recovered" } else { "missed" },
            if report.list_contains_original() { "contains message" } else { "misses message" }
        );
        Ok(report)
    }

    /// Run every scenario in order; a malformed scenario is reported and skipped
    pub fn run_all(
        &mut self,
        scenarios: &[Scenario],
        reporter: &dyn DecodeReporter,
    ) -> Vec<SessionReport> {
        let mut reports = Vec::with_capacity(scenarios.len());
        for (index, scenario) in scenarios.iter().enumerate() {
            reporter.report_scenario_header(index + 1, scenarios.len());
            match self.run(scenario, reporter) {
                Ok(report) => reports.push(report),
                Err(err) => reporter.report_error(&format!("{:?}: {}", scenario, err)),
            }
        }
        reporter.report_complete(&format!(
            "Ran {} of {} scenarios",
            reports.len(),
            scenarios.len()
        ));
        reports
    }
}
