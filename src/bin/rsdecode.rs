//! rsdecode - Reed-Solomon unique and list decoding demo
//!
//! `run` encodes one message, corrupts it and decodes it; `scenarios` runs the
//! scripted battery. Set `RUST_LOG=debug` to see system sizes and candidates.

use anyhow::{Context, Result};
use rsdecode::corruption::RandomCorruptor;
use rsdecode::reporters::{ConsoleReporter, DecodeReporter, SilentReporter};
use rsdecode::session::{scripted_scenarios, Scenario, Session, SessionReport};
use rsdecode::ListDecoderConfig;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = rsdecode::parse_args();

    match matches.subcommand() {
        Some(("run", sub_matches)) => handle_run(sub_matches),
        Some(("scenarios", sub_matches)) => handle_scenarios(sub_matches),
        Some((cmd, _)) => anyhow::bail!("Unknown command: {}", cmd),
        None => {
            anyhow::bail!("No command specified, use 'rsdecode --help' for usage information")
        }
    }
}

/// Session with the corruptor and thread pool described by the arguments
fn build_session(matches: &clap::ArgMatches) -> Session<RandomCorruptor> {
    let config = ListDecoderConfig::from_args(matches);
    config.configure_thread_pool();

    let corruptor = match matches.get_one::<u64>("seed") {
        Some(&seed) => RandomCorruptor::seeded(seed),
        None => RandomCorruptor::from_os_rng(),
    };
    Session::new(corruptor, config)
}

fn reporter(matches: &clap::ArgMatches) -> Box<dyn DecodeReporter> {
    if matches.get_flag("quiet") {
        Box::new(SilentReporter::new())
    } else {
        Box::new(ConsoleReporter::new())
    }
}

fn handle_run(matches: &clap::ArgMatches) -> Result<()> {
    let message = match matches.get_one::<String>("message") {
        Some(message) => message.clone(),
        None => prompt("Message to send : ")?,
    };
    let errors = match matches.get_one::<usize>("errors") {
        Some(&errors) => errors,
        None => prompt_number("Number of errors : ")?,
    };
    let length = match matches.get_one::<usize>("length") {
        Some(&length) => length,
        None => prompt_number("N : ")?,
    };

    let scenario = Scenario::new(message, errors, length);
    let reporter = reporter(matches);
    let report = build_session(matches)
        .run(&scenario, reporter.as_ref())
        .with_context(|| format!("Failed to run scenario {:?}", scenario))?;

    print_summary(std::slice::from_ref(&report));
    Ok(())
}

fn handle_scenarios(matches: &clap::ArgMatches) -> Result<()> {
    let scenarios = scripted_scenarios();
    let reporter = reporter(matches);
    let reports = build_session(matches).run_all(&scenarios, reporter.as_ref());

    print_summary(&reports);
    anyhow::ensure!(
        reports.len() == scenarios.len(),
        "{} of {} scenarios could not be run",
        scenarios.len() - reports.len(),
        scenarios.len()
    );
    Ok(())
}

fn print_summary(reports: &[SessionReport]) {
    println!(
        "{:<12} {:>4} {:>4} {:>4}  {:<10} {:<10}",
        "message", "k", "e", "n", "unique", "list"
    );
    for report in reports {
        let scenario = &report.scenario;
        println!(
            "{:<12} {:>4} {:>4} {:>4}  {:<10} {:<10}",
            format!("{:?}", scenario.message),
            scenario.message_length(),
            scenario.errors,
            scenario.length,
            if report.unique_recovered() { "recovered" } else { "-" },
            if report.list_contains_original() { "listed" } else { "-" }
        );
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_number(label: &str) -> Result<usize> {
    let answer = prompt(label)?;
    answer
        .trim()
        .parse()
        .with_context(|| format!("Expected a non-negative integer, got {:?}", answer))
}
