//! Console reporter for decoding sessions
//!
//! Prints every stage of a session: parameters, encoding, corruption and the
//! result of each decoder, with recovered messages rendered back to text.

use super::{DecodeReporter, Reporter};
use crate::error::RsError;
use crate::galois::FIELD_PRIME;
use crate::poly::Poly;
use crate::reed_solomon::{text_from_polynomial, Codeword, UniqueDecoding};
use crate::session::Scenario;

/// Constants for output formatting
const MAX_POSITIONS_IN_FULL: usize = 20; // Show every corrupted position if <= this many
const POSITION_SUMMARY_HEAD_TAIL: usize = 8; // Show first/last N positions otherwise

/// Console implementation for decoding sessions
#[derive(Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

impl DecodeReporter for ConsoleReporter {
    fn report_scenario_header(&self, number: usize, total: usize) {
        println!("\nScenario {} of {}\n", number, total);
    }

    fn report_scenario_start(&self, scenario: &Scenario, k: usize) {
        println!("Message to send : {:?}", scenario.message);
        println!("k = {}, e = {}, n = {}\n", k, scenario.errors, scenario.length);
    }

    fn report_encoded(&self, message: &Poly<FIELD_PRIME>, codeword: &Codeword<FIELD_PRIME>) {
        println!("Message polynomial : {}", message);
        println!("Encoded message = {}\n", codeword);
    }

    fn report_corrupted(&self, received: &Codeword<FIELD_PRIME>, positions: &[usize]) {
        println!("Received message = {}", received);
        println!("Corrupted positions: {}\n", format_positions(positions));
    }

    fn report_unique_result(
        &self,
        result: &Result<UniqueDecoding<FIELD_PRIME>, RsError>,
        k: usize,
    ) {
        println!("Unique decoding:");
        match result {
            Ok(decoding) => {
                println!("  Message polynomial : {}", decoding.message);
                println!("  Error locator : {}", decoding.error_locator);
                println!(
                    "  Corrected positions: {}",
                    format_positions(&decoding.error_positions)
                );
                println!("  Error corrected message : {}", render_text(&decoding.message, k));
            }
            Err(err) => println!("  Failed: {}", err),
        }
        println!();
    }

    fn report_list_result(&self, result: &Result<Vec<Poly<FIELD_PRIME>>, RsError>, k: usize) {
        println!("List decoding:");
        match result {
            Ok(list) if list.is_empty() => println!("  No candidates within the error budget"),
            Ok(list) => {
                println!("  {} candidate(s)", list.len());
                for candidate in list {
                    println!("  {} -> {}", candidate, render_text(candidate, k));
                }
            }
            Err(err) => println!("  Failed: {}", err),
        }
        println!();
    }
}

/// Decoded text, or a note when a coefficient is not a byte
fn render_text(poly: &Poly<FIELD_PRIME>, k: usize) -> String {
    match text_from_polynomial(poly, k) {
        Ok(text) => format!("{:?}", text),
        Err(err) => format!("<{}>", err),
    }
}

/// Position list, summarized for large lists
fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        return "none".to_string();
    }
    let join = |slice: &[usize]| {
        slice
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    if positions.len() <= MAX_POSITIONS_IN_FULL {
        join(positions)
    } else {
        format!(
            "{}, ... {} more ..., {}",
            join(&positions[..POSITION_SUMMARY_HEAD_TAIL]),
            positions.len() - 2 * POSITION_SUMMARY_HEAD_TAIL,
            join(&positions[positions.len() - POSITION_SUMMARY_HEAD_TAIL..])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::Gf257;

    #[test]
    fn test_format_positions() {
        assert_eq!(format_positions(&[]), "none");
        assert_eq!(format_positions(&[1, 4, 8]), "1, 4, 8");
        let many: Vec<usize> = (0..30).collect();
        assert_eq!(
            format_positions(&many),
            "0, 1, 2, 3, 4, 5, 6, 7, ... 14 more ..., 22, 23, 24, 25, 26, 27, 28, 29"
        );
    }

    #[test]
    fn test_render_text() {
        let poly = Poly::new(vec![Gf257::new(97), Gf257::new(98)]);
        assert_eq!(render_text(&poly, 2), "\"ab\"");
        let poly = Poly::new(vec![Gf257::new(256)]);
        assert!(render_text(&poly, 1).starts_with('<'));
    }
}
