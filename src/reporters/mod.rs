//! Output reporting for decoding sessions
//!
//! The session drives encoding, corruption and both decoders; reporters decide
//! what the user sees. This keeps the core logic free of printing.

mod console;
mod silent;

pub use console::ConsoleReporter;
pub use silent::SilentReporter;

use crate::error::RsError;
use crate::galois::FIELD_PRIME;
use crate::poly::Poly;
use crate::reed_solomon::{Codeword, UniqueDecoding};
use crate::session::Scenario;

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report an error that stopped an operation
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting each stage of a decoding session
///
/// Extends the base Reporter trait with encode/corrupt/decode stages
pub trait DecodeReporter: Reporter {
    /// Report which scenario of a battery is about to run (1-based)
    fn report_scenario_header(&self, number: usize, total: usize);

    /// Report the parameters of a scenario before it runs
    fn report_scenario_start(&self, scenario: &Scenario, k: usize);

    /// Report the message polynomial and the clean codeword
    fn report_encoded(&self, message: &Poly<FIELD_PRIME>, codeword: &Codeword<FIELD_PRIME>);

    /// Report the received word and which positions were corrupted
    fn report_corrupted(&self, received: &Codeword<FIELD_PRIME>, positions: &[usize]);

    /// Report the Berlekamp-Welch outcome
    fn report_unique_result(
        &self,
        result: &Result<UniqueDecoding<FIELD_PRIME>, RsError>,
        k: usize,
    );

    /// Report the list decoding outcome
    fn report_list_result(&self, result: &Result<Vec<Poly<FIELD_PRIME>>, RsError>, k: usize);
}
