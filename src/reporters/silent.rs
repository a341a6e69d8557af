//! Silent reporter for decoding sessions
//!
//! Provides a no-output implementation for tests or quiet operation.

use super::{DecodeReporter, Reporter};
use crate::error::RsError;
use crate::galois::FIELD_PRIME;
use crate::poly::Poly;
use crate::reed_solomon::{Codeword, UniqueDecoding};
use crate::session::Scenario;

/// Silent implementation for decoding sessions
#[derive(Default)]
pub struct SilentReporter;

impl SilentReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentReporter {
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl DecodeReporter for SilentReporter {
    fn report_scenario_header(&self, _number: usize, _total: usize) {}
    fn report_scenario_start(&self, _scenario: &Scenario, _k: usize) {}
    fn report_encoded(&self, _message: &Poly<FIELD_PRIME>, _codeword: &Codeword<FIELD_PRIME>) {}
    fn report_corrupted(&self, _received: &Codeword<FIELD_PRIME>, _positions: &[usize]) {}
    fn report_unique_result(
        &self,
        _result: &Result<UniqueDecoding<FIELD_PRIME>, RsError>,
        _k: usize,
    ) {
    }
    fn report_list_result(&self, _result: &Result<Vec<Poly<FIELD_PRIME>>, RsError>, _k: usize) {}
}
