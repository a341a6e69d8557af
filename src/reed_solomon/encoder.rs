//! Reed-Solomon encoder
//!
//! A message `m_0, ..., m_{k-1}` is read as the polynomial
//! `P(X) = m_0 + m_1 X + ... + m_{k-1} X^{k-1}` and the codeword is its value at
//! each evaluation point.

use super::types::{default_points, Codeword};
use crate::error::{Result, RsError};
use crate::galois::Galois;
use crate::poly::Poly;
use log::debug;

/// Encoder bound to a fixed set of distinct evaluation points
#[derive(Clone, Debug)]
pub struct Encoder<const P: u32> {
    points: Vec<Galois<P>>,
}

impl<const P: u32> Encoder<P> {
    /// Create an encoder over the given evaluation points (must be distinct)
    pub fn new(points: Vec<Galois<P>>) -> Result<Self> {
        // Codeword::new performs the distinctness check
        Codeword::new(points.iter().map(|&a| (a, Galois::ZERO)).collect())?;
        Ok(Self { points })
    }

    /// Encoder over the points `0, 1, ..., n - 1`
    pub fn with_length(n: usize) -> Result<Self> {
        Self::new(default_points(n)?)
    }

    /// Codeword length n
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Galois<P>] {
        &self.points
    }

    /// Evaluate the message polynomial at every point
    pub fn encode(&self, message: &[Galois<P>]) -> Result<Codeword<P>> {
        if message.is_empty() {
            return Err(RsError::InvalidParameters(
                "cannot encode an empty message".to_string(),
            ));
        }
        let poly = message_polynomial(message);
        debug!(
            "Encoding k = {} symbols into n = {} positions",
            message.len(),
            self.points.len()
        );
        Codeword::new(
            self.points
                .iter()
                .map(|&a| (a, poly.evaluate(a)))
                .collect(),
        )
    }
}

/// `m_0 + m_1 X + ... + m_{k-1} X^{k-1}`
pub fn message_polynomial<const P: u32>(message: &[Galois<P>]) -> Poly<P> {
    Poly::new(message.to_vec())
}
