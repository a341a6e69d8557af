//! Error types for Reed-Solomon encoding and decoding

use thiserror::Error;

/// Errors that can occur while encoding, corrupting or decoding a codeword
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Multiplicative inverse of zero requested
    #[error("Attempted to invert zero in GF({modulus})")]
    ZeroInverse { modulus: u32 },

    /// Polynomial division by the zero polynomial
    #[error("Polynomial division by the zero polynomial")]
    DivisionByZero,

    /// Linear system has no solution
    #[error("Linear system is inconsistent: row {row} reduces to 0 = nonzero")]
    Inconsistent { row: usize },

    /// Berlekamp-Welch system has no solution
    #[error("Berlekamp-Welch system is unsolvable for e = {errors}")]
    Unsolvable { errors: usize },

    /// Berlekamp-Welch quotient N(X) / E(X) left a remainder
    #[error("N(X) is not divisible by E(X): remainder has degree {remainder_degree}")]
    NotDivisible { remainder_degree: usize },

    /// Recovered polynomial disagrees with too many received symbols
    #[error("Candidate disagrees with {mismatches} positions, budget is {budget}")]
    TooManyErrors { mismatches: usize, budget: usize },

    /// Unique decoding requested with an error budget of zero
    #[error("Unique decoding requires e >= 1 (got e = 0)")]
    NotApplicable,

    /// Malformed encoder/decoder input
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Two codeword positions share an evaluation point
    #[error("Evaluation point {point} appears more than once")]
    DuplicateEvaluationPoint { point: u32 },

    /// Decoded coefficient does not fit the byte alphabet
    #[error("Coefficient {value} at position {position} is not a byte symbol")]
    SymbolOutOfRange { position: usize, value: u32 },

    /// More corruptions requested than the codeword has positions
    #[error("Cannot corrupt {requested} positions of a length-{length} codeword")]
    CorruptionOutOfRange { requested: usize, length: usize },
}

/// Type alias for Result with RsError
pub type Result<T> = std::result::Result<T, RsError>;
