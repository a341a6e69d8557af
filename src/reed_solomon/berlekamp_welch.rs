//! Unique decoding with the Berlekamp-Welch algorithm
//!
//! Given `n` received pairs `(a_i, y_i)`, a message length `k` and an error
//! budget `e`, look for a monic error locator `E(X)` of degree `e` and a
//! numerator `N(X)` of degree `< e + k` with
//!
//! ```text
//! y_i * E(a_i) = N(a_i)    for every i
//! ```
//!
//! Fixing the leading coefficient of `E` to one leaves `2e + k` unknowns:
//!
//! ```text
//! columns:  e_0 .. e_{e-1} | n_0 .. n_{e+k-1}
//! row i:    y_i a_i^j      | -a_i^j           = -y_i a_i^e
//! ```
//!
//! When `n >= 2e + k` and at most `e` symbols are wrong, every solution gives the
//! same quotient `N / E`, which is the message polynomial. The quotient must be
//! exact and must disagree with at most `e` received symbols; anything else is
//! reported as a failure rather than returned.

use super::types::{validate_decoder_input, Codeword};
use crate::error::{Result, RsError};
use crate::galois::Galois;
use crate::matrix::Matrix;
use crate::poly::Poly;
use log::{debug, warn};

/// Successful unique decoding
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniqueDecoding<const P: u32> {
    /// Recovered message polynomial `N / E`
    pub message: Poly<P>,
    /// Monic error locator `E(X)` from the solved system
    pub error_locator: Poly<P>,
    /// Positions where the received value disagrees with `message`
    pub error_positions: Vec<usize>,
}

/// Recover the message polynomial, discarding the decoding details
pub fn unique_decode<const P: u32>(codeword: &Codeword<P>, k: usize, e: usize) -> Result<Poly<P>> {
    berlekamp_welch(codeword, k, e).map(|decoding| decoding.message)
}

/// Run Berlekamp-Welch on `codeword` for a length-`k` message with up to `e` errors
pub fn berlekamp_welch<const P: u32>(
    codeword: &Codeword<P>,
    k: usize,
    e: usize,
) -> Result<UniqueDecoding<P>> {
    if e == 0 {
        return Err(RsError::NotApplicable);
    }
    validate_decoder_input(codeword, k)?;

    let n = codeword.len();
    if n < 2 * e + k {
        warn!(
            "n = {} < 2e + k = {}: unique decoding is not guaranteed",
            n,
            2 * e + k
        );
    }

    let (system, rhs) = build_system(codeword, k, e);
    debug!(
        "Berlekamp-Welch: {}x{} system for k = {}, e = {}",
        system.rows(),
        system.cols(),
        k,
        e
    );

    let solution = system.solve(&rhs).map_err(|err| match err {
        RsError::Inconsistent { .. } => RsError::Unsolvable { errors: e },
        other => other,
    })?;
    let (error_locator, numerator) = split_solution(&solution, e);

    let (message, remainder) = numerator.div_rem(&error_locator)?;
    if let Some(remainder_degree) = remainder.degree() {
        debug!("N(X) = {} is not divisible by E(X) = {}", numerator, error_locator);
        return Err(RsError::NotDivisible { remainder_degree });
    }

    let error_positions = codeword.mismatched_positions(&message);
    if error_positions.len() > e {
        debug!(
            "Rejecting {}: {} mismatches exceed e = {}",
            message,
            error_positions.len(),
            e
        );
        return Err(RsError::TooManyErrors {
            mismatches: error_positions.len(),
            budget: e,
        });
    }

    debug!("Recovered {} with errors at {:?}", message, error_positions);
    Ok(UniqueDecoding {
        message,
        error_locator,
        error_positions,
    })
}

/// Linear system `A x = b` over the free coefficients of `E` and all of `N`
fn build_system<const P: u32>(
    codeword: &Codeword<P>,
    k: usize,
    e: usize,
) -> (Matrix<P>, Vec<Galois<P>>) {
    let mut matrix = Matrix::new(codeword.len(), 2 * e + k);
    let mut rhs = Vec::with_capacity(codeword.len());

    for (row, &(a, y)) in codeword.pairs().iter().enumerate() {
        let mut power = Galois::ONE;
        for col in 0..e + k {
            if col < e {
                matrix.set(row, col, y * power);
            }
            matrix.set(row, e + col, -power);
            power *= a;
        }
        // power == a^(e + k) here; the right-hand side needs a^e
        rhs.push(-(y * a.pow(e as u64)));
    }

    (matrix, rhs)
}

/// Split a solution vector into `(E, N)`, restoring the fixed leading 1 of `E`
fn split_solution<const P: u32>(solution: &[Galois<P>], e: usize) -> (Poly<P>, Poly<P>) {
    let mut locator = solution[..e].to_vec();
    locator.push(Galois::ONE);
    (Poly::new(locator), Poly::new(solution[e..].to_vec()))
}
