//! Sudan-style list decoding
//!
//! ## Algorithm
//!
//! 1. Interpolate: find bivariate `Q(X, Y) = Σ c_ij X^i Y^j` (`i <= deg_x`,
//!    `j <= deg_y`) vanishing at every received pair. Each null space basis
//!    vector of the `n x (deg_x + 1)(deg_y + 1)` system is one candidate `Q`.
//! 2. Factor every candidate and keep factors of the exact shape `Y - P(X)`
//!    with `deg P < k`.
//! 3. Keep `P` only if it disagrees with at most `e` received symbols.
//! 4. Deduplicate across candidates.
//!
//! ## Radius
//!
//! For the true message `P`, `Q(X, P(X))` has degree at most
//! `deg_x + (k - 1) deg_y` and vanishes at every uncorrupted position. With more
//! uncorrupted positions than that bound it is identically zero, so `Y - P`
//! divides every candidate `Q` and `P` is in the list.

use super::config::ListDecoderConfig;
use super::types::{validate_decoder_input, Codeword};
use crate::error::Result;
use crate::factor::factor;
use crate::galois::Galois;
use crate::matrix::Matrix;
use crate::poly::{BiPoly, Poly};
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::FxHashSet as HashSet;

/// Degree bounds of the interpolation polynomial, derived from `n` and `k`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolationDegrees {
    pub deg_x: usize,
    pub deg_y: usize,
}

impl InterpolationDegrees {
    /// `deg_x = floor(sqrt(n (k - 1)))`, `deg_y = floor(n / sqrt(n (k - 1)))`,
    /// or `deg_y = 1` when `deg_x = 0`. Computed with integer square roots.
    pub fn for_code(n: usize, k: usize) -> Self {
        let m = n * k.saturating_sub(1);
        let deg_x = isqrt(m);
        if deg_x == 0 {
            return Self { deg_x, deg_y: 1 };
        }
        // floor(n / sqrt(m)) is the largest d with d^2 * m <= n^2
        let deg_y = isqrt((n * n) / m);
        Self { deg_x, deg_y }
    }

    /// Number of unknown coefficients `(deg_x + 1)(deg_y + 1)`
    pub fn unknowns(&self) -> usize {
        (self.deg_x + 1) * (self.deg_y + 1)
    }

    /// Upper bound on `deg Q(X, P(X))` for `deg P < k`
    pub fn agreement_bound(&self, k: usize) -> usize {
        self.deg_x + k.saturating_sub(1) * self.deg_y
    }

    /// Largest number of corrupted symbols for which the true message is
    /// guaranteed to be listed (given an error budget at least as large).
    ///
    /// `None` when even a clean codeword carries no guarantee: the system may
    /// have no nonzero solution, or the agreement bound reaches `n`.
    pub fn radius(&self, n: usize, k: usize) -> Option<usize> {
        let bound = self.agreement_bound(k);
        if self.unknowns() > n && n > bound {
            Some(n - bound - 1)
        } else {
            None
        }
    }
}

/// Largest `r` with `r * r <= value`
fn isqrt(value: usize) -> usize {
    if value < 2 {
        return value;
    }
    // Newton's iteration from above converges to the floor
    let mut x = value;
    let mut y = (x + value / x) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

/// List decoder with its parallelism configuration
#[derive(Debug, Clone, Default)]
pub struct ListDecoder {
    config: ListDecoderConfig,
}

impl ListDecoder {
    pub fn new(config: ListDecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ListDecoderConfig {
        &self.config
    }

    /// All message polynomials of degree `< k` within `e` errors that the
    /// interpolation step can see, deduplicated and sorted by coefficients.
    ///
    /// An empty list is a successful result.
    pub fn decode<const P: u32>(
        &self,
        codeword: &Codeword<P>,
        k: usize,
        e: usize,
    ) -> Result<Vec<Poly<P>>> {
        validate_decoder_input(codeword, k)?;

        let n = codeword.len();
        let degrees = InterpolationDegrees::for_code(n, k);
        debug!(
            "List decoding: n = {}, k = {}, e = {}, deg_x = {}, deg_y = {}, radius = {:?}",
            n,
            k,
            e,
            degrees.deg_x,
            degrees.deg_y,
            degrees.radius(n, k)
        );

        let system = interpolation_system(codeword, degrees);
        let basis = system.kernel()?;
        debug!(
            "Interpolation system {}x{} has {} candidate polynomials",
            system.rows(),
            system.cols(),
            basis.len()
        );

        let per_candidate = |vector: &Vec<Galois<P>>| -> Result<Vec<Poly<P>>> {
            let q = BiPoly::from_flat(vector, degrees.deg_x, degrees.deg_y)?;
            candidates_from(&q, codeword, k, e)
        };

        let found: Vec<Vec<Poly<P>>> = if self.config.parallel {
            basis.par_iter().map(per_candidate).collect::<Result<_>>()?
        } else {
            basis.iter().map(per_candidate).collect::<Result<_>>()?
        };

        let unique: HashSet<Poly<P>> = found.into_iter().flatten().collect();
        let mut list: Vec<Poly<P>> = unique.into_iter().collect();
        list.sort();
        debug!("List decoding produced {} candidates", list.len());
        Ok(list)
    }
}

/// List decode with the default configuration
pub fn list_decode<const P: u32>(
    codeword: &Codeword<P>,
    k: usize,
    e: usize,
) -> Result<Vec<Poly<P>>> {
    ListDecoder::default().decode(codeword, k, e)
}

/// One row per received pair: the monomials `a^i y^j` in `(deg_y + 1) * i + j` order
fn interpolation_system<const P: u32>(
    codeword: &Codeword<P>,
    degrees: InterpolationDegrees,
) -> Matrix<P> {
    let mut matrix = Matrix::new(codeword.len(), degrees.unknowns());
    for (row, &(a, y)) in codeword.pairs().iter().enumerate() {
        let mut x_power = Galois::ONE;
        for i in 0..=degrees.deg_x {
            let mut monomial = x_power;
            for j in 0..=degrees.deg_y {
                matrix.set(row, (degrees.deg_y + 1) * i + j, monomial);
                monomial *= y;
            }
            x_power *= a;
        }
    }
    matrix
}

/// Factor one interpolation polynomial and keep the validated message candidates
fn candidates_from<const P: u32>(
    q: &BiPoly<P>,
    codeword: &Codeword<P>,
    k: usize,
    e: usize,
) -> Result<Vec<Poly<P>>> {
    let factorization = factor(q)?;
    let accepted = factorization
        .y_linear_roots()
        .filter(|p| {
            if p.degree().is_some_and(|d| d >= k) {
                trace!("Rejecting Y - ({}): degree >= k = {}", p, k);
                return false;
            }
            let mismatches = codeword.mismatches(p);
            if mismatches > e {
                trace!("Rejecting {}: {} mismatches exceed e = {}", p, mismatches, e);
                return false;
            }
            true
        })
        .collect();
    Ok(accepted)
}
