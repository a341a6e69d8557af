//! Bivariate factorization over GF(P)
//!
//! The decoders only care about factors of the shape `Y - P(X)`, so instead of a
//! full irreducible decomposition this module finds *every* such factor and
//! reports what is left over unsplit:
//!
//! ```text
//! Q(X, Y) = unit * content(X) * Π (Y - P_i(X))^m_i * residual(X, Y)
//! ```
//!
//! `content` is the monic gcd of the `Y`-coefficients, each `P_i` is a distinct
//! polynomial root of `Q` viewed as a polynomial in `Y` over GF(P)[X], and
//! `residual` (omitted when constant) has no root of that shape.
//!
//! ## Root search
//!
//! Roots are found with the Roth-Ruckenstein recursion. A root `f(X)` satisfies
//! `Q(0, f(0)) = 0` once all common powers of `X` are divided out, so its constant
//! term is a root of the univariate `Q(0, Y)`. Substituting `Y -> X*Y + f(0)`
//! turns the remaining coefficients of `f` into a root of the new polynomial, one
//! coefficient per level. The depth is bounded by `deg_X(Q)`, which bounds the
//! degree of any `f` with `(Y - f) | Q`.

use crate::error::Result;
use crate::galois::Galois;
use crate::poly::{BiPoly, Poly};
use log::trace;
use smallvec::SmallVec;

/// Factors of a bivariate polynomial with multiplicities
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization<const P: u32> {
    unit: Galois<P>,
    factors: SmallVec<[(BiPoly<P>, usize); 4]>,
}

impl<const P: u32> Factorization<P> {
    /// Scalar multiplying the product of the factors
    pub fn unit(&self) -> Galois<P> {
        self.unit
    }

    /// `(factor, multiplicity)` pairs
    pub fn factors(&self) -> &[(BiPoly<P>, usize)] {
        &self.factors
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Polynomials `P(X)` for every factor of the exact shape `Y - P(X)`
    pub fn y_linear_roots(&self) -> impl Iterator<Item = Poly<P>> + '_ {
        self.factors
            .iter()
            .filter_map(|(factor, _)| as_y_minus(factor))
    }

    /// Multiply everything back together
    pub fn product(&self) -> BiPoly<P> {
        let start = BiPoly::from_x(Poly::constant(self.unit));
        self.factors.iter().fold(start, |acc, (factor, m)| {
            (0..*m).fold(acc, |acc, _| &acc * factor)
        })
    }
}

/// If `factor` is exactly `Y - P(X)` (unit `Y` coefficient, no cross terms),
/// return `P`
pub fn as_y_minus<const P: u32>(factor: &BiPoly<P>) -> Option<Poly<P>> {
    match factor.y_coefficients() {
        [constant, y] if *y == Poly::constant(Galois::ONE) => Some(-constant),
        _ => None,
    }
}

/// Factor `q`, reporting every `Y - P(X)` factor with its multiplicity.
///
/// The zero polynomial factors as an empty product with a zero unit.
pub fn factor<const P: u32>(q: &BiPoly<P>) -> Result<Factorization<P>> {
    let mut factors = SmallVec::new();
    if q.is_zero() {
        return Ok(Factorization {
            unit: Galois::ZERO,
            factors,
        });
    }

    let content = q.content()?;
    let mut remaining = q.div_exact_x(&content)?;
    if content.degree().is_some_and(|d| d > 0) {
        factors.push((BiPoly::from_x(content), 1));
    }

    let bound = remaining.degree_x().unwrap_or(0);
    for root in y_roots(&remaining, bound)? {
        let mut multiplicity = 0;
        loop {
            let (quotient, remainder) = remaining.div_y_minus(&root);
            if !remainder.is_zero() {
                break;
            }
            remaining = quotient;
            multiplicity += 1;
        }
        if multiplicity > 0 {
            factors.push((BiPoly::y_minus(&root), multiplicity));
        }
    }

    // Pull the leading scalar out of whatever is left
    let unit = remaining
        .y_coefficients()
        .last()
        .and_then(Poly::leading_coeff)
        .unwrap_or(Galois::ONE);
    let residual = remaining.scale(unit.inverse()?);
    if residual.degree_y().is_some_and(|d| d > 0) || residual.degree_x().is_some_and(|d| d > 0)
    {
        factors.push((residual, 1));
    }

    trace!("factor: {} -> {} factors", q, factors.len());
    Ok(Factorization { unit, factors })
}

/// Every `f(X)` with `deg f <= max_degree` and `q(X, f(X)) = 0`
pub fn y_roots<const P: u32>(q: &BiPoly<P>, max_degree: usize) -> Result<Vec<Poly<P>>> {
    let mut found = Vec::new();
    if !q.is_zero() {
        search(q.clone(), Vec::new(), max_degree, &mut found);
    }
    found.sort();
    found.dedup();
    Ok(found)
}

fn strip_x<const P: u32>(q: BiPoly<P>) -> BiPoly<P> {
    match q.x_valuation() {
        Some(r) if r > 0 => q.unshift_x(r),
        _ => q,
    }
}

fn search<const P: u32>(
    q: BiPoly<P>,
    prefix: Vec<Galois<P>>,
    max_degree: usize,
    found: &mut Vec<Poly<P>>,
) {
    let mut q = strip_x(q);

    // Y | q means the prefix itself is a root
    if let Some(s) = q.y_valuation().filter(|&s| s > 0) {
        found.push(Poly::new(prefix.clone()));
        q = strip_x(q.unshift_y(s));
    }

    if prefix.len() > max_degree || !q.degree_y().is_some_and(|d| d > 0) {
        return;
    }

    for gamma in q.at_x_zero().roots() {
        let mut next = prefix.clone();
        next.push(gamma);
        search(q.substitute_shifted(gamma), next, max_degree, found);
    }
}
