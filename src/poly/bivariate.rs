//! Bivariate polynomials over GF(P)
//!
//! A bivariate polynomial `Q(X, Y) = Σ c_ij X^i Y^j` is stored as a polynomial in
//! `Y` whose coefficients are univariate polynomials in `X`: `rows[j]` holds
//! `Σ_i c_ij X^i`. Trailing zero rows are trimmed so the representation is
//! canonical. The `(i, j) -> c_ij` mapping view is available via
//! [`BiPoly::coefficient`] and [`BiPoly::terms`].

use super::univariate::Poly;
use crate::error::{Result, RsError};
use crate::galois::Galois;
use std::fmt;
use std::ops::Mul;

/// Polynomial in `X` and `Y` with coefficients in GF(P)
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BiPoly<const P: u32> {
    rows: Vec<Poly<P>>,
}

impl<const P: u32> BiPoly<P> {
    /// Build from `Y`-coefficients (`rows[j]` multiplies `Y^j`)
    pub fn new(rows: Vec<Poly<P>>) -> Self {
        let mut poly = Self { rows };
        poly.normalize();
        poly
    }

    pub fn zero() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build from `((x_exponent, y_exponent), coefficient)` terms; repeated
    /// exponent pairs accumulate
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = ((usize, usize), Galois<P>)>,
    {
        let mut grid: Vec<Vec<Galois<P>>> = Vec::new();
        for ((i, j), c) in terms {
            if grid.len() <= j {
                grid.resize_with(j + 1, Vec::new);
            }
            let row = &mut grid[j];
            if row.len() <= i {
                row.resize(i + 1, Galois::ZERO);
            }
            row[i] += c;
        }
        Self::new(grid.into_iter().map(Poly::new).collect())
    }

    /// Build from a flattened coefficient vector laid out as
    /// `coeffs[(deg_y + 1) * i + j] = c_ij` for `i <= deg_x`, `j <= deg_y`
    pub fn from_flat(coeffs: &[Galois<P>], deg_x: usize, deg_y: usize) -> Result<Self> {
        let expected = (deg_x + 1) * (deg_y + 1);
        if coeffs.len() != expected {
            return Err(RsError::InvalidParameters(format!(
                "expected {} coefficients for deg_x = {}, deg_y = {}, got {}",
                expected,
                deg_x,
                deg_y,
                coeffs.len()
            )));
        }
        let rows = (0..=deg_y)
            .map(|j| Poly::new((0..=deg_x).map(|i| coeffs[(deg_y + 1) * i + j]).collect()))
            .collect();
        Ok(Self::new(rows))
    }

    /// The polynomial `Y - p(X)`
    pub fn y_minus(p: &Poly<P>) -> Self {
        Self::new(vec![-p, Poly::constant(Galois::ONE)])
    }

    /// Embed a polynomial in `X` alone
    pub fn from_x(p: Poly<P>) -> Self {
        Self::new(vec![p])
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.rows.is_empty()
    }

    /// Degree in `Y`, `None` for the zero polynomial
    pub fn degree_y(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    /// Degree in `X`, `None` for the zero polynomial
    pub fn degree_x(&self) -> Option<usize> {
        self.rows.iter().filter_map(Poly::degree).max()
    }

    /// Coefficients in `X` of each power of `Y`
    pub fn y_coefficients(&self) -> &[Poly<P>] {
        &self.rows
    }

    /// Coefficient of `X^i Y^j`
    pub fn coefficient(&self, i: usize, j: usize) -> Galois<P> {
        self.rows.get(j).map_or(Galois::ZERO, |row| row.coeff(i))
    }

    /// Nonzero terms as `((x_exponent, y_exponent), coefficient)`
    pub fn terms(&self) -> impl Iterator<Item = ((usize, usize), Galois<P>)> + '_ {
        self.rows.iter().enumerate().flat_map(|(j, row)| {
            row.coefficients()
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_zero())
                .map(move |(i, &c)| ((i, j), c))
        })
    }

    /// Evaluate at `(x, y)`
    pub fn evaluate2(&self, x: Galois<P>, y: Galois<P>) -> Galois<P> {
        self.rows
            .iter()
            .rev()
            .fold(Galois::ZERO, |acc, row| acc * y + row.evaluate(x))
    }

    /// Substitute `Y = p(X)`, giving the univariate `Q(X, p(X))`
    pub fn evaluate_y(&self, p: &Poly<P>) -> Poly<P> {
        self.rows
            .iter()
            .rev()
            .fold(Poly::zero(), |acc, row| &(&acc * p) + row)
    }

    pub fn scale(&self, c: Galois<P>) -> Self {
        Self::new(self.rows.iter().map(|row| row.scale(c)).collect())
    }

    /// Monic gcd of the `Y`-coefficients: the largest factor depending on `X` only
    pub fn content(&self) -> Result<Poly<P>> {
        self.rows
            .iter()
            .try_fold(Poly::zero(), |acc, row| Poly::gcd(&acc, row))
    }

    /// Exact division of every `Y`-coefficient by `divisor`
    pub fn div_exact_x(&self, divisor: &Poly<P>) -> Result<Self> {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let (q, r) = row.div_rem(divisor)?;
                match r.degree() {
                    None => Ok(q),
                    Some(remainder_degree) => Err(RsError::NotDivisible { remainder_degree }),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rows))
    }

    /// Largest `r` such that `X^r` divides every term
    pub fn x_valuation(&self) -> Option<usize> {
        self.rows.iter().filter_map(Poly::x_valuation).min()
    }

    /// Largest `s` such that `Y^s` divides every term
    pub fn y_valuation(&self) -> Option<usize> {
        self.rows.iter().position(|row| !row.is_zero())
    }

    /// Divide by `X^r`, assuming `X^r` divides every term
    pub fn unshift_x(&self, r: usize) -> Self {
        Self::new(self.rows.iter().map(|row| row.unshift(r)).collect())
    }

    /// Divide by `Y^s`, assuming `Y^s` divides every term
    pub fn unshift_y(&self, s: usize) -> Self {
        Self::new(self.rows.iter().skip(s).cloned().collect())
    }

    /// `Q(0, Y)` as a univariate polynomial in `Y`
    pub fn at_x_zero(&self) -> Poly<P> {
        Poly::new(self.rows.iter().map(|row| row.coeff(0)).collect())
    }

    /// Multiply by the `Y`-linear polynomial `a(X) * Y + b(X)`
    pub fn mul_linear(&self, a: &Poly<P>, b: &Poly<P>) -> Self {
        let mut rows = vec![Poly::zero(); self.rows.len() + 1];
        for (j, row) in self.rows.iter().enumerate() {
            rows[j] = &rows[j] + &(row * b);
            rows[j + 1] = &rows[j + 1] + &(row * a);
        }
        Self::new(rows)
    }

    /// `Q(X, X * Y + gamma)`
    pub fn substitute_shifted(&self, gamma: Galois<P>) -> Self {
        let x = Poly::x();
        let shift = Poly::constant(gamma);
        self.rows.iter().rev().fold(Self::zero(), |acc, row| {
            let mut next = acc.mul_linear(&x, &shift);
            next.add_to_row(0, row);
            next
        })
    }

    /// Synthetic division by the monic `Y - p(X)`:
    /// returns `(quotient, remainder)` with `self = quotient * (Y - p) + remainder`
    pub fn div_y_minus(&self, p: &Poly<P>) -> (Self, Poly<P>) {
        let Some(top) = self.degree_y() else {
            return (Self::zero(), Poly::zero());
        };
        if top == 0 {
            return (Self::zero(), self.rows[0].clone());
        }

        let mut quotient = vec![Poly::zero(); top];
        quotient[top - 1] = self.rows[top].clone();
        for j in (1..top).rev() {
            quotient[j - 1] = &self.rows[j] + &(p * &quotient[j]);
        }
        let remainder = &self.rows[0] + &(p * &quotient[0]);
        (Self::new(quotient), remainder)
    }

    fn add_to_row(&mut self, j: usize, p: &Poly<P>) {
        if self.rows.len() <= j {
            self.rows.resize(j + 1, Poly::zero());
        }
        self.rows[j] = &self.rows[j] + p;
        self.normalize();
    }

    fn normalize(&mut self) {
        while self.rows.last().is_some_and(Poly::is_zero) {
            self.rows.pop();
        }
    }
}

impl<const P: u32> Mul<&BiPoly<P>> for &BiPoly<P> {
    type Output = BiPoly<P>;

    fn mul(self, rhs: &BiPoly<P>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return BiPoly::zero();
        }
        let mut rows = vec![Poly::zero(); self.rows.len() + rhs.rows.len() - 1];
        for (j, a) in self.rows.iter().enumerate() {
            for (l, b) in rhs.rows.iter().enumerate() {
                rows[j + l] = &rows[j + l] + &(a * b);
            }
        }
        BiPoly::new(rows)
    }
}

impl<const P: u32> fmt::Debug for BiPoly<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<const P: u32> fmt::Display for BiPoly<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms: Vec<_> = self.terms().collect();
        // Highest total degree first, ties broken by higher Y power
        terms.sort_by(|((i1, j1), _), ((i2, j2), _)| (i2 + j2, j2).cmp(&(i1 + j1, j1)));

        for (n, ((i, j), c)) in terms.into_iter().enumerate() {
            if n > 0 {
                write!(f, " + ")?;
            }
            let mut parts = Vec::new();
            if c != Galois::ONE || (i == 0 && j == 0) {
                parts.push(c.to_string());
            }
            match i {
                0 => {}
                1 => parts.push("x".to_string()),
                _ => parts.push(format!("x^{}", i)),
            }
            match j {
                0 => {}
                1 => parts.push("y".to_string()),
                _ => parts.push(format!("y^{}", j)),
            }
            write!(f, "{}", parts.join("*"))?;
        }
        Ok(())
    }
}
