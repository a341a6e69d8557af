//! Univariate polynomials over GF(P)
//!
//! Coefficients are stored in ascending order of exponent (`coeffs[i]` is the
//! coefficient of `x^i`) with trailing zeros trimmed, so the representation is
//! canonical and the derived `Eq`/`Hash` can deduplicate decoded candidates.

use crate::error::{Result, RsError};
use crate::galois::Galois;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Polynomial in one variable with coefficients in GF(P)
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Poly<const P: u32> {
    coeffs: Vec<Galois<P>>,
}

impl<const P: u32> Poly<P> {
    /// Build a polynomial from ascending coefficients, trimming trailing zeros
    pub fn new(coeffs: Vec<Galois<P>>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn constant(c: Galois<P>) -> Self {
        Self::new(vec![c])
    }

    /// The polynomial `x`
    pub fn x() -> Self {
        Self::monomial(Galois::ONE, 1)
    }

    /// `c * x^n`
    pub fn monomial(c: Galois<P>, n: usize) -> Self {
        let mut coeffs = vec![Galois::ZERO; n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Monic polynomial with exactly the given roots: `(x - r_0)(x - r_1)...`
    pub fn from_roots(roots: &[Galois<P>]) -> Self {
        roots.iter().fold(Self::constant(Galois::ONE), |acc, &r| {
            &acc * &Self::new(vec![-r, Galois::ONE])
        })
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree, or `None` for the zero polynomial
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn leading_coeff(&self) -> Option<Galois<P>> {
        self.coeffs.last().copied()
    }

    /// Coefficient of `x^i` (zero beyond the degree)
    pub fn coeff(&self, i: usize) -> Galois<P> {
        self.coeffs.get(i).copied().unwrap_or(Galois::ZERO)
    }

    pub fn coefficients(&self) -> &[Galois<P>] {
        &self.coeffs
    }

    /// Horner evaluation at `x`
    pub fn evaluate(&self, x: Galois<P>) -> Galois<P> {
        self.coeffs
            .iter()
            .rev()
            .fold(Galois::ZERO, |acc, &c| acc * x + c)
    }

    /// Multiply every coefficient by `c`
    pub fn scale(&self, c: Galois<P>) -> Self {
        Self::new(self.coeffs.iter().map(|&a| a * c).collect())
    }

    /// Multiply by `x^n`
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![Galois::ZERO; n];
        coeffs.extend_from_slice(&self.coeffs);
        Self { coeffs }
    }

    /// Number of trailing zero coefficients, i.e. the largest `r` with `x^r | self`
    pub fn x_valuation(&self) -> Option<usize> {
        self.coeffs.iter().position(|c| !c.is_zero())
    }

    /// Divide by `x^n`, dropping the `n` lowest coefficients
    pub fn unshift(&self, n: usize) -> Self {
        Self::new(self.coeffs.iter().skip(n).copied().collect())
    }

    /// Scale so the leading coefficient is one; the zero polynomial stays zero
    pub fn monic(&self) -> Result<Self> {
        match self.leading_coeff() {
            None => Ok(Self::zero()),
            Some(lc) => Ok(self.scale(lc.inverse()?)),
        }
    }

    /// Long division: returns `(quotient, remainder)` with
    /// `self = quotient * divisor + remainder` and `deg(remainder) < deg(divisor)`
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let divisor_deg = divisor.degree().ok_or(RsError::DivisionByZero)?;
        let lc_inv = divisor
            .leading_coeff()
            .ok_or(RsError::DivisionByZero)?
            .inverse()?;

        let self_deg = match self.degree() {
            Some(d) if d >= divisor_deg => d,
            _ => return Ok((Self::zero(), self.clone())),
        };

        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![Galois::ZERO; self_deg - divisor_deg + 1];

        for shift in (0..quotient.len()).rev() {
            let coeff = remainder[shift + divisor_deg] * lc_inv;
            if coeff.is_zero() {
                continue;
            }
            quotient[shift] = coeff;
            for (i, &d) in divisor.coeffs.iter().enumerate() {
                remainder[shift + i] -= coeff * d;
            }
        }

        Ok((Self::new(quotient), Self::new(remainder)))
    }

    /// Monic greatest common divisor (zero only if both inputs are zero)
    pub fn gcd(a: &Self, b: &Self) -> Result<Self> {
        let mut a = a.clone();
        let mut b = b.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b)?;
            a = b;
            b = r;
        }
        a.monic()
    }

    /// All roots in GF(P), found by exhaustive evaluation over the field
    pub fn roots(&self) -> Vec<Galois<P>> {
        let Some(degree) = self.degree() else {
            return Vec::new();
        };
        let mut roots = Vec::new();
        for x in Galois::<P>::elements() {
            if roots.len() == degree {
                break;
            }
            if self.evaluate(x).is_zero() {
                roots.push(x);
            }
        }
        roots
    }

    fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }
}

impl<const P: u32> Add<&Poly<P>> for &Poly<P> {
    type Output = Poly<P>;

    fn add(self, rhs: &Poly<P>) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Poly::new((0..len).map(|i| self.coeff(i) + rhs.coeff(i)).collect())
    }
}

impl<const P: u32> Add for Poly<P> {
    type Output = Poly<P>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<const P: u32> Neg for &Poly<P> {
    type Output = Poly<P>;

    fn neg(self) -> Self::Output {
        Poly {
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
        }
    }
}

impl<const P: u32> Neg for Poly<P> {
    type Output = Poly<P>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<const P: u32> Sub<&Poly<P>> for &Poly<P> {
    type Output = Poly<P>;

    fn sub(self, rhs: &Poly<P>) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Poly::new((0..len).map(|i| self.coeff(i) - rhs.coeff(i)).collect())
    }
}

impl<const P: u32> Sub for Poly<P> {
    type Output = Poly<P>;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<const P: u32> Mul<&Poly<P>> for &Poly<P> {
    type Output = Poly<P>;

    fn mul(self, rhs: &Poly<P>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }
        let mut coeffs = vec![Galois::ZERO; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Poly::new(coeffs)
    }
}

impl<const P: u32> Mul for Poly<P> {
    type Output = Poly<P>;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<const P: u32> fmt::Debug for Poly<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<const P: u32> fmt::Display for Poly<P> {
    /// Highest degree first, e.g. `99*x^2 + 98*x + 97`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                1 if coeff == Galois::ONE => write!(f, "x")?,
                1 => write!(f, "{}*x", coeff)?,
                _ if coeff == Galois::ONE => write!(f, "x^{}", i)?,
                _ => write!(f, "{}*x^{}", coeff, i)?,
            }
        }
        Ok(())
    }
}
