//! Prime field GF(p) arithmetic for Reed-Solomon operations
//!
//! ## Field
//!
//! Codewords live in the prime field **GF(257)**: every byte symbol 0..=255 is a
//! field element, and 257 is prime so every nonzero element is invertible.
//!
//! The modulus is a const generic parameter of [`Galois`] rather than process-wide
//! state. [`Gf257`] is the field used by the encoder and decoders; other small
//! primes (e.g. `Galois<7>`) can be instantiated for testing.
//!
//! ## Implementation Notes
//!
//! All values are kept reduced into `[0, P)`. Products are computed in `u64`
//! before reduction, so any `P < 2^32` is safe.

use crate::error::{Result, RsError};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Prime modulus of the field used by the codec
pub const FIELD_PRIME: u32 = 257;

/// Element of the prime field GF(P)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Galois<const P: u32> {
    value: u32,
}

impl<const P: u32> Galois<P> {
    pub const ZERO: Self = Self { value: 0 };
    pub const ONE: Self = Self { value: 1 % P };

    /// Create a field element, reducing `value` modulo P
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self { value: value % P }
    }

    /// Field modulus
    #[inline]
    pub const fn modulus() -> u32 {
        P
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Power operation by square-and-multiply
    pub fn pow(&self, mut exponent: u64) -> Self {
        let mut base = *self;
        let mut result = Self::ONE;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result *= base;
            }
            base *= base;
            exponent >>= 1;
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem: a^(P-2)
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(RsError::ZeroInverse { modulus: P });
        }
        Ok(self.pow(u64::from(P) - 2))
    }

    /// Division that reports a zero divisor instead of panicking
    pub fn checked_div(&self, rhs: Self) -> Result<Self> {
        Ok(*self * rhs.inverse()?)
    }

    /// Iterate over every element of the field in ascending order
    pub fn elements() -> impl Iterator<Item = Self> {
        (0..P).map(Self::new)
    }
}

impl<const P: u32> Add for Galois<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let sum = self.value as u64 + rhs.value as u64;
        Self {
            value: (sum % P as u64) as u32,
        }
    }
}

impl<const P: u32> AddAssign for Galois<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u32> Neg for Galois<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        if self.value == 0 {
            self
        } else {
            Self {
                value: P - self.value,
            }
        }
    }
}

impl<const P: u32> Sub for Galois<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u32> SubAssign for Galois<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u32> Mul for Galois<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let product = self.value as u64 * rhs.value as u64;
        Self {
            value: (product % P as u64) as u32,
        }
    }
}

impl<const P: u32> MulAssign for Galois<P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Conversion traits
impl<const P: u32> From<u8> for Galois<P> {
    fn from(value: u8) -> Self {
        Self::new(value as u32)
    }
}

impl<const P: u32> From<u32> for Galois<P> {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl<const P: u32> From<usize> for Galois<P> {
    fn from(value: usize) -> Self {
        Self::new((value % P as usize) as u32)
    }
}

impl<const P: u32> From<Galois<P>> for u32 {
    fn from(val: Galois<P>) -> Self {
        val.value
    }
}

impl<const P: u32> std::fmt::Display for Galois<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The field every codeword symbol lives in
pub type Gf257 = Galois<FIELD_PRIME>;

#[cfg(test)]
mod tests {
    use super::*;

    type Gf7 = Galois<7>;

    #[test]
    fn test_gf257_basic_ops() {
        let a = Gf257::new(200);
        let b = Gf257::new(100);

        assert_eq!((a + b).value(), 43);
        assert_eq!((b - a).value(), 157);
        assert_eq!((a * b).value(), 20000 % 257);
        assert_eq!((-a).value(), 57);
        assert_eq!(-Gf257::ZERO, Gf257::ZERO);
    }

    #[test]
    fn test_new_reduces() {
        assert_eq!(Gf257::new(257), Gf257::ZERO);
        assert_eq!(Gf257::new(514 + 3).value(), 3);
        assert_eq!(Gf7::from(15usize).value(), 1);
    }

    #[test]
    fn test_inverse_of_every_nonzero_element() {
        for a in Gf257::elements().skip(1) {
            let inv = a.inverse().unwrap();
            assert_eq!(a * inv, Gf257::ONE, "inverse failed for {}", a);
        }
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        assert_eq!(
            Gf257::ZERO.inverse(),
            Err(RsError::ZeroInverse { modulus: 257 })
        );
        assert!(Gf7::new(3).checked_div(Gf7::ZERO).is_err());
    }

    #[test]
    fn test_checked_div() {
        let a = Gf7::new(3);
        let b = Gf7::new(5);
        let q = a.checked_div(b).unwrap();
        assert_eq!(q * b, a);
    }

    #[test]
    fn test_pow() {
        let base = Gf257::new(3);
        assert_eq!(base.pow(0), Gf257::ONE);
        assert_eq!(base.pow(2), base * base);
        // Fermat: a^(p-1) = 1
        assert_eq!(base.pow(256), Gf257::ONE);
        assert_eq!(Gf257::ZERO.pow(0), Gf257::ONE);
        assert_eq!(Gf257::ZERO.pow(5), Gf257::ZERO);
    }

    #[test]
    fn test_elements_cover_field() {
        assert_eq!(Gf7::elements().count(), 7);
        assert_eq!(Gf257::elements().last(), Some(Gf257::new(256)));
    }
}
