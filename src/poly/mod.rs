//! Polynomial arithmetic over GF(P)
//!
//! - [`Poly`]: univariate polynomials (message, error-locator and numerator polynomials)
//! - [`BiPoly`]: bivariate interpolation polynomials used by the list decoder

pub mod bivariate;
pub mod univariate;

pub use bivariate::BiPoly;
pub use univariate::Poly;
