//! Conversions between text messages and GF(257) symbols
//!
//! The symbol alphabet is the byte range 0..=255. Each character of a message
//! must have a code point in that range (ASCII or Latin-1); it becomes one symbol,
//! and symbol `i` is the coefficient of `X^i` in the message polynomial.

use crate::error::{Result, RsError};
use crate::galois::{Gf257, FIELD_PRIME};
use crate::poly::Poly;

/// Map each character to its byte code as a field element
pub fn symbols_from_text(text: &str) -> Result<Vec<Gf257>> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(ch)
                .map(Gf257::from)
                .map_err(|_| RsError::SymbolOutOfRange {
                    position,
                    value: ch as u32,
                })
        })
        .collect()
}

/// Read the first `k` coefficients of a decoded polynomial back as symbols
pub fn symbols_from_polynomial(poly: &Poly<FIELD_PRIME>, k: usize) -> Result<Vec<Gf257>> {
    if let Some(degree) = poly.degree().filter(|&d| d >= k) {
        return Err(RsError::InvalidParameters(format!(
            "polynomial of degree {} does not encode a length-{} message",
            degree, k
        )));
    }
    Ok((0..k).map(|i| poly.coeff(i)).collect())
}

/// Rebuild the text carried by a decoded polynomial of degree < `k`
pub fn text_from_polynomial(poly: &Poly<FIELD_PRIME>, k: usize) -> Result<String> {
    symbols_from_polynomial(poly, k)?
        .into_iter()
        .enumerate()
        .map(|(position, symbol)| {
            u8::try_from(symbol.value())
                .map(char::from)
                .map_err(|_| RsError::SymbolOutOfRange {
                    position,
                    value: symbol.value(),
                })
        })
        .collect()
}
