//! Reed-Solomon codes over a prime field
//!
//! Messages of `k` symbols are encoded by evaluating their polynomial at `n`
//! distinct points. Two decoders are provided:
//!
//! - [`berlekamp_welch`]: unique decoding up to `e` errors when `n >= 2e + k`
//! - [`ListDecoder`]: interpolation and factorization, returning every candidate
//!   message within the error budget

pub mod berlekamp_welch;
pub mod config;
pub mod encoder;
pub mod list_decoder;
pub mod message;
pub mod types;

pub use berlekamp_welch::{berlekamp_welch, unique_decode, UniqueDecoding};
pub use config::ListDecoderConfig;
pub use encoder::{message_polynomial, Encoder};
pub use list_decoder::{list_decode, InterpolationDegrees, ListDecoder};
pub use message::{symbols_from_polynomial, symbols_from_text, text_from_polynomial};
pub use types::{default_points, Codeword};
