//! Reed-Solomon codes over GF(257) with unique and list decoding
//!
//! - [`galois`], [`poly`]: field and polynomial arithmetic
//! - [`matrix`]: linear systems and null spaces over the field
//! - [`factor`]: bivariate factorization into `Y - P(X)` factors
//! - [`reed_solomon`]: encoder, Berlekamp-Welch and the list decoder
//! - [`corruption`], [`session`], [`reporters`]: error injection and end-to-end runs

pub mod args;
pub mod corruption;
pub mod error;
pub mod factor;
pub mod galois;
pub mod matrix;
pub mod poly;
pub mod reed_solomon;
pub mod reporters;
pub mod session;

pub use args::parse_args;
pub use error::{Result, RsError};
pub use galois::{Galois, Gf257, FIELD_PRIME};
pub use poly::{BiPoly, Poly};
pub use reed_solomon::{
    berlekamp_welch, list_decode, unique_decode, Codeword, Encoder, ListDecoder,
    ListDecoderConfig, UniqueDecoding,
};
