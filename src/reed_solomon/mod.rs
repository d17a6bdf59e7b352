//! Reed-Solomon error correction over GF(2^m)
//!
//! The field polynomial, parity length and first generator root are chosen at
//! configuration time, so one engine serves any code that fits in 16-bit
//! symbols. Encoding is systematic: parity follows the data unchanged.
//!
//! Decoding locates errors with Berlekamp-Massey and an exhaustive root search,
//! then fixes them with Forney's formula. Up to `parity_len / 2` symbol errors
//! are corrected. Beyond that the block is normally reported uncorrectable, but
//! an error pattern that lands within `parity_len / 2` symbols of a different
//! codeword is indistinguishable from a correctable one and will be
//! "corrected" to that codeword. This is a property of the code itself.

pub mod berlekamp;
pub mod builder;
pub mod chien;
pub mod codec;
pub mod decoder;
pub mod error;
pub mod forney;
pub mod galois;
pub mod generator;
pub mod symbol;
pub mod syndrome;
pub mod types;

pub use builder::ReedSolomonBuilder;
pub use codec::ReedSolomon;
pub use decoder::Decoder;
pub use error::{RsError, RsResult, Uncorrectable};
pub use galois::GaloisField;
pub use generator::GeneratorPolynomial;
pub use symbol::Symbol;
pub use types::{CodecParams, ECC200_POLYNOMIAL, ECC200_ROOT_OFFSET};
