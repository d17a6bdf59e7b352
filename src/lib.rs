//! General-purpose Reed-Solomon codec over binary extension fields GF(2^m)
//!
//! ```
//! use rscodec::{CodecParams, ReedSolomon};
//!
//! let rs = ReedSolomon::from_params(CodecParams::ecc200(5)).unwrap();
//! let mut codeword = [142u8, 164, 186, 0, 0, 0, 0, 0];
//! rs.encode_in_place(3, &mut codeword).unwrap();
//! assert_eq!(&codeword[3..], &[114, 25, 5, 88, 102]);
//!
//! codeword[1] = 0;
//! assert_eq!(rs.correct(3, &mut codeword), Ok(1));
//! assert_eq!(codeword[1], 164);
//! ```

pub mod args;
pub mod reed_solomon;

pub use args::parse_args;
pub use reed_solomon::{
    CodecParams, Decoder, GaloisField, ReedSolomon, ReedSolomonBuilder, RsError, RsResult, Symbol,
    Uncorrectable,
};
