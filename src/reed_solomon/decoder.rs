//! Read path: syndromes → locator/evaluator → roots → correction
//!
//! ```text
//! syndromes all zero ──────────────────────────────► Ok(0)
//!        │ nonzero
//!        ▼
//! Berlekamp-Massey ── 2L > parity_len ─────────────► TooManyErrors
//!        │
//!        ▼
//! root search ─────── count ≠ L / out of block ────► RootCountMismatch / RootOutOfRange
//!        │
//!        ▼
//! Forney magnitudes ─ zero magnitude ──────────────► ZeroMagnitude
//!        │
//!        ▼
//! apply corrections ───────────────────────────────► Ok(L)
//! ```
//!
//! A decoder owns the working buffers for one codec and reuses them on every
//! call. Nothing carries over between calls. Decoders are cheap to create, one
//! per thread is the intended use.

use super::berlekamp;
use super::chien;
use super::codec::ReedSolomon;
use super::error::{RsError, RsResult, Uncorrectable};
use super::forney;
use super::symbol::Symbol;
use super::syndrome;
use log::{debug, trace};

pub struct Decoder<'a> {
    codec: &'a ReedSolomon,
    syndromes: Vec<u16>,
    locator: Vec<u16>,
    evaluator: Vec<u16>,
    previous: Vec<u16>,
    scratch: Vec<u16>,
    roots: Vec<usize>,
    magnitudes: Vec<u16>,
}

impl<'a> Decoder<'a> {
    pub fn new(codec: &'a ReedSolomon) -> Self {
        let n = codec.parity_len();
        Self {
            codec,
            syndromes: vec![0; n],
            locator: vec![0; n + 1],
            evaluator: vec![0; n],
            previous: vec![0; n + 1],
            scratch: vec![0; n + 1],
            roots: Vec::with_capacity(n),
            magnitudes: Vec::with_capacity(n),
        }
    }

    pub fn codec(&self) -> &'a ReedSolomon {
        self.codec
    }

    /// Compute the syndromes of a received block, returning `true` when they
    /// are all zero
    pub fn syndromes<S: Symbol>(&mut self, data_len: usize, codeword: &[S]) -> RsResult<bool> {
        let received = self.codec.checked_codeword(data_len, codeword)?;
        Ok(syndrome::compute(
            self.codec.field(),
            self.codec.generator(),
            received,
            &mut self.syndromes,
        ))
    }

    /// Syndromes from the most recent call
    pub fn syndrome_values(&self) -> &[u16] {
        &self.syndromes
    }

    /// Correct the block in place and return the number of fixed symbols
    ///
    /// Only the first `data_len + parity_len` symbols are examined. On
    /// [`RsError::Uncorrectable`] the buffer is unchanged.
    pub fn correct<S: Symbol>(&mut self, data_len: usize, codeword: &mut [S]) -> RsResult<usize> {
        if self.syndromes(data_len, codeword)? {
            trace!("Syndromes all zero, no errors");
            return Ok(0);
        }

        let codec = self.codec;
        let field = codec.field();
        let parity_len = codec.parity_len();
        let len = data_len + parity_len;

        let errors = berlekamp::solve(
            field,
            &self.syndromes,
            &mut self.locator,
            &mut self.evaluator,
            &mut self.previous,
            &mut self.scratch,
        );
        trace!("Error locator degree {}", errors);

        if 2 * errors > parity_len {
            return Err(reject(Uncorrectable::TooManyErrors {
                errors,
                capacity: codec.capacity(),
            }));
        }

        chien::find_roots(field, &self.locator, errors, len, &mut self.roots).map_err(reject)?;
        trace!("Error degrees {:?}", self.roots);

        forney::compute_magnitudes(
            field,
            codec.generator().root_offset(),
            &self.locator,
            &self.evaluator,
            errors,
            &self.roots,
            len,
            &mut self.magnitudes,
        )
        .map_err(reject)?;

        forney::apply(&self.roots, &self.magnitudes, &mut codeword[..len]);
        trace!("Corrected {} symbols", errors);

        Ok(errors)
    }
}

fn reject(reason: Uncorrectable) -> RsError {
    debug!("Uncorrectable block: {}", reason);
    RsError::Uncorrectable(reason)
}
