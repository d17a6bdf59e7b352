//! Builder for [`ReedSolomon`] codecs
//!
//! Polynomial and root offset default to the Data Matrix ECC200 values. The
//! parity length has no sensible default and must be set.

use super::codec::ReedSolomon;
use super::error::RsResult;
use super::types::{CodecParams, ECC200_POLYNOMIAL, ECC200_ROOT_OFFSET};

#[derive(Debug, Clone)]
pub struct ReedSolomonBuilder {
    polynomial: u32,
    parity_len: usize,
    root_offset: u32,
}

impl Default for ReedSolomonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReedSolomonBuilder {
    pub fn new() -> Self {
        Self {
            polynomial: ECC200_POLYNOMIAL,
            parity_len: 0,
            root_offset: ECC200_ROOT_OFFSET,
        }
    }

    /// Start from an existing parameter set
    pub fn from_params(params: CodecParams) -> Self {
        Self {
            polynomial: params.polynomial,
            parity_len: params.parity_len,
            root_offset: params.root_offset,
        }
    }

    pub fn polynomial(mut self, polynomial: u32) -> Self {
        self.polynomial = polynomial;
        self
    }

    pub fn parity_len(mut self, parity_len: usize) -> Self {
        self.parity_len = parity_len;
        self
    }

    pub fn root_offset(mut self, root_offset: u32) -> Self {
        self.root_offset = root_offset;
        self
    }

    /// Parameters the builder currently holds
    pub fn params(&self) -> CodecParams {
        CodecParams::new(self.polynomial, self.parity_len, self.root_offset)
    }

    /// Build the field tables and generator polynomial
    pub fn build(self) -> RsResult<ReedSolomon> {
        ReedSolomon::from_params(self.params())
    }
}
