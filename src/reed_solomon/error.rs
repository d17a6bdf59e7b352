//! Error types for Reed-Solomon configuration, encoding and correction

use thiserror::Error;

/// Why a received block could not be corrected
///
/// Every variant means the block carries more symbol errors than the code can
/// fix. The block is never modified when one of these is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Uncorrectable {
    /// The error locator has a degree beyond the correction capacity
    #[error("{errors} errors implied by syndromes, capacity is {capacity}")]
    TooManyErrors { errors: usize, capacity: usize },

    /// The error locator does not have exactly one root per error
    #[error("error locator of degree {expected} has {found} roots")]
    RootCountMismatch { expected: usize, found: usize },

    /// A root points before the start of the received block
    #[error("error locator root α^{power} lies outside a {len}-symbol block")]
    RootOutOfRange { power: usize, len: usize },

    /// Forney's formula gave no usable magnitude for an error position
    #[error("no error magnitude for position {position}")]
    ZeroMagnitude { position: usize },
}

/// Errors reported by the codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Field polynomial describes a symbol width the tables cannot hold
    #[error("field polynomial gives {bits}-bit symbols, supported widths are 2..=16")]
    UnsupportedSymbolSize { bits: u32 },

    /// Field polynomial does not generate every nonzero element
    #[error("field polynomial {polynomial:#x} is not primitive")]
    NonPrimitivePolynomial { polynomial: u32 },

    /// Parity length is zero or leaves no room in the field
    #[error("parity length {parity_len} is invalid, must be in 1..={max}")]
    InvalidParityLength { parity_len: usize, max: usize },

    /// Buffer element type is narrower than a field symbol
    #[error("{symbol_bits}-bit buffer cannot hold {field_bits}-bit field symbols")]
    SymbolTooNarrow { symbol_bits: u32, field_bits: u32 },

    /// Data plus parity exceeds the number of nonzero field elements
    #[error("codeword of {len} symbols exceeds field limit of {max}")]
    CodewordTooLong { len: usize, max: usize },

    /// Caller buffer is shorter than the operation needs
    #[error("buffer too short: need {needed} symbols, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },

    /// A symbol value is not an element of the field
    #[error("symbol {value} at index {index} exceeds field maximum {max}")]
    SymbolOutOfRange { index: usize, value: u32, max: u32 },

    /// The received block has more errors than the code can correct
    #[error("uncorrectable block: {0}")]
    Uncorrectable(#[from] Uncorrectable),
}

impl RsError {
    /// Whether this error reports a block beyond the correction capacity
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, RsError::Uncorrectable(_))
    }
}

/// Type alias for codec results
pub type RsResult<T> = Result<T, RsError>;
