//! Parameters that identify a Reed-Solomon code

/// Data Matrix ECC200 field polynomial: x⁸ + x⁵ + x³ + x² + 1
pub const ECC200_POLYNOMIAL: u32 = 0x12d;

/// Root offset used by Data Matrix ECC200
pub const ECC200_ROOT_OFFSET: u32 = 1;

/// Everything needed to configure a codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecParams {
    /// Field characteristic polynomial; its highest set bit gives the symbol width
    pub polynomial: u32,
    /// Parity symbols appended per codeword (2t in the usual notation)
    pub parity_len: usize,
    /// Exponent of the first generator polynomial root
    pub root_offset: u32,
}

impl CodecParams {
    pub fn new(polynomial: u32, parity_len: usize, root_offset: u32) -> Self {
        Self {
            polynomial,
            parity_len,
            root_offset,
        }
    }

    /// Data Matrix ECC200 code with the given number of parity symbols
    pub fn ecc200(parity_len: usize) -> Self {
        Self::new(ECC200_POLYNOMIAL, parity_len, ECC200_ROOT_OFFSET)
    }

    /// Number of symbol errors a codeword can recover from
    pub fn capacity(&self) -> usize {
        self.parity_len / 2
    }
}

impl std::fmt::Display for CodecParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "poly={:#x} parity={} offset={}",
            self.polynomial, self.parity_len, self.root_offset
        )
    }
}
