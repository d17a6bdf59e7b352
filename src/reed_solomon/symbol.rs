//! Buffer element types that carry field symbols
//!
//! Byte buffers cover every field up to GF(2^8). Wider fields need `u16`
//! buffers; the element type is chosen by the caller, never inferred.

use std::fmt::Debug;

/// A buffer element able to carry one field symbol
pub trait Symbol: Copy + Default + Eq + Debug + Send + Sync + 'static {
    /// Number of bits the element can hold
    const BITS: u32;

    /// Field element value of this symbol
    fn element(self) -> u16;

    /// Build a symbol from a field element that fits in `BITS`
    fn from_element(value: u16) -> Self;
}

impl Symbol for u8 {
    const BITS: u32 = 8;

    #[inline]
    fn element(self) -> u16 {
        self as u16
    }

    #[inline]
    fn from_element(value: u16) -> Self {
        debug_assert!(value <= u8::MAX as u16);
        value as u8
    }
}

impl Symbol for u16 {
    const BITS: u32 = 16;

    #[inline]
    fn element(self) -> u16 {
        self
    }

    #[inline]
    fn from_element(value: u16) -> Self {
        value
    }
}
