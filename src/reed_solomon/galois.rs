//! Galois Field GF(2^m) arithmetic driven by log/antilog tables
//!
//! ## Field Construction
//!
//! The field is defined at run time by its characteristic polynomial, given as a
//! bit pattern. The highest set bit fixes the symbol width `m`; for Data Matrix
//! ECC200 the polynomial is x⁸ + x⁵ + x³ + x² + 1, written `0x12d`.
//!
//! Tables are built by walking powers of α = x: start at 1, shift left once per
//! step and reduce by the polynomial whenever the shift reaches bit `m`. After
//! `fsize = 2^m - 1` steps every nonzero element has been visited exactly once,
//! which is checked while building.
//!
//! ## Arithmetic
//!
//! Addition is XOR. Multiplication and division add or subtract logarithms
//! modulo `fsize`; a zero operand short-circuits to zero since zero has no log.

use super::error::{RsError, RsResult};
use log::debug;

/// Smallest supported symbol width in bits
pub const MIN_SYMBOL_BITS: u32 = 2;

/// Largest supported symbol width in bits (tables hold `u16`)
pub const MAX_SYMBOL_BITS: u32 = 16;

/// Log marker for the zero element, which has no logarithm
const NO_LOG: u16 = u16::MAX;

/// Log/antilog tables for one GF(2^m)
#[derive(Clone, PartialEq, Eq)]
pub struct GaloisField {
    polynomial: u32,
    bits: u32,
    size: usize,
    /// `log[x]` for every element, `log[0]` unused
    log: Vec<u16>,
    /// `antilog[k] = α^k` for `k` in `0..size`
    antilog: Vec<u16>,
}

impl GaloisField {
    /// Build the tables for the field defined by `polynomial`
    pub fn new(polynomial: u32) -> RsResult<Self> {
        let bits = symbol_bits(polynomial);
        if !(MIN_SYMBOL_BITS..=MAX_SYMBOL_BITS).contains(&bits) {
            return Err(RsError::UnsupportedSymbolSize { bits });
        }

        let overflow = 1u32 << bits;
        let size = (overflow - 1) as usize;
        let mut log = vec![NO_LOG; size + 1];
        let mut antilog = vec![0u16; size];

        let mut value = 1u32;
        for k in 0..size {
            if value == 0 || log[value as usize] != NO_LOG {
                return Err(RsError::NonPrimitivePolynomial { polynomial });
            }
            antilog[k] = value as u16;
            log[value as usize] = k as u16;

            value <<= 1;
            if value & overflow != 0 {
                value ^= polynomial;
            }
        }

        debug!(
            "Built GF(2^{}) tables for polynomial {:#x}: {} nonzero elements",
            bits, polynomial, size
        );

        Ok(Self {
            polynomial,
            bits,
            size,
            log,
            antilog,
        })
    }

    /// Characteristic polynomial the field was built from
    pub fn polynomial(&self) -> u32 {
        self.polynomial
    }

    /// Symbol width `m` in bits
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of nonzero elements, `2^m - 1`
    ///
    /// This is also the multiplicative order of α and the longest codeword the
    /// field supports.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest element value
    pub fn max_element(&self) -> u16 {
        self.size as u16
    }

    /// Logarithm of a nonzero element, `None` for zero
    #[inline]
    pub fn log(&self, x: u16) -> Option<usize> {
        match self.log[x as usize] {
            NO_LOG => None,
            l => Some(l as usize),
        }
    }

    /// α raised to `power`, reduced modulo the field size
    #[inline]
    pub fn exp(&self, power: usize) -> u16 {
        self.antilog[power % self.size]
    }

    #[inline]
    pub fn add(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    #[inline]
    pub fn mul(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        let sum = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.antilog[sum % self.size]
    }

    /// Multiply `a` by α^`power`
    ///
    /// Horner evaluation at a power of α reduces to this, saving one log
    /// lookup per step.
    #[inline]
    pub fn mul_exp(&self, a: u16, power: usize) -> u16 {
        if a == 0 {
            return 0;
        }
        self.antilog[(self.log[a as usize] as usize + power % self.size) % self.size]
    }

    /// Divide `a` by `b`
    ///
    /// # Panics
    ///
    /// Panics if `b` is zero.
    #[inline]
    pub fn div(&self, a: u16, b: u16) -> u16 {
        assert!(b != 0, "Division by zero in Galois field");
        if a == 0 {
            return 0;
        }
        let diff = self.log[a as usize] as usize + self.size - self.log[b as usize] as usize;
        self.antilog[diff % self.size]
    }

    /// Multiplicative inverse of a nonzero element
    #[inline]
    pub fn inv(&self, a: u16) -> u16 {
        self.div(1, a)
    }

    /// Raise `a` to `exponent`
    pub fn pow(&self, a: u16, exponent: usize) -> u16 {
        if exponent == 0 {
            return 1;
        }
        match self.log(a) {
            None => 0,
            Some(l) => self.antilog[((l as u64 * exponent as u64) % self.size as u64) as usize],
        }
    }
}

impl std::fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GaloisField")
            .field("polynomial", &format_args!("{:#x}", self.polynomial))
            .field("bits", &self.bits)
            .field("size", &self.size)
            .finish()
    }
}

/// Symbol width encoded by a characteristic polynomial: its highest set bit
pub fn symbol_bits(polynomial: u32) -> u32 {
    if polynomial == 0 {
        0
    } else {
        31 - polynomial.leading_zeros()
    }
}
