//! Reed-Solomon generator polynomial
//!
//! g(x) = (x + α^b)(x + α^(b+1)) ··· (x + α^(b+n-1)) for root offset `b` and
//! parity length `n`. Coefficients are stored highest degree first, so
//! `coefficients()[0]` is the leading 1 and `coefficients()[n]` the constant.

use super::galois::GaloisField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPolynomial {
    coefficients: Vec<u16>,
    root_offset: usize,
}

impl GeneratorPolynomial {
    /// Multiply out the `parity_len` binomials starting at α^`root_offset`
    pub fn new(field: &GaloisField, parity_len: usize, root_offset: usize) -> Self {
        let mut coefficients = vec![0u16; parity_len + 1];
        coefficients[0] = 1;

        // Multiply the degree-(i-1) running product by (x + α^root), in place
        for (i, root) in (root_offset..root_offset + parity_len).enumerate() {
            for k in (1..=i + 1).rev() {
                let carried = field.mul_exp(coefficients[k - 1], root);
                coefficients[k] ^= carried;
            }
        }

        Self {
            coefficients,
            root_offset: root_offset % field.size(),
        }
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[u16] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Exponent of the first root, reduced modulo the field size
    pub fn root_offset(&self) -> usize {
        self.root_offset
    }

    /// Root exponents `b, b+1, ..., b+n-1`
    pub fn root_powers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.degree()).map(move |i| self.root_offset + i)
    }

    /// Evaluate g(x) with Horner's method
    pub fn eval(&self, field: &GaloisField, x: u16) -> u16 {
        self.coefficients
            .iter()
            .fold(0, |acc, &c| field.mul(acc, x) ^ c)
    }
}
