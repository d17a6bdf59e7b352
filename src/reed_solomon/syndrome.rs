//! Syndrome calculation
//!
//! Syndrome `S_j` is the received polynomial evaluated at the generator root
//! α^(b+j). Every valid codeword is a multiple of g(x), so all syndromes of an
//! error-free block are zero.

use super::galois::GaloisField;
use super::generator::GeneratorPolynomial;
use super::symbol::Symbol;

/// Fill `syndromes` with one value per generator root and report whether
/// they are all zero
///
/// `syndromes` must hold at least `generator.degree()` entries.
pub fn compute<S: Symbol>(
    field: &GaloisField,
    generator: &GeneratorPolynomial,
    received: &[S],
    syndromes: &mut [u16],
) -> bool {
    let mut all_zero = true;

    for (syndrome, power) in syndromes.iter_mut().zip(generator.root_powers()) {
        // Horner's method, first symbol is the highest-degree coefficient
        *syndrome = received
            .iter()
            .fold(0, |acc, &r| field.mul_exp(acc, power) ^ r.element());
        all_zero &= *syndrome == 0;
    }

    all_zero
}
