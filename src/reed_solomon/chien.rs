//! Error locator root search
//!
//! Exhaustive Chien-style search: every power α^k, 0 ≤ k < 2^m - 1, is tried.
//! The locator is evaluated in reversed form,
//!
//! ```text
//! x^L Λ(1/x) = Λ_0 x^L + Λ_1 x^(L-1) + ··· + Λ_L
//! ```
//!
//! whose roots are the error locators X_i = α^(k_i) themselves, so a zero at
//! α^k directly names the codeword degree k of an error. Degree k sits at
//! buffer index `len - 1 - k`.

use super::error::Uncorrectable;
use super::galois::GaloisField;

/// Collect the degrees of all errors described by `locator[..=degree]`
///
/// `roots` is cleared first. Fails unless exactly `degree` roots are found and
/// each one addresses a symbol inside a `codeword_len`-symbol block.
pub fn find_roots(
    field: &GaloisField,
    locator: &[u16],
    degree: usize,
    codeword_len: usize,
    roots: &mut Vec<usize>,
) -> Result<(), Uncorrectable> {
    roots.clear();
    let coefficients = &locator[..=degree];

    for power in 0..field.size() {
        let value = coefficients
            .iter()
            .fold(0, |acc, &c| field.mul_exp(acc, power) ^ c);

        if value == 0 {
            if power >= codeword_len {
                return Err(Uncorrectable::RootOutOfRange {
                    power,
                    len: codeword_len,
                });
            }
            roots.push(power);
        }
    }

    if roots.len() != degree {
        return Err(Uncorrectable::RootCountMismatch {
            expected: degree,
            found: roots.len(),
        });
    }

    Ok(())
}

/// Buffer index of the symbol at codeword degree `power`
#[inline]
pub fn position(codeword_len: usize, power: usize) -> usize {
    codeword_len - 1 - power
}
