//! Error magnitudes via Forney's formula, and their application
//!
//! For an error at codeword degree k with locator X = α^k and generator roots
//! starting at α^b:
//!
//! ```text
//! e = X^(1-b) · Ω(X⁻¹) / Λ'(X⁻¹)
//! ```
//!
//! In characteristic 2 the formal derivative keeps only the odd-degree terms of
//! Λ(x), so Λ'(x) = Λ_1 + Λ_3 x² + Λ_5 x⁴ + ···.
//!
//! All magnitudes are computed before any symbol is touched so that a failure
//! leaves the block as received.

use super::chien::position;
use super::error::Uncorrectable;
use super::galois::GaloisField;
use super::symbol::Symbol;

/// Compute one magnitude per root into `magnitudes` (cleared first)
#[allow(clippy::too_many_arguments)]
pub fn compute_magnitudes(
    field: &GaloisField,
    root_offset: usize,
    locator: &[u16],
    evaluator: &[u16],
    degree: usize,
    roots: &[usize],
    codeword_len: usize,
    magnitudes: &mut Vec<u16>,
) -> Result<(), Uncorrectable> {
    magnitudes.clear();
    let size = field.size();
    let scale_step = (1 + size - root_offset % size) % size;
    let top_odd = if degree % 2 == 1 { degree } else { degree.saturating_sub(1) };

    for &power in roots {
        let inverse = (size - power) % size;

        let omega = evaluator
            .iter()
            .rev()
            .fold(0, |acc, &c| field.mul_exp(acc, inverse) ^ c);

        let derivative = (1..=top_odd)
            .rev()
            .step_by(2)
            .fold(0, |acc, i| field.mul_exp(acc, 2 * inverse) ^ locator[i]);

        if omega == 0 || derivative == 0 {
            return Err(Uncorrectable::ZeroMagnitude {
                position: position(codeword_len, power),
            });
        }

        let scale = (power as u64 * scale_step as u64 % size as u64) as usize;
        magnitudes.push(field.mul_exp(field.div(omega, derivative), scale));
    }

    Ok(())
}

/// XOR each magnitude into the symbol its root designates
pub fn apply<S: Symbol>(roots: &[usize], magnitudes: &[u16], codeword: &mut [S]) {
    let len = codeword.len();
    for (&power, &magnitude) in roots.iter().zip(magnitudes) {
        let symbol = &mut codeword[position(len, power)];
        *symbol = S::from_element(symbol.element() ^ magnitude);
    }
}
