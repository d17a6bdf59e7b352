//! Error locator and evaluator polynomials via Berlekamp-Massey
//!
//! The syndromes S_0 .. S_(2t-1) are treated as the output of a linear feedback
//! shift register. Berlekamp-Massey synthesises the shortest such register; its
//! connection polynomial is the error locator
//!
//! ```text
//! Λ(x) = (1 + X_1 x)(1 + X_2 x) ··· (1 + X_L x)
//! ```
//!
//! where X_i = α^(k_i) marks an error at codeword degree k_i. The evaluator is
//! Ω(x) = S(x) Λ(x) mod x^(2t), consumed by the Forney step.
//!
//! Both polynomials are stored lowest degree first.

use super::galois::GaloisField;

/// Run Berlekamp-Massey over `syndromes` and return L, the register length
///
/// On return `locator[..=L]` holds Λ(x) and `evaluator` holds Ω(x).
/// `locator`, `previous` and `scratch` need `syndromes.len() + 1` entries and
/// `evaluator` needs `syndromes.len()`. L is only a claim: callers must reject
/// `2L > syndromes.len()` and confirm it against the roots of Λ(x).
pub fn solve(
    field: &GaloisField,
    syndromes: &[u16],
    locator: &mut [u16],
    evaluator: &mut [u16],
    previous: &mut [u16],
    scratch: &mut [u16],
) -> usize {
    let n = syndromes.len();
    let locator = &mut locator[..=n];
    let previous = &mut previous[..=n];
    let scratch = &mut scratch[..=n];

    locator.fill(0);
    locator[0] = 1;
    previous.fill(0);
    previous[0] = 1;

    let mut length = 0usize;
    // Steps since `previous` was saved, and its discrepancy at that time
    let mut shift = 1usize;
    let mut previous_discrepancy = 1u16;

    for step in 0..n {
        let discrepancy = (1..=length).fold(syndromes[step], |d, i| {
            d ^ field.mul(locator[i], syndromes[step - i])
        });

        if discrepancy == 0 {
            shift += 1;
            continue;
        }

        let scale = field.div(discrepancy, previous_discrepancy);
        let lengthen = 2 * length <= step;
        if lengthen {
            scratch.copy_from_slice(locator);
        }

        // Λ(x) -= (d / d') x^shift B(x)
        for (l, &b) in locator[shift..].iter_mut().zip(previous.iter()) {
            *l ^= field.mul(scale, b);
        }

        if lengthen {
            length = step + 1 - length;
            previous.copy_from_slice(scratch);
            previous_discrepancy = discrepancy;
            shift = 1;
        } else {
            shift += 1;
        }
    }

    // Ω(x) = S(x) Λ(x) mod x^n
    for (i, omega) in evaluator[..n].iter_mut().enumerate() {
        *omega = (0..=i).fold(0, |acc, j| {
            acc ^ field.mul(locator[j], syndromes[i - j])
        });
    }

    length
}
