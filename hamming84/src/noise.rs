//! Binary symmetric channel model.

use crate::codec::CODE_BITS;
use rand::Rng;

/// Flips each bit of `code` independently with probability `p`.
///
/// Values of `p` at or above 1.0 flip every bit. The noise sweep runs
/// past 1.0 on purpose; it pins down the degenerate end of the curve.
pub fn flip_bits(code: u8, p: f64, rng: &mut impl Rng) -> u8 {
    let mut result = code;

    for index in 0..CODE_BITS {
        let flip: f64 = rng.gen();
        if flip < p {
            result ^= 1 << index;
        }
    }

    result
}
