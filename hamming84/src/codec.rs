//! Encoding, syndrome computation and decoding for the extended
//! Hamming(8,4) code.
//!
//! Data blocks and codewords are plain `u8` values, bit 0 first. The
//! codeword layout interleaves the four data bits with parity sums:
//!
//! ```text
//! c0 = d0          c4 = d1 ^ d3
//! c1 = d0 ^ d1     c5 = d2
//! c2 = d1 ^ d2     c6 = d3
//! c3 = d0^d2^d3    c7 = d0 ^ d1 ^ d2 ^ d3   (overall parity)
//! ```
//!
//! The overall parity bit `c7` is what distinguishes a single error
//! (odd syndrome parity, correctable) from a double error (even parity
//! with a nonzero syndrome, detectable only).

use thiserror::Error;

/// Number of data bits per block.
pub const DATA_BITS: u8 = 4;

/// Number of bits per codeword.
pub const CODE_BITS: u8 = 8;

/// Errors reported by [`decode`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The syndrome indicates two flipped bits. Hamming(8,4) can detect
    /// the condition but cannot locate the bits.
    #[error("double bit error detected, codeword is uncorrectable")]
    DoubleError,
}

#[inline]
fn bit(value: u8, index: u8) -> bool {
    (value >> index) & 1 == 1
}

#[inline]
fn pack<const N: usize>(bits: [bool; N]) -> u8 {
    let mut value = 0u8;
    for (index, &set) in bits.iter().enumerate() {
        value |= (set as u8) << index;
    }
    value
}

/// Encodes the low nibble of `data` into an 8-bit codeword.
///
/// The high nibble is ignored.
pub fn encode(data: u8) -> u8 {
    let d0 = bit(data, 0);
    let d1 = bit(data, 1);
    let d2 = bit(data, 2);
    let d3 = bit(data, 3);

    pack([
        d0,
        d0 ^ d1,
        d1 ^ d2,
        d0 ^ d2 ^ d3,
        d1 ^ d3,
        d2,
        d3,
        d0 ^ d1 ^ d2 ^ d3,
    ])
}

/// Computes the 4-bit syndrome of a received codeword.
///
/// A zero syndrome means the codeword is valid. Bit 3 is the overall
/// parity check; see [`decode`] for how the syndrome is interpreted.
pub fn syndrome(code: u8) -> u8 {
    let c = |index: u8| bit(code, index);

    pack([
        c(2) ^ c(4) ^ c(5) ^ c(6),
        c(1) ^ c(3) ^ c(4) ^ c(5),
        c(0) ^ c(2) ^ c(3) ^ c(4),
        c(0) ^ c(1) ^ c(2) ^ c(3) ^ c(4) ^ c(5) ^ c(6) ^ c(7),
    ])
}

/// Decodes a received codeword back into its 4-bit data block.
///
/// A zero syndrome accepts the codeword as-is. If the overall parity
/// check fails, exactly one bit flipped and the remaining syndrome bits
/// locate it. A nonzero syndrome with intact overall parity means two
/// bits flipped, which is unrecoverable.
pub fn decode(code: u8) -> Result<u8, DecodeError> {
    let s = syndrome(code);

    let corrected = if s == 0 {
        code
    } else if bit(s, 3) {
        code ^ (1 << error_position(s))
    } else {
        return Err(DecodeError::DoubleError);
    };

    let c = |index: u8| bit(corrected, index);
    Ok(pack([c(0), c(0) ^ c(1), c(5), c(6)]))
}

/// Maps the low three syndrome bits to the index of the flipped bit.
fn error_position(s: u8) -> u8 {
    match s & 0b0111 {
        0b100 => 0,
        0b010 => 1,
        0b101 => 2,
        0b110 => 3,
        0b111 => 4,
        0b011 => 5,
        0b001 => 6,
        _ => 7,
    }
}
