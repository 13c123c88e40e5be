//! Hamming(8,4) extended codec and channel model.
//!
//! The codec maps 4-bit data blocks onto 8-bit codewords carrying enough
//! redundancy to correct any single bit error and detect (but not locate)
//! any double bit error. [`noise`] models the binary symmetric channel
//! the codewords travel through.

pub mod codec;
pub mod noise;

pub use codec::{decode, encode, syndrome, DecodeError};
pub use noise::flip_bits;
