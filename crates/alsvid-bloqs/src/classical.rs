//! Classical value simulation: bit-array and integer conversions.
//!
//! Classical evaluation threads concrete register values through an
//! operation: a scalar register holds one unsigned integer, a shaped
//! register an array of them. The bit-order convention is fixed here once,
//! MSB first, and every operation's classical rule is written against it.

use rustc_hash::FxHashMap;

use crate::error::{BloqError, BloqResult};
use crate::shaped::Shaped;

/// A concrete classical value for one register.
pub type ClassicalValue = Shaped<u64>;

/// Classical values keyed by register name.
pub type ClassicalValues = FxHashMap<String, ClassicalValue>;

/// Convert an integer to its `width`-bit representation, MSB first.
///
/// Fails when `width` exceeds 64 bits or the value does not fit.
pub fn int_to_bits(value: u64, width: u64) -> BloqResult<Vec<u64>> {
    if width > 64 {
        return Err(BloqError::WidthTooLarge { bits: width });
    }
    if width < 64 && value >> width != 0 {
        return Err(BloqError::ValueOutOfRange { value, bits: width });
    }
    Ok((0..width).rev().map(|bit| (value >> bit) & 1).collect())
}

/// Convert an MSB-first bit slice back to an integer.
///
/// The exact inverse of [`int_to_bits`] for the same width.
pub fn bits_to_int(bits: &[u64]) -> BloqResult<u64> {
    if bits.len() > 64 {
        return Err(BloqError::WidthTooLarge {
            bits: bits.len() as u64,
        });
    }
    Ok(bits.iter().fold(0, |acc, &bit| (acc << 1) | (bit & 1)))
}

/// Look up the value for `register`, with a typed error when absent.
pub fn take_value(vals: &mut ClassicalValues, register: &str) -> BloqResult<ClassicalValue> {
    vals.remove(register).ok_or_else(|| BloqError::MissingRegister {
        register: register.to_string(),
    })
}
