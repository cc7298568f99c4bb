//! Typed register descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dtype::QDType;
use crate::symbolic::SymbolicInt;

/// Whether a register is an input, an output, or flows through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Input-only: the register is consumed by the operation.
    Left,
    /// Output-only: the register is produced by the operation.
    Right,
    /// The register flows through, appearing on both sides under one name.
    Thru,
}

impl Side {
    /// Whether this side participates in the left (input) view.
    #[inline]
    pub fn includes_left(self) -> bool {
        matches!(self, Side::Left | Side::Thru)
    }

    /// Whether this side participates in the right (output) view.
    #[inline]
    pub fn includes_right(self) -> bool {
        matches!(self, Side::Right | Side::Thru)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
            Side::Thru => write!(f, "THRU"),
        }
    }
}

/// An immutable description of one named register in an operation interface.
///
/// A register couples a name with a data type, an array shape (empty for a
/// scalar register), and a [`Side`]. Registers are never mutated after
/// construction; adjoints and partitions build fresh descriptors via the
/// `with_*` helpers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Register {
    name: String,
    dtype: QDType,
    shape: Vec<usize>,
    side: Side,
}

impl Register {
    /// Create a scalar pass-through register.
    pub fn new(name: impl Into<String>, dtype: QDType) -> Self {
        Self {
            name: name.into(),
            dtype,
            shape: Vec::new(),
            side: Side::Thru,
        }
    }

    /// Copy of this register with the given array shape.
    #[must_use]
    pub fn with_shape(mut self, shape: impl Into<Vec<usize>>) -> Self {
        self.shape = shape.into();
        self
    }

    /// Copy of this register with the given side.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// The register name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The logical data type.
    pub fn dtype(&self) -> &QDType {
        &self.dtype
    }

    /// The array shape; empty for a scalar register.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The register side.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The bit width of one element.
    pub fn bitsize(&self) -> SymbolicInt {
        self.dtype.num_qubits()
    }

    /// Number of elements in the array shape (1 for a scalar register).
    pub fn volume(&self) -> u64 {
        self.shape.iter().map(|&dim| dim as u64).product()
    }

    /// Total number of bits across all elements.
    pub fn total_bits(&self) -> SymbolicInt {
        self.dtype.num_qubits().mul(self.volume())
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.dtype)?;
        if !self.shape.is_empty() {
            write!(f, "{:?}", self.shape)?;
        }
        write!(f, " ({})", self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_register() {
        let reg = Register::new("reg", QDType::uint(4));
        assert_eq!(reg.shape(), &[] as &[usize]);
        assert_eq!(reg.volume(), 1);
        assert_eq!(reg.total_bits().value(), Some(4));
        assert_eq!(reg.side(), Side::Thru);
    }

    #[test]
    fn test_shaped_register() {
        let reg = Register::new("sel", QDType::uint(2))
            .with_shape([2, 3])
            .with_side(Side::Left);
        assert_eq!(reg.volume(), 6);
        assert_eq!(reg.total_bits().value(), Some(12));
        assert!(reg.side().includes_left());
        assert!(!reg.side().includes_right());
    }

    #[test]
    fn test_side_views() {
        assert!(Side::Thru.includes_left() && Side::Thru.includes_right());
        assert!(!Side::Left.includes_right());
        assert!(!Side::Right.includes_left());
    }
}
