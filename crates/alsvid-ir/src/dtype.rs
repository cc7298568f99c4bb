//! Logical quantum data types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::symbolic::SymbolicInt;

/// The logical data type carried by a register.
///
/// A data type fixes the bit width of a register and how its value is meant
/// to be interpreted. The width may be symbolic; operations that need array
/// arithmetic require it to be concrete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QDType {
    /// A single qubit.
    QBit,
    /// An opaque bag of qubits with no numeric interpretation.
    QAny(SymbolicInt),
    /// An unsigned integer in standard binary representation, MSB first.
    QUInt(SymbolicInt),
}

impl QDType {
    /// An opaque `bitsize`-qubit type of concrete width.
    pub fn any(bitsize: u64) -> Self {
        QDType::QAny(SymbolicInt::Value(bitsize))
    }

    /// An unsigned integer type of concrete width.
    pub fn uint(bitsize: u64) -> Self {
        QDType::QUInt(SymbolicInt::Value(bitsize))
    }

    /// Get the name of this data type.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            QDType::QBit => "qbit",
            QDType::QAny(_) => "qany",
            QDType::QUInt(_) => "quint",
        }
    }

    /// The bit width of this data type.
    pub fn num_qubits(&self) -> SymbolicInt {
        match self {
            QDType::QBit => SymbolicInt::Value(1),
            QDType::QAny(bitsize) | QDType::QUInt(bitsize) => bitsize.clone(),
        }
    }

    /// The bit width as a concrete value.
    ///
    /// Fails when the width is a symbolic placeholder.
    pub fn concrete_num_qubits(&self) -> IrResult<u64> {
        self.num_qubits()
            .value()
            .ok_or_else(|| IrError::SymbolicBitWidth {
                dtype: self.to_string(),
            })
    }
}

impl fmt::Display for QDType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QDType::QBit => write!(f, "qbit"),
            QDType::QAny(bitsize) => write!(f, "qany[{bitsize}]"),
            QDType::QUInt(bitsize) => write!(f, "quint[{bitsize}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_qubits() {
        assert_eq!(QDType::QBit.num_qubits(), SymbolicInt::Value(1));
        assert_eq!(QDType::any(4).num_qubits().value(), Some(4));
        assert_eq!(QDType::uint(8).concrete_num_qubits().unwrap(), 8);
    }

    #[test]
    fn test_symbolic_width_rejected_when_concrete_required() {
        let dtype = QDType::QAny(SymbolicInt::symbol("n"));
        assert!(dtype.concrete_num_qubits().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", QDType::QBit), "qbit");
        assert_eq!(format!("{}", QDType::uint(3)), "quint[3]");
        assert_eq!(
            format!("{}", QDType::QAny(SymbolicInt::symbol("n"))),
            "qany[n]"
        );
    }
}
