//! Symbolic integer expressions for bit widths and repeat counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbolic or concrete non-negative integer.
///
/// Bit widths and repeat counts are usually concrete, but resource estimates
/// are routinely run with placeholder widths like `n`. A [`SymbolicInt`] is
/// either a concrete value, a named symbol, or a product of the two kinds
/// (products arise when a repeated operation is raised to a further power).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolicInt {
    /// A concrete value.
    Value(u64),
    /// A named symbolic placeholder.
    Symbol(String),
    /// Product of two expressions.
    Mul(Box<SymbolicInt>, Box<SymbolicInt>),
}

impl SymbolicInt {
    /// Create a symbolic placeholder.
    pub fn symbol(name: impl Into<String>) -> Self {
        SymbolicInt::Symbol(name.into())
    }

    /// Check if this expression contains any symbols.
    pub fn is_symbolic(&self) -> bool {
        match self {
            SymbolicInt::Value(_) => false,
            SymbolicInt::Symbol(_) => true,
            SymbolicInt::Mul(a, b) => a.is_symbolic() || b.is_symbolic(),
        }
    }

    /// Try to evaluate as a concrete value.
    pub fn value(&self) -> Option<u64> {
        match self {
            SymbolicInt::Value(v) => Some(*v),
            SymbolicInt::Symbol(_) => None,
            SymbolicInt::Mul(a, b) => Some(a.value()? * b.value()?),
        }
    }

    /// Multiply by another expression, folding when both are concrete.
    #[must_use]
    pub fn mul(self, other: impl Into<SymbolicInt>) -> Self {
        let other = other.into();
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => SymbolicInt::Value(a * b),
            _ => SymbolicInt::Mul(Box::new(self), Box::new(other)),
        }
    }
}

impl From<u64> for SymbolicInt {
    fn from(value: u64) -> Self {
        SymbolicInt::Value(value)
    }
}

impl fmt::Display for SymbolicInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolicInt::Value(v) => write!(f, "{v}"),
            SymbolicInt::Symbol(name) => write!(f, "{name}"),
            SymbolicInt::Mul(a, b) => write!(f, "{a}*{b}"),
        }
    }
}
