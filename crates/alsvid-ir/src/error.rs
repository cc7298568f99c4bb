//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur when building register descriptors and signatures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Two registers on the same side of a signature share a name.
    #[error("Duplicate register name '{name}' on the {side} side of a signature")]
    DuplicateRegisterName {
        /// The offending register name.
        name: String,
        /// Which side view the collision occurred in.
        side: &'static str,
    },

    /// A concrete bit width was required but the data type carries a symbol.
    #[error("Data type '{dtype}' has a symbolic bit width where a concrete one is required")]
    SymbolicBitWidth {
        /// Display form of the offending data type.
        dtype: String,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
