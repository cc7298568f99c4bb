//! Error types for the bookkeeping operation family.

use alsvid_ir::{IrError, SymbolicInt};
use thiserror::Error;

/// Errors surfaced by bookkeeping operations.
///
/// All failures are local, synchronous, and unrecoverable at this layer:
/// the surrounding composition or simulation layer decides how to report
/// them. Construction-time variants prevent an invalid operation from ever
/// entering a circuit; the rest signal wiring bugs or logic errors in the
/// circuit being evaluated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BloqError {
    /// Cast between registers of different concrete bit widths.
    #[error("Casting only permitted between same-sized registers ({inp} vs {out} qubits)")]
    CastWidthMismatch {
        /// Width of the input data type.
        inp: u64,
        /// Width of the output data type.
        out: u64,
    },

    /// A repeated operation must have only THRU registers.
    #[error("Bloq to repeat must have only THRU registers (register '{register}' is not)")]
    NonThruRegister {
        /// The offending register name.
        register: String,
    },

    /// A concrete repeat count must be a positive integer.
    #[error("Repeat count must be a positive integer, got {power}")]
    NonPositivePower {
        /// The offending count.
        power: u64,
    },

    /// Structural expansion requested while the repeat count is symbolic.
    #[error("Symbolic power {power} not supported")]
    SymbolicPower {
        /// The symbolic count.
        power: SymbolicInt,
    },

    /// A register was freed while holding a non-zero value.
    #[error("Tried to free a non-zero register: {value}")]
    FreeNonZero {
        /// The non-zero value observed.
        value: u64,
    },

    /// A register was wired as a scalar where an array was required.
    #[error("Register '{register}' must be wired as an array")]
    ExpectedArray {
        /// The offending register name.
        register: String,
    },

    /// A register was wired as an array where a scalar was required.
    #[error("Register '{register}' must be wired as a scalar")]
    ExpectedScalar {
        /// The offending register name.
        register: String,
    },

    /// A named value was missing from the inputs of a backend call.
    #[error("Missing value for register '{register}'")]
    MissingRegister {
        /// The register that had no value.
        register: String,
    },

    /// A classical value exceeds the supported bit width.
    #[error("Bit width {bits} exceeds the 64-bit classical value limit")]
    WidthTooLarge {
        /// The requested width.
        bits: u64,
    },

    /// A classical value does not fit the register's bit width.
    #[error("Value {value} does not fit in {bits} bits")]
    ValueOutOfRange {
        /// The offending value.
        value: u64,
        /// The register's bit width.
        bits: u64,
    },

    /// An array value's element count does not match the register.
    #[error("Expected {expected} elements for register '{register}', got {got}")]
    ElementCountMismatch {
        /// The register name.
        register: String,
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        got: usize,
    },

    /// A backend was invoked on an operation that does not define it.
    #[error("The {backend} backend is not supported by '{bloq}'")]
    Unsupported {
        /// Name of the operation.
        bloq: &'static str,
        /// Name of the backend.
        backend: &'static str,
    },

    /// An error from the register/signature layer.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for bookkeeping operations.
pub type BloqResult<T> = Result<T, BloqError>;
