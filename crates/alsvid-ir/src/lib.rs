//! Alsvid Register Intermediate Representation
//!
//! This crate provides the register-level data model shared by every Alsvid
//! operation: typed register descriptors, operation signatures, logical
//! quantum data types, and symbolic bit widths.
//!
//! # Overview
//!
//! An operation's interface is a [`Signature`]: an ordered, named collection
//! of [`Register`] descriptors. Each register carries a [`QDType`] fixing its
//! bit width (possibly a [`SymbolicInt`] placeholder), an array shape, and a
//! [`Side`] marking it as input-only, output-only, or pass-through.
//!
//! Everything in this crate is an immutable value object: construction is
//! the only write, and descriptors are copied-with-override rather than
//! mutated.
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::{QDType, Register, Side, Signature};
//!
//! let sig = Signature::try_new([
//!     Register::new("sel", QDType::uint(2)).with_side(Side::Left),
//!     Register::new("out", QDType::QBit).with_shape([4]).with_side(Side::Right),
//! ])?;
//!
//! assert_eq!(sig.n_qubits_left(), Some(2));
//! assert_eq!(sig.n_qubits_right(), Some(4));
//! # Ok::<(), alsvid_ir::IrError>(())
//! ```

pub mod dtype;
pub mod error;
pub mod register;
pub mod signature;
pub mod symbolic;

pub use dtype::QDType;
pub use error::{IrError, IrResult};
pub use register::{Register, Side};
pub use signature::Signature;
pub use symbolic::SymbolicInt;
