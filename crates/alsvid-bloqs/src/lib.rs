//! Alsvid Register-Bookkeeping Operations
//!
//! This crate implements the bookkeeping operation family of the Alsvid
//! circuit IR: operations that reshape, split, merge, partition, allocate,
//! free, retype, or repeat logical registers without performing any real
//! computational gate.
//!
//! # Overview
//!
//! Bookkeeping operations carry zero cost in a resource estimate, yet must
//! behave consistently across three independent interpretation backends:
//!
//! - **Classical evaluation**: concrete integer and bit-array values
//!   threaded through each operation's [`Bloq::on_classical`] rule.
//! - **Tensor contraction**: each operation contributes one identity-like
//!   tensor to a caller-owned network via [`Bloq::add_tensor`] and the
//!   injected [`TensorSink`] capability.
//! - **Native export**: flat wire-identifier arrays reshaped per
//!   operation via [`Bloq::map_wires`].
//!
//! The backends agree on bit widths, array shapes, and total information
//! content, and every operation produces its structural inverse through
//! [`Bloq::adjoint`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use alsvid_bloqs::bookkeeping::Split;
//! use alsvid_bloqs::{Bloq, ClassicalValues, Shaped};
//! use alsvid_ir::QDType;
//!
//! let split = Split::try_new(QDType::uint(3))?;
//!
//! let mut vals = ClassicalValues::default();
//! vals.insert("reg".to_string(), Shaped::Scalar(5));
//! let bits = split.on_classical(vals)?;
//! assert_eq!(bits["reg"].elements(), vec![1, 0, 1]);
//!
//! // The adjoint joins the bits back together.
//! let join: Arc<dyn Bloq> = split.adjoint();
//! let back = join.on_classical(bits)?;
//! assert_eq!(*back["reg"].as_scalar("reg")?, 5);
//! # Ok::<(), alsvid_bloqs::BloqError>(())
//! ```

pub mod bloq;
pub mod bookkeeping;
pub mod classical;
pub mod error;
pub mod shaped;
pub mod symbol;
pub mod tensor;
pub mod wire;

pub use bloq::{Bloq, Cost};
pub use classical::{bits_to_int, int_to_bits, ClassicalValue, ClassicalValues};
pub use error::{BloqError, BloqResult};
pub use shaped::Shaped;
pub use symbol::WireSymbol;
pub use tensor::{Tensor, TensorIndex, TensorNetwork, TensorSink, Wiring};
pub use wire::{WireId, WireValues};
