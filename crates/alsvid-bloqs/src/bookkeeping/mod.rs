//! The register-bookkeeping operation family.
//!
//! Seven operation kinds that reshape, merge, split, retype, allocate,
//! free, or repeat registers without performing any computational gate:
//! [`Split`], [`Join`], [`Partition`], [`Allocate`], [`Free`], [`Cast`],
//! and [`Power`], plus the [`ArbitraryClifford`] cost placeholder that
//! shares the same signature machinery.
//!
//! The variant set is closed by design: every kind is an immutable value
//! implementing the one [`Bloq`](crate::bloq::Bloq) contract the backends
//! consume, and no bits are created or destroyed anywhere except at the
//! explicit [`Allocate`]/[`Free`] boundary.

mod allocate;
mod cast;
mod clifford;
mod free;
mod join;
mod partition;
mod power;
mod split;

pub use allocate::Allocate;
pub use cast::Cast;
pub use clifford::ArbitraryClifford;
pub use free::Free;
pub use join::Join;
pub use partition::Partition;
pub use power::Power;
pub use split::Split;
