//! Opaque clifford placeholder for resource estimates.

use std::any::Any;
use std::sync::Arc;

use alsvid_ir::{QDType, Register, Signature, SymbolicInt};
use serde::{Deserialize, Serialize};

use crate::bloq::{Bloq, Cost};

/// An arbitrary `n`-qubit clifford operation.
///
/// A stand-in for "some clifford circuit whose details don't matter" in
/// resource estimates: cliffords are cheap in the surface code and cost
/// about the same regardless of which one they are, so the declared cost is
/// one clifford unit independent of `n`. Not a bookkeeping operation: it
/// opts out of the zero-cost and control pass-through defaults, and defines
/// no classical, tensor, or wire behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbitraryClifford {
    n: SymbolicInt,
}

impl ArbitraryClifford {
    /// Create a placeholder over `n` qubits.
    pub fn new(n: impl Into<SymbolicInt>) -> Self {
        Self { n: n.into() }
    }

    /// The register width.
    pub fn n(&self) -> &SymbolicInt {
        &self.n
    }
}

impl Bloq for ArbitraryClifford {
    fn name(&self) -> &'static str {
        "clifford"
    }

    fn signature(&self) -> Signature {
        Signature::new([Register::new("x", QDType::QAny(self.n.clone()))])
    }

    fn adjoint(&self) -> Arc<dyn Bloq> {
        // The inverse of an unspecified clifford is an unspecified clifford.
        Arc::new(self.clone())
    }

    fn cost(&self) -> Cost {
        Cost::Clifford { count: 1 }
    }

    fn absorbs_control(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
