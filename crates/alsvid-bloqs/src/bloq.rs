//! The polymorphic operation contract.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use alsvid_ir::{Register, Signature, SymbolicInt};

use crate::classical::ClassicalValues;
use crate::error::{BloqError, BloqResult};
use crate::symbol::WireSymbol;
use crate::tensor::{TensorSink, Wiring};
use crate::wire::WireValues;

/// The cost an operation contributes to a resource estimate.
#[derive(Debug, Clone)]
pub enum Cost {
    /// No incremental cost; the default for bookkeeping operations.
    Zero,
    /// A fixed number of clifford units, independent of register width.
    Clifford {
        /// Number of clifford units.
        count: u64,
    },
    /// Delegation to another operation with a call multiplicity.
    ///
    /// Kept aggregate rather than enumerated so symbolic or very large
    /// repeat counts stay tractable for the estimator.
    Repeat {
        /// The operation being called.
        bloq: Arc<dyn Bloq>,
        /// How many times it is called.
        times: SymbolicInt,
    },
}

impl Cost {
    /// Whether this is the zero cost.
    pub fn is_free(&self) -> bool {
        matches!(self, Cost::Zero)
    }
}

/// An immutable operation in the circuit IR.
///
/// Every operation is a pure value: all methods are deterministic functions
/// of the operation's fields and their arguments, so one instance may be
/// queried concurrently from any number of backends without synchronization.
///
/// The trait carries the bookkeeping defaults: zero [`Cost`], trivial
/// controlled pass-through, and `Unsupported` errors for backends an
/// operation does not define. Reshaping operations override the backend
/// methods; [`Power`](crate::bookkeeping::Power) and
/// [`ArbitraryClifford`](crate::bookkeeping::ArbitraryClifford) opt out of
/// the cost and control defaults instead.
pub trait Bloq: fmt::Debug + Send + Sync {
    /// Short lowercase name, also used as the tensor tag.
    fn name(&self) -> &'static str;

    /// The operation interface. Pure: identical on every call.
    fn signature(&self) -> Signature;

    /// The structural inverse of this operation.
    ///
    /// Applying `adjoint` twice yields an operation behaviorally equal to
    /// the original.
    fn adjoint(&self) -> Arc<dyn Bloq>;

    /// Map concrete classical values through this operation.
    ///
    /// Input keys follow the signature's left view, output keys its right
    /// view.
    fn on_classical(&self, vals: ClassicalValues) -> BloqResult<ClassicalValues> {
        let _ = vals;
        Err(BloqError::Unsupported {
            bloq: self.name(),
            backend: "classical",
        })
    }

    /// Append this operation's tensor to a contraction network.
    ///
    /// Exactly one tensor is appended per call, wired onto the given
    /// incoming and outgoing indices.
    fn add_tensor(
        &self,
        network: &mut dyn TensorSink,
        incoming: &Wiring,
        outgoing: &Wiring,
    ) -> BloqResult<()> {
        let _ = (network, incoming, outgoing);
        Err(BloqError::Unsupported {
            bloq: self.name(),
            backend: "tensor",
        })
    }

    /// Reshape flat wire arrays for native circuit export.
    fn map_wires(&self, wires: WireValues) -> BloqResult<WireValues> {
        let _ = wires;
        Err(BloqError::Unsupported {
            bloq: self.name(),
            backend: "native-wire",
        })
    }

    /// The display symbol for one register wire.
    ///
    /// `reg` of `None` asks for the operation's own label; `idx` addresses
    /// one element of a shaped register.
    fn wire_symbol(&self, reg: Option<&Register>, idx: &[usize]) -> WireSymbol {
        match reg {
            None => WireSymbol::text(self.name()),
            Some(reg) if !reg.shape().is_empty() => {
                let idx_text = idx
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                WireSymbol::text_box(format!("[{idx_text}]"), reg.side())
            }
            Some(reg) => WireSymbol::text_box(" ", reg.side()),
        }
    }

    /// The cost this operation contributes to a resource estimate.
    fn cost(&self) -> Cost {
        Cost::Zero
    }

    /// Whether a controlled version is the operation itself with the
    /// control passed through untouched.
    fn absorbs_control(&self) -> bool {
        true
    }

    /// Downcast hook for recovering the concrete variant.
    fn as_any(&self) -> &dyn Any;
}
