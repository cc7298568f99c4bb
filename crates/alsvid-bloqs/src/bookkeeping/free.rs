//! Free an uncomputed register.

use std::any::Any;
use std::sync::Arc;

use alsvid_ir::{QDType, Register, Side, Signature};
use serde::{Deserialize, Serialize};

use crate::bloq::Bloq;
use crate::classical::{take_value, ClassicalValues};
use crate::error::{BloqError, BloqResult};
use crate::shaped::named;
use crate::symbol::WireSymbol;
use crate::tensor::{zero_state_tensor, Tensor, TensorSink, Wiring};

use super::Allocate;

/// Free (de-allocate) a register of the given data type.
///
/// One input, no outputs: the exact structural adjoint of [`Allocate`]. The
/// register must have been uncomputed back to the all-zero state first.
/// Classically, freeing a non-zero value is an error; in a tensor network
/// the contribution projects onto |0⟩, so a contraction norm below 1
/// reveals a failed uncomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Free {
    dtype: QDType,
}

impl Free {
    /// Create a free of the given data type.
    pub fn new(dtype: QDType) -> Self {
        Self { dtype }
    }

    /// The data type of the freed register.
    pub fn dtype(&self) -> &QDType {
        &self.dtype
    }
}

impl Bloq for Free {
    fn name(&self) -> &'static str {
        "free"
    }

    fn signature(&self) -> Signature {
        Signature::new([Register::new("reg", self.dtype.clone()).with_side(Side::Left)])
    }

    fn adjoint(&self) -> Arc<dyn Bloq> {
        Arc::new(Allocate::new(self.dtype.clone()))
    }

    fn on_classical(&self, mut vals: ClassicalValues) -> BloqResult<ClassicalValues> {
        let value = *take_value(&mut vals, "reg")?.as_scalar("reg")?;
        if value != 0 {
            return Err(BloqError::FreeNonZero { value });
        }
        Ok(ClassicalValues::default())
    }

    fn add_tensor(
        &self,
        network: &mut dyn TensorSink,
        incoming: &Wiring,
        _outgoing: &Wiring,
    ) -> BloqResult<()> {
        let ind = *named(incoming, "reg")?.as_scalar("reg")?;
        let data = zero_state_tensor(self.dtype.concrete_num_qubits()?)?;
        network.add(Tensor::new(data, vec![ind], self.name()));
        Ok(())
    }

    fn wire_symbol(&self, reg: Option<&Register>, _idx: &[usize]) -> WireSymbol {
        match reg {
            None => WireSymbol::text(self.name()),
            Some(_) => WireSymbol::text_box("free", Side::Left),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
