//! Split a register into single-bit parts.

use std::any::Any;
use std::sync::Arc;

use alsvid_ir::{QDType, Register, Side, Signature};
use serde::{Deserialize, Serialize};

use crate::bloq::Bloq;
use crate::classical::{int_to_bits, take_value, ClassicalValues};
use crate::error::BloqResult;
use crate::shaped::{named, Shaped};
use crate::tensor::{identity_tensor, Tensor, TensorSink, Wiring};
use crate::wire::WireValues;

use super::Join;

/// Split a bitsize-`k` register into a length-`k` array of single bits.
///
/// The left register carries the full data type; the right register is a
/// `(k,)`-shaped array of [`QDType::QBit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    dtype: QDType,
}

impl Split {
    /// Create a split of the given data type.
    ///
    /// The data type's bit width must be concrete: it fixes the output
    /// array shape.
    pub fn try_new(dtype: QDType) -> BloqResult<Self> {
        dtype.concrete_num_qubits()?;
        Ok(Self { dtype })
    }

    /// The data type of the left register.
    pub fn dtype(&self) -> &QDType {
        &self.dtype
    }

    fn bits(&self) -> u64 {
        self.dtype
            .num_qubits()
            .value()
            .expect("width was checked at construction")
    }
}

impl Bloq for Split {
    fn name(&self) -> &'static str {
        "split"
    }

    fn signature(&self) -> Signature {
        let k = self.bits() as usize;
        Signature::new([
            Register::new("reg", self.dtype.clone()).with_side(Side::Left),
            Register::new("reg", QDType::QBit)
                .with_shape([k])
                .with_side(Side::Right),
        ])
    }

    fn adjoint(&self) -> Arc<dyn Bloq> {
        Arc::new(Join::try_new(self.dtype.clone()).expect("width was checked at construction"))
    }

    fn on_classical(&self, mut vals: ClassicalValues) -> BloqResult<ClassicalValues> {
        let value = *take_value(&mut vals, "reg")?.as_scalar("reg")?;
        let bits = int_to_bits(value, self.bits())?;
        let mut out = ClassicalValues::default();
        out.insert("reg".to_string(), Shaped::from_vec(bits));
        Ok(out)
    }

    fn add_tensor(
        &self,
        network: &mut dyn TensorSink,
        incoming: &Wiring,
        outgoing: &Wiring,
    ) -> BloqResult<()> {
        let lumped = *named(incoming, "reg")?.as_scalar("reg")?;
        let parts = named(outgoing, "reg")?.as_array("reg")?;

        let k = self.bits();
        let mut inds: Vec<_> = parts.iter().copied().collect();
        inds.push(lumped);
        let data = identity_tensor(k, &vec![2; k as usize])?;
        network.add(Tensor::new(data, inds, self.name()));
        Ok(())
    }

    fn map_wires(&self, mut wires: WireValues) -> BloqResult<WireValues> {
        let k = self.bits() as usize;
        let reg = named(&wires, "reg")?.reshaped("reg", &[k, 1])?;
        wires.insert("reg".to_string(), reg);
        Ok(wires)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
