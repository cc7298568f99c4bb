//! Allocate a fresh register.

use std::any::Any;
use std::sync::Arc;

use alsvid_ir::{QDType, Register, Side, Signature};
use serde::{Deserialize, Serialize};

use crate::bloq::Bloq;
use crate::classical::ClassicalValues;
use crate::error::BloqResult;
use crate::shaped::{named, Shaped};
use crate::symbol::WireSymbol;
use crate::tensor::{zero_state_tensor, Tensor, TensorSink, Wiring};

use super::Free;

/// Allocate a register of the given data type.
///
/// No inputs, one output. The fresh bits are guaranteed to start in the
/// all-zero state; the tensor contribution encodes exactly that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocate {
    dtype: QDType,
}

impl Allocate {
    /// Create an allocation of the given data type.
    pub fn new(dtype: QDType) -> Self {
        Self { dtype }
    }

    /// The data type of the allocated register.
    pub fn dtype(&self) -> &QDType {
        &self.dtype
    }
}

impl Bloq for Allocate {
    fn name(&self) -> &'static str {
        "alloc"
    }

    fn signature(&self) -> Signature {
        Signature::new([Register::new("reg", self.dtype.clone()).with_side(Side::Right)])
    }

    fn adjoint(&self) -> Arc<dyn Bloq> {
        Arc::new(Free::new(self.dtype.clone()))
    }

    fn on_classical(&self, _vals: ClassicalValues) -> BloqResult<ClassicalValues> {
        let mut out = ClassicalValues::default();
        out.insert("reg".to_string(), Shaped::Scalar(0));
        Ok(out)
    }

    fn add_tensor(
        &self,
        network: &mut dyn TensorSink,
        _incoming: &Wiring,
        outgoing: &Wiring,
    ) -> BloqResult<()> {
        let ind = *named(outgoing, "reg")?.as_scalar("reg")?;
        let data = zero_state_tensor(self.dtype.concrete_num_qubits()?)?;
        network.add(Tensor::new(data, vec![ind], self.name()));
        Ok(())
    }

    fn wire_symbol(&self, reg: Option<&Register>, _idx: &[usize]) -> WireSymbol {
        match reg {
            None => WireSymbol::text(self.name()),
            Some(_) => WireSymbol::text_box("alloc", Side::Right),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{TensorIndex, TensorNetwork};
    use num_complex::Complex64;

    #[test]
    fn test_signature_is_output_only() {
        let sig = Allocate::new(QDType::uint(4)).signature();
        assert_eq!(sig.lefts().count(), 0);
        assert_eq!(sig.rights().count(), 1);
        assert_eq!(sig.n_qubits_right(), Some(4));
    }

    #[test]
    fn test_classical_yields_zero() {
        let out = Allocate::new(QDType::uint(4))
            .on_classical(ClassicalValues::default())
            .unwrap();
        assert_eq!(*out["reg"].as_scalar("reg").unwrap(), 0);
    }

    #[test]
    fn test_tensor_is_one_hot_at_zero() {
        let mut network = TensorNetwork::new();
        let mut outgoing = Wiring::default();
        outgoing.insert("reg".to_string(), Shaped::Scalar(TensorIndex(0)));
        Allocate::new(QDType::uint(2))
            .add_tensor(&mut network, &Wiring::default(), &outgoing)
            .unwrap();
        let tensor = &network.tensors()[0];
        assert_eq!(tensor.data.shape(), &[4]);
        assert_eq!(tensor.data[[0]], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_wire_symbol() {
        let bloq = Allocate::new(QDType::uint(2));
        let reg = &bloq.signature().registers()[0].clone();
        assert_eq!(
            bloq.wire_symbol(Some(reg), &[]),
            WireSymbol::text_box("alloc", Side::Right)
        );
    }
}
