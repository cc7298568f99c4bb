//! Reinterpret a register under another data type.

use std::any::Any;
use std::sync::Arc;

use alsvid_ir::{QDType, Register, Side, Signature};
use serde::{Deserialize, Serialize};

use crate::bloq::Bloq;
use crate::classical::{take_value, ClassicalValues};
use crate::error::{BloqError, BloqResult};
use crate::shaped::named;
use crate::tensor::{identity_tensor, Tensor, TensorSink, Wiring};
use crate::wire::WireValues;

/// Cast a register from one data type to another of the same width.
///
/// The underlying bits are untouched; only the logical type changes. The
/// register may be multi-dimensional, in which case the shape is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    inp_dtype: QDType,
    out_dtype: QDType,
    shape: Vec<usize>,
}

impl Cast {
    /// Create a cast between two data types.
    ///
    /// Fails when both widths are concrete and unequal; a symbolic width on
    /// either side defers the check.
    pub fn try_new(inp_dtype: QDType, out_dtype: QDType) -> BloqResult<Self> {
        if let (Some(inp), Some(out)) = (
            inp_dtype.num_qubits().value(),
            out_dtype.num_qubits().value(),
        ) {
            if inp != out {
                return Err(BloqError::CastWidthMismatch { inp, out });
            }
        }
        Ok(Self {
            inp_dtype,
            out_dtype,
            shape: Vec::new(),
        })
    }

    /// Copy of this cast applied element-wise over an array register.
    #[must_use]
    pub fn with_shape(mut self, shape: impl Into<Vec<usize>>) -> Self {
        self.shape = shape.into();
        self
    }

    /// The data type cast from.
    pub fn inp_dtype(&self) -> &QDType {
        &self.inp_dtype
    }

    /// The data type cast to.
    pub fn out_dtype(&self) -> &QDType {
        &self.out_dtype
    }
}

impl Bloq for Cast {
    fn name(&self) -> &'static str {
        "cast"
    }

    fn signature(&self) -> Signature {
        Signature::new([
            Register::new("reg", self.inp_dtype.clone())
                .with_shape(self.shape.clone())
                .with_side(Side::Left),
            Register::new("reg", self.out_dtype.clone())
                .with_shape(self.shape.clone())
                .with_side(Side::Right),
        ])
    }

    fn adjoint(&self) -> Arc<dyn Bloq> {
        Arc::new(Self {
            inp_dtype: self.out_dtype.clone(),
            out_dtype: self.inp_dtype.clone(),
            shape: self.shape.clone(),
        })
    }

    /// Pass the value through unchanged.
    ///
    /// Known limitation: the value is not re-encoded under the output
    /// type's semantics. Kept as-is deliberately; the surrounding layers
    /// rely on the current behavior.
    fn on_classical(&self, mut vals: ClassicalValues) -> BloqResult<ClassicalValues> {
        let value = take_value(&mut vals, "reg")?;
        let mut out = ClassicalValues::default();
        out.insert("reg".to_string(), value);
        Ok(out)
    }

    fn add_tensor(
        &self,
        network: &mut dyn TensorSink,
        incoming: &Wiring,
        outgoing: &Wiring,
    ) -> BloqResult<()> {
        let inp = *named(incoming, "reg")?.as_scalar("reg")?;
        let out = *named(outgoing, "reg")?.as_scalar("reg")?;
        let k = self.inp_dtype.concrete_num_qubits()?;
        let dim = 1usize << k;
        let data = identity_tensor(k, &[dim])?;
        network.add(Tensor::new(data, vec![out, inp], self.name()));
        Ok(())
    }

    fn map_wires(&self, wires: WireValues) -> BloqResult<WireValues> {
        Ok(wires)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaped::Shaped;
    use crate::tensor::{TensorIndex, TensorNetwork};
    use alsvid_ir::SymbolicInt;

    #[test]
    fn test_equal_widths_succeed() {
        assert!(Cast::try_new(QDType::uint(4), QDType::any(4)).is_ok());
    }

    #[test]
    fn test_unequal_widths_fail() {
        assert!(matches!(
            Cast::try_new(QDType::uint(4), QDType::any(5)),
            Err(BloqError::CastWidthMismatch { inp: 4, out: 5 })
        ));
    }

    #[test]
    fn test_symbolic_width_defers_check() {
        let n = QDType::QAny(SymbolicInt::symbol("n"));
        assert!(Cast::try_new(n.clone(), QDType::uint(4)).is_ok());
        assert!(Cast::try_new(QDType::uint(4), n).is_ok());
    }

    #[test]
    fn test_signature_preserves_shape() {
        let cast = Cast::try_new(QDType::uint(2), QDType::any(2))
            .unwrap()
            .with_shape([3, 2]);
        let sig = cast.signature();
        assert_eq!(sig.find("reg", Side::Left).unwrap().shape(), &[3, 2]);
        assert_eq!(sig.find("reg", Side::Right).unwrap().shape(), &[3, 2]);
        assert_eq!(sig.find("reg", Side::Right).unwrap().dtype(), &QDType::any(2));
    }

    #[test]
    fn test_classical_is_pass_through() {
        let cast = Cast::try_new(QDType::uint(3), QDType::any(3)).unwrap();
        let mut vals = ClassicalValues::default();
        vals.insert("reg".to_string(), Shaped::Scalar(6));
        let out = cast.on_classical(vals).unwrap();
        assert_eq!(*out["reg"].as_scalar("reg").unwrap(), 6);
    }

    #[test]
    fn test_tensor_is_square_identity() {
        let cast = Cast::try_new(QDType::uint(2), QDType::any(2)).unwrap();
        let mut network = TensorNetwork::new();
        let mut incoming = Wiring::default();
        incoming.insert("reg".to_string(), Shaped::Scalar(TensorIndex(0)));
        let mut outgoing = Wiring::default();
        outgoing.insert("reg".to_string(), Shaped::Scalar(TensorIndex(1)));
        cast.add_tensor(&mut network, &incoming, &outgoing).unwrap();
        let tensor = &network.tensors()[0];
        assert_eq!(tensor.data.shape(), &[4, 4]);
        assert_eq!(tensor.inds, vec![TensorIndex(1), TensorIndex(0)]);
    }

    #[test]
    fn test_adjoint_swaps_dtypes() {
        let cast = Cast::try_new(QDType::uint(3), QDType::any(3)).unwrap();
        let adj = cast.adjoint();
        let adj = adj.as_any().downcast_ref::<Cast>().unwrap();
        assert_eq!(adj.inp_dtype(), &QDType::any(3));
        assert_eq!(adj.out_dtype(), &QDType::uint(3));
    }
}
