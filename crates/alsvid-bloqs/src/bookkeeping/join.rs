//! Join single-bit parts back into one register.

use std::any::Any;
use std::sync::Arc;

use alsvid_ir::{QDType, Register, Side, Signature};
use serde::{Deserialize, Serialize};

use crate::bloq::Bloq;
use crate::classical::{bits_to_int, take_value, ClassicalValues};
use crate::error::{BloqError, BloqResult};
use crate::shaped::{named, Shaped};
use crate::tensor::{identity_tensor, Tensor, TensorSink, Wiring};
use crate::wire::WireValues;

use super::Split;

/// Join a length-`k` array of single bits into one bitsize-`k` register.
///
/// The exact adjoint of [`Split`]: the left register is a `(k,)`-shaped
/// array of [`QDType::QBit`], the right register carries the full data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Join {
    dtype: QDType,
}

impl Join {
    /// Create a join producing the given data type.
    ///
    /// The data type's bit width must be concrete: it fixes the input
    /// array shape.
    pub fn try_new(dtype: QDType) -> BloqResult<Self> {
        dtype.concrete_num_qubits()?;
        Ok(Self { dtype })
    }

    /// The data type of the right register.
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

impl Bloq for Join {
    fn name(&self) -> &'static str {
        "join"
    }

    fn signature(&self) -> Signature {
        let k = self.bits() as usize;
        Signature::new([
            Register::new("reg", QDType::QBit)
                .with_shape([k])
                .with_side(Side::Left),
            Register::new("reg", self.dtype.clone()).with_side(Side::Right),
        ])
    }

    fn adjoint(&self) -> Arc<dyn Bloq> {
        Arc::new(Split::try_new(self.dtype.clone()).expect("width was checked at construction"))
    }

    fn on_classical(&self, mut vals: ClassicalValues) -> BloqResult<ClassicalValues> {
        let value = take_value(&mut vals, "reg")?;
        let bits = value.as_array("reg")?;
        let k = self.bits() as usize;
        if bits.len() != k {
            return Err(BloqError::ElementCountMismatch {
                register: "reg".to_string(),
                expected: k,
                got: bits.len(),
            });
        }
        let joined = bits_to_int(&bits.iter().copied().collect::<Vec<_>>())?;
        let mut out = ClassicalValues::default();
        out.insert("reg".to_string(), Shaped::Scalar(joined));
        Ok(out)
    }

    fn add_tensor(
        &self,
        network: &mut dyn TensorSink,
        incoming: &Wiring,
        outgoing: &Wiring,
    ) -> BloqResult<()> {
        let parts = named(incoming, "reg")?.as_array("reg")?;
        let lumped = *named(outgoing, "reg")?.as_scalar("reg")?;

        let k = self.bits();
        let mut inds: Vec<_> = parts.iter().copied().collect();
        inds.push(lumped);
        let data = identity_tensor(k, &vec![2; k as usize])?;
        network.add(Tensor::new(data, inds, self.name()));
        Ok(())
    }

    fn map_wires(&self, mut wires: WireValues) -> BloqResult<WireValues> {
        let k = self.bits() as usize;
        let reg = named(&wires, "reg")?.reshaped("reg", &[k])?;
        wires.insert("reg".to_string(), reg);
        Ok(wires)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{TensorIndex, TensorNetwork};
    use crate::wire::WireId;

    fn join3() -> Join {
        Join::try_new(QDType::uint(3)).unwrap()
    }

    #[test]
    fn test_signature_mirrors_split() {
        let join_sig = join3().signature();
        let split_sig = Split::try_new(QDType::uint(3)).unwrap().signature();
        let join_lefts: Vec<_> = join_sig.lefts().map(|r| r.shape().to_vec()).collect();
        let split_rights: Vec<_> = split_sig.rights().map(|r| r.shape().to_vec()).collect();
        assert_eq!(join_lefts, split_rights);
    }

    #[test]
    fn test_classical_bits_back_to_five() {
        let mut vals = ClassicalValues::default();
        vals.insert("reg".to_string(), Shaped::from_vec(vec![1, 0, 1]));
        let out = join3().on_classical(vals).unwrap();
        assert_eq!(*out["reg"].as_scalar("reg").unwrap(), 5);
    }

    #[test]
    fn test_classical_requires_array() {
        let mut vals = ClassicalValues::default();
        vals.insert("reg".to_string(), Shaped::Scalar(5));
        assert!(matches!(
            join3().on_classical(vals),
            Err(BloqError::ExpectedArray { .. })
        ));
    }

    #[test]
    fn test_classical_wrong_length() {
        let mut vals = ClassicalValues::default();
        vals.insert("reg".to_string(), Shaped::from_vec(vec![1, 0]));
        assert!(matches!(
            join3().on_classical(vals),
            Err(BloqError::ElementCountMismatch { .. })
        ));
    }

    #[test]
    fn test_tensor_requires_array_input() {
        let mut network = TensorNetwork::new();
        let mut incoming = Wiring::default();
        incoming.insert("reg".to_string(), Shaped::Scalar(TensorIndex(0)));
        let mut outgoing = Wiring::default();
        outgoing.insert("reg".to_string(), Shaped::Scalar(TensorIndex(1)));
        assert!(matches!(
            join3().add_tensor(&mut network, &incoming, &outgoing),
            Err(BloqError::ExpectedArray { .. })
        ));
        assert!(network.is_empty());
    }

    #[test]
    fn test_tensor_contribution() {
        let mut network = TensorNetwork::new();
        let mut incoming = Wiring::default();
        incoming.insert(
            "reg".to_string(),
            Shaped::from_vec(vec![TensorIndex(0), TensorIndex(1), TensorIndex(2)]),
        );
        let mut outgoing = Wiring::default();
        outgoing.insert("reg".to_string(), Shaped::Scalar(TensorIndex(10)));
        join3()
            .add_tensor(&mut network, &incoming, &outgoing)
            .unwrap();
        let tensor = &network.tensors()[0];
        assert_eq!(tensor.data.shape(), &[2, 2, 2, 8]);
        assert_eq!(tensor.inds.last(), Some(&TensorIndex(10)));
    }

    #[test]
    fn test_map_wires_flattens() {
        let mut wires = WireValues::default();
        let shaped = Shaped::from_vec((0..3).map(WireId).collect())
            .reshaped("reg", &[3, 1])
            .unwrap();
        wires.insert("reg".to_string(), shaped);
        let out = join3().map_wires(wires).unwrap();
        assert_eq!(out["reg"].as_array("reg").unwrap().shape(), &[3]);
    }
}
