//! Partition a flat register into named sub-registers.

use std::any::Any;
use std::sync::Arc;

use alsvid_ir::{QDType, Register, Side, Signature};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bloq::Bloq;
use crate::classical::{bits_to_int, int_to_bits, take_value, ClassicalValues};
use crate::error::{BloqError, BloqResult};
use crate::shaped::{named, Shaped};
use crate::tensor::{identity_tensor, Tensor, TensorSink, Wiring};
use crate::wire::WireValues;

/// Reshape one flat `n`-bit register into named, possibly shaped parts.
///
/// The lumped register is always called `x`. The parts are the
/// caller-supplied registers, whose declared `side` is ignored: with
/// `partition` set the parts sit on the right and `x` on the left, and the
/// adjoint flips the flag rather than rearranging any bits.
///
/// Slicing is positional: bits are assigned to parts in declaration order,
/// each part consuming `volume × bitsize` bits, shaped parts filling
/// row-major. The combined bit count of the parts must equal `n`; this is a
/// caller obligation, not a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    n: u64,
    regs: Vec<Register>,
    partition: bool,
}

impl Partition {
    /// Create a partition of an `n`-bit register into `regs`.
    ///
    /// Part names must be distinct and must not collide with the lumped
    /// register `x`; part widths must be concrete.
    pub fn try_new(n: u64, regs: Vec<Register>) -> BloqResult<Self> {
        for reg in &regs {
            reg.dtype().concrete_num_qubits()?;
        }
        let partition = Self {
            n,
            regs,
            partition: true,
        };
        Signature::try_new(partition.build_registers())?;
        Ok(partition)
    }

    /// The total bit count of the lumped register.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// The sub-registers, in slicing order.
    pub fn regs(&self) -> &[Register] {
        &self.regs
    }

    /// Whether this instance partitions (true) or un-partitions (false).
    pub fn is_partition(&self) -> bool {
        self.partition
    }

    fn build_registers(&self) -> Vec<Register> {
        let (lumped, parts) = if self.partition {
            (Side::Left, Side::Right)
        } else {
            (Side::Right, Side::Left)
        };
        let mut registers = vec![Register::new("x", QDType::any(self.n)).with_side(lumped)];
        registers.extend(self.regs.iter().map(|reg| reg.clone().with_side(parts)));
        registers
    }

    fn classical_partition(&self, x: u64) -> BloqResult<ClassicalValues> {
        let xbits = int_to_bits(x, self.n)?;
        let mut out = ClassicalValues::default();
        let mut start = 0;
        for reg in &self.regs {
            let bitsize = reg_bits(reg) as usize;
            let size = reg.volume() as usize * bitsize;
            let slice = &xbits[start..start + size];
            let value = if reg.shape().is_empty() {
                Shaped::Scalar(bits_to_int(slice)?)
            } else {
                let ints = slice
                    .chunks(bitsize)
                    .map(bits_to_int)
                    .collect::<BloqResult<Vec<_>>>()?;
                Shaped::from_shape_vec(reg.shape(), ints)?
            };
            out.insert(reg.name().to_string(), value);
            start += size;
        }
        Ok(out)
    }

    fn classical_unpartition(&self, mut vals: ClassicalValues) -> BloqResult<ClassicalValues> {
        let mut bits = Vec::with_capacity(self.n as usize);
        for reg in &self.regs {
            let value = take_value(&mut vals, reg.name())?;
            let bitsize = reg_bits(reg);
            let elements = value.elements();
            if elements.len() as u64 != reg.volume() {
                return Err(BloqError::ElementCountMismatch {
                    register: reg.name().to_string(),
                    expected: reg.volume() as usize,
                    got: elements.len(),
                });
            }
            for element in elements {
                bits.extend(int_to_bits(element, bitsize)?);
            }
        }
        let mut out = ClassicalValues::default();
        out.insert("x".to_string(), Shaped::Scalar(bits_to_int(&bits)?));
        Ok(out)
    }
}

impl Bloq for Partition {
    fn name(&self) -> &'static str {
        "partition"
    }

    fn signature(&self) -> Signature {
        Signature::new(self.build_registers())
    }

    fn adjoint(&self) -> Arc<dyn Bloq> {
        Arc::new(Self {
            partition: !self.partition,
            ..self.clone()
        })
    }

    fn on_classical(&self, mut vals: ClassicalValues) -> BloqResult<ClassicalValues> {
        if self.partition {
            let x = *take_value(&mut vals, "x")?.as_scalar("x")?;
            self.classical_partition(x)
        } else {
            self.classical_unpartition(vals)
        }
    }

    fn add_tensor(
        &self,
        network: &mut dyn TensorSink,
        incoming: &Wiring,
        outgoing: &Wiring,
    ) -> BloqResult<()> {
        let (lumped, parts) = if self.partition {
            (incoming, outgoing)
        } else {
            (outgoing, incoming)
        };

        let mut leg_dims = Vec::new();
        let mut inds = Vec::new();
        for reg in &self.regs {
            let wired = named(parts, reg.name())?;
            let volume = reg.volume() as usize;
            let dim = 1usize << reg_bits(reg);
            match wired {
                Shaped::Scalar(ind) => {
                    // A scalar wiring stands in for every element of the part.
                    for _ in 0..volume {
                        leg_dims.push(dim);
                        inds.push(*ind);
                    }
                }
                Shaped::Array(wired) => {
                    if wired.len() != volume {
                        return Err(BloqError::ElementCountMismatch {
                            register: reg.name().to_string(),
                            expected: volume,
                            got: wired.len(),
                        });
                    }
                    for ind in wired {
                        leg_dims.push(dim);
                        inds.push(*ind);
                    }
                }
            }
        }
        inds.push(*named(lumped, "x")?.as_scalar("x")?);

        debug!(n = self.n, legs = leg_dims.len(), "partition tensor");
        let data = identity_tensor(self.n, &leg_dims)?;
        network.add(Tensor::new(data, inds, self.name()));
        Ok(())
    }

    fn map_wires(&self, mut wires: WireValues) -> BloqResult<WireValues> {
        if self.partition {
            let flat = named(&wires, "x")?.elements();
            let mut out = WireValues::default();
            let mut start = 0;
            for reg in &self.regs {
                let bitsize = reg_bits(reg) as usize;
                let size = reg.volume() as usize * bitsize;
                let mut shape = reg.shape().to_vec();
                shape.push(bitsize);
                let value = Shaped::from_shape_vec(&shape, flat[start..start + size].to_vec())?;
                out.insert(reg.name().to_string(), value);
                start += size;
            }
            Ok(out)
        } else {
            let mut flat = Vec::with_capacity(self.n as usize);
            for reg in &self.regs {
                flat.extend(named(&wires, reg.name())?.elements());
                wires.remove(reg.name());
            }
            let mut out = WireValues::default();
            out.insert("x".to_string(), Shaped::from_vec(flat));
            Ok(out)
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn reg_bits(reg: &Register) -> u64 {
    reg.bitsize()
        .value()
        .expect("part widths were checked at construction")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{TensorIndex, TensorNetwork};
    use crate::wire::WireId;

    fn lo_hi() -> Partition {
        Partition::try_new(
            4,
            vec![
                Register::new("lo", QDType::uint(2)),
                Register::new("hi", QDType::uint(2)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_signature_sides_override_caller() {
        let partition = Partition::try_new(
            3,
            vec![Register::new("a", QDType::uint(3)).with_side(Side::Left)],
        )
        .unwrap();
        let sig = partition.signature();
        assert_eq!(sig.find("x", Side::Left).unwrap().total_bits().value(), Some(3));
        assert_eq!(sig.find("a", Side::Right).unwrap().side(), Side::Right);
        assert!(sig.find("a", Side::Left).is_none());
    }

    #[test]
    fn test_duplicate_part_name_rejected() {
        let result = Partition::try_new(
            4,
            vec![
                Register::new("a", QDType::uint(2)),
                Register::new("a", QDType::uint(2)),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_part_named_x_rejected() {
        let result = Partition::try_new(4, vec![Register::new("x", QDType::uint(4))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_classical_eleven_into_lo_hi() {
        // 11 = 0b1011 sliced MSB-first: lo takes bits [1,0], hi takes [1,1].
        let mut vals = ClassicalValues::default();
        vals.insert("x".to_string(), Shaped::Scalar(11));
        let out = lo_hi().on_classical(vals).unwrap();
        assert_eq!(*out["lo"].as_scalar("lo").unwrap(), 0b10);
        assert_eq!(*out["hi"].as_scalar("hi").unwrap(), 0b11);
    }

    #[test]
    fn test_classical_roundtrip_with_shaped_part() {
        let partition = Partition::try_new(
            8,
            vec![
                Register::new("pair", QDType::uint(3)).with_shape([2]),
                Register::new("tail", QDType::uint(2)),
            ],
        )
        .unwrap();
        let mut vals = ClassicalValues::default();
        vals.insert("x".to_string(), Shaped::Scalar(0b10111001));
        let parts = partition.on_classical(vals).unwrap();
        assert_eq!(parts["pair"].elements(), vec![0b101, 0b110]);
        assert_eq!(*parts["tail"].as_scalar("tail").unwrap(), 0b01);

        let unpartition = Partition {
            partition: false,
            ..partition
        };
        let back = unpartition.on_classical(parts).unwrap();
        assert_eq!(*back["x"].as_scalar("x").unwrap(), 0b10111001);
    }

    #[test]
    fn test_declared_bits_sum_to_n() {
        let partition = lo_hi();
        let declared: u64 = partition
            .regs()
            .iter()
            .map(|reg| reg.total_bits().value().unwrap())
            .sum();
        assert_eq!(declared, partition.n());
    }

    #[test]
    fn test_tensor_rank_counts_elements() {
        let partition = Partition::try_new(
            6,
            vec![
                Register::new("pair", QDType::uint(2)).with_shape([2]),
                Register::new("tail", QDType::uint(2)),
            ],
        )
        .unwrap();
        let mut network = TensorNetwork::new();
        let mut incoming = Wiring::default();
        incoming.insert("x".to_string(), Shaped::Scalar(TensorIndex(9)));
        let mut outgoing = Wiring::default();
        outgoing.insert(
            "pair".to_string(),
            Shaped::from_vec(vec![TensorIndex(0), TensorIndex(1)]),
        );
        outgoing.insert("tail".to_string(), Shaped::Scalar(TensorIndex(2)));
        partition
            .add_tensor(&mut network, &incoming, &outgoing)
            .unwrap();
        let tensor = &network.tensors()[0];
        // Three partitioned elements plus the lumped index.
        assert_eq!(tensor.rank(), 4);
        assert_eq!(tensor.data.shape(), &[4, 4, 4, 64]);
        assert_eq!(tensor.inds.last(), Some(&TensorIndex(9)));
    }

    #[test]
    fn test_map_wires_partition_and_back() {
        let partition = lo_hi();
        let mut wires = WireValues::default();
        wires.insert(
            "x".to_string(),
            Shaped::from_vec((0..4).map(WireId).collect()),
        );
        let parts = partition.map_wires(wires).unwrap();
        assert_eq!(parts["lo"].as_array("lo").unwrap().shape(), &[2]);
        assert_eq!(parts["lo"].elements(), vec![WireId(0), WireId(1)]);
        assert_eq!(parts["hi"].elements(), vec![WireId(2), WireId(3)]);

        let unpartition = Partition {
            partition: false,
            ..partition
        };
        let back = unpartition.map_wires(parts).unwrap();
        assert_eq!(
            back["x"].elements(),
            (0..4).map(WireId).collect::<Vec<_>>()
        );
    }
}
