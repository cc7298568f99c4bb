//! Tensor-network contributions.
//!
//! Each bookkeeping operation is represented in a contraction network by a
//! single identity-like tensor wired onto caller-supplied indices. The
//! network itself is an external accumulator: this module only defines the
//! tensor value, the opaque index handle, and the [`TensorSink`] capability
//! the caller injects. The core has no compiled dependency on any particular
//! contraction engine.

use ndarray::{ArrayD, IxDyn};
use num_complex::Complex64;
use rustc_hash::FxHashMap;

use crate::error::{BloqError, BloqResult};
use crate::shaped::Shaped;

/// Opaque identifier for one tensor index in a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TensorIndex(pub u64);

/// Index wiring for one backend call, keyed by register name.
pub type Wiring = FxHashMap<String, Shaped<TensorIndex>>;

/// One tensor contributed to a contraction network.
#[derive(Debug, Clone)]
pub struct Tensor {
    /// The tensor data; one axis per entry of `inds`.
    pub data: ArrayD<Complex64>,
    /// Network indices, one per axis of `data`, in axis order.
    pub inds: Vec<TensorIndex>,
    /// Short tag naming the contributing operation.
    pub tag: String,
}

impl Tensor {
    /// Create a tensor contribution.
    pub fn new(data: ArrayD<Complex64>, inds: Vec<TensorIndex>, tag: impl Into<String>) -> Self {
        Self {
            data,
            inds,
            tag: tag.into(),
        }
    }

    /// The tensor rank.
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }
}

/// Capability for appending tensors to a caller-owned network.
///
/// Operations only ever append; they never read back or remove. The caller
/// owns synchronization of the underlying network object.
pub trait TensorSink {
    /// Append one tensor to the network.
    fn add(&mut self, tensor: Tensor);
}

/// A plain vector-backed network, for tests and callers without an engine.
#[derive(Debug, Clone, Default)]
pub struct TensorNetwork {
    tensors: Vec<Tensor>,
}

impl TensorNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated tensors, in insertion order.
    pub fn tensors(&self) -> &[Tensor] {
        &self.tensors
    }

    /// Number of accumulated tensors.
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    /// Whether no tensors have been added.
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }
}

impl TensorSink for TensorNetwork {
    fn add(&mut self, tensor: Tensor) {
        self.tensors.push(tensor);
    }
}

/// The `2^total_bits` identity matrix reshaped to `leg_dims + [2^total_bits]`.
///
/// `leg_dims` must multiply to `2^total_bits`; the legs enumerate the
/// partitioned side of the identity in row-major order and the final axis is
/// the lumped side.
pub fn identity_tensor(total_bits: u64, leg_dims: &[usize]) -> BloqResult<ArrayD<Complex64>> {
    let dim = checked_dim(total_bits)?;
    debug_assert_eq!(
        leg_dims.iter().product::<usize>(),
        dim,
        "identity legs must multiply to the lumped dimension"
    );
    let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
    for i in 0..dim {
        data[i * dim + i] = Complex64::new(1.0, 0.0);
    }
    let mut shape: Vec<usize> = leg_dims.to_vec();
    shape.push(dim);
    Ok(ArrayD::from_shape_vec(IxDyn(&shape), data).expect("leg dims multiply to the matrix side"))
}

/// The rank-1 one-hot tensor for a `total_bits`-qubit register in |0⟩.
///
/// Attached to an output index it states the register starts out zero;
/// attached to an input index it projects onto the zero state, so a
/// contraction whose norm stays 1 certifies correct uncomputation.
pub fn zero_state_tensor(total_bits: u64) -> BloqResult<ArrayD<Complex64>> {
    let dim = checked_dim(total_bits)?;
    let mut data = vec![Complex64::new(0.0, 0.0); dim];
    data[0] = Complex64::new(1.0, 0.0);
    Ok(ArrayD::from_shape_vec(IxDyn(&[dim]), data).expect("one-hot data matches its shape"))
}

fn checked_dim(total_bits: u64) -> BloqResult<usize> {
    u32::try_from(total_bits)
        .ok()
        .and_then(|bits| 1usize.checked_shl(bits))
        .ok_or(BloqError::WidthTooLarge { bits: total_bits })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_tensor_shape() {
        let tensor = identity_tensor(3, &[2, 2, 2]).unwrap();
        assert_eq!(tensor.shape(), &[2, 2, 2, 8]);
        // Row 5 of the identity decomposes into legs (1, 0, 1).
        assert_eq!(tensor[[1, 0, 1, 5]], Complex64::new(1.0, 0.0));
        assert_eq!(tensor[[1, 0, 1, 4]], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_identity_tensor_lumped_legs() {
        let tensor = identity_tensor(4, &[4, 4]).unwrap();
        assert_eq!(tensor.shape(), &[4, 4, 16]);
        assert_eq!(tensor[[2, 3, 11]], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_zero_state_tensor() {
        let tensor = zero_state_tensor(2).unwrap();
        assert_eq!(tensor.shape(), &[4]);
        assert_eq!(tensor[[0]], Complex64::new(1.0, 0.0));
        assert_eq!(
            tensor.iter().filter(|a| a.norm() != 0.0).count(),
            1
        );
    }

    #[test]
    fn test_width_guard() {
        assert!(matches!(
            identity_tensor(200, &[]),
            Err(BloqError::WidthTooLarge { bits: 200 })
        ));
    }

    #[test]
    fn test_network_accumulates() {
        let mut network = TensorNetwork::new();
        network.add(Tensor::new(
            zero_state_tensor(1).unwrap(),
            vec![TensorIndex(0)],
            "alloc",
        ));
        assert_eq!(network.len(), 1);
        assert_eq!(network.tensors()[0].rank(), 1);
    }
}
