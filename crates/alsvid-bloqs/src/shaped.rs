//! Scalar-or-array containers for per-register backend values.

use ndarray::{ArrayD, IxDyn};
use rustc_hash::FxHashMap;

use crate::error::{BloqError, BloqResult};

/// A per-register value that is either a scalar or an n-dimensional array.
///
/// Every backend hands an operation one value per register name: a classical
/// integer, a tensor index, or a wire identifier. Scalar registers carry a
/// bare value; shaped registers carry an array whose shape mirrors the
/// register's. The two cases are kept distinct so operations can assert the
/// structural form they require.
#[derive(Debug, Clone, PartialEq)]
pub enum Shaped<T> {
    /// A value for a scalar register.
    Scalar(T),
    /// Values for a shaped register, one per element.
    Array(ArrayD<T>),
}

impl<T: Clone> Shaped<T> {
    /// Build a one-dimensional array value.
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        Shaped::Array(
            ArrayD::from_shape_vec(IxDyn(&[len]), values)
                .expect("1-d array length matches its data"),
        )
    }

    /// Build an array value with the given shape, row-major element order.
    pub fn from_shape_vec(shape: &[usize], values: Vec<T>) -> BloqResult<Self> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(BloqError::ElementCountMismatch {
                register: String::new(),
                expected,
                got: values.len(),
            });
        }
        Ok(Shaped::Array(
            ArrayD::from_shape_vec(IxDyn(shape), values)
                .expect("element count was checked against the shape"),
        ))
    }

    /// The scalar value, or a typed error naming the register.
    pub fn as_scalar(&self, register: &str) -> BloqResult<&T> {
        match self {
            Shaped::Scalar(value) => Ok(value),
            Shaped::Array(_) => Err(BloqError::ExpectedScalar {
                register: register.to_string(),
            }),
        }
    }

    /// The array value, or a typed error naming the register.
    pub fn as_array(&self, register: &str) -> BloqResult<&ArrayD<T>> {
        match self {
            Shaped::Array(values) => Ok(values),
            Shaped::Scalar(_) => Err(BloqError::ExpectedArray {
                register: register.to_string(),
            }),
        }
    }

    /// All elements in row-major order; a scalar yields one element.
    pub fn elements(&self) -> Vec<T> {
        match self {
            Shaped::Scalar(value) => vec![value.clone()],
            Shaped::Array(values) => values.iter().cloned().collect(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Shaped::Scalar(_) => 1,
            Shaped::Array(values) => values.len(),
        }
    }

    /// Whether there are no elements (possible for empty array shapes).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of this value reshaped to `shape`, row-major.
    pub fn reshaped(&self, register: &str, shape: &[usize]) -> BloqResult<Self> {
        let elements = self.elements();
        Self::from_shape_vec(shape, elements).map_err(|err| match err {
            BloqError::ElementCountMismatch { expected, got, .. } => {
                BloqError::ElementCountMismatch {
                    register: register.to_string(),
                    expected,
                    got,
                }
            }
            other => other,
        })
    }
}

/// Look up the value for `register` in a name-keyed backend map.
pub fn named<'a, T>(
    values: &'a FxHashMap<String, Shaped<T>>,
    register: &str,
) -> BloqResult<&'a Shaped<T>> {
    values.get(register).ok_or_else(|| BloqError::MissingRegister {
        register: register.to_string(),
    })
}
