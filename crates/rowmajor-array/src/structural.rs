//! Shape-only equality and ordering between arrays.
//!
//! These compare the `(dim0, dim1)` descriptors and nothing else: two arrays
//! of the same shape are structurally equal even when every element differs.
//! Use `==` when content matters.
use std::any::{type_name, Any};
use std::cmp::Ordering;

use crate::array::{rejected, Array2D};
use crate::error::{ArrayError, Result};

impl<T> Array2D<T> {
    /// `true` when both arrays have the same shape. Elements are not compared.
    pub fn structural_eq<U>(&self, other: &Array2D<U>) -> bool {
        self.structural_eq_by(other, |a, b| a == b)
    }

    /// Applies `comparer` to `(dim0, dim0')` and then `(dim1, dim1')`.
    pub fn structural_eq_by<U, F>(&self, other: &Array2D<U>, mut comparer: F) -> bool
    where
        F: FnMut(usize, usize) -> bool,
    {
        let (a0, a1) = self.shape().as_tuple();
        let (b0, b1) = other.shape().as_tuple();
        comparer(a0, b0) && comparer(a1, b1)
    }

    /// Orders by `dim0`, then `dim1`.
    pub fn cmp_shape<U>(&self, other: &Array2D<U>) -> Ordering {
        self.structural_cmp_by(other, Ord::cmp)
    }

    pub fn structural_cmp_by<U, F>(&self, other: &Array2D<U>, mut comparer: F) -> Ordering
    where
        F: FnMut(&usize, &usize) -> Ordering,
    {
        let (a0, a1) = self.shape().as_tuple();
        let (b0, b1) = other.shape().as_tuple();
        comparer(&a0, &b0).then_with(|| comparer(&a1, &b1))
    }

    /// Shape ordering against an untyped operand.
    ///
    /// A missing operand orders below any array. An operand that is not an
    /// `Array2D<T>` is a [`TypeMismatch`](ArrayError::TypeMismatch).
    pub fn structural_cmp(&self, other: Option<&dyn Any>) -> Result<Ordering>
    where
        T: 'static,
    {
        let other = match other {
            Some(other) => other,
            None => return Ok(Ordering::Greater),
        };
        match other.downcast_ref::<Array2D<T>>() {
            Some(other) => Ok(self.cmp_shape(other)),
            None => Err(rejected(ArrayError::TypeMismatch {
                expected: type_name::<T>(),
            })),
        }
    }
}
