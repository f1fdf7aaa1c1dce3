//! Shape changes that keep the row-major flattening intact.
use crate::array::{rejected, Array2D};
use crate::error::{ArrayError, Result};
use crate::shape::Shape;

impl<T> Array2D<T> {
    /// A copy of this array viewed as `dim0 x dim1`.
    ///
    /// Element `k` of the flattening stays element `k`; this is not a
    /// transpose. `self` is left untouched.
    pub fn reshape(&self, dim0: usize, dim1: usize) -> Result<Array2D<T>>
    where
        T: Clone,
    {
        let shape = Shape::new(dim0, dim1).map_err(rejected)?;
        self.reshape_to(shape)
    }

    pub fn reshape_to(&self, shape: Shape) -> Result<Array2D<T>>
    where
        T: Clone,
    {
        self.check_reshape(shape)?;
        log::trace!("reshaping {} into {}", self.shape(), shape);
        Array2D::from_shape_vec(shape, self.as_slice().to_vec())
    }

    /// Moves the storage into `shape` without copying.
    pub fn into_shape(self, shape: Shape) -> Result<Array2D<T>> {
        self.check_reshape(shape)?;
        log::trace!("reinterpreting {} as {}", self.shape(), shape);
        Array2D::from_shape_vec(shape, self.into_raw_vec())
    }

    fn check_reshape(&self, shape: Shape) -> Result<()> {
        if shape.len() != self.len() {
            return Err(rejected(ArrayError::SizeMismatch {
                from: self.shape(),
                to: shape,
            }));
        }
        Ok(())
    }
}
