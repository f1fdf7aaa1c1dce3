//! Block copies from an [`Array2D`] into a larger rectangular destination.
use ndarray::{ArrayBase, DataMut, Ix2};

use crate::array::{rejected, Array2D};
use crate::error::{ArrayError, Result};

/// A rectangular destination that [`Array2D::copy_to`] can write into.
pub trait CopyTarget<T> {
    /// `(dim0, dim1)` of the destination.
    fn dims(&self) -> (usize, usize);

    /// Stores `value` at `(i0, i1)`, which the caller has bounds-checked.
    fn write(&mut self, i0: usize, i1: usize, value: T);

    /// Clones `values` into row `i0` starting at column `i1`.
    fn write_row(&mut self, i0: usize, i1: usize, values: &[T])
    where
        T: Clone,
    {
        for (j, value) in values.iter().enumerate() {
            self.write(i0, i1 + j, value.clone());
        }
    }
}

impl<T> CopyTarget<T> for Array2D<T> {
    fn dims(&self) -> (usize, usize) {
        self.shape().as_tuple()
    }

    fn write(&mut self, i0: usize, i1: usize, value: T) {
        let offset = i0 * self.ncols() + i1;
        self.as_mut_slice()[offset] = value;
    }

    fn write_row(&mut self, i0: usize, i1: usize, values: &[T])
    where
        T: Clone,
    {
        let start = i0 * self.ncols() + i1;
        self.as_mut_slice()[start..start + values.len()].clone_from_slice(values);
    }
}

impl<S, T> CopyTarget<T> for ArrayBase<S, Ix2>
where
    S: DataMut<Elem = T>,
{
    fn dims(&self) -> (usize, usize) {
        self.dim()
    }

    fn write(&mut self, i0: usize, i1: usize, value: T) {
        self[[i0, i1]] = value;
    }
}

impl<T, const R: usize, const C: usize> CopyTarget<T> for [[T; C]; R] {
    fn dims(&self) -> (usize, usize) {
        (R, C)
    }

    fn write(&mut self, i0: usize, i1: usize, value: T) {
        self[i0][i1] = value;
    }

    fn write_row(&mut self, i0: usize, i1: usize, values: &[T])
    where
        T: Clone,
    {
        self[i0][i1..i1 + values.len()].clone_from_slice(values);
    }
}

/// Fails unless `available >= index + extent` along `dimension`.
fn check_room(dimension: usize, index: usize, extent: usize, available: usize) -> Result<()> {
    match index.checked_add(extent) {
        Some(required) if required <= available => Ok(()),
        required => Err(rejected(ArrayError::DestinationTooSmall {
            dimension,
            required: required.unwrap_or(usize::MAX),
            available,
        })),
    }
}

impl<T> Array2D<T> {
    /// Copies every element so that source `(i, j)` lands on destination
    /// `(index0 + i, index1 + j)`.
    ///
    /// Destination cells outside that block keep their values. Nothing is
    /// written unless the whole block fits.
    pub fn copy_to<D>(&self, destination: &mut D, index0: usize, index1: usize) -> Result<()>
    where
        D: CopyTarget<T> + ?Sized,
        T: Clone,
    {
        let (dest0, dest1) = destination.dims();
        check_room(0, index0, self.nrows(), dest0)?;
        check_room(1, index1, self.ncols(), dest1)?;

        log::trace!(
            "copying {} block into ({}, {}) at ({}, {})",
            self.shape(),
            dest0,
            dest1,
            index0,
            index1
        );
        if self.ncols() == 0 {
            return Ok(());
        }
        for (i, row) in self.as_slice().chunks_exact(self.ncols()).enumerate() {
            destination.write_row(index0 + i, index1, row);
        }
        Ok(())
    }
}
