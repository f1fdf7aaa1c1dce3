use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use ndarray::{ArrayBase, Data, Ix2};

use crate::config::TraversalConfig;
use crate::error::{ArrayError, Result};
use crate::line::{Line, Lines};
use crate::shape::{Axis, Shape};

/// A fixed-shape two-dimensional array stored row-major in one `Vec`.
///
/// Element `(i0, i1)` lives at offset `i0 * dim1 + i1`. Iteration, the flat
/// accessors and every constructor agree on this order.
///
/// `PartialEq` compares shape *and* content. The shape-only comparison that
/// some callers rely on is available separately as
/// [`Array2D::structural_eq`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Array2D<T> {
    data: Vec<T>,
    shape: Shape,
}

impl<T> Array2D<T> {
    /// A `dim0 x dim1` array filled with `T::default()`.
    pub fn new(dim0: usize, dim1: usize) -> Result<Self>
    where
        T: Default,
    {
        Ok(Self::with_shape(Shape::new(dim0, dim1).map_err(rejected)?))
    }

    /// Like [`Array2D::new`] for lengths coming from signed arithmetic.
    ///
    /// Negative lengths are rejected naming `dim0` or `dim1`; `dim0` is checked
    /// first.
    pub fn from_signed_dims(dim0: i64, dim1: i64) -> Result<Self>
    where
        T: Default,
    {
        let shape = Shape::try_from((dim0, dim1)).map_err(rejected)?;
        Ok(Self::with_shape(shape))
    }

    pub fn with_shape(shape: Shape) -> Self
    where
        T: Default,
    {
        let mut data = Vec::with_capacity(shape.len());
        data.resize_with(shape.len(), T::default);
        Self { data, shape }
    }

    pub fn from_elem(shape: Shape, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; shape.len()],
            shape,
        }
    }

    /// Wraps a flat row-major buffer.
    pub fn from_shape_vec(shape: Shape, data: Vec<T>) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(rejected(ArrayError::BufferLength {
                shape,
                len: data.len(),
            }));
        }
        Ok(Self { data, shape })
    }

    /// Builds an array from equally sized rows, cloning every element.
    ///
    /// `dim1` is taken from the first row (0 if there are none); any later row
    /// of another length is rejected.
    pub fn from_jagged<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let dim1 = check_rows(rows.iter().map(|row| row.as_ref().len()))?;
        let shape = Shape::new(rows.len(), dim1).map_err(rejected)?;
        let mut data = Vec::with_capacity(shape.len());
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        log::trace!("collected jagged source into {}", shape);
        Ok(Self { data, shape })
    }

    pub fn nrows(&self) -> usize {
        self.shape.dim0()
    }

    pub fn ncols(&self) -> usize {
        self.shape.dim1()
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Extent along `dimension` (0 for rows, 1 for columns).
    pub fn len_of(&self, dimension: usize) -> Result<usize> {
        let axis = Axis::try_from(dimension).map_err(rejected)?;
        Ok(self.shape.dim(axis))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_raw_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn offset(&self, i0: usize, i1: usize) -> Result<usize> {
        if i0 >= self.shape.dim0() {
            return Err(ArrayError::IndexOutOfBounds {
                param: "i0",
                index: i0,
                len: self.shape.dim0(),
            });
        }
        if i1 >= self.shape.dim1() {
            return Err(ArrayError::IndexOutOfBounds {
                param: "i1",
                index: i1,
                len: self.shape.dim1(),
            });
        }
        Ok(i0 * self.shape.dim1() + i1)
    }

    #[inline]
    fn coords(&self, offset: usize) -> (usize, usize) {
        (offset / self.shape.dim1(), offset % self.shape.dim1())
    }

    pub fn get(&self, i0: usize, i1: usize) -> Result<&T> {
        let offset = self.offset(i0, i1).map_err(rejected)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, i0: usize, i1: usize) -> Result<&mut T> {
        let offset = self.offset(i0, i1).map_err(rejected)?;
        Ok(&mut self.data[offset])
    }

    pub fn set(&mut self, i0: usize, i1: usize, value: T) -> Result<()> {
        *self.get_mut(i0, i1)? = value;
        Ok(())
    }

    /// Position of the first element equal to `item`, scanning row-major.
    pub fn index_of(&self, item: &T) -> Option<(usize, usize)>
    where
        T: PartialEq,
    {
        self.position(|value| value == item)
    }

    pub fn position<F>(&self, predicate: F) -> Option<(usize, usize)>
    where
        F: FnMut(&T) -> bool,
    {
        self.data
            .iter()
            .position(predicate)
            .map(|offset| self.coords(offset))
    }

    /// One row (`dimension == 0`) or column (`dimension == 1`).
    ///
    /// The returned iterator reads straight from this array's storage; call
    /// again or clone it to walk the same line twice.
    pub fn line(&self, dimension: usize, index: usize, reverse: bool) -> Result<Line<'_, T>> {
        let axis = Axis::try_from(dimension).map_err(rejected)?;
        let count = self.shape.dim(axis);
        if index >= count {
            return Err(rejected(ArrayError::IndexOutOfBounds {
                param: "index",
                index,
                len: count,
            }));
        }
        Ok(Line::new(&self.data, self.shape, axis, index, reverse))
    }

    /// Every row or every column as a [`Line`].
    ///
    /// `reverse_items` flips the direction within each line, `reverse_lines`
    /// flips the order of the lines; the two are independent.
    pub fn lines(
        &self,
        dimension: usize,
        reverse_items: bool,
        reverse_lines: bool,
    ) -> Result<Lines<'_, T>> {
        let axis = Axis::try_from(dimension).map_err(rejected)?;
        Ok(Lines::new(
            &self.data,
            self.shape,
            axis,
            reverse_items,
            reverse_lines,
        ))
    }

    pub fn lines_with(&self, config: &TraversalConfig) -> Lines<'_, T> {
        Lines::new(
            &self.data,
            self.shape,
            config.axis,
            config.reverse_items,
            config.reverse_lines,
        )
    }

    pub fn rows(&self) -> Lines<'_, T> {
        Lines::new(&self.data, self.shape, Axis::Row, false, false)
    }

    pub fn columns(&self) -> Lines<'_, T> {
        Lines::new(&self.data, self.shape, Axis::Column, false, false)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn mapv<U, F>(&self, f: F) -> Array2D<U>
    where
        F: FnMut(&T) -> U,
    {
        Array2D {
            data: self.data.iter().map(f).collect(),
            shape: self.shape,
        }
    }

    /// Copies into an owned `ndarray::Array2` of the same shape.
    pub fn to_ndarray(&self) -> ndarray::Array2<T>
    where
        T: Clone,
    {
        log::trace!("converting {} array to ndarray", self.shape);
        let dim1 = self.shape.dim1();
        ndarray::Array2::from_shape_fn(self.shape.as_tuple(), |(i0, i1)| {
            self.data[i0 * dim1 + i1].clone()
        })
    }

    /// Copies into one `Vec` per row.
    pub fn to_jagged(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(|row| row.cloned().collect()).collect()
    }
}

/// Logs a rejected call at debug level and hands the error back.
pub(crate) fn rejected(err: ArrayError) -> ArrayError {
    log::debug!("rejected array operation: {}", err);
    err
}

/// Common length of `lens`, or 0 when there are none.
fn check_rows<I>(lens: I) -> Result<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut lens = lens.into_iter();
    let expected = match lens.next() {
        Some(len) => len,
        None => return Ok(0),
    };
    for (row, found) in lens.enumerate() {
        if found != expected {
            return Err(rejected(ArrayError::RaggedRows {
                row: row + 1,
                expected,
                found,
            }));
        }
    }
    Ok(expected)
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.offset(index.0, index.1) {
            Ok(offset) => &self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.offset(index.0, index.1) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Array2D<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        Array2D {
            data: rows.into_iter().flatten().collect(),
            shape: Shape::from_existing(R, C),
        }
    }
}

impl<S, T> From<&ArrayBase<S, Ix2>> for Array2D<T>
where
    S: Data<Elem = T>,
    T: Clone,
{
    /// Flattens in logical row-major order, whatever the source's memory layout.
    fn from(source: &ArrayBase<S, Ix2>) -> Self {
        let (dim0, dim1) = source.dim();
        log::trace!("collecting ndarray of shape ({}, {})", dim0, dim1);
        Array2D {
            data: source.iter().cloned().collect(),
            shape: Shape::from_existing(dim0, dim1),
        }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Array2D<T> {
    type Error = ArrayError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        let dim1 = check_rows(rows.iter().map(Vec::len))?;
        let shape = Shape::new(rows.len(), dim1).map_err(rejected)?;
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Array2D { data, shape })
    }
}

impl<T> From<Array2D<T>> for Vec<T> {
    fn from(value: Array2D<T>) -> Self {
        value.data
    }
}

impl<T> IntoIterator for Array2D<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array2D<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array2D<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for Array2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i0, row) in self.rows().enumerate() {
            if i0 > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (i1, value) in row.enumerate() {
                if i1 > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
