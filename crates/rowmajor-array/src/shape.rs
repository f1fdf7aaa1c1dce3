//! Shape descriptor and axis selector for [`Array2D`](crate::Array2D).
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArrayError, Result};

/// The `(dim0, dim1)` extent of a two-dimensional array.
///
/// A `Shape` always describes an element count that fits in `usize`, so
/// `dim0 * dim1` can be computed without overflow once one exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[usize; 2]")]
pub struct Shape {
    dim0: usize,
    dim1: usize,
}

impl Shape {
    pub fn new(dim0: usize, dim1: usize) -> Result<Self> {
        if dim0.checked_mul(dim1).is_none() {
            return Err(ArrayError::LengthOverflow { dim0, dim1 });
        }
        Ok(Self { dim0, dim1 })
    }

    /// For extents of a collection that is already allocated.
    pub(crate) fn from_existing(dim0: usize, dim1: usize) -> Self {
        Self { dim0, dim1 }
    }

    pub fn dim0(&self) -> usize {
        self.dim0
    }

    pub fn dim1(&self) -> usize {
        self.dim1
    }

    /// Extent along `axis`.
    pub fn dim(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.dim0,
            Axis::Column => self.dim1,
        }
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.dim0 * self.dim1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_tuple(&self) -> (usize, usize) {
        (self.dim0, self.dim1)
    }
}

fn non_negative(param: &'static str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(ArrayError::NegativeLength { param, value });
    }
    // Only reachable on targets where usize is narrower than i64.
    usize::try_from(value).map_err(|_| ArrayError::LengthOverflow {
        dim0: usize::MAX,
        dim1: usize::MAX,
    })
}

/// Validates signed lengths, reporting `dim0` before `dim1`.
impl TryFrom<(i64, i64)> for Shape {
    type Error = ArrayError;

    fn try_from((dim0, dim1): (i64, i64)) -> Result<Self> {
        let dim0 = non_negative("dim0", dim0)?;
        let dim1 = non_negative("dim1", dim1)?;
        Shape::new(dim0, dim1)
    }
}

impl TryFrom<[i64; 2]> for Shape {
    type Error = ArrayError;

    fn try_from(sizes: [i64; 2]) -> Result<Self> {
        Shape::try_from((sizes[0], sizes[1]))
    }
}

impl From<Shape> for [usize; 2] {
    fn from(shape: Shape) -> Self {
        [shape.dim0, shape.dim1]
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        shape.as_tuple()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dim0, self.dim1)
    }
}

/// Selects rows (`0`) or columns (`1`) for per-line traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Row = 0,
    Column = 1,
}

impl Axis {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Default for Axis {
    fn default() -> Self {
        Axis::Row
    }
}

impl TryFrom<usize> for Axis {
    type Error = ArrayError;

    fn try_from(dimension: usize) -> Result<Self> {
        match dimension {
            0 => Ok(Axis::Row),
            1 => Ok(Axis::Column),
            _ => Err(ArrayError::InvalidDimension {
                param: "dimension",
                dimension,
            }),
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row" | "rows" | "0" => Ok(Axis::Row),
            "column" | "columns" | "col" | "1" => Ok(Axis::Column),
            _ => Err(format!(
                "Unknown axis: {}. Expected one of: row, column, 0, 1",
                s
            )),
        }
    }
}
