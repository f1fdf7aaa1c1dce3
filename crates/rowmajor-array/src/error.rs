//! Error type shared by every fallible operation in the crate.
use thiserror::Error;

use crate::shape::Shape;

pub type Result<T, E = ArrayError> = std::result::Result<T, E>;

/// Broad classification of an [`ArrayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A dimension, index or axis selector outside its valid domain.
    OutOfRange,
    /// Element counts or extents that do not line up.
    ShapeMismatch,
    /// An operand that is not an `Array2D` of the expected element type.
    TypeMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("{param} must be non-negative, got {value}")]
    NegativeLength { param: &'static str, value: i64 },

    #[error("{param} = {index} is out of range for length {len}")]
    IndexOutOfBounds {
        param: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{param} must be 0 (rows) or 1 (columns), got {dimension}")]
    InvalidDimension { param: &'static str, dimension: usize },

    #[error("shape ({dim0}, {dim1}) holds more elements than fit in memory")]
    LengthOverflow { dim0: usize, dim1: usize },

    #[error("jagged source row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("buffer of length {len} does not match shape {shape}")]
    BufferLength { shape: Shape, len: usize },

    #[error("cannot reshape {from} ({} elements) into {to} ({} elements)", .from.len(), .to.len())]
    SizeMismatch { from: Shape, to: Shape },

    #[error("destination is too small in dimension {dimension}: need {required}, have {available}")]
    DestinationTooSmall {
        dimension: usize,
        required: usize,
        available: usize,
    },

    #[error("cannot compare against a value that is not an Array2D<{expected}>")]
    TypeMismatch { expected: &'static str },
}

impl ArrayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::NegativeLength { .. }
            | ArrayError::IndexOutOfBounds { .. }
            | ArrayError::InvalidDimension { .. }
            | ArrayError::LengthOverflow { .. } => ErrorKind::OutOfRange,
            ArrayError::RaggedRows { .. }
            | ArrayError::BufferLength { .. }
            | ArrayError::SizeMismatch { .. }
            | ArrayError::DestinationTooSmall { .. } => ErrorKind::ShapeMismatch,
            ArrayError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// Name of the argument that was rejected.
    ///
    /// Capacity failures in `copy_to` report the destination dimension through
    /// [`ArrayError::DestinationTooSmall`] and name the `destination` argument here.
    pub fn param(&self) -> &'static str {
        match self {
            ArrayError::NegativeLength { param, .. }
            | ArrayError::IndexOutOfBounds { param, .. }
            | ArrayError::InvalidDimension { param, .. } => param,
            ArrayError::LengthOverflow { .. } => "dim1",
            ArrayError::RaggedRows { .. } => "source",
            ArrayError::BufferLength { .. } => "data",
            ArrayError::SizeMismatch { .. } => "sizes",
            ArrayError::DestinationTooSmall { .. } => "destination",
            ArrayError::TypeMismatch { .. } => "other",
        }
    }
}
