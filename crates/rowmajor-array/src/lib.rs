//! rowmajor-array: a fixed-shape two-dimensional array on one flat buffer.
//!
//! [`Array2D`] keeps its elements row-major in a single `Vec` next to a
//! [`Shape`]. On top of plain `(i0, i1)` access it offers strided traversal of
//! single rows and columns ([`Line`], [`Lines`]), reshape without reordering,
//! block copies into larger destinations, and conversions to and from fixed
//! arrays, jagged `Vec<Vec<T>>` and `ndarray::Array2`.
//!
//! Fallible operations return [`ArrayError`], whose [`ErrorKind`] and
//! parameter name can be matched on directly. Diagnostics go through the `log`
//! facade.
pub mod array;
pub mod config;
pub mod copy;
pub mod error;
pub mod line;
pub mod reshape;
pub mod shape;
pub mod structural;

pub use array::Array2D;
pub use config::TraversalConfig;
pub use copy::CopyTarget;
pub use error::{ArrayError, ErrorKind, Result};
pub use line::{Line, Lines};
pub use shape::{Axis, Shape};
