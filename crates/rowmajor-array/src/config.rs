use serde::{Deserialize, Serialize};

use crate::shape::Axis;

/// Which lines [`Array2D::lines_with`](crate::Array2D::lines_with) walks, and in which directions.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalConfig {
    #[serde(default)]
    pub axis: Axis,

    /// Walk each line back-to-front.
    #[serde(default)]
    pub reverse_items: bool,

    /// Emit lines from the last index to the first.
    #[serde(default)]
    pub reverse_lines: bool,
}

impl TraversalConfig {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    pub fn with_reverse_items(mut self, reverse_items: bool) -> Self {
        self.reverse_items = reverse_items;
        self
    }

    pub fn with_reverse_lines(mut self, reverse_lines: bool) -> Self {
        self.reverse_lines = reverse_lines;
        self
    }
}
