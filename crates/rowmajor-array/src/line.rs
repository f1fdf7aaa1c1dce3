//! Strided traversal over single rows and columns of an [`Array2D`](crate::Array2D).
//!
//! Both iterators borrow the array's flat storage and walk it by offset
//! arithmetic, so no element is copied until the caller asks for one.
use std::iter::FusedIterator;

use crate::shape::{Axis, Shape};

/// One row or column, yielded front-to-back or back-to-front.
///
/// State is `(offset, stride, remaining)`: `offset` points at the next element
/// to yield, and is only advanced while more elements remain, so a reversed
/// walk never steps below zero.
#[derive(Debug)]
pub struct Line<'a, T> {
    data: &'a [T],
    offset: usize,
    stride: usize,
    reverse: bool,
    remaining: usize,
}

impl<'a, T> Line<'a, T> {
    pub(crate) fn new(data: &'a [T], shape: Shape, axis: Axis, index: usize, reverse: bool) -> Self {
        let (dim0, dim1) = shape.as_tuple();
        let (first, last, stride, len) = match axis {
            Axis::Row => (index * dim1, (index + 1) * dim1, 1, dim1),
            Axis::Column => (index, (dim0.max(1) - 1) * dim1 + index + 1, dim1, dim0),
        };
        let offset = match (len, reverse) {
            (0, _) => 0,
            (_, false) => first,
            (_, true) => last - 1,
        };
        log::trace!(
            "line over {:?} {} of {}: offset {}, stride {}{}, length {}",
            axis,
            index,
            shape,
            offset,
            if reverse { "-" } else { "+" },
            stride,
            len
        );
        Line {
            data,
            offset,
            stride,
            reverse,
            remaining: len,
        }
    }

    /// Offset of the `n`th element still to be yielded from the front.
    #[inline]
    fn offset_at(&self, n: usize) -> usize {
        if self.reverse {
            self.offset - n * self.stride
        } else {
            self.offset + n * self.stride
        }
    }
}

impl<T> Clone for Line<'_, T> {
    fn clone(&self) -> Self {
        Line { ..*self }
    }
}

impl<'a, T> Iterator for Line<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = &self.data[self.offset];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.offset = self.offset_at(1);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.remaining {
            self.remaining = 0;
            return None;
        }
        self.offset = self.offset_at(n);
        self.remaining -= n;
        self.next()
    }
}

impl<'a, T> DoubleEndedIterator for Line<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(&self.data[self.offset_at(self.remaining)])
    }
}

impl<T> ExactSizeIterator for Line<'_, T> {}

impl<T> FusedIterator for Line<'_, T> {}

/// Every row or every column of an array, in index order or reversed.
///
/// `reverse_items` is handed to each produced [`Line`]; `reverse_lines` only
/// affects the order in which the lines themselves come out.
#[derive(Debug)]
pub struct Lines<'a, T> {
    data: &'a [T],
    shape: Shape,
    axis: Axis,
    reverse_items: bool,
    reverse_lines: bool,
    front: usize,
    back: usize,
}

impl<'a, T> Lines<'a, T> {
    pub(crate) fn new(
        data: &'a [T],
        shape: Shape,
        axis: Axis,
        reverse_items: bool,
        reverse_lines: bool,
    ) -> Self {
        Lines {
            data,
            shape,
            axis,
            reverse_items,
            reverse_lines,
            front: 0,
            back: shape.dim(axis),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    fn line(&self, index: usize) -> Line<'a, T> {
        Line::new(self.data, self.shape, self.axis, index, self.reverse_items)
    }
}

impl<T> Clone for Lines<'_, T> {
    fn clone(&self) -> Self {
        Lines { ..*self }
    }
}

impl<'a, T> Iterator for Lines<'a, T> {
    type Item = Line<'a, T>;

    fn next(&mut self) -> Option<Line<'a, T>> {
        if self.front == self.back {
            return None;
        }
        let index = if self.reverse_lines {
            self.back -= 1;
            self.back
        } else {
            self.front += 1;
            self.front - 1
        };
        Some(self.line(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Lines<'a, T> {
    fn next_back(&mut self) -> Option<Line<'a, T>> {
        if self.front == self.back {
            return None;
        }
        let index = if self.reverse_lines {
            self.front += 1;
            self.front - 1
        } else {
            self.back -= 1;
            self.back
        };
        Some(self.line(index))
    }
}

impl<T> ExactSizeIterator for Lines<'_, T> {}

impl<T> FusedIterator for Lines<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(dim0: usize, dim1: usize) -> Shape {
        Shape::new(dim0, dim1).unwrap()
    }

    fn collect(line: Line<'_, i32>) -> Vec<i32> {
        line.copied().collect()
    }

    const DATA: [i32; 6] = [0, 1, 2, 3, 4, 5];

    #[test]
    fn row_offsets_and_stride() {
        let s = shape(3, 2);
        assert_eq!(collect(Line::new(&DATA, s, Axis::Row, 1, false)), vec![2, 3]);
        assert_eq!(collect(Line::new(&DATA, s, Axis::Row, 2, true)), vec![5, 4]);
    }

    #[test]
    fn column_offsets_and_stride() {
        let s = shape(3, 2);
        assert_eq!(collect(Line::new(&DATA, s, Axis::Column, 1, false)), vec![1, 3, 5]);
        assert_eq!(collect(Line::new(&DATA, s, Axis::Column, 0, true)), vec![4, 2, 0]);
    }

    #[test]
    fn zero_length_lines_yield_nothing() {
        let empty: [i32; 0] = [];
        let mut row = Line::new(&empty, shape(3, 0), Axis::Row, 2, true);
        assert_eq!(row.len(), 0);
        assert!(row.next().is_none());

        let mut col = Line::new(&empty, shape(0, 4), Axis::Column, 3, true);
        assert!(col.next().is_none());
        assert!(col.next_back().is_none());
    }

    #[test]
    fn line_is_double_ended_and_exact() {
        let mut col = Line::new(&DATA, shape(3, 2), Axis::Column, 0, false);
        assert_eq!(col.len(), 3);
        assert_eq!(col.next_back(), Some(&4));
        assert_eq!(col.next(), Some(&0));
        assert_eq!(col.len(), 1);
        assert_eq!(col.next(), Some(&2));
        assert_eq!(col.next_back(), None);
    }

    #[test]
    fn nth_skips_by_stride() {
        let mut col = Line::new(&DATA, shape(3, 2), Axis::Column, 1, true);
        assert_eq!(col.nth(1), Some(&3));
        assert_eq!(col.next(), Some(&1));
        assert_eq!(col.nth(0), None);
    }

    #[test]
    fn lines_meet_in_the_middle() {
        let mut lines = Lines::new(&DATA, shape(3, 2), Axis::Row, false, false);
        assert_eq!(lines.len(), 3);
        assert_eq!(collect(lines.next_back().unwrap()), vec![4, 5]);
        assert_eq!(collect(lines.next().unwrap()), vec![0, 1]);
        assert_eq!(collect(lines.next().unwrap()), vec![2, 3]);
        assert!(lines.next().is_none());
        assert!(lines.next_back().is_none());
    }
}
