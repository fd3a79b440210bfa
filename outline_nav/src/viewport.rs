// Copyright 2025 the Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform-row virtualization math for the rendered list.

use core::ops::Range;

use kurbo::Rect;

/// A scrolled window over a list of uniform-height rows.
///
/// `viewport` is the visible rectangle in list coordinates (row `i` spans
/// `i * row_height .. (i + 1) * row_height` vertically). All of the math
/// here is pure; the host owns the actual scroll position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowViewport {
    /// Height of every row, in the same units as `viewport`.
    pub row_height: f64,
    /// The visible rectangle, in list coordinates.
    pub viewport: Rect,
}

impl RowViewport {
    /// Create a viewport over rows of height `row_height`.
    pub fn new(row_height: f64, viewport: Rect) -> Self {
        Self {
            row_height,
            viewport,
        }
    }

    /// The rectangle row `index` occupies in list coordinates.
    pub fn row_rect(&self, index: usize) -> Rect {
        let top = index as f64 * self.row_height;
        Rect::new(
            self.viewport.x0,
            top,
            self.viewport.x1,
            top + self.row_height,
        )
    }

    /// The index window of rows to materialize for a list of `len` rows,
    /// padded by `overscan` rows on each side.
    pub fn visible_range(&self, len: usize, overscan: usize) -> Range<usize> {
        if len == 0 || self.row_height <= 0.0 {
            return 0..0;
        }
        let first = (self.viewport.y0 / self.row_height).floor().max(0.0) as usize;
        let last = (self.viewport.y1 / self.row_height).ceil().max(0.0) as usize;
        first.saturating_sub(overscan).min(len)..(last + overscan).min(len)
    }

    /// The scroll offset that brings row `index` fully into view, or `None`
    /// when it already is.
    ///
    /// Rows above the viewport align to its top edge; rows below align to
    /// its bottom edge.
    pub fn offset_to_reveal(&self, index: usize) -> Option<f64> {
        let row = self.row_rect(index);
        if row.y0 < self.viewport.y0 {
            Some(row.y0)
        } else if row.y1 > self.viewport.y1 {
            Some(row.y1 - self.viewport.height())
        } else {
            None
        }
    }
}
