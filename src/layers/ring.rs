use serde::Serialize;

/// Inclusive bounds of one rectangular perimeter ring.
///
/// Ring `k` of an `h × w` grid is the border of the sub-grid obtained by
/// trimming `k` rows and columns from every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Ring {
    pub index: usize,
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Ring {
    /// Ring `index` of an `height × width` grid, if it exists.
    pub fn new(height: usize, width: usize, index: usize) -> Option<Self> {
        if index >= ring_count(height, width) {
            return None;
        }
        Some(Self {
            index,
            top: index,
            bottom: height - 1 - index,
            left: index,
            right: width - 1 - index,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.bottom - self.top + 1
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.right - self.left + 1
    }

    /// Number of cells on the ring.
    pub fn len(&self) -> usize {
        let (rows, cols) = (self.rows(), self.cols());
        if rows == 1 {
            cols
        } else if cols == 1 {
            rows
        } else {
            2 * (rows + cols) - 4
        }
    }

    /// Rings built by [`Ring::new`] hold at least one cell.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(row, col)` pairs in perimeter order: top edge left to right, right
    /// edge downwards, bottom edge right to left, left edge upwards.
    ///
    /// Corners are visited once. The bottom edge is skipped for a single-row
    /// ring and the left edge for a single-column ring.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + Clone {
        let Ring {
            top,
            bottom,
            left,
            right,
            ..
        } = *self;
        let bottom_cols = if top != bottom { left..right } else { 0..0 };
        let left_rows = if left != right { top + 1..bottom } else { 0..0 };

        let top_edge = (left..=right).map(move |col| (top, col));
        let right_edge = (top + 1..=bottom).map(move |row| (row, right));
        let bottom_edge = bottom_cols.rev().map(move |col| (bottom, col));
        let left_edge = left_rows.rev().map(move |row| (row, left));

        top_edge.chain(right_edge).chain(bottom_edge).chain(left_edge)
    }
}

/// Number of rings of an `height × width` grid: `ceil(min(h, w) / 2)`.
pub fn ring_count(height: usize, width: usize) -> usize {
    height.min(width).div_ceil(2)
}

/// All rings of an `height × width` grid, outermost first.
pub fn rings(height: usize, width: usize) -> impl Iterator<Item = Ring> {
    (0..ring_count(height, width)).filter_map(move |k| Ring::new(height, width, k))
}
