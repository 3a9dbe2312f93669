//! Concentric rectangular ring decomposition of a pixel grid.
//!
//! Purpose
//! - Peel an `h × w` grid into perimeter rings, outermost first, so each
//!   ring can be treated as a closed 1-D sequence of cells.
//!
//! Design
//! - Ring `k` has inclusive bounds `top = left = k`, `bottom = h - 1 - k`,
//!   `right = w - 1 - k`; there are `ceil(min(h, w) / 2)` rings.
//! - Cells are walked top edge → right edge → bottom edge → left edge with
//!   shared corners visited once (see [`Ring::coords`]).
//! - When the shorter side is odd the innermost ring degenerates to a single
//!   row, column or cell; it is still a valid ring.
//!
//! Notes
//! - Ring lengths over a grid always sum to `h * w`.
//! - Geometry only: nothing here reads pixel values.
mod ring;

pub use self::ring::{ring_count, rings, Ring};

use serde::Serialize;

/// Serializable summary of a grid's ring decomposition.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingLayout {
    pub height: usize,
    pub width: usize,
    pub ring_count: usize,
    pub rings: Vec<RingSummary>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSummary {
    #[serde(flatten)]
    pub ring: Ring,
    pub rows: usize,
    pub cols: usize,
    pub len: usize,
}

impl RingLayout {
    pub fn new(height: usize, width: usize) -> Self {
        let rings: Vec<RingSummary> = rings(height, width)
            .map(|ring| RingSummary {
                rows: ring.rows(),
                cols: ring.cols(),
                len: ring.len(),
                ring,
            })
            .collect();
        Self {
            height,
            width,
            ring_count: rings.len(),
            rings,
        }
    }

    /// Sum of ring lengths; equals `height * width`.
    pub fn total_len(&self) -> usize {
        self.rings.iter().map(|r| r.len).sum()
    }
}
