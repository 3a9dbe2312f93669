use super::TimingBreakdown;
use crate::layers::Ring;
use crate::shift::ShiftPolicy;
use serde::Serialize;

/// What happened to one ring during a run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDiagnostics {
    pub index: usize,
    pub top: usize,
    pub left: usize,
    pub rows: usize,
    pub cols: usize,
    pub len: usize,
    /// Shift assigned to the ring by the policy, before the modulo.
    pub requested_shift: i64,
    /// Shift actually applied, in `0..len`.
    pub effective_shift: usize,
}

impl LayerDiagnostics {
    pub fn new(ring: &Ring, requested_shift: i64, effective_shift: usize) -> Self {
        Self {
            index: ring.index,
            top: ring.top,
            left: ring.left,
            rows: ring.rows(),
            cols: ring.cols(),
            len: ring.len(),
            requested_shift,
            effective_shift,
        }
    }

    /// True when the ring kept its pixel order.
    pub fn is_identity(&self) -> bool {
        self.effective_shift == 0
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftReport {
    pub width: usize,
    pub height: usize,
    pub ring_count: usize,
    pub processed_layers: usize,
    pub shift: i64,
    pub policy: ShiftPolicy,
    pub layers: Vec<LayerDiagnostics>,
    pub timing: TimingBreakdown,
}

impl ShiftReport {
    /// Number of pixels that sit on a processed ring.
    pub fn processed_pixels(&self) -> usize {
        self.layers.iter().map(|l| l.len).sum()
    }

    pub fn summary_line(&self) -> String {
        let moved = self.layers.iter().filter(|l| !l.is_identity()).count();
        format!(
            "{}x{} rings={} processed={} rotated={} shift={} policy={:?} total_ms={:.3}",
            self.width,
            self.height,
            self.ring_count,
            self.processed_layers,
            moved,
            self.shift,
            self.policy,
            self.timing.total_ms
        )
    }
}
