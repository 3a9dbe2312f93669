use super::options::ShiftOptions;
use super::rotate::{effective_shift, rotate_right};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{LayerDiagnostics, ShiftReport, TimingBreakdown};
use crate::error::ShiftError;
use crate::image::{Rgb8, RgbImage};
use crate::layers::{ring_count, rings, Ring};
use log::{debug, trace};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Shifted image together with the run report.
#[derive(Clone, Debug)]
pub struct ShiftOutcome {
    pub image: RgbImage,
    pub report: ShiftReport,
}

/// Rotates the outer rings of RGB images according to a fixed set of options.
#[derive(Clone, Debug, Default)]
pub struct LayerShifter {
    options: ShiftOptions,
}

/// One ring after rotation: its cells in perimeter order, already permuted.
struct RotatedRing {
    ring: Ring,
    requested_shift: i64,
    effective_shift: usize,
    pixels: Vec<Rgb8>,
}

impl LayerShifter {
    pub fn new(options: ShiftOptions) -> Self {
        Self { options }
    }

    /// Rotate the configured rings of `image` and return a new image.
    ///
    /// Every ring reads from `image` and writes into a fresh copy, so no ring
    /// ever sees values moved by another one. Pixels outside the processed
    /// rings are copied unchanged.
    pub fn process(&self, image: &RgbImage) -> Result<ShiftOutcome, ShiftError> {
        let t0 = Instant::now();
        let (height, width) = image.dimensions();
        if height == 0 || width == 0 {
            return Err(ShiftError::EmptyImage { width, height });
        }

        let total_rings = ring_count(height, width);
        let processed = self.options.layers_to_process(total_rings);
        let plan: Vec<Ring> = rings(height, width).take(processed).collect();
        let mut timing = TimingBreakdown::default();

        let rotate_start = Instant::now();
        let rotated = self.rotate_rings(image, &plan);
        timing.push_since("rotate", rotate_start);

        let write_start = Instant::now();
        let mut out = image.clone();
        for r in rotated.iter().filter(|r| r.effective_shift > 0) {
            for ((row, col), px) in r.ring.coords().zip(&r.pixels) {
                out.set(row, col, *px);
            }
        }
        timing.push_since("write", write_start);

        let layers: Vec<LayerDiagnostics> = rotated
            .iter()
            .map(|r| LayerDiagnostics::new(&r.ring, r.requested_shift, r.effective_shift))
            .collect();
        timing.total_ms = elapsed_ms(t0);

        let report = ShiftReport {
            width,
            height,
            ring_count: total_rings,
            processed_layers: plan.len(),
            shift: self.options.shift,
            policy: self.options.policy,
            layers,
            timing,
        };
        debug!("LayerShifter::process {}", report.summary_line());

        Ok(ShiftOutcome { image: out, report })
    }

    /// Rotate every planned ring. With `parallel`, plans of two or more rings
    /// run on the rayon pool; everything else takes the sequential path.
    fn rotate_rings(&self, image: &RgbImage, plan: &[Ring]) -> Vec<RotatedRing> {
        #[cfg(feature = "parallel")]
        {
            if plan.len() > 1 {
                return plan
                    .par_iter()
                    .map(|ring| self.rotate_ring(image, ring))
                    .collect();
            }
        }
        self.rotate_rings_sequential(image, plan)
    }

    fn rotate_rings_sequential(&self, image: &RgbImage, plan: &[Ring]) -> Vec<RotatedRing> {
        plan.iter().map(|ring| self.rotate_ring(image, ring)).collect()
    }

    fn rotate_ring(&self, image: &RgbImage, ring: &Ring) -> RotatedRing {
        let len = ring.len();
        let requested_shift = self.options.policy.shift_for_layer(self.options.shift, ring.index);
        let effective = effective_shift(requested_shift, len).unwrap_or(0);
        if effective == 0 {
            trace!("ring {} len={len}: identity", ring.index);
            return RotatedRing {
                ring: *ring,
                requested_shift,
                effective_shift: 0,
                pixels: Vec::new(),
            };
        }

        let mut pixels: Vec<Rgb8> = ring.coords().map(|(row, col)| image.get(row, col)).collect();
        let effective_shift = rotate_right(&mut pixels, requested_shift);
        trace!(
            "ring {} len={len} shift={requested_shift} effective={effective_shift}",
            ring.index
        );
        RotatedRing {
            ring: *ring,
            requested_shift,
            effective_shift,
            pixels,
        }
    }
}

/// Rotate the outer `max_layers` rings of `image` by `shift` pixels each.
///
/// Convenience wrapper around [`LayerShifter`] with the constant policy.
pub fn transform(image: &RgbImage, shift: i64, max_layers: usize) -> Result<RgbImage, ShiftError> {
    let options = ShiftOptions::new(shift).with_max_layers(max_layers);
    LayerShifter::new(options)
        .process(image)
        .map(|outcome| outcome.image)
}
