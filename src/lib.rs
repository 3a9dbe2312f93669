#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod histogram;
pub mod image;
pub mod layers;
pub mod shift;

// Tool-facing configuration.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: engine + options + results.
pub use crate::error::ShiftError;
pub use crate::shift::{transform, LayerShifter, ShiftOptions, ShiftOutcome, ShiftPolicy};

// Run report returned by the engine.
pub use crate::diagnostics::ShiftReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use layer_shift::prelude::*;
///
/// # fn main() -> Result<(), ShiftError> {
/// let img = RgbImage::from_raw(3, 3, (0u8..27).collect())?;
/// let out = LayerShifter::new(ShiftOptions::new(8)).process(&img)?;
/// // A shift equal to the outer ring length leaves every ring in place.
/// assert_eq!(out.image, img);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{Rgb8, RgbImage};
    pub use crate::{transform, LayerShifter, ShiftError, ShiftOptions, ShiftPolicy};
}
