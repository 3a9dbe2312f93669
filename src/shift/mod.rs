//! Ring-wise cyclic shift of RGB images.
//!
//! Each processed ring is read in perimeter order from the source image,
//! rotated by its effective shift and written back to the same cells of a new
//! image. The shift per ring comes from [`ShiftPolicy`]; the effective shift
//! is that value taken modulo the ring's own length.
mod engine;
mod options;
mod rotate;

pub use self::engine::{transform, LayerShifter, ShiftOutcome};
pub use self::options::{FormLimits, ShiftOptions, ShiftPolicy};
pub use self::rotate::{effective_shift, rotate_right};
