//! Serializable reports describing a layer shift run.
//!
//! `ShiftReport` is returned next to the shifted image by
//! [`LayerShifter::process`](crate::LayerShifter::process). The tools write it
//! as camelCase JSON.

pub mod report;
pub mod timing;

pub use report::{LayerDiagnostics, ShiftReport};
pub use timing::{StageTiming, TimingBreakdown};
