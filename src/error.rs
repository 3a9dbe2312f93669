use thiserror::Error;

/// Errors raised while building a pixel grid or running the layer shift.
///
/// Shape problems are detected before any layer is touched, so an error never
/// comes with a partially shifted image.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShiftError {
    #[error("image has zero extent ({width}x{height})")]
    EmptyImage { width: usize, height: usize },
    #[error("expected {expected} elements for a {width}x{height} RGB image, got {actual}")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("image size {width}x{height} overflows usize")]
    SizeOverflow { width: usize, height: usize },
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("expected 3 color channels, got {0}")]
    ChannelDepth(usize),
}
