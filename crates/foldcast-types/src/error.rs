//! Error types for foldcast.

use thiserror::Error;

/// Result type alias for foldcast operations.
pub type Result<T> = std::result::Result<T, FoldcastError>;

/// Errors that can occur during projection and output.
#[derive(Error, Debug)]
pub enum FoldcastError {
    /// An input violated an estimation precondition.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// Accelerator not found in the registry.
    #[error("Unknown accelerator: {0}")]
    UnknownAccelerator(String),

    /// Anchor curve not found in the registry.
    #[error("Unknown anchor curve: {0}")]
    UnknownCurve(String),

    /// Histogram not found in the registry.
    #[error("Unknown histogram: {0}")]
    UnknownHistogram(String),

    /// Training schedule not found in the registry.
    #[error("Unknown training schedule: {0}")]
    UnknownSchedule(String),
}

/// Precondition violations on estimation inputs.
///
/// All estimation operations either produce a complete result or fail with
/// one of these before producing any output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// An anchor curve requires at least two points to interpolate.
    #[error("anchor curve needs at least 2 points, got {count}")]
    TooFewAnchors {
        /// Number of points supplied.
        count: usize,
    },

    /// Anchor sequence lengths must be positive.
    #[error("anchor length must be positive (point {index})")]
    ZeroAnchorLength {
        /// Index of the offending point.
        index: usize,
    },

    /// Anchor times must be positive.
    #[error("anchor time must be positive, got {seconds}s (point {index})")]
    NonPositiveAnchorTime {
        /// Index of the offending point.
        index: usize,
        /// The non-positive time value.
        seconds: f64,
    },

    /// Anchor lengths must be strictly ascending.
    #[error("anchor lengths must be strictly ascending (point {index})")]
    UnsortedAnchors {
        /// Index of the first out-of-order point.
        index: usize,
    },

    /// A speedup ratio must be a positive finite number.
    #[error("speedup ratio must be positive and finite, got {ratio}")]
    NonPositiveSpeedup {
        /// The rejected ratio value.
        ratio: f64,
    },

    /// A cluster needs at least one worker.
    #[error("cluster must have at least one worker")]
    ZeroWorkers,

    /// The cubic step model needs a positive base sequence length.
    #[error("base sequence length must be positive")]
    ZeroBaseSeqLen,

    /// The cubic step model needs a positive base step time.
    #[error("base step time must be positive, got {seconds}s")]
    NonPositiveBaseStepTime {
        /// The rejected step time.
        seconds: f64,
    },
}
