//! GPU workload wall-clock projection toolkit.
//!
//! This is a facade crate that re-exports functionality from the foldcast
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use foldcast_lib::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let registry = DatasetRegistry::global();
//!     let reference = registry.accelerator("a100").unwrap();
//!     let target = registry.accelerator("h200").unwrap();
//!     let source = registry.curve("af2-a100").unwrap();
//!
//!     let curve = AnchorCurve::new(source.points.clone())?;
//!     let estimator = InferenceEstimator::new(curve, reference.speedup_to(target)?);
//!
//!     let histogram = registry.histogram("mgnify").unwrap();
//!     let result = estimator.aggregate(&histogram.bins, ClusterConfig::new(128)?)?;
//!     println!("{:.1} days", result.total_wall_days());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/foldcast/foldcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use foldcast_types::*;

// Re-export the estimation core
pub use foldcast_estimate::{
    AggregateResult, AnchorCurve, BinProjection, InferenceEstimator, StageProjection,
    TrainingProjection, cubic_step_seconds, project_schedule,
};

// Re-export the dataset registry
#[cfg(feature = "datasets")]
pub use foldcast_datasets::{DatasetRegistry, ReferenceCurve};

// Re-export formatters
#[cfg(feature = "format")]
pub use foldcast_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use foldcast_lib::prelude::*;
/// ```
pub mod prelude {
    pub use foldcast_types::{
        Accelerator, AnchorPoint, ClusterConfig, FoldcastError, InvalidInput, LengthBin,
        LengthHistogram, Result, SpeedupRatio, TrainingSchedule, TrainingStage,
    };

    pub use foldcast_estimate::{
        AggregateResult, AnchorCurve, BinProjection, InferenceEstimator, StageProjection,
        TrainingProjection, cubic_step_seconds, project_schedule,
    };

    #[cfg(feature = "datasets")]
    pub use foldcast_datasets::{DatasetRegistry, ReferenceCurve};

    #[cfg(feature = "format")]
    pub use foldcast_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
