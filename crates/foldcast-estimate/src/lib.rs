//! Wall-clock projection core for foldcast.
//!
//! This crate provides the estimation logic for projecting inference and
//! training wall-clock times:
//!
//! - [`AnchorCurve`] - Validated measured curve with clamped interpolation
//! - [`InferenceEstimator`] - Per-sequence and histogram-level projections
//! - [`AggregateResult`] / [`BinProjection`] - Aggregated projection output
//! - [`cubic_step_seconds`] / [`project_schedule`] - Cubic training-step model

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/foldcast/foldcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod curve;
mod estimator;
mod training;

pub use curve::AnchorCurve;
pub use estimator::{AggregateResult, BinProjection, InferenceEstimator};
pub use training::{StageProjection, TrainingProjection, cubic_step_seconds, project_schedule};
