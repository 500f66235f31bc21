//! Core types for foldcast GPU workload projection.
//!
//! This crate provides the fundamental data structures used throughout
//! foldcast:
//!
//! - [`AnchorPoint`] - A measured (sequence length, seconds) reference pair
//! - [`LengthBin`] / [`LengthHistogram`] - Sequence-length histogram inputs
//! - [`Accelerator`] - GPU metadata with peak throughput
//! - [`SpeedupRatio`] - Throughput ratio between two accelerators
//! - [`ClusterConfig`] - Parallel worker count under ideal scaling
//! - [`TrainingStage`] / [`TrainingSchedule`] - Multi-stage training plans

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/foldcast/foldcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod anchor;
mod error;
mod hardware;
mod histogram;
mod schedule;

pub use anchor::AnchorPoint;
pub use error::{FoldcastError, InvalidInput, Result};
pub use hardware::{Accelerator, ClusterConfig, SpeedupRatio};
pub use histogram::{LengthBin, LengthHistogram};
pub use schedule::{TrainingSchedule, TrainingStage};
