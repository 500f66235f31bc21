//! Embedded measurement datasets for foldcast projections.
//!
//! This crate provides access to the hand-transcribed datasets foldcast
//! projects from: accelerators with their peak throughput, measured anchor
//! curves, sequence-length histograms, and training schedules.
//!
//! # Example
//!
//! ```
//! use foldcast_datasets::DatasetRegistry;
//!
//! let registry = DatasetRegistry::global();
//!
//! if let Some(histogram) = registry.histogram("mgnify") {
//!     println!("{}: {} bins", histogram.id, histogram.bins.len());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/foldcast/foldcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use foldcast_types::{
    Accelerator, AnchorPoint, FoldcastError, LengthHistogram, Result, TrainingSchedule,
};

/// Accelerator metadata JSON embedded at compile time.
const ACCELERATORS_JSON: &str = include_str!("../data/accelerators.json");
/// Measured anchor curve JSON embedded at compile time.
const CURVES_JSON: &str = include_str!("../data/curves.json");
/// Sequence-length histogram JSON embedded at compile time.
const HISTOGRAMS_JSON: &str = include_str!("../data/histograms.json");
/// Training schedule JSON embedded at compile time.
const SCHEDULES_JSON: &str = include_str!("../data/schedules.json");

/// Global dataset registry instance.
static REGISTRY: OnceLock<DatasetRegistry> = OnceLock::new();

/// A named measured curve: anchor points taken on a specific accelerator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCurve {
    /// Short identifier (e.g., "af2-a100").
    pub id: String,
    /// Human-readable description of the measurement.
    pub description: String,
    /// Registry id of the accelerator the measurements were taken on.
    pub accelerator: String,
    /// Anchor points in ascending length order.
    pub points: Vec<AnchorPoint>,
}

/// Registry of all embedded datasets.
#[derive(Debug)]
pub struct DatasetRegistry {
    accelerators: Vec<Accelerator>,
    curves: Vec<ReferenceCurve>,
    histograms: Vec<LengthHistogram>,
    schedules: Vec<TrainingSchedule>,
}

impl DatasetRegistry {
    /// Returns the global dataset registry.
    ///
    /// The registry is initialized lazily from the embedded JSON on first
    /// access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads the registry from the embedded JSON data.
    fn load() -> Self {
        Self {
            accelerators: serde_json::from_str(ACCELERATORS_JSON)
                .expect("Invalid accelerators.json"),
            curves: serde_json::from_str(CURVES_JSON).expect("Invalid curves.json"),
            histograms: serde_json::from_str(HISTOGRAMS_JSON).expect("Invalid histograms.json"),
            schedules: serde_json::from_str(SCHEDULES_JSON).expect("Invalid schedules.json"),
        }
    }

    /// Looks up an accelerator by id (case-insensitive).
    #[must_use]
    pub fn accelerator(&self, id: &str) -> Option<&Accelerator> {
        self.accelerators
            .iter()
            .find(|a| a.id.eq_ignore_ascii_case(id))
    }

    /// Looks up a measured curve by id (case-insensitive).
    #[must_use]
    pub fn curve(&self, id: &str) -> Option<&ReferenceCurve> {
        self.curves.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }

    /// Looks up a histogram by id (case-insensitive).
    #[must_use]
    pub fn histogram(&self, id: &str) -> Option<&LengthHistogram> {
        self.histograms
            .iter()
            .find(|h| h.id.eq_ignore_ascii_case(id))
    }

    /// Looks up a training schedule by id (case-insensitive).
    #[must_use]
    pub fn schedule(&self, id: &str) -> Option<&TrainingSchedule> {
        self.schedules
            .iter()
            .find(|s| s.id.eq_ignore_ascii_case(id))
    }

    /// Looks up an accelerator by id, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`FoldcastError::UnknownAccelerator`] if no accelerator with
    /// the given id exists.
    pub fn require_accelerator(&self, id: &str) -> Result<&Accelerator> {
        self.accelerator(id)
            .ok_or_else(|| FoldcastError::UnknownAccelerator(id.to_string()))
    }

    /// Looks up a measured curve by id, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`FoldcastError::UnknownCurve`] if no curve with the given id
    /// exists.
    pub fn require_curve(&self, id: &str) -> Result<&ReferenceCurve> {
        self.curve(id)
            .ok_or_else(|| FoldcastError::UnknownCurve(id.to_string()))
    }

    /// Looks up a histogram by id, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`FoldcastError::UnknownHistogram`] if no histogram with the
    /// given id exists.
    pub fn require_histogram(&self, id: &str) -> Result<&LengthHistogram> {
        self.histogram(id)
            .ok_or_else(|| FoldcastError::UnknownHistogram(id.to_string()))
    }

    /// Looks up a training schedule by id, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`FoldcastError::UnknownSchedule`] if no schedule with the
    /// given id exists.
    pub fn require_schedule(&self, id: &str) -> Result<&TrainingSchedule> {
        self.schedule(id)
            .ok_or_else(|| FoldcastError::UnknownSchedule(id.to_string()))
    }

    /// Returns all accelerators in registry order.
    pub fn accelerators(&self) -> impl Iterator<Item = &Accelerator> {
        self.accelerators.iter()
    }

    /// Returns all measured curves in registry order.
    pub fn curves(&self) -> impl Iterator<Item = &ReferenceCurve> {
        self.curves.iter()
    }

    /// Returns all histograms in registry order.
    pub fn histograms(&self) -> impl Iterator<Item = &LengthHistogram> {
        self.histograms.iter()
    }

    /// Returns all training schedules in registry order.
    pub fn schedules(&self) -> impl Iterator<Item = &TrainingSchedule> {
        self.schedules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = DatasetRegistry::global();
        assert!(registry.accelerators().count() >= 2);
        assert!(registry.curves().count() >= 1);
        assert!(registry.histograms().count() >= 1);
        assert!(registry.schedules().count() >= 1);
    }

    #[test]
    fn test_accelerator_lookup() {
        let registry = DatasetRegistry::global();
        let a100 = registry.accelerator("a100").unwrap();
        assert_eq!(a100.peak_bf16_tflops, 312.0);
        let h200 = registry.accelerator("H200").unwrap();
        assert_eq!(h200.peak_bf16_tflops, 1979.0);
        assert!(registry.accelerator("tpu-v5").is_none());
        assert!(matches!(
            registry.require_accelerator("tpu-v5"),
            Err(FoldcastError::UnknownAccelerator(_))
        ));
    }

    #[test]
    fn test_af2_curve_is_sorted_and_complete() {
        let registry = DatasetRegistry::global();
        let curve = registry.curve("af2-a100").unwrap();
        assert_eq!(curve.accelerator, "a100");
        assert_eq!(curve.points.len(), 13);
        for window in curve.points.windows(2) {
            assert!(window[0].length < window[1].length);
        }
        assert_eq!(curve.points[0].length, 100);
        assert_eq!(curve.points[12].length, 2000);
    }

    #[test]
    fn test_mgnify_histogram_totals() {
        let registry = DatasetRegistry::global();
        let histogram = registry.histogram("mgnify").unwrap();
        assert_eq!(histogram.bins.len(), 9);
        assert_eq!(histogram.total_count(), 194_493_626);
        assert_eq!(histogram.bins[0].count, 106_232_237);
    }

    #[test]
    fn test_schedule_lookup() {
        let registry = DatasetRegistry::global();
        let schedule = registry.schedule("megafold-256xh200").unwrap();
        assert_eq!(schedule.base_seq_len, 384);
        assert_eq!(schedule.stages.len(), 4);
        assert_eq!(schedule.total_steps(), 74_250 + 1_750 + 250 + 1_750);
    }
}
