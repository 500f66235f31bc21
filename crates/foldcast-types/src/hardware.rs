//! Accelerator metadata, speedup ratios, and cluster configuration.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::InvalidInput;

/// A GPU accelerator with its peak dense BF16/FP16 Tensor Core throughput.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accelerator {
    /// Short identifier (e.g., "a100", "h200").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Peak dense BF16/FP16 throughput in TFLOPS.
    pub peak_bf16_tflops: f64,
    /// On-device memory in GB.
    pub memory_gb: f64,
}

impl Accelerator {
    /// Returns the speedup ratio from this (reference) accelerator to `target`.
    ///
    /// Time on the target is modeled as inversely proportional to peak
    /// throughput, so the ratio is `target.peak / self.peak`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonPositiveSpeedup`] if either throughput is
    /// non-positive or non-finite.
    pub fn speedup_to(&self, target: &Self) -> Result<SpeedupRatio, InvalidInput> {
        SpeedupRatio::from_peak_tflops(self.peak_bf16_tflops, target.peak_bf16_tflops)
    }
}

impl std::fmt::Display for Accelerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.0} TFLOPS)", self.name, self.peak_bf16_tflops)
    }
}

/// Throughput ratio between a target and a reference accelerator.
///
/// A ratio greater than 1 means the target is faster. Converting a
/// reference-accelerator time to the target is a division by this ratio.
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize, Deserialize)]
#[display("{_0:.2}x")]
#[serde(transparent)]
pub struct SpeedupRatio(f64);

impl SpeedupRatio {
    /// The identity ratio (same accelerator).
    pub const IDENTITY: Self = Self(1.0);

    /// Creates a speedup ratio from a raw scalar.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonPositiveSpeedup`] unless `ratio` is
    /// positive and finite.
    pub fn new(ratio: f64) -> Result<Self, InvalidInput> {
        if ratio > 0.0 && ratio.is_finite() {
            Ok(Self(ratio))
        } else {
            Err(InvalidInput::NonPositiveSpeedup { ratio })
        }
    }

    /// Creates a speedup ratio from two peak throughput figures.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonPositiveSpeedup`] if either figure is
    /// non-positive or non-finite.
    pub fn from_peak_tflops(reference_tflops: f64, target_tflops: f64) -> Result<Self, InvalidInput> {
        if !(reference_tflops > 0.0 && reference_tflops.is_finite()) {
            return Err(InvalidInput::NonPositiveSpeedup {
                ratio: reference_tflops,
            });
        }
        Self::new(target_tflops / reference_tflops)
    }

    /// Returns the raw ratio value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Converts a reference-accelerator time to a target-accelerator time.
    #[must_use]
    pub const fn apply(self, reference_seconds: f64) -> f64 {
        reference_seconds / self.0
    }
}

/// A cluster of identical parallel workers.
///
/// Aggregate work is divided by the worker count with zero modeled overhead
/// (ideal scaling; no synchronization or communication cost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Number of parallel workers.
    pub workers: u32,
}

impl ClusterConfig {
    /// Creates a cluster configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::ZeroWorkers`] if `workers` is zero.
    pub const fn new(workers: u32) -> Result<Self, InvalidInput> {
        if workers == 0 {
            Err(InvalidInput::ZeroWorkers)
        } else {
            Ok(Self { workers })
        }
    }

    /// A single-worker cluster (serial execution).
    #[must_use]
    pub const fn single() -> Self {
        Self { workers: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a100() -> Accelerator {
        Accelerator {
            id: "a100".into(),
            name: "NVIDIA A100".into(),
            peak_bf16_tflops: 312.0,
            memory_gb: 80.0,
        }
    }

    fn h200() -> Accelerator {
        Accelerator {
            id: "h200".into(),
            name: "NVIDIA H200".into(),
            peak_bf16_tflops: 1979.0,
            memory_gb: 141.0,
        }
    }

    #[test]
    fn test_speedup_from_tflops() {
        let ratio = a100().speedup_to(&h200()).unwrap();
        assert!((ratio.get() - 1979.0 / 312.0).abs() < 1e-12);
    }

    #[test]
    fn test_speedup_identity_apply() {
        assert_eq!(SpeedupRatio::IDENTITY.apply(42.5), 42.5);
    }

    #[test]
    fn test_apply_is_decreasing_in_ratio() {
        let slow = SpeedupRatio::new(2.0).unwrap();
        let fast = SpeedupRatio::new(6.34).unwrap();
        assert!(fast.apply(10.0) < slow.apply(10.0));
    }

    #[test]
    fn test_rejects_non_positive_ratio() {
        assert!(matches!(
            SpeedupRatio::new(0.0),
            Err(InvalidInput::NonPositiveSpeedup { .. })
        ));
        assert!(SpeedupRatio::new(-1.5).is_err());
        assert!(SpeedupRatio::new(f64::NAN).is_err());
        assert!(SpeedupRatio::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_zero_reference_throughput() {
        assert!(SpeedupRatio::from_peak_tflops(0.0, 1979.0).is_err());
    }

    #[test]
    fn test_cluster_needs_workers() {
        assert!(matches!(
            ClusterConfig::new(0),
            Err(InvalidInput::ZeroWorkers)
        ));
        assert_eq!(ClusterConfig::new(128).unwrap().workers, 128);
    }
}
