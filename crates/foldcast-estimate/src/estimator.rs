//! Histogram-level wall-clock aggregation.

use foldcast_types::{ClusterConfig, InvalidInput, LengthBin, SpeedupRatio};
use serde::Serialize;

use crate::AnchorCurve;

/// Projection for a single histogram bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinProjection {
    /// The input bin.
    pub bin: LengthBin,
    /// Interpolated per-sequence time on the reference accelerator.
    pub reference_seconds: f64,
    /// Per-sequence time on the target accelerator.
    pub target_seconds: f64,
    /// Serial compute seconds for the whole bin (per-sequence time x count).
    pub serial_seconds: f64,
    /// Ideal wall-clock contribution of the bin (serial seconds / workers).
    pub wall_seconds: f64,
}

/// Aggregated wall-clock projection over a sequence-length histogram.
///
/// Bin order matches the input order; `cumulative_wall_seconds` is the
/// running sum of the per-bin wall-clock contributions and is monotonically
/// non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Per-bin projections in input order.
    pub bins: Vec<BinProjection>,
    /// Running cumulative wall-clock seconds, one entry per bin.
    pub cumulative_wall_seconds: Vec<f64>,
    /// Total sequence count across all bins (exact integer sum).
    pub total_count: u64,
    /// Total serial compute seconds on the target accelerator.
    pub total_serial_seconds: f64,
    /// Total ideal wall-clock seconds on the cluster.
    pub total_wall_seconds: f64,
}

impl AggregateResult {
    /// Returns the total serial compute time in hours.
    #[must_use]
    pub const fn total_serial_hours(&self) -> f64 {
        self.total_serial_seconds / 3600.0
    }

    /// Returns the total ideal wall-clock time in hours.
    #[must_use]
    pub const fn total_wall_hours(&self) -> f64 {
        self.total_wall_seconds / 3600.0
    }

    /// Returns the total ideal wall-clock time in days.
    #[must_use]
    pub const fn total_wall_days(&self) -> f64 {
        self.total_wall_seconds / 86_400.0
    }
}

/// Per-sequence and histogram-level inference time estimator.
///
/// Combines a measured reference curve with an accelerator speedup ratio.
/// All estimation is pure arithmetic; the same inputs always produce the
/// same outputs.
#[derive(Debug, Clone)]
pub struct InferenceEstimator {
    curve: AnchorCurve,
    speedup: SpeedupRatio,
}

impl InferenceEstimator {
    /// Creates an estimator from a reference curve and a speedup ratio.
    #[must_use]
    pub const fn new(curve: AnchorCurve, speedup: SpeedupRatio) -> Self {
        Self { curve, speedup }
    }

    /// Returns the reference curve.
    #[must_use]
    pub const fn curve(&self) -> &AnchorCurve {
        &self.curve
    }

    /// Returns the speedup ratio.
    #[must_use]
    pub const fn speedup(&self) -> SpeedupRatio {
        self.speedup
    }

    /// Returns the per-sequence time at `length` on the reference accelerator.
    #[must_use]
    pub fn reference_seconds(&self, length: f64) -> f64 {
        self.curve.seconds_at(length)
    }

    /// Returns the per-sequence time at `length` on the target accelerator.
    #[must_use]
    pub fn target_seconds(&self, length: f64) -> f64 {
        self.speedup.apply(self.curve.seconds_at(length))
    }

    /// Aggregates a histogram into per-bin and total wall-clock projections.
    ///
    /// Each bin is represented by its midpoint length: interpolate on the
    /// reference curve, rescale to the target accelerator, multiply by the
    /// bin count, and divide by the cluster's worker count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::ZeroWorkers`] if the cluster has no workers.
    pub fn aggregate(
        &self,
        bins: &[LengthBin],
        cluster: ClusterConfig,
    ) -> Result<AggregateResult, InvalidInput> {
        if cluster.workers == 0 {
            return Err(InvalidInput::ZeroWorkers);
        }
        let workers = f64::from(cluster.workers);

        let mut per_bin = Vec::with_capacity(bins.len());
        let mut cumulative = Vec::with_capacity(bins.len());
        let mut total_count: u64 = 0;
        let mut total_serial_seconds = 0.0;
        let mut running_wall_seconds = 0.0;

        for bin in bins {
            let reference_seconds = self.curve.seconds_at(bin.midpoint());
            let target_seconds = self.speedup.apply(reference_seconds);
            let serial_seconds = target_seconds * bin.count as f64;
            let wall_seconds = serial_seconds / workers;

            total_count += bin.count;
            total_serial_seconds += serial_seconds;
            running_wall_seconds += wall_seconds;
            cumulative.push(running_wall_seconds);

            per_bin.push(BinProjection {
                bin: *bin,
                reference_seconds,
                target_seconds,
                serial_seconds,
                wall_seconds,
            });
        }

        Ok(AggregateResult {
            bins: per_bin,
            cumulative_wall_seconds: cumulative,
            total_count,
            total_serial_seconds,
            total_wall_seconds: running_wall_seconds,
        })
    }

    /// Formats a duration in seconds in human-readable form
    /// (e.g., "12d 5h", "2h 30m", "45s").
    #[must_use]
    pub fn format_seconds(seconds: f64) -> String {
        let total_secs = seconds.max(0.0).round() as u64;
        let days = total_secs / 86_400;
        let hours = (total_secs % 86_400) / 3600;
        let minutes = (total_secs % 3600) / 60;
        let secs = total_secs % 60;

        if days > 0 {
            format!("{days}d {hours}h")
        } else if hours > 0 {
            if minutes > 0 {
                format!("{hours}h {minutes}m")
            } else {
                format!("{hours}h")
            }
        } else if minutes > 0 {
            if secs > 0 && minutes < 10 {
                format!("{minutes}m {secs}s")
            } else {
                format!("{minutes}m")
            }
        } else {
            format!("{secs}s")
        }
    }

    /// Formats a sequence count in human-readable form (e.g., "1.5M").
    #[must_use]
    pub fn format_count(count: u64) -> String {
        if count >= 1_000_000_000 {
            format!("{:.2}B", count as f64 / 1_000_000_000.0)
        } else if count >= 1_000_000 {
            format!("{:.2}M", count as f64 / 1_000_000.0)
        } else if count >= 1_000 {
            format!("{:.2}K", count as f64 / 1_000.0)
        } else {
            format!("{count}")
        }
    }
}
