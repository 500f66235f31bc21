//! Inference projection command implementation.
//!
//! This module projects total and cumulative wall-clock time for running
//! inference over a sequence-length histogram on a cluster of identical
//! accelerators.

use anyhow::Result;
use foldcast_lib::prelude::*;
use std::path::PathBuf;

use crate::display::{self, Format};

/// Project inference wall-clock time over a histogram and print the result.
#[allow(clippy::too_many_arguments)]
pub(crate) fn inference(
    histogram_id: &str,
    curve_id: &str,
    target_id: &str,
    reference_id: Option<&str>,
    workers: u32,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let registry = DatasetRegistry::global();
    let histogram = registry.require_histogram(histogram_id)?;

    let estimator = display::build_estimator(curve_id, reference_id, target_id)?;
    let cluster = ClusterConfig::new(workers)?;
    let result = estimator.aggregate(&histogram.bins, cluster)?;

    println!("Histogram: {} ({})", histogram.id, histogram.description);
    println!("Curve:     {curve_id}");
    println!("Speedup:   {}", estimator.speedup());
    println!("Workers:   {workers}");

    println!(
        "\n{:<12} {:>10} {:>10} {:>12} {:>12}",
        "BIN", "COUNT", "SEC/SEQ", "WALL", "CUMULATIVE"
    );
    println!("{}", "-".repeat(60));

    for (projection, cumulative) in result.bins.iter().zip(&result.cumulative_wall_seconds) {
        println!(
            "{:<12} {:>10} {:>10.2} {:>12} {:>12}",
            projection.bin.label(),
            InferenceEstimator::format_count(projection.bin.count),
            projection.target_seconds,
            InferenceEstimator::format_seconds(projection.wall_seconds),
            InferenceEstimator::format_seconds(*cumulative),
        );
    }

    println!(
        "\nTotal sequences:  {}",
        InferenceEstimator::format_count(result.total_count)
    );
    println!(
        "Serial GPU time:  {} ({:.0} GPU-hours)",
        InferenceEstimator::format_seconds(result.total_serial_seconds),
        result.total_serial_hours(),
    );
    println!(
        "Ideal wall-clock: {} ({:.1} days on {workers} workers)",
        InferenceEstimator::format_seconds(result.total_wall_seconds),
        result.total_wall_days(),
    );

    if !quiet {
        println!(
            "\nNote: assumes ideal parallel scaling; lengths outside the measured \
             range are clamped to the boundary anchors."
        );
    }

    if let Some(output) = output {
        display::write_inference(&result, &output, format)?;
        println!("Wrote {}", output.display());
    }

    Ok(())
}
