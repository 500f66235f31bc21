//! List command implementation.
//!
//! This module handles listing the embedded datasets with optional filtering
//! by kind.

use anyhow::{Result, bail};
use foldcast_lib::prelude::*;

/// List embedded datasets, optionally restricted to one kind.
pub(crate) fn list_datasets(kind: Option<&str>) -> Result<()> {
    let registry = DatasetRegistry::global();

    let kind = match kind {
        Some(k) => match k.to_lowercase().as_str() {
            "accelerators" | "accelerator" => Some(Kind::Accelerators),
            "curves" | "curve" => Some(Kind::Curves),
            "histograms" | "histogram" => Some(Kind::Histograms),
            "schedules" | "schedule" => Some(Kind::Schedules),
            other => bail!(
                "Unknown kind: {other} (expected accelerators, curves, histograms, or schedules)"
            ),
        },
        None => None,
    };

    let show = |k: Kind| kind.is_none() || kind == Some(k);

    if show(Kind::Accelerators) {
        println!("{:<10} {:<20} {:>12} {:>10}", "ID", "NAME", "TFLOPS", "MEMORY");
        println!("{}", "-".repeat(56));
        for accelerator in registry.accelerators() {
            println!(
                "{:<10} {:<20} {:>12.0} {:>8.0}GB",
                accelerator.id,
                accelerator.name,
                accelerator.peak_bf16_tflops,
                accelerator.memory_gb
            );
        }
        println!();
    }

    if show(Kind::Curves) {
        println!("{:<16} {:<12} {:>8}  DESCRIPTION", "CURVE", "ACCELERATOR", "POINTS");
        println!("{}", "-".repeat(72));
        for curve in registry.curves() {
            println!(
                "{:<16} {:<12} {:>8}  {}",
                curve.id,
                curve.accelerator,
                curve.points.len(),
                curve.description
            );
        }
        println!();
    }

    if show(Kind::Histograms) {
        println!("{:<16} {:>6} {:>14}  DESCRIPTION", "HISTOGRAM", "BINS", "SEQUENCES");
        println!("{}", "-".repeat(72));
        for histogram in registry.histograms() {
            println!(
                "{:<16} {:>6} {:>14}  {}",
                histogram.id,
                histogram.bins.len(),
                InferenceEstimator::format_count(histogram.total_count()),
                histogram.description
            );
        }
        println!();
    }

    if show(Kind::Schedules) {
        println!("{:<20} {:>8} {:>8}  DESCRIPTION", "SCHEDULE", "STAGES", "STEPS");
        println!("{}", "-".repeat(72));
        for schedule in registry.schedules() {
            println!(
                "{:<20} {:>8} {:>8}  {}",
                schedule.id,
                schedule.stages.len(),
                schedule.total_steps(),
                schedule.description
            );
        }
    }

    Ok(())
}

/// Dataset kinds the registry can be filtered by.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Accelerators,
    Curves,
    Histograms,
    Schedules,
}
