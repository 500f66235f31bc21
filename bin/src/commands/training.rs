//! Training projection command implementation.
//!
//! This module projects total training time for a multi-stage schedule using
//! the cubic step-time model.

use anyhow::Result;
use foldcast_lib::prelude::*;
use std::path::PathBuf;

use crate::display::{self, Format};

/// Project training time for a schedule and print the per-stage breakdown.
pub(crate) fn training(
    schedule_id: &str,
    base_seq: Option<u32>,
    base_step_seconds: Option<f64>,
    output: Option<PathBuf>,
    format: Format,
) -> Result<()> {
    let registry = DatasetRegistry::global();
    let mut schedule = registry.require_schedule(schedule_id)?.clone();

    if let Some(base_seq) = base_seq {
        schedule.base_seq_len = base_seq;
    }
    if let Some(base_step_seconds) = base_step_seconds {
        schedule.base_step_seconds = base_step_seconds;
    }

    let projection = project_schedule(&schedule)?;

    println!("Schedule: {} ({})", schedule.id, schedule.description);
    println!(
        "Base:     {:.2}s/step at seq {}",
        schedule.base_step_seconds, schedule.base_seq_len
    );

    println!(
        "\n{:<10} {:>8} {:>8} {:>12} {:>10} {:>8}",
        "STAGE", "STEPS", "SEQ", "STEP TIME", "HOURS", "DAYS"
    );
    println!("{}", "-".repeat(60));

    for stage in &projection.stages {
        println!(
            "{:<10} {:>8} {:>8} {:>11.2}s {:>10.2} {:>8.2}",
            stage.stage.name,
            stage.stage.steps,
            stage.stage.seq_len,
            stage.step_seconds,
            stage.total_hours(),
            stage.total_days(),
        );
    }

    let day_breakdown: Vec<String> = projection
        .stages
        .iter()
        .map(|s| format!("{:.1}", s.total_days()))
        .collect();
    println!(
        "\nTotal: {:.2} hours ({} = {:.1} days)",
        projection.total_hours(),
        day_breakdown.join(" + "),
        projection.total_days(),
    );

    if let Some(output) = output {
        display::write_training(&projection, &output, format)?;
        println!("Wrote {}", output.display());
    }

    Ok(())
}
