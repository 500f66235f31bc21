//! Display utilities and output helpers for the foldcast CLI.

use anyhow::Result;
use clap::ValueEnum;
use foldcast_lib::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Output format for projection results.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Builds an estimator from a registry curve and accelerator pair.
///
/// The reference accelerator defaults to the one the curve was measured on.
pub(crate) fn build_estimator(
    curve_id: &str,
    reference_id: Option<&str>,
    target_id: &str,
) -> Result<InferenceEstimator> {
    let registry = DatasetRegistry::global();

    let source = registry.require_curve(curve_id)?;
    let reference_id = reference_id.unwrap_or(&source.accelerator);
    let reference = registry.require_accelerator(reference_id)?;
    let target = registry.require_accelerator(target_id)?;

    let curve = AnchorCurve::new(source.points.clone())?;
    let speedup = reference.speedup_to(target)?;
    Ok(InferenceEstimator::new(curve, speedup))
}

/// Write an inference aggregate to a file in the specified format.
pub(crate) fn write_inference(
    result: &AggregateResult,
    output: &Path,
    format: Format,
) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_inference(result, writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_inference(result, writer)?,
    }

    Ok(())
}

/// Write a training projection to a file in the specified format.
pub(crate) fn write_training(
    projection: &TrainingProjection,
    output: &Path,
    format: Format,
) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_training(projection, writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_training(projection, writer)?,
    }

    Ok(())
}
