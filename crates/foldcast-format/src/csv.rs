//! CSV output format.

use foldcast_estimate::{AggregateResult, TrainingProjection};
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include a header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_inference<W: Write + Send>(
        &self,
        result: &AggregateResult,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "bin_lower{d}bin_upper{d}count{d}reference_seconds{d}target_seconds{d}serial_seconds{d}wall_seconds{d}cumulative_wall_seconds"
            )?;
        }

        for (projection, cumulative) in result.bins.iter().zip(&result.cumulative_wall_seconds) {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                projection.bin.lower,
                projection.bin.upper,
                projection.bin.count,
                projection.reference_seconds,
                projection.target_seconds,
                projection.serial_seconds,
                projection.wall_seconds,
                cumulative
            )?;
        }

        Ok(())
    }

    fn write_training<W: Write + Send>(
        &self,
        projection: &TrainingProjection,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "stage{d}steps{d}seq_len{d}step_seconds{d}total_seconds{d}total_hours"
            )?;
        }

        for stage in &projection.stages {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                stage.stage.name,
                stage.stage.steps,
                stage.stage.seq_len,
                stage.step_seconds,
                stage.total_seconds,
                stage.total_hours()
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldcast_estimate::{AnchorCurve, InferenceEstimator};
    use foldcast_types::{AnchorPoint, ClusterConfig, LengthBin, SpeedupRatio};

    fn sample_result() -> AggregateResult {
        let curve = AnchorCurve::new(vec![
            AnchorPoint::new(100, 4.9),
            AnchorPoint::new(300, 13.0),
        ])
        .unwrap();
        let estimator = InferenceEstimator::new(curve, SpeedupRatio::IDENTITY);
        estimator
            .aggregate(
                &[LengthBin::new(100, 199, 2), LengthBin::new(200, 299, 4)],
                ClusterConfig::single(),
            )
            .unwrap()
    }

    #[test]
    fn test_csv_inference_shape() {
        let mut out = Vec::new();
        CsvFormatter::new()
            .write_inference(&sample_result(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("bin_lower,bin_upper,count"));
        assert!(lines[1].starts_with("100,199,2,"));
        assert!(lines[2].starts_with("200,299,4,"));
    }

    #[test]
    fn test_csv_without_header() {
        let mut out = Vec::new();
        CsvFormatter::new()
            .with_header(false)
            .write_inference(&sample_result(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_tsv_delimiter() {
        let formatter = CsvFormatter::tsv();
        assert_eq!(formatter.extension(), "tsv");

        let mut out = Vec::new();
        formatter.write_inference(&sample_result(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().next().unwrap().contains('\t'));
    }
}
