//! Output format abstraction.

use foldcast_estimate::{AggregateResult, TrainingProjection};
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for projection output formatters.
pub trait Formatter: Send + Sync {
    /// Writes an inference aggregate to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_inference<W: Write + Send>(
        &self,
        result: &AggregateResult,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a training projection to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_training<W: Write + Send>(
        &self,
        projection: &TrainingProjection,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("parquet".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Csv.extension(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::all().len(), 2);
    }
}
