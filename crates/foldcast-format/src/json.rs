//! JSON output format.

use foldcast_estimate::{AggregateResult, TrainingProjection};
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print the output.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with compact output.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_inference<W: Write + Send>(
        &self,
        result: &AggregateResult,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, result)?;
        } else {
            serde_json::to_writer(&mut writer, result)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_training<W: Write + Send>(
        &self,
        projection: &TrainingProjection,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, projection)?;
        } else {
            serde_json::to_writer(&mut writer, projection)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}
