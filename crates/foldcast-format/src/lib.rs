//! Output formatting for foldcast projection results.
//!
//! This crate provides formatters that serialize projection results for
//! downstream charting or spreadsheet tooling:
//!
//! - [`Formatter`] - Common trait for projection writers
//! - [`CsvFormatter`] - CSV/TSV output
//! - [`JsonFormatter`] - JSON output
//! - [`OutputFormat`] - Format identifier with extension mapping

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/foldcast/foldcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
