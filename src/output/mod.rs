//! Writers for classification rows
//!
//! Two formats are supported: CSV with a header line, and JSON Lines with one
//! object per row. Missing values are written as empty CSV fields and as
//! `null` in JSON.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{DossierError, Result};
use crate::models::ClassificationRow;

/// Output format for classified rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values with a header line
    #[default]
    Csv,
    /// One JSON object per line
    JsonLines,
}

impl FromStr for OutputFormat {
    type Err = DossierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" | "jsonl" | "jsonlines" => Ok(Self::JsonLines),
            other => Err(DossierError::config(format!(
                "unknown output format {other:?} (expected csv or json)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::JsonLines => write!(f, "json"),
        }
    }
}

/// Write rows in the given format
pub fn write_rows<W: Write>(
    writer: &mut W,
    rows: &[ClassificationRow],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, rows),
        OutputFormat::JsonLines => write_json_lines(writer, rows),
    }
}

/// Write a header line and one CSV line per row
pub fn write_csv<W: Write>(writer: &mut W, rows: &[ClassificationRow]) -> Result<()> {
    writeln!(writer, "{}", ClassificationRow::COLUMNS.join(","))?;
    for row in rows {
        let line = row
            .values()
            .into_iter()
            .map(|value| value.map_or_else(String::new, csv_field))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one JSON object per row
pub fn write_json_lines<W: Write>(writer: &mut W, rows: &[ClassificationRow]) -> Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *writer, row)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Quote a CSV field when it contains a separator, a quote or a line break
#[must_use]
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
