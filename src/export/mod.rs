//! Export of accumulated samples.
//!
//! The sample set is serialized to CSV and wrapped in an [`ExportPayload`],
//! which is handed to an [`ExportSink`]. Sinks model the host's "save this
//! file" mechanism: the editor hands the payload over and does not observe
//! anything after `deliver` returns.

pub mod clipboard_sink;
pub mod file_sink;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

use crate::constants::{DEFAULT_EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::models::SampleSet;

pub use clipboard_sink::ClipboardSink;
pub use file_sink::FileSink;

/// Serialized sample set ready to be handed off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Suggested file name (e.g., `saved_data.csv`)
    pub file_name: String,
    /// MIME type of `contents`
    pub mime_type: &'static str,
    /// CSV text, one record per line
    pub contents: String,
    /// Number of records in `contents`
    pub record_count: usize,
}

impl ExportPayload {
    /// Builds a CSV payload from `samples`.
    ///
    /// Returns `None` when there is nothing to export.
    #[must_use]
    pub fn from_samples(samples: &SampleSet, file_name: impl Into<String>) -> Option<Self> {
        let contents = samples.to_csv()?;
        Some(Self {
            file_name: file_name.into(),
            mime_type: EXPORT_MIME_TYPE,
            contents,
            record_count: samples.len(),
        })
    }

    /// Builds a payload with the default file name.
    #[must_use]
    pub fn csv(samples: &SampleSet) -> Option<Self> {
        Self::from_samples(samples, DEFAULT_EXPORT_FILE_NAME)
    }
}

/// Where a delivered payload ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportDestination {
    /// Written to a file
    File(PathBuf),
    /// Placed on the system clipboard
    Clipboard,
}

impl fmt::Display for ExportDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Clipboard => write!(f, "clipboard"),
        }
    }
}

/// Result of a successful handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Destination of the payload
    pub destination: ExportDestination,
    /// Number of records handed off
    pub record_count: usize,
    /// Size of the handed-off text in bytes
    pub bytes: usize,
}

/// Host-side file-save mechanism.
pub trait ExportSink {
    /// Hands `payload` to the host.
    ///
    /// Any temporary resource used for the handoff must be released before
    /// this returns.
    fn deliver(&mut self, payload: &ExportPayload) -> Result<ExportReceipt>;
}

/// Sink that keeps every delivered payload in memory.
///
/// Useful for tests and for embedding the editor in another host.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Payloads in delivery order
    pub delivered: Vec<ExportPayload>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delivered: Vec::new(),
        }
    }
}

impl ExportSink for MemorySink {
    fn deliver(&mut self, payload: &ExportPayload) -> Result<ExportReceipt> {
        self.delivered.push(payload.clone());
        Ok(ExportReceipt {
            destination: ExportDestination::File(PathBuf::from(&payload.file_name)),
            record_count: payload.record_count,
            bytes: payload.contents.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grid, Label, Position, Sample};

    #[test]
    fn test_payload_from_empty_set_is_none() {
        assert!(ExportPayload::csv(&SampleSet::new()).is_none());
    }

    #[test]
    fn test_payload_metadata() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(0, 0), true);
        let mut samples = SampleSet::new();
        samples.push(Sample::capture(Label::parse("8").unwrap(), &grid));

        let payload = ExportPayload::csv(&samples).unwrap();
        assert_eq!(payload.file_name, "saved_data.csv");
        assert_eq!(payload.mime_type, "text/csv");
        assert_eq!(payload.contents, "8,1,0,0,0");
        assert_eq!(payload.record_count, 1);
    }

    #[test]
    fn test_memory_sink_records_payloads() {
        let grid = Grid::new(1, 1);
        let mut samples = SampleSet::new();
        samples.push(Sample::capture(Label::parse("0").unwrap(), &grid));
        let payload = ExportPayload::csv(&samples).unwrap();

        let mut sink = MemorySink::new();
        let receipt = sink.deliver(&payload).unwrap();
        assert_eq!(receipt.record_count, 1);
        assert_eq!(receipt.bytes, 3);
        assert_eq!(sink.delivered, vec![payload]);
    }
}
