//! Writes export payloads to a directory on disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::{ExportDestination, ExportPayload, ExportReceipt, ExportSink};

/// Sink that writes the payload as `<dir>/<file_name>`.
///
/// An existing file with the same name is replaced, matching a browser
/// download that overwrites the previous export.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Creates a sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path a payload named `file_name` would be written to.
    #[must_use]
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl ExportSink for FileSink {
    /// Uses temp file + rename so a half-written export never replaces a good one.
    fn deliver(&mut self, payload: &ExportPayload) -> Result<ExportReceipt> {
        fs::create_dir_all(&self.dir).context(format!(
            "Failed to create export directory: {}",
            self.dir.display()
        ))?;

        let target = self.target_path(&payload.file_name);
        let temp_path = target.with_extension("csv.tmp");

        // fs::write opens and closes the handle before returning
        fs::write(&temp_path, &payload.contents).context(format!(
            "Failed to write temp export file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &target).context(format!(
            "Failed to rename temp export file to: {}",
            target.display()
        ))?;

        tracing::info!(
            path = %target.display(),
            records = payload.record_count,
            "exported samples"
        );

        Ok(ExportReceipt {
            destination: ExportDestination::File(target),
            record_count: payload.record_count,
            bytes: payload.contents.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn payload(contents: &str, records: usize) -> ExportPayload {
        ExportPayload {
            file_name: "saved_data.csv".to_string(),
            mime_type: "text/csv",
            contents: contents.to_string(),
            record_count: records,
        }
    }

    #[test]
    fn test_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(temp_dir.path());

        let receipt = sink.deliver(&payload("1,0,1\n2,1,0", 2)).unwrap();

        let path = temp_dir.path().join("saved_data.csv");
        assert_eq!(receipt.destination, ExportDestination::File(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "1,0,1\n2,1,0");
        // temp file must not be left behind
        assert!(!temp_dir.path().join("saved_data.csv.tmp").exists());
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("exports").join("digits");
        let mut sink = FileSink::new(&nested);

        sink.deliver(&payload("3,0", 1)).unwrap();
        assert!(nested.join("saved_data.csv").exists());
    }

    #[test]
    fn test_repeated_export_replaces_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(temp_dir.path());

        sink.deliver(&payload("1,0", 1)).unwrap();
        sink.deliver(&payload("1,0\n2,1", 2)).unwrap();

        let content = fs::read_to_string(temp_dir.path().join("saved_data.csv")).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
