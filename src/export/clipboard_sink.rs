//! Copies export payloads to the system clipboard.

use anyhow::{Context, Result};

use super::{ExportDestination, ExportPayload, ExportReceipt, ExportSink};

/// Sink backed by the system clipboard.
///
/// The clipboard handle is opened per delivery and dropped before returning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipboardSink;

impl ExportSink for ClipboardSink {
    fn deliver(&mut self, payload: &ExportPayload) -> Result<ExportReceipt> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(payload.contents.clone()))
            .context("Failed to copy export to clipboard")?;

        tracing::info!(records = payload.record_count, "copied samples to clipboard");

        Ok(ExportReceipt {
            destination: ExportDestination::Clipboard,
            record_count: payload.record_count,
            bytes: payload.contents.len(),
        })
    }
}
