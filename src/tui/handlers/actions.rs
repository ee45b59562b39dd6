//! Action dispatch for keyboard shortcuts and control buttons.

use anyhow::Result;
use std::time::Instant;

use crate::export::clipboard_sink::ClipboardSink;
use crate::export::file_sink::FileSink;
use crate::export::ExportSink;
use crate::shortcuts::Action;
use crate::tui::AppState;

/// Runs `action`. Returns `true` when the app should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::SaveSample => handle_save(state),
        Action::ExportSamples => {
            let mut sink = FileSink::new(state.config.export.output_dir.clone());
            handle_export(state, &mut sink)
        }
        Action::CopyExport => handle_export(state, &mut ClipboardSink),
        Action::ClearGrid => {
            state.editor.clear_grid();
            state.set_status("Grid cleared");
            Ok(false)
        }
        Action::DeleteLabelChar => {
            state.editor.pop_label_char();
            Ok(false)
        }
        Action::ToggleHelp => {
            if state.help.is_some() {
                state.help = None;
            } else {
                state.open_help();
            }
            Ok(false)
        }
        Action::Cancel => {
            state.editor.close_toast();
            Ok(false)
        }
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
    }
}

/// Save the drawing under the label field, or explain why not
fn handle_save(state: &mut AppState) -> Result<bool> {
    let saved = state
        .editor
        .save_current_label(Instant::now())
        .map(crate::models::Sample::label);

    match saved {
        Some(label) => state.set_status(format!("Saved digit {label}, grid cleared")),
        None => {
            let warning = state.theme.warning;
            state.set_status_with_style("Label must be a single digit 0-9", warning);
        }
    }
    Ok(false)
}

/// Export all samples through `sink` and report the outcome
pub(super) fn handle_export(state: &mut AppState, sink: &mut dyn ExportSink) -> Result<bool> {
    match state.editor.export_samples(sink) {
        Ok(Some(receipt)) => {
            let noun = if receipt.record_count == 1 {
                "sample"
            } else {
                "samples"
            };
            state.set_status(format!(
                "Exported {} {noun} to {}",
                receipt.record_count, receipt.destination
            ));
        }
        Ok(None) => {
            let warning = state.theme.warning;
            state.set_status_with_style("Nothing to export yet", warning);
        }
        Err(e) => {
            tracing::error!("export failed: {e:#}");
            state.set_error(format!("{e:#}"));
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::export::MemorySink;
    use crate::models::Position;
    use tempfile::TempDir;

    fn state_with_output(dir: &TempDir) -> AppState {
        let mut config = Config::default();
        config.export.output_dir = dir.path().to_path_buf();
        AppState::new(config)
    }

    #[test]
    fn test_save_requires_valid_label() {
        let mut state = AppState::new(Config::default());
        state.editor.paint_cell(Position::new(0, 0), true);

        dispatch_action(&mut state, Action::SaveSample).unwrap();
        assert!(state.editor.samples().is_empty());
        assert!(state.status_color_override.is_some());
        assert!(!state.editor.grid().is_blank());

        state.editor.set_label_text("3");
        dispatch_action(&mut state, Action::SaveSample).unwrap();
        assert_eq!(state.editor.samples().len(), 1);
        assert!(state.editor.grid().is_blank());
        assert!(state.editor.toast().visible);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with_output(&dir);
        state.editor.set_label_text("1");
        dispatch_action(&mut state, Action::SaveSample).unwrap();

        dispatch_action(&mut state, Action::ExportSamples).unwrap();

        let path = dir.path().join("saved_data.csv");
        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.split(',').count(), 55);
        assert!(state.status_message.starts_with("Exported 1 sample to"));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_export_with_no_samples_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with_output(&dir);

        dispatch_action(&mut state, Action::ExportSamples).unwrap();

        assert!(!dir.path().join("saved_data.csv").exists());
        assert_eq!(state.status_message, "Nothing to export yet");
    }

    #[test]
    fn test_export_through_sink() {
        let mut state = AppState::new(Config::default());
        state.editor.set_label_text("8");
        dispatch_action(&mut state, Action::SaveSample).unwrap();
        dispatch_action(&mut state, Action::SaveSample).unwrap();

        let mut sink = MemorySink::new();
        handle_export(&mut state, &mut sink).unwrap();

        assert_eq!(sink.delivered.len(), 1);
        assert_eq!(sink.delivered[0].record_count, 2);
        assert_eq!(state.editor.samples().len(), 2);
    }

    #[test]
    fn test_cancel_closes_toast() {
        let mut state = AppState::new(Config::default());
        state.editor.set_label_text("0");
        dispatch_action(&mut state, Action::SaveSample).unwrap();
        assert!(state.editor.toast().visible);

        dispatch_action(&mut state, Action::Cancel).unwrap();
        assert!(!state.editor.toast().visible);
        assert!(!state.editor.notifier().has_pending_dismiss());
    }

    #[test]
    fn test_toggle_help() {
        let mut state = AppState::new(Config::default());
        state.help = None;

        dispatch_action(&mut state, Action::ToggleHelp).unwrap();
        assert!(state.help.is_some());
        dispatch_action(&mut state, Action::ToggleHelp).unwrap();
        assert!(state.help.is_none());
    }
}
