//! Grid editor: pointer painting, labeling, sample collection and export.
//!
//! `GridEditor` is the single owner of all editing state. The terminal layer
//! translates input into calls on it, but nothing in here depends on the
//! terminal, so every operation can be driven directly with synthetic
//! coordinates and buttons.

use anyhow::Result;
use std::time::{Duration, Instant};

use crate::constants::{DEFAULT_COLS, DEFAULT_EXPORT_FILE_NAME, DEFAULT_ROWS};
use crate::export::{ExportPayload, ExportReceipt, ExportSink};
use crate::models::{is_valid_label, Grid, Label, Position, Sample, SampleSet};
use crate::notifier::{Notifier, ToastState};

/// Paint mode of a continuous pointer drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintState {
    /// No button held over the grid
    #[default]
    Idle,
    /// Button held; every crossed cell is set to the value
    Painting(bool),
}

impl PaintState {
    /// Value cells are painted with, if a drag is in progress.
    #[must_use]
    pub const fn value(self) -> Option<bool> {
        match self {
            Self::Idle => None,
            Self::Painting(value) => Some(value),
        }
    }
}

/// Pointer button that started a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Main button; paints black
    Primary,
    /// Context button; paints white
    Secondary,
    /// Any other button; ignored
    Auxiliary,
}

/// Outcome of a pointer press, for the dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerResponse {
    /// The host must suppress its default action (the context menu)
    pub prevent_default: bool,
    /// A cell was written
    pub painted: bool,
}

/// Pixel grid editor.
#[derive(Debug, Clone)]
pub struct GridEditor {
    grid: Grid,
    paint_state: PaintState,
    label_text: String,
    samples: SampleSet,
    notifier: Notifier,
    export_file_name: String,
}

impl GridEditor {
    /// Creates an editor with a blank `rows` × `cols` grid.
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            paint_state: PaintState::Idle,
            label_text: String::new(),
            samples: SampleSet::new(),
            notifier: Notifier::default(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }

    /// Sets how long the save acknowledgment stays visible.
    #[must_use]
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.notifier = Notifier::new(duration);
        self
    }

    /// Sets the file name used for exports.
    #[must_use]
    pub fn with_export_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.export_file_name = file_name.into();
        self
    }

    // === Grid ===

    /// Current grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Sets one cell. Out-of-range positions are ignored and return `false`.
    pub fn paint_cell(&mut self, pos: Position, value: bool) -> bool {
        let painted = self.grid.set(pos, value);
        if !painted {
            tracing::warn!(row = pos.row, col = pos.col, "paint outside grid ignored");
        }
        painted
    }

    /// Resets every cell to white. Saved samples are not affected.
    pub fn clear_grid(&mut self) {
        self.grid.clear();
        tracing::debug!("grid cleared");
    }

    // === Pointer state machine ===

    /// Current paint state.
    #[must_use]
    pub const fn paint_state(&self) -> PaintState {
        self.paint_state
    }

    /// Button pressed over `pos`.
    ///
    /// Primary starts painting black, secondary starts painting white. A press
    /// during a drag restarts painting with the new value. Other buttons are
    /// ignored.
    pub fn on_pointer_down(&mut self, pos: Position, button: PointerButton) -> PointerResponse {
        let value = match button {
            PointerButton::Primary => true,
            PointerButton::Secondary => false,
            PointerButton::Auxiliary => return PointerResponse::default(),
        };

        self.paint_state = PaintState::Painting(value);
        let painted = self.paint_cell(pos, value);
        tracing::debug!(row = pos.row, col = pos.col, value, "painting started");

        PointerResponse {
            prevent_default: button == PointerButton::Secondary,
            painted,
        }
    }

    /// Pointer moved over `pos`. Paints it while a drag is in progress.
    pub fn on_pointer_move(&mut self, pos: Position) -> bool {
        match self.paint_state {
            PaintState::Painting(value) => {
                self.paint_cell(pos, value);
                true
            }
            PaintState::Idle => false,
        }
    }

    /// Button released.
    pub fn on_pointer_up(&mut self) {
        self.stop_painting();
    }

    /// Pointer left the grid. Ends the drag even if the button is still held.
    pub fn on_pointer_leave(&mut self) {
        self.stop_painting();
    }

    fn stop_painting(&mut self) {
        if self.paint_state != PaintState::Idle {
            tracing::debug!("painting stopped");
        }
        self.paint_state = PaintState::Idle;
    }

    // === Label ===

    /// Whether `text` is exactly one decimal digit.
    #[must_use]
    pub fn is_valid_label(text: &str) -> bool {
        is_valid_label(text)
    }

    /// Current label field text.
    #[must_use]
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    /// Replaces the label field text.
    pub fn set_label_text(&mut self, text: impl Into<String>) {
        self.label_text = text.into();
    }

    /// Appends a typed character to the label field.
    pub fn push_label_char(&mut self, c: char) {
        self.label_text.push(c);
    }

    /// Deletes the last character of the label field.
    pub fn pop_label_char(&mut self) {
        self.label_text.pop();
    }

    /// Parsed label, if the field currently holds one digit.
    #[must_use]
    pub fn current_label(&self) -> Option<Label> {
        Label::parse(&self.label_text)
    }

    /// Whether the save control is enabled.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.current_label().is_some()
    }

    // === Samples ===

    /// Samples saved so far.
    #[must_use]
    pub const fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Saves the current drawing under `label`.
    ///
    /// Appends exactly one sample, clears the grid and shows the success toast.
    pub fn save_sample(&mut self, label: Label) -> &Sample {
        self.save_sample_at(label, Instant::now())
    }

    /// Like [`GridEditor::save_sample`] with an explicit clock reading.
    pub fn save_sample_at(&mut self, label: Label, now: Instant) -> &Sample {
        let sample = Sample::capture(label, &self.grid);
        let inked = self.grid.inked_count();
        self.grid.clear();

        let total = self.samples.len() + 1;
        self.notifier
            .show(format!("Saved sample for digit {label} ({total} total)"), now);
        tracing::info!(label = label.digit(), inked, total, "sample saved");

        self.samples.push(sample)
    }

    /// The save control: saves under the label field text if it is valid.
    ///
    /// Does nothing and returns `None` while the field does not hold exactly
    /// one digit. The field keeps its text after saving.
    pub fn save_current_label(&mut self, now: Instant) -> Option<&Sample> {
        let label = self.current_label()?;
        Some(self.save_sample_at(label, now))
    }

    /// Whether the export control is enabled.
    #[must_use]
    pub fn can_export(&self) -> bool {
        !self.samples.is_empty()
    }

    /// Serializes the sample set and hands it to `sink`.
    ///
    /// An empty set is a no-op: nothing is handed off and `Ok(None)` is
    /// returned. The sample set is never modified, so exporting can be
    /// repeated.
    pub fn export_samples(&self, sink: &mut dyn ExportSink) -> Result<Option<ExportReceipt>> {
        let Some(payload) = ExportPayload::from_samples(&self.samples, &self.export_file_name)
        else {
            tracing::debug!("export skipped: no samples");
            return Ok(None);
        };

        sink.deliver(&payload).map(Some)
    }

    // === Toast ===

    /// Toast the view should render.
    #[must_use]
    pub const fn toast(&self) -> &ToastState {
        self.notifier.state()
    }

    /// Toast controller.
    #[must_use]
    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Close callback of the toast.
    pub fn close_toast(&mut self) {
        self.notifier.close();
    }

    /// Drives the toast's deferred dismiss. Returns true if it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifier.tick(now)
    }

    /// Cancels everything deferred; called when the view is torn down.
    pub fn teardown(&mut self) {
        self.notifier.teardown();
        self.paint_state = PaintState::Idle;
    }
}

impl Default for GridEditor {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
