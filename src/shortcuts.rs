//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.
//! Plain characters are never bound: they go to the label field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Shortcut context for the main editing screen.
pub const MAIN_CONTEXT: &str = "main";

/// Shortcut context while the help overlay is open.
pub const HELP_CONTEXT: &str = "help";

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === SAMPLES ===
    SaveSample,
    ExportSamples,
    CopyExport,

    // === GRID ===
    ClearGrid,

    // === LABEL ===
    DeleteLabelChar,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Cancel,
    Quit,
}

impl Action {
    /// Get the action ID string
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::SaveSample => "save_sample",
            Self::ExportSamples => "export_samples",
            Self::CopyExport => "copy_export",
            Self::ClearGrid => "clear_grid",
            Self::DeleteLabelChar => "delete_label_char",
            Self::ToggleHelp => "toggle_help",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }

    /// Short description shown in the help overlay and status bar.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SaveSample => "Save drawing with label",
            Self::ExportSamples => "Export samples to CSV",
            Self::CopyExport => "Copy CSV to clipboard",
            Self::ClearGrid => "Clear grid",
            Self::DeleteLabelChar => "Delete label character",
            Self::ToggleHelp => "Toggle help",
            Self::Cancel => "Dismiss",
            Self::Quit => "Quit",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }

    /// Human-readable form, e.g. `Ctrl+S`.
    #[must_use]
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        };

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === SAMPLES ===
        self.register(ctx, K::Enter, M::NONE, Action::SaveSample);
        self.register(ctx, K::Char('s'), M::CONTROL, Action::SaveSample);
        self.register(ctx, K::Char('e'), M::CONTROL, Action::ExportSamples);
        self.register(ctx, K::Char('y'), M::CONTROL, Action::CopyExport);

        // === GRID ===
        self.register(ctx, K::Char('l'), M::CONTROL, Action::ClearGrid);

        // === LABEL ===
        self.register(ctx, K::Backspace, M::NONE, Action::DeleteLabelChar);

        // === HELP ===
        self.register(ctx, K::F(1), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts available while the help overlay is open.
    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = HELP_CONTEXT;

        self.register(ctx, K::F(1), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Enter, M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// All key bindings of `action` in `context`, formatted for display.
    #[must_use]
    pub fn keys_for(&self, context: &str, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|((ctx, _), bound)| ctx == context && **bound == action)
            .map(|((_, binding), _)| binding.display())
            .collect();
        keys.sort();
        keys
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
