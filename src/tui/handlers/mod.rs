//! Input handler modules for the editing screen.

pub mod actions;
pub mod help;
pub mod main;
pub mod mouse;

// Re-export handler functions
pub use actions::dispatch_action;
pub use help::handle_help_input;
pub use main::handle_main_input;
pub use mouse::handle_mouse_input;
