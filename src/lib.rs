//! PixelGrid Library
//!
//! This library provides the core of the PixelGrid labeling tool: a pixel grid
//! editor that collects labeled digit drawings, CSV export of the collected
//! samples, configuration, and the terminal user interface.

// Module declarations
pub mod config;
pub mod constants;
pub mod editor;
pub mod export;
pub mod models;
pub mod notifier;
pub mod shortcuts;
pub mod tui;
