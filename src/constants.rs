//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, grid defaults and the export format.

use std::time::Duration;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "PixelGrid";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "pixelgrid";

/// Default number of grid rows.
pub const DEFAULT_ROWS: u8 = 6;

/// Default number of grid columns.
pub const DEFAULT_COLS: u8 = 9;

/// Largest accepted value for either grid dimension.
pub const MAX_GRID_DIMENSION: u8 = 64;

/// File name used for exported sample sets.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "saved_data.csv";

/// MIME type of exported sample sets.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Default time a toast stays visible.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "PIXELGRID_CONFIG_DIR";
