//! Data models for the pixel grid and labeled samples.
//!
//! Models are independent of the terminal UI and can be driven directly from tests.

pub mod grid;
pub mod sample;

pub use grid::{Grid, Position};
pub use sample::{is_valid_label, Label, Sample, SampleSet};
