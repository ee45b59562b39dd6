//! Labels, samples and the in-memory sample set.

use std::fmt;

use super::Grid;

/// A single decimal digit used to tag a drawing.
///
/// The only way to build a `Label` is [`Label::parse`], so holding one means
/// the text it came from was exactly one ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(u8);

impl Label {
    /// Parses label text.
    ///
    /// Accepts exactly one character in `0..=9`. Empty text, multi-digit text,
    /// signs, whitespace and any other character are rejected.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|d| Self(d as u8)),
            _ => None,
        }
    }

    /// The digit value (0-9).
    #[must_use]
    pub const fn digit(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns true iff `text` is exactly one decimal digit.
#[must_use]
pub fn is_valid_label(text: &str) -> bool {
    Label::parse(text).is_some()
}

/// One labeled drawing: the label digit followed by the flattened grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    label: Label,
    pixels: Vec<u8>,
}

impl Sample {
    /// Captures the current state of `grid` under `label`.
    #[must_use]
    pub fn capture(label: Label, grid: &Grid) -> Self {
        Self {
            label,
            pixels: grid.flatten(),
        }
    }

    /// The label this sample was saved with.
    #[must_use]
    pub const fn label(&self) -> Label {
        self.label
    }

    /// All `1 + R·C` fields: label digit first, then the pixels.
    #[must_use]
    pub fn fields(&self) -> Vec<u8> {
        std::iter::once(self.label.digit())
            .chain(self.pixels.iter().copied())
            .collect()
    }

    /// Number of fields in the exported record.
    #[must_use]
    pub fn field_count(&self) -> usize {
        1 + self.pixels.len()
    }

    /// Comma-separated record without a line terminator.
    #[must_use]
    pub fn to_csv_line(&self) -> String {
        self.fields()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Insertion-ordered samples collected during one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Appends a sample and returns a reference to it.
    pub fn push(&mut self, sample: Sample) -> &Sample {
        self.samples.push(sample);
        &self.samples[self.samples.len() - 1]
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been saved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Per-digit sample counts, indexed by digit.
    #[must_use]
    pub fn label_histogram(&self) -> [usize; 10] {
        let mut counts = [0; 10];
        for sample in &self.samples {
            counts[sample.label.digit() as usize] += 1;
        }
        counts
    }

    /// Serializes the set as CSV text.
    ///
    /// One record per line, no header, `\n` only between records.
    /// Returns `None` for an empty set so callers never produce an empty file.
    #[must_use]
    pub fn to_csv(&self) -> Option<String> {
        if self.samples.is_empty() {
            return None;
        }
        Some(
            self.samples
                .iter()
                .map(Sample::to_csv_line)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    #[test]
    fn test_label_accepts_single_digits() {
        for d in 0..=9u8 {
            let text = d.to_string();
            assert_eq!(Label::parse(&text).map(Label::digit), Some(d));
        }
    }

    #[test]
    fn test_label_rejects_everything_else() {
        for text in ["", "12", "a", "-1", " 5", "5 ", "+3", "٣", "Ⅴ", "\n"] {
            assert!(!is_valid_label(text), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_sample_fields() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(1, 1), true);
        let sample = Sample::capture(Label::parse("4").unwrap(), &grid);
        assert_eq!(sample.fields(), vec![4, 0, 0, 0, 1]);
        assert_eq!(sample.field_count(), 5);
        assert_eq!(sample.to_csv_line(), "4,0,0,0,1");
    }

    #[test]
    fn test_empty_set_has_no_csv() {
        assert_eq!(SampleSet::new().to_csv(), None);
    }

    #[test]
    fn test_csv_has_one_line_per_sample() {
        let grid = Grid::new(1, 2);
        let mut set = SampleSet::new();
        set.push(Sample::capture(Label::parse("1").unwrap(), &grid));
        set.push(Sample::capture(Label::parse("2").unwrap(), &grid));
        assert_eq!(set.to_csv().as_deref(), Some("1,0,0\n2,0,0"));
    }

    #[test]
    fn test_label_histogram() {
        let grid = Grid::new(1, 1);
        let mut set = SampleSet::new();
        for text in ["3", "3", "7"] {
            set.push(Sample::capture(Label::parse(text).unwrap(), &grid));
        }
        let counts = set.label_histogram();
        assert_eq!(counts[3], 2);
        assert_eq!(counts[7], 1);
        assert_eq!(counts.iter().sum::<usize>(), 3);
    }
}
