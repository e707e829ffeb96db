use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::classes::ClassList;

/// One line of a label file, still as raw whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    /// 1-based line number inside `<image_id>.txt`.
    pub line: usize,
    pub tokens: Vec<String>,
}

impl LabelRecord {
    pub fn parse_line(line: usize, text: &str) -> Self {
        Self {
            line,
            tokens: text.split_whitespace().map(str::to_string).collect(),
        }
    }
}

/// Label records keyed by image identifier (the label file stem).
///
/// Identifiers iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    entries: BTreeMap<String, Vec<LabelRecord>>,
}

impl AnnotationSet {
    pub fn insert(&mut self, image_id: String, records: Vec<LabelRecord>) {
        self.entries.insert(image_id, records);
    }

    pub fn get(&self, image_id: &str) -> Option<&[LabelRecord]> {
        self.entries.get(image_id).map(Vec::as_slice)
    }

    pub fn image_ids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LabelRecord])> {
        self.entries
            .iter()
            .map(|(id, records)| (id.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<LabelRecord>)> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = (String, Vec<LabelRecord>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Everything read from a dataset folder at startup.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub folder: PathBuf,
    pub classes: ClassList,
    pub annotations: AnnotationSet,
}

/// Position in the image carousel. Wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerState {
    index: usize,
    len: usize,
}

/// Navigation step requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

impl ViewerState {
    /// Returns `None` for an empty carousel.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn navigate(&mut self, direction: Direction) -> usize {
        let len = self.len as isize;
        self.index = (self.index as isize + direction.step()).rem_euclid(len) as usize;
        self.index
    }
}
