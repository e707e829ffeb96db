//! Per-class instance counting and the bar chart series derived from it.

use std::collections::BTreeMap;

use crate::classes::ClassList;
use crate::convert::parse_class_id;
use crate::error::Result;
use crate::state::AnnotationSet;

/// Number of labeled instances per class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassCounts {
    counts: BTreeMap<String, usize>,
}

/// One bar of the class distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub name: String,
    pub count: usize,
    /// Count relative to the tallest bar, in `0.0..=1.0`.
    pub fraction: f32,
}

impl ClassCounts {
    pub fn get(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Bars in class list order. Classes that never occur are left out.
    pub fn bars(&self, classes: &ClassList) -> Vec<ChartBar> {
        let max = self.counts.values().copied().max().unwrap_or(0);
        let mut seen = Vec::new();
        let mut bars = Vec::new();
        for (_, name) in classes.iter() {
            let count = self.get(name);
            if count == 0 || seen.contains(&name) {
                continue;
            }
            seen.push(name);
            bars.push(ChartBar {
                name: name.to_string(),
                count,
                fraction: count as f32 / max as f32,
            });
        }
        bars
    }
}

impl<'a> FromIterator<(&'a str, usize)> for ClassCounts {
    fn from_iter<I: IntoIterator<Item = (&'a str, usize)>>(iter: I) -> Self {
        Self {
            counts: iter
                .into_iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect(),
        }
    }
}

/// Count every label record in `annotations` by class name.
///
/// Only the class id field is read. A class id with no entry in `classes`
/// is an error.
pub fn count_class_instances(annotations: &AnnotationSet, classes: &ClassList) -> Result<ClassCounts> {
    let mut counts = ClassCounts::default();
    for (image_id, records) in annotations.iter() {
        for record in records {
            let class_id = parse_class_id(image_id, record)?;
            let name = classes.name_for(image_id, record.line, class_id)?;
            *counts.counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }
    log::debug!("Counted {} instances across {} classes", counts.total(), counts.counts.len());
    Ok(counts)
}
