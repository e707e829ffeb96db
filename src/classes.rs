//! Class list loaded from `classes.txt`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LabelError, Result};

pub const CLASSES_FILE: &str = "classes.txt";

/// Class names indexed by their 0-based YOLO class id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, class_id: usize) -> Option<&str> {
        self.names.get(class_id).map(String::as_str)
    }

    /// Resolve a class id coming from `image_id`'s label file; ids past the
    /// end of the list are an error, never a default.
    pub fn name_for(&self, image_id: &str, line: usize, class_id: usize) -> Result<&str> {
        self.get(class_id)
            .ok_or_else(|| LabelError::ClassIdOutOfRange {
                image_id: image_id.to_string(),
                line,
                class_id,
                class_count: self.names.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }
}

/// Load `classes.txt` from the dataset folder, one class name per line.
pub fn load_classes(folder: &Path) -> Result<ClassList> {
    let path = folder.join(CLASSES_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LabelError::ClassesNotFound { path });
        }
        Err(e) => return Err(LabelError::io(path, e)),
    };

    Ok(parse_class_content(&content))
}

fn parse_class_content(content: &str) -> ClassList {
    ClassList::new(content.lines().map(str::to_string).collect())
}
