//! Dataset loading: label records and images from a single folder.

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::classes::{load_classes, CLASSES_FILE};
use crate::error::{LabelError, Result};
use crate::state::types::{AnnotationSet, Dataset, LabelRecord};

pub const LABEL_EXTENSION: &str = "txt";

/// Image extensions in lookup order. The first existing file wins.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

impl Dataset {
    /// Read the class list and every label file in `folder`.
    pub fn open(folder: &Path) -> Result<Self> {
        let classes = load_classes(folder)?;
        let annotations = load_annotations(folder)?;
        log::info!(
            "Loaded {} classes and {} label files ({} boxes) from {}",
            classes.len(),
            annotations.len(),
            annotations.record_count(),
            folder.display()
        );
        Ok(Self {
            folder: folder.to_path_buf(),
            classes,
            annotations,
        })
    }
}

/// Scan `folder` for `<image_id>.txt` label files, skipping `classes.txt`.
pub fn load_annotations(folder: &Path) -> Result<AnnotationSet> {
    let entries = fs::read_dir(folder).map_err(|e| LabelError::io(folder, e))?;

    let mut annotations = AnnotationSet::default();
    for entry in entries {
        let entry = entry.map_err(|e| LabelError::io(folder, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        if file_name == CLASSES_FILE {
            continue;
        }
        let Some(image_id) = file_name
            .strip_suffix(LABEL_EXTENSION)
            .and_then(|stem| stem.strip_suffix('.'))
        else {
            continue;
        };

        let text = fs::read_to_string(&path).map_err(|e| LabelError::io(&path, e))?;
        annotations.insert(image_id.to_string(), parse_label_content(&text));
    }

    Ok(annotations)
}

/// Split label file content into raw records, one per line. Blank lines are
/// kept as empty records so they fail like any other malformed line.
pub fn parse_label_content(text: &str) -> Vec<LabelRecord> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| LabelRecord::parse_line(idx + 1, line))
        .collect()
}

/// Load the image for `image_id`, trying each of [`IMAGE_EXTENSIONS`] in order.
///
/// Returns `None` when no candidate exists. When the first existing candidate
/// fails to decode, later extensions are not tried.
pub fn load_image(folder: &Path, image_id: &str) -> Option<RgbaImage> {
    let path = IMAGE_EXTENSIONS
        .iter()
        .map(|ext| folder.join(format!("{image_id}.{ext}")))
        .find(|path| path.is_file())?;

    match image::open(&path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            log::warn!("Failed to decode {}: {}", path.display(), e);
            None
        }
    }
}
