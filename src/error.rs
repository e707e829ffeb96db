//! Error type shared by every stage of the label pipeline.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("class list not found at {}", path.display())]
    ClassesNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{image_id}.txt line {line}: expected 5 fields, found {found}")]
    WrongTokenCount {
        image_id: String,
        line: usize,
        found: usize,
    },

    #[error("{image_id}.txt line {line}: invalid {field} value '{token}'")]
    InvalidNumber {
        image_id: String,
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("{image_id}.txt line {line}: class id {class_id} is out of range for {class_count} class(es)")]
    ClassIdOutOfRange {
        image_id: String,
        line: usize,
        class_id: usize,
        class_count: usize,
    },

    #[error("no annotated images found in {}", folder.display())]
    NoImages { folder: PathBuf },

    #[error("unknown color '{token}'")]
    UnknownColor { token: String },

    #[error("input closed before an answer was given")]
    PromptClosed,

    #[error("config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl LabelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LabelError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = LabelError> = std::result::Result<T, E>;
