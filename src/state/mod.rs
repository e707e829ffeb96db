//! Dataset state for the label viewer.
//!
//! This module contains:
//! - Folder loading (class list, label records, images)
//! - The annotation set and dataset types
//! - The carousel position used by the viewer

mod types;
mod dataset;

pub use types::*;
pub use dataset::*;
