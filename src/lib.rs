//! Review YOLO-format detection labels.
//!
//! A dataset folder holds `classes.txt`, one `<image_id>.txt` label file per
//! image and the images themselves. This crate loads the folder, converts
//! normalized boxes to pixels, counts instances per class and drives an
//! image carousel; the `label-validator` binary puts a Slint window on top.

pub mod classes;
pub mod colors;
pub mod config;
pub mod convert;
pub mod counter;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod state;
pub mod viewer;

pub use classes::{load_classes, ClassList};
pub use colors::{ClassColor, ColorAssignment, Rgb};
pub use convert::{Annotation, PixelRect};
pub use counter::{count_class_instances, ChartBar, ClassCounts};
pub use error::LabelError;
pub use state::{load_annotations, load_image, AnnotationSet, Dataset, Direction, LabelRecord};
pub use viewer::{Displayed, Frame, Overlay, Surface, Viewer, ViewerOptions};
