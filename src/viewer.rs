//! Image carousel controller.
//!
//! [`Viewer`] owns the loaded dataset, the class colors and the carousel
//! position. It renders the current image into a [`Frame`] and hands it to a
//! [`Surface`], which replaces whatever it showed before.

use image::RgbaImage;

use crate::colors::{ColorAssignment, Rgb};
use crate::convert::{Annotation, PixelRect};
use crate::error::{LabelError, Result};
use crate::state::{load_image, Dataset, Direction, ViewerState};

/// Something that can show one frame at a time.
pub trait Surface {
    fn draw(&mut self, frame: Frame);
}

/// One annotation ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub rect: PixelRect,
    pub label: String,
    pub color: Rgb,
    /// Baseline position of the label, above the box's top-left corner.
    pub label_x: i64,
    pub label_y: i64,
}

/// Everything needed to draw the current image.
#[derive(Debug, Clone)]
pub struct Frame {
    pub image_id: String,
    /// 0-based position in the carousel.
    pub position: usize,
    pub total: usize,
    pub image: RgbaImage,
    pub overlays: Vec<Overlay>,
}

impl Frame {
    pub fn caption(&self) -> String {
        format!("{} ({} / {})", self.image_id, self.position + 1, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Displayed {
    Drawn,
    /// No image file for the current identifier; the surface was not touched.
    ImageMissing,
}

#[derive(Debug, Clone, Copy)]
pub struct ViewerOptions {
    /// Pixels between a box's top edge and its label baseline.
    pub label_offset: i64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self { label_offset: 5 }
    }
}

pub struct Viewer {
    dataset: Dataset,
    colors: ColorAssignment,
    options: ViewerOptions,
    image_ids: Vec<String>,
    state: ViewerState,
}

impl Viewer {
    /// Fails with [`LabelError::NoImages`] when the dataset has no label files.
    pub fn new(dataset: Dataset, colors: ColorAssignment, options: ViewerOptions) -> Result<Self> {
        let image_ids = dataset.annotations.image_ids();
        let state = ViewerState::new(image_ids.len()).ok_or_else(|| LabelError::NoImages {
            folder: dataset.folder.clone(),
        })?;
        Ok(Self {
            dataset,
            colors,
            options,
            image_ids,
            state,
        })
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn len(&self) -> usize {
        self.image_ids.len()
    }

    pub fn current_image_id(&self) -> &str {
        &self.image_ids[self.state.index()]
    }

    pub fn image_ids(&self) -> &[String] {
        &self.image_ids
    }

    pub fn navigate(&mut self, direction: Direction) -> usize {
        let index = self.state.navigate(direction);
        log::debug!("Navigated to {} ({})", index, self.image_ids[index]);
        index
    }

    /// Draw the current image and its boxes on `surface`.
    ///
    /// A missing image is reported and leaves the surface as it was. A label
    /// line that fails to parse, or names an unknown class, is an error.
    pub fn display(&self, surface: &mut dyn Surface) -> Result<Displayed> {
        let image_id = self.current_image_id();
        let Some(image) = load_image(&self.dataset.folder, image_id) else {
            log::warn!("Image {image_id} not found.");
            return Ok(Displayed::ImageMissing);
        };

        let overlays = self.overlays_for(image_id, image.width(), image.height())?;
        surface.draw(Frame {
            image_id: image_id.to_string(),
            position: self.state.index(),
            total: self.state.len(),
            image,
            overlays,
        });
        Ok(Displayed::Drawn)
    }

    fn overlays_for(&self, image_id: &str, width: u32, height: u32) -> Result<Vec<Overlay>> {
        let records = self.dataset.annotations.get(image_id).unwrap_or_default();
        let mut overlays = Vec::with_capacity(records.len());
        for record in records {
            let ann = Annotation::parse(image_id, record)?;
            let label = self
                .dataset
                .classes
                .name_for(image_id, record.line, ann.class_id)?;
            let color = self
                .colors
                .get(ann.class_id)
                .ok_or_else(|| LabelError::ClassIdOutOfRange {
                    image_id: image_id.to_string(),
                    line: record.line,
                    class_id: ann.class_id,
                    class_count: self.colors.len(),
                })?;
            let rect = ann.to_pixel_rect(width, height);
            overlays.push(Overlay {
                rect,
                label: label.to_string(),
                color: color.rgb,
                label_x: rect.x,
                label_y: rect.y - self.options.label_offset,
            });
        }
        Ok(overlays)
    }
}
