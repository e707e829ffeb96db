//! Slint-backed drawing surface for the viewer.

use label_validator::{Frame, Surface};
use slint::ComponentHandle;

use crate::utils::{to_slint_color, to_slint_image};
use crate::{BoxOverlay, ViewerWindow};

pub struct SlintSurface {
    ui: slint::Weak<ViewerWindow>,
}

impl SlintSurface {
    pub fn new(ui: &ViewerWindow) -> Self {
        Self { ui: ui.as_weak() }
    }
}

impl Surface for SlintSurface {
    fn draw(&mut self, frame: Frame) {
        let Some(ui) = self.ui.upgrade() else {
            return;
        };

        let boxes: Vec<BoxOverlay> = frame
            .overlays
            .iter()
            .map(|o| BoxOverlay {
                x: o.rect.x as f32,
                y: o.rect.y as f32,
                width: o.rect.width as f32,
                height: o.rect.height as f32,
                label: o.label.clone().into(),
                label_x: o.label_x as f32,
                label_y: o.label_y as f32,
                color: to_slint_color(o.color),
            })
            .collect();

        // The whole overlay model is swapped so no box from the previous
        // frame survives.
        ui.set_frame(to_slint_image(&frame.image));
        ui.set_image_width(frame.image.width() as f32);
        ui.set_image_height(frame.image.height() as f32);
        ui.set_boxes(slint::ModelRc::new(slint::VecModel::from(boxes)));
        ui.set_status_text(frame.caption().into());
        ui.window().request_redraw();
    }
}
