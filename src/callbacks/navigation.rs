//! Navigation callbacks for image traversal.
//!
//! Handles: next and previous image, both wrapping around the carousel.

use crate::surface::SlintSurface;
use crate::ViewerWindow;
use label_validator::{Direction, Displayed, LabelError, Viewer};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Error raised inside a callback. The event loop is stopped and `main`
/// reports it after `run` returns.
pub type FatalSlot = Rc<RefCell<Option<LabelError>>>;

/// Sets up all navigation-related callbacks on the UI.
///
/// # Arguments
/// * `ui` - The ViewerWindow instance
/// * `viewer` - Shared carousel controller
/// * `surface` - Surface the controller draws on
/// * `fatal` - Where a callback parks an unrecoverable error
pub fn setup_navigation_callbacks(
    ui: &ViewerWindow,
    viewer: Rc<RefCell<Viewer>>,
    surface: Rc<RefCell<SlintSurface>>,
    fatal: FatalSlot,
) {
    setup_next_image(ui, viewer.clone(), surface.clone(), fatal.clone());
    setup_prev_image(ui, viewer, surface, fatal);
}

fn setup_next_image(
    ui: &ViewerWindow,
    viewer: Rc<RefCell<Viewer>>,
    surface: Rc<RefCell<SlintSurface>>,
    fatal: FatalSlot,
) {
    let ui_weak = ui.as_weak();
    ui.on_next_image(move || {
        let Some(ui) = ui_weak.upgrade() else { return };
        navigate(&ui, &viewer, &surface, &fatal, Direction::Next);
    });
}

fn setup_prev_image(
    ui: &ViewerWindow,
    viewer: Rc<RefCell<Viewer>>,
    surface: Rc<RefCell<SlintSurface>>,
    fatal: FatalSlot,
) {
    let ui_weak = ui.as_weak();
    ui.on_prev_image(move || {
        let Some(ui) = ui_weak.upgrade() else { return };
        navigate(&ui, &viewer, &surface, &fatal, Direction::Previous);
    });
}

fn navigate(
    ui: &ViewerWindow,
    viewer: &RefCell<Viewer>,
    surface: &RefCell<SlintSurface>,
    fatal: &FatalSlot,
    direction: Direction,
) {
    viewer.borrow_mut().navigate(direction);
    if let Err(e) = show_current(ui, &viewer.borrow(), &mut surface.borrow_mut()) {
        log::error!("{e}");
        *fatal.borrow_mut() = Some(e);
        if let Err(e) = slint::quit_event_loop() {
            log::error!("Failed to stop the event loop: {e}");
        }
    }
}

/// Display the viewer's current image. A missing image only updates the
/// status line; the previous frame stays on screen.
pub fn show_current(
    ui: &ViewerWindow,
    viewer: &Viewer,
    surface: &mut SlintSurface,
) -> Result<(), LabelError> {
    if viewer.display(surface)? == Displayed::ImageMissing {
        ui.set_status_text(
            format!(
                "Image {} not found. ({} / {})",
                viewer.current_image_id(),
                viewer.index() + 1,
                viewer.len()
            )
            .into(),
        );
    }
    Ok(())
}
