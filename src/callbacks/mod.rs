//! Callback handlers for the viewer window.
//!
//! - `navigation` - Image navigation (next/prev, wrapping)

pub mod navigation;
