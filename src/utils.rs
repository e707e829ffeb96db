//! Conversions between library types and Slint types.

use label_validator::Rgb;
use slint::{Rgba8Pixel, SharedPixelBuffer};

/// Checkerboard shown until the first image is drawn.
pub fn placeholder_image() -> slint::Image {
    let width = 64u32;
    let height = 64u32;
    let mut buffer = SharedPixelBuffer::<Rgba8Pixel>::new(width, height);
    let data = buffer.make_mut_bytes();
    for y in 0..height {
        for x in 0..width {
            let v = if (x / 8 + y / 8) % 2 == 0 { 60 } else { 110 };
            let i = ((y * width + x) * 4) as usize;
            data[i] = v;
            data[i + 1] = v;
            data[i + 2] = v;
            data[i + 3] = 255;
        }
    }
    slint::Image::from_rgba8(buffer)
}

pub fn to_slint_color(rgb: Rgb) -> slint::Color {
    slint::Color::from_rgb_u8(rgb.r, rgb.g, rgb.b)
}

pub fn to_slint_image(image: &image::RgbaImage) -> slint::Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        image.as_raw(),
        image.width(),
        image.height(),
    );
    slint::Image::from_rgba8(buffer)
}
