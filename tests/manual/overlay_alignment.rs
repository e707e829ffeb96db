// Overlay alignment check
// Test: Boxes converted from normalized labels line up with image content
// Expected: Each outline hugs the solid square of the same color, labels sit
// just above the top-left corners, and the right-edge box runs off the image

slint::include_modules!();

use label_validator::{Annotation, LabelRecord};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 400;

// (label line, fill color, class name)
const SQUARES: [(&str, [u8; 3], &str); 3] = [
    ("0 0.25 0.25 0.125 0.2", [220, 40, 40], "red square"),
    ("1 0.5 0.625 0.25 0.25", [40, 180, 40], "green square"),
    ("2 0.75 0.3 0.1 0.3", [40, 80, 220], "blue square"),
];

fn main() -> Result<(), slint::PlatformError> {
    let ui = ViewerWindow::new()?;

    let mut image = image::RgbaImage::from_pixel(WIDTH, HEIGHT, image::Rgba([235, 235, 235, 255]));
    let mut boxes = Vec::new();
    for (line, (text, rgb, name)) in SQUARES.iter().enumerate() {
        let record = LabelRecord::parse_line(line + 1, text);
        let ann = Annotation::parse("alignment", &record).expect("fixture label parses");
        let rect = ann.to_pixel_rect(WIDTH, HEIGHT);
        for y in rect.y.max(0)..(rect.y + rect.height).min(HEIGHT as i64) {
            for x in rect.x.max(0)..(rect.x + rect.width).min(WIDTH as i64) {
                image.put_pixel(x as u32, y as u32, image::Rgba([rgb[0], rgb[1], rgb[2], 255]));
            }
        }
        boxes.push(overlay(&ann, name, *rgb));
    }

    // Off-image box: centered on the right edge, drawn unclamped.
    let record = LabelRecord::parse_line(4, "0 1.0 0.8 0.2 0.2");
    let ann = Annotation::parse("alignment", &record).expect("fixture label parses");
    boxes.push(overlay(&ann, "edge", [0, 0, 0]));

    let buffer = slint::SharedPixelBuffer::<slint::Rgba8Pixel>::clone_from_slice(
        image.as_raw(),
        WIDTH,
        HEIGHT,
    );
    ui.set_frame(slint::Image::from_rgba8(buffer));
    ui.set_image_width(WIDTH as f32);
    ui.set_image_height(HEIGHT as f32);
    ui.set_boxes(slint::ModelRc::new(slint::VecModel::from(boxes)));
    ui.set_status_text("Overlay alignment check".into());

    println!("=== Overlay alignment check ===");
    println!("Instructions:");
    println!("1. Verify each colored square is outlined by a box of the same color");
    println!("2. Resize the window and check the outlines stay on the squares");
    println!("3. Check each label sits just above its box's top-left corner");
    println!("4. The black 'edge' box should stick out past the right image border");
    println!("===============================");

    ui.run()
}

fn overlay(ann: &Annotation, name: &str, rgb: [u8; 3]) -> BoxOverlay {
    let rect = ann.to_pixel_rect(WIDTH, HEIGHT);
    BoxOverlay {
        x: rect.x as f32,
        y: rect.y as f32,
        width: rect.width as f32,
        height: rect.height as f32,
        label: name.into(),
        label_x: rect.x as f32,
        label_y: (rect.y - 5) as f32,
        color: slint::Color::from_rgb_u8(rgb[0], rgb[1], rgb[2]),
    }
}
