//! Normalized YOLO box to pixel rectangle conversion.

use crate::error::{LabelError, Result};
use crate::state::LabelRecord;

/// A parsed YOLO label line. Coordinates are normalized to the image size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    pub class_id: usize,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle in image pixels, top-left origin, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

const FIELD_NAMES: [&str; 5] = ["class_id", "x_center", "y_center", "width", "height"];

impl Annotation {
    /// Parse a raw record from `<image_id>.txt`.
    pub fn parse(image_id: &str, record: &LabelRecord) -> Result<Self> {
        if record.tokens.len() != FIELD_NAMES.len() {
            return Err(LabelError::WrongTokenCount {
                image_id: image_id.to_string(),
                line: record.line,
                found: record.tokens.len(),
            });
        }

        let class_id = parse_class_id(image_id, record)?;
        let coord = |idx: usize| -> Result<f64> {
            let token = &record.tokens[idx];
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| LabelError::InvalidNumber {
                    image_id: image_id.to_string(),
                    line: record.line,
                    field: FIELD_NAMES[idx],
                    token: token.clone(),
                })
        };

        Ok(Self {
            class_id,
            x_center: coord(1)?,
            y_center: coord(2)?,
            width: coord(3)?,
            height: coord(4)?,
        })
    }

    /// Convert to pixel space for a `image_width` x `image_height` image.
    ///
    /// Each term is rounded half away from zero. Boxes are not clamped to the
    /// image, so boxes reaching past an edge keep their true extent.
    pub fn to_pixel_rect(&self, image_width: u32, image_height: u32) -> PixelRect {
        let w = f64::from(image_width);
        let h = f64::from(image_height);
        PixelRect {
            x: ((self.x_center - self.width / 2.0) * w).round() as i64,
            y: ((self.y_center - self.height / 2.0) * h).round() as i64,
            width: (self.width * w).round() as i64,
            height: (self.height * h).round() as i64,
        }
    }
}

/// Parse only the class id field of a record. Other fields are left alone.
pub fn parse_class_id(image_id: &str, record: &LabelRecord) -> Result<usize> {
    let Some(token) = record.tokens.first() else {
        return Err(LabelError::WrongTokenCount {
            image_id: image_id.to_string(),
            line: record.line,
            found: 0,
        });
    };
    token.parse::<usize>().map_err(|_| LabelError::InvalidNumber {
        image_id: image_id.to_string(),
        line: record.line,
        field: FIELD_NAMES[0],
        token: token.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> LabelRecord {
        LabelRecord::parse_line(1, text)
    }

    fn ann(x_center: f64, y_center: f64, width: f64, height: f64) -> Annotation {
        Annotation {
            class_id: 0,
            x_center,
            y_center,
            width,
            height,
        }
    }

    #[test]
    fn centered_box_on_square_image() {
        let a = Annotation::parse("img1", &record("0 0.5 0.5 0.2 0.2")).unwrap();
        assert_eq!(a.class_id, 0);
        assert_eq!(
            a.to_pixel_rect(100, 100),
            PixelRect {
                x: 40,
                y: 40,
                width: 20,
                height: 20
            }
        );
    }

    #[test]
    fn non_square_image_scales_axes_independently() {
        let rect = ann(0.25, 0.5, 0.5, 0.5).to_pixel_rect(640, 480);
        assert_eq!(
            rect,
            PixelRect {
                x: 0,
                y: 120,
                width: 320,
                height: 240
            }
        );
    }

    #[test]
    fn boxes_past_the_edge_are_not_clamped() {
        let rect = ann(0.0, 1.0, 0.4, 0.4).to_pixel_rect(100, 50);
        assert_eq!(rect.x, -20);
        assert_eq!(rect.y, 40);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 20);
    }

    #[test]
    fn right_and_top_edges_within_one_pixel() {
        let sizes = [(1u32, 1u32), (37, 91), (640, 480), (1919, 1081)];
        let steps = [0.0, 0.013, 0.25, 0.333, 0.5, 0.777, 1.0];
        for &(w, h) in &sizes {
            for &xc in &steps {
                for &yc in &steps {
                    for &bw in &steps {
                        for &bh in &steps {
                            let rect = ann(xc, yc, bw, bh).to_pixel_rect(w, h);
                            let right = (xc + bw / 2.0) * f64::from(w);
                            let top = (yc - bh / 2.0) * f64::from(h);
                            assert!(((rect.x + rect.width) as f64 - right).abs() <= 1.0 + 1e-9);
                            assert!((rect.y as f64 - top).abs() <= 0.5 + 1e-9);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn wrong_token_count_is_rejected() {
        let err = Annotation::parse("a", &record("0 0.5 0.5 0.2")).unwrap_err();
        assert!(matches!(err, LabelError::WrongTokenCount { found: 4, .. }));
        let err = Annotation::parse("a", &record("0 0.5 0.5 0.2 0.2 0.9")).unwrap_err();
        assert!(matches!(err, LabelError::WrongTokenCount { found: 6, .. }));
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        let err = Annotation::parse("a", &record("0 0.5 x 0.2 0.2")).unwrap_err();
        assert!(matches!(
            err,
            LabelError::InvalidNumber {
                field: "y_center",
                ..
            }
        ));
        let err = Annotation::parse("a", &record("cat 0.5 0.5 0.2 0.2")).unwrap_err();
        assert!(matches!(
            err,
            LabelError::InvalidNumber {
                field: "class_id",
                ..
            }
        ));
        let err = Annotation::parse("a", &record("0 nan 0.5 0.2 0.2")).unwrap_err();
        assert!(matches!(err, LabelError::InvalidNumber { .. }));
    }

    #[test]
    fn class_id_parses_without_touching_coordinates() {
        let r = record("3 not numbers at all");
        assert_eq!(parse_class_id("a", &r).unwrap(), 3);
    }
}
