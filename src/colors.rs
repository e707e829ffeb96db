//! Color tokens and the per-class color assignment.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use crate::classes::ClassList;
use crate::error::{LabelError, Result};
use crate::prompt::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// Single-letter codes use matplotlib's values.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("b", Rgb::new(0, 0, 255)),
    ("g", Rgb::new(0, 128, 0)),
    ("r", Rgb::new(255, 0, 0)),
    ("c", Rgb::new(0, 191, 191)),
    ("m", Rgb::new(191, 0, 191)),
    ("y", Rgb::new(191, 191, 0)),
    ("k", Rgb::new(0, 0, 0)),
    ("w", Rgb::new(255, 255, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("navy", Rgb::new(0, 0, 128)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("pink", Rgb::new(255, 192, 203)),
    ("brown", Rgb::new(165, 42, 42)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("gold", Rgb::new(255, 215, 0)),
    ("olive", Rgb::new(128, 128, 0)),
    ("teal", Rgb::new(0, 128, 128)),
    ("skyblue", Rgb::new(135, 206, 235)),
];

/// Parse a color token: a single-letter code, a color name or `#rrggbb`.
pub fn parse_color(token: &str) -> Option<Rgb> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Rgb::new(r, g, b));
    }

    // Single letters are case-sensitive like matplotlib; names are not.
    let lookup = if token.len() == 1 {
        token.to_string()
    } else {
        token.to_ascii_lowercase()
    };
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lookup)
        .map(|(_, rgb)| *rgb)
}

/// The token a class's color was given as, with its resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassColor {
    pub token: String,
    pub rgb: Rgb,
}

impl ClassColor {
    pub fn parse(token: &str) -> Result<Self> {
        let rgb = parse_color(token).ok_or_else(|| LabelError::UnknownColor {
            token: token.to_string(),
        })?;
        Ok(Self {
            token: token.trim().to_string(),
            rgb,
        })
    }
}

/// One color per class id, fixed for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    colors: Vec<ClassColor>,
}

impl ColorAssignment {
    pub fn get(&self, class_id: usize) -> Option<&ClassColor> {
        self.colors.get(class_id)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Build the assignment for `classes`.
    ///
    /// Colors listed in `configured` (class name -> token) are used directly
    /// and must be valid. Every other class is asked for through `prompter`,
    /// in class order, repeating the question until a valid token is entered.
    pub fn resolve<R: BufRead, W: Write>(
        classes: &ClassList,
        configured: &BTreeMap<String, String>,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Self> {
        let mut colors = Vec::with_capacity(classes.len());
        for (_, name) in classes.iter() {
            if let Some(token) = configured.get(name) {
                log::debug!("Using configured color '{token}' for {name}");
                colors.push(ClassColor::parse(token)?);
                continue;
            }

            let color = loop {
                let answer =
                    prompter.ask(&format!("Enter the color for {name} (e.g., 'r', 'g', 'b'): "))?;
                match ClassColor::parse(&answer) {
                    Ok(color) => break color,
                    Err(e) => log::warn!("{e}; try a letter code, a color name or #rrggbb"),
                }
            };
            colors.push(color);
        }
        Ok(Self { colors })
    }
}

impl FromIterator<ClassColor> for ColorAssignment {
    fn from_iter<I: IntoIterator<Item = ClassColor>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn classes(names: &[&str]) -> ClassList {
        ClassList::new(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn letter_codes_names_and_hex() {
        assert_eq!(parse_color("r"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(parse_color("g"), Some(Rgb::new(0, 128, 0)));
        assert_eq!(parse_color("SkyBlue"), Some(Rgb::new(135, 206, 235)));
        assert_eq!(parse_color("#0a0B0c"), Some(Rgb::new(10, 11, 12)));
        assert_eq!(parse_color(" blue "), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(parse_color("R"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gg0000"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn prompts_in_class_order_and_retries_bad_tokens() {
        let input = Cursor::new("r\nnot-a-color\nb\n");
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);
        let colors =
            ColorAssignment::resolve(&classes(&["cat", "dog"]), &BTreeMap::new(), &mut prompter)
                .unwrap();

        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get(0).unwrap().token, "r");
        assert_eq!(colors.get(1).unwrap().rgb, Rgb::new(0, 0, 255));

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.starts_with("Enter the color for cat (e.g., 'r', 'g', 'b'): "));
        assert_eq!(transcript.matches("Enter the color for dog").count(), 2);
    }

    #[test]
    fn configured_colors_skip_the_prompt() {
        let configured = BTreeMap::from([("dog".to_string(), "#00ff00".to_string())]);
        let input = Cursor::new("m\n");
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input, &mut output);
        let colors =
            ColorAssignment::resolve(&classes(&["cat", "dog"]), &configured, &mut prompter).unwrap();

        assert_eq!(colors.get(0).unwrap().token, "m");
        assert_eq!(colors.get(1).unwrap().rgb, Rgb::new(0, 255, 0));
        let transcript = String::from_utf8(output).unwrap();
        assert!(!transcript.contains("dog"));
    }

    #[test]
    fn invalid_configured_color_is_an_error() {
        let configured = BTreeMap::from([("cat".to_string(), "plaid".to_string())]);
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let err = ColorAssignment::resolve(&classes(&["cat"]), &configured, &mut prompter).unwrap_err();
        assert!(matches!(err, LabelError::UnknownColor { .. }));
    }

    #[test]
    fn closed_input_stops_the_prompt() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let err =
            ColorAssignment::resolve(&classes(&["cat"]), &BTreeMap::new(), &mut prompter).unwrap_err();
        assert!(matches!(err, LabelError::PromptClosed));
    }
}
