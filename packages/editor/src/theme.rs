//! # Theme palette values
//!
//! Data side of the palette editor. Every setter returns a complete theme
//! value: the previous value shallow-merged with its `palette`, with exactly
//! one slot changed. Callers never merge partial patches themselves.

use crate::errors::EditorError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Theme options as the application stores them
pub type ThemeOptions = Map<String, Value>;

/// Text color used on light backgrounds
pub const DARK_TEXT: &str = "rgba(0, 0, 0, 0.87)";

/// Text color used on dark backgrounds
pub const LIGHT_TEXT: &str = "#fff";

/// Minimum contrast ratio against white before switching to dark text
pub const CONTRAST_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteIntent {
    Primary,
    Secondary,
}

impl PaletteIntent {
    pub fn key(&self) -> &'static str {
        match self {
            PaletteIntent::Primary => "primary",
            PaletteIntent::Secondary => "secondary",
        }
    }

    /// Main color shown when the theme does not set one
    pub fn default_main(&self) -> &'static str {
        match self {
            PaletteIntent::Primary => "#2196f3",
            PaletteIntent::Secondary => "#f50057",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    Light,
    Dark,
}

impl PaletteMode {
    pub fn key(&self) -> &'static str {
        match self {
            PaletteMode::Light => "light",
            PaletteMode::Dark => "dark",
        }
    }
}

fn palette(value: Option<&ThemeOptions>) -> Option<&Map<String, Value>> {
    value?.get("palette")?.as_object()
}

/// Current main color of `intent`, or its default
pub fn palette_color(value: Option<&ThemeOptions>, intent: PaletteIntent) -> String {
    palette(value)
        .and_then(|p| p.get(intent.key()))
        .and_then(|slot| slot.get("main"))
        .and_then(Value::as_str)
        .filter(|main| !main.is_empty())
        .unwrap_or(intent.default_main())
        .to_string()
}

pub fn palette_mode(value: Option<&ThemeOptions>) -> Option<PaletteMode> {
    palette(value)
        .and_then(|p| p.get("mode"))
        .and_then(|mode| serde_json::from_value(mode.clone()).ok())
}

/// Set the main color of one intent, with a matching contrast text
pub fn with_palette_color(
    value: Option<&ThemeOptions>,
    intent: PaletteIntent,
    main: &str,
) -> Result<ThemeOptions, EditorError> {
    let contrast = contrast_text(main)?;
    Ok(with_palette_slot(
        value,
        intent.key(),
        json!({ "main": main, "contrastText": contrast }),
    ))
}

pub fn with_palette_mode(value: Option<&ThemeOptions>, mode: PaletteMode) -> ThemeOptions {
    with_palette_slot(value, "mode", Value::from(mode.key()))
}

fn with_palette_slot(value: Option<&ThemeOptions>, slot: &str, slot_value: Value) -> ThemeOptions {
    let mut theme = value.cloned().unwrap_or_default();
    let mut palette = palette(value).cloned().unwrap_or_default();
    palette.insert(slot.to_string(), slot_value);
    theme.insert("palette".to_string(), Value::Object(palette));
    theme
}

/// Pick readable text for `background`
pub fn contrast_text(background: &str) -> Result<&'static str, EditorError> {
    let rgb = parse_color(background)?;
    if contrast_ratio(luminance(rgb), 1.0) >= CONTRAST_THRESHOLD {
        Ok(LIGHT_TEXT)
    } else {
        Ok(DARK_TEXT)
    }
}

/// Relative luminance, rounded to three decimals
fn luminance([r, g, b]: [u8; 3]) -> f64 {
    let channel = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    let l = 0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b);
    (l * 1000.0).round() / 1000.0
}

fn contrast_ratio(a: f64, b: f64) -> f64 {
    (a.max(b) + 0.05) / (a.min(b) + 0.05)
}

/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)`. Alpha is validated but does not affect contrast.
fn parse_color(color: &str) -> Result<[u8; 3], EditorError> {
    let invalid = || EditorError::InvalidColor(color.to_string());
    let color = color.trim();

    if let Some(hex) = color.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return Err(invalid()),
        };
        let channel = |i: usize| {
            expanded
                .get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(invalid)
        };
        return Ok([channel(0)?, channel(2)?, channel(4)?]);
    }

    let (args, arity) = if let Some(rest) = color.strip_prefix("rgba(") {
        (rest, 4)
    } else if let Some(rest) = color.strip_prefix("rgb(") {
        (rest, 3)
    } else {
        return Err(invalid());
    };
    let args = args.strip_suffix(')').ok_or_else(invalid)?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != arity {
        return Err(invalid());
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = part.parse().map_err(|_| invalid())?;
    }

    if let Some(alpha) = parts.get(3) {
        let alpha: f64 = alpha.parse().map_err(|_| invalid())?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid());
        }
    }
    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(value: Value) -> ThemeOptions {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text("#2196f3").unwrap(), LIGHT_TEXT);
        assert_eq!(contrast_text("#f50057").unwrap(), LIGHT_TEXT);
        assert_eq!(contrast_text("#000").unwrap(), LIGHT_TEXT);
        assert_eq!(contrast_text("#fff").unwrap(), DARK_TEXT);
        assert_eq!(contrast_text("#ffeb3b").unwrap(), DARK_TEXT);
        assert_eq!(contrast_text("rgb(255, 255, 255)").unwrap(), DARK_TEXT);
        assert_eq!(contrast_text("rgba(0, 0, 0, 0.5)").unwrap(), LIGHT_TEXT);
    }

    #[test]
    fn test_hex_with_alpha() {
        assert_eq!(contrast_text("#fff8").unwrap(), DARK_TEXT);
        assert_eq!(contrast_text("#2196f380").unwrap(), LIGHT_TEXT);
        assert_eq!(parse_color("#2196f380").unwrap(), parse_color("#2196f3").unwrap());
        assert_eq!(parse_color("#abcd").unwrap(), [0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn test_invalid_colors() {
        for color in [
            "",
            "red",
            "#12",
            "#gggggg",
            "#+1+1+1",
            "#12345",
            "rgb(1, 2)",
            "rgb(300, 0, 0)",
            "rgb(+1, 0, 0)",
            "rgba(0, 0, 0)",
            "rgba(0,0,0,junk)",
            "rgba(0, 0, 0, 2)",
        ] {
            assert_eq!(
                contrast_text(color),
                Err(EditorError::InvalidColor(color.to_string())),
                "{}",
                color
            );
        }
    }

    #[test]
    fn test_palette_color_defaults() {
        assert_eq!(palette_color(None, PaletteIntent::Primary), "#2196f3");
        assert_eq!(palette_color(None, PaletteIntent::Secondary), "#f50057");

        let value = theme(json!({ "palette": { "primary": { "main": "#123456" } } }));
        assert_eq!(palette_color(Some(&value), PaletteIntent::Primary), "#123456");
        assert_eq!(palette_color(Some(&value), PaletteIntent::Secondary), "#f50057");
    }

    #[test]
    fn test_set_color_merges_shallowly() {
        let value = theme(json!({
            "typography": { "fontSize": 14 },
            "palette": {
                "mode": "dark",
                "primary": { "main": "#111111", "light": "#222222" },
                "secondary": { "main": "#333333" }
            }
        }));

        let next = with_palette_color(Some(&value), PaletteIntent::Primary, "#ffeb3b").unwrap();

        assert_eq!(
            Value::Object(next),
            json!({
                "typography": { "fontSize": 14 },
                "palette": {
                    "mode": "dark",
                    "primary": { "main": "#ffeb3b", "contrastText": DARK_TEXT },
                    "secondary": { "main": "#333333" }
                }
            })
        );
    }

    #[test]
    fn test_set_color_from_empty_value() {
        let next = with_palette_color(None, PaletteIntent::Secondary, "#f50057").unwrap();

        assert_eq!(
            Value::Object(next),
            json!({ "palette": { "secondary": { "main": "#f50057", "contrastText": "#fff" } } })
        );
    }

    #[test]
    fn test_set_mode() {
        let value = theme(json!({ "palette": { "primary": { "main": "#000" } } }));
        let next = with_palette_mode(Some(&value), PaletteMode::Dark);

        assert_eq!(palette_mode(Some(&next)), Some(PaletteMode::Dark));
        assert_eq!(palette_color(Some(&next), PaletteIntent::Primary), "#000");
        assert_eq!(palette_mode(Some(&value)), None);
    }

    #[test]
    fn test_invalid_color_leaves_value_untouched() {
        let value = theme(json!({ "palette": { "mode": "light" } }));
        assert!(with_palette_color(Some(&value), PaletteIntent::Primary, "nope").is_err());
        assert_eq!(palette_mode(Some(&value)), Some(PaletteMode::Light));
    }
}
