// color.rs — Color types, name mapping, and color spec parsing
//
// The terminal palette is the classic 8-color ANSI set, each usable in one
// of three weights (light, normal, dark) that map to SGR rendition codes.
// Color specs appear in the XLS environment variable, e.g. "U=dark green".

use crate::ehm::AppError;

// ── Foreground colors (ANSI codes 30-37) ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black   = 30,
    Red     = 31,
    Green   = 32,
    Brown   = 33,
    Blue    = 34,
    Magenta = 35,
    Cyan    = 36,
    White   = 37,
}

// ── Rendition weights (ANSI SGR codes) ────────────────────────────────────────

/// Light = no extra rendition (SGR 0), Normal = bold (SGR 1), Dark = faint
/// (SGR 2).  The naming follows the emitted escape prefix order, not the
/// visual brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorStyle {
    Light  = 0,
    Normal = 1,
    Dark   = 2,
}

// ── Color spec: weight + color pair ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    pub color: Color,
    pub style: ColorStyle,
}

impl ColorSpec {
    pub const fn new(color: Color, style: ColorStyle) -> Self {
        ColorSpec { color, style }
    }
}

// ── Color name ↔ value mapping ────────────────────────────────────────────────

struct ColorMapping {
    name:  &'static str,
    color: Color,
}

static COLOR_MAP: &[ColorMapping] = &[
    ColorMapping { name: "Black",   color: Color::Black   },
    ColorMapping { name: "Red",     color: Color::Red     },
    ColorMapping { name: "Green",   color: Color::Green   },
    ColorMapping { name: "Brown",   color: Color::Brown   },
    ColorMapping { name: "Blue",    color: Color::Blue    },
    ColorMapping { name: "Magenta", color: Color::Magenta },
    ColorMapping { name: "Cyan",    color: Color::Cyan    },
    ColorMapping { name: "White",   color: Color::White   },
];

/// Parse a single color name (case-insensitive) into its Color value.
pub fn parse_color_name(name: &str) -> Result<Color, AppError> {
    for mapping in COLOR_MAP {
        if mapping.name.eq_ignore_ascii_case(name) {
            return Ok(mapping.color);
        }
    }
    Err(AppError::InvalidArg(format!("Invalid color name: {}", name)))
}

/// Get the display name for a Color value.
pub fn color_name(color: Color) -> &'static str {
    for mapping in COLOR_MAP {
        if mapping.color == color {
            return mapping.name;
        }
    }
    unreachable!("every Color variant is in COLOR_MAP")
}

/// Parse a color specification string in the format: "[Weight] Color"
/// where Weight is one of "light", "normal", "dark" (default: light).
/// Case-insensitive.
///
/// Examples: "Green", "dark green", "Normal Red"
pub fn parse_color_spec(spec: &str) -> Result<ColorSpec, AppError> {
    let mut parts = spec.split_whitespace();

    let first = parts
        .next()
        .ok_or_else(|| AppError::InvalidArg("Empty color spec".into()))?;

    let (style, color_str) = match parts.next() {
        Some(second) => {
            let style = if first.eq_ignore_ascii_case("light") {
                ColorStyle::Light
            } else if first.eq_ignore_ascii_case("normal") {
                ColorStyle::Normal
            } else if first.eq_ignore_ascii_case("dark") {
                ColorStyle::Dark
            } else {
                return Err(AppError::InvalidArg(format!(
                    "Invalid color weight: {}",
                    first
                )));
            };
            (style, second)
        }
        None => (ColorStyle::Light, first),
    };

    if parts.next().is_some() {
        return Err(AppError::InvalidArg(format!("Invalid color spec: {}", spec)));
    }

    Ok(ColorSpec::new(parse_color_name(color_str)?, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_names() {
        assert_eq!(parse_color_name("Black").unwrap(), Color::Black);
        assert_eq!(parse_color_name("Brown").unwrap(), Color::Brown);
        assert_eq!(parse_color_name("White").unwrap(), Color::White);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(parse_color_name("cyan").unwrap(), Color::Cyan);
        assert_eq!(parse_color_name("CYAN").unwrap(), Color::Cyan);
        assert_eq!(parse_color_name("MaGenta").unwrap(), Color::Magenta);
    }

    #[test]
    fn parse_invalid_color() {
        assert!(parse_color_name("Chartreuse").is_err());
        assert!(parse_color_name("").is_err());
    }

    #[test]
    fn parse_spec_color_only_defaults_to_light() {
        let spec = parse_color_spec("Green").unwrap();
        assert_eq!(spec.color, Color::Green);
        assert_eq!(spec.style, ColorStyle::Light);
    }

    #[test]
    fn parse_spec_weight_and_color() {
        let spec = parse_color_spec("dark green").unwrap();
        assert_eq!(spec.color, Color::Green);
        assert_eq!(spec.style, ColorStyle::Dark);

        let spec = parse_color_spec("Normal Red").unwrap();
        assert_eq!(spec.color, Color::Red);
        assert_eq!(spec.style, ColorStyle::Normal);
    }

    #[test]
    fn parse_spec_rejects_garbage() {
        assert!(parse_color_spec("").is_err());
        assert!(parse_color_spec("bright green").is_err());
        assert!(parse_color_spec("dark green extra").is_err());
    }

    #[test]
    fn color_name_roundtrip() {
        assert_eq!(color_name(Color::Brown), "Brown");
        assert_eq!(color_name(Color::Black), "Black");
        assert_eq!(color_name(Color::White), "White");
    }

    #[test]
    fn ansi_codes_match_escape_values() {
        assert_eq!(Color::Black as u8, 30);
        assert_eq!(Color::White as u8, 37);
        assert_eq!(ColorStyle::Light as u8, 0);
        assert_eq!(ColorStyle::Normal as u8, 1);
        assert_eq!(ColorStyle::Dark as u8, 2);
    }
}
