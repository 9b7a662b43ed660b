use std::fmt;
use std::str::FromStr;

use super::Color;

/// A tint string that is not one of the supported CSS color forms.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub message: String,
    /// The rejected input, verbatim.
    pub input: String,
}

impl ColorParseError {
    pub(crate) fn new(msg: impl Into<String>, input: &str) -> Self {
        Self { message: msg.into(), input: input.to_owned() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}

/// Parses the CSS color forms accepted for tints:
///
/// - `transparent`
/// - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
/// - `rgb(r, g, b)`, `rgba(r, g, b, a)` and `rgb(r g b / a)`
///
/// Channel values outside their range are clamped, as CSS does.
impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim().to_ascii_lowercase();

        if s == "transparent" {
            return Ok(Color::transparent());
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex, input);
        }
        let body = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .ok_or_else(|| ColorParseError::new("expected `transparent`, `#hex` or `rgb(...)`", input))?;
        let body = body
            .strip_suffix(')')
            .ok_or_else(|| ColorParseError::new("missing closing `)`", input))?;

        parse_rgb_function(body, input)
    }
}

fn parse_hex(hex: &str, input: &str) -> Result<Color, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::new("non-hex digit in color literal", input));
    }

    // Short forms repeat each digit: #abc == #aabbcc.
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);

    let channels = match hex.len() {
        3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
        4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
        6 => (byte(0), byte(2), byte(4), Ok(255)),
        8 => (byte(0), byte(2), byte(4), byte(6)),
        n => {
            return Err(ColorParseError::new(
                format!("hex color must have 3, 4, 6 or 8 digits, got {n}"),
                input,
            ));
        }
    };

    match channels {
        (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Color::from_srgb_u8(r, g, b, a)),
        _ => Err(ColorParseError::new("non-hex digit in color literal", input)),
    }
}

fn parse_rgb_function(body: &str, input: &str) -> Result<Color, ColorParseError> {
    // Modern syntax: `r g b / a`. Legacy syntax: `r, g, b[, a]`.
    let (rgb_part, alpha_part) = match body.split_once('/') {
        Some((rgb, alpha)) => (rgb, Some(alpha.trim())),
        None => (body, None),
    };

    let mut parts: Vec<&str> = if rgb_part.contains(',') {
        rgb_part.split(',').map(str::trim).collect()
    } else {
        rgb_part.split_whitespace().collect()
    };

    let alpha_part = match alpha_part {
        Some(a) => {
            if parts.len() != 3 {
                return Err(ColorParseError::new("expected 3 channels before `/`", input));
            }
            Some(a)
        }
        None if parts.len() == 4 => parts.pop(),
        None if parts.len() == 3 => None,
        None => {
            return Err(ColorParseError::new(
                format!("expected 3 or 4 components, got {}", parts.len()),
                input,
            ));
        }
    };

    let r = parse_channel(parts[0], input)?;
    let g = parse_channel(parts[1], input)?;
    let b = parse_channel(parts[2], input)?;
    let a = match alpha_part {
        Some(a) => parse_alpha(a, input)?,
        None => 1.0,
    };

    Ok(Color::from_straight(r, g, b, a))
}

/// `0`–`255` or a percentage, normalized to `[0, 1]`.
fn parse_channel(s: &str, input: &str) -> Result<f32, ColorParseError> {
    match s.strip_suffix('%') {
        Some(pct) => Ok(parse_number(pct, input)? / 100.0),
        None => Ok(parse_number(s, input)? / 255.0),
    }
}

/// `0`–`1` or a percentage.
fn parse_alpha(s: &str, input: &str) -> Result<f32, ColorParseError> {
    match s.strip_suffix('%') {
        Some(pct) => Ok(parse_number(pct, input)? / 100.0),
        None => parse_number(s, input),
    }
}

fn parse_number(s: &str, input: &str) -> Result<f32, ColorParseError> {
    match s.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ColorParseError::new(format!("`{s}` is not a number"), input)),
    }
}
