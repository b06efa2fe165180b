//! Hex / RGB color conversion

use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ColorInfo {
    pub(crate) hex: String,
    pub(crate) rgb: String,
    pub(crate) channels: Rgb,
}

impl Rgb {
    pub(crate) fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub(crate) fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn parse_hex(digits: &str) -> Option<Rgb> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

fn parse_triplet(body: &str) -> Option<Rgb> {
    let parts: Vec<u8> = body
        .split(',')
        .map(|p| p.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [r, g, b] => Some(Rgb {
            r: *r,
            g: *g,
            b: *b,
        }),
        _ => None,
    }
}

/// Accepts `#RRGGBB`, `RRGGBB`, `#RGB`, `rgb(r, g, b)` and `r,g,b`
pub(crate) fn parse(input: &str) -> Result<Rgb, AppError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    let parsed = if let Some(body) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        parse_triplet(body)
    } else if lower.contains(',') {
        parse_triplet(&lower)
    } else {
        parse_hex(lower.strip_prefix('#').unwrap_or(&lower))
    };
    parsed.ok_or_else(|| AppError::InvalidColor {
        input: trimmed.to_string(),
    })
}

pub(crate) fn describe(input: &str) -> Result<ColorInfo, AppError> {
    let rgb = parse(input)?;
    Ok(ColorInfo {
        hex: rgb.to_hex(),
        rgb: rgb.to_css(),
        channels: rgb,
    })
}
