//! RGBA color type and derivation helpers.
//!
//! Palettes derive most of their entries from a handful of base colors using
//! `lighten`/`darken`/`with_alpha`, so skins only have to name a few values.

use serde::{Deserialize, Serialize};

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

/// Interpolate a color toward white by `amount` (0.0 = unchanged, 1.0 = white).
pub fn lighten(c: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    let mix = |ch: u8| -> u8 { (ch as f32 + (255.0 - ch as f32) * amount).round() as u8 };
    Color::rgba(mix(c.r), mix(c.g), mix(c.b), c.a)
}

/// Scale a color's channels by `factor` (0.0 = black, 1.0 = unchanged).
pub fn darken(c: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    let mul = |ch: u8| -> u8 { (ch as f32 * factor).round() as u8 };
    Color::rgba(mul(c.r), mul(c.g), mul(c.b), c.a)
}

/// Replace a color's alpha channel.
pub fn with_alpha(c: Color, a: u8) -> Color {
    c.with_alpha(a)
}

/// Parse "#RRGGBB" or "#RRGGBBAA" into a `Color`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::rgb(r, g, b))
    } else if s.len() == 8 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        let a = u8::from_str_radix(&s[6..8], 16).ok()?;
        Some(Color::rgba(r, g, b, a))
    } else {
        None
    }
}
