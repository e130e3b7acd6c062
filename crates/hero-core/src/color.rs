//! 8-bit RGB colors and the linear interpolation used by the unify phase.

use crate::error::ConfigError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` color. The leading `#` is required.
    pub fn from_hex(value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColorFormat {
            value: value.to_string(),
        };
        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Build a color from wide integer channels, rejecting anything outside 0..=255.
    pub fn from_channels(r: i32, g: i32, b: i32) -> Result<Self, ConfigError> {
        let narrow = |c: i32| {
            u8::try_from(c).map_err(|_| ConfigError::InvalidColorFormat {
                value: format!("rgb({r}, {g}, {b})"),
            })
        };
        Ok(Self::new(narrow(r)?, narrow(g)?, narrow(b)?))
    }

    /// Lowercase `#rrggbb`, suitable for canvas fill/stroke styles.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Linear blend from `from` to `to`.
///
/// `t <= 0` (or NaN) yields `from` exactly and `t >= 1` yields `to` exactly;
/// in between each channel is `round(c1 + (c2 - c1) * t)`.
pub fn interpolate(from: Rgb, to: Rgb, t: f32) -> Rgb {
    if !(t > 0.0) {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    let lerp = |a: u8, b: u8| {
        let a = a as f32;
        (a + (b as f32 - a) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(lerp(from.r, to.r), lerp(from.g, to.g), lerp(from.b, to.b))
}
