//! RGBA color values.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::StyleError;

/// An 8-bit RGBA color.
///
/// Colors used by the crate's own palettes are built with the `const`
/// constructors; [`Color::parse`] exists for external input such as
/// user-supplied theme files.
///
/// # Example
///
/// ```rust
/// use calmkit::style::Color;
///
/// let blue = Color::rgb(0x60, 0xA5, 0xFA);
/// assert_eq!(blue.to_string(), "#60A5FA");
///
/// let parsed: Color = "#60A5FA".parse().unwrap();
/// assert_eq!(parsed, blue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black, used for `backgroundColor: transparent`.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xFF }
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Parses a `#RRGGBB` or `#RRGGBBAA` hex string.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MalformedColor`] for any other shape.
    pub fn parse(value: &str) -> Result<Color, StyleError> {
        let malformed = || StyleError::MalformedColor {
            value: value.to_string(),
        };
        let hex = value.strip_prefix('#').ok_or_else(malformed)?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(malformed());
        }
        let byte = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(malformed)
        };
        Ok(Color {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
            a: if hex.len() == 8 { byte(6..8)? } else { 0xFF },
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
