//! Semantic color palette shared by every style factory.
//!
//! Names are semantic (what a color is for), not descriptive, so components
//! never hard-code raw values.

use crate::style::Color;

pub const PRIMARY: Color = Color::rgb(0x60, 0xA5, 0xFA);
pub const PRIMARY_FOREGROUND: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const PRIMARY_GLOW: Color = Color::rgb(0x93, 0xC5, 0xFD);

pub const CALM_BLUE: Color = Color::rgb(0x60, 0xA5, 0xFA);
pub const SOFT_GREEN: Color = Color::rgb(0x34, 0xD3, 0x99);
pub const GENTLE_PURPLE: Color = Color::rgb(0xA7, 0x8B, 0xFA);
pub const WARM_YELLOW: Color = Color::rgb(0xFD, 0xE0, 0x47);

pub const GRAPH_1: Color = Color::rgb(0xFF, 0x63, 0x84);
pub const GRAPH_2: Color = Color::rgb(0x36, 0xA2, 0xEB);
pub const GRAPH_3: Color = Color::rgb(0xFF, 0xCE, 0x56);
pub const LEGEND: Color = Color::rgb(0x7F, 0x7F, 0x7F);

pub const DESTRUCTIVE: Color = Color::rgb(0xEF, 0x44, 0x44);
pub const DESTRUCTIVE_FOREGROUND: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const SECONDARY: Color = Color::rgb(0xE2, 0xE8, 0xF0);
pub const SECONDARY_FOREGROUND: Color = Color::rgb(0x1E, 0x29, 0x3B);

pub const BACKGROUND: Color = Color::rgb(0xF8, 0xFA, 0xFC);
pub const FOREGROUND: Color = Color::rgb(0x1E, 0x29, 0x3B);
pub const CARD: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const CARD_FOREGROUND: Color = Color::rgb(0x1E, 0x29, 0x3B);
pub const MUTED: Color = Color::rgb(0xF1, 0xF5, 0xF9);
pub const MUTED_FOREGROUND: Color = Color::rgb(0x64, 0x74, 0x8B);
pub const SECONDARY_MUTED_FOREGROUND: Color = Color::rgb(0x94, 0xA3, 0xB8);
pub const TEXT: Color = Color::rgb(0x1E, 0x29, 0x3B);
// rgba(0, 0, 0, 0.1)
pub const SHADOW: Color = Color::rgba(0x00, 0x00, 0x00, 0x1A);

pub const OUTLINE_BORDER: Color = Color::rgb(0xE2, 0xE8, 0xF0);
pub const LINK_TEXT: Color = Color::rgb(0x3B, 0x82, 0xF6);
pub const SUBTLE_BACKGROUND: Color = Color::rgb(0xF8, 0xFA, 0xFC);

pub const DEACTIVATED: Color = Color::rgb(0x94, 0xA3, 0xB8);

/// Two-stop gradients for hero surfaces.
pub mod gradient {
    use super::Color;

    pub const PRIMARY: [Color; 2] = [Color::rgb(0x3B, 0x82, 0xF6), Color::rgb(0x60, 0xA5, 0xFA)];
    pub const CALM: [Color; 2] = [Color::rgb(0x60, 0xA5, 0xFA), Color::rgb(0x34, 0xD3, 0x99)];
    pub const BACKGROUND: [Color; 2] =
        [Color::rgb(0xF8, 0xFA, 0xFC), Color::rgb(0xE2, 0xE8, 0xF0)];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex_values() {
        assert_eq!(PRIMARY.to_string(), "#60A5FA");
        assert_eq!(GENTLE_PURPLE.to_string(), "#A78BFA");
        assert_eq!(SHADOW.to_string(), "#0000001A");
    }

    #[test]
    fn test_gradients_start_and_end() {
        assert_eq!(gradient::CALM[0], CALM_BLUE);
        assert_eq!(gradient::CALM[1], SOFT_GREEN);
    }
}
