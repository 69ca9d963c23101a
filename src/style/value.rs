//! Values a style property can take.

use serde::Serialize;

use super::color::Color;

/// One entry of a transform list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    Scale(f32),
    TranslateX(f32),
    TranslateY(f32),
}

/// A value stored under a property key in a [`StyleFragment`].
///
/// The `From` conversions let fluent `set` calls take plain literals:
///
/// ```rust
/// use calmkit::style::{keys, Color, StyleFragment};
///
/// let fragment = StyleFragment::new()
///     .set(keys::BACKGROUND_COLOR, Color::rgb(0x60, 0xA5, 0xFA))
///     .set(keys::BORDER_RADIUS, 12.0)
///     .set(keys::FONT_WEIGHT, "700");
/// assert_eq!(fragment.len(), 3);
/// ```
///
/// [`StyleFragment`]: super::StyleFragment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Dimensionless or pixel number.
    Number(f32),
    /// Keyword-like text value, e.g. a font weight or `"row"`.
    Text(&'static str),
    /// A color value.
    Color(Color),
    /// A shadow offset in pixels.
    Offset { width: f32, height: f32 },
    /// A transform list applied in order.
    Transforms(Vec<Transform>),
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value)
    }
}

impl From<&'static str> for StyleValue {
    fn from(value: &'static str) -> Self {
        StyleValue::Text(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Color(value)
    }
}

impl From<Vec<Transform>> for StyleValue {
    fn from(value: Vec<Transform>) -> Self {
        StyleValue::Transforms(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(StyleValue::from(12.0), StyleValue::Number(12.0));
    }

    #[test]
    fn test_from_text() {
        assert_eq!(StyleValue::from("row"), StyleValue::Text("row"));
    }

    #[test]
    fn test_from_color() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(StyleValue::from(c), StyleValue::Color(c));
    }

    #[test]
    fn test_transform_serializes_tagged() {
        let json = serde_json::to_string(&Transform::Scale(0.98)).unwrap();
        assert_eq!(json, r#"{"scale":0.98}"#);
    }
}
