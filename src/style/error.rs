//! Style parsing errors.

/// Error returned when parsing external style input fails.
///
/// All in-crate style data is constructed from typed constants, so these
/// errors only appear at the string boundary (`Pct::from_str`,
/// `Color::parse`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A percentage token was not of the form `"<number>%"`.
    MalformedToken { token: String },
    /// A color string was not a `#RRGGBB` or `#RRGGBBAA` hex value.
    MalformedColor { value: String },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::MalformedToken { token } => {
                write!(f, "malformed percentage token '{}'", token)
            }
            StyleError::MalformedColor { value } => {
                write!(f, "malformed hex color '{}'", value)
            }
        }
    }
}

impl std::error::Error for StyleError {}
