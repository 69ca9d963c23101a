//! Property-key constants for style fragments.
//!
//! Fragments are open maps, but every in-crate call site goes through these
//! constants so a key cannot be typo'd.

pub const ALIGN_ITEMS: &str = "alignItems";
pub const ALIGN_SELF: &str = "alignSelf";
pub const BACKGROUND_COLOR: &str = "backgroundColor";
pub const BORDER_COLOR: &str = "borderColor";
pub const BORDER_RADIUS: &str = "borderRadius";
pub const BORDER_WIDTH: &str = "borderWidth";
pub const COLOR: &str = "color";
pub const ELEVATION: &str = "elevation";
pub const FLEX: &str = "flex";
pub const FLEX_DIRECTION: &str = "flexDirection";
pub const FONT_SIZE: &str = "fontSize";
pub const FONT_WEIGHT: &str = "fontWeight";
pub const GAP: &str = "gap";
pub const HEIGHT: &str = "height";
pub const JUSTIFY_CONTENT: &str = "justifyContent";
pub const MARGIN_BOTTOM: &str = "marginBottom";
pub const MARGIN_TOP: &str = "marginTop";
pub const MAX_WIDTH: &str = "maxWidth";
pub const OPACITY: &str = "opacity";
pub const PADDING: &str = "padding";
pub const PADDING_HORIZONTAL: &str = "paddingHorizontal";
pub const PADDING_VERTICAL: &str = "paddingVertical";
pub const SHADOW_COLOR: &str = "shadowColor";
pub const SHADOW_OFFSET: &str = "shadowOffset";
pub const SHADOW_OPACITY: &str = "shadowOpacity";
pub const SHADOW_RADIUS: &str = "shadowRadius";
pub const TEXT_ALIGN: &str = "textAlign";
pub const TEXT_DECORATION_LINE: &str = "textDecorationLine";
pub const TRANSFORM: &str = "transform";
pub const WIDTH: &str = "width";
