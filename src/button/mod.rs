//! The Button component and its style factory.
//!
//! A button is configured with a fluent builder and rendered into a
//! [`Node::Touchable`]. Styling is fully resolved at render time from the
//! factory bundle; the layering order is fixed:
//!
//! container: base → variant → size → caller override
//! text:      base → variant → size
//!
//! Later layers win on key conflict.
//!
//! # Example
//!
//! ```rust
//! use calmkit::{Button, DeviceClass, Size, Variant};
//!
//! let node = Button::label("Começar")
//!     .variant(Variant::Game)
//!     .size(Size::Default)
//!     .render(DeviceClass::Phone);
//! ```

mod styles;

pub use styles::{
    button_states, button_variants, create_button_styles, shadow_default, ButtonStates,
    ButtonStyles, CommonStyles, PerSize, PerVariant, Size, SizeStyle, SizeTable, StateOverlay,
    Variant, VariantStyle,
};

use crate::render::{Node, PressedFeedback};
use crate::responsive::DeviceClass;
use crate::style::{compose, StyleFragment};

/// Content rendered inside a button.
///
/// A tagged union instead of runtime type inspection: labels get the
/// composed text style, elements are rendered unchanged (icon-only or
/// composite buttons).
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonContent {
    Label(String),
    Element(Node),
}

impl ButtonContent {
    pub fn label(text: impl Into<String>) -> Self {
        ButtonContent::Label(text.into())
    }

    pub fn element(node: Node) -> Self {
        ButtonContent::Element(node)
    }
}

/// Fluent button builder.
#[derive(Debug, Clone)]
pub struct Button {
    content: ButtonContent,
    variant: Variant,
    size: Size,
    style: StyleFragment,
    active_opacity: f32,
    disabled: bool,
}

impl Button {
    /// Creates a button with the given content and default props.
    pub fn new(content: ButtonContent) -> Self {
        Button {
            content,
            variant: Variant::Default,
            size: Size::Default,
            style: StyleFragment::new(),
            active_opacity: 0.8,
            disabled: false,
        }
    }

    /// Shorthand for a plain-label button.
    pub fn label(text: impl Into<String>) -> Self {
        Self::new(ButtonContent::label(text))
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Caller style override, layered last over the composed container.
    pub fn style(mut self, style: StyleFragment) -> Self {
        self.style = style;
        self
    }

    /// Opacity forwarded to the touch primitive while a touch is active.
    pub fn active_opacity(mut self, active_opacity: f32) -> Self {
        self.active_opacity = active_opacity;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Composes the container style for the current props.
    pub fn container_style(&self, styles: &ButtonStyles) -> StyleFragment {
        compose(&[
            &styles.base_container,
            &styles.variant(self.variant).container,
            &styles.size(self.size).container,
            &self.style,
        ])
    }

    /// Composes the text style for the current props.
    pub fn text_style(&self, styles: &ButtonStyles) -> StyleFragment {
        compose(&[
            &styles.base_text,
            &styles.variant(self.variant).text,
            &styles.size(self.size).text,
        ])
    }

    /// Renders against the ambient viewport signal.
    ///
    /// The bundle is rebuilt on every call; a device-rotation re-render picks
    /// up fresh values with no cached state.
    pub fn render(&self, class: DeviceClass) -> Node {
        self.render_with(&create_button_styles(class))
    }

    /// Renders with an explicit bundle.
    pub fn render_with(&self, styles: &ButtonStyles) -> Node {
        let text_style = self.text_style(styles);
        let child = match &self.content {
            ButtonContent::Label(label) => Node::text(label.clone(), text_style),
            // Non-text content never receives the text style.
            ButtonContent::Element(node) => node.clone(),
        };
        let pressed = styles.states.pressed.get(self.variant);
        Node::Touchable {
            style: self.container_style(styles),
            active_opacity: self.active_opacity,
            pressed: PressedFeedback {
                container: pressed.container.clone(),
                text: pressed.text.clone(),
            },
            disabled_style: styles.states.disabled.container.clone(),
            disabled: self.disabled,
            children: vec![child],
        }
    }
}
