//! Card container component.

use serde::Serialize;

use crate::button::shadow_default;
use crate::palette;
use crate::render::{Node, PressedFeedback};
use crate::responsive::{DeviceClass, Pct, Viewport};
use crate::style::{compose, keys, StyleFragment};

/// Visual treatment of a card surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Default,
    Muted,
}

/// Card style fragments for one device class.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyles {
    pub base: StyleFragment,
    pub muted: StyleFragment,
}

impl CardStyles {
    pub fn build(class: DeviceClass, viewport: Viewport) -> Self {
        let base = compose(&[
            &StyleFragment::new()
                .set(keys::BACKGROUND_COLOR, palette::CARD)
                .set(keys::BORDER_RADIUS, class.select(20.0, 16.0))
                .set(
                    keys::PADDING,
                    viewport.width_pct(class.select(Pct::new(4.0), Pct::new(4.5))),
                ),
            &shadow_default(),
        ]);
        CardStyles {
            base,
            muted: StyleFragment::new().set(keys::BACKGROUND_COLOR, palette::MUTED),
        }
    }
}

/// Pressable card surface.
///
/// Internal layout is the caller's concern; the card provides the surface
/// style and touch feedback only.
#[derive(Debug, Clone)]
pub struct Card {
    variant: CardVariant,
    style: StyleFragment,
    children: Vec<Node>,
}

impl Card {
    pub fn new() -> Self {
        Card {
            variant: CardVariant::Default,
            style: StyleFragment::new(),
            children: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Caller style override, layered last.
    pub fn style(mut self, style: StyleFragment) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn render(&self, class: DeviceClass, viewport: Viewport) -> Node {
        let styles = CardStyles::build(class, viewport);
        let variant_layer = match self.variant {
            CardVariant::Default => StyleFragment::new(),
            CardVariant::Muted => styles.muted.clone(),
        };
        Node::Touchable {
            style: compose(&[&styles.base, &variant_layer, &self.style]),
            active_opacity: 0.9,
            pressed: PressedFeedback {
                container: StyleFragment::new().set(keys::OPACITY, 0.95),
                text: StyleFragment::new(),
            },
            disabled_style: StyleFragment::new().set(keys::OPACITY, 0.5),
            disabled: false,
            children: self.children.clone(),
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn test_default_card_surface() {
        let node = Card::new().render(DeviceClass::Phone, Viewport::PHONE);
        assert_eq!(
            node.style().get(keys::BACKGROUND_COLOR),
            Some(&StyleValue::Color(palette::CARD))
        );
        assert_eq!(
            node.style().get(keys::BORDER_RADIUS),
            Some(&StyleValue::Number(16.0))
        );
    }

    #[test]
    fn test_muted_variant_swaps_background() {
        let node = Card::new()
            .variant(CardVariant::Muted)
            .render(DeviceClass::Tablet, Viewport::TABLET);
        assert_eq!(
            node.style().get(keys::BACKGROUND_COLOR),
            Some(&StyleValue::Color(palette::MUTED))
        );
    }

    #[test]
    fn test_children_are_forwarded() {
        let child = Node::text("Início", StyleFragment::new());
        let node = Card::new()
            .child(child.clone())
            .render(DeviceClass::Phone, Viewport::PHONE);
        assert_eq!(node.children(), std::slice::from_ref(&child));
    }
}
