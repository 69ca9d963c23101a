//! Data-only node tree handed to the rendering primitives.
//!
//! Layout, drawing, and touch dispatch are collaborators outside this crate.
//! Components compose their styles and return `Node` values; the embedding
//! toolkit maps them onto its own view, text, and touch-feedback primitives.

use serde::Serialize;

use crate::style::StyleFragment;

/// Pressed-state feedback forwarded to the touch primitive.
///
/// Either fragment may be empty; the primitive overlays `container` on the
/// node style and `text` on any label inside while the touch is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PressedFeedback {
    pub container: StyleFragment,
    pub text: StyleFragment,
}

/// A rendered element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Node {
    /// Plain container.
    View {
        style: StyleFragment,
        children: Vec<Node>,
    },
    /// Text primitive with a composed text style.
    Text {
        style: StyleFragment,
        content: String,
    },
    /// Touch-feedback primitive. Carries the composed interaction overlays;
    /// applying them on press/disable is the primitive's job, not ours.
    Touchable {
        style: StyleFragment,
        active_opacity: f32,
        pressed: PressedFeedback,
        disabled_style: StyleFragment,
        disabled: bool,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn view(style: StyleFragment, children: Vec<Node>) -> Node {
        Node::View { style, children }
    }

    pub fn text(content: impl Into<String>, style: StyleFragment) -> Node {
        Node::Text {
            style,
            content: content.into(),
        }
    }

    /// The composed style of this node.
    pub fn style(&self) -> &StyleFragment {
        match self {
            Node::View { style, .. } | Node::Text { style, .. } | Node::Touchable { style, .. } => {
                style
            }
        }
    }

    /// Child nodes, empty for text.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::View { children, .. } | Node::Touchable { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::keys;

    #[test]
    fn test_text_node_accessors() {
        let node = Node::text("Olá", StyleFragment::new().set(keys::FONT_SIZE, 14.0));
        assert_eq!(node.children(), &[]);
        assert!(node.style().get(keys::FONT_SIZE).is_some());
    }

    #[test]
    fn test_view_children() {
        let child = Node::text("x", StyleFragment::new());
        let node = Node::view(StyleFragment::new(), vec![child.clone()]);
        assert_eq!(node.children(), std::slice::from_ref(&child));
    }
}
