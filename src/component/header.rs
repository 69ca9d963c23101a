//! Screen header component.

use crate::palette;
use crate::render::Node;
use crate::responsive::{DeviceClass, Pct, Viewport};
use crate::style::{keys, StyleFragment};

/// Centered title block shown at the top of a screen.
#[derive(Debug, Clone)]
pub struct Header {
    title: String,
    subtitle: Option<String>,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Header {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn render(&self, class: DeviceClass, viewport: Viewport) -> Node {
        let container = StyleFragment::new()
            .set(keys::ALIGN_ITEMS, "center")
            .set(
                keys::MARGIN_BOTTOM,
                viewport.height_pct(class.select(Pct::new(3.0), Pct::new(2.5))),
            );
        let title_style = StyleFragment::new()
            .set(
                keys::FONT_SIZE,
                viewport.width_pct(class.select(Pct::new(4.5), Pct::new(6.5))),
            )
            .set(keys::FONT_WEIGHT, "700")
            .set(keys::COLOR, palette::FOREGROUND)
            .set(keys::TEXT_ALIGN, "center");

        let mut children = vec![Node::text(self.title.clone(), title_style)];
        if let Some(subtitle) = &self.subtitle {
            let subtitle_style = StyleFragment::new()
                .set(
                    keys::FONT_SIZE,
                    viewport.width_pct(class.select(Pct::new(2.5), Pct::new(3.6))),
                )
                .set(keys::COLOR, palette::MUTED_FOREGROUND)
                .set(keys::TEXT_ALIGN, "center")
                .set(keys::MARGIN_TOP, viewport.height_pct(Pct::new(0.8)));
            children.push(Node::text(subtitle.clone(), subtitle_style));
        }
        Node::view(container, children)
    }
}
