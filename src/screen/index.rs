//! The index (home) screen.

use crate::button::{Button, ButtonStyles, Size, Variant};
use crate::component::{Card, CardVariant, Header};
use crate::palette;
use crate::render::Node;
use crate::responsive::{DeviceClass, Pct, Viewport};
use crate::style::{keys, StyleFragment};

/// Style fragments for the index screen layout.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStyles {
    pub container: StyleFragment,
    pub content: StyleFragment,
    pub navigation_grid: StyleFragment,
    pub navigation_card: StyleFragment,
    pub card_content: StyleFragment,
    pub card_title: StyleFragment,
    pub card_description: StyleFragment,
    pub action_button: StyleFragment,
}

/// Builds the screen-layout styles for a device class and viewport.
pub fn create_index_styles(class: DeviceClass, viewport: Viewport) -> IndexStyles {
    IndexStyles {
        container: StyleFragment::new()
            .set(keys::FLEX, 1.0)
            .set(keys::BACKGROUND_COLOR, palette::BACKGROUND)
            .set(
                keys::PADDING_VERTICAL,
                viewport.height_pct(class.select(Pct::new(3.0), Pct::new(2.5))),
            )
            .set(
                keys::PADDING_HORIZONTAL,
                viewport.width_pct(class.select(Pct::new(6.0), Pct::new(5.0))),
            ),
        content: StyleFragment::new()
            .set(keys::ALIGN_SELF, "center")
            .set(keys::MAX_WIDTH, class.select(720.0, viewport.width)),
        // Cards sit side by side on tablets, stacked on phones.
        navigation_grid: StyleFragment::new()
            .set(keys::FLEX_DIRECTION, class.select("row", "column"))
            .set(keys::GAP, viewport.width_pct(Pct::new(4.0))),
        navigation_card: StyleFragment::new()
            .set(keys::FLEX, 1.0)
            .set(keys::MARGIN_BOTTOM, viewport.height_pct(Pct::new(2.0))),
        card_content: StyleFragment::new().set(keys::GAP, viewport.height_pct(Pct::new(1.5))),
        card_title: StyleFragment::new()
            .set(
                keys::FONT_SIZE,
                viewport.width_pct(class.select(Pct::new(3.2), Pct::new(5.0))),
            )
            .set(keys::FONT_WEIGHT, "700")
            .set(keys::COLOR, palette::CARD_FOREGROUND),
        card_description: StyleFragment::new()
            .set(
                keys::FONT_SIZE,
                viewport.width_pct(class.select(Pct::new(2.4), Pct::new(3.6))),
            )
            .set(keys::COLOR, palette::MUTED_FOREGROUND),
        action_button: StyleFragment::new().set(keys::ALIGN_SELF, "flex-start"),
    }
}

/// Arranges Header + navigation cards for the given viewport.
pub fn index_screen(viewport: Viewport) -> Node {
    let class = viewport.device_class();
    let styles = create_index_styles(class, viewport);

    let button_styles = ButtonStyles::for_viewport(class, viewport);
    let card = |title: &str, description: &str, button: Button| {
        Card::new()
            .variant(CardVariant::Default)
            .style(styles.navigation_card.clone())
            .child(Node::view(
                styles.card_content.clone(),
                vec![
                    Node::text(title, styles.card_title.clone()),
                    Node::text(description, styles.card_description.clone()),
                    button
                        .style(styles.action_button.clone())
                        .render_with(&button_styles),
                ],
            ))
            .render(class, viewport)
    };

    let games_card = card(
        "Início",
        "Acesse os jogos educativos e atividades interativas",
        Button::label("Começar").variant(Variant::Game).size(Size::Default),
    );
    let about_card = card(
        "Sobre o App",
        "Conheça mais sobre nossa ferramenta e metodologia",
        Button::label("Saber Mais").variant(Variant::Soft).size(Size::Default),
    );

    Node::view(
        styles.container,
        vec![Node::view(
            styles.content,
            vec![
                Header::new("Aprender Brincando")
                    .subtitle("Jogos educativos e atividades interativas")
                    .render(class, viewport),
                Node::view(styles.navigation_grid, vec![games_card, about_card]),
            ],
        )],
    )
}
