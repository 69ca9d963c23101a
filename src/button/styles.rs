//! Style factories for the [`Button`] component.
//!
//! Styles are resolved in three layers, all pure:
//!
//! - a static per-variant table ([`button_variants`]), device-independent
//! - a per-size table built for a device class ([`SizeTable::build`])
//! - shared base fragments ([`CommonStyles::build`]) plus the default shadow
//!
//! [`ButtonStyles`] bundles them for one device class; the component layers
//! the pieces in a fixed precedence order at render time. The base container
//! is composed as base shape, then centering, then the row-direction flag,
//! then the shadow fragment. That order is load-bearing: variants cancel the
//! shadow by re-declaring `shadowOpacity`/`elevation`, which only wins
//! because variant fragments are layered after the base in the final
//! composition.
//!
//! [`Button`]: super::Button

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::palette;
use crate::responsive::{current_viewport, DeviceClass, Pct, Viewport};
use crate::style::{compose, keys, Color, StyleFragment, StyleValue, Transform};

/// Named visual treatment of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
    Game,
    Calm,
    Soft,
}

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::Default,
        Variant::Destructive,
        Variant::Outline,
        Variant::Secondary,
        Variant::Ghost,
        Variant::Link,
        Variant::Game,
        Variant::Calm,
        Variant::Soft,
    ];
}

/// Named dimensional treatment of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    Default,
    Lg,
    Xl,
    Icon,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::Sm, Size::Default, Size::Lg, Size::Xl, Size::Icon];
}

/// Exhaustive per-variant lookup table.
///
/// One field per [`Variant`], so a missing entry is a compile error rather
/// than a runtime lookup failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerVariant<T> {
    pub default: T,
    pub destructive: T,
    pub outline: T,
    pub secondary: T,
    pub ghost: T,
    pub link: T,
    pub game: T,
    pub calm: T,
    pub soft: T,
}

impl<T> PerVariant<T> {
    pub fn get(&self, variant: Variant) -> &T {
        match variant {
            Variant::Default => &self.default,
            Variant::Destructive => &self.destructive,
            Variant::Outline => &self.outline,
            Variant::Secondary => &self.secondary,
            Variant::Ghost => &self.ghost,
            Variant::Link => &self.link,
            Variant::Game => &self.game,
            Variant::Calm => &self.calm,
            Variant::Soft => &self.soft,
        }
    }
}

/// Exhaustive per-size lookup table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerSize<T> {
    pub sm: T,
    pub default: T,
    pub lg: T,
    pub xl: T,
    pub icon: T,
}

impl<T> PerSize<T> {
    pub fn get(&self, size: Size) -> &T {
        match size {
            Size::Sm => &self.sm,
            Size::Default => &self.default,
            Size::Lg => &self.lg,
            Size::Xl => &self.xl,
            Size::Icon => &self.icon,
        }
    }
}

/// Container and text fragments for one variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariantStyle {
    pub container: StyleFragment,
    pub text: StyleFragment,
}

/// Container and text fragments for one size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SizeStyle {
    pub container: StyleFragment,
    pub text: StyleFragment,
}

/// Interaction-state overlay. Either fragment may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StateOverlay {
    pub container: StyleFragment,
    pub text: StyleFragment,
}

/// Interaction-state tables: per-variant `pressed`, shared `disabled`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonStates {
    pub pressed: PerVariant<StateOverlay>,
    pub disabled: StateOverlay,
}

// Built once on first use and shared by reference; never mutated afterwards.
static BUTTON_VARIANTS: Lazy<PerVariant<VariantStyle>> = Lazy::new(build_variants);
static BUTTON_STATES: Lazy<ButtonStates> = Lazy::new(build_states);

/// The static per-variant style table.
///
/// Variant fragments are designed to be layered after the base fragments:
/// `outline`/`secondary`/`ghost`/`link` cancel the default shadow with
/// `elevation: 0` / `shadowOpacity: 0`, and `link` re-declares a nonzero
/// horizontal padding over the base padding.
pub fn button_variants() -> &'static PerVariant<VariantStyle> {
    &BUTTON_VARIANTS
}

/// The static interaction-state table.
pub fn button_states() -> &'static ButtonStates {
    &BUTTON_STATES
}

fn build_variants() -> PerVariant<VariantStyle> {
    PerVariant {
        default: VariantStyle {
            container: StyleFragment::new().set(keys::BACKGROUND_COLOR, palette::PRIMARY),
            text: StyleFragment::new().set(keys::COLOR, palette::PRIMARY_FOREGROUND),
        },
        destructive: VariantStyle {
            container: StyleFragment::new().set(keys::BACKGROUND_COLOR, palette::DESTRUCTIVE),
            text: StyleFragment::new().set(keys::COLOR, palette::DESTRUCTIVE_FOREGROUND),
        },
        outline: VariantStyle {
            container: StyleFragment::new()
                .set(keys::BACKGROUND_COLOR, Color::TRANSPARENT)
                .set(keys::BORDER_WIDTH, 1.5)
                .set(keys::BORDER_COLOR, palette::OUTLINE_BORDER)
                .set(keys::ELEVATION, 0.0)
                .set(keys::SHADOW_OPACITY, 0.0),
            text: StyleFragment::new().set(keys::COLOR, palette::PRIMARY),
        },
        secondary: VariantStyle {
            container: StyleFragment::new()
                .set(keys::BACKGROUND_COLOR, palette::SECONDARY)
                .set(keys::ELEVATION, 0.0)
                .set(keys::SHADOW_OPACITY, 0.0),
            text: StyleFragment::new().set(keys::COLOR, palette::SECONDARY_FOREGROUND),
        },
        ghost: VariantStyle {
            container: StyleFragment::new()
                .set(keys::BACKGROUND_COLOR, Color::TRANSPARENT)
                .set(keys::ELEVATION, 0.0)
                .set(keys::SHADOW_OPACITY, 0.0),
            text: StyleFragment::new().set(keys::COLOR, palette::LINK_TEXT),
        },
        link: VariantStyle {
            container: StyleFragment::new()
                .set(keys::BACKGROUND_COLOR, Color::TRANSPARENT)
                .set(keys::ELEVATION, 0.0)
                .set(keys::SHADOW_OPACITY, 0.0)
                // Deliberately overrides the base horizontal padding.
                .set(keys::PADDING_HORIZONTAL, 4.0),
            text: StyleFragment::new()
                .set(keys::COLOR, palette::LINK_TEXT)
                .set(keys::TEXT_DECORATION_LINE, "underline")
                .set(keys::FONT_WEIGHT, "500"),
        },
        game: VariantStyle {
            container: StyleFragment::new()
                .set(keys::BACKGROUND_COLOR, palette::CALM_BLUE)
                .set(keys::BORDER_RADIUS, 16.0)
                .set(keys::ELEVATION, 4.0)
                .set(keys::SHADOW_OPACITY, 0.2),
            text: StyleFragment::new()
                .set(keys::COLOR, palette::PRIMARY_FOREGROUND)
                .set(keys::FONT_WEIGHT, "700"),
        },
        calm: VariantStyle {
            container: StyleFragment::new()
                .set(keys::BACKGROUND_COLOR, palette::SOFT_GREEN)
                .set(keys::BORDER_RADIUS, 12.0)
                .set(keys::ELEVATION, 3.0)
                .set(keys::SHADOW_OPACITY, 0.15),
            text: StyleFragment::new()
                .set(keys::COLOR, palette::PRIMARY_FOREGROUND)
                .set(keys::FONT_WEIGHT, "600"),
        },
        soft: VariantStyle {
            container: StyleFragment::new()
                .set(keys::BACKGROUND_COLOR, palette::GENTLE_PURPLE)
                .set(keys::BORDER_RADIUS, 12.0)
                .set(keys::ELEVATION, 3.0)
                .set(keys::SHADOW_OPACITY, 0.15),
            text: StyleFragment::new()
                .set(keys::COLOR, palette::PRIMARY_FOREGROUND)
                .set(keys::FONT_WEIGHT, "600"),
        },
    }
}

fn build_states() -> ButtonStates {
    let press_scale = || vec![Transform::Scale(0.98)];
    let fade_and_shrink = || StateOverlay {
        container: StyleFragment::new()
            .set(keys::OPACITY, 0.8)
            .set(keys::TRANSFORM, press_scale()),
        text: StyleFragment::new(),
    };
    ButtonStates {
        pressed: PerVariant {
            default: fade_and_shrink(),
            destructive: fade_and_shrink(),
            outline: StateOverlay {
                container: StyleFragment::new()
                    .set(keys::BACKGROUND_COLOR, palette::SUBTLE_BACKGROUND)
                    .set(keys::TRANSFORM, press_scale()),
                text: StyleFragment::new(),
            },
            secondary: StateOverlay {
                container: StyleFragment::new()
                    .set(keys::BACKGROUND_COLOR, Color::rgb(0xCB, 0xD5, 0xE1))
                    .set(keys::TRANSFORM, press_scale()),
                text: StyleFragment::new(),
            },
            ghost: StateOverlay {
                container: StyleFragment::new()
                    .set(keys::BACKGROUND_COLOR, palette::SUBTLE_BACKGROUND)
                    .set(keys::TRANSFORM, press_scale()),
                text: StyleFragment::new(),
            },
            // Link feedback is text-only.
            link: StateOverlay {
                container: StyleFragment::new(),
                text: StyleFragment::new().set(keys::OPACITY, 0.8),
            },
            game: fade_and_shrink(),
            calm: fade_and_shrink(),
            soft: fade_and_shrink(),
        },
        disabled: StateOverlay {
            container: StyleFragment::new().set(keys::OPACITY, 0.5),
            text: StyleFragment::new(),
        },
    }
}

/// Shared base fragments reused across the interactive-component factories.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonStyles {
    pub base_container: StyleFragment,
    pub center_content: StyleFragment,
    pub base_text: StyleFragment,
}

impl CommonStyles {
    /// Builds the shared fragments for a device class and viewport.
    pub fn build(class: DeviceClass, viewport: Viewport) -> Self {
        CommonStyles {
            base_container: StyleFragment::new()
                .set(
                    keys::PADDING_VERTICAL,
                    viewport.height_pct(class.select(Pct::new(1.5), Pct::new(1.8))),
                )
                .set(keys::PADDING_HORIZONTAL, viewport.width_pct(Pct::new(5.0)))
                .set(keys::BORDER_RADIUS, class.select(16.0, 12.0)),
            center_content: StyleFragment::new()
                .set(keys::ALIGN_ITEMS, "center")
                .set(keys::JUSTIFY_CONTENT, "center"),
            base_text: StyleFragment::new()
                .set(
                    keys::FONT_SIZE,
                    viewport.width_pct(class.select(Pct::new(2.8), Pct::new(4.0))),
                )
                .set(keys::FONT_WEIGHT, "500")
                .set(keys::TEXT_ALIGN, "center")
                .set(keys::COLOR, palette::FOREGROUND),
        }
    }
}

/// The default drop shadow shared by elevated surfaces.
///
/// Nonzero on purpose: flat variants cancel it by re-declaring
/// `shadowOpacity`/`elevation` after it in the final layering.
pub fn shadow_default() -> StyleFragment {
    StyleFragment::new()
        .set(keys::SHADOW_COLOR, palette::SHADOW)
        .set(
            keys::SHADOW_OFFSET,
            StyleValue::Offset {
                width: 0.0,
                height: 2.0,
            },
        )
        .set(keys::SHADOW_OPACITY, 0.1)
        .set(keys::SHADOW_RADIUS, 4.0)
        .set(keys::ELEVATION, 2.0)
}

/// Per-size container/text table.
pub type SizeTable = PerSize<SizeStyle>;

impl SizeTable {
    /// Builds the responsive size table for a device class and viewport.
    ///
    /// Radius and padding literals differ per class; `icon` fixes its height
    /// and width, zeroes the horizontal padding, and carries an intentionally
    /// empty text fragment.
    pub fn build(class: DeviceClass, viewport: Viewport) -> SizeTable {
        let hp = |tablet: f32, phone: f32| viewport.height_pct(class.select(Pct::new(tablet), Pct::new(phone)));
        let wp = |tablet: f32, phone: f32| viewport.width_pct(class.select(Pct::new(tablet), Pct::new(phone)));

        let icon_edge = hp(7.0, 5.5);
        PerSize {
            sm: SizeStyle {
                container: StyleFragment::new()
                    .set(keys::PADDING_VERTICAL, hp(1.5, 1.2))
                    .set(keys::PADDING_HORIZONTAL, wp(4.0, 3.5))
                    .set(keys::BORDER_RADIUS, class.select(14.0, 10.0)),
                text: StyleFragment::new().set(keys::FONT_SIZE, wp(3.0, 3.5)),
            },
            default: SizeStyle {
                container: StyleFragment::new()
                    .set(keys::PADDING_VERTICAL, hp(1.5, 1.8))
                    .set(keys::PADDING_HORIZONTAL, wp(5.0, 5.0))
                    .set(keys::BORDER_RADIUS, class.select(16.0, 12.0)),
                text: StyleFragment::new().set(keys::FONT_SIZE, wp(2.8, 4.0)),
            },
            lg: SizeStyle {
                container: StyleFragment::new()
                    .set(keys::PADDING_VERTICAL, hp(2.2, 2.0))
                    .set(keys::PADDING_HORIZONTAL, wp(6.0, 6.0))
                    .set(keys::BORDER_RADIUS, class.select(18.0, 14.0)),
                text: StyleFragment::new().set(keys::FONT_SIZE, wp(4.0, 4.5)),
            },
            xl: SizeStyle {
                container: StyleFragment::new()
                    .set(keys::PADDING_VERTICAL, hp(2.5, 2.2))
                    .set(keys::PADDING_HORIZONTAL, wp(7.0, 7.0))
                    .set(keys::BORDER_RADIUS, class.select(20.0, 16.0)),
                text: StyleFragment::new().set(keys::FONT_SIZE, wp(4.5, 5.0)),
            },
            icon: SizeStyle {
                container: StyleFragment::new()
                    .set(keys::HEIGHT, icon_edge)
                    .set(keys::WIDTH, icon_edge)
                    .set(keys::PADDING_HORIZONTAL, 0.0)
                    .set(keys::BORDER_RADIUS, class.select(16.0, 12.0)),
                text: StyleFragment::new(),
            },
        }
    }
}

/// The consolidated style bundle for the Button component.
///
/// Produced fresh on every factory call; the static variant/state tables are
/// shared by reference, the size table is rebuilt per call. Structurally
/// equal for equal inputs — no hidden state.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyles {
    pub base_container: StyleFragment,
    pub base_text: StyleFragment,
    pub variants: &'static PerVariant<VariantStyle>,
    pub sizes: SizeTable,
    pub states: &'static ButtonStates,
}

impl ButtonStyles {
    /// Builds the bundle for an explicit viewport. Pure.
    pub fn for_viewport(class: DeviceClass, viewport: Viewport) -> Self {
        let common = CommonStyles::build(class, viewport);
        let row = StyleFragment::new().set(keys::FLEX_DIRECTION, "row");
        // Order is the contract: shape, centering, row flag, shadow.
        let base_container = compose(&[
            &common.base_container,
            &common.center_content,
            &row,
            &shadow_default(),
        ]);
        ButtonStyles {
            base_container,
            base_text: common.base_text,
            variants: button_variants(),
            sizes: SizeTable::build(class, viewport),
            states: button_states(),
        }
    }

    pub fn variant(&self, variant: Variant) -> &VariantStyle {
        self.variants.get(variant)
    }

    pub fn size(&self, size: Size) -> &SizeStyle {
        self.sizes.get(size)
    }
}

/// Builds the full style bundle from the ambient viewport signal.
///
/// # Example
///
/// ```rust
/// use calmkit::{create_button_styles, DeviceClass, Variant};
/// use calmkit::style::keys;
///
/// let styles = create_button_styles(DeviceClass::Phone);
/// let game = styles.variant(Variant::Game);
/// assert!(game.container.get(keys::BACKGROUND_COLOR).is_some());
/// ```
pub fn create_button_styles(class: DeviceClass) -> ButtonStyles {
    ButtonStyles::for_viewport(class, current_viewport())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    fn phone() -> ButtonStyles {
        ButtonStyles::for_viewport(DeviceClass::Phone, Viewport::PHONE)
    }

    fn tablet() -> ButtonStyles {
        ButtonStyles::for_viewport(DeviceClass::Tablet, Viewport::TABLET)
    }

    fn number(fragment: &StyleFragment, key: &str) -> f32 {
        match fragment.get(key) {
            Some(StyleValue::Number(n)) => *n,
            other => panic!("expected number at '{}', got {:?}", key, other),
        }
    }

    #[test]
    fn test_every_variant_is_structurally_complete() {
        let styles = phone();
        for variant in Variant::ALL {
            let entry = styles.variant(variant);
            // Container is never empty; text may carry as little as a color.
            assert!(!entry.container.is_empty(), "{:?}", variant);
            assert!(!entry.text.is_empty(), "{:?}", variant);
        }
    }

    #[test]
    fn test_every_size_is_defined() {
        for styles in [phone(), tablet()] {
            for size in Size::ALL {
                assert!(!styles.size(size).container.is_empty(), "{:?}", size);
            }
        }
    }

    #[test]
    fn test_pressed_overlay_exists_for_every_variant() {
        let states = button_states();
        for variant in Variant::ALL {
            let overlay = states.pressed.get(variant);
            assert!(
                !overlay.container.is_empty() || !overlay.text.is_empty(),
                "{:?}",
                variant
            );
        }
    }

    #[test]
    fn test_disabled_overlay_is_shared_and_half_opacity() {
        let states = button_states();
        assert_eq!(
            states.disabled.container.get(keys::OPACITY),
            Some(&StyleValue::Number(0.5))
        );
        assert!(states.disabled.text.is_empty());
    }

    #[test]
    fn test_factory_is_idempotent() {
        assert_eq!(phone(), phone());
        assert_eq!(tablet(), tablet());
    }

    #[test]
    fn test_radius_literal_table() {
        let phone = phone();
        let tablet = tablet();
        let radius = |styles: &ButtonStyles, size| number(&styles.size(size).container, keys::BORDER_RADIUS);

        assert_eq!(radius(&tablet, Size::Sm), 14.0);
        assert_eq!(radius(&phone, Size::Sm), 10.0);
        assert_eq!(radius(&tablet, Size::Default), 16.0);
        assert_eq!(radius(&phone, Size::Default), 12.0);
        assert_eq!(radius(&tablet, Size::Lg), 18.0);
        assert_eq!(radius(&phone, Size::Lg), 14.0);
        assert_eq!(radius(&tablet, Size::Xl), 20.0);
        assert_eq!(radius(&phone, Size::Xl), 16.0);
    }

    #[test]
    fn test_size_dimensions_are_non_negative() {
        for styles in [phone(), tablet()] {
            for size in Size::ALL {
                for (key, value) in styles.size(size).container.iter() {
                    if let StyleValue::Number(n) = value {
                        assert!(*n >= 0.0, "{} on {:?}", key, size);
                    }
                }
            }
        }
    }

    #[test]
    fn test_icon_size_is_square_with_empty_text() {
        let styles = phone();
        let icon = styles.size(Size::Icon);
        assert!(icon.text.is_empty());
        assert_eq!(
            icon.container.get(keys::HEIGHT),
            icon.container.get(keys::WIDTH)
        );
        assert_eq!(
            icon.container.get(keys::PADDING_HORIZONTAL),
            Some(&StyleValue::Number(0.0))
        );
    }

    #[test]
    fn test_base_container_composition_order() {
        let styles = phone();
        // The shadow fragment is the last layer, so its keys survive intact.
        assert_eq!(number(&styles.base_container, keys::SHADOW_OPACITY), 0.1);
        assert_eq!(number(&styles.base_container, keys::ELEVATION), 2.0);
        assert_eq!(
            styles.base_container.get(keys::FLEX_DIRECTION),
            Some(&StyleValue::Text("row"))
        );
        assert_eq!(
            styles.base_container.get(keys::ALIGN_ITEMS),
            Some(&StyleValue::Text("center"))
        );
    }

    #[test]
    fn test_flat_variants_cancel_the_shadow() {
        for variant in [Variant::Outline, Variant::Secondary, Variant::Ghost, Variant::Link] {
            let container = &button_variants().get(variant).container;
            assert_eq!(number(container, keys::SHADOW_OPACITY), 0.0, "{:?}", variant);
            assert_eq!(number(container, keys::ELEVATION), 0.0, "{:?}", variant);
        }
    }

    #[test]
    fn test_link_overrides_base_horizontal_padding() {
        let link = button_variants().get(Variant::Link);
        assert_eq!(number(&link.container, keys::PADDING_HORIZONTAL), 4.0);
    }

    #[test]
    fn test_sizes_scale_with_viewport() {
        let small = ButtonStyles::for_viewport(DeviceClass::Phone, Viewport::new(320.0, 568.0));
        let large = ButtonStyles::for_viewport(DeviceClass::Phone, Viewport::PHONE);
        let pad = |styles: &ButtonStyles| number(&styles.size(Size::Default).container, keys::PADDING_VERTICAL);
        assert!(pad(&small) < pad(&large));
    }

    #[test]
    fn test_default_size_padding_matches_tokens() {
        let styles = phone();
        assert_eq!(
            number(&styles.size(Size::Default).container, keys::PADDING_VERTICAL),
            Viewport::PHONE.height_pct(Pct::new(1.8))
        );
        let styles = tablet();
        assert_eq!(
            number(&styles.size(Size::Default).container, keys::PADDING_VERTICAL),
            Viewport::TABLET.height_pct(Pct::new(1.5))
        );
    }
}
