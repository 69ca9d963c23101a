//! Responsive mobile UI kit with factory-composed component styles.
//!
//! calmkit computes the visual styling of a small mobile UI — a button, a
//! card/header composition, and the screen arranging them — from pure factory
//! functions. Given a device-class flag (phone vs. tablet), the factories
//! produce nested tables of style fragments keyed by variant, size, and
//! interaction state, and components layer those fragments in a fixed
//! precedence order at render time. Nothing is cached: every render rebuilds
//! the bundle from the current viewport, so rotation and resize are just
//! re-renders.
//!
//! Modules:
//!
//! - [`style`]: fragments, values, colors, and the `compose` layering rule
//! - [`palette`]: semantic color constants
//! - [`responsive`]: percentage tokens, viewport math, device-class signal
//! - [`button`]: the Button component and its style factory
//! - [`component`]: Card and Header
//! - [`render`]: the data-only node tree handed to the rendering primitives
//! - [`navigation`]: route stack
//! - [`screen`]: the index screen
//!
//! # Example
//!
//! ```rust
//! use calmkit::{Button, DeviceClass, Size, Variant};
//! use calmkit::style::keys;
//!
//! let node = Button::label("Começar")
//!     .variant(Variant::Game)
//!     .size(Size::Default)
//!     .render(DeviceClass::Phone);
//!
//! assert!(node.style().get(keys::BACKGROUND_COLOR).is_some());
//! ```

pub mod button;
pub mod component;
pub mod navigation;
pub mod palette;
pub mod render;
pub mod responsive;
pub mod screen;
pub mod style;

pub use button::{create_button_styles, Button, ButtonContent, ButtonStyles, Size, Variant};
pub use component::{Card, CardVariant, Header};
pub use navigation::{Navigator, Route};
pub use render::Node;
pub use responsive::{
    current_viewport, detect_device_class, set_viewport_detector, DeviceClass, Pct, Viewport,
};
pub use style::{compose, Color, StyleError, StyleFragment, StyleValue};
