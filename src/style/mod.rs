//! Style primitives for the component factories.
//!
//! This module provides the building blocks every style factory composes:
//!
//! - [`StyleFragment`]: an open, mergeable map of visual properties
//! - [`StyleValue`] / [`Transform`]: the values a property can take
//! - [`Color`]: RGBA colors with hex parsing
//! - [`StyleError`]: errors from parsing external style input
//! - [`compose`]: ordered, later-wins layering of fragments
//!
//! Fragments support a layered pattern: a shared base fragment is overlaid by
//! variant, size, and caller fragments in a fixed precedence order.

mod color;
mod error;
mod fragment;
pub mod keys;
mod value;

pub use color::Color;
pub use error::StyleError;
pub use fragment::{compose, StyleFragment};
pub use value::{StyleValue, Transform};
