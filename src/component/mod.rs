//! Reusable composition components: [`Card`] and [`Header`].
//!
//! These are glue around the style core: thin surfaces the screens arrange.

mod card;
mod header;

pub use card::{Card, CardStyles, CardVariant};
pub use header::Header;
