//! Application screens.

mod index;

pub use index::{create_index_styles, index_screen, IndexStyles};
