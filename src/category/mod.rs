pub mod index;

pub use index::{CategoryIndex, DEFAULT_CATEGORIES_FILE};
