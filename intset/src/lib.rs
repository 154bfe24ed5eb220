pub mod bitset;
pub mod error;
pub mod iter;

pub use bitset::IntSet;
pub use error::{ValueError, ValueErrorKind, to_index};
