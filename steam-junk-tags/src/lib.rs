//! Tag normalization: a persistent tag dictionary and the game/tag
//! junction table built on top of it.

pub mod dictionary;
pub mod error;
pub mod junction;

pub use dictionary::TagDictionary;
pub use error::TagError;
pub use junction::{build_junction, merge_tag_list, tokenize_tags, JunctionBuilder};
