//! Data model types for the chart and tag tables.
//!
//! Column order of each serialized struct is the column order of the CSV
//! table it becomes, so field order here is part of the output format.

use serde::{Deserialize, Serialize};

// ── Chart record ────────────────────────────────────────────────────────────

/// One ranked game entry parsed from a chart unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,
    /// Price in the store currency. `Free` and `—` are stored as `0.0`.
    pub price: f64,
    /// Rating percentage in `[0, 100]`.
    pub rating: f64,
    /// Release date as `YYYY-MM-DD`.
    #[serde(rename = "release")]
    pub release_date: String,
    pub follows: u64,
    pub reviews: u64,
    pub peak: u64,
}

/// Header row of the chart record table.
pub const RECORD_COLUMNS: [&str; 7] = [
    "name", "price", "rating", "release", "follows", "reviews", "peak",
];

// ── Tags ────────────────────────────────────────────────────────────────────

/// Surrogate identifier of a tag. Always positive.
pub type TagId = u32;

/// A row of the tag dimension table (`tags.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub id: TagId,
    pub tag_name: String,
}

/// A row of the game/tag junction table (`game_tag.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunctionRow {
    pub game_name: String,
    pub tag_id: TagId,
}

/// A row of a tag input table: a game name and its comma-separated tags.
///
/// Extra columns in the input are ignored. A missing `tags` cell reads as
/// no tags at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInputRow {
    pub name: String,
    #[serde(default)]
    pub tags: Option<String>,
}

impl TagInputRow {
    pub fn new(name: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Some(tags.into()),
        }
    }

    /// The raw tag string, empty when the cell was missing.
    pub fn tag_string(&self) -> &str {
        self.tags.as_deref().unwrap_or("")
    }
}
