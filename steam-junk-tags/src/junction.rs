//! Game/tag junction table construction.
//!
//! Each game's comma-separated tag string is split into tokens, each token
//! is resolved through the [`TagDictionary`], and one [`JunctionRow`] is
//! emitted per token. A token repeated within one game's string produces a
//! repeated row; the dictionary itself still holds the tag once.

use std::collections::HashSet;

use steam_junk_catalog::{JunctionRow, TagInputRow};

use crate::dictionary::TagDictionary;

/// Split a tag string on commas, trimming tokens and skipping empty ones.
pub fn tokenize_tags(tags: &str) -> impl Iterator<Item = &str> {
    tags.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Join a scraped tag list into the comma-separated form used by tag input
/// tables, dropping blanks and repeats while keeping first-seen order.
///
/// ```
/// use steam_junk_tags::merge_tag_list;
///
/// assert_eq!(merge_tag_list(["RPG", " Action", "RPG", ""]), "RPG,Action");
/// ```
pub fn merge_tag_list<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut merged: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && seen.insert(tag.to_string()) {
            merged.push(tag.to_string());
        }
    }
    merged.join(",")
}

/// Accumulates junction rows while assigning tag ids through a borrowed
/// dictionary.
#[derive(Debug)]
pub struct JunctionBuilder<'a> {
    dictionary: &'a mut TagDictionary,
    rows: Vec<JunctionRow>,
}

impl<'a> JunctionBuilder<'a> {
    pub fn new(dictionary: &'a mut TagDictionary) -> Self {
        Self {
            dictionary,
            rows: Vec::new(),
        }
    }

    /// Add one game's tags, left to right. Returns the number of rows added.
    pub fn add_entity(&mut self, game_name: &str, tags: &str) -> usize {
        let before = self.rows.len();
        for token in tokenize_tags(tags) {
            if let Some(tag_id) = self.dictionary.assign(token) {
                self.rows.push(JunctionRow {
                    game_name: game_name.to_string(),
                    tag_id,
                });
            }
        }
        self.rows.len() - before
    }

    /// Add every row of a tag input table, in order.
    pub fn add_rows<'r, I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = &'r TagInputRow>,
    {
        rows.into_iter()
            .map(|row| self.add_entity(&row.name, row.tag_string()))
            .sum()
    }

    pub fn finish(self) -> Vec<JunctionRow> {
        self.rows
    }
}

/// Build the junction rows for a whole tag input table.
pub fn build_junction(
    dictionary: &mut TagDictionary,
    inputs: &[TagInputRow],
) -> Vec<JunctionRow> {
    let mut builder = JunctionBuilder::new(dictionary);
    builder.add_rows(inputs);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_skips_empty_tokens() {
        let tokens: Vec<&str> = tokenize_tags(" Action ,, RPG ,").collect();
        assert_eq!(tokens, vec!["Action", "RPG"]);
        assert_eq!(tokenize_tags("").count(), 0);
        assert_eq!(tokenize_tags(" , ").count(), 0);
    }

    #[test]
    fn merge_keeps_first_seen_order() {
        assert_eq!(
            merge_tag_list(vec!["Indie", "Roguelike", "Indie", "Action"]),
            "Indie,Roguelike,Action"
        );
        assert_eq!(merge_tag_list(Vec::<String>::new()), "");
    }
}
