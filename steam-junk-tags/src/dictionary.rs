//! Persistent tag dictionary: tag name ↔ surrogate id.
//!
//! Ids are handed out in order of first appearance and are never reused.
//! A dictionary is seeded from the previous run's snapshot (`tags.csv`), so
//! ids stay stable across runs as long as the snapshot is carried forward.

use std::collections::HashMap;
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

use steam_junk_catalog::{TagEntry, TagId};

use crate::error::TagError;

/// Header row of the snapshot table.
const SNAPSHOT_COLUMNS: [&str; 2] = ["id", "tag_name"];

/// Mapping from tag names to stable ids.
///
/// Assignment takes `&mut self`, so all id allocation for a batch goes
/// through a single owner in a single order.
#[derive(Debug, Clone)]
pub struct TagDictionary {
    ids: HashMap<String, TagId>,
    /// Entries in ascending id order.
    entries: Vec<TagEntry>,
    next_id: TagId,
}

impl Default for TagDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl TagDictionary {
    /// An empty dictionary whose first id will be 1.
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a dictionary from previously persisted entries.
    ///
    /// Entries may arrive in any order. Names are trimmed. Zero ids, blank
    /// names, duplicate ids or names, and a highest id that leaves no room
    /// for another are rejected.
    pub fn from_entries<I>(entries: I) -> Result<Self, TagError>
    where
        I: IntoIterator<Item = TagEntry>,
    {
        let mut entries: Vec<TagEntry> = entries
            .into_iter()
            .map(|e| TagEntry {
                id: e.id,
                tag_name: e.tag_name.trim().to_string(),
            })
            .collect();
        entries.sort_by_key(|e| e.id);

        let mut ids = HashMap::with_capacity(entries.len());
        let mut seen_ids = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.id == 0 {
                return Err(TagError::invalid_snapshot(format!(
                    "tag '{}' has id 0",
                    entry.tag_name
                )));
            }
            if entry.tag_name.is_empty() {
                return Err(TagError::invalid_snapshot(format!(
                    "tag id {} has an empty name",
                    entry.id
                )));
            }
            if !seen_ids.insert(entry.id) {
                return Err(TagError::invalid_snapshot(format!(
                    "duplicate tag id {}",
                    entry.id
                )));
            }
            if ids.insert(entry.tag_name.clone(), entry.id).is_some() {
                return Err(TagError::invalid_snapshot(format!(
                    "duplicate tag name '{}'",
                    entry.tag_name
                )));
            }
        }

        let next_id = match entries.last() {
            None => 1,
            Some(last) => last.id.checked_add(1).ok_or_else(|| {
                TagError::invalid_snapshot(format!(
                    "tag '{}' has id {}, no ids left to assign",
                    last.tag_name, last.id
                ))
            })?,
        };
        Ok(Self {
            ids,
            entries,
            next_id,
        })
    }

    /// Read a snapshot table (`id,tag_name` with header) from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TagError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let entries = reader
            .deserialize::<TagEntry>()
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(entries)
    }

    /// Load the snapshot at `path`, or start empty if there is none.
    pub fn load(path: &Path) -> Result<Self, TagError> {
        if !path.exists() {
            log::debug!("No tag snapshot at {}, starting empty", path.display());
            return Ok(Self::new());
        }

        let file = std::fs::File::open(path)?;
        let dictionary = Self::from_reader(file)?;
        log::info!(
            "Loaded {} existing tags from {}, next id = {}",
            dictionary.len(),
            path.display(),
            dictionary.next_id
        );
        Ok(dictionary)
    }

    /// Return the id for `tag_name`, allocating the next id if it is new.
    ///
    /// The name is trimmed; matching is exact and case-sensitive. Returns
    /// `None` for names that are blank after trimming, and for new names once
    /// the id space is used up.
    pub fn assign(&mut self, tag_name: &str) -> Option<TagId> {
        let tag_name = tag_name.trim();
        if tag_name.is_empty() {
            return None;
        }
        if let Some(&id) = self.ids.get(tag_name) {
            return Some(id);
        }

        let id = self.next_id;
        let Some(following) = id.checked_add(1) else {
            log::error!("No tag ids left, '{}' was not assigned", tag_name);
            return None;
        };
        self.next_id = following;
        self.ids.insert(tag_name.to_string(), id);
        self.entries.push(TagEntry {
            id,
            tag_name: tag_name.to_string(),
        });
        log::debug!("New tag '{}' -> {}", tag_name, id);
        Some(id)
    }

    /// Look up an existing id without allocating.
    pub fn get(&self, tag_name: &str) -> Option<TagId> {
        self.ids.get(tag_name.trim()).copied()
    }

    /// Look up the name stored under `id`.
    pub fn name_of(&self, id: TagId) -> Option<&str> {
        self.entries
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|i| self.entries[i].tag_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The id the next new tag will receive.
    pub fn next_id(&self) -> TagId {
        self.next_id
    }

    /// All entries in ascending id order.
    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    /// Write the snapshot table, ascending by id, header included.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), TagError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(SNAPSHOT_COLUMNS)?;
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Persist the snapshot to `path`, replacing any previous one.
    ///
    /// The table is written to a sibling temp file first and renamed into
    /// place, so a failed write leaves the old snapshot intact.
    pub fn persist(&self, path: &Path) -> Result<(), TagError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("csv.tmp");
        {
            let file = std::fs::File::create(&tmp)?;
            self.write_to(std::io::BufWriter::new(file))?;
        }
        std::fs::rename(&tmp, path)?;
        log::debug!("Persisted {} tags to {}", self.len(), path.display());
        Ok(())
    }
}
