//! In-memory spell collection with JSON document persistence.
//!
//! Loads are all-or-nothing and saves go through a temporary file and rename.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::errors::{SpellError, SpellResult};
use crate::models::SpellRecord;

/// Observable lifecycle of a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectionState {
    #[default]
    Empty,
    Populated,
}

/// Outcome of a successful load, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Spell names in ascending order
    pub names: Vec<String>,
    pub count: usize,
}

impl std::fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} spells loaded", self.count)
    }
}

/// All spell records, keyed by spell name.
#[derive(Debug, Clone, Default)]
pub struct SpellCollection {
    spells: HashMap<String, SpellRecord>,
    state: CollectionState,
}

impl SpellCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CollectionState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.spells.contains_key(name)
    }

    /// Replace the whole collection with the document at `source`.
    ///
    /// On any failure the current contents are left untouched.
    pub fn load(&mut self, source: &Path) -> SpellResult<LoadSummary> {
        let file = File::open(source).map_err(|e| SpellError::load_io(source, e))?;
        let spells: HashMap<String, SpellRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SpellError::load_json(source, e))?;

        self.spells = spells;
        self.state = CollectionState::Populated;

        let names = self.names();
        let count = names.len();
        tracing::info!("Loaded {} spells from {:?}", count, source);
        Ok(LoadSummary { names, count })
    }

    /// Write the whole collection to `destination` as a JSON object keyed by spell name.
    pub fn save(&self, destination: &Path) -> SpellResult<usize> {
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = temp_document(dir).map_err(|e| SpellError::save_io(destination, e))?;

        // An existing document keeps its mode across the rename
        if let Ok(meta) = std::fs::metadata(destination) {
            if meta.is_file() {
                temp.as_file()
                    .set_permissions(meta.permissions())
                    .map_err(|e| SpellError::save_io(destination, e))?;
            }
        }

        // Sorted keys keep saved documents stable between runs
        let sorted: BTreeMap<&String, &SpellRecord> = self.spells.iter().collect();
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer(&mut writer, &sorted)
                .map_err(|e| SpellError::save_json(destination, e))?;
            writer
                .flush()
                .map_err(|e| SpellError::save_io(destination, e))?;
        }
        temp.as_file()
            .sync_all()
            .map_err(|e| SpellError::save_io(destination, e))?;
        temp.persist(destination)
            .map_err(|e| SpellError::save_io(destination, e.error))?;

        let count = self.spells.len();
        tracing::info!("Saved {} spells to {:?}", count, destination);
        Ok(count)
    }

    /// Look up a spell by name.
    pub fn get(&self, name: &str) -> SpellResult<&SpellRecord> {
        self.spells.get(name).ok_or_else(|| {
            tracing::debug!("Spell {:?} not found", name);
            SpellError::NotFound(format!("Spell {} not found", name))
        })
    }

    /// Insert a new record or replace the one stored under `name`.
    pub fn upsert(&mut self, name: &str, record: SpellRecord) {
        let replaced = self.spells.insert(name.to_string(), record).is_some();
        self.state = CollectionState::Populated;
        tracing::debug!("Upserted spell {:?} (replaced: {})", name, replaced);
    }

    /// All spell names, sorted ascending by ordinal comparison.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.spells.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Temporary sibling file created with the mode a plain `File::create` would get.
fn temp_document(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
