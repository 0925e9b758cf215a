//! Editor session facade.
//!
//! The entry points a UI layer calls. The session owns the collection and remembers which
//! document is open; the UI only ever sees names and form field values.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::SpellResult;
use crate::models::{from_form_fields, text_length_feedback, to_form_fields, FormFields};
use crate::store::{LoadSummary, SpellCollection};

/// An editing session over one spell collection.
#[derive(Debug)]
pub struct SpellEditor {
    collection: SpellCollection,
    current_path: Option<PathBuf>,
    config: Config,
}

impl SpellEditor {
    pub fn new(config: Config) -> Self {
        Self::with_collection(config, SpellCollection::new())
    }

    pub fn with_collection(config: Config, collection: SpellCollection) -> Self {
        Self {
            collection,
            current_path: None,
            config,
        }
    }

    pub fn collection(&self) -> &SpellCollection {
        &self.collection
    }

    /// Document that the next path-less save writes to, if one is open.
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Load a document and make it the current one.
    pub fn load_spells(&mut self, path: &Path) -> SpellResult<LoadSummary> {
        let summary = self.collection.load(path)?;
        self.current_path = Some(path.to_path_buf());
        Ok(summary)
    }

    /// Save to `path`, the current document, or the configured default, in that order.
    pub fn save_spells(&mut self, path: Option<&Path>) -> SpellResult<usize> {
        let target = match (path, &self.current_path) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(current)) => current.clone(),
            (None, None) => {
                tracing::warn!(
                    "No document open, saving to default {:?}",
                    self.config.default_path
                );
                self.config.default_path.clone()
            }
        };

        let count = self.collection.save(&target)?;
        self.current_path = Some(target);
        Ok(count)
    }

    pub fn list_spell_names(&self) -> Vec<String> {
        self.collection.names()
    }

    pub fn spell_count(&self) -> usize {
        self.collection.len()
    }

    /// Form field values for the named spell.
    pub fn get_spell(&self, name: &str) -> SpellResult<FormFields> {
        self.collection.get(name).map(to_form_fields)
    }

    /// Store the form's values under `name`. Nothing changes if a field fails coercion.
    pub fn upsert_spell(&mut self, name: &str, fields: &FormFields) -> SpellResult<()> {
        let record = from_form_fields(fields)?;
        self.collection.upsert(name, record);
        Ok(())
    }

    /// Length counter for the description box.
    pub fn text_feedback(&self, text: &str) -> String {
        text_length_feedback(text, self.config.text_soft_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SpellError;
    use crate::models::spell::tests::mage_armor;
    use tempfile::TempDir;

    fn editor_in(dir: &TempDir) -> SpellEditor {
        SpellEditor::new(Config {
            default_path: dir.path().join("spells.json"),
            log_level: "warn".to_string(),
            text_soft_limit: 600,
        })
    }

    #[test]
    fn test_save_without_document_uses_default() {
        let dir = TempDir::new().unwrap();
        let mut editor = editor_in(&dir);

        assert_eq!(editor.save_spells(None).unwrap(), 0);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("spells.json")).unwrap(),
            "{}"
        );
        assert_eq!(editor.current_path(), Some(dir.path().join("spells.json").as_path()));
    }

    #[test]
    fn test_save_prefers_explicit_then_current() {
        let dir = TempDir::new().unwrap();
        let mut editor = editor_in(&dir);
        editor
            .upsert_spell("Mage Armor", &to_form_fields(&mage_armor()))
            .unwrap();

        let explicit = dir.path().join("grimoire.json");
        editor.save_spells(Some(&explicit)).unwrap();
        assert_eq!(editor.current_path(), Some(explicit.as_path()));

        std::fs::remove_file(&explicit).unwrap();
        editor.save_spells(None).unwrap();
        assert!(explicit.exists());
        assert!(!dir.path().join("spells.json").exists());
    }

    #[test]
    fn test_failed_load_keeps_current_path() {
        let dir = TempDir::new().unwrap();
        let mut editor = editor_in(&dir);
        let path = dir.path().join("a.json");
        std::fs::write(&path, "{}").unwrap();
        editor.load_spells(&path).unwrap();

        let err = editor.load_spells(&dir.path().join("b.json")).unwrap_err();
        assert!(matches!(err, SpellError::Load(_)));
        assert_eq!(editor.current_path(), Some(path.as_path()));
    }

    #[test]
    fn test_invalid_level_leaves_collection_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut editor = editor_in(&dir);
        let mut fields = to_form_fields(&mage_armor());
        editor.upsert_spell("Mage Armor", &fields).unwrap();

        fields.level = "high".to_string();
        let err = editor.upsert_spell("Mage Armor", &fields).unwrap_err();
        assert!(matches!(err, SpellError::Validation(_)));
        assert_eq!(editor.get_spell("Mage Armor").unwrap().level, "1");

        assert!(editor.upsert_spell("Shield", &fields).is_err());
        assert_eq!(editor.list_spell_names(), vec!["Mage Armor"]);
    }

    #[test]
    fn test_text_feedback_uses_configured_limit() {
        let editor = SpellEditor::new(Config {
            text_soft_limit: 120,
            ..Config::default()
        });
        assert_eq!(editor.text_feedback("Shield"), "6 of 120");
    }
}
