//! Coercion between flat form field values and typed spell records.

use std::collections::BTreeSet;

use crate::errors::{SpellError, SpellResult};

use super::{Component, SpellRecord, CLASSES, COMPONENT_LABELS};

/// Field values exactly as the editor's widgets hold them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Selected class names
    pub classes: BTreeSet<String>,
    pub level: String,
    pub school: String,
    pub ritual: bool,
    pub time: String,
    pub duration: String,
    pub range: String,
    /// Selected components
    pub components: BTreeSet<Component>,
    pub material: String,
    pub source: String,
    pub source_page: String,
    pub text: String,
}

impl FormFields {
    /// Checkbox state for every schema class, matched case-insensitively.
    pub fn class_selection(&self) -> Vec<(&'static str, bool)> {
        CLASSES
            .iter()
            .map(|&class| {
                let selected = self
                    .classes
                    .iter()
                    .any(|c| c.to_lowercase() == class.to_lowercase());
                (class, selected)
            })
            .collect()
    }

    /// Checkbox state for every component, keyed by its label.
    pub fn component_selection(&self) -> Vec<(&'static str, bool)> {
        COMPONENT_LABELS
            .iter()
            .map(|(component, label)| (*label, self.components.contains(component)))
            .collect()
    }
}

/// Build a record from form field values.
pub fn from_form_fields(fields: &FormFields) -> SpellResult<SpellRecord> {
    let level = fields.level.trim().parse::<u32>().map_err(|_| {
        SpellError::Validation(format!(
            "Level must be a non-negative integer, got {:?}",
            fields.level
        ))
    })?;

    if fields.classes.iter().any(|c| c.is_empty()) {
        return Err(SpellError::Validation(
            "Class names must not be empty".to_string(),
        ));
    }

    Ok(SpellRecord {
        classes: fields.classes.clone(),
        level,
        school: fields.school.clone(),
        ritual: fields.ritual,
        time: fields.time.clone(),
        duration: fields.duration.clone(),
        range: fields.range.clone(),
        components: fields.components.clone(),
        material: fields.material.clone(),
        source: fields.source.clone(),
        source_page: fields.source_page.clone(),
        text: fields.text.clone(),
    })
}

/// Produce the values needed to redraw every field of `record`.
pub fn to_form_fields(record: &SpellRecord) -> FormFields {
    FormFields {
        classes: record.classes.clone(),
        level: record.level.to_string(),
        school: record.school.clone(),
        ritual: record.ritual,
        time: record.time.clone(),
        duration: record.duration.clone(),
        range: record.range.clone(),
        components: record.components.clone(),
        material: record.material.clone(),
        source: record.source.clone(),
        source_page: record.source_page.clone(),
        text: record.text.clone(),
    }
}

/// Counter text for the description box, e.g. "42 of 600".
pub fn text_length_feedback(text: &str, limit: usize) -> String {
    format!("{} of {}", text.chars().count(), limit)
}
