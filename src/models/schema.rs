//! Statically declared field schema shared by the model and the UI layer.
//!
//! The lists below drive which selection controls and drop-down entries the editor shows.
//! Records may still hold values outside them.

use serde::{Deserialize, Serialize};

/// Character classes offered as selectable checkboxes.
pub const CLASSES: [&str; 8] = [
    "Bard", "Cleric", "Druid", "Paladin", "Ranger", "Sorcerer", "Warlock", "Wizard",
];

/// Schools of magic offered by the school drop-down.
pub const SCHOOLS: [&str; 8] = [
    "Abjuration",
    "Conjuration",
    "Divination",
    "Enchantment",
    "Evocation",
    "Illusion",
    "Necromancy",
    "Transmutation",
];

/// Source book abbreviations offered by the source drop-down.
pub const SOURCES: [&str; 6] = ["PHB", "DMG", "MM", "SCAG", "XGE", "EEPC"];

/// Spellcasting component, stored on the wire as its one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Component {
    #[serde(rename = "S")]
    Somatic,
    #[serde(rename = "V")]
    Verbal,
    #[serde(rename = "M")]
    Material,
}

/// Code-to-label lookup used to address a component's selection control.
pub const COMPONENT_LABELS: [(Component, &str); 3] = [
    (Component::Somatic, "somatic"),
    (Component::Verbal, "verbal"),
    (Component::Material, "material"),
];

impl Component {
    pub fn code(&self) -> &'static str {
        match self {
            Component::Somatic => "S",
            Component::Verbal => "V",
            Component::Material => "M",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Component::Somatic => "somatic",
            Component::Verbal => "verbal",
            Component::Material => "material",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(Component::Somatic),
            "V" => Some(Component::Verbal),
            "M" => Some(Component::Material),
            _ => None,
        }
    }

    /// Resolve a checkbox caption such as "Verbal" or "V (verbal)".
    ///
    /// The caption's first character is taken as the code, so any capitalization works.
    pub fn from_label(label: &str) -> Option<Self> {
        let first = label.trim().chars().next()?.to_ascii_uppercase();
        Self::from_code(&first.to_string())
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
