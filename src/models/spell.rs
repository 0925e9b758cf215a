//! Spell record model matching the persisted spell document.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Component;

/// One spell's full data. The spell name is the collection key and is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpellRecord {
    #[serde(deserialize_with = "wire::deserialize_classes")]
    pub classes: BTreeSet<String>,
    #[serde(deserialize_with = "wire::deserialize_level")]
    pub level: u32,
    pub school: String,
    #[serde(with = "wire::ritual")]
    pub ritual: bool,
    pub time: String,
    pub duration: String,
    pub range: String,
    pub components: BTreeSet<Component>,
    pub material: String,
    pub source: String,
    #[serde(deserialize_with = "wire::deserialize_source_page")]
    pub source_page: String,
    pub text: String,
}

impl SpellRecord {
    pub fn has_component(&self, component: Component) -> bool {
        self.components.contains(&component)
    }
}

/// Adapters for the legacy document encoding.
mod wire {
    use std::collections::BTreeSet;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrText {
        Int(u64),
        Float(f64),
        Text(String),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    pub fn deserialize_level<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = IntOrText::deserialize(deserializer)
            .map_err(|_| D::Error::custom("level must be a non-negative integer"))?;
        match value {
            IntOrText::Int(n) => u32::try_from(n)
                .map_err(|_| D::Error::custom(format!("level {} is out of range", n))),
            IntOrText::Float(f) if f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64 => {
                Ok(f as u32)
            }
            IntOrText::Float(f) => Err(D::Error::custom(format!(
                "level {} is not a non-negative integer",
                f
            ))),
            IntOrText::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("level {:?} is not an integer", s))),
        }
    }

    pub fn deserialize_source_page<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match TextOrNumber::deserialize(deserializer)
            .map_err(|_| D::Error::custom("source_page must be a string or a number"))?
        {
            TextOrNumber::Text(s) => Ok(s),
            TextOrNumber::Number(n) => Ok(n.to_string()),
        }
    }

    pub fn deserialize_classes<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let classes = Vec::<String>::deserialize(deserializer)?;
        if classes.iter().any(|c| c.is_empty()) {
            return Err(D::Error::custom("class names must not be empty"));
        }
        Ok(classes.into_iter().collect())
    }

    /// `ritual` travels as the text "True"/"False".
    pub mod ritual {
        use serde::de::Error;
        use serde::{Deserialize, Deserializer, Serializer};

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FlagOrText {
            Flag(bool),
            Text(String),
        }

        pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(if *value { "True" } else { "False" })
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
        where
            D: Deserializer<'de>,
        {
            match FlagOrText::deserialize(deserializer)
                .map_err(|_| D::Error::custom("ritual must be \"True\" or \"False\""))?
            {
                FlagOrText::Flag(flag) => Ok(flag),
                FlagOrText::Text(s) if s.eq_ignore_ascii_case("true") => Ok(true),
                FlagOrText::Text(s) if s.eq_ignore_ascii_case("false") => Ok(false),
                FlagOrText::Text(s) => Err(D::Error::custom(format!(
                    "ritual must be \"True\" or \"False\", got {:?}",
                    s
                ))),
            }
        }
    }
}
