//! Error handling module for the spellbook core.
//!
//! Provides a single error type covering every failure the core can report to its caller.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const LOAD_ERROR: &str = "LOAD_ERROR";
    pub const SAVE_ERROR: &str = "SAVE_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
}

/// Spellbook error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    /// Document missing, unreadable, malformed, or holding an invalid record
    Load(String),
    /// I/O failure while persisting the collection
    Save(String),
    /// Lookup of an absent spell name
    NotFound(String),
    /// Form field that cannot be coerced into a record field
    Validation(String),
}

/// Result alias used throughout the crate.
pub type SpellResult<T> = Result<T, SpellError>;

impl SpellError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            SpellError::Load(_) => codes::LOAD_ERROR,
            SpellError::Save(_) => codes::SAVE_ERROR,
            SpellError::NotFound(_) => codes::NOT_FOUND,
            SpellError::Validation(_) => codes::VALIDATION_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            SpellError::Load(msg) => msg.clone(),
            SpellError::Save(msg) => msg.clone(),
            SpellError::NotFound(msg) => msg.clone(),
            SpellError::Validation(msg) => msg.clone(),
        }
    }

    /// Wrap an I/O error raised while loading `path`.
    pub(crate) fn load_io(path: &std::path::Path, err: std::io::Error) -> Self {
        tracing::error!("Load I/O error on {:?}: {:?}", path, err);
        SpellError::Load(format!("Cannot read {}: {}", path.display(), err))
    }

    /// Wrap a JSON error raised while parsing the document at `path`.
    pub(crate) fn load_json(path: &std::path::Path, err: serde_json::Error) -> Self {
        tracing::error!("Load JSON error on {:?}: {:?}", path, err);
        SpellError::Load(format!("Invalid spell document {}: {}", path.display(), err))
    }

    /// Wrap an I/O error raised while saving to `path`.
    pub(crate) fn save_io(path: &std::path::Path, err: std::io::Error) -> Self {
        tracing::error!("Save I/O error on {:?}: {:?}", path, err);
        SpellError::Save(format!("Cannot write {}: {}", path.display(), err))
    }

    /// Wrap a JSON error raised while serializing the collection for `path`.
    pub(crate) fn save_json(path: &std::path::Path, err: serde_json::Error) -> Self {
        tracing::error!("Save JSON error on {:?}: {:?}", path, err);
        SpellError::Save(format!("Cannot encode spells for {}: {}", path.display(), err))
    }
}

impl std::fmt::Display for SpellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for SpellError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = SpellError::NotFound("Spell Wish not found".to_string());
        assert_eq!(err.to_string(), "NOT_FOUND: Spell Wish not found");
        assert_eq!(err.error_code(), codes::NOT_FOUND);
    }

    #[test]
    fn test_json_errors_follow_the_operation() {
        let path = std::path::Path::new("spells.json");
        let bad = || serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(SpellError::load_json(path, bad()).error_code(), codes::LOAD_ERROR);
        assert_eq!(SpellError::save_json(path, bad()).error_code(), codes::SAVE_ERROR);
    }

    #[test]
    fn test_codes_per_variant() {
        assert_eq!(SpellError::Load(String::new()).error_code(), "LOAD_ERROR");
        assert_eq!(SpellError::Save(String::new()).error_code(), "SAVE_ERROR");
        assert_eq!(
            SpellError::Validation("bad level".into()).message(),
            "bad level"
        );
    }
}
