//! Configuration module for the spellbook core.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Document written when nothing has been loaded yet.
pub const DEFAULT_PATH: &str = "spells.json";

/// Soft limit on the spell description shown by the length counter.
pub const DEFAULT_TEXT_SOFT_LIMIT: usize = 600;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fallback document path for saves
    pub default_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Description length reported as the counter's maximum
    pub text_soft_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from(DEFAULT_PATH),
            log_level: "info".to_string(),
            text_soft_limit: DEFAULT_TEXT_SOFT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let default_path = env::var("SPELLBOOK_DEFAULT_PATH")
            .unwrap_or_else(|_| DEFAULT_PATH.to_string())
            .into();

        let log_level = env::var("SPELLBOOK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let text_soft_limit = env::var("SPELLBOOK_TEXT_SOFT_LIMIT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TEXT_SOFT_LIMIT);

        Self {
            default_path,
            log_level,
            text_soft_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    /// Serializes tests that touch process environment variables.
    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        env::remove_var("SPELLBOOK_DEFAULT_PATH");
        env::remove_var("SPELLBOOK_LOG_LEVEL");
        env::remove_var("SPELLBOOK_TEXT_SOFT_LIMIT");
    }

    #[test]
    fn test_default_config() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.default_path, PathBuf::from("spells.json"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.text_soft_limit, 600);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("SPELLBOOK_DEFAULT_PATH", "/tmp/grimoire.json");
        env::set_var("SPELLBOOK_LOG_LEVEL", "debug");
        env::set_var("SPELLBOOK_TEXT_SOFT_LIMIT", "800");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config.default_path, PathBuf::from("/tmp/grimoire.json"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.text_soft_limit, 800);
    }

    #[test]
    fn test_bad_soft_limit_falls_back() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("SPELLBOOK_TEXT_SOFT_LIMIT", "lots");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config.text_soft_limit, DEFAULT_TEXT_SOFT_LIMIT);
    }
}
