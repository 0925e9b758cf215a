//! Spellbook core
//!
//! Record model and JSON-backed collection behind a desktop spell database editor.
//! The UI layer owns a [`SpellEditor`] and talks to it through names and [`FormFields`].

pub mod config;
pub mod editor;
pub mod errors;
pub mod models;
pub mod store;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use config::Config;
pub use editor::SpellEditor;
pub use errors::{SpellError, SpellResult};
pub use models::{
    from_form_fields, text_length_feedback, to_form_fields, Component, FormFields, SpellRecord,
    CLASSES, COMPONENT_LABELS, SCHOOLS, SOURCES,
};
pub use store::{CollectionState, LoadSummary, SpellCollection};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns `false` if a subscriber was already set.
pub fn init_tracing(config: &Config) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
