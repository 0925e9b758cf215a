//! Data models for the spellbook core.
//!
//! The record shape, its wire encoding, and the form field view the editor works with.

mod form;
mod schema;
pub(crate) mod spell;

pub use form::*;
pub use schema::*;
pub use spell::SpellRecord;
