//! Store module for spell document persistence.
//!
//! The JSON document on disk is the source of truth between editing sessions.

mod collection;

pub use collection::*;
