//! # Storage Layer
//!
//! The [`TeamStore`] trait is the persistence boundary. The registry lives in
//! memory; a store is only touched on an explicit save or load.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file (`teams.json` by default)
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! A flat JSON object, team names as keys and point totals as values:
//!
//! ```text
//! {
//!   "Alpha": 12,
//!   "Beta": 0
//! }
//! ```
//!
//! Keys are written and read back in registry order. There is no schema
//! version, no nesting and no array form. Every save overwrites the whole file.

use crate::error::Result;
use crate::registry::Registry;

pub mod format;
pub mod fs;
pub mod memory;

/// Abstract interface for registry persistence.
pub trait TeamStore {
    /// Overwrite the stored teams with the contents of `registry`.
    fn save(&mut self, registry: &Registry) -> Result<()>;

    /// Build a fresh registry from the stored teams.
    ///
    /// Must fail with `FileNotFound` when nothing has been saved yet,
    /// rather than returning an empty registry.
    fn load(&self) -> Result<Registry>;

    /// Human readable location, used in user messages.
    fn location(&self) -> String;
}
