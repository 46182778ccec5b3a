//! # Storage Layer
//!
//! Storage is abstracted behind the [`PatternStore`] trait so command logic
//! can be tested against [`memory::InMemoryStore`] without touching the
//! filesystem, while production uses [`fs::FileStore`].
//!
//! ## Storage format
//!
//! For `FileStore`, one file per definition inside the pattern directory:
//!
//! ```text
//! ~/.config/pats/
//! ├── aws-keys.json
//! ├── base64.json
//! └── todos.json
//! ```
//!
//! Entries are created exactly once (exclusive create) and never rewritten
//! in place; removing one is a plain file deletion outside the tool.

use crate::error::Result;
use crate::model::PatternDef;

pub mod fs;
pub mod memory;

/// Abstract interface for pattern definition storage.
pub trait PatternStore {
    /// Persist a new definition. Must fail if `name` already has an entry;
    /// an existing entry is never overwritten.
    fn save(&mut self, name: &str, def: &PatternDef) -> Result<()>;

    /// Load the definition stored under `name`.
    fn load(&self, name: &str) -> Result<PatternDef>;

    /// All stored names, sorted. Empty when the store has no entries yet.
    fn list(&self) -> Result<Vec<String>>;
}
