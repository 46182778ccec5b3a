//! # API Facade
//!
//! Thin facade over the command layer, and the single entry point for all
//! pats operations regardless of the UI driving them.
//!
//! The facade dispatches to `commands/*.rs` and returns structured types.
//! It does no business logic, no terminal I/O, and never calls
//! `std::process::exit`; printing versus executing an [`Invocation`] is the
//! CLI layer's call.
//!
//! `PatsApi<S: PatternStore>` is generic over the storage backend:
//! production wires `FileStore`, tests wire `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::invocation::Invocation;
use crate::store::PatternStore;

pub struct PatsApi<S: PatternStore> {
    store: S,
    paths: commands::PatsPaths,
}

impl<S: PatternStore> PatsApi<S> {
    pub fn new(store: S, paths: commands::PatsPaths) -> Self {
        Self { store, paths }
    }

    pub fn save_pattern(
        &mut self,
        name: &str,
        flags: &str,
        pattern: &str,
        engine: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, name, flags, pattern, engine)
    }

    pub fn list_patterns(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn build_invocation(
        &self,
        name: &str,
        target: &str,
        stdin_is_pipe: bool,
    ) -> Result<Invocation> {
        commands::invoke::run(&self.store, name, target, stdin_is_pipe)
    }

    pub fn init_store(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::PatsPaths {
        &self.paths
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, PatsPaths};
