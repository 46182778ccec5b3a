use crate::api::{PatsApi, PatsPaths};
use crate::error::Result;
use crate::store::fs::{resolve_pattern_dir, FileStore};
use std::path::Path;

pub struct PatsContext {
    pub api: PatsApi<FileStore>,
}

/// Resolve the pattern directory and wire up a file-backed API around it.
/// `custom_path` is the `--custom-path` override, used verbatim when given.
pub fn initialize(custom_path: Option<&Path>) -> Result<PatsContext> {
    let dir = resolve_pattern_dir(custom_path)?;
    let store = FileStore::new(dir.clone());
    let paths = PatsPaths { dir };
    let api = PatsApi::new(store, paths);
    Ok(PatsContext { api })
}
