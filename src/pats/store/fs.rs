use super::PatternStore;
use crate::error::{PatsError, Result};
use crate::model::PatternDef;
use directories::BaseDirs;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension for pattern definition files.
pub const PATTERN_FILE_EXT: &str = "json";

/// Resolve the pattern directory: an explicit override wins verbatim,
/// otherwise the per-user default under the home directory.
pub fn resolve_pattern_dir(custom: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = custom {
        return Ok(dir.to_path_buf());
    }
    let base = BaseDirs::new().ok_or(PatsError::DirResolution)?;
    default_pattern_dir(base.home_dir())
}

/// First-existing-wins between `~/.config/pats` and the legacy `~/.pats`.
/// A fresh system gets the primary location.
fn default_pattern_dir(home: &Path) -> Result<PathBuf> {
    let primary = home.join(".config").join("pats");
    if path_exists(&primary)? {
        return Ok(primary);
    }
    let legacy = home.join(".pats");
    if path_exists(&legacy)? {
        return Ok(legacy);
    }
    Ok(primary)
}

/// Existence check that surfaces permission errors instead of swallowing them.
fn path_exists(path: &Path) -> Result<bool> {
    path.try_exists().map_err(|source| PatsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, PATTERN_FILE_EXT))
    }
}

impl PatternStore for FileStore {
    fn save(&mut self, name: &str, def: &PatternDef) -> Result<()> {
        let path = self.entry_path(name);

        // create_new is the atomic create-if-absent primitive; it is the only
        // guard against two concurrent saves of the same name.
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(PatsError::PatternExists(name.to_string()));
            }
            Err(source) => return Err(PatsError::Write { path, source }),
        };

        // 4-space pretty printing, the format the original pattern files use
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        def.serialize(&mut ser)?;
        buf.push(b'\n');

        file.write_all(&buf)
            .map_err(|source| PatsError::Write { path, source })?;
        Ok(())
    }

    fn load(&self, name: &str) -> Result<PatternDef> {
        let path = self.entry_path(name);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PatsError::PatternNotFound(name.to_string()));
            }
            Err(source) => return Err(PatsError::Read { path, source }),
        };
        serde_json::from_str(&content).map_err(|source| PatsError::Malformed { path, source })
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let read_err = |source| PatsError::Read {
            path: self.dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(PATTERN_FILE_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
