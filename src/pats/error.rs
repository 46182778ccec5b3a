use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatsError {
    /// Home directory lookup failed, so no pattern directory can be resolved.
    #[error("unable to determine the pattern directory (no home directory)")]
    DirResolution,

    #[error("no such pattern '{0}'")]
    PatternNotFound(String),

    #[error("pattern '{0}' already exists")]
    PatternExists(String),

    #[error("pattern name cannot be empty")]
    EmptyName,

    #[error("pattern cannot be empty")]
    EmptyPattern,

    /// The definition parsed, but has neither `pattern` nor `patterns`.
    #[error("pattern '{0}' contains no pattern(s)")]
    MissingPattern(String),

    #[error("pattern file '{path}' is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write pattern file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine binary could not be spawned at all. The engine's own exit
    /// status is never turned into an error.
    #[error("failed to launch search engine '{engine}': {source}")]
    EngineSpawn {
        engine: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PatsError>;
