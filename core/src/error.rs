use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("persona '{persona}' has an inverted {field} range ({min} > {max})")]
    InvalidPersonaConfig {
        persona: &'static str,
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("user {user_id} is missing a required {role} account")]
    MissingPrecondition {
        user_id: String,
        role: &'static str,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenError {
    /// Attach the offending path to an io error before surfacing it.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type GenResult<T> = Result<T, GenError>;
