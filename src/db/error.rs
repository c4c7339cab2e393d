//! Error type for the persistence layer.

use std::fmt;
use thiserror::Error;

/// Which step of a recipe insert failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipePhase {
    Recipe,
    CookingPoints,
    Ingredients,
}

impl fmt::Display for RecipePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecipePhase::Recipe => "recipe",
            RecipePhase::CookingPoints => "cooking points",
            RecipePhase::Ingredients => "ingredients",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DbError {
    /// The connection could not be established or re-established.
    #[error("database is not connected")]
    NotConnected,

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("file error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid examination field name: {0:?}")]
    InvalidFieldName(String),

    #[error("duplicate examination field name: {0:?}")]
    DuplicateFieldName(String),

    /// The whole recipe insert was rolled back.
    #[error("recipe insert failed in {phase} phase: {source}")]
    RecipeInsert {
        phase: RecipePhase,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{path} cannot be opened as a database: {reason}")]
    ImportUnreadable { path: String, reason: String },

    #[error("no file name given")]
    EmptyPath,
}

impl DbError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        DbError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type Result<T, E = DbError> = std::result::Result<T, E>;
