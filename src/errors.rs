//! Unified application error type.
//! All modules (core, db, config, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // External commands
    // ---------------------------
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{stderr}")]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Output of '{0}' is not valid UTF-8")]
    InvalidOutput(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid application inventory: {0}")]
    Inventory(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
