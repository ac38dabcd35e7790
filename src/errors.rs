//! Unified application error type.
//! Guards, store operations and menu handlers all return AppError so the
//! menu loop can report any failure the same way and keep going.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Startup (fatal)
    // ---------------------------
    #[error("{0}")]
    MissingDependency(String),

    #[error("Failed to create backup: {0}")]
    BackupFailure(String),

    // ---------------------------
    // Operator input
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // User store
    // ---------------------------
    #[error("A user with the username '{0}' already exists.")]
    DuplicateUser(String),

    #[error("User ID {0} not found.")]
    UserNotFound(i64),

    #[error("Database file '{0}' not found.")]
    DatabaseNotFound(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Service manager
    // ---------------------------
    #[error("Service error: {0}")]
    Service(String),

    // ---------------------------
    // Config / IO
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
