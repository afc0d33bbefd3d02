//! Error types for qrem

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for qrem operations
pub type Result<T> = std::result::Result<T, QremError>;

/// Main error type for qrem
#[derive(Error, Debug)]
pub enum QremError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// External reminder store errors
    #[error("Reminder store error: {0}")]
    Store(#[from] StoreError),

    /// Command-line usage errors
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Unreadable { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Match threshold {0} is out of range (expected a value in (0, 1])")]
    ThresholdOutOfRange(f64),
}

/// External reminder store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to launch '{bin}': {error}")]
    Launch { bin: String, error: String },

    #[error("'{bin}' exited with code {code:?}")]
    Failed { bin: String, code: Option<i32> },

    #[error("Undecodable listing output: {0}")]
    Output(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
