//! Error types for loadboard

use thiserror::Error;

/// Table shape errors. Fatal to a run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("No header row: grid has {rows} row(s) and the first {header_skip} are skipped")]
    MissingHeader { rows: usize, header_skip: usize },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Failures of the spreadsheet retrieval collaborator
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Source not found: {0}")]
    NotFound(String),

    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse sheet values: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported source: {0}")]
    Unsupported(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Goal fraction must be in (0, 1], got {0}")]
    InvalidGoalFraction(f64),

    #[error("Invalid time of day (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Goal '{goal}' refers to unknown window '{window}'")]
    UnknownWindow { goal: String, window: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
