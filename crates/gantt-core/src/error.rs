//! Error types for gantt-core

use thiserror::Error;

/// Errors surfaced by persistence and export
#[derive(Error, Debug)]
pub enum GanttError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Export failed: {0}")]
    Export(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GanttError>;
