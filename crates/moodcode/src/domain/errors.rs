//! Domain Errors
//!
//! Error types for engine operations.

use thiserror::Error;

/// Engine layer errors
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown mood: {name}")]
    UnknownMood { name: String },

    #[error("Malformed color string: {value}")]
    MalformedColor { value: String },

    #[error("Failed to load history: {0}")]
    HistoryLoad(String),

    #[error("Failed to save history: {0}")]
    HistoryWrite(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl EngineError {
    pub fn unknown_mood<T: AsRef<str>>(name: T) -> Self {
        Self::UnknownMood {
            name: name.as_ref().to_string(),
        }
    }
}
