//! Error types for the selfplay crate

use thiserror::Error;

/// Main error type for the selfplay crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("move index {index} is out of bounds (must be 0-8)")]
    InvalidIndex { index: usize },

    #[error("cell {index} is occupied")]
    CellOccupied { index: usize },

    #[error("cannot train on an incomplete episode")]
    IncompleteEpisode,

    #[error("strategy returned no candidate moves")]
    NoCandidateMoves,

    #[error("unsupported model snapshot version: {got} (expected {expected})")]
    UnsupportedVersion { got: u32, expected: u32 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attach an operation description to an I/O error.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
