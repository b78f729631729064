//! Error types for the log search pipeline.

use log_search_repository::SearchError;
use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A log entry could not be converted to a document.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Error from the search engine.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),

    /// The report could not be written.
    #[error("Output error: {0}")]
    OutputError(#[from] std::io::Error),
}

impl PipelineError {
    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}
