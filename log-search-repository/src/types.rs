//! Request and response types passed through the search engine transport.

use serde_json::Value;

/// Request to store one document in an index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRequest {
    /// Target index name.
    pub index: String,
    /// The serialized document.
    pub document: Value,
    /// Make the document searchable as soon as the write is acknowledged.
    pub refresh: bool,
}

impl IndexRequest {
    /// Create a request whose write is immediately visible to searches.
    pub fn new(index: impl Into<String>, document: Value) -> Self {
        Self {
            index: index.into(),
            document,
            refresh: true,
        }
    }
}

/// Request to run a search against an index.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Target index name.
    pub index: String,
    /// The query body.
    pub body: Value,
    /// Ask the engine to count all matches exactly.
    pub track_total_hits: bool,
    /// Ask the engine for human readable output.
    pub pretty: bool,
}

impl SearchRequest {
    /// Create a request with exact totals and pretty output.
    pub fn new(index: impl Into<String>, body: Value) -> Self {
        Self {
            index: index.into(),
            body,
            track_total_hits: true,
            pretty: true,
        }
    }
}

/// A response the engine produced, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl EngineResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Summary used in log lines and error messages.
    pub fn describe(&self) -> String {
        format!("status {}: {}", self.status, self.body.trim())
    }
}
