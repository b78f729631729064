//! Log entry document.
//!
//! A `LogEntry` is serialized as-is into the search index, so the serde field
//! names are the document field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conventional level tags. Any string is accepted as a level.
pub const LEVEL_INFO: &str = "INFO";
pub const LEVEL_WARN: &str = "WARN";
pub const LEVEL_ERROR: &str = "ERROR";

/// A single log record produced by a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Name of the component that produced the record.
    pub service: String,
    /// Severity tag, e.g. `INFO` or `ERROR`.
    pub level: String,
    /// Human readable description.
    pub message: String,
    /// When the record was produced. Serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new(
        service: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            service: service.into(),
            level: level.into(),
            message: message.into(),
            timestamp,
        }
    }

    pub fn info(
        service: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(service, LEVEL_INFO, message, timestamp)
    }

    pub fn warn(
        service: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(service, LEVEL_WARN, message, timestamp)
    }

    pub fn error(
        service: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(service, LEVEL_ERROR, message, timestamp)
    }
}
