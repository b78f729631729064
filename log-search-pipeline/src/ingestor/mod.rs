//! Ingestor module for the log search pipeline.
//!
//! Indexes log entries into the search engine, one request per entry.

use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::errors::PipelineError;
use log_search_repository::{IndexRequest, SearchEngineTransport};
use log_search_shared::LogEntry;

/// Outcome of indexing a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestResult {
    /// Service of the entry.
    pub service: String,
    /// Message of the entry.
    pub message: String,
    /// HTTP status the engine answered with.
    pub status: u16,
    /// Whether the engine accepted the document.
    pub success: bool,
    /// Engine error text if the document was rejected.
    pub error: Option<String>,
}

/// Summary of an ingestion run.
///
/// Only engine rejections show up as failures here. A transport failure
/// aborts the run before a summary exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Number of entries submitted.
    pub total: usize,
    /// Number of entries the engine accepted.
    pub succeeded: usize,
    /// Number of entries the engine rejected.
    pub failed: usize,
    /// Individual results, in submission order.
    pub results: Vec<IngestResult>,
}

impl IngestSummary {
    fn from_results(results: Vec<IngestResult>) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            results,
        }
    }
}

/// Indexes log entries into a single index.
///
/// Entries are submitted strictly in order and each write is refreshed so it
/// is searchable as soon as it is acknowledged. There is no batching and no
/// retry.
pub struct LogIngestor {
    client: Arc<dyn SearchEngineTransport>,
    index: String,
}

impl LogIngestor {
    /// Create an ingestor writing to the given index.
    pub fn new(client: Arc<dyn SearchEngineTransport>, index: impl Into<String>) -> Self {
        Self {
            client,
            index: index.into(),
        }
    }

    /// The index documents are written to.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Index every entry, in order.
    ///
    /// A rejected write is logged and the run moves on to the next entry.
    /// Serialization and transport failures abort immediately and later
    /// entries are never submitted.
    #[instrument(skip(self, entries), fields(index = %self.index, entry_count = entries.len()))]
    pub async fn ingest(&self, entries: &[LogEntry]) -> Result<IngestSummary, PipelineError> {
        let mut results = Vec::with_capacity(entries.len());

        for entry in entries {
            results.push(self.ingest_entry(entry).await?);
        }

        let summary = IngestSummary::from_results(results);
        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Ingestion completed"
        );

        Ok(summary)
    }

    async fn ingest_entry(&self, entry: &LogEntry) -> Result<IngestResult, PipelineError> {
        let document = serde_json::to_value(entry).map_err(|e| {
            PipelineError::serialization(format!("Error marshaling log entry: {}", e))
        })?;

        let request = IndexRequest::new(self.index.as_str(), document);

        let response = match self.client.index_document(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    service = %entry.service,
                    error = %e,
                    "Error indexing log entry: {}",
                    entry.message
                );
                return Err(e.into());
            }
        };

        if response.is_success() {
            info!(
                service = %entry.service,
                status = response.status,
                "Successfully indexed log entry: {}",
                entry.message
            );
            Ok(IngestResult {
                service: entry.service.clone(),
                message: entry.message.clone(),
                status: response.status,
                success: true,
                error: None,
            })
        } else {
            error!(
                service = %entry.service,
                status = response.status,
                body = %response.body.trim(),
                "[{}] Error indexing log entry: {}",
                response.status,
                entry.message
            );
            Ok(IngestResult {
                service: entry.service.clone(),
                message: entry.message.clone(),
                status: response.status,
                success: false,
                error: Some(response.describe()),
            })
        }
    }
}
