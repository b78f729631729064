//! # Log Search
//!
//! Indexes a set of service log entries into a search engine, then reports
//! the entries of one level (`ERROR` by default).
//!
//! This crate provides the configuration, dependency wiring and the run
//! sequence used by the `log-search` binary.

pub mod config;
pub mod samples;

pub use config::{Dependencies, LogSearchConfig};

use std::io::Write;
use thiserror::Error;
use tracing::info;

use log_search_pipeline::{ErrorReport, IngestSummary, PipelineError};
use log_search_shared::LogEntry;

/// Errors that end a run.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] PipelineError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// What a completed run did.
#[derive(Debug)]
pub struct RunSummary {
    /// `None` when ingestion was skipped.
    pub ingest: Option<IngestSummary>,
    pub report: ErrorReport,
}

/// Index `entries`, then write the report to `out`.
///
/// Ingestion finishes before the query starts. The first fatal error ends
/// the run.
pub async fn run<W: Write>(
    deps: &Dependencies,
    entries: &[LogEntry],
    out: &mut W,
) -> Result<RunSummary, AppError> {
    let ingest = if deps.skip_ingest {
        info!("Skipping ingestion");
        None
    } else {
        Some(deps.ingestor.ingest(entries).await?)
    };

    let report = deps.reporter.report(out).await?;

    Ok(RunSummary { ingest, report })
}
