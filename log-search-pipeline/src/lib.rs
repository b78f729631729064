//! # Log Search Pipeline
//!
//! This crate provides the two stages of a log search run.
//!
//! ## Architecture
//!
//! 1. **Ingestor**: Serializes log entries and indexes them one at a time
//! 2. **Reporter**: Queries the index for a level and prints the matching hits
//!
//! Both stages talk to the engine through a shared `SearchEngineTransport`.

pub mod errors;
pub mod ingestor;
pub mod reporter;

#[cfg(test)]
pub(crate) mod mock;

pub use errors::PipelineError;
pub use ingestor::{IngestResult, IngestSummary, LogIngestor};
pub use reporter::{ErrorReport, ErrorReporter, REPORT_HEADER};
