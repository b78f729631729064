//! # Log Search Shared
//!
//! Types shared between the repository and pipeline crates: the log record
//! that gets indexed and the typed shape of a search response.

pub mod log_entry;
pub mod search_hits;

pub use log_entry::LogEntry;
pub use search_hits::{Hit, HitsEnvelope, LogHit, SearchHits, TotalHits};
