//! Error types for the log search repository.

mod search_error;

pub use search_error::SearchError;
