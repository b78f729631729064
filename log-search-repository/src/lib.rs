//! # Log Search Repository
//!
//! This crate provides the seam between the log pipeline and the search
//! engine. It includes definitions for errors, the transport interface, the
//! request types sent through it, and a concrete implementation for
//! OpenSearch/Elasticsearch.

pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use errors::SearchError;
pub use interfaces::SearchEngineTransport;
pub use crate::opensearch::{queries, OpenSearchClient};
pub use types::{EngineResponse, IndexRequest, SearchRequest};
