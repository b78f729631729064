//! OpenSearch implementation of the search engine transport.
//!
//! This module provides a concrete implementation of `SearchEngineTransport`
//! using the OpenSearch client, which also speaks to Elasticsearch clusters
//! through the shared document and search APIs.

mod client;
pub mod queries;

pub use client::OpenSearchClient;
