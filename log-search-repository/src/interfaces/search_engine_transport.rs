//! Search engine transport trait definition.
//!
//! This module defines the abstract interface for the two engine round trips
//! the log pipeline needs, allowing for different backend implementations
//! (OpenSearch, Elasticsearch, mocks in tests).

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::{EngineResponse, IndexRequest, SearchRequest};

/// Abstract interface for search engine operations.
///
/// Implementations separate two kinds of failure:
///
/// * `Err(SearchError)` means no response was obtained (connection refused,
///   reset, body could not be read). Callers treat this as fatal.
/// * `Ok(EngineResponse)` with a non-2xx status means the engine answered
///   and rejected the request. Callers decide how to handle it.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait SearchEngineTransport: Send + Sync {
    /// Store a single document.
    ///
    /// # Arguments
    ///
    /// * `request` - Target index, document body and refresh option
    ///
    /// # Returns
    ///
    /// * `Ok(EngineResponse)` - The engine's answer, successful or not
    /// * `Err(SearchError)` - If the request could not be completed
    async fn index_document(&self, request: &IndexRequest) -> Result<EngineResponse, SearchError>;

    /// Execute a search.
    ///
    /// # Arguments
    ///
    /// * `request` - Target index, query body and response options
    ///
    /// # Returns
    ///
    /// * `Ok(EngineResponse)` - The engine's answer, successful or not
    /// * `Err(SearchError)` - If the request could not be completed
    ///
    /// # Example
    ///
    /// ```ignore
    /// let body = queries::build_level_query("ERROR");
    /// let response = transport.search(&SearchRequest::new("logs", body)).await?;
    /// assert!(response.is_success());
    /// ```
    async fn search(&self, request: &SearchRequest) -> Result<EngineResponse, SearchError>;
}
