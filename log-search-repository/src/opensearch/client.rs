//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineTransport`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    params::Refresh,
    IndexParts, OpenSearch, SearchParts,
};
use tracing::{debug, info, instrument};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineTransport;
use crate::types::{EngineResponse, IndexRequest, SearchRequest};

/// OpenSearch client implementation.
///
/// Wraps a single-node connection to an OpenSearch or Elasticsearch cluster.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("http://localhost:9200")?;
/// let document = serde_json::to_value(&entry)?;
/// let response = client.index_document(&IndexRequest::new("logs", document)).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new client for the cluster at the given URL.
    ///
    /// No request is sent here; an unreachable cluster surfaces on the first
    /// round trip.
    ///
    /// # Arguments
    ///
    /// * `url` - The server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If the URL cannot be parsed or the transport cannot be built
    pub fn new(url: &str) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch client");

        Ok(Self { client })
    }

    fn refresh_param(refresh: bool) -> Refresh {
        if refresh {
            Refresh::True
        } else {
            Refresh::False
        }
    }

    /// Read the status and body, consuming the response.
    async fn read_response(response: Response) -> Result<EngineResponse, SearchError> {
        let status = response.status_code().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::transport(format!("Failed to read response body: {}", e)))?;

        Ok(EngineResponse { status, body })
    }
}

#[async_trait]
impl SearchEngineTransport for OpenSearchClient {
    #[instrument(skip(self, request), fields(index = %request.index, refresh = request.refresh))]
    async fn index_document(&self, request: &IndexRequest) -> Result<EngineResponse, SearchError> {
        let response = self
            .client
            .index(IndexParts::Index(&request.index))
            .body(&request.document)
            .refresh(Self::refresh_param(request.refresh))
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        let response = Self::read_response(response).await?;
        debug!(status = response.status, "Index request completed");
        Ok(response)
    }

    #[instrument(skip(self, request), fields(index = %request.index))]
    async fn search(&self, request: &SearchRequest) -> Result<EngineResponse, SearchError> {
        let indices = [request.index.as_str()];

        let response = self
            .client
            .search(SearchParts::Index(&indices))
            .body(&request.body)
            .track_total_hits(request.track_total_hits)
            .pretty(request.pretty)
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        let response = Self::read_response(response).await?;
        debug!(status = response.status, "Search request completed");
        Ok(response)
    }
}
