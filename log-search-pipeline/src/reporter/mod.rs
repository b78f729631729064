//! Reporter module for the log search pipeline.
//!
//! Queries the index for entries of one level and prints them.

use std::io::Write;
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::errors::PipelineError;
use log_search_repository::{queries, SearchEngineTransport, SearchError, SearchRequest};
use log_search_shared::log_entry::LEVEL_ERROR;
use log_search_shared::{LogHit, SearchHits, TotalHits};

/// First line of every printed report.
pub const REPORT_HEADER: &str = "Errors in the logs:";

/// Hits returned for a level query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Total match count, when the engine reported one.
    pub total: Option<TotalHits>,
    /// Matching entries in the order the engine returned them.
    pub hits: Vec<LogHit>,
}

impl ErrorReport {
    /// Write the header followed by one line per hit.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", REPORT_HEADER)?;
        for hit in &self.hits {
            writeln!(out, "{}", format_hit(hit))?;
        }
        out.flush()
    }
}

/// Render a hit as a single report line.
pub fn format_hit(hit: &LogHit) -> String {
    format!(
        "Service: {}, Message: {}, Timestamp: {}",
        hit.service, hit.message, hit.timestamp
    )
}

/// Runs the level query and prints the report.
pub struct ErrorReporter {
    client: Arc<dyn SearchEngineTransport>,
    index: String,
    level: String,
}

impl ErrorReporter {
    /// Create a reporter that looks for `ERROR` entries in the given index.
    pub fn new(client: Arc<dyn SearchEngineTransport>, index: impl Into<String>) -> Self {
        Self {
            client,
            index: index.into(),
            level: LEVEL_ERROR.to_string(),
        }
    }

    /// Look for a different level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// Run the query and decode the hits.
    ///
    /// Any error status from the engine is fatal and carries the engine's
    /// response text.
    #[instrument(skip(self), fields(index = %self.index, level = %self.level))]
    pub async fn fetch(&self) -> Result<ErrorReport, PipelineError> {
        let body = queries::build_level_query(&self.level);
        let request = SearchRequest::new(self.index.as_str(), body);

        let response = self.client.search(&request).await?;

        if !response.is_success() {
            error!(
                status = response.status,
                body = %response.body.trim(),
                "Error response from search engine"
            );
            return Err(SearchError::query(format!(
                "Error response from search engine: {}",
                response.describe()
            ))
            .into());
        }

        let decoded: SearchHits<LogHit> = serde_json::from_str(&response.body).map_err(|e| {
            SearchError::parse(format!("Error parsing the response body: {}", e))
        })?;

        let total = decoded.hits.total.clone();
        let hits = decoded.into_sources();

        debug!(
            returned = hits.len(),
            total = total.as_ref().map(|t| t.value),
            exact = total.as_ref().map(TotalHits::is_exact),
            "Search completed"
        );

        Ok(ErrorReport { total, hits })
    }

    /// Run the query and write the report to `out`.
    ///
    /// Nothing is written unless the query succeeds and decodes.
    pub async fn report<W: Write>(&self, out: &mut W) -> Result<ErrorReport, PipelineError> {
        let report = self.fetch().await?;
        report.write_to(out)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockTransport, Reply};
    use serde_json::json;

    fn hits_body(sources: Vec<serde_json::Value>) -> String {
        let hits: Vec<_> = sources
            .into_iter()
            .enumerate()
            .map(|(i, source)| json!({"_index": "logs", "_id": i.to_string(), "_score": 1.0, "_source": source}))
            .collect();
        let total = hits.len();
        json!({
            "took": 2,
            "timed_out": false,
            "hits": {
                "total": { "value": total, "relation": "eq" },
                "hits": hits
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_single_hit_output() {
        let body = hits_body(vec![json!({
            "service": "auth-service",
            "message": "Failed to authenticate user",
            "timestamp": "2024-01-01T00:00:00Z",
            "level": "ERROR"
        })]);
        let client = Arc::new(MockTransport::with_search_reply(Reply::status(200, &body)));
        let reporter = ErrorReporter::new(client, "logs");

        let mut out = Vec::new();
        let report = reporter.report(&mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Errors in the logs:\n\
             Service: auth-service, Message: Failed to authenticate user, Timestamp: 2024-01-01T00:00:00Z\n"
        );
        assert_eq!(report.total.unwrap().value, 1);
    }

    #[tokio::test]
    async fn test_zero_hits_prints_header_only() {
        let client = Arc::new(MockTransport::with_search_reply(Reply::status(
            200,
            &hits_body(vec![]),
        )));
        let reporter = ErrorReporter::new(client, "logs");

        let mut out = Vec::new();
        let report = reporter.report(&mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Errors in the logs:\n");
        assert!(report.hits.is_empty());
    }

    #[tokio::test]
    async fn test_hits_printed_in_engine_order() {
        let body = hits_body(vec![
            json!({"service": "order-service", "message": "Failed to process order payment", "timestamp": "t2"}),
            json!({"service": "auth-service", "message": "Failed to authenticate user", "timestamp": "t1"}),
        ]);
        let client = Arc::new(MockTransport::with_search_reply(Reply::status(200, &body)));
        let reporter = ErrorReporter::new(client, "logs");

        let mut out = Vec::new();
        reporter.report(&mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "Service: order-service, Message: Failed to process order payment, Timestamp: t2"
        );
        assert_eq!(
            lines[2],
            "Service: auth-service, Message: Failed to authenticate user, Timestamp: t1"
        );
    }

    #[tokio::test]
    async fn test_error_status_aborts_without_output() {
        let engine_error =
            r#"{"error":{"type":"index_not_found_exception","reason":"no such index [logs]"},"status":404}"#;
        let client = Arc::new(MockTransport::with_search_reply(Reply::status(
            404,
            engine_error,
        )));
        let reporter = ErrorReporter::new(client, "logs");

        let mut out = Vec::new();
        let err = reporter.report(&mut out).await.unwrap_err();

        assert!(matches!(
            err,
            PipelineError::SearchError(SearchError::QueryError(_))
        ));
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("no such index [logs]"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_fatal() {
        let client = Arc::new(MockTransport::with_search_reply(Reply::fail(
            "connection refused",
        )));
        let reporter = ErrorReporter::new(client, "logs");

        let mut out = Vec::new();
        let err = reporter.report(&mut out).await.unwrap_err();

        assert!(matches!(
            err,
            PipelineError::SearchError(SearchError::TransportError(_))
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let client = Arc::new(MockTransport::with_search_reply(Reply::status(
            200,
            r#"{"took": 1, "shards": {}}"#,
        )));
        let reporter = ErrorReporter::new(client, "logs");

        let mut out = Vec::new();
        let err = reporter.report(&mut out).await.unwrap_err();

        assert!(matches!(
            err,
            PipelineError::SearchError(SearchError::ParseError(_))
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_search_request_shape() {
        let client = Arc::new(MockTransport::new());
        let reporter = ErrorReporter::new(client.clone(), "logs");

        reporter.fetch().await.unwrap();

        let requests = client.search_requests.lock().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].index, "logs");
        assert_eq!(
            requests[0].body,
            json!({"query": {"match": {"level": "ERROR"}}})
        );
        assert!(requests[0].track_total_hits);
        assert!(requests[0].pretty);
    }

    #[tokio::test]
    async fn test_custom_level() {
        let client = Arc::new(MockTransport::new());
        let reporter = ErrorReporter::new(client.clone(), "logs").with_level("WARN");

        reporter.fetch().await.unwrap();

        assert_eq!(reporter.level(), "WARN");
        let requests = client.search_requests.lock().await;
        assert_eq!(requests[0].body["query"]["match"]["level"], "WARN");
    }

    #[test]
    fn test_format_hit() {
        let hit = LogHit {
            service: "order-service".to_string(),
            message: "Failed to process order payment".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        };

        assert_eq!(
            format_hit(&hit),
            "Service: order-service, Message: Failed to process order payment, Timestamp: 2024-01-01T00:00:00Z"
        );
    }
}
