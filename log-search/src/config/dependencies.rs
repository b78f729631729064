//! Dependency initialization and wiring for a log search run.

use std::sync::Arc;
use tracing::info;

use super::LogSearchConfig;
use crate::AppError;
use log_search_pipeline::{ErrorReporter, LogIngestor};
use log_search_repository::{OpenSearchClient, SearchEngineTransport};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Writes log entries to the index.
    pub ingestor: LogIngestor,
    /// Queries the index and prints the report.
    pub reporter: ErrorReporter,
    /// Whether the ingest stage is skipped.
    pub skip_ingest: bool,
}

impl Dependencies {
    /// Initialize all dependencies from the configuration.
    ///
    /// The URL is handed to the client as-is. Nothing is sent to the engine
    /// until the run starts.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the client cannot be created
    pub fn new(config: &LogSearchConfig) -> Result<Self, AppError> {
        info!(
            url = %config.url,
            index = %config.index,
            level = %config.level,
            "Initializing dependencies"
        );

        let client = OpenSearchClient::new(&config.url).map_err(|e| {
            AppError::config(format!("Error creating the search engine client: {}", e))
        })?;

        Ok(Self::with_transport(Arc::new(client), config))
    }

    /// Wire the pipeline around an existing transport.
    pub fn with_transport(
        transport: Arc<dyn SearchEngineTransport>,
        config: &LogSearchConfig,
    ) -> Self {
        let ingestor = LogIngestor::new(transport.clone(), config.index.as_str());
        let reporter =
            ErrorReporter::new(transport, config.index.as_str()).with_level(config.level.as_str());

        Self {
            ingestor,
            reporter,
            skip_ingest: config.skip_ingest,
        }
    }
}
