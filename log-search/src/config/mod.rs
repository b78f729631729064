//! Configuration for a log search run.

mod dependencies;

pub use dependencies::Dependencies;

use clap::Parser;

/// Used when no engine URL is configured.
pub const DEFAULT_ELASTICSEARCH_URL: &str = "http://localhost:9200";

/// Index the sample entries are written to and queried from.
pub const DEFAULT_INDEX_NAME: &str = "logs";

/// Level the report looks for.
pub const DEFAULT_QUERY_LEVEL: &str = "ERROR";

/// Command line and environment configuration.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "log-search")]
#[command(about = "Index sample service logs and report the error-level entries", long_about = None)]
pub struct LogSearchConfig {
    /// Search engine URL
    #[arg(long, env = "ELASTICSEARCH_URL", default_value = DEFAULT_ELASTICSEARCH_URL)]
    pub url: String,

    /// Index to write to and query
    #[arg(long, env = "LOG_SEARCH_INDEX", default_value = DEFAULT_INDEX_NAME)]
    pub index: String,

    /// Level to report
    #[arg(long, env = "LOG_SEARCH_LEVEL", default_value = DEFAULT_QUERY_LEVEL)]
    pub level: String,

    /// Only run the query against existing data
    #[arg(long)]
    pub skip_ingest: bool,
}

impl Default for LogSearchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ELASTICSEARCH_URL.to_string(),
            index: DEFAULT_INDEX_NAME.to_string(),
            level: DEFAULT_QUERY_LEVEL.to_string(),
            skip_ingest: false,
        }
    }
}
