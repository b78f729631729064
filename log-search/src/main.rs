//! Log Search binary.
//!
//! Indexes the sample service logs and prints the entries of the configured
//! level. Any fatal error exits with status 1.

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use std::io;
use tracing::{error, info};

use log_search::samples::sample_entries;
use log_search::{run, AppError, Dependencies, LogSearchConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = LogSearchConfig::parse();

    if let Err(e) = run_with_config(&config).await {
        error!("Run failed: {}", e);
        eprintln!("Error: {}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  Caused by: {}", err);
            source = err.source();
        }

        std::process::exit(1);
    }
}

async fn run_with_config(config: &LogSearchConfig) -> Result<(), AppError> {
    let deps = Dependencies::new(config)?;
    let entries = sample_entries(Utc::now());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run(&deps, &entries, &mut out).await?;

    info!(hits = summary.report.hits.len(), "Run completed");
    Ok(())
}
