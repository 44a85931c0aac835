// Main entry point - Configuration, wiring and exit status
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::ledger_service::{ExportSummary, LedgerService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::grafana_client::GrafanaClient;
use crate::presentation::cli::{status_line, Args};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the status line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let summary = run(args)
        .await
        .inspect_err(|e| tracing::error!("Dashboard export failed: {}", e))?;

    println!("{}", status_line(&summary));
    Ok(())
}

async fn run(args: Args) -> error::Result<ExportSummary> {
    let config = AppConfig::load(&args.settings, &args.env_file)?;
    export(config, args.query, args.output).await
}

async fn export(
    config: AppConfig,
    query: Option<String>,
    output: Option<PathBuf>,
) -> error::Result<ExportSummary> {
    let client = GrafanaClient::new(config.grafana_host.clone(), config.api_token)?;
    let service = LedgerService::new(Arc::new(client), config.grafana_host);

    let query = query.unwrap_or(config.search_query);
    let output = output.unwrap_or(config.output_path);
    tracing::info!("Exporting dashboards matching '{}' to {}", query, output.display());

    service.run(&query, &output).await
}
