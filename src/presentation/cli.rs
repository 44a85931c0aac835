// Command-line arguments and user-facing output
use crate::application::ledger_service::ExportSummary;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Export Grafana dashboards to a CSV ledger", long_about = None)]
pub struct Args {
    /// Env file holding ALERT_RULES_READ_ONLY_API_KEY
    #[arg(long, value_name = "PATH", default_value = ".env")]
    pub env_file: PathBuf,

    /// Optional settings file, without extension
    #[arg(long, value_name = "PATH", default_value = "config/ledger")]
    pub settings: String,

    /// Search query; overrides GRAFANA_SEARCH_QUERY
    #[arg(long)]
    pub query: Option<String>,

    /// Report path; overrides DASHBOARD_LEDGER_OUTPUT
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn status_line(summary: &ExportSummary) -> String {
    format!(
        "Exported {} dashboards ({} search results) to {} successfully.",
        summary.exported,
        summary.fetched,
        summary.output_path.display()
    )
}
