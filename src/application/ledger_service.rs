// Ledger service - Use case for exporting the dashboard inventory
use crate::application::dashboard_source::DashboardSource;
use crate::application::filter::filter_dashboards;
use crate::error::Result;
use crate::infrastructure::csv_exporter::export_to_file;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub fetched: usize,
    pub exported: usize,
    pub output_path: PathBuf,
}

#[derive(Clone)]
pub struct LedgerService {
    source: Arc<dyn DashboardSource>,
    host: String,
}

impl LedgerService {
    pub fn new(source: Arc<dyn DashboardSource>, host: String) -> Self {
        Self { source, host }
    }

    /// Fetch, filter and export. The report file is only created once the
    /// search has succeeded.
    pub async fn run(&self, query: &str, output_path: &Path) -> Result<ExportSummary> {
        let records = self.source.search(query).await?;
        let fetched = records.len();

        let dashboards = filter_dashboards(records);
        tracing::info!(
            "Search returned {} items, {} of them dashboards",
            fetched,
            dashboards.len()
        );

        export_to_file(output_path, &dashboards, &self.host)?;

        Ok(ExportSummary {
            fetched,
            exported: dashboards.len(),
            output_path: output_path.to_path_buf(),
        })
    }
}
