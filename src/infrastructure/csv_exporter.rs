// CSV report writer
use crate::domain::dashboard::DashboardRecord;
use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column order consumed by downstream tooling; do not reorder
pub const HEADER: [&str; 5] = ["Folder", "Title", "Tags", "UID", "URL"];

/// Write the header plus one row per dashboard, then flush the sink
pub fn write_report<W: Write>(sink: W, dashboards: &[DashboardRecord], host: &str) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(HEADER)?;

    for dashboard in dashboards {
        writer.write_record([
            dashboard.folder_title.as_str(),
            dashboard.title.as_str(),
            dashboard.joined_tags().as_str(),
            dashboard.uid.as_str(),
            dashboard.absolute_url(host).as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the report into it
pub fn export_to_file(path: &Path, dashboards: &[DashboardRecord], host: &str) -> Result<()> {
    let file = File::create(path)?;
    write_report(file, dashboards, host)?;
    tracing::debug!("Wrote {} rows to {}", dashboards.len(), path.display());
    Ok(())
}
