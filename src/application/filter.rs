// Keep dashboards, drop folders
use crate::domain::dashboard::DashboardRecord;

pub fn filter_dashboards(records: Vec<DashboardRecord>) -> Vec<DashboardRecord> {
    records.into_iter().filter(DashboardRecord::is_dashboard).collect()
}
