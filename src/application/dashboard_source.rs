// Source trait for dashboard search results
use crate::domain::dashboard::DashboardRecord;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Run one search and return every item, folders included
    async fn search(&self, query: &str) -> Result<Vec<DashboardRecord>>;
}
