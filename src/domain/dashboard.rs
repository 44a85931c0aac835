// Dashboard domain model
use serde::{Deserialize, Deserializer};

/// Search result `type` marking a real dashboard (folders use `dash-folder`)
pub const DASHBOARD_TYPE: &str = "dash-db";

/// One item of the Grafana search API response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRecord {
    pub id: i64,
    pub uid: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_title: String,
}

impl DashboardRecord {
    pub fn is_dashboard(&self) -> bool {
        self.kind == DASHBOARD_TYPE
    }

    pub fn joined_tags(&self) -> String {
        self.tags.join(",")
    }

    /// Resolve the relative `url` against the Grafana host
    pub fn absolute_url(&self, host: &str) -> String {
        format!("{}{}", host.trim_end_matches('/'), self.url)
    }
}

// Grafana sends `null` instead of omitting some fields
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
