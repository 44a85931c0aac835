// Grafana search API client
use crate::application::dashboard_source::DashboardSource;
use crate::domain::dashboard::DashboardRecord;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Clone)]
pub struct GrafanaClient {
    client: reqwest::Client,
    host: String,
    token: String,
}

impl GrafanaClient {
    pub fn new(host: String, token: String) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(LedgerError::Config(
                "Grafana API token is missing or empty".to_string(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            host: host.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn build_search_url(&self, query: &str) -> String {
        format!("{}/api/search?query={}", self.host, urlencoding::encode(query))
    }

    /// Issue the search request and return the raw body of a 200 response
    pub async fn fetch(&self, query: &str) -> Result<Vec<u8>> {
        let url = self.build_search_url(query);
        tracing::debug!("Fetching dashboards from {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::HttpStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Decode a search response body; fails on any malformed item
pub fn decode_search_results(body: &[u8]) -> Result<Vec<DashboardRecord>> {
    Ok(serde_json::from_slice(body)?)
}

#[async_trait]
impl DashboardSource for GrafanaClient {
    async fn search(&self, query: &str) -> Result<Vec<DashboardRecord>> {
        let body = self.fetch(query).await?;
        let records = decode_search_results(&body)?;
        tracing::debug!("Decoded {} search results", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const SEARCH_BODY: &str = r#"[
        {"id":1,"uid":"a1","title":"A","tags":["x","y"],"url":"/d/a1","type":"dash-db","folderTitle":"F1"},
        {"id":2,"uid":"f1","title":"Folder","tags":[],"url":"/dashboards/f/f1","type":"dash-folder","folderTitle":""}
    ]"#;

    #[test]
    fn test_empty_token_is_config_error() {
        let err = GrafanaClient::new("https://grafana.example.com".into(), "  ".into()).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_build_search_url() {
        let client = GrafanaClient::new("https://grafana.example.com/".into(), "t".into()).unwrap();
        assert_eq!(client.build_search_url(""), "https://grafana.example.com/api/search?query=");
        assert_eq!(
            client.build_search_url("node exporter"),
            "https://grafana.example.com/api/search?query=node%20exporter"
        );
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_search_results(br#"{"message":"Unauthorized"}"#).unwrap_err();
        assert!(matches!(err, LedgerError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_sends_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/search")
                    .query_param_exists("query")
                    .header("Authorization", "Bearer secret-token");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(SEARCH_BODY);
            })
            .await;

        let client = GrafanaClient::new(server.base_url(), "secret-token".into()).unwrap();
        let records = client.search("").await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].uid, "a1");
        assert_eq!(records[1].kind, "dash-folder");
    }

    #[tokio::test]
    async fn test_non_200_is_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/search");
                then.status(500).body("internal error");
            })
            .await;

        let client = GrafanaClient::new(server.base_url(), "t".into()).unwrap();
        let err = client.fetch("").await.unwrap_err();

        match err {
            LedgerError::HttpStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/search");
                then.status(200).body("[{\"id\":1}]");
            })
            .await;

        let client = GrafanaClient::new(server.base_url(), "t".into()).unwrap();
        let err = client.search("").await.unwrap_err();
        assert!(matches!(err, LedgerError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = GrafanaClient::new(format!("http://127.0.0.1:{port}"), "t".into()).unwrap();
        let err = client.fetch("").await.unwrap_err();
        assert!(matches!(err, LedgerError::Network(_)));
    }
}
