use crate::error::{LedgerError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const TOKEN_KEY: &str = "ALERT_RULES_READ_ONLY_API_KEY";
pub const DEFAULT_GRAFANA_HOST: &str = "https://nodeinfra.grafana.net";
pub const DEFAULT_OUTPUT_PATH: &str = "[Detect] Dashboard 장부.csv";

/// Startup configuration handed to the export pipeline.
///
/// Keys are flat and lowercased by the `config` crate, so `GRAFANA_HOST` in
/// the environment and `grafana_host` in the settings file address the same
/// value.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(rename = "alert_rules_read_only_api_key", default)]
    pub api_token: String,
    pub grafana_host: String,
    #[serde(rename = "grafana_search_query", default)]
    pub search_query: String,
    #[serde(rename = "dashboard_ledger_output")]
    pub output_path: PathBuf,
}

impl AppConfig {
    /// Load from the settings file, the env file and the process environment
    pub fn load(settings_file: &str, env_file: &Path) -> Result<Self> {
        let process_env = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::load_from(settings_file, env_file, process_env)
    }

    /// Same as [`AppConfig::load`] with an explicit process environment.
    ///
    /// Precedence, lowest first: defaults, settings file (optional), env file
    /// (required), process environment.
    pub fn load_from(
        settings_file: &str,
        env_file: &Path,
        process_env: config::Map<String, String>,
    ) -> Result<Self> {
        let env_file_vars = read_env_file(env_file)?;

        let settings = config::Config::builder()
            .set_default("grafana_host", DEFAULT_GRAFANA_HOST)?
            .set_default("grafana_search_query", "")?
            .set_default("dashboard_ledger_output", DEFAULT_OUTPUT_PATH)?
            .add_source(config::File::with_name(settings_file).required(false))
            .add_source(config::Environment::default().source(Some(env_file_vars)))
            .add_source(config::Environment::default().source(Some(process_env)))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(LedgerError::Config(format!("{} is missing or empty", TOKEN_KEY)));
        }

        if !(self.grafana_host.starts_with("https://") || self.grafana_host.starts_with("http://")) {
            return Err(LedgerError::Config(format!(
                "Grafana host must start with http:// or https://, got '{}'",
                self.grafana_host
            )));
        }

        Ok(())
    }
}

// Parse the env file without touching the process environment
fn read_env_file(path: &Path) -> Result<config::Map<String, String>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        LedgerError::Config(format!("failed to load env file {}: {}", path.display(), e))
    })?;

    iter.map(|item| {
        item.map_err(|e| {
            LedgerError::Config(format!("invalid entry in env file {}: {}", path.display(), e))
        })
    })
    .collect()
}
