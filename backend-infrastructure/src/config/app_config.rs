use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{DbConfig, RuntimeConfig};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
    pub carbon_api_url: String,
    /// Bearer credential for the estimation service. Injected via config
    /// file or `CARBON_API_KEY`, never checked in.
    pub carbon_api_key: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub estimate_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            clickhouse_url: "http://127.0.0.1:8123".to_string(),
            clickhouse_database: "carbon".to_string(),
            clickhouse_user: None,
            clickhouse_password: None,
            carbon_api_url: "https://www.carboninterface.com/api/v1".to_string(),
            carbon_api_key: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            estimate_timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("CARBON_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(user) = &self.clickhouse_user {
            if user.trim().is_empty() {
                self.clickhouse_user = None;
            }
        }
        if let Some(password) = &self.clickhouse_password {
            if password.trim().is_empty() {
                self.clickhouse_password = None;
            }
        }
        if let Some(api_key) = &self.carbon_api_key {
            if api_key.trim().is_empty() {
                self.carbon_api_key = None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.clickhouse_url.trim().is_empty() {
            return Err(anyhow!("clickhouse_url must not be empty"));
        }
        if self.carbon_api_url.trim().is_empty() {
            return Err(anyhow!("carbon_api_url must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 || self.estimate_timeout_seconds == 0 {
            return Err(anyhow!("timeouts must be greater than 0"));
        }
        if self.carbon_api_key.is_none() {
            warn!("carbon_api_key not configured, estimation endpoints will fail");
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            carbon_api_url: self.carbon_api_url.clone(),
            carbon_api_key: self.carbon_api_key.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            estimate_timeout_seconds: self.estimate_timeout_seconds,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            clickhouse_url: self.clickhouse_url.clone(),
            clickhouse_database: self.clickhouse_database.clone(),
            clickhouse_user: self.clickhouse_user.clone(),
            clickhouse_password: self.clickhouse_password.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("CARBON_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("CARBON_CLICKHOUSE_URL") {
            self.clickhouse_url = value;
        }
        if let Ok(value) = env::var("CARBON_CLICKHOUSE_DATABASE") {
            self.clickhouse_database = value;
        }
        if let Ok(value) = env::var("CARBON_CLICKHOUSE_USER") {
            self.clickhouse_user = Some(value);
        }
        if let Ok(value) = env::var("CARBON_CLICKHOUSE_PASSWORD") {
            self.clickhouse_password = Some(value);
        }
        if let Ok(value) = env::var("CARBON_API_URL") {
            self.carbon_api_url = value;
        }
        if let Ok(value) = env::var("CARBON_API_KEY") {
            self.carbon_api_key = Some(value);
        }
    }
}
