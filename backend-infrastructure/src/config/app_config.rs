use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{RuntimeConfig, StoreConfig};

pub const CONFIG_ENV: &str = "TAGTRAIL_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    /// Empty string keeps the store in memory.
    pub data_path: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_list_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            data_path: "./data/store.json".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            default_list_limit: 100,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(Path::new(&path)).await
    }

    pub async fn load_from(file_path: &Path) -> Result<Self> {
        let base_dir = file_path.parent();
        let mut config: AppConfig = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str(&content)?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        self.data_path = self.data_path.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.data_path = resolve_path(base, &self.data_path);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.default_list_limit == 0 {
            return Err(anyhow!("default_list_limit must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            default_list_limit: self.default_list_limit,
        }
    }

    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig {
            data_path: if self.data_path.is_empty() {
                None
            } else {
                Some(self.data_path.clone())
            },
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("TAGTRAIL_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("TAGTRAIL_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("TAGTRAIL_DATA_PATH") {
            self.data_path = value;
        }
        if let Ok(value) = env::var("TAGTRAIL_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("TAGTRAIL_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("TAGTRAIL_DEFAULT_LIST_LIMIT") {
            self.default_list_limit = value.parse().unwrap_or(self.default_list_limit);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
