use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl HttpConfig {
    pub fn init() -> Result<Self> {
        let base_url = std::env::var("API_BASE_URL")
            .context("Missing environment variable: API_BASE_URL")?;

        let timeout_secs = match std::env::var("API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow!("API_TIMEOUT_SECS must be an integer, got '{raw}'"))?,
            Err(_) => 30,
        };

        let user_agent = std::env::var("API_USER_AGENT").ok();

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
        })
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub state_path: PathBuf,
}

impl StorageConfig {
    pub fn init() -> Result<Self> {
        let state_path = std::env::var("CLIENT_STATE_FILE")
            .unwrap_or_else(|_| "./client_state.json".to_string());

        Ok(Self {
            state_path: PathBuf::from(state_path),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub http: HttpConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let http = HttpConfig::init().context("Failed to load http client configuration")?;
        let storage = StorageConfig::init().context("Failed to load storage configuration")?;

        Ok(Self { http, storage })
    }
}
