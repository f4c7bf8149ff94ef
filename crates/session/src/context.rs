use std::sync::Arc;

use anyhow::{Context, Result};
use apiclient::client::{RestClient, TokenCell};
use apiclient::di::DependenciesInject;
use dotenv::dotenv;
use prometheus_client::registry::Registry;
use shared::config::Config;
use shared::errors::{ClientError, ErrorResponse, StoreError};
use shared::utils::Metrics;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::guard::Guard;
use crate::storage::{DynDurableStore, FileStore};
use crate::store::{LayoutStore, SessionStore, SiteStore};

/// Composition root: owns the rest client, the typed API clients, the
/// client-side stores and the navigation guard. Everything downstream
/// receives explicit handles instead of reaching for globals.
pub struct AppContext {
    pub config: Config,
    pub api: DependenciesInject,
    pub session: Arc<SessionStore>,
    pub site: Arc<SiteStore>,
    pub layout: Arc<LayoutStore>,
    pub guard: Guard,
    pub metrics: Metrics,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppContext {
    pub async fn from_env() -> Result<Self> {
        dotenv().ok();

        let config = Config::init().context("Failed to load configuration")?;

        Self::new(config).await
    }

    pub async fn new(config: Config) -> Result<Self> {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register(&mut registry);

        let token = TokenCell::new();
        let client = Arc::new(
            RestClient::new(&config.http, token.clone(), metrics.clone())
                .context("Failed to build rest client")?,
        );
        let api = DependenciesInject::new(client);

        info!(
            "Opening durable client state at {}",
            config.storage.state_path.display()
        );
        let storage: DynDurableStore = Arc::new(
            FileStore::load(&config.storage.state_path)
                .await
                .context("Failed to open durable client state")?,
        );

        let session = SessionStore::load(api.user.clone(), token, storage.clone())
            .await
            .context("Failed to load session store")?;
        let site = Arc::new(SiteStore::new(api.website.clone()));
        let layout = LayoutStore::load(storage)
            .await
            .context("Failed to load layout store")?;
        let guard = Guard::new(session.clone(), layout.clone());

        Ok(Self {
            config,
            api,
            session,
            site,
            layout,
            guard,
            metrics,
            registry: Arc::new(Mutex::new(registry)),
        })
    }

    /// Central handling for API failures, returning the shape the UI
    /// renders. A `reload`-flagged envelope means the backend invalidated
    /// the session: local credentials are dropped and the login affordance
    /// raised before the error is handed back.
    pub async fn handle_api_error(&self, err: &ClientError) -> Result<ErrorResponse, StoreError> {
        if err.requires_relogin() {
            error!("backend invalidated the session: {err}");
            self.session.reset().await?;
            self.layout.open_login_prompt();
        }

        Ok(ErrorResponse::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::{HttpConfig, StorageConfig};
    use std::time::Duration;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            http: HttpConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                timeout: Duration::from_secs(1),
                user_agent: None,
            },
            storage: StorageConfig {
                state_path: dir.join("state.json"),
            },
        }
    }

    #[tokio::test]
    async fn reload_flagged_error_drops_session_and_prompts_login() {
        let dir = tempfile::tempdir().unwrap();
        let context = AppContext::new(test_config(dir.path())).await.unwrap();

        let err = ClientError::Api {
            code: 7,
            message: "session invalidated".to_string(),
            reload: true,
        };

        let rendered = context.handle_api_error(&err).await.unwrap();
        assert_eq!(rendered.status, "fail");
        assert_eq!(rendered.message, "session invalidated");

        let flags = context.layout.flags();
        assert!(flags.popover_visible);
        assert!(flags.login_visible);
        assert!(!context.session.ever_logged_in().await);
    }

    #[tokio::test]
    async fn ordinary_errors_leave_the_session_alone() {
        let dir = tempfile::tempdir().unwrap();
        let context = AppContext::new(test_config(dir.path())).await.unwrap();

        let err = ClientError::api(1, "title already taken");
        let rendered = context.handle_api_error(&err).await.unwrap();

        assert_eq!(rendered.status, "fail");
        assert!(!context.layout.flags().login_visible);
    }
}
