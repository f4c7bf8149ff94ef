use apiclient::abstract_trait::website::DynWebsiteClient;
use apiclient::domain::response::site_config::Website;
use shared::errors::StoreError;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::store::HydrationState;

#[derive(Debug, Default)]
struct SiteState {
    website: Website,
    hydration: HydrationState,
}

/// Read-only snapshot of the backend-managed site profile, fetched once per
/// session. Admin flows that change the profile call [`SiteStore::refresh`]
/// explicitly.
pub struct SiteStore {
    websites: DynWebsiteClient,
    state: RwLock<SiteState>,
    hydrate_gate: Mutex<()>,
}

impl SiteStore {
    pub fn new(websites: DynWebsiteClient) -> Self {
        Self {
            websites,
            state: RwLock::new(SiteState::default()),
            hydrate_gate: Mutex::new(()),
        }
    }

    pub async fn website(&self) -> Website {
        self.state.read().await.website.clone()
    }

    pub async fn hydration_state(&self) -> HydrationState {
        self.state.read().await.hydration
    }

    pub async fn is_hydrated(&self) -> bool {
        self.state.read().await.hydration.is_hydrated()
    }

    pub async fn ensure_hydrated(&self) {
        if self.is_hydrated().await {
            return;
        }

        let _gate = self.hydrate_gate.lock().await;

        if self.state.read().await.hydration != HydrationState::Uninitialized {
            return;
        }

        self.state.write().await.hydration = HydrationState::Loading;

        info!("hydrating site profile");
        match self.websites.info().await {
            Ok(website) => {
                let mut state = self.state.write().await;
                state.website = website;
                state.hydration = HydrationState::Ready;
            }
            Err(err) => {
                warn!("site profile hydration failed: {err}");
                self.state.write().await.hydration = HydrationState::Failed;
            }
        }
    }

    /// Unconditional refetch, for flows that just changed the profile.
    pub async fn refresh(&self) -> Result<Website, StoreError> {
        let website = self.websites.info().await?;

        let mut state = self.state.write().await;
        state.website = website.clone();
        state.hydration = HydrationState::Ready;

        Ok(website)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::testing::StubWebsiteClient;

    #[tokio::test]
    async fn hydrates_once_and_caches_the_snapshot() {
        let stub = Arc::new(StubWebsiteClient::with_title("demo"));
        let store = SiteStore::new(stub.clone());

        store.ensure_hydrated().await;
        store.ensure_hydrated().await;

        assert_eq!(stub.info_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.website().await.title, "demo");
    }

    #[tokio::test]
    async fn failed_hydration_is_terminal_until_refresh() {
        let stub = Arc::new(StubWebsiteClient::failing());
        let store = SiteStore::new(stub.clone());

        store.ensure_hydrated().await;
        store.ensure_hydrated().await;
        assert_eq!(stub.info_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.hydration_state().await, HydrationState::Failed);

        stub.recover("back");
        store.refresh().await.unwrap();
        assert_eq!(store.website().await.title, "back");
        assert_eq!(store.hydration_state().await, HydrationState::Ready);
    }
}
