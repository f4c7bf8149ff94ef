use std::sync::Arc;

use apiclient::abstract_trait::user::DynUserClient;
use apiclient::client::TokenCell;
use apiclient::domain::requests::user::{LoginRequest, RegisterRequest};
use apiclient::domain::response::user::{LoginResponse, User};
use shared::errors::StoreError;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::roles::{ROLE_GUEST, is_admin_role, role_name};
use crate::storage::{DynDurableStore, keys};
use crate::store::HydrationState;

#[derive(Debug, Default)]
struct SessionState {
    user: User,
    ever_logged_in: bool,
    hydration: HydrationState,
}

/// The authenticated user's client-side session. Hydration is lazy and
/// single-flight: the first `ensure_hydrated` performs at most one profile
/// fetch, later calls (and concurrent racers) observe the settled state.
pub struct SessionStore {
    users: DynUserClient,
    token: TokenCell,
    storage: DynDurableStore,
    state: RwLock<SessionState>,
    hydrate_gate: Mutex<()>,
}

impl SessionStore {
    pub async fn load(
        users: DynUserClient,
        token: TokenCell,
        storage: DynDurableStore,
    ) -> Result<Arc<Self>, StoreError> {
        let ever_logged_in = matches!(
            storage.get(keys::EVER_LOGGED_IN).await?.as_deref(),
            Some("true")
        );

        Ok(Arc::new(Self {
            users,
            token,
            storage,
            state: RwLock::new(SessionState {
                ever_logged_in,
                ..SessionState::default()
            }),
            hydrate_gate: Mutex::new(()),
        }))
    }

    pub async fn hydration_state(&self) -> HydrationState {
        self.state.read().await.hydration
    }

    pub async fn is_hydrated(&self) -> bool {
        self.state.read().await.hydration.is_hydrated()
    }

    pub async fn user(&self) -> User {
        self.state.read().await.user.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.state.read().await.user.role_id != ROLE_GUEST
    }

    pub async fn is_admin(&self) -> bool {
        is_admin_role(self.state.read().await.user.role_id)
    }

    pub async fn ever_logged_in(&self) -> bool {
        self.state.read().await.ever_logged_in
    }

    /// Runs the lazy hydration at most once per session lifetime. The
    /// profile fetch only happens when a previous run of the process logged
    /// in; otherwise the session settles anonymous without touching the
    /// network. A failed fetch still counts as a completed attempt.
    pub async fn ensure_hydrated(&self) {
        if self.is_hydrated().await {
            return;
        }

        let _gate = self.hydrate_gate.lock().await;

        // Racers queue on the gate; whoever got in first already settled it.
        let ever_logged_in = {
            let state = self.state.read().await;
            if state.hydration != HydrationState::Uninitialized {
                return;
            }
            state.ever_logged_in
        };

        self.state.write().await.hydration = HydrationState::Loading;

        if !ever_logged_in {
            debug!("no prior login, settling anonymous session without a fetch");
            let mut state = self.state.write().await;
            state.user = User::default();
            state.hydration = HydrationState::Ready;
            return;
        }

        info!("hydrating session from the user profile endpoint");
        match self.users.info().await {
            Ok(user) => {
                let mut state = self.state.write().await;
                state.user = user;
                state.hydration = HydrationState::Ready;
            }
            Err(err) => {
                warn!("session hydration failed: {err}");
                self.state.write().await.hydration = HydrationState::Failed;
            }
        }
    }

    pub async fn login(&self, input: &LoginRequest) -> Result<User, StoreError> {
        let response = self.users.login(input).await?;
        self.establish(response).await
    }

    pub async fn register(&self, input: &RegisterRequest) -> Result<User, StoreError> {
        let response = self.users.register(input).await?;
        self.establish(response).await
    }

    async fn establish(&self, response: LoginResponse) -> Result<User, StoreError> {
        self.token.set(response.access_token);
        self.storage.set(keys::EVER_LOGGED_IN, "true").await?;

        let mut state = self.state.write().await;
        state.user = response.user;
        state.ever_logged_in = true;
        state.hydration = HydrationState::Ready;

        info!(
            "session established for {} ({})",
            state.user.username,
            role_name(state.user.role_id)
        );

        Ok(state.user.clone())
    }

    /// Logs out on the backend (best effort) and always drops the local
    /// session, durable flags included.
    pub async fn logout(&self) -> Result<(), StoreError> {
        if let Err(err) = self.users.logout().await {
            warn!("backend logout failed, clearing local session anyway: {err}");
        }

        self.reset().await
    }

    /// Drops every trace of the session: profile, access token, durable
    /// flags. Hydration returns to `Uninitialized` so a later login starts
    /// from a clean slate.
    pub async fn reset(&self) -> Result<(), StoreError> {
        self.token.clear();
        self.storage.clear().await?;

        let mut state = self.state.write().await;
        *state = SessionState::default();

        info!("session reset");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::roles::{ROLE_ADMIN, ROLE_USER};
    use crate::storage::{DurableStore, MemoryStore};
    use crate::testing::{StubUserClient, user_with_role};

    async fn store_with(
        stub: Arc<StubUserClient>,
        ever_logged_in: bool,
    ) -> (Arc<SessionStore>, DynDurableStore) {
        let storage: DynDurableStore = Arc::new(MemoryStore::new());
        if ever_logged_in {
            storage.set(keys::EVER_LOGGED_IN, "true").await.unwrap();
        }

        let session = SessionStore::load(stub, TokenCell::new(), storage.clone())
            .await
            .unwrap();

        (session, storage)
    }

    #[tokio::test]
    async fn anonymous_session_hydrates_without_network() {
        let stub = Arc::new(StubUserClient::with_profile(user_with_role(ROLE_USER)));
        let (session, _storage) = store_with(stub.clone(), false).await;

        session.ensure_hydrated().await;

        assert_eq!(stub.info_calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.hydration_state().await, HydrationState::Ready);
        assert!(!session.is_logged_in().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn hydration_is_single_flight_under_concurrent_navigation() {
        let stub = Arc::new(StubUserClient::with_profile(user_with_role(ROLE_USER)));
        let (session, _storage) = store_with(stub.clone(), true).await;

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let session = session.clone();
            tasks.push(tokio::spawn(async move {
                session.ensure_hydrated().await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(stub.info_calls.load(Ordering::SeqCst), 1);
        assert!(session.is_logged_in().await);
    }

    #[tokio::test]
    async fn repeated_navigation_never_rehydrates() {
        let stub = Arc::new(StubUserClient::with_profile(user_with_role(ROLE_USER)));
        let (session, _storage) = store_with(stub.clone(), true).await;

        for _ in 0..5 {
            session.ensure_hydrated().await;
        }

        assert_eq!(stub.info_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_hydration_still_counts_as_hydrated() {
        let stub = Arc::new(StubUserClient::failing());
        let (session, _storage) = store_with(stub.clone(), true).await;

        session.ensure_hydrated().await;
        session.ensure_hydrated().await;

        assert_eq!(stub.info_calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.hydration_state().await, HydrationState::Failed);
        assert!(session.is_hydrated().await);
        assert!(!session.is_logged_in().await);
    }

    #[tokio::test]
    async fn login_establishes_session_and_logout_clears_it() {
        let stub = Arc::new(StubUserClient::with_profile(user_with_role(ROLE_ADMIN)));
        let (session, storage) = store_with(stub.clone(), false).await;

        let user = session.login(&crate::testing::login_request()).await.unwrap();
        assert_eq!(user.role_id, ROLE_ADMIN);
        assert!(session.is_logged_in().await);
        assert!(session.is_admin().await);
        assert!(session.ever_logged_in().await);
        assert_eq!(
            storage.get(keys::EVER_LOGGED_IN).await.unwrap().as_deref(),
            Some("true")
        );

        session.logout().await.unwrap();

        assert_eq!(stub.logout_calls.load(Ordering::SeqCst), 1);
        assert!(!session.is_logged_in().await);
        assert!(!session.ever_logged_in().await);
        assert_eq!(storage.get(keys::EVER_LOGGED_IN).await.unwrap(), None);
    }

    #[tokio::test]
    async fn reset_returns_hydration_to_uninitialized() {
        let stub = Arc::new(StubUserClient::with_profile(user_with_role(ROLE_USER)));
        let (session, _storage) = store_with(stub.clone(), true).await;

        session.ensure_hydrated().await;
        session.reset().await.unwrap();

        assert_eq!(
            session.hydration_state().await,
            HydrationState::Uninitialized
        );

        // ever_logged_in was cleared, so re-hydration stays offline.
        session.ensure_hydrated().await;
        assert_eq!(stub.info_calls.load(Ordering::SeqCst), 1);
    }
}
