use std::sync::Arc;

use tracing::warn;

use crate::store::{LayoutStore, SessionStore};

/// Route the guard redirects to when a blocked visitor accepts the
/// re-login prompt.
pub const ENTRY_ROUTE: &str = "index";

/// Authorization requirements a route declares. `requires_admin` implies
/// `requires_auth`, matching nested route metadata in the frontends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub name: String,
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_auth: false,
            requires_admin: false,
        }
    }

    pub fn auth(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_auth: true,
            requires_admin: false,
        }
    }

    pub fn admin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_auth: true,
            requires_admin: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Complete the navigation.
    Allow,
    /// Block and prompt for re-login; on accept the caller redirects to
    /// [`ENTRY_ROUTE`], on decline it returns to the previous route.
    RequireLogin,
    /// Block with a permission-denied prompt and return to the previous
    /// route.
    Forbidden,
}

/// Pure classification of a navigation target against the hydrated session.
pub fn classify(route: &RouteMeta, logged_in: bool, admin: bool) -> GuardDecision {
    if !route.requires_auth && !route.requires_admin {
        return GuardDecision::Allow;
    }

    if !logged_in {
        return GuardDecision::RequireLogin;
    }

    if route.requires_admin && !admin {
        return GuardDecision::Forbidden;
    }

    GuardDecision::Allow
}

/// Pre-navigation interceptor: hydrates the session lazily, then applies
/// the route's auth/role requirements.
pub struct Guard {
    session: Arc<SessionStore>,
    layout: Arc<LayoutStore>,
}

impl Guard {
    pub fn new(session: Arc<SessionStore>, layout: Arc<LayoutStore>) -> Self {
        Self { session, layout }
    }

    pub async fn before_navigation(&self, to: &RouteMeta) -> GuardDecision {
        self.session.ensure_hydrated().await;

        let decision = classify(
            to,
            self.session.is_logged_in().await,
            self.session.is_admin().await,
        );

        match decision {
            GuardDecision::RequireLogin => {
                warn!("blocked navigation to {}: login required", to.name);
            }
            GuardDecision::Forbidden => {
                warn!("blocked navigation to {}: admin role required", to.name);
            }
            GuardDecision::Allow => {}
        }

        decision
    }

    /// The visitor accepted the re-login prompt: raise the login affordance
    /// and hand back the redirect target.
    pub fn accept_login_prompt(&self) -> &'static str {
        self.layout.open_login_prompt();
        ENTRY_ROUTE
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use apiclient::client::TokenCell;
    use crate::roles::{ROLE_ADMIN, ROLE_USER};
    use crate::storage::{DurableStore, DynDurableStore, MemoryStore, keys};
    use crate::testing::{StubUserClient, user_with_role};

    #[test]
    fn public_routes_never_block() {
        let route = RouteMeta::public("index");
        assert_eq!(classify(&route, false, false), GuardDecision::Allow);
        assert_eq!(classify(&route, true, true), GuardDecision::Allow);
    }

    #[test]
    fn auth_routes_block_anonymous_visitors() {
        let route = RouteMeta::auth("dashboard");
        assert_eq!(classify(&route, false, false), GuardDecision::RequireLogin);
        assert_eq!(classify(&route, true, false), GuardDecision::Allow);
    }

    #[test]
    fn admin_routes_reject_non_admins() {
        let route = RouteMeta::admin("user-list");
        assert_eq!(classify(&route, false, false), GuardDecision::RequireLogin);
        assert_eq!(classify(&route, true, false), GuardDecision::Forbidden);
        assert_eq!(classify(&route, true, true), GuardDecision::Allow);
    }

    async fn guard_with(
        stub: std::sync::Arc<StubUserClient>,
        ever_logged_in: bool,
    ) -> Guard {
        let storage: DynDurableStore = Arc::new(MemoryStore::new());
        if ever_logged_in {
            storage.set(keys::EVER_LOGGED_IN, "true").await.unwrap();
        }

        let session = crate::store::SessionStore::load(stub, TokenCell::new(), storage.clone())
            .await
            .unwrap();
        let layout = crate::store::LayoutStore::load(storage).await.unwrap();

        Guard::new(session, layout)
    }

    #[tokio::test]
    async fn admin_route_without_prior_login_redirects_without_network() {
        let stub = Arc::new(StubUserClient::with_profile(user_with_role(ROLE_ADMIN)));
        let guard = guard_with(stub.clone(), false).await;

        let decision = guard
            .before_navigation(&RouteMeta::admin("user-list"))
            .await;

        assert_eq!(decision, GuardDecision::RequireLogin);
        assert_eq!(stub.info_calls.load(Ordering::SeqCst), 0);

        assert_eq!(guard.accept_login_prompt(), ENTRY_ROUTE);
        let flags = guard.layout.flags();
        assert!(flags.popover_visible);
        assert!(flags.login_visible);
    }

    #[tokio::test]
    async fn hydrated_non_admin_never_enters_admin_route() {
        let stub = Arc::new(StubUserClient::with_profile(user_with_role(ROLE_USER)));
        let guard = guard_with(stub, true).await;

        let decision = guard
            .before_navigation(&RouteMeta::admin("user-list"))
            .await;

        assert_eq!(decision, GuardDecision::Forbidden);
    }

    #[tokio::test]
    async fn hydrated_admin_passes_admin_route() {
        let stub = Arc::new(StubUserClient::with_profile(user_with_role(ROLE_ADMIN)));
        let guard = guard_with(stub, true).await;

        let decision = guard
            .before_navigation(&RouteMeta::admin("user-list"))
            .await;

        assert_eq!(decision, GuardDecision::Allow);
    }

    #[tokio::test]
    async fn hydration_failure_degrades_to_anonymous() {
        let stub = Arc::new(StubUserClient::failing());
        let guard = guard_with(stub, true).await;

        let decision = guard
            .before_navigation(&RouteMeta::auth("dashboard"))
            .await;

        assert_eq!(decision, GuardDecision::RequireLogin);
    }
}
