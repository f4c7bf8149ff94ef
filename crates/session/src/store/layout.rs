use serde::{Deserialize, Serialize};
use shared::errors::StoreError;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::storage::{DynDurableStore, keys};

/// Dashboard tables whose views are refreshed after a mutation elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Images,
    Articles,
    Comments,
    FriendLinks,
    Advertisements,
    Feedback,
}

/// Pinned dashboard navigation tab, persisted across restarts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NavTag {
    pub title: String,
    pub name: String,
}

/// Ephemeral visibility flags for modal/popover affordances.
#[derive(Clone, Debug, Default)]
pub struct Flags {
    pub popover_visible: bool,
    pub login_visible: bool,
    pub register_visible: bool,
    pub forgot_password_visible: bool,
    pub password_reset_visible: bool,
    pub article_create_visible: bool,
    pub article_update_visible: bool,
    pub feedback_reply_visible: bool,
}

#[derive(Debug, Default)]
struct LayoutState {
    flags: Flags,
    collapsed: bool,
    nav_tags: Vec<NavTag>,
    pending_refresh: HashSet<Table>,
}

/// UI chrome state. Visibility flags are ephemeral; the sidebar collapse
/// flag and navigation tabs persist through the durable store.
pub struct LayoutStore {
    storage: DynDurableStore,
    state: RwLock<LayoutState>,
}

fn default_nav_tags() -> Vec<NavTag> {
    vec![NavTag {
        title: "Home".to_string(),
        name: "home".to_string(),
    }]
}

impl LayoutStore {
    pub async fn load(storage: DynDurableStore) -> Result<Arc<Self>, StoreError> {
        let collapsed = matches!(
            storage.get(keys::SIDEBAR_COLLAPSED).await?.as_deref(),
            Some("true")
        );

        let nav_tags = match storage.get(keys::NAV_TAGS).await? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| default_nav_tags()),
            None => default_nav_tags(),
        };

        Ok(Arc::new(Self {
            storage,
            state: RwLock::new(LayoutState {
                collapsed,
                nav_tags,
                ..LayoutState::default()
            }),
        }))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, LayoutState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, LayoutState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn flags(&self) -> Flags {
        self.read().flags.clone()
    }

    pub fn update_flags(&self, apply: impl FnOnce(&mut Flags)) {
        apply(&mut self.write().flags);
    }

    /// Raise the entry-point popover together with the login modal, the
    /// affordance shown after the guard blocks a navigation.
    pub fn open_login_prompt(&self) {
        let mut state = self.write();
        state.flags.popover_visible = true;
        state.flags.login_visible = true;
    }

    pub fn close_login_prompt(&self) {
        let mut state = self.write();
        state.flags.popover_visible = false;
        state.flags.login_visible = false;
    }

    pub fn is_collapsed(&self) -> bool {
        self.read().collapsed
    }

    pub async fn set_collapsed(&self, collapsed: bool) -> Result<(), StoreError> {
        self.write().collapsed = collapsed;
        self.storage
            .set(keys::SIDEBAR_COLLAPSED, if collapsed { "true" } else { "false" })
            .await
    }

    pub fn nav_tags(&self) -> Vec<NavTag> {
        self.read().nav_tags.clone()
    }

    pub async fn add_tag(&self, tag: NavTag) -> Result<(), StoreError> {
        {
            let mut state = self.write();
            if state.nav_tags.iter().any(|existing| existing.name == tag.name) {
                return Ok(());
            }
            debug!("pinning nav tag {}", tag.name);
            state.nav_tags.push(tag);
        }
        self.persist_tags().await
    }

    pub async fn remove_tag(&self, name: &str) -> Result<(), StoreError> {
        self.write().nav_tags.retain(|tag| tag.name != name);
        self.persist_tags().await
    }

    async fn persist_tags(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.read().nav_tags)?;
        self.storage.set(keys::NAV_TAGS, &raw).await
    }

    pub fn request_refresh(&self, table: Table) {
        self.write().pending_refresh.insert(table);
    }

    /// Consumes a pending refresh marker; true at most once per request.
    pub fn take_refresh(&self, table: Table) -> bool {
        self.write().pending_refresh.remove(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    async fn layout() -> (Arc<LayoutStore>, DynDurableStore) {
        let storage: DynDurableStore = Arc::new(MemoryStore::new());
        (LayoutStore::load(storage.clone()).await.unwrap(), storage)
    }

    #[tokio::test]
    async fn login_prompt_raises_both_flags() {
        let (layout, _storage) = layout().await;

        layout.open_login_prompt();
        let flags = layout.flags();
        assert!(flags.popover_visible);
        assert!(flags.login_visible);

        layout.close_login_prompt();
        assert!(!layout.flags().login_visible);
    }

    #[tokio::test]
    async fn nav_tags_persist_across_reload() {
        let (layout, storage) = layout().await;

        layout
            .add_tag(NavTag {
                title: "Users".to_string(),
                name: "user-list".to_string(),
            })
            .await
            .unwrap();

        let reloaded = LayoutStore::load(storage).await.unwrap();
        let names: Vec<_> = reloaded.nav_tags().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["home".to_string(), "user-list".to_string()]);
    }

    #[tokio::test]
    async fn duplicate_tags_are_ignored() {
        let (layout, _storage) = layout().await;

        let tag = NavTag {
            title: "Users".to_string(),
            name: "user-list".to_string(),
        };
        layout.add_tag(tag.clone()).await.unwrap();
        layout.add_tag(tag).await.unwrap();

        assert_eq!(layout.nav_tags().len(), 2);
    }

    #[tokio::test]
    async fn refresh_markers_are_consumed_once() {
        let (layout, _storage) = layout().await;

        layout.request_refresh(Table::Articles);
        assert!(layout.take_refresh(Table::Articles));
        assert!(!layout.take_refresh(Table::Articles));
        assert!(!layout.take_refresh(Table::Users));
    }

    #[tokio::test]
    async fn collapse_flag_round_trips() {
        let (layout, storage) = layout().await;

        layout.set_collapsed(true).await.unwrap();
        assert!(layout.is_collapsed());

        let reloaded = LayoutStore::load(storage).await.unwrap();
        assert!(reloaded.is_collapsed());
    }
}
