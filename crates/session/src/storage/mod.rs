mod file;
mod memory;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;

use async_trait::async_trait;
use shared::errors::StoreError;
use std::sync::Arc;

pub type DynDurableStore = Arc<dyn DurableStore + Send + Sync>;

/// Durable string key-value storage that survives process restarts; the
/// client-side analog of browser local storage.
#[async_trait]
pub trait DurableStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

pub mod keys {
    pub const EVER_LOGGED_IN: &str = "ever_logged_in";
    pub const SIDEBAR_COLLAPSED: &str = "sidebar_collapsed";
    pub const NAV_TAGS: &str = "nav_tags";
}
