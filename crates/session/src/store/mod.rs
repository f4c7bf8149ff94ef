mod layout;
mod session;
mod site;

pub use self::layout::{Flags, LayoutStore, NavTag, Table};
pub use self::session::SessionStore;
pub use self::site::SiteStore;

/// Lifecycle of a lazily hydrated store. `Ready` and `Failed` both count as
/// hydrated: one attempt per session lifetime, whatever its outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HydrationState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

impl HydrationState {
    pub fn is_hydrated(self) -> bool {
        matches!(self, HydrationState::Ready | HydrationState::Failed)
    }
}
