//! Port for invalidating cached page renderings.

use crate::domain::NavigationPath;

/// Marks the cached rendering of a path stale so the next request for it
/// recomputes from the store.
///
/// Invalidation is fire-and-forget: it cannot fail and returns nothing.
#[cfg_attr(test, mockall::automock)]
pub trait PathRevalidator: Send + Sync {
    /// Mark `path` stale.
    fn revalidate_path(&self, path: &NavigationPath);
}
