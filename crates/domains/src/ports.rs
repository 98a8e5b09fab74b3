//! # Ports
//!
//! Any adapter must implement these traits to be wired into the store.

use async_trait::async_trait;

use crate::models::ListingId;

/// A platform key-value store holding string values under string keys.
///
/// Both operations are fallible; callers are expected to tolerate failure.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait KeyValueSlot: Send + Sync {
    /// Returns `None` when nothing has been stored under `key`.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Issues listing ids unique within a running session.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> ListingId;
}
