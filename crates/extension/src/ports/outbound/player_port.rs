use async_trait::async_trait;
use cthulu_domain::ItemId;

use super::HostError;

/// The local player.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PlayerPort: Send + Sync {
    /// Player color as a hex string.
    async fn color(&self) -> Result<String, HostError>;

    /// Replace the player's selection.
    async fn select(&self, ids: Vec<ItemId>) -> Result<(), HostError>;
}
