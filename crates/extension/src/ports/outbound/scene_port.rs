use async_trait::async_trait;
use cthulu_domain::ItemId;
use cthulu_shared::{Item, ItemKind};

use super::HostError;

/// Edits a batch of items in place. Items arrive in the order their ids
/// were requested.
pub type ItemMutator = Box<dyn FnOnce(&mut [Item]) + Send>;

/// Live scene graph.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ScenePort: Send + Sync {
    /// All items, optionally restricted to one kind.
    async fn get_items(&self, kind: Option<ItemKind>) -> Result<Vec<Item>, HostError>;

    /// Apply `mutator` to the items with `ids` and commit the result.
    async fn update_items(&self, ids: Vec<ItemId>, mutator: ItemMutator) -> Result<(), HostError>;
}
