use async_trait::async_trait;
use cthulu_shared::Item;

use super::{HostError, ItemMutator};

/// Exclusive lock over a set of transient items.
///
/// While held, updates are local and cheap; nothing is written to the scene.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ItemInteraction: Send + Sync {
    /// Mutate the held items. They arrive in the order they were passed to
    /// [`InteractionPort::start_item_interaction`].
    async fn update(&self, mutator: ItemMutator) -> Result<(), HostError>;

    /// Release the lock and drop the transient items.
    fn stop(&self);
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait InteractionPort: Send + Sync {
    async fn start_item_interaction(
        &self,
        items: Vec<Item>,
    ) -> Result<Box<dyn ItemInteraction>, HostError>;
}
