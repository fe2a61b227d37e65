use async_trait::async_trait;

use super::errors::StoreError;
use crate::item::InventoryItem;

/// Durable table of inventory items.
///
/// ## Single-writer model
///
/// Every registry operation is a complete `load` -> mutate -> `save` cycle and the
/// table is always rewritten wholesale. Nothing coordinates two callers: if two
/// sessions write concurrently, the second `save` replaces the first one's table
/// (last write wins), and a duplicate-code check made against a stale snapshot can
/// let both registrations report success while only the second survives.
/// Deployments are expected to have a single writer at a time.
#[async_trait]
pub trait ItemStorePort: Send + Sync {
    /// Reads the whole table in stored order.
    ///
    /// A missing table is an empty table, not an error.
    async fn load(&self) -> Result<Vec<InventoryItem>, StoreError>;

    /// Replaces the whole table with `items`, keeping their order.
    async fn save(&self, items: &[InventoryItem]) -> Result<(), StoreError>;
}
