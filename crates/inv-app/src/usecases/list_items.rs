use std::sync::Arc;

use inv_core::ports::ItemStorePort;
use inv_core::{InventoryItem, RegistryError};

/// Use case for the full table view.
pub struct ListItems {
    item_store: Arc<dyn ItemStorePort>,
}

impl ListItems {
    pub fn from_port(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    /// Returns every item in insertion order. The order is never changed here.
    #[tracing::instrument(name = "usecase.list_items.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<InventoryItem>, RegistryError> {
        Ok(self.item_store.load().await?)
    }
}
