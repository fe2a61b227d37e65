use std::collections::HashSet;
use std::sync::Arc;

use inv_core::item::query;
use inv_core::ports::ItemStorePort;
use inv_core::{InventoryItem, ItemCode, RegistryError};

/// Use case showing what a bulk delete would remove, without removing anything.
pub struct PreviewDeletion {
    item_store: Arc<dyn ItemStorePort>,
}

impl PreviewDeletion {
    pub fn from_port(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    #[tracing::instrument(name = "usecase.preview_deletion.execute", skip(self, selected), fields(selected = selected.len()))]
    pub async fn execute(
        &self,
        selected: &HashSet<ItemCode>,
    ) -> Result<Vec<InventoryItem>, RegistryError> {
        let items = self.item_store.load().await?;
        Ok(query::candidates_for_deletion(&items, selected))
    }
}
