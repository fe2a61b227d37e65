use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use inv_core::item::query;
use inv_core::ports::ItemStorePort;
use inv_core::{ItemCode, RegistryError};

/// Use case for deleting the items selected in the table view.
pub struct DeleteItems {
    item_store: Arc<dyn ItemStorePort>,
}

impl DeleteItems {
    pub fn from_port(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    /// Removes every item whose code is in `selected` and returns how many were removed.
    ///
    /// Codes that are no longer in the table are skipped, so the count can be lower
    /// than `selected.len()`. Deletion is permanent.
    #[tracing::instrument(name = "usecase.delete_items.execute", skip(self, selected), fields(selected = selected.len()))]
    pub async fn execute(&self, selected: &HashSet<ItemCode>) -> Result<usize, RegistryError> {
        let mut items = self.item_store.load().await?;
        let removed = query::remove_codes(&mut items, selected);

        if removed > 0 {
            self.item_store.save(&items).await?;
        }

        info!(requested = selected.len(), removed, "bulk delete finished");
        Ok(removed)
    }
}
