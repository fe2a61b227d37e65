use std::sync::Arc;
use tracing::{info, warn};

use inv_core::item::validation;
use inv_core::ports::{ClockPort, ItemStorePort};
use inv_core::{InventoryItem, ItemChanges, ItemCode, RegistryError};

use super::internal;

/// Use case for editing an item that the caller has already looked up.
pub struct UpdateItem {
    item_store: Arc<dyn ItemStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl UpdateItem {
    pub fn from_ports(item_store: Arc<dyn ItemStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { item_store, clock }
    }

    /// Overwrites the supplied fields of `code` and stamps `updated_at`.
    ///
    /// The item is located again in a fresh snapshot: if another session deleted it
    /// in the meantime this returns `NotFound` instead of silently doing nothing.
    #[tracing::instrument(name = "usecase.update_item.execute", skip(self, changes), fields(code = %code))]
    pub async fn execute(
        &self,
        code: &ItemCode,
        changes: ItemChanges,
    ) -> Result<InventoryItem, RegistryError> {
        validation::validate_changes(&changes)?;

        let mut items = self.item_store.load().await?;
        let updated = internal::apply_update(&mut items, code, &changes, self.clock.now())
            .inspect_err(|e| warn!(error = %e, "update rejected"))?;
        self.item_store.save(&items).await?;

        info!(code = %updated.code, updated_at = %updated.updated_at, "item updated");
        Ok(updated)
    }
}
