use std::sync::Arc;
use tracing::debug;

use inv_core::item::query;
use inv_core::ports::ItemStorePort;
use inv_core::{InventoryItem, ItemCode, RegistryError};

/// Use case for looking an item up by its code.
pub struct FindItem {
    item_store: Arc<dyn ItemStorePort>,
}

impl FindItem {
    pub fn from_port(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    /// Exact-match lookup against a fresh snapshot.
    ///
    /// `code` is raw input (typed, scanned or OCR); a blank value is a validation
    /// error, not "not found".
    #[tracing::instrument(name = "usecase.find_item.execute", skip(self))]
    pub async fn execute(&self, code: &str) -> Result<Option<InventoryItem>, RegistryError> {
        let code = ItemCode::parse(code)?;
        let items = self.item_store.load().await?;
        let found = query::find_by_code(&items, &code).cloned();
        debug!(code = %code, found = found.is_some(), "lookup finished");
        Ok(found)
    }
}
