use serde::Serialize;
use std::sync::Arc;

use inv_core::item::query;
use inv_core::ports::ItemStorePort;
use inv_core::{InventoryItem, ItemCode, RegistryError};

/// What the inspection form should be pre-filled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InspectionTarget {
    /// Code is registered: edit the current values.
    Existing { item: InventoryItem },
    /// Code is unknown: start a blank registration carrying the code.
    Unregistered { code: ItemCode },
}

impl InspectionTarget {
    pub fn code(&self) -> &ItemCode {
        match self {
            InspectionTarget::Existing { item } => &item.code,
            InspectionTarget::Unregistered { code } => code,
        }
    }
}

/// Search step of the inspection flow.
///
/// The answer only decides which form to show; the submit goes through
/// [`InspectItem`](super::InspectItem), which checks existence again.
pub struct BeginInspection {
    item_store: Arc<dyn ItemStorePort>,
}

impl BeginInspection {
    pub fn from_port(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    #[tracing::instrument(name = "usecase.begin_inspection.execute", skip(self))]
    pub async fn execute(&self, code: &str) -> Result<InspectionTarget, RegistryError> {
        let code = ItemCode::parse(code)?;
        let items = self.item_store.load().await?;

        Ok(match query::find_by_code(&items, &code) {
            Some(item) => InspectionTarget::Existing { item: item.clone() },
            None => InspectionTarget::Unregistered { code },
        })
    }
}
