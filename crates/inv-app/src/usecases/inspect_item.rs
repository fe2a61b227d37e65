use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use inv_core::item::{query, validation};
use inv_core::ports::{ClockPort, ItemStorePort};
use inv_core::{InventoryItem, ItemChanges, ItemCode, RegistryError};

use super::internal;

/// Which branch the inspection submit took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "item", rename_all = "snake_case")]
pub enum UpsertOutcome {
    Created(InventoryItem),
    Updated(InventoryItem),
}

impl UpsertOutcome {
    pub fn item(&self) -> &InventoryItem {
        match self {
            UpsertOutcome::Created(item) | UpsertOutcome::Updated(item) => item,
        }
    }

    pub fn into_item(self) -> InventoryItem {
        match self {
            UpsertOutcome::Created(item) | UpsertOutcome::Updated(item) => item,
        }
    }
}

/// Use case behind the inspection form's submit button.
///
/// The inspect flow starts from a code that may or may not be registered. Instead
/// of making the caller branch, this use case decides at submit time:
/// an existing code gets update semantics, an unknown code gets create semantics
/// and must carry the full set of required fields.
pub struct InspectItem {
    item_store: Arc<dyn ItemStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl InspectItem {
    pub fn from_ports(item_store: Arc<dyn ItemStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { item_store, clock }
    }

    /// Creates or updates the item for `code`.
    ///
    /// Existence is checked against the table loaded by this call, not against
    /// whatever the caller saw when the code was first entered.
    #[tracing::instrument(name = "usecase.inspect_item.execute", skip(self, changes))]
    pub async fn execute(
        &self,
        code: &str,
        changes: ItemChanges,
    ) -> Result<UpsertOutcome, RegistryError> {
        let code = ItemCode::parse(code)?;
        validation::validate_changes(&changes)?;

        let mut items = self.item_store.load().await?;
        let now = self.clock.now();

        let result = if query::contains_code(&items, &code) {
            internal::apply_update(&mut items, &code, &changes, now).map(UpsertOutcome::Updated)
        } else {
            internal::insert_new(&mut items, changes.into_new_item(code), now)
                .map(UpsertOutcome::Created)
        };
        let outcome = result.inspect_err(|e| warn!(error = %e, "inspection rejected"))?;

        self.item_store.save(&items).await?;

        match &outcome {
            UpsertOutcome::Created(item) => info!(code = %item.code, "item created from inspection"),
            UpsertOutcome::Updated(item) => info!(code = %item.code, "item updated from inspection"),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryItemStore, SteppingClock};
    use inv_core::RegistryField;

    fn full_form(status: &str) -> ItemChanges {
        ItemChanges {
            name: Some("Chair".to_string()),
            location: Some("101A".to_string()),
            status: Some(status.to_string()),
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_unknown_code_is_created_then_updated() {
        let store = Arc::new(InMemoryItemStore::new());
        let uc = InspectItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let first = uc.execute("X123", full_form("in use")).await.unwrap();
        let created = match first {
            UpsertOutcome::Created(item) => item,
            other => panic!("expected creation, got {other:?}"),
        };
        assert!(!created.created_at.is_empty());
        assert!(created.updated_at.is_empty());

        let second = uc.execute("X123", full_form("in repair")).await.unwrap();
        let updated = match second {
            UpsertOutcome::Updated(item) => item,
            other => panic!("expected update, got {other:?}"),
        };
        assert_eq!(updated.status, "in repair");
        assert_eq!(updated.created_at, created.created_at);
        assert!(!updated.updated_at.is_empty());
        assert_eq!(store.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_code_requires_full_field_set() {
        let store = Arc::new(InMemoryItemStore::new());
        let uc = InspectItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let changes = ItemChanges {
            status: Some("in use".to_string()),
            ..ItemChanges::default()
        };
        let err = uc.execute("X123", changes).await.unwrap_err();

        match err {
            RegistryError::Validation { missing } => {
                assert_eq!(missing, vec![RegistryField::Name, RegistryField::Location])
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_existing_code_accepts_partial_fields() {
        let store = Arc::new(InMemoryItemStore::new());
        let uc = InspectItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));
        uc.execute("7", full_form("in use")).await.unwrap();

        let changes = ItemChanges {
            comment: Some("scratched leg".to_string()),
            ..ItemChanges::default()
        };
        let outcome = uc.execute("7", changes).await.unwrap();

        assert_eq!(outcome.item().comment, "scratched leg");
        assert_eq!(outcome.item().name, "Chair");
    }

    #[tokio::test]
    async fn test_created_item_keeps_submitted_comment() {
        let store = Arc::new(InMemoryItemStore::new());
        let uc = InspectItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let mut form = full_form("in use");
        form.comment = Some("new in box".to_string());
        let outcome = uc.execute("55", form).await.unwrap();

        assert_eq!(outcome.into_item().comment, "new in box");
    }

    #[tokio::test]
    async fn test_blank_code_is_a_validation_error() {
        let store = Arc::new(InMemoryItemStore::new());
        let uc = InspectItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let err = uc.execute("  ", full_form("in use")).await.unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Validation { ref missing } if missing == &vec![RegistryField::Code]
        ));
    }
}
