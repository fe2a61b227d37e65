use std::sync::Arc;
use tracing::{info, warn};

use inv_core::ports::{ClockPort, ItemStorePort};
use inv_core::{InventoryItem, NewItem, RegistryError};

use super::internal;

/// Use case for the explicit registration form.
pub struct RegisterItem {
    item_store: Arc<dyn ItemStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl RegisterItem {
    pub fn from_ports(item_store: Arc<dyn ItemStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { item_store, clock }
    }

    /// Registers a new item.
    ///
    /// Requires non-blank `code`, `name`, `location` and `status`. Surrounding
    /// whitespace is stripped from `code` before the duplicate check. The duplicate check
    /// runs against a table loaded right before the write; see
    /// [`ItemStorePort`] for the race this narrows but does not close.
    ///
    /// # Errors
    ///
    /// `Validation` and `DuplicateCode` are returned before anything is written;
    /// `Storage` if the table cannot be read or written.
    #[tracing::instrument(
        name = "usecase.register_item.execute",
        skip(self, new_item),
        fields(code = %new_item.code)
    )]
    pub async fn execute(&self, new_item: NewItem) -> Result<InventoryItem, RegistryError> {
        inv_core::item::validation::validate_new_item(&new_item)?;

        let mut items = self.item_store.load().await?;
        let registered = internal::insert_new(&mut items, new_item, self.clock.now())
            .inspect_err(|e| warn!(error = %e, "registration rejected"))?;
        self.item_store.save(&items).await?;

        info!(code = %registered.code, name = %registered.name, "item registered");
        Ok(registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{item, InMemoryItemStore, SteppingClock};
    use crate::usecases::FindItem;
    use inv_core::{ItemCode, RegistryField};

    fn candidate(code: &str, name: &str, location: &str) -> NewItem {
        NewItem {
            code: ItemCode::from(code),
            name: name.to_string(),
            location: location.to_string(),
            status: "in use".to_string(),
            comment: String::new(),
        }
    }

    #[tokio::test]
    async fn test_register_sets_created_at_and_leaves_updated_at_empty() {
        let store = Arc::new(InMemoryItemStore::new());
        let uc = RegisterItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let registered = uc.execute(candidate("0042", "Sofa", "12B")).await.unwrap();

        assert_eq!(registered.created_at, "20/05/2024 08:30:00");
        assert!(registered.updated_at.is_empty());
        assert_eq!(store.snapshot(), vec![registered]);
    }

    #[tokio::test]
    async fn test_register_appends_in_insertion_order() {
        let store = Arc::new(InMemoryItemStore::with_items(vec![item(
            "9", "Lamp", "1A", "in use",
        )]));
        let uc = RegisterItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        uc.execute(candidate("1", "Desk", "2B")).await.unwrap();

        let codes: Vec<_> = store.snapshot().into_iter().map(|i| i.code).collect();
        assert_eq!(codes, vec![ItemCode::from("9"), ItemCode::from("1")]);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_code_without_writing() {
        let store = Arc::new(InMemoryItemStore::with_items(vec![item(
            "0042", "Sofa", "12B", "in use",
        )]));
        let uc = RegisterItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let err = uc.execute(candidate("0042", "Chair", "3C")).await.unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateCode(ref c) if c.as_str() == "0042"));
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_register_stores_code_trimmed_so_find_reaches_it() {
        let store = Arc::new(InMemoryItemStore::new());
        let uc = RegisterItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let registered = uc.execute(candidate(" 0042 ", "Sofa", "12B")).await.unwrap();

        assert_eq!(registered.code.as_str(), "0042");
        let found = FindItem::from_port(store.clone()).execute("0042").await.unwrap();
        assert_eq!(found, Some(registered));
    }

    #[tokio::test]
    async fn test_register_padded_code_is_a_duplicate_of_stored_code() {
        let store = Arc::new(InMemoryItemStore::with_items(vec![item(
            "0042", "Sofa", "12B", "in use",
        )]));
        let uc = RegisterItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let err = uc.execute(candidate(" 0042 ", "Chair", "3C")).await.unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateCode(ref c) if c.as_str() == "0042"));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_register_rejects_blank_name_before_loading() {
        let store = Arc::new(InMemoryItemStore::unreadable());
        let uc = RegisterItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let err = uc.execute(candidate("B1", "", "101A")).await.unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Validation { ref missing } if missing == &vec![RegistryField::Name]
        ));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_register_surfaces_unreadable_table() {
        let store = Arc::new(InMemoryItemStore::unreadable());
        let uc = RegisterItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        let err = uc.execute(candidate("B1", "Desk", "101A")).await.unwrap_err();

        assert!(matches!(err, RegistryError::Storage(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_registration_never_duplicates_codes() {
        let store = Arc::new(InMemoryItemStore::new());
        let uc = RegisterItem::from_ports(store.clone(), Arc::new(SteppingClock::new()));

        for code in ["A", "B", "A", "C", "B", "A"] {
            let _ = uc.execute(candidate(code, "Chair", "1A")).await;
        }

        let mut codes: Vec<_> = store.snapshot().into_iter().map(|i| i.code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), store.snapshot().len());
        assert_eq!(codes.len(), 3);
    }
}
