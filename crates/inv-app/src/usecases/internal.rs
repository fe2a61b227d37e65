//! Table mutations shared by the write use cases.
//!
//! Both helpers check first and mutate second, so an `Err` leaves `items` untouched.

use inv_core::item::{query, validation};
use inv_core::{InventoryItem, ItemChanges, ItemCode, NewItem, RegistryError, Timestamp};

/// Appends a new item after validation and the duplicate check.
///
/// The code is stored trimmed, the same form lookups use.
pub(crate) fn insert_new(
    items: &mut Vec<InventoryItem>,
    mut new_item: NewItem,
    at: Timestamp,
) -> Result<InventoryItem, RegistryError> {
    new_item.code = new_item.code.trimmed();
    validation::validate_new_item(&new_item)?;
    if query::contains_code(items, &new_item.code) {
        return Err(RegistryError::DuplicateCode(new_item.code));
    }

    let item = InventoryItem::register(new_item, at);
    items.push(item.clone());
    Ok(item)
}

/// Applies `changes` to the item with `code` in place.
pub(crate) fn apply_update(
    items: &mut [InventoryItem],
    code: &ItemCode,
    changes: &ItemChanges,
    at: Timestamp,
) -> Result<InventoryItem, RegistryError> {
    validation::validate_changes(changes)?;
    let index =
        query::position_of(items, code).ok_or_else(|| RegistryError::NotFound(code.clone()))?;

    let item = &mut items[index];
    item.apply(changes, at);
    Ok(item.clone())
}
