//! Pure helpers over a loaded table snapshot.
//!
//! None of these reorder the table: display order is insertion order.

use std::collections::HashSet;

use super::code::ItemCode;
use super::item::InventoryItem;

/// Exact-match lookup; the first row wins if an older table carries duplicates.
pub fn find_by_code<'a>(items: &'a [InventoryItem], code: &ItemCode) -> Option<&'a InventoryItem> {
    items.iter().find(|item| &item.code == code)
}

pub fn position_of(items: &[InventoryItem], code: &ItemCode) -> Option<usize> {
    items.iter().position(|item| &item.code == code)
}

pub fn contains_code(items: &[InventoryItem], code: &ItemCode) -> bool {
    position_of(items, code).is_some()
}

/// Items a bulk delete of `selected` would remove, in table order.
pub fn candidates_for_deletion(
    items: &[InventoryItem],
    selected: &HashSet<ItemCode>,
) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| selected.contains(&item.code))
        .cloned()
        .collect()
}

/// Drops every item whose code is in `selected`; returns how many rows were removed.
pub fn remove_codes(items: &mut Vec<InventoryItem>, selected: &HashSet<ItemCode>) -> usize {
    let before = items.len();
    items.retain(|item| !selected.contains(&item.code));
    before - items.len()
}
