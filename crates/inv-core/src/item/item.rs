use serde::{Deserialize, Serialize};

use super::changes::{ItemChanges, NewItem};
use super::code::ItemCode;
use super::timestamp::Timestamp;

/// One inventory item as persisted in the registry table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Primary key (barcode / tag number)
    pub code: ItemCode,
    /// Human description
    pub name: String,
    /// Apartment / unit identifier
    pub location: String,
    /// Situation label, free text
    pub status: String,
    /// Set once at insertion
    pub created_at: String,
    /// Set on every later write; empty until the first update
    pub updated_at: String,
    pub comment: String,
    /// Columns this version does not know about, kept in table order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl InventoryItem {
    /// Builds a freshly registered item. `updated_at` stays empty.
    pub fn register(new_item: NewItem, at: Timestamp) -> Self {
        Self {
            code: new_item.code,
            name: new_item.name,
            location: new_item.location,
            status: new_item.status,
            created_at: at.to_string(),
            updated_at: String::new(),
            comment: new_item.comment,
            extra: Vec::new(),
        }
    }

    /// Overwrites the supplied fields and stamps `updated_at`.
    ///
    /// `code` and `created_at` are never touched.
    pub fn apply(&mut self, changes: &ItemChanges, at: Timestamp) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(location) = &changes.location {
            self.location = location.clone();
        }
        if let Some(status) = &changes.status {
            self.status = status.clone();
        }
        if let Some(comment) = &changes.comment {
            self.comment = comment.clone();
        }
        self.updated_at = at.to_string();
    }

    pub fn has_been_updated(&self) -> bool {
        !self.updated_at.is_empty()
    }
}
