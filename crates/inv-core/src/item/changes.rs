use serde::{Deserialize, Serialize};

use super::code::ItemCode;

/// Candidate for registration: every field a new item is created from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewItem {
    pub code: ItemCode,
    pub name: String,
    pub location: String,
    pub status: String,
    #[serde(default)]
    pub comment: String,
}

/// Form fields submitted for an existing (or possibly new) item.
///
/// `None` means "not part of this submission"; `Some("")` is an explicit value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub comment: Option<String>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.status.is_none()
            && self.comment.is_none()
    }

    /// Turns the submission into a registration candidate for `code`.
    ///
    /// Absent fields become empty strings; validation decides whether that is acceptable.
    pub fn into_new_item(self, code: ItemCode) -> NewItem {
        NewItem {
            code,
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            comment: self.comment.unwrap_or_default(),
        }
    }
}
