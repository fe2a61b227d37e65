//! Registry use cases
//!
//! [typed / scanned code]        [camera photo]
//!          |                          |
//!          |                   IdentifyItem ---- DraftInspectionComment
//!          v                          |
//!   BeginInspection  <----------------+
//!          |
//!          v
//!   InspectItem (upsert)  --->  UpdateItem / RegisterItem semantics
//!
//! ListItems, FindItem, PreviewDeletion and DeleteItems serve the table view.

pub mod begin_inspection;
pub mod delete_items;
pub mod draft_inspection_comment;
pub mod find_item;
pub mod identify_item;
pub mod inspect_item;
mod internal;
pub mod list_items;
pub mod preview_deletion;
pub mod register_item;
pub mod update_item;

pub use begin_inspection::{BeginInspection, InspectionTarget};
pub use delete_items::DeleteItems;
pub use draft_inspection_comment::{CommentDraft, DraftInspectionComment};
pub use find_item::FindItem;
pub use identify_item::{Identification, IdentifyError, IdentifyItem};
pub use inspect_item::{InspectItem, UpsertOutcome};
pub use list_items::ListItems;
pub use preview_deletion::PreviewDeletion;
pub use register_item::RegisterItem;
pub use update_item::UpdateItem;
