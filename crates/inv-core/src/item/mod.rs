//! Inventory item domain models.
//!
//! An [`InventoryItem`] is one row of the registry table. Everything in this module
//! is pure: loading and persisting the table goes through
//! [`ItemStorePort`](crate::ports::ItemStorePort).

pub mod changes;
pub mod code;
pub mod error;
pub mod item;
pub mod query;
pub mod status;
pub mod timestamp;
pub mod validation;

pub use changes::{ItemChanges, NewItem};
pub use code::ItemCode;
pub use error::{RegistryError, RegistryField};
pub use item::InventoryItem;
pub use timestamp::Timestamp;
