//! # inv-core
//!
//! Core domain models and business rules for the inventory registry.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod item;
pub mod ports;
pub mod vision;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use item::{
    InventoryItem, ItemChanges, ItemCode, NewItem, RegistryError, RegistryField, Timestamp,
};
