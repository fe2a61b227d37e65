//! Inventory registry application layer
//!
//! This crate contains the registry use cases. Each use case loads the item
//! table through [`ItemStorePort`](inv_core::ports::ItemStorePort), applies the
//! business rules in memory and writes the whole table back.

pub mod deps;
pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;

pub use deps::AppDeps;
