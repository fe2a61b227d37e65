//! CSV persistence of the item table.

pub mod columns;
pub mod csv_item_store;

pub use csv_item_store::CsvItemStore;
