//! Port interfaces for the application layer
//!
//! Ports define the contract between the registry use cases and infrastructure
//! implementations. The core never touches files, clocks or external programs
//! directly; it only sees these traits.

mod clock;
mod code_reader;
pub mod errors;
mod image_describer;
pub mod item_store;

pub use clock::ClockPort;
pub use code_reader::CodeReaderPort;
pub use errors::{StoreError, VisionError};
pub use image_describer::ImageDescriberPort;
pub use item_store::ItemStorePort;
