//! External programs behind the vision ports.
//!
//! Both adapters shell out: OCR goes through a `tesseract` binary and image
//! description through a user-configured command. Neither is called unless the
//! corresponding CLI command asks for it.

mod command_describer;
mod process;
mod tesseract;

pub use command_describer::CommandImageDescriber;
pub use tesseract::{TesseractCodeReader, DEFAULT_TESSERACT_CMD};
