pub mod fs;
pub mod storage;
pub mod time;
pub mod vision;

pub use storage::CsvItemStore;
pub use time::SystemClock;
pub use vision::{CommandImageDescriber, TesseractCodeReader};
