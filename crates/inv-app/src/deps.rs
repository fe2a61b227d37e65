//! # Application Dependencies
//!
//! Dependency grouping for use case construction. This is NOT a Builder:
//! no build steps, no default values, no hidden logic.

use std::sync::Arc;
use inv_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Storage dependencies
    pub item_store: Arc<dyn ItemStorePort>,

    // Vision collaborators
    pub code_reader: Arc<dyn CodeReaderPort>,
    pub image_describer: Arc<dyn ImageDescriberPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
