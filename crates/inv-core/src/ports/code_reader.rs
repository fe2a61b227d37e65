use async_trait::async_trait;
use std::path::Path;

use super::errors::VisionError;

/// Optical character recognition over a photographed tag.
#[async_trait]
pub trait CodeReaderPort: Send + Sync {
    /// Returns the raw text found in the image, possibly empty.
    async fn read_text(&self, image: &Path) -> Result<String, VisionError>;
}
