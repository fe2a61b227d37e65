use async_trait::async_trait;
use std::path::Path;

use super::errors::VisionError;

/// Third-party service that describes a photo in free text.
#[async_trait]
pub trait ImageDescriberPort: Send + Sync {
    async fn describe(&self, image: &Path, prompt: &str) -> Result<String, VisionError>;
}
