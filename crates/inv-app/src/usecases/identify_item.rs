use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use inv_core::ports::{CodeReaderPort, ItemStorePort, VisionError};
use inv_core::vision::extract_candidate_code;
use inv_core::RegistryError;

use super::begin_inspection::{BeginInspection, InspectionTarget};

#[derive(Debug, Error)]
pub enum IdentifyError {
    #[error("code recognition failed: {0}")]
    Vision(#[from] VisionError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result of reading a tag photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identification {
    /// Raw OCR output, kept so the user can correct a misread code
    pub ocr_text: String,
    pub candidate_code: String,
    pub target: InspectionTarget,
}

/// Use case for the camera identification aid.
///
/// The OCR candidate goes through the same lookup as typed input; an empty
/// candidate fails validation exactly as an empty text box would.
pub struct IdentifyItem {
    code_reader: Arc<dyn CodeReaderPort>,
    item_store: Arc<dyn ItemStorePort>,
}

impl IdentifyItem {
    pub fn from_ports(
        code_reader: Arc<dyn CodeReaderPort>,
        item_store: Arc<dyn ItemStorePort>,
    ) -> Self {
        Self {
            code_reader,
            item_store,
        }
    }

    #[tracing::instrument(name = "usecase.identify_item.execute", skip(self), fields(image = %image.display()))]
    pub async fn execute(&self, image: &Path) -> Result<Identification, IdentifyError> {
        let ocr_text = self.code_reader.read_text(image).await?;
        let candidate_code = extract_candidate_code(&ocr_text);
        info!(candidate = %candidate_code, "OCR candidate extracted");

        let target = BeginInspection::from_port(self.item_store.clone())
            .execute(&candidate_code)
            .await?;

        Ok(Identification {
            ocr_text,
            candidate_code,
            target,
        })
    }
}
