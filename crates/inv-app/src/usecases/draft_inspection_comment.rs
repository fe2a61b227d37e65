use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use inv_core::ports::{ImageDescriberPort, VisionError};

/// Suggested comment text; the user confirms or edits it before anything is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDraft {
    pub text: String,
}

/// Use case asking the image-description service for a draft inspection comment.
///
/// Nothing is written: the draft is only a default value for the comment field.
pub struct DraftInspectionComment {
    describer: Arc<dyn ImageDescriberPort>,
    prompt: String,
}

impl DraftInspectionComment {
    pub fn from_port(describer: Arc<dyn ImageDescriberPort>, prompt: impl Into<String>) -> Self {
        Self {
            describer,
            prompt: prompt.into(),
        }
    }

    #[tracing::instrument(name = "usecase.draft_inspection_comment.execute", skip(self), fields(image = %image.display()))]
    pub async fn execute(&self, image: &Path) -> Result<CommentDraft, VisionError> {
        let text = self.describer.describe(image, &self.prompt).await?;
        let text = text.trim().to_string();
        info!(chars = text.chars().count(), "comment draft produced");
        Ok(CommentDraft { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Describer {}

        #[async_trait]
        impl ImageDescriberPort for Describer {
            async fn describe(&self, image: &Path, prompt: &str) -> Result<String, VisionError>;
        }
    }

    #[tokio::test]
    async fn test_draft_is_trimmed_description() {
        let mut describer = MockDescriber::new();
        describer
            .expect_describe()
            .withf(|image, prompt| {
                image == Path::new("sofa.jpg") && prompt == "Describe visible damage"
            })
            .times(1)
            .returning(|_, _| Ok("\n  Fabric torn on the left armrest.  \n".to_string()));
        let uc = DraftInspectionComment::from_port(Arc::new(describer), "Describe visible damage");

        let draft = uc.execute(Path::new("sofa.jpg")).await.unwrap();

        assert_eq!(draft.text, "Fabric torn on the left armrest.");
    }

    #[tokio::test]
    async fn test_unconfigured_describer_error_is_returned() {
        let mut describer = MockDescriber::new();
        describer
            .expect_describe()
            .returning(|_, _| Err(VisionError::NotConfigured("image describer")));
        let uc = DraftInspectionComment::from_port(Arc::new(describer), "prompt");

        let err = uc.execute(Path::new("x.jpg")).await.unwrap_err();

        assert_eq!(err.to_string(), "no image describer is configured");
    }
}
