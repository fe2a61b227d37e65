use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info_span, Instrument};

use inv_core::ports::{CodeReaderPort, VisionError};

use super::process::run_captured;

pub const DEFAULT_TESSERACT_CMD: &str = "tesseract";

/// OCR through the `tesseract` command line tool.
///
/// Runs `<cmd> <image> stdout` and returns whatever text it printed.
pub struct TesseractCodeReader {
    cmd: String,
}

impl TesseractCodeReader {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self { cmd: cmd.into() }
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }
}

impl Default for TesseractCodeReader {
    fn default() -> Self {
        Self::new(DEFAULT_TESSERACT_CMD)
    }
}

#[async_trait]
impl CodeReaderPort for TesseractCodeReader {
    async fn read_text(&self, image: &Path) -> Result<String, VisionError> {
        let span = info_span!("infra.ocr.read_text", image = %image.display());
        run_captured(&self.cmd, [image.as_os_str(), OsStr::new("stdout")])
            .instrument(span)
            .await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invocation_passes_image_then_stdout() {
        // echo stands in for tesseract and prints back its arguments.
        let reader = TesseractCodeReader::new("echo");
        let text = reader.read_text(Path::new("tag.jpg")).await.unwrap();
        assert_eq!(text.trim(), "tag.jpg stdout");
    }

    #[tokio::test]
    async fn test_missing_binary_is_reported() {
        let reader = TesseractCodeReader::new("inventory-h8-no-tesseract");
        let err = reader.read_text(Path::new("tag.jpg")).await.unwrap_err();
        assert!(matches!(err, VisionError::Launch { ref program, .. } if program == "inventory-h8-no-tesseract"));
    }

    #[test]
    fn test_default_command() {
        assert_eq!(TesseractCodeReader::default().cmd(), "tesseract");
    }
}
