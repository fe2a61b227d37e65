use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info_span, Instrument};

use inv_core::ports::{ImageDescriberPort, VisionError};

use super::process::run_captured;

/// Image description delegated to an arbitrary command.
///
/// The configured argv is run with the image path and the prompt appended, and
/// stdout is taken as the description. This keeps any particular vision service
/// (and its credentials) outside of this crate.
pub struct CommandImageDescriber {
    command: Vec<String>,
}

impl CommandImageDescriber {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    pub fn is_configured(&self) -> bool {
        !self.command.is_empty()
    }
}

#[async_trait]
impl ImageDescriberPort for CommandImageDescriber {
    async fn describe(&self, image: &Path, prompt: &str) -> Result<String, VisionError> {
        let (program, fixed_args) = self
            .command
            .split_first()
            .ok_or(VisionError::NotConfigured("image describer"))?;

        let args = fixed_args
            .iter()
            .map(|a| OsStr::new(a.as_str()))
            .chain([image.as_os_str(), OsStr::new(prompt)]);

        let span = info_span!("infra.describer.describe", program = %program, image = %image.display());
        run_captured(program, args).instrument(span).await
    }
}
