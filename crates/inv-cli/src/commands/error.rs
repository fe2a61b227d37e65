use serde::Serialize;
use std::fmt;

use inv_app::usecases::IdentifyError;
use inv_core::ports::VisionError;
use inv_core::RegistryError;

/// Stable error categories surfaced by the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    DuplicateCode,
    NotFound,
    Storage,
    Collaborator,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::DuplicateCode => "duplicate_code",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Storage => "storage",
            ErrorKind::Collaborator => "collaborator",
            ErrorKind::Internal => "internal",
        }
    }

    /// Process exit status. 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::Internal => 1,
            ErrorKind::Validation => 3,
            ErrorKind::DuplicateCode => 4,
            ErrorKind::NotFound => 5,
            ErrorKind::Storage => 6,
            ErrorKind::Collaborator => 7,
        }
    }
}

/// Error returned by every command handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CommandError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<RegistryError> for CommandError {
    fn from(err: RegistryError) -> Self {
        let kind = match &err {
            RegistryError::Validation { .. } => ErrorKind::Validation,
            RegistryError::DuplicateCode(_) => ErrorKind::DuplicateCode,
            RegistryError::NotFound(_) => ErrorKind::NotFound,
            RegistryError::Storage(_) => ErrorKind::Storage,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<VisionError> for CommandError {
    fn from(err: VisionError) -> Self {
        Self::new(ErrorKind::Collaborator, err.to_string())
    }
}

impl From<IdentifyError> for CommandError {
    fn from(err: IdentifyError) -> Self {
        match err {
            IdentifyError::Registry(RegistryError::Validation { .. }) => {
                Self::validation("no item code could be read from the image")
            }
            IdentifyError::Registry(inner) => inner.into(),
            vision @ IdentifyError::Vision(_) => {
                Self::new(ErrorKind::Collaborator, vision.to_string())
            }
        }
    }
}
