use std::fmt::{Display, Formatter};
use thiserror::Error;

use super::code::ItemCode;
use crate::ports::errors::StoreError;

/// Registry fields that can be named in a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryField {
    Code,
    Name,
    Location,
    Status,
}

impl RegistryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryField::Code => "code",
            RegistryField::Name => "name",
            RegistryField::Location => "location",
            RegistryField::Status => "status",
        }
    }
}

impl Display for RegistryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a registry operation.
///
/// Every variant except [`RegistryError::Storage`] is detected before the
/// in-memory table is touched, so no write happens when one is returned.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("missing required field(s): {}", join_fields(.missing))]
    Validation { missing: Vec<RegistryField> },

    #[error("item code \"{0}\" is already registered")]
    DuplicateCode(ItemCode),

    #[error("item code \"{0}\" was not found")]
    NotFound(ItemCode),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl RegistryError {
    pub fn missing(missing: Vec<RegistryField>) -> Self {
        RegistryError::Validation { missing }
    }

    /// Stable machine-readable kind, used by callers to pick a message template.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::Validation { .. } => "validation",
            RegistryError::DuplicateCode(_) => "duplicate_code",
            RegistryError::NotFound(_) => "not_found",
            RegistryError::Storage(_) => "storage",
        }
    }

    /// Whether the caller can fix the input and try again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RegistryError::Storage(_))
    }
}

fn join_fields(fields: &[RegistryField]) -> String {
    fields
        .iter()
        .map(RegistryField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_every_field() {
        let err = RegistryError::missing(vec![RegistryField::Name, RegistryField::Status]);
        assert_eq!(err.to_string(), "missing required field(s): name, status");
    }

    #[test]
    fn test_duplicate_message_names_code() {
        let err = RegistryError::DuplicateCode(ItemCode::from("0042"));
        assert_eq!(err.to_string(), "item code \"0042\" is already registered");
        assert_eq!(err.kind(), "duplicate_code");
    }

    #[test]
    fn test_storage_errors_are_not_recoverable() {
        let err = RegistryError::from(StoreError::Malformed {
            line: Some(3),
            message: "bad row".to_string(),
        });
        assert!(!err.is_recoverable());
        assert!(RegistryError::NotFound(ItemCode::from("X")).is_recoverable());
    }
}
