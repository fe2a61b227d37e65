use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use super::error::{RegistryError, RegistryField};

/// Tag number or barcode identifying one inventory item.
///
/// The value is opaque: it is never parsed as a number, so `"0042"` and `"42"`
/// are different codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(String);

impl ItemCode {
    /// Wraps a stored code verbatim, without trimming or validation.
    pub fn new(code: String) -> Self {
        Self(code)
    }

    /// Parses user input (typed, scanned or OCR-sourced) into a code.
    ///
    /// Surrounding whitespace is removed; a blank result is a validation error
    /// naming the `code` field.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RegistryError::missing(vec![RegistryField::Code]));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The same code without surrounding whitespace.
    pub fn trimmed(&self) -> Self {
        Self(self.0.trim().to_string())
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for ItemCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ItemCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
