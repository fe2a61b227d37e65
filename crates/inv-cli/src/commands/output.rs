use serde::Serialize;
use serde_json::json;

use super::error::CommandError;

/// Writes command results to stdout, either as text or as JSON.
///
/// Notes and errors go to stderr in text mode. In JSON mode errors are printed
/// on stdout as `{"error": {"kind", "message"}}` so scripts read one stream.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn emit<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce(&T) -> String,
    ) -> Result<(), CommandError> {
        println!("{}", self.format(value, text)?);
        Ok(())
    }

    pub fn format<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce(&T) -> String,
    ) -> Result<String, CommandError> {
        if self.json {
            serde_json::to_string_pretty(value)
                .map_err(|e| CommandError::internal(format!("failed to encode output: {e}")))
        } else {
            Ok(text(value))
        }
    }

    pub fn note(&self, message: &str) {
        eprintln!("note: {message}");
    }

    pub fn error(&self, err: &CommandError) {
        if self.json {
            println!("{}", json!({ "error": err }));
        } else {
            eprintln!("error: {err}");
        }
    }
}
