//! Helpers for text produced by the camera identification aid.

use regex::Regex;
use std::sync::OnceLock;

static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();

/// Picks the candidate item code out of raw OCR text.
///
/// Tags carry a numeric code, so the first run of ASCII digits is taken. Returns an
/// empty string when the text has no digits; the caller validates it like any other
/// typed code.
pub fn extract_candidate_code(ocr_text: &str) -> String {
    let digits = DIGIT_RUN.get_or_init(|| Regex::new(r"[0-9]+").expect("valid digit pattern"));
    let candidate = digits
        .find(ocr_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    #[cfg(feature = "tracing")]
    if candidate.is_empty() {
        tracing::debug!(text_len = ocr_text.len(), "no digits found in OCR text");
    }

    candidate
}
