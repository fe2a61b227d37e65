//! Situation labels.
//!
//! Status is stored as free text. The labels below are only suggestions offered
//! by forms; any non-blank label is accepted.

/// Labels offered when no list is configured.
pub const SUGGESTED_STATUSES: &[&str] = &[
    "in use",
    "on loan",
    "awaiting distribution",
    "awaiting confirmation",
    "to be disposed",
    "internal stock",
    "in repair",
    "to repair",
    "in transit",
];

/// Case-insensitive membership test against a suggestion list.
pub fn is_suggested<S: AsRef<str>>(status: &str, suggestions: &[S]) -> bool {
    let wanted = status.trim();
    suggestions
        .iter()
        .any(|s| s.as_ref().eq_ignore_ascii_case(wanted))
}
