//! Field-presence rules.
//!
//! `name`, `location` and `status` must be non-blank on every persisted item;
//! `comment` may be anything, including empty.

use super::changes::{ItemChanges, NewItem};
use super::error::{RegistryError, RegistryField};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks a registration candidate. All missing fields are reported at once.
pub fn validate_new_item(new_item: &NewItem) -> Result<(), RegistryError> {
    let mut missing = Vec::new();
    if new_item.code.is_blank() {
        missing.push(RegistryField::Code);
    }
    if is_blank(&new_item.name) {
        missing.push(RegistryField::Name);
    }
    if is_blank(&new_item.location) {
        missing.push(RegistryField::Location);
    }
    if is_blank(&new_item.status) {
        missing.push(RegistryField::Status);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RegistryError::missing(missing))
    }
}

/// Checks an update submission: a required field may be omitted, but not blanked.
pub fn validate_changes(changes: &ItemChanges) -> Result<(), RegistryError> {
    let mut missing = Vec::new();
    let required = [
        (RegistryField::Name, &changes.name),
        (RegistryField::Location, &changes.location),
        (RegistryField::Status, &changes.status),
    ];
    for (field, value) in required {
        if value.as_deref().is_some_and(is_blank) {
            missing.push(field);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RegistryError::missing(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemCode;

    fn candidate(code: &str, name: &str, location: &str, status: &str) -> NewItem {
        NewItem {
            code: ItemCode::from(code),
            name: name.to_string(),
            location: location.to_string(),
            status: status.to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_complete_candidate_is_valid() {
        assert!(validate_new_item(&candidate("B1", "Desk", "101A", "in use")).is_ok());
    }

    #[test]
    fn test_blank_name_is_reported() {
        let err = validate_new_item(&candidate("B1", "", "101A", "in use")).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation { ref missing } if missing == &vec![RegistryField::Name]
        ));
    }

    #[test]
    fn test_whitespace_counts_as_blank_and_all_fields_are_listed() {
        let err = validate_new_item(&candidate(" ", "  ", "", "\t")).unwrap_err();
        match err {
            RegistryError::Validation { missing } => assert_eq!(
                missing,
                vec![
                    RegistryField::Code,
                    RegistryField::Name,
                    RegistryField::Location,
                    RegistryField::Status
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_changes_may_omit_required_fields() {
        let changes = ItemChanges {
            status: Some("in repair".to_string()),
            ..ItemChanges::default()
        };
        assert!(validate_changes(&changes).is_ok());
    }

    #[test]
    fn test_changes_may_not_blank_required_fields() {
        let changes = ItemChanges {
            location: Some(" ".to_string()),
            comment: Some(String::new()),
            ..ItemChanges::default()
        };
        let err = validate_changes(&changes).unwrap_err();
        assert_eq!(err.to_string(), "missing required field(s): location");
    }
}
