use serde::Serialize;

use inv_app::usecases::{Identification, InspectionTarget, UpsertOutcome};
use inv_core::InventoryItem;

/// Item as printed by the command line.
///
/// Keeps the output format independent of the domain model; unknown table
/// columns are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDto {
    pub code: String,
    pub name: String,
    pub location: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub comment: String,
}

impl From<InventoryItem> for ItemDto {
    fn from(item: InventoryItem) -> Self {
        Self {
            code: item.code.into_inner(),
            name: item.name,
            location: item.location,
            status: item.status,
            created_at: item.created_at,
            updated_at: item.updated_at,
            comment: item.comment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertDto {
    /// "created" or "updated"
    pub outcome: &'static str,
    pub item: ItemDto,
}

impl From<UpsertOutcome> for UpsertDto {
    fn from(outcome: UpsertOutcome) -> Self {
        match outcome {
            UpsertOutcome::Created(item) => Self {
                outcome: "created",
                item: item.into(),
            },
            UpsertOutcome::Updated(item) => Self {
                outcome: "updated",
                item: item.into(),
            },
        }
    }
}

/// What the inspection form would start from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionTargetDto {
    pub code: String,
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemDto>,
}

impl From<InspectionTarget> for InspectionTargetDto {
    fn from(target: InspectionTarget) -> Self {
        match target {
            InspectionTarget::Existing { item } => Self {
                code: item.code.as_str().to_string(),
                registered: true,
                item: Some(item.into()),
            },
            InspectionTarget::Unregistered { code } => Self {
                code: code.into_inner(),
                registered: false,
                item: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentificationDto {
    pub ocr_text: String,
    pub candidate_code: String,
    pub target: InspectionTargetDto,
}

impl From<Identification> for IdentificationDto {
    fn from(found: Identification) -> Self {
        Self {
            ocr_text: found.ocr_text,
            candidate_code: found.candidate_code,
            target: found.target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionDto {
    /// False when only a preview was shown
    pub confirmed: bool,
    pub candidates: Vec<ItemDto>,
    pub removed: usize,
}
