//! Camera aids: tag OCR and comment drafting

use std::path::Path;

use super::dto::IdentificationDto;
use super::{render, CommandError, Output};
use crate::bootstrap::AppRuntime;

pub async fn identify(
    runtime: &AppRuntime,
    output: &Output,
    image: &Path,
) -> Result<(), CommandError> {
    let found = runtime.usecases().identify_item().execute(image).await?;
    output.emit(&IdentificationDto::from(found), render::identification)
}

/// The draft is only printed; it becomes the comment once passed to `inspect --comment`.
pub async fn draft_comment(
    runtime: &AppRuntime,
    output: &Output,
    image: &Path,
) -> Result<(), CommandError> {
    let draft = runtime
        .usecases()
        .draft_inspection_comment()
        .execute(image)
        .await?;
    output.emit(&draft, |draft| draft.text.clone())
}
