//! Inspection flow commands

use super::dto::{InspectionTargetDto, UpsertDto};
use super::{note_unusual_status, render, CommandError, Output};
use crate::bootstrap::AppRuntime;
use crate::cli::FieldArgs;

pub async fn lookup(runtime: &AppRuntime, output: &Output, code: &str) -> Result<(), CommandError> {
    let target = runtime.usecases().begin_inspection().execute(code).await?;
    output.emit(&InspectionTargetDto::from(target), render::inspection_target)
}

pub async fn inspect(
    runtime: &AppRuntime,
    output: &Output,
    code: &str,
    fields: FieldArgs,
) -> Result<(), CommandError> {
    let status = fields.status.clone();

    let outcome = runtime
        .usecases()
        .inspect_item()
        .execute(code, fields.into())
        .await?;
    note_unusual_status(runtime, output, status.as_deref());

    output.emit(&UpsertDto::from(outcome), render::upsert)
}

pub fn statuses(runtime: &AppRuntime, output: &Output) -> Result<(), CommandError> {
    output.emit(&runtime.statuses(), |labels| labels.join("\n"))
}
