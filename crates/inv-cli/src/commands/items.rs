//! Registry table commands

use std::collections::HashSet;

use inv_core::{ItemChanges, ItemCode, NewItem};

use super::dto::{DeletionDto, ItemDto};
use super::{note_unusual_status, render, CommandError, Output};
use crate::bootstrap::AppRuntime;
use crate::cli::{FieldArgs, RegisterArgs};

pub async fn register(
    runtime: &AppRuntime,
    output: &Output,
    args: RegisterArgs,
) -> Result<(), CommandError> {
    let new_item = NewItem {
        code: ItemCode::new(args.code.trim().to_string()),
        name: args.name,
        location: args.location,
        status: args.status,
        comment: args.comment,
    };
    let status = new_item.status.clone();

    let registered = runtime.usecases().register_item().execute(new_item).await?;
    note_unusual_status(runtime, output, Some(&status));

    output.emit(&ItemDto::from(registered), |item| {
        format!("item registered\n{}", render::item_details(item))
    })
}

pub async fn find(runtime: &AppRuntime, output: &Output, code: &str) -> Result<(), CommandError> {
    let found = runtime.usecases().find_item().execute(code).await?;
    let item = found.ok_or_else(|| {
        CommandError::not_found(format!("item code \"{}\" was not found", code.trim()))
    })?;

    output.emit(&ItemDto::from(item), render::item_details)
}

pub async fn update(
    runtime: &AppRuntime,
    output: &Output,
    code: &str,
    fields: FieldArgs,
) -> Result<(), CommandError> {
    let code = ItemCode::parse(code)?;
    let changes = ItemChanges::from(fields);
    if changes.is_empty() {
        return Err(CommandError::validation(
            "nothing to update: give at least one of --name, --location, --status, --comment",
        ));
    }
    let status = changes.status.clone();

    let updated = runtime.usecases().update_item().execute(&code, changes).await?;
    note_unusual_status(runtime, output, status.as_deref());

    output.emit(&ItemDto::from(updated), |item| {
        format!("item updated\n{}", render::item_details(item))
    })
}

/// Without `confirmed` only the preview is printed and nothing is removed.
pub async fn delete(
    runtime: &AppRuntime,
    output: &Output,
    codes: &[String],
    confirmed: bool,
) -> Result<(), CommandError> {
    let selected = codes
        .iter()
        .map(|c| ItemCode::parse(c))
        .collect::<Result<HashSet<_>, _>>()?;

    let candidates = runtime
        .usecases()
        .preview_deletion()
        .execute(&selected)
        .await?;

    let removed = if confirmed && !candidates.is_empty() {
        runtime.usecases().delete_items().execute(&selected).await?
    } else {
        0
    };

    let result = DeletionDto {
        confirmed,
        candidates: candidates.into_iter().map(ItemDto::from).collect(),
        removed,
    };
    output.emit(&result, render::deletion)
}

pub async fn list(runtime: &AppRuntime, output: &Output) -> Result<(), CommandError> {
    let items: Vec<ItemDto> = runtime
        .usecases()
        .list_items()
        .execute()
        .await?
        .into_iter()
        .map(ItemDto::from)
        .collect();

    output.emit(&items, |items| render::item_table(items))
}
