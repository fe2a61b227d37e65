//! Command handlers
//!
//! Each handler calls one or two use cases through [`AppRuntime::usecases`],
//! converts the result to a DTO and hands it to [`Output`].

pub mod dto;
pub mod error;
pub mod inspection;
pub mod items;
pub mod output;
pub mod render;
pub mod vision;

pub use error::{CommandError, ErrorKind};
pub use output::Output;

use crate::bootstrap::AppRuntime;
use crate::cli::Command;

pub async fn dispatch(
    runtime: &AppRuntime,
    output: &Output,
    command: Command,
) -> Result<(), CommandError> {
    match command {
        Command::Register(args) => items::register(runtime, output, args).await,
        Command::Find { code } => items::find(runtime, output, &code).await,
        Command::Update { code, fields } => items::update(runtime, output, &code, fields).await,
        Command::Delete { codes, yes } => items::delete(runtime, output, &codes, yes).await,
        Command::List => items::list(runtime, output).await,
        Command::Lookup { code } => inspection::lookup(runtime, output, &code).await,
        Command::Inspect { code, fields } => {
            inspection::inspect(runtime, output, &code, fields).await
        }
        Command::Statuses => inspection::statuses(runtime, output),
        Command::Identify { image } => vision::identify(runtime, output, &image).await,
        Command::DraftComment { image } => vision::draft_comment(runtime, output, &image).await,
    }
}

/// Prints a note when a submitted status is not one of the suggestions.
/// Any label is accepted; the note only helps catch typos.
pub(crate) fn note_unusual_status(runtime: &AppRuntime, output: &Output, status: Option<&str>) {
    let Some(status) = status else {
        return;
    };
    if !inv_core::item::status::is_suggested(status, runtime.statuses()) {
        output.note(&format!(
            "status \"{}\" is not one of the suggested statuses (see `inventory statuses`)",
            status.trim()
        ));
    }
}
