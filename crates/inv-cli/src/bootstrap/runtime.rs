//! # Application Runtime
//!
//! Holds the wired dependencies and the resolved settings for one command
//! invocation, and hands out use cases through [`UseCases`].

use inv_app::usecases::{
    BeginInspection, DeleteItems, DraftInspectionComment, FindItem, IdentifyItem, InspectItem,
    ListItems, PreviewDeletion, RegisterItem, UpdateItem,
};
use inv_app::AppDeps;

use super::wiring::Settings;

pub struct AppRuntime {
    pub deps: AppDeps,
    settings: Settings,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, settings: Settings) -> Self {
        Self { deps, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Suggested situation labels for forms.
    pub fn statuses(&self) -> &[String] {
        &self.settings.statuses
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Use case accessor.
///
/// Each call builds a fresh use case from the runtime's ports; use cases hold
/// no state between calls.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    fn deps(&self) -> &AppDeps {
        &self.runtime.deps
    }

    pub fn register_item(&self) -> RegisterItem {
        RegisterItem::from_ports(self.deps().item_store.clone(), self.deps().clock.clone())
    }

    pub fn update_item(&self) -> UpdateItem {
        UpdateItem::from_ports(self.deps().item_store.clone(), self.deps().clock.clone())
    }

    pub fn inspect_item(&self) -> InspectItem {
        InspectItem::from_ports(self.deps().item_store.clone(), self.deps().clock.clone())
    }

    pub fn find_item(&self) -> FindItem {
        FindItem::from_port(self.deps().item_store.clone())
    }

    pub fn list_items(&self) -> ListItems {
        ListItems::from_port(self.deps().item_store.clone())
    }

    pub fn preview_deletion(&self) -> PreviewDeletion {
        PreviewDeletion::from_port(self.deps().item_store.clone())
    }

    pub fn delete_items(&self) -> DeleteItems {
        DeleteItems::from_port(self.deps().item_store.clone())
    }

    pub fn begin_inspection(&self) -> BeginInspection {
        BeginInspection::from_port(self.deps().item_store.clone())
    }

    pub fn identify_item(&self) -> IdentifyItem {
        IdentifyItem::from_ports(
            self.deps().code_reader.clone(),
            self.deps().item_store.clone(),
        )
    }

    pub fn draft_inspection_comment(&self) -> DraftInspectionComment {
        DraftInspectionComment::from_port(
            self.deps().image_describer.clone(),
            self.runtime.settings.describe_prompt.clone(),
        )
    }
}
