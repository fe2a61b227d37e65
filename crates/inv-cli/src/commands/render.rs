//! Plain-text rendering for terminal output.

use super::dto::{DeletionDto, IdentificationDto, InspectionTargetDto, ItemDto, UpsertDto};

const TABLE_HEADERS: [&str; 5] = ["CODE", "NAME", "LOCATION", "STATUS", "UPDATED"];

pub fn item_details(item: &ItemDto) -> String {
    let rows = [
        ("code", item.code.as_str()),
        ("name", item.name.as_str()),
        ("location", item.location.as_str()),
        ("status", item.status.as_str()),
        ("created_at", item.created_at.as_str()),
        ("updated_at", item.updated_at.as_str()),
        ("comment", item.comment.as_str()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<11} {}", format!("{label}:"), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Column-aligned table in stored order.
pub fn item_table(items: &[ItemDto]) -> String {
    if items.is_empty() {
        return "no items registered".to_string();
    }

    let rows: Vec<[&str; 5]> = items
        .iter()
        .map(|i| {
            [
                i.code.as_str(),
                i.name.as_str(),
                i.location.as_str(),
                i.status.as_str(),
                i.updated_at.as_str(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    std::iter::once(TABLE_HEADERS)
        .chain(rows)
        .map(|row| format_row(&row, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(cells: &[&str; 5], widths: &[usize; 5]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

pub fn upsert(result: &UpsertDto) -> String {
    format!("item {}\n{}", result.outcome, item_details(&result.item))
}

pub fn inspection_target(target: &InspectionTargetDto) -> String {
    match &target.item {
        Some(item) => format!("registered item\n{}", item_details(item)),
        None => format!(
            "code {} is not registered; `inspect {}` with --name, --location and --status will register it",
            target.code, target.code
        ),
    }
}

pub fn identification(found: &IdentificationDto) -> String {
    format!(
        "ocr text:   {}\ncandidate:  {}\n{}",
        found.ocr_text.trim(),
        found.candidate_code,
        inspection_target(&found.target)
    )
}

pub fn deletion(result: &DeletionDto) -> String {
    if result.candidates.is_empty() {
        return "none of the selected codes are registered".to_string();
    }
    if result.confirmed {
        return format!("deleted {} item(s)", result.removed);
    }
    format!(
        "{}\n\n{} item(s) would be deleted permanently; re-run with --yes to confirm",
        item_table(&result.candidates),
        result.candidates.len()
    )
}
