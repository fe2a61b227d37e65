//! Item table <-> CSV mapping.
//!
//! ## Column normalization
//!
//! - The canonical header is written on every save, followed by unknown columns.
//! - Historical Portuguese headers are read as aliases of the canonical ones.
//! - Recognized columns missing from a table load as empty text.
//! - Unknown columns are carried on each item and written back unchanged. A repeated
//!   header gets a `.1`, `.2`, ... suffix and a blank header becomes `Unnamed: <index>`,
//!   so every column keeps a distinct name.
//! - Short rows load with the missing trailing cells empty; a row longer than the
//!   header is malformed.
//! - Every value, `code` included, is kept as text exactly as stored.

use std::collections::HashSet;

use inv_core::ports::StoreError;
use inv_core::{InventoryItem, ItemCode};

/// Header written on save, in this order.
pub const CANONICAL_COLUMNS: [&str; 7] = [
    "code",
    "name",
    "location",
    "status",
    "created_at",
    "updated_at",
    "comment",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Code,
    Name,
    Location,
    Status,
    CreatedAt,
    UpdatedAt,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Column {
    Known(Field),
    Extra(String),
}

fn recognize(header: &str) -> Option<Field> {
    match header.trim() {
        "code" | "codigo_barras" | "BMP" => Some(Field::Code),
        "name" | "nome_item" | "Itens" => Some(Field::Name),
        "location" | "apartamento" => Some(Field::Location),
        "status" | "situacao" => Some(Field::Status),
        "created_at" | "data_cadastro" => Some(Field::CreatedAt),
        "updated_at" | "data_atualizacao" => Some(Field::UpdatedAt),
        "comment" | "ultimo_comentario" => Some(Field::Comment),
        _ => None,
    }
}

/// Maps each header cell to a column. A field seen twice keeps its first column;
/// the repeat is carried as an unknown column so its data survives.
fn classify(headers: &::csv::StringRecord) -> Vec<Column> {
    let mut seen = Vec::new();
    let mut used: HashSet<String> = CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect();

    headers
        .iter()
        .enumerate()
        .map(|(index, header)| match recognize(header) {
            Some(field) if !seen.contains(&field) => {
                seen.push(field);
                used.insert(header.to_string());
                Column::Known(field)
            }
            _ => {
                let base = if header.trim().is_empty() {
                    format!("Unnamed: {index}")
                } else {
                    header.to_string()
                };
                Column::Extra(unique_name(base, &mut used))
            }
        })
        .collect()
}

/// `base` if unused, otherwise the first free `base.1`, `base.2`, ...
fn unique_name(base: String, used: &mut HashSet<String>) -> String {
    let mut name = base.clone();
    let mut suffix = 1;
    while used.contains(&name) {
        name = format!("{base}.{suffix}");
        suffix += 1;
    }
    used.insert(name.clone());
    name
}

fn malformed(err: ::csv::Error) -> StoreError {
    let line = err.position().map(|p| p.line());
    StoreError::Malformed {
        line,
        message: err.to_string(),
    }
}

fn blank_item() -> InventoryItem {
    InventoryItem {
        code: ItemCode::new(String::new()),
        name: String::new(),
        location: String::new(),
        status: String::new(),
        created_at: String::new(),
        updated_at: String::new(),
        comment: String::new(),
        extra: Vec::new(),
    }
}

/// Parses a whole table. An empty input is an empty table.
pub fn decode_table(bytes: &[u8]) -> Result<Vec<InventoryItem>, StoreError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns = classify(reader.headers().map_err(malformed)?);

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        if record.len() > columns.len() {
            return Err(StoreError::Malformed {
                line: record.position().map(|p| p.line()),
                message: format!(
                    "found record with {} fields, but the header has {} fields",
                    record.len(),
                    columns.len()
                ),
            });
        }
        let mut item = blank_item();

        for (column, value) in columns.iter().zip(record.iter()) {
            let value = value.to_string();
            match column {
                Column::Known(Field::Code) => item.code = ItemCode::new(value),
                Column::Known(Field::Name) => item.name = value,
                Column::Known(Field::Location) => item.location = value,
                Column::Known(Field::Status) => item.status = value,
                Column::Known(Field::CreatedAt) => item.created_at = value,
                Column::Known(Field::UpdatedAt) => item.updated_at = value,
                Column::Known(Field::Comment) => item.comment = value,
                Column::Extra(name) => item.extra.push((name.clone(), value)),
            }
        }
        items.push(item);
    }

    Ok(items)
}

/// Unknown column names across all items, in first-seen order.
fn extra_columns(items: &[InventoryItem]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for item in items {
        for (name, _) in &item.extra {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

fn extra_value<'a>(item: &'a InventoryItem, column: &str) -> &'a str {
    item.extra
        .iter()
        .find(|(name, _)| name == column)
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

/// Serializes a whole table, header first.
pub fn encode_table(items: &[InventoryItem]) -> Result<Vec<u8>, StoreError> {
    let extras = extra_columns(items);
    let write_err = |e: ::csv::Error| StoreError::Write(e.to_string());

    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let header = CANONICAL_COLUMNS
        .iter()
        .copied()
        .chain(extras.iter().map(String::as_str));
    writer.write_record(header).map_err(write_err)?;

    for item in items {
        let row = [
            item.code.as_str(),
            item.name.as_str(),
            item.location.as_str(),
            item.status.as_str(),
            item.created_at.as_str(),
            item.updated_at.as_str(),
            item.comment.as_str(),
        ];
        let extra = extras.iter().map(|column| extra_value(item, column));
        writer
            .write_record(row.into_iter().chain(extra))
            .map_err(write_err)?;
    }

    writer
        .into_inner()
        .map_err(|e| StoreError::Write(e.to_string()))
}
