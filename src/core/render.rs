//! Catalog renderers.
//!
//! - `key-value`: `{ id: defaultMessage }`, later ids overwrite earlier ones
//! - `csv`: `id,defaultMessage,description,file`, every field quoted
//! - `json`: the full catalog as an array of records

use std::fmt;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::catalog::{Catalog, ExtractionRecord};

/// Key used in the `key-value` output for records without an `id`.
pub const MISSING_ID_KEY: &str = "null";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    KeyValue,
    Csv,
    #[default]
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::KeyValue => write!(f, "key-value"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render the catalog in the requested format.
pub fn render(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::KeyValue => render_key_value(catalog),
        OutputFormat::Csv => Ok(render_csv(catalog)),
        OutputFormat::Json => render_json(catalog),
    }
}

/// Collapse the catalog into an `id -> defaultMessage` object.
///
/// Keys keep first-insertion order; a repeated id takes the value of its
/// last record. A record without an id lands under [`MISSING_ID_KEY`].
pub fn render_key_value(catalog: &Catalog) -> Result<String> {
    let mut messages = Map::new();
    for record in catalog {
        let key = record.id.as_deref().unwrap_or(MISSING_ID_KEY);
        let value = match &record.default_message {
            Some(message) => Value::String(message.clone()),
            None => Value::Null,
        };
        messages.insert(key.to_string(), value);
    }
    serde_json::to_string_pretty(&messages).context("Failed to serialize key-value messages.")
}

/// One line per record: `"id","defaultMessage","description","file"`.
pub fn render_csv(catalog: &Catalog) -> String {
    catalog
        .into_iter()
        .map(csv_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn csv_row(record: &ExtractionRecord) -> String {
    [
        record.id.as_deref(),
        record.default_message.as_deref(),
        record.description.as_deref(),
        Some(record.file.as_str()),
    ]
    .into_iter()
    .map(csv_field)
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a field, doubling inner quotes. A missing value becomes `""`.
fn csv_field(value: Option<&str>) -> String {
    format!("\"{}\"", value.unwrap_or_default().replace('"', "\"\""))
}

/// The whole catalog as a pretty-printed array, `null` for missing fields.
pub fn render_json(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).context("Failed to serialize catalog.")
}
