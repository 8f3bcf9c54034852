//! CSV ingestion implementation.
//!
//! The dialect is fixed: comma delimiter, a header row, `"` quoting. Column types are not
//! supplied by the caller; each column is assigned a [`DataType`] from the cells it holds.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{PublishError, PublishResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::timestamp::parse_timestamp;

/// Cell text treated as "no value" (compared after trimming surrounding whitespace).
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
    "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

/// Returns `true` if `raw` represents a missing value.
pub fn is_missing_token(raw: &str) -> bool {
    MISSING_VALUE_TOKENS.contains(&raw.trim())
}

/// The reader configuration used by every loader path.
///
/// `flexible` is on so that short rows can be padded with nulls; long rows are rejected
/// by [`ingest_csv_from_reader`].
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).delimiter(b',').flexible(true);
    builder
}

/// Ingest a CSV file into an in-memory [`DataSet`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> PublishResult<DataSet> {
    let path = path.as_ref();
    let source_id = path.display().to_string();
    let file = File::open(path).map_err(|e| PublishError::SourceUnavailable {
        source_id: source_id.clone(),
        message: e.to_string(),
    })?;
    let mut rdr = reader_builder().from_reader(file);
    read_dataset(&mut rdr, &source_id)
}

/// Ingest CSV text held in memory (e.g. a fetched response body).
pub fn ingest_csv_from_bytes(source_id: &str, bytes: &[u8]) -> PublishResult<DataSet> {
    let mut rdr = reader_builder().from_reader(bytes);
    read_dataset(&mut rdr, source_id)
}

/// Ingest CSV data from an existing CSV reader.
///
/// Rules:
///
/// - The first record is the header; an input without one is a parse error.
/// - Empty header names become `Unnamed: {index}`.
/// - Rows shorter than the header are padded with [`Value::Null`]; longer rows are an error.
/// - Missing-value tokens (see [`MISSING_VALUE_TOKENS`]) become [`Value::Null`].
pub fn ingest_csv_from_reader<R: Read>(rdr: &mut csv::Reader<R>) -> PublishResult<DataSet> {
    read_dataset(rdr, "<reader>")
}

fn read_dataset<R: Read>(rdr: &mut csv::Reader<R>, source_id: &str) -> PublishResult<DataSet> {
    let headers = rdr
        .headers()
        .map_err(|e| PublishError::from_csv(source_id, e))?
        .clone();
    if headers.is_empty() {
        return Err(PublishError::ParseError {
            row: 0,
            message: "no columns to parse from input".to_string(),
        });
    }

    let names: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            if h.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                h.to_owned()
            }
        })
        .collect();
    let width = names.len();

    let mut raw_rows: Vec<Vec<Option<String>>> = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| PublishError::from_csv(source_id, e))?;
        if record.len() > width {
            return Err(PublishError::ParseError {
                row: record.position().map(|p| p.line()).unwrap_or(0),
                message: format!("expected {width} fields, saw {}", record.len()),
            });
        }

        let row = (0..width)
            .map(|idx| match record.get(idx) {
                Some(raw) if !is_missing_token(raw) => Some(raw.to_owned()),
                _ => None,
            })
            .collect();
        raw_rows.push(row);
    }

    let fields: Vec<Field> = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            // a header with no data rows has no values to type
            let data_type = if raw_rows.is_empty() {
                DataType::Utf8
            } else {
                infer_data_type(raw_rows.iter().filter_map(|row| row[idx].as_deref()))
            };
            debug!(column = %name, ?data_type, "inferred column type");
            Field::new(name, data_type)
        })
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(fields.iter())
                .map(|(cell, field)| match cell {
                    Some(raw) => parse_typed_value(field.data_type, raw),
                    None => Value::Null,
                })
                .collect()
        })
        .collect();

    Ok(DataSet::new(Schema::new(fields), rows))
}

/// Pick the narrowest [`DataType`] that every present (non-missing) cell parses as.
///
/// Order: integer, float, boolean, timestamp, text. A column with no present cells is
/// [`DataType::Float64`]; callers decide what a column with no rows at all is.
pub fn infer_data_type<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> DataType {
    let mut cells = cells.peekable();
    if cells.peek().is_none() {
        return DataType::Float64;
    }

    let candidates: [(DataType, fn(&str) -> bool); 4] = [
        (DataType::Int64, |s: &str| s.trim().parse::<i64>().is_ok()),
        (DataType::Float64, |s: &str| s.trim().parse::<f64>().is_ok()),
        (DataType::Bool, |s: &str| parse_bool(s).is_some()),
        (DataType::Timestamp, |s: &str| parse_timestamp(s).is_some()),
    ];
    candidates
        .into_iter()
        .find(|(_, accepts)| cells.clone().all(|s| accepts(s)))
        .map(|(data_type, _)| data_type)
        .unwrap_or(DataType::Utf8)
}

fn parse_typed_value(data_type: DataType, raw: String) -> Value {
    let trimmed = raw.trim();
    let parsed = match data_type {
        DataType::Int64 => trimmed.parse::<i64>().ok().map(Value::Int64),
        DataType::Float64 => trimmed.parse::<f64>().ok().map(Value::Float64),
        DataType::Bool => parse_bool(trimmed).map(Value::Bool),
        DataType::Timestamp => parse_timestamp(trimmed).map(Value::Timestamp),
        DataType::Utf8 => None,
    };
    // Inference guarantees the typed parse succeeds; text keeps the cell verbatim.
    parsed.unwrap_or_else(|| Value::Utf8(raw))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim() {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}
