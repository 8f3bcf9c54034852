//! Row records for `data.json`.

use serde_json::{Map, Number};

use crate::processing::format_timestamp;
use crate::types::{DataSet, Value};

/// Convert one cell to JSON. Nulls and non-finite floats become `null`.
pub fn to_json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Int64(v) => serde_json::Value::Number((*v).into()),
        Value::Float64(v) => Number::from_f64(*v)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Bool(v) => serde_json::Value::Bool(*v),
        Value::Utf8(s) => serde_json::Value::String(s.clone()),
        Value::Timestamp(ts) => serde_json::Value::String(format_timestamp(ts)),
    }
}

/// One JSON object per row, keyed by column name in schema order.
///
/// Every column appears in every object; missing cells are explicit `null`s.
pub fn data_records(dataset: &DataSet) -> serde_json::Value {
    let records = dataset
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, serde_json::Value> = dataset
                .schema
                .field_names()
                .zip(row.iter())
                .map(|(name, value)| (name.to_owned(), to_json_value(value)))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect();
    serde_json::Value::Array(records)
}
