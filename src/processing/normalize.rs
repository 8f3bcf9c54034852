//! Make a validated [`DataSet`] JSON-ready.
//!
//! Timestamps become fixed-format UTC text and NaN floats become [`Value::Null`]. Nothing
//! here can fail.

use chrono::{DateTime, Utc};

use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Output format for temporal cells: UTC, second precision, no fraction.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A normalized dataset plus the schema it had before normalization.
///
/// `source_schema` keeps [`DataType::Timestamp`] on columns whose cells are now text, so
/// sort hints can follow the original semantic type.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDataSet {
    pub source_schema: Schema,
    pub dataset: DataSet,
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Normalize `dataset`: timestamps to text, NaN to null. Other values are unchanged.
pub fn normalize(dataset: DataSet) -> NormalizedDataSet {
    let source_schema = dataset.schema.clone();
    let schema = Schema::new(
        source_schema
            .fields
            .iter()
            .map(|f| match f.data_type {
                DataType::Timestamp => Field::new(f.name.clone(), DataType::Utf8),
                _ => f.clone(),
            })
            .collect(),
    );

    let dataset = dataset.map_rows(schema, |row| row.into_iter().map(normalize_value).collect());
    NormalizedDataSet {
        source_schema,
        dataset,
    }
}

fn normalize_value(value: Value) -> Value {
    match value {
        Value::Timestamp(ts) => Value::Utf8(format_timestamp(&ts)),
        Value::Float64(v) if v.is_nan() => Value::Null,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_become_second_precision_text() {
        let ts = Utc.with_ymd_and_hms(2023, 2, 15, 8, 30, 1).unwrap()
            + chrono::Duration::milliseconds(750);
        let ds = DataSet::new(
            Schema::new(vec![
                Field::new("joined", DataType::Timestamp),
                Field::new("score", DataType::Float64),
            ]),
            vec![
                vec![Value::Timestamp(ts), Value::Float64(f64::NAN)],
                vec![Value::Null, Value::Float64(1.5)],
            ],
        );

        let out = normalize(ds);
        assert_eq!(out.source_schema.fields[0].data_type, DataType::Timestamp);
        assert_eq!(out.dataset.schema.fields[0].data_type, DataType::Utf8);
        assert_eq!(
            out.dataset.rows,
            vec![
                vec![Value::Utf8("2023-02-15T08:30:01Z".to_string()), Value::Null],
                vec![Value::Null, Value::Float64(1.5)],
            ]
        );
    }

    #[test]
    fn non_temporal_values_pass_through() {
        let ds = DataSet::new(
            Schema::new(vec![
                Field::new("when", DataType::Utf8),
                Field::new("ok", DataType::Bool),
            ]),
            vec![vec![Value::Utf8("2023-99-99".to_string()), Value::Bool(true)]],
        );
        let out = normalize(ds.clone());
        assert_eq!(out.dataset, ds);
    }
}
