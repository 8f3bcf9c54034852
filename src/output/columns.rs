//! Column definitions for the client-side table widget (`columns.json`).

use serde::Serialize;

use crate::types::{DataType, Schema};

/// Client-side sort behavior for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortKind {
    #[serde(rename = "number")]
    Numeric,
    #[serde(rename = "date")]
    Temporal,
    #[serde(rename = "string")]
    Textual,
}

impl SortKind {
    pub fn for_data_type(data_type: DataType) -> Self {
        match data_type {
            DataType::Int64 | DataType::Float64 => Self::Numeric,
            DataType::Timestamp => Self::Temporal,
            DataType::Bool | DataType::Utf8 => Self::Textual,
        }
    }

    /// The sorter tag as written to `columns.json`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "number",
            Self::Temporal => "date",
            Self::Textual => "string",
        }
    }
}

/// One entry of `columns.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub title: String,
    pub field: String,
    pub header_filter: bool,
    pub hoz_align: &'static str,
    pub sorter: SortKind,
    pub download: bool,
    /// Always `None`; serialized as `null` so the widget sizes the column itself.
    pub width: Option<u32>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            title: title_case_header(name),
            field: name.to_owned(),
            header_filter: true,
            hoz_align: "left",
            sorter: SortKind::for_data_type(data_type),
            download: true,
            width: None,
        }
    }
}

/// One definition per field, in schema order.
///
/// Pass the schema as loaded (before normalization) so temporal columns keep the `date`
/// sorter.
pub fn infer_column_definitions(schema: &Schema) -> Vec<ColumnDefinition> {
    schema
        .fields
        .iter()
        .map(|f| ColumnDefinition::new(&f.name, f.data_type))
        .collect()
}

/// Display title for a column name: underscores become spaces, and each run of cased
/// letters is capitalized (first letter upper, the rest lower). Uncased characters such as
/// digits, punctuation or CJK start a new run.
pub fn title_case_header(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_cased = false;
    for ch in name.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        let is_cased = ch.is_lowercase() || ch.is_uppercase();
        if is_cased {
            if prev_is_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
        } else {
            out.push(ch);
        }
        prev_is_cased = is_cased;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    #[test]
    fn titles() {
        assert_eq!(title_case_header("joined"), "Joined");
        assert_eq!(title_case_header("user_id"), "User Id");
        assert_eq!(title_case_header("SAMPLE_SIZE"), "Sample Size");
        assert_eq!(title_case_header("dose2mg"), "Dose2Mg");
        assert_eq!(title_case_header("o'brien"), "O'Brien");
        assert_eq!(title_case_header("a中b"), "A中B");
        assert_eq!(title_case_header("größe_ÄRZTE"), "Größe Ärzte");
        assert_eq!(title_case_header(""), "");
    }

    #[test]
    fn sorter_follows_data_type() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("name", DataType::Utf8),
            Field::new("score", DataType::Float64),
            Field::new("joined", DataType::Timestamp),
            Field::new("active", DataType::Bool),
        ]);
        let sorters: Vec<&str> = infer_column_definitions(&schema)
            .iter()
            .map(|c| c.sorter.as_str())
            .collect();
        assert_eq!(sorters, vec!["number", "string", "number", "date", "string"]);
    }

    #[test]
    fn serializes_widget_keys() {
        let def = ColumnDefinition::new("sample_size", DataType::Int64);
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Sample Size",
                "field": "sample_size",
                "headerFilter": true,
                "hozAlign": "left",
                "sorter": "number",
                "download": true,
                "width": null
            })
        );
    }
}
