//! Column presence and uniqueness checks.

use std::collections::HashSet;

use crate::error::{PublishError, PublishResult};
use crate::types::{DataSet, Schema};

/// Required names absent from `schema`, in the order they were requested.
pub fn find_missing_columns<S: AsRef<str>>(schema: &Schema, required: &[S]) -> Vec<String> {
    required
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| schema.index_of(name).is_none())
        .map(str::to_owned)
        .collect()
}

/// Column names that occur more than once, each reported once in first-seen order.
pub fn find_duplicate_columns(schema: &Schema) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for name in schema.field_names() {
        if !seen.insert(name) && !duplicates.iter().any(|d| d == name) {
            duplicates.push(name.to_owned());
        }
    }
    duplicates
}

/// Check that every `required` column is present and that no column name repeats.
///
/// Returns the dataset unchanged on success. Missing columns are reported before duplicates;
/// [`PublishError::MissingColumns`] lists every absent name, not just the first.
pub fn validate<S: AsRef<str>>(dataset: DataSet, required: &[S]) -> PublishResult<DataSet> {
    let missing = find_missing_columns(&dataset.schema, required);
    if !missing.is_empty() {
        return Err(PublishError::MissingColumns { columns: missing });
    }

    let duplicates = find_duplicate_columns(&dataset.schema);
    if !duplicates.is_empty() {
        return Err(PublishError::DuplicateColumns { columns: duplicates });
    }

    Ok(dataset)
}
