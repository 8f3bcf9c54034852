//! Provenance document (`metadata.json`).

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::Provenance;
use crate::types::DataSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunMetadata {
    /// UTC instant of emission, RFC 3339 with microseconds and a `Z` suffix.
    pub generated_at: String,
    pub source_filename: String,
    pub n_rows: usize,
    pub n_columns: usize,
    pub citation: String,
    pub license: String,
    pub doi: String,
    pub contact: String,
    pub notes: String,
}

impl RunMetadata {
    /// Stamp the current time and copy counts from `dataset` and text from `provenance`.
    pub fn new(source_filename: impl Into<String>, dataset: &DataSet, provenance: &Provenance) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            source_filename: source_filename.into(),
            n_rows: dataset.row_count(),
            n_columns: dataset.column_count(),
            citation: provenance.citation.clone(),
            license: provenance.license.clone(),
            doi: provenance.doi.clone(),
            contact: provenance.contact.clone(),
            notes: provenance.notes.clone(),
        }
    }
}
