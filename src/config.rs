//! Run configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default output directory (suitable for serving with GitHub Pages).
pub const DEFAULT_OUT_DIR: &str = "docs";

/// Free-text provenance supplied by whoever runs the ingestion. Never inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provenance {
    pub citation: String,
    pub license: String,
    pub doi: String,
    pub contact: String,
    pub notes: String,
}

/// Everything one publish run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Local path or `http(s)://` URL of the CSV.
    pub input: String,
    /// Directory receiving `data.json`, `columns.json` and `metadata.json`.
    pub out_dir: PathBuf,
    /// Columns that must be present in the header.
    pub required_columns: Vec<String>,
    pub provenance: Provenance,
    /// Suppress per-file confirmations on stdout.
    pub quiet: bool,
}

impl PublishConfig {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            input: String::new(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            required_columns: Vec::new(),
            provenance: Provenance::default(),
            quiet: false,
        }
    }
}
