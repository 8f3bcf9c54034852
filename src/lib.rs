//! `tabular-publish` turns one CSV (a local file or an `http(s)://` URL) into the three JSON
//! files a static, filterable table page needs:
//!
//! - `data.json`: an array of row objects, keys in column order, missing cells as `null`
//! - `columns.json`: one column definition per column (title, field, sorter, ...)
//! - `metadata.json`: generation time, source name, row/column counts and provenance text
//!
//! The primary entrypoint is [`pipeline::run`], which executes four stages once:
//!
//! 1. [`ingestion`]: read the CSV and type each column (integer, float, bool, timestamp, text)
//! 2. [`processing::validate`]: required columns present, no duplicate names
//! 3. [`processing::normalize`]: timestamps to `YYYY-MM-DDTHH:MM:SSZ`, NaN to null
//! 4. [`output::emit`]: write the three documents
//!
//! Loader and validator failures abort before anything is written.
//!
//! ## Quick example
//!
//! ```no_run
//! use tabular_publish::config::{Provenance, PublishConfig};
//! use tabular_publish::pipeline;
//!
//! # fn main() -> Result<(), tabular_publish::PublishError> {
//! let config = PublishConfig {
//!     required_columns: vec!["id".to_string()],
//!     provenance: Provenance {
//!         license: "CC-BY 4.0".to_string(),
//!         ..Default::default()
//!     },
//!     ..PublishConfig::new("data/my_study_data.csv")
//! };
//! let summary = pipeline::run(&config)?;
//! println!("rows={} files={:?}", summary.rows, summary.written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with the stages directly
//!
//! ```rust
//! use tabular_publish::ingestion::csv::ingest_csv_from_bytes;
//! use tabular_publish::output::{data_records, infer_column_definitions};
//! use tabular_publish::processing::{normalize, validate};
//!
//! let csv = b"id,name,score,joined\n1,Alice,9.5,2023-01-01\n2,Bob,,2023-02-15\n";
//! let ds = ingest_csv_from_bytes("inline", csv).unwrap();
//! let ds = validate(ds, &["id"]).unwrap();
//! let normalized = normalize(ds);
//!
//! let sorters: Vec<&str> = infer_column_definitions(&normalized.source_schema)
//!     .iter()
//!     .map(|c| c.sorter.as_str())
//!     .collect();
//! assert_eq!(sorters, ["number", "string", "number", "date"]);
//!
//! let records = data_records(&normalized.dataset);
//! assert_eq!(records[1]["score"], serde_json::Value::Null);
//! assert_eq!(records[0]["joined"], "2023-01-01T00:00:00Z");
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: source access, CSV parsing, type inference, observers
//! - [`processing`]: validation and normalization
//! - [`output`]: column definitions, records, metadata and file writing
//! - [`types`]: schema + in-memory dataset types
//! - [`config`]: run configuration
//! - [`error`]: the crate-wide error type

pub mod config;
pub mod error;
pub mod ingestion;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{PublishError, PublishResult};
