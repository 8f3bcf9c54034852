//! Loader: source access, CSV parsing and per-column type inference.
//!
//! Most callers should use [`ingest_from_source`] (from [`unified`]) which:
//!
//! - reads a local path or fetches an `http(s)://` URL, chosen by [`Source::parse`]
//! - parses the CSV into an in-memory [`crate::types::DataSet`], typing each column
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]

pub mod csv;
pub mod observability;
pub mod source;
pub mod timestamp;
pub mod unified;

pub use observability::{
    IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, TracingObserver,
};
pub use source::{fetch_remote, fetch_remote_with_client, Source};
pub use unified::{ingest_from_source, IngestionOptions};
