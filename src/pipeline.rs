//! One publish run: load → validate → normalize → emit.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::PublishConfig;
use crate::error::PublishResult;
use crate::ingestion::{ingest_from_source, IngestionOptions, Source};
use crate::output::emit;
use crate::processing::{normalize, validate};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub columns: usize,
    /// Output files, in write order.
    pub written: Vec<PathBuf>,
}

/// Run the pipeline with default ingestion options.
pub fn run(config: &PublishConfig) -> PublishResult<RunSummary> {
    run_with_options(config, &IngestionOptions::default())
}

/// Run the pipeline, reporting the load outcome to `options.observer`.
///
/// Load and validation failures return before the output directory is touched.
pub fn run_with_options(config: &PublishConfig, options: &IngestionOptions) -> PublishResult<RunSummary> {
    let source = Source::parse(&config.input);
    debug!(%source, remote = source.is_remote(), "loading");

    let dataset = ingest_from_source(&source, options)?;
    let dataset = validate(dataset, &config.required_columns)?;
    let rows = dataset.row_count();
    let columns = dataset.column_count();

    let normalized = normalize(dataset);
    let report = emit(&normalized, &config.out_dir, &source.file_name(), &config.provenance)?;
    info!(rows, columns, out_dir = %config.out_dir.display(), "ingestion complete");

    Ok(RunSummary {
        rows,
        columns,
        written: report.written,
    })
}
