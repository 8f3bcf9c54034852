use tracing::{error, info, warn};

use crate::error::PublishError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (bad content, failed validation).
    Error,
    /// Critical error (source unreachable, file-system failures).
    Critical,
}

impl IngestionSeverity {
    /// Severity of a failed run.
    pub fn for_error(e: &PublishError) -> Self {
        match e {
            PublishError::SourceUnavailable { .. } | PublishError::Io(_) => Self::Critical,
            PublishError::ParseError { .. }
            | PublishError::MissingColumns { .. }
            | PublishError::DuplicateColumns { .. }
            | PublishError::Json(_) => Self::Error,
        }
    }
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The source identifier as given (path or URL).
    pub source: String,
    /// Whether the source was fetched over HTTP.
    pub remote: bool,
}

/// Minimal stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of ingested rows.
    pub rows: usize,
    /// Number of columns in the header.
    pub columns: usize,
}

/// Observer interface for ingestion outcomes.
pub trait IngestionObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &PublishError) {}

    /// Called when an ingestion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &PublishError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Reports ingestion events as `tracing` events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        info!(
            source = %ctx.source,
            remote = ctx.remote,
            rows = stats.rows,
            columns = stats.columns,
            "read CSV with {} rows and {} columns",
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &PublishError) {
        warn!(source = %ctx.source, ?severity, %error, "ingestion failed");
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &PublishError) {
        error!(source = %ctx.source, ?severity, %error, "ALERT: ingestion failed");
    }
}
