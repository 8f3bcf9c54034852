//! Emitter: derive and write the three JSON documents.
//!
//! Files land in the output directory under fixed names, in this order:
//!
//! - [`DATA_FILE`]: row records ([`data_records`])
//! - [`COLUMNS_FILE`]: column definitions ([`infer_column_definitions`])
//! - [`METADATA_FILE`]: run provenance ([`RunMetadata`])
//!
//! Writes are independent; if one fails, files written before it stay on disk.

pub mod columns;
pub mod metadata;
pub mod records;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::Provenance;
use crate::error::PublishResult;
use crate::processing::NormalizedDataSet;

pub use columns::{infer_column_definitions, title_case_header, ColumnDefinition, SortKind};
pub use metadata::RunMetadata;
pub use records::{data_records, to_json_value};

pub const DATA_FILE: &str = "data.json";
pub const COLUMNS_FILE: &str = "columns.json";
pub const METADATA_FILE: &str = "metadata.json";

/// Paths written by [`emit`], in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    pub written: Vec<PathBuf>,
}

/// Write `value` as pretty-printed JSON (2-space indent, non-ASCII kept as-is).
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> PublishResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Create `out_dir` if needed and write `data.json`, `columns.json`, `metadata.json`.
pub fn emit(
    normalized: &NormalizedDataSet,
    out_dir: &Path,
    source_filename: &str,
    provenance: &Provenance,
) -> PublishResult<EmitReport> {
    fs::create_dir_all(out_dir)?;
    let mut report = EmitReport::default();

    let data_path = out_dir.join(DATA_FILE);
    write_json(&data_records(&normalized.dataset), &data_path)?;
    info!(path = %data_path.display(), "wrote {}", data_path.display());
    report.written.push(data_path);

    let columns_path = out_dir.join(COLUMNS_FILE);
    write_json(&infer_column_definitions(&normalized.source_schema), &columns_path)?;
    info!(path = %columns_path.display(), "wrote {}", columns_path.display());
    report.written.push(columns_path);

    let metadata_path = out_dir.join(METADATA_FILE);
    let metadata = RunMetadata::new(source_filename, &normalized.dataset, provenance);
    write_json(&metadata, &metadata_path)?;
    info!(path = %metadata_path.display(), "wrote {}", metadata_path.display());
    report.written.push(metadata_path);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalize;
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    #[test]
    fn write_json_is_pretty_and_keeps_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.json");
        write_json(&serde_json::json!({"name": "Zoë"}), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"name\": \"Zoë\"\n}\n");
    }

    #[test]
    fn emit_creates_nested_out_dir_and_writes_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site").join("docs");
        let ds = DataSet::new(
            Schema::new(vec![Field::new("id", DataType::Int64)]),
            vec![vec![Value::Int64(7)]],
        );

        let report = emit(&normalize(ds), &out, "ids.csv", &Provenance::default()).unwrap();
        assert_eq!(
            report.written,
            vec![out.join(DATA_FILE), out.join(COLUMNS_FILE), out.join(METADATA_FILE)]
        );
        for path in &report.written {
            assert!(path.is_file());
        }
    }

    #[test]
    fn emit_stops_at_failed_write_and_keeps_earlier_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("docs");
        fs::create_dir_all(out.join(COLUMNS_FILE)).unwrap();
        let ds = DataSet::new(
            Schema::new(vec![Field::new("id", DataType::Int64)]),
            vec![vec![Value::Int64(7)]],
        );

        let err = emit(&normalize(ds), &out, "ids.csv", &Provenance::default()).unwrap_err();
        assert!(matches!(err, crate::PublishError::Io(_)));
        assert!(out.join(DATA_FILE).is_file());
        assert!(!out.join(METADATA_FILE).exists());
    }

    #[test]
    fn emit_fails_when_out_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("docs");
        fs::write(&blocker, "not a directory").unwrap();
        let ds = DataSet::new(Schema::new(vec![]), vec![]);

        let err = emit(&normalize(ds), &blocker, "x.csv", &Provenance::default()).unwrap_err();
        assert!(matches!(err, crate::PublishError::Io(_)));
    }
}
