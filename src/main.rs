use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use tabular_publish::config::{Provenance, PublishConfig, DEFAULT_OUT_DIR};
use tabular_publish::ingestion::{IngestionOptions, TracingObserver};
use tabular_publish::{logging, pipeline};

/// Ingest CSV => JSON + Tabulator columns + metadata.
#[derive(Parser, Debug)]
#[command(name = "tabular-publish", version, about)]
struct Cli {
    /// Path or URL to CSV file
    #[arg(short, long)]
    input: String,

    /// Output folder (e.g. docs/ for GitHub Pages)
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Columns that must be present
    #[arg(short = 'r', long = "required-columns", num_args = 0..)]
    required_columns: Vec<String>,

    /// Citation string to include in downloads
    #[arg(long, default_value = "")]
    citation: String,

    /// License (e.g. CC-BY 4.0)
    #[arg(long, default_value = "")]
    license: String,

    /// DOI for dataset
    #[arg(long, default_value = "")]
    doi: String,

    /// Contact email for data queries
    #[arg(long, default_value = "")]
    contact: String,

    /// Free-text notes about dataset
    #[arg(long, default_value = "")]
    notes: String,

    /// Don't print a confirmation line per written file
    #[arg(short, long)]
    quiet: bool,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for PublishConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            out_dir: cli.out,
            required_columns: cli.required_columns,
            provenance: Provenance {
                citation: cli.citation,
                license: cli.license,
                doi: cli.doi,
                contact: cli.contact,
                notes: cli.notes,
            },
            quiet: cli.quiet,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = PublishConfig::from(cli);
    let options = IngestionOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };

    match pipeline::run_with_options(&config, &options) {
        Ok(summary) => {
            if !config.quiet {
                for path in &summary.written {
                    println!("Wrote {}", path.display());
                }
                println!(
                    "Ingestion complete. Place index.html and app.js in {} to serve the table.",
                    config.out_dir.display()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let cli = Cli::try_parse_from(["tabular-publish", "-i", "data/study.csv"]).unwrap();
        let config = PublishConfig::from(cli);
        assert_eq!(config.input, "data/study.csv");
        assert_eq!(config.out_dir, PathBuf::from("docs"));
        assert!(config.required_columns.is_empty());
        assert_eq!(config.provenance, Provenance::default());
        assert!(!config.quiet);
    }

    #[test]
    fn required_columns_take_many_values() {
        let cli = Cli::try_parse_from([
            "tabular-publish",
            "--input",
            "https://example.org/x.csv",
            "-r",
            "id",
            "name",
            "--license",
            "CC-BY 4.0",
            "-o",
            "site",
        ])
        .unwrap();
        let config = PublishConfig::from(cli);
        assert_eq!(config.required_columns, vec!["id", "name"]);
        assert_eq!(config.provenance.license, "CC-BY 4.0");
        assert_eq!(config.out_dir, PathBuf::from("site"));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["tabular-publish"]).is_err());
    }
}
