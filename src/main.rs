//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dashboard_export` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Writing the artifact and user-facing output
//!
//! All export logic is implemented in the library crate.

use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use dashboard_export::app::{load_records, print_export_summary, write_artifact};
use dashboard_export::initialization::init_logger_with;
use dashboard_export::{export_records, Config, ExportOptions, ExportRequest};

fn main() -> Result<()> {
    // A missing .env file is fine; the output directory may come from the real environment
    let _ = dotenvy::dotenv();

    let config = Config::parse();
    if let Err(e) = config.validate() {
        eprintln!("dashboard_export error: {e}");
        process::exit(2);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let start = Instant::now();
    let visible = load_records(&config.input)?;
    let selected = match &config.selected {
        Some(path) => load_records(path)?,
        None => Vec::new(),
    };

    let request = ExportRequest {
        kind: &config.kind,
        format: config.format,
        selected: &selected,
        visible: &visible,
        options: ExportOptions {
            include_bom: config.include_bom(),
            ..Default::default()
        },
    };

    match export_records(request) {
        Ok(artifact) => {
            let path = write_artifact(&config.output_dir, &artifact)?;
            print_export_summary(&artifact, start.elapsed().as_secs_f64());
            println!("{}", path.display());
            Ok(())
        }
        Err(e) if e.is_empty_input() => {
            println!("{e}");
            Ok(())
        }
        Err(e) => {
            eprintln!("dashboard_export error: {e:#}");
            process::exit(1);
        }
    }
}
