//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{PocketbookError, PocketbookResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

use super::open_session;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Full ledger as JSON
    Json,
    /// Full ledger as YAML
    Yaml,
    /// Incomes and expenses as CSV
    Csv,
}

/// Arguments of the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> PocketbookResult<()> {
    let session = open_session(storage)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                PocketbookError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Json => {
            export_full_json(session.user(), session.state(), &mut writer, args.pretty)?;
            writeln!(writer).map_err(|e| PocketbookError::Export(e.to_string()))?;
        }
        ExportFormat::Yaml => export_full_yaml(session.user(), session.state(), &mut writer)?,
        ExportFormat::Csv => export_transactions_csv(session.state(), &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;

    if let Some(path) = args.output {
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}
