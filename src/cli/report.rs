//! CLI commands for the dashboard and period reports

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{PocketbookError, PocketbookResult};
use crate::export::export_report_csv;
use crate::storage::Storage;

use super::{open_session, parse_date, today};

/// Arguments of the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Export items and totals to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print totals and the balance note
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> PocketbookResult<()> {
    let session = open_session(storage)?;
    print!(
        "{}",
        session.dashboard().format_terminal(&settings.currency_symbol)
    );
    Ok(())
}

/// Generate a report for a date range
///
/// With neither date given the configured default range is used; giving only
/// one of them is an error.
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> PocketbookResult<()> {
    let session = open_session(storage)?;

    let (start, end) = match (args.start.as_deref(), args.end.as_deref()) {
        (None, None) => {
            let (start, end) = settings.report_default_range.bounds(today());
            (Some(start), Some(end))
        }
        (start, end) => (
            start.map(parse_date).transpose()?,
            end.map(parse_date).transpose()?,
        ),
    };

    let report = session.report(start, end)?;

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            PocketbookError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        export_report_csv(&report, BufWriter::new(file))?;
        println!("Report exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
