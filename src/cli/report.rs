//! CLI command for the late-fee report

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::format_fee_report;
use crate::error::{FeesError, FeesResult};
use crate::models::Money;
use crate::reports::{fees_report_with, OutputOrder};

/// Row order options for the output CSV
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortBy {
    /// Order in which each patron's first late fee appears
    FirstSeen,
    /// Ascending patron id
    Patron,
}

impl From<SortBy> for OutputOrder {
    fn from(sort: SortBy) -> Self {
        match sort {
            SortBy::FirstSeen => OutputOrder::FirstSeen,
            SortBy::Patron => OutputOrder::PatronId,
        }
    }
}

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Checkout CSV (checkout_date,due_date,return_date,patron_id)
    pub infile: PathBuf,

    /// Output CSV (created or overwritten)
    pub outfile: PathBuf,

    /// Row order of the output
    #[arg(short, long, value_enum)]
    pub sort_by: Option<SortBy>,

    /// Fee per day late (e.g. 0.25)
    #[arg(short, long)]
    pub rate: Option<String>,

    /// Don't print the summary table
    #[arg(short, long)]
    pub quiet: bool,
}

/// Handle the report command
///
/// Command-line options override the loaded settings.
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> FeesResult<()> {
    let mut settings = settings.clone();

    if let Some(rate) = &args.rate {
        settings.daily_rate = Money::parse(rate).map_err(|e| {
            FeesError::Validation(format!("Invalid rate: {}. Use a decimal like 0.25", e))
        })?;
    }
    if let Some(sort_by) = args.sort_by {
        settings.output_order = sort_by.into();
    }
    settings.validate()?;

    let report = fees_report_with(&args.infile, &args.outfile, &settings.report_settings())?;

    if !args.quiet {
        print!("{}", format_fee_report(&report));
        println!("Report written to: {}", args.outfile.display());
    }

    Ok(())
}
