//! CLI commands for date helpers

use clap::Args;

use crate::error::FeesResult;
use crate::services::dates::{add_date_range, reformat_dates, DateRangeArgs};

/// Arguments for `reformat`
#[derive(Args, Debug)]
pub struct ReformatArgs {
    /// Dates in yyyy-mm-dd format
    #[arg(required = true)]
    pub dates: Vec<String>,
}

/// Arguments for `range`
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// First date (yyyy-mm-dd)
    pub start: String,
    /// Number of days to generate
    #[arg(allow_hyphen_values = true)]
    pub n: String,
}

/// Arguments for `pair`
#[derive(Args, Debug)]
pub struct PairArgs {
    /// First date (yyyy-mm-dd)
    pub start: String,
    /// Values to pair with consecutive dates
    pub values: Vec<String>,
}

/// Print each date as `dd Mon yyyy`
pub fn handle_reformat_command(args: ReformatArgs) -> FeesResult<()> {
    for date in reformat_dates(&args.dates)? {
        println!("{}", date);
    }
    Ok(())
}

/// Print `n` consecutive ISO dates
pub fn handle_range_command(args: RangeArgs) -> FeesResult<()> {
    let range = DateRangeArgs::parse(&args.start, &args.n)?;
    for date in range.range()? {
        println!("{}", date);
    }
    Ok(())
}

/// Print `date<TAB>value` lines
pub fn handle_pair_command(args: PairArgs) -> FeesResult<()> {
    for (date, value) in add_date_range(args.values, &args.start)? {
        println!("{}\t{}", date, value);
    }
    Ok(())
}
