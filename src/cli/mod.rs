//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library functions.

pub mod dates;
pub mod report;

pub use dates::{
    handle_pair_command, handle_range_command, handle_reformat_command, PairArgs, RangeArgs,
    ReformatArgs,
};
pub use report::{handle_report_command, ReportArgs, SortBy};
