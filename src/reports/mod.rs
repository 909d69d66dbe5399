//! Reports module for bookfees
//!
//! Currently a single report: late fees per patron from a checkout CSV.

pub mod late_fees;

pub use late_fees::{
    fees_report, fees_report_with, LateFeeReport, OutputOrder, PatronFee, ReportSettings,
    DEFAULT_DAILY_RATE,
};
