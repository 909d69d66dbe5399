//! bookfees - date helpers and library late-fee reports
//!
//! # Architecture
//!
//! - `config`: Settings file location and persistence
//! - `error`: Custom error types
//! - `models`: Money and checkout records
//! - `services`: ISO date reformatting and date ranges
//! - `reports`: Late fees per patron from a checkout CSV
//! - `storage`: Atomic file output
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `bookfees` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use bookfees::{fees_report, reformat_dates};
//!
//! let dates = reformat_dates(&["2001-01-01"])?;
//! assert_eq!(dates, vec!["01 Jan 2001"]);
//!
//! let report = fees_report("book_returns.csv", "book_fees.csv")?;
//! println!("{} patrons owe fees", report.patrons.len());
//! # Ok::<(), bookfees::FeesError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FeesError, FeesResult};
pub use reports::{fees_report, fees_report_with, LateFeeReport};
pub use services::{add_date_range, date_range, reformat_dates};
