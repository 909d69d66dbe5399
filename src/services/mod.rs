//! Date services
//!
//! Stateless helpers over ISO date strings.

pub mod dates;

pub use dates::{add_date_range, date_iter, date_range, reformat_dates, DateRangeArgs};
