//! Date reformatting and date-range generation
//!
//! All inputs here use ISO `yyyy-mm-dd` strings. Checkout-record dates
//! (`mm/dd/yyyy`) are handled in `models::checkout`.

use chrono::{Duration, NaiveDate};

use crate::error::{FeesError, FeesResult};
use crate::models::DateFormat;

/// Output pattern for `reformat_dates`, e.g. "01 Jan 2001"
pub const DISPLAY_DATE_PATTERN: &str = "%d %b %Y";

/// Reformat `yyyy-mm-dd` strings as `dd Mon yyyy`
///
/// The first malformed element aborts the call; nothing is returned for
/// the elements before it.
///
/// # Examples
/// ```
/// use bookfees::services::dates::reformat_dates;
/// let out = reformat_dates(&["2001-01-01", "2023-12-25"]).unwrap();
/// assert_eq!(out, vec!["01 Jan 2001", "25 Dec 2023"]);
/// ```
pub fn reformat_dates<S: AsRef<str>>(dates: &[S]) -> FeesResult<Vec<String>> {
    let iso = DateFormat::iso();
    dates
        .iter()
        .map(|s| {
            iso.parse(s.as_ref())
                .map(|date| date.format(DISPLAY_DATE_PATTERN).to_string())
        })
        .collect()
}

/// Unbounded run of consecutive days starting at `start`
pub fn date_iter(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |date| date.checked_add_signed(Duration::days(1)))
}

/// `n` consecutive calendar dates, the first being `start`
///
/// `start` is validated even when `n` is zero.
pub fn date_range(start: &str, n: usize) -> FeesResult<Vec<NaiveDate>> {
    let start_date = DateFormat::iso().parse(start)?;
    let dates: Vec<NaiveDate> = date_iter(start_date).take(n).collect();

    // successors stops early only past chrono's maximum date
    if dates.len() < n {
        return Err(FeesError::Validation(format!(
            "a range of {} days from {} runs past the last representable date",
            n, start
        )));
    }

    Ok(dates)
}

/// Pair each value with a date, starting at `start_date` and stepping one day
pub fn add_date_range<T>(values: Vec<T>, start_date: &str) -> FeesResult<Vec<(NaiveDate, T)>> {
    let dates = date_range(start_date, values.len())?;
    Ok(dates.into_iter().zip(values).collect())
}

/// Untyped `date_range` arguments, as they arrive from a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeArgs {
    pub start: String,
    pub n: usize,
}

impl DateRangeArgs {
    /// Check argument kinds before any date parsing happens
    pub fn parse(start: &str, n: &str) -> FeesResult<Self> {
        if start.trim().is_empty() {
            return Err(FeesError::Validation(
                "start must be a date string in yyyy-mm-dd format".into(),
            ));
        }

        let n = n.trim().parse::<usize>().map_err(|_| {
            FeesError::Validation(format!("n must be a non-negative integer, got '{}'", n))
        })?;

        Ok(Self {
            start: start.to_string(),
            n,
        })
    }

    pub fn range(&self) -> FeesResult<Vec<NaiveDate>> {
        date_range(&self.start, self.n)
    }
}
