//! Checkout records read from a library returns CSV
//!
//! A checkout CSV has a header row naming at least `checkout_date`,
//! `due_date`, `return_date` and `patron_id`, in any order. Other columns
//! are ignored. Header names and field values are used exactly as written;
//! a space-padded date is malformed and `" P1"` is a different patron
//! from `"P1"`.

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{FeesError, FeesResult};

/// A date pattern paired with the human-readable form used in errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    /// chrono strftime pattern
    pub pattern: String,
    /// Label shown in error messages (e.g. "mm/dd/yyyy")
    pub label: &'static str,
}

impl DateFormat {
    /// `yyyy-mm-dd`
    pub fn iso() -> Self {
        Self {
            pattern: ISO_DATE_PATTERN.to_string(),
            label: "yyyy-mm-dd",
        }
    }

    /// `mm/dd/yyyy`, the format of checkout records
    pub fn checkout() -> Self {
        Self {
            pattern: CHECKOUT_DATE_PATTERN.to_string(),
            label: "mm/dd/yyyy",
        }
    }

    /// A user-configured pattern
    pub fn custom(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            label: "configured",
        }
    }

    /// Parse a date string in this format
    pub fn parse(&self, s: &str) -> FeesResult<NaiveDate> {
        self.parse_exact(s).ok_or_else(|| FeesError::format(s, self.label))
    }

    /// chrono skips whitespace before numeric fields, so whitespace the
    /// pattern doesn't contain is rejected here first
    fn parse_exact(&self, s: &str) -> Option<NaiveDate> {
        let pattern_has_space = self.pattern.chars().any(char::is_whitespace);
        if s.trim() != s || (!pattern_has_space && s.chars().any(char::is_whitespace)) {
            return None;
        }
        NaiveDate::parse_from_str(s, &self.pattern).ok()
    }
}

/// chrono pattern for ISO dates
pub const ISO_DATE_PATTERN: &str = "%Y-%m-%d";

/// chrono pattern for checkout record dates
pub const CHECKOUT_DATE_PATTERN: &str = "%m/%d/%Y";

pub const CHECKOUT_DATE: &str = "checkout_date";
pub const DUE_DATE: &str = "due_date";
pub const RETURN_DATE: &str = "return_date";
pub const PATRON_ID: &str = "patron_id";

/// Positions of the required columns within a checkout CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutColumns {
    pub checkout_date: usize,
    pub due_date: usize,
    pub return_date: usize,
    pub patron_id: usize,
}

impl CheckoutColumns {
    /// Resolve column positions from a header record by exact name
    pub fn from_headers(headers: &StringRecord) -> FeesResult<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(FeesError::MissingField {
                    column: name,
                    row: None,
                })
        };

        Ok(Self {
            checkout_date: find(CHECKOUT_DATE)?,
            due_date: find(DUE_DATE)?,
            return_date: find(RETURN_DATE)?,
            patron_id: find(PATRON_ID)?,
        })
    }
}

/// One parsed row of a checkout CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRecord {
    pub checkout_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: NaiveDate,
    pub patron_id: String,
}

impl CheckoutRecord {
    /// Parse a record using resolved column positions
    ///
    /// `row` is the 1-based data row number, used only in error messages.
    pub fn from_record(
        record: &StringRecord,
        columns: &CheckoutColumns,
        format: &DateFormat,
        row: usize,
    ) -> FeesResult<Self> {
        let field = |index: usize, column: &'static str| {
            record.get(index).ok_or(FeesError::MissingField {
                column,
                row: Some(row),
            })
        };
        let date = |index: usize, column: &'static str| -> FeesResult<NaiveDate> {
            let raw = field(index, column)?;
            format
                .parse_exact(raw)
                .ok_or_else(|| FeesError::format_at(raw, format.label, row, column))
        };

        Ok(Self {
            checkout_date: date(columns.checkout_date, CHECKOUT_DATE)?,
            due_date: date(columns.due_date, DUE_DATE)?,
            return_date: date(columns.return_date, RETURN_DATE)?,
            patron_id: field(columns.patron_id, PATRON_ID)?.to_string(),
        })
    }

    /// Whole days between due and return, when returned strictly after due
    pub fn days_late(&self) -> Option<i64> {
        if self.return_date > self.due_date {
            Some((self.return_date - self.due_date).num_days())
        } else {
            None
        }
    }
}
