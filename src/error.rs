//! Custom error types for bookfees
//!
//! Every operation in the crate returns a `FeesResult`. Errors abort the
//! operation they come from; nothing is retried and no partial output is
//! produced.

use thiserror::Error;

/// The main error type for bookfees operations
#[derive(Error, Debug)]
pub enum FeesError {
    /// A date string did not match its pattern or names an invalid day
    #[error("Format error: '{value}' is not a valid {expected} date{context}")]
    Format {
        value: String,
        expected: &'static str,
        /// Extra location info such as " (row 3, column due_date)"
        context: String,
    },

    /// An argument of the wrong kind or outside its allowed range
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A required CSV column is absent from the header or from a row
    #[error("Missing field '{column}'{}", row_suffix(.row))]
    MissingField {
        column: &'static str,
        row: Option<usize>,
    },

    /// Malformed CSV framing reported by the csv reader/writer
    #[error("CSV error: {0}")]
    Csv(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

fn row_suffix(row: &Option<usize>) -> String {
    match row {
        Some(row) => format!(" in row {}", row),
        None => " in CSV header".to_string(),
    }
}

impl FeesError {
    /// Create a format error for a date string
    pub fn format(value: impl Into<String>, expected: &'static str) -> Self {
        Self::Format {
            value: value.into(),
            expected,
            context: String::new(),
        }
    }

    /// Create a format error located at a row and column of a CSV file
    pub fn format_at(
        value: impl Into<String>,
        expected: &'static str,
        row: usize,
        column: &str,
    ) -> Self {
        Self::Format {
            value: value.into(),
            expected,
            context: format!(" (row {}, column {})", row, column),
        }
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a missing-field error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FeesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FeesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<csv::Error> for FeesError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Csv(err.to_string())
        }
    }
}

/// Result type alias for bookfees operations
pub type FeesResult<T> = Result<T, FeesError>;
