//! Late-fee report
//!
//! Scans a checkout CSV once, totals late fees per patron and writes a
//! `patron_id,late_fees` summary CSV.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FeesError, FeesResult};
use crate::models::{CheckoutColumns, CheckoutRecord, DateFormat, Money};
use crate::storage::file_io::write_atomic;

/// Default charge per day late (0.25)
pub const DEFAULT_DAILY_RATE: Money = Money::from_cents(25);

/// Row order of the output CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Order in which each patron's first late fee was seen
    #[default]
    FirstSeen,
    /// Ascending by patron id
    PatronId,
}

/// Parameters for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub daily_rate: Money,
    pub date_format: DateFormat,
    pub order: OutputOrder,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            daily_rate: DEFAULT_DAILY_RATE,
            date_format: DateFormat::checkout(),
            order: OutputOrder::default(),
        }
    }
}

/// Accumulated fees for one patron
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatronFee {
    pub patron_id: String,
    pub late_fees: Money,
    /// Number of late returns
    pub late_returns: usize,
    /// Sum of days late across those returns
    pub days_late: i64,
}

/// Late fees per patron from one pass over a checkout CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LateFeeReport {
    pub patrons: Vec<PatronFee>,
    /// Data rows read (header excluded)
    pub rows_scanned: usize,
    /// Rows returned after their due date
    pub late_returns: usize,
    /// Sum of all patrons' fees
    pub total: Money,
}

fn amount_overflow(patron_id: &str) -> FeesError {
    FeesError::Validation(format!(
        "late fees for patron '{}' exceed the largest representable amount; check the daily rate",
        patron_id
    ))
}

impl LateFeeReport {
    /// Build a report from CSV data
    ///
    /// Reads one record at a time; only the accumulator is kept in memory.
    /// Columns are resolved from the header when the first data row arrives,
    /// so input without any data rows (including an empty file) yields an
    /// empty report.
    pub fn generate<R: Read>(reader: R, settings: &ReportSettings) -> FeesResult<Self> {
        let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut columns: Option<CheckoutColumns> = None;
        let mut fees: IndexMap<String, PatronFee> = IndexMap::new();
        let mut rows_scanned = 0;
        let mut late_returns = 0;
        let mut total = Money::zero();
        let mut record = csv::StringRecord::new();

        while csv_reader.read_record(&mut record)? {
            rows_scanned += 1;
            let columns = match columns {
                Some(columns) => columns,
                None => *columns.insert(CheckoutColumns::from_headers(&headers)?),
            };
            let checkout =
                CheckoutRecord::from_record(&record, &columns, &settings.date_format, rows_scanned)?;

            let Some(days_late) = checkout.days_late() else {
                continue;
            };
            let fee = settings
                .daily_rate
                .checked_times(days_late)
                .ok_or_else(|| amount_overflow(&checkout.patron_id))?;
            debug!(
                patron_id = %checkout.patron_id,
                days_late,
                fee = %fee.to_decimal_string(),
                "late return"
            );

            total = total
                .checked_add(fee)
                .ok_or_else(|| amount_overflow(&checkout.patron_id))?;
            late_returns += 1;
            let entry = fees
                .entry(checkout.patron_id)
                .or_insert_with_key(|id| PatronFee {
                    patron_id: id.clone(),
                    late_fees: Money::zero(),
                    late_returns: 0,
                    days_late: 0,
                });
            let late_fees = entry
                .late_fees
                .checked_add(fee)
                .ok_or_else(|| amount_overflow(&entry.patron_id))?;
            entry.late_fees = late_fees;
            entry.late_returns += 1;
            entry.days_late = entry.days_late.saturating_add(days_late);
        }

        let mut patrons: Vec<PatronFee> = fees
            .into_values()
            .filter(|p| !p.late_fees.is_zero())
            .collect();
        if settings.order == OutputOrder::PatronId {
            patrons.sort_by(|a, b| a.patron_id.cmp(&b.patron_id));
        }

        Ok(Self {
            patrons,
            rows_scanned,
            late_returns,
            total,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }

    /// Write the `patron_id,late_fees` CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> FeesResult<()> {
        let mut csv_writer = WriterBuilder::new().from_writer(writer);
        csv_writer.write_record(["patron_id", "late_fees"])?;

        for patron in &self.patrons {
            csv_writer.write_record([
                patron.patron_id.as_str(),
                patron.late_fees.to_decimal_string().as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Compute late fees from `infile` and write the summary to `outfile`
///
/// Uses a 0.25 daily rate, `mm/dd/yyyy` dates and first-seen ordering.
pub fn fees_report(infile: impl AsRef<Path>, outfile: impl AsRef<Path>) -> FeesResult<LateFeeReport> {
    fees_report_with(infile, outfile, &ReportSettings::default())
}

/// `fees_report` with explicit settings
pub fn fees_report_with(
    infile: impl AsRef<Path>,
    outfile: impl AsRef<Path>,
    settings: &ReportSettings,
) -> FeesResult<LateFeeReport> {
    let infile = infile.as_ref();
    let outfile = outfile.as_ref();

    let report = {
        let file = File::open(infile).map_err(|e| {
            FeesError::Io(format!("Failed to open {}: {}", infile.display(), e))
        })?;
        LateFeeReport::generate(BufReader::new(file), settings)?
    };

    write_atomic(outfile, |writer| report.export_csv(writer))?;

    info!(
        input = %infile.display(),
        output = %outfile.display(),
        rows = report.rows_scanned,
        late_returns = report.late_returns,
        patrons = report.patrons.len(),
        "fees report written"
    );

    Ok(report)
}
