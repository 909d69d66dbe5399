//! Late-fee report display formatting
//!
//! Formats a report for terminal output as an aligned table.

use crate::reports::LateFeeReport;

/// Format a late-fee report as a table with a total row
pub fn format_fee_report(report: &LateFeeReport) -> String {
    if report.is_empty() {
        return format!(
            "No late fees ({} rows scanned).\n",
            report.rows_scanned
        );
    }

    let id_width = report
        .patrons
        .iter()
        .map(|p| p.patron_id.chars().count())
        .max()
        .unwrap_or(6)
        .max("Patron".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:>7}  {:>9}  {:>10}\n",
        "Patron",
        "Returns",
        "Days Late",
        "Late Fees",
        id_width = id_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<id_width$}  {:->7}  {:->9}  {:->10}\n",
        "",
        "",
        "",
        "",
        id_width = id_width,
    ));

    for patron in &report.patrons {
        output.push_str(&format!(
            "{:<id_width$}  {:>7}  {:>9}  {:>10}\n",
            patron.patron_id,
            patron.late_returns,
            patron.days_late,
            patron.late_fees.to_string(),
            id_width = id_width,
        ));
    }

    let total_days = report
        .patrons
        .iter()
        .fold(0i64, |acc, p| acc.saturating_add(p.days_late));
    output.push_str(&format!(
        "{:<id_width$}  {:>7}  {:>9}  {:>10}\n",
        "Total",
        report.late_returns,
        total_days,
        report.total.to_string(),
        id_width = id_width,
    ));

    output.push_str(&format!(
        "\n{} patrons owe fees ({} of {} rows late).\n",
        report.patrons.len(),
        report.late_returns,
        report.rows_scanned
    ));

    output
}
