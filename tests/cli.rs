use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "checkout_date,due_date,return_date,patron_id\n";

/// Command isolated from any user config file
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bookfees").unwrap();
    cmd.env("BOOKFEES_CONFIG", dir.path().join("config.json"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn reformat_prints_one_line_per_date() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["reformat", "2001-01-01", "2023-10-31"])
        .assert()
        .success()
        .stdout("01 Jan 2001\n31 Oct 2023\n");
}

#[test]
fn reformat_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["reformat", "2001-01-01", "01/02/2001"])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("Format error"));
}

#[test]
fn range_crosses_leap_day() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["range", "2024-02-28", "3"])
        .assert()
        .success()
        .stdout("2024-02-28\n2024-02-29\n2024-03-01\n");
}

#[test]
fn range_zero_is_empty() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["range", "2001-01-01", "0"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn range_rejects_non_integer_count() {
    let dir = TempDir::new().unwrap();
    for bad in ["3.5", "-1", "three"] {
        cmd(&dir)
            .args(["range", "2001-01-01", bad])
            .assert()
            .failure()
            .stderr(contains("Validation error"));
    }
}

#[test]
fn pair_prints_dates_with_values() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["pair", "2020-12-31", "alpha", "beta"])
        .assert()
        .success()
        .stdout("2020-12-31\talpha\n2021-01-01\tbeta\n");
}

#[test]
fn report_writes_csv_and_summary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("book_returns.csv");
    let output = dir.path().join("book_fees.csv");
    fs::write(
        &input,
        format!(
            "{}01/01/2023,01/10/2023,01/15/2023,P1\n01/01/2023,01/10/2023,01/05/2023,P2\n",
            HEADER
        ),
    )
    .unwrap();

    cmd(&dir)
        .arg("report")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("P1").and(contains("$1.25")).and(contains("P2").not()));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "patron_id,late_fees\nP1,1.25\n"
    );
}

#[test]
fn report_options_override_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"daily_rate": 100}"#).unwrap();

    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(
        &input,
        format!(
            "{}01/01/2023,01/10/2023,01/12/2023,Z9\n01/01/2023,01/10/2023,01/11/2023,A1\n",
            HEADER
        ),
    )
    .unwrap();

    cmd(&dir)
        .arg("report")
        .arg(&input)
        .arg(&output)
        .args(["--quiet", "--sort-by", "patron"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "patron_id,late_fees\nA1,1.00\nZ9,2.00\n"
    );

    cmd(&dir)
        .arg("report")
        .arg(&input)
        .arg(&output)
        .args(["--quiet", "--rate", "0.10"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "patron_id,late_fees\nZ9,0.20\nA1,0.10\n"
    );
}

#[test]
fn report_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    cmd(&dir)
        .arg("report")
        .arg(dir.path().join("missing.csv"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("I/O error"));
    assert!(!output.exists());
}

#[test]
fn report_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    fs::write(&input, "checkout_date,due_date,return_date\n01/01/2023,01/10/2023,01/15/2023\n")
        .unwrap();

    cmd(&dir)
        .arg("report")
        .arg(&input)
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(contains("Missing field 'patron_id'"));
}

#[test]
fn report_empty_input_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "").unwrap();

    cmd(&dir)
        .arg("report")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&output).unwrap(), "patron_id,late_fees\n");
}

#[test]
fn config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Daily rate:           0.25").and(contains("FirstSeen")));
}
