//! Unit tests for the tabular sinks (CSV) and render-time rules

use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use trendscan::models::{GoldenCrossRow, RocRow};
use trendscan::reports::csv::{write_golden_cross_csv, write_roc_csv};
use trendscan::reports::{is_fresh_cross, roc_column_header};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("trendscan-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_roc_header_names_the_period() {
    assert_eq!(roc_column_header(30), "30-Day ROC (%)");
    assert_eq!(roc_column_header(7), "7-Day ROC (%)");
}

#[test]
fn test_fresh_cross_threshold() {
    // A cross 5 days old is highlighted at a 30-day threshold; 45 is not.
    assert!(is_fresh_cross(5, 30));
    assert!(is_fresh_cross(30, 30));
    assert!(!is_fresh_cross(45, 30));
}

#[test]
fn test_roc_csv_preserves_order_and_rounds_at_render() {
    let rows = vec![
        RocRow {
            symbol: "X.NS".to_string(),
            latest_close: 2500.456,
            roc: Some(10.0),
            group: None,
        },
        RocRow {
            symbol: "Y.NS".to_string(),
            latest_close: 99.999,
            roc: Some(-5.126),
            group: None,
        },
        RocRow {
            symbol: "Z.NS".to_string(),
            latest_close: 10.0,
            roc: None,
            group: None,
        },
    ];

    let path = scratch_dir("roc-csv").join("summary.csv");
    write_roc_csv(&path, &rows, 30).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Ticker", "Latest Close", "30-Day ROC (%)"]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][0], "X.NS");
    assert_eq!(&records[0][1], "2500.46");
    assert_eq!(&records[0][2], "10.00");
    assert_eq!(&records[1][2], "-5.13");
    // Absent indicator renders as an empty field, the row is still listed.
    assert_eq!(&records[2][0], "Z.NS");
    assert_eq!(&records[2][2], "");
}

#[test]
fn test_golden_cross_csv_columns() {
    let rows = vec![GoldenCrossRow {
        symbol: "RELIANCE.NS".to_string(),
        last_price: 2875.4,
        sma_short: 2800.123,
        sma_long: 2700.987,
        cross_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
        days_since_cross: 12,
    }];

    let path = scratch_dir("cross-csv").join("golden_cross.csv");
    write_golden_cross_csv(&path, &rows, 50, 200).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "Ticker",
            "Last Price",
            "SMA50",
            "SMA200",
            "Golden Cross Date",
            "Days Since Golden Cross"
        ]
    );

    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[0], "RELIANCE.NS");
    assert_eq!(&record[1], "2875.40");
    assert_eq!(&record[2], "2800.12");
    assert_eq!(&record[3], "2700.99");
    assert_eq!(&record[4], "2025-07-15");
    assert_eq!(&record[5], "12");
}
