//! Unit tests for summary-table ordering and the movers partition

use chrono::NaiveDate;
use trendscan::models::{GoldenCrossRow, Group, RocRow};
use trendscan::ranking::{partition_movers, sort_cross_rows, sort_roc_rows};

fn roc_row(symbol: &str, roc: Option<f64>) -> RocRow {
    RocRow {
        symbol: symbol.to_string(),
        latest_close: 100.0,
        roc,
        group: None,
    }
}

fn cross_row(symbol: &str, days: i64) -> GoldenCrossRow {
    GoldenCrossRow {
        symbol: symbol.to_string(),
        last_price: 100.0,
        sma_short: 110.0,
        sma_long: 105.0,
        cross_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        days_since_cross: days,
    }
}

#[test]
fn test_sort_descending_absent_values_last() {
    let mut rows = vec![
        roc_row("A", Some(-5.0)),
        roc_row("B", None),
        roc_row("C", Some(10.0)),
        roc_row("D", Some(2.5)),
    ];
    sort_roc_rows(&mut rows);

    let order: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(order, vec!["C", "D", "A", "B"]);
}

#[test]
fn test_sort_is_stable_for_equal_values() {
    let mut rows = vec![
        roc_row("FIRST", Some(1.0)),
        roc_row("SECOND", Some(1.0)),
        roc_row("THIRD", Some(1.0)),
    ];
    sort_roc_rows(&mut rows);

    let order: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(order, vec!["FIRST", "SECOND", "THIRD"]);
}

#[test]
fn test_gainer_ranked_above_loser() {
    let mut rows = vec![roc_row("Y", Some(-5.0)), roc_row("X", Some(10.0))];
    sort_roc_rows(&mut rows);
    assert_eq!(rows[0].symbol, "X");
    assert_eq!(rows[1].symbol, "Y");
}

#[test]
fn test_partition_takes_at_most_k_per_side() {
    let mut rows: Vec<RocRow> = (0..30)
        .map(|i| roc_row(&format!("T{:02}", i), Some(30.0 - i as f64)))
        .collect();
    sort_roc_rows(&mut rows);

    let movers = partition_movers(&rows, 10);
    assert_eq!(movers.len(), 20);
    let gainers = movers.iter().filter(|r| r.group == Some(Group::Gainer)).count();
    let losers = movers.iter().filter(|r| r.group == Some(Group::Loser)).count();
    assert_eq!(gainers, 10);
    assert_eq!(losers, 10);
}

#[test]
fn test_partition_union_reproduces_sorted_slice() {
    let mut rows: Vec<RocRow> = (0..30)
        .map(|i| roc_row(&format!("T{:02}", i), Some(i as f64)))
        .collect();
    sort_roc_rows(&mut rows);

    let movers = partition_movers(&rows, 10);
    let mover_symbols: Vec<&str> = movers.iter().map(|r| r.symbol.as_str()).collect();
    let expected: Vec<&str> = rows[..10]
        .iter()
        .chain(rows[20..].iter())
        .map(|r| r.symbol.as_str())
        .collect();
    assert_eq!(mover_symbols, expected);

    // Merged output stays descending.
    let values: Vec<f64> = movers.iter().map(|r| r.roc.unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_partition_never_duplicates_on_small_tables() {
    let mut rows: Vec<RocRow> = (0..6)
        .map(|i| roc_row(&format!("T{}", i), Some(i as f64)))
        .collect();
    sort_roc_rows(&mut rows);

    let movers = partition_movers(&rows, 10);
    assert_eq!(movers.len(), 6);
    let mut symbols: Vec<&str> = movers.iter().map(|r| r.symbol.as_str()).collect();
    symbols.dedup();
    assert_eq!(symbols.len(), 6);
}

#[test]
fn test_partition_excludes_absent_values() {
    let mut rows = vec![
        roc_row("A", Some(5.0)),
        roc_row("B", None),
        roc_row("C", Some(-5.0)),
    ];
    sort_roc_rows(&mut rows);

    let movers = partition_movers(&rows, 10);
    assert_eq!(movers.len(), 2);
    assert!(movers.iter().all(|r| r.roc.is_some()));
}

#[test]
fn test_cross_rows_sorted_by_freshness() {
    let mut rows = vec![cross_row("A", 45), cross_row("B", 5), cross_row("C", 30)];
    sort_cross_rows(&mut rows);

    let order: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(order, vec!["B", "C", "A"]);
}
