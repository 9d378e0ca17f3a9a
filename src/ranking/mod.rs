//! Summary-table ordering and the gainers/losers partition.
//!
//! All comparisons run on full-precision values; rounding is a rendering
//! concern and never happens here.

use crate::models::{GoldenCrossRow, Group, RocRow};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Sort ROC rows descending by indicator value, rows without a defined
/// value last. The sort is stable, so equal values keep their fetch order.
pub fn sort_roc_rows(rows: &mut [RocRow]) {
    rows.sort_by(|a, b| compare_roc_desc(a.roc, b.roc));
}

fn compare_roc_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Slice the top-K gainers and bottom-K losers out of a sorted table.
///
/// Only rows with a defined ROC participate. Each returned row is tagged
/// with its group, each side holds at most `k` rows, and when the table is
/// shorter than `2k` no row appears twice. The merged result is re-sorted
/// descending so both groups read as one comparison table.
pub fn partition_movers(sorted: &[RocRow], k: usize) -> Vec<RocRow> {
    let ranked: Vec<&RocRow> = sorted.iter().filter(|r| r.roc.is_some()).collect();

    let gainer_count = k.min(ranked.len());
    let mut taken: HashSet<&str> = HashSet::new();
    let mut movers = Vec::new();

    for row in &ranked[..gainer_count] {
        taken.insert(row.symbol.as_str());
        let mut tagged = (*row).clone();
        tagged.group = Some(Group::Gainer);
        movers.push(tagged);
    }

    for row in ranked.iter().rev().take(k) {
        if !taken.insert(row.symbol.as_str()) {
            continue;
        }
        let mut tagged = (*row).clone();
        tagged.group = Some(Group::Loser);
        movers.push(tagged);
    }

    movers.sort_by(|a, b| compare_roc_desc(a.roc, b.roc));
    movers
}

/// Sort golden-cross rows by freshness, most recent crossover first.
pub fn sort_cross_rows(rows: &mut [GoldenCrossRow]) {
    rows.sort_by_key(|r| r.days_since_cross);
}
