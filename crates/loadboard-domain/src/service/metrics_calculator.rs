//! Metrics calculator
//!
//! Counts are over distinct cage ids: a cage listed on several rows is one
//! route. Window subtotals re-run the same tally on the window's subset.

use std::collections::BTreeSet;

use crate::model::{Dataset, LoadStatus, Metrics, NamedWindow, RouteCounts, Row, WindowMetrics};
use crate::service::row_filter::RowFilter;

/// `part / whole * 100`, or 0 when `whole` is 0
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Distinct-cage counts over any subset of rows
pub fn tally<'a, I>(rows: I) -> RouteCounts
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut all = BTreeSet::new();
    let mut loaded = BTreeSet::new();
    let mut not_loaded = BTreeSet::new();
    let mut unset = BTreeSet::new();
    let mut quantity_shipped = 0u64;

    for row in rows {
        let id = row.cage_id.as_str();
        all.insert(id);
        match row.status {
            LoadStatus::Loaded => {
                loaded.insert(id);
                quantity_shipped = quantity_shipped.saturating_add(row.quantity.coerced());
            }
            LoadStatus::NotLoaded => {
                not_loaded.insert(id);
            }
            LoadStatus::Unset => {
                unset.insert(id);
            }
        }
    }

    let processed = loaded.len() + not_loaded.len();
    RouteCounts {
        total_routes: all.len(),
        loaded: loaded.len(),
        not_loaded: not_loaded.len(),
        unset: unset.len(),
        remaining: all.difference(&loaded).count(),
        processed,
        percent_loaded: percent_of(loaded.len() as f64, processed as f64),
        quantity_shipped,
    }
}

/// Metrics for the rows matching `filter`, plus one subtotal per window
pub fn compute_metrics(
    dataset: &Dataset,
    filter: Option<&RowFilter>,
    windows: &[NamedWindow],
) -> Metrics {
    let base = filter.cloned().unwrap_or_default();
    let subset = base.select(dataset);

    let windows = windows
        .iter()
        .map(|named| {
            let window_filter = RowFilter::window(named.window.clone());
            WindowMetrics {
                name: named.name.clone(),
                counts: tally(window_filter.apply(subset.iter().copied())),
            }
        })
        .collect();

    Metrics {
        counts: tally(subset.iter().copied()),
        windows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Quantity, WindowSpec};

    fn row(cage_id: &str, ops_clock: &str, status: LoadStatus, quantity: Quantity) -> Row {
        Row {
            source_row: 0,
            cage_id: cage_id.to_string(),
            ops_clock: ops_clock.to_string(),
            status,
            status_marker: String::new(),
            quantity,
        }
    }

    fn dataset(rows: Vec<Row>) -> Dataset {
        Dataset::new(rows, "01/01/2024", Vec::new(), true)
    }

    #[test]
    fn test_counts_distinct_cages() {
        let ds = dataset(vec![
            row("A", "", LoadStatus::Loaded, Quantity::Missing),
            row("A", "", LoadStatus::Loaded, Quantity::Missing),
            row("B", "", LoadStatus::NotLoaded, Quantity::Missing),
        ]);
        let m = compute_metrics(&ds, None, &[]);
        assert_eq!(m.counts.total_routes, 2);
        assert_eq!(m.counts.loaded, 1);
        assert_eq!(m.counts.not_loaded, 1);
        assert_eq!(m.counts.remaining, 1);
        assert!((m.counts.percent_loaded - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_unset_is_not_processed() {
        let ds = dataset(vec![
            row("A", "", LoadStatus::Loaded, Quantity::Missing),
            row("B", "", LoadStatus::Unset, Quantity::Missing),
            row("C", "", LoadStatus::Unset, Quantity::Missing),
        ]);
        let m = compute_metrics(&ds, None, &[]);
        assert_eq!(m.counts.total_routes, 3);
        assert_eq!(m.counts.processed, 1);
        assert_eq!(m.counts.unset, 2);
        assert_eq!(m.counts.remaining, 2);
        assert!((m.counts.percent_loaded - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_nothing_processed_is_zero_percent() {
        let ds = dataset(vec![row("A", "", LoadStatus::Unset, Quantity::Missing)]);
        let m = compute_metrics(&ds, None, &[]);
        assert_eq!(m.counts.processed, 0);
        assert_eq!(m.counts.percent_loaded, 0.0);

        let empty = compute_metrics(&dataset(Vec::new()), None, &[]);
        assert_eq!(empty.counts, RouteCounts::default());
    }

    #[test]
    fn test_quantity_only_counts_loaded_rows() {
        let ds = dataset(vec![
            row("A", "", LoadStatus::Loaded, Quantity::Count(5)),
            row("B", "", LoadStatus::Loaded, Quantity::Invalid("abc".to_string())),
            row("C", "", LoadStatus::Loaded, Quantity::Missing),
            row("D", "", LoadStatus::Loaded, Quantity::Count(3)),
            row("E", "", LoadStatus::NotLoaded, Quantity::Count(100)),
        ]);
        let m = compute_metrics(&ds, None, &[]);
        assert_eq!(m.counts.quantity_shipped, 8);
    }

    #[test]
    fn test_window_subtotals_reuse_tally() {
        let ds = dataset(vec![
            row("A", "PM 12:00", LoadStatus::Loaded, Quantity::Count(2)),
            row("B", "PM 12:00", LoadStatus::NotLoaded, Quantity::Missing),
            row("C", "08:00", LoadStatus::Loaded, Quantity::Count(1)),
        ]);
        let windows = vec![NamedWindow::new("PM", WindowSpec::label("PM 12:00"))];
        let m = compute_metrics(&ds, None, &windows);
        let pm = m.window("PM").unwrap();
        assert_eq!(pm.counts.total_routes, 2);
        assert_eq!(pm.counts.loaded, 1);
        assert_eq!(pm.counts.quantity_shipped, 2);
        assert_eq!(m.counts.total_routes, 3);
        assert!(m.window("AM").is_none());
    }

    #[test]
    fn test_window_respects_base_filter() {
        let ds = dataset(vec![
            row("A", "PM 12:00", LoadStatus::Loaded, Quantity::Missing),
            row("B", "PM 12:00", LoadStatus::Unset, Quantity::Missing),
        ]);
        let base = RowFilter::status([LoadStatus::Loaded, LoadStatus::NotLoaded]);
        let windows = vec![NamedWindow::new("PM", WindowSpec::label("PM 12:00"))];
        let m = compute_metrics(&ds, Some(&base), &windows);
        assert_eq!(m.counts.total_routes, 1);
        assert_eq!(m.window("PM").unwrap().counts.total_routes, 1);
    }

    #[test]
    fn test_invariants_and_idempotence() {
        let statuses = [LoadStatus::Loaded, LoadStatus::NotLoaded, LoadStatus::Unset];
        let rows: Vec<Row> = (0..30)
            .map(|i| {
                row(
                    &format!("G-{}", i % 11),
                    "",
                    statuses[i % 3],
                    Quantity::Count(i as u64),
                )
            })
            .collect();
        let ds = dataset(rows);
        let first = compute_metrics(&ds, None, &[]);
        let second = compute_metrics(&ds, None, &[]);
        assert_eq!(first, second);
        let c = &first.counts;
        assert_eq!(c.processed, c.loaded + c.not_loaded);
        assert!((0.0..=100.0).contains(&c.percent_loaded));
        assert!(c.remaining <= c.total_routes);
    }

    #[test]
    fn test_percent_of_zero_denominator() {
        assert_eq!(percent_of(3.0, 0.0), 0.0);
        assert!((percent_of(1.0, 4.0) - 25.0).abs() < 1e-9);
    }
}
