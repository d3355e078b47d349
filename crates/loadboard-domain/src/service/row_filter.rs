//! Row filter
//!
//! Predicates over normalized rows, combined with logical AND. Filtering
//! borrows from the dataset and never changes it.

use serde::{Deserialize, Serialize};

use crate::model::{Dataset, LoadStatus, Row, WindowSpec};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    /// Status is one of the listed values
    Status { statuses: Vec<LoadStatus> },
    /// Ops-clock falls inside the window
    Window { window: WindowSpec },
}

impl Predicate {
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Predicate::Status { statuses } => statuses.contains(&row.status),
            Predicate::Window { window } => window.contains(&row.ops_clock),
        }
    }
}

/// Conjunction of predicates. The empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowFilter {
    predicates: Vec<Predicate>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(statuses: impl IntoIterator<Item = LoadStatus>) -> Self {
        Self::new().with_status(statuses)
    }

    pub fn window(window: WindowSpec) -> Self {
        Self::new().with_window(window)
    }

    pub fn with_status(mut self, statuses: impl IntoIterator<Item = LoadStatus>) -> Self {
        self.predicates.push(Predicate::Status {
            statuses: statuses.into_iter().collect(),
        });
        self
    }

    pub fn with_window(mut self, window: WindowSpec) -> Self {
        self.predicates.push(Predicate::Window { window });
        self
    }

    /// Both filters must match
    pub fn and(&self, other: &RowFilter) -> RowFilter {
        let mut predicates = self.predicates.clone();
        predicates.extend(other.predicates.iter().cloned());
        RowFilter { predicates }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.predicates.iter().all(|p| p.matches(row))
    }

    /// Matching rows, in input order
    pub fn apply<'a, I>(&self, rows: I) -> Vec<&'a Row>
    where
        I: IntoIterator<Item = &'a Row>,
    {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }

    pub fn select<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Row> {
        self.apply(dataset.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClockTime, Quantity};

    fn row(cage_id: &str, ops_clock: &str, status: LoadStatus) -> Row {
        Row {
            source_row: 0,
            cage_id: cage_id.to_string(),
            ops_clock: ops_clock.to_string(),
            status,
            status_marker: String::new(),
            quantity: Quantity::Missing,
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                row("A", "09:00", LoadStatus::Loaded),
                row("B", "PM 12:00", LoadStatus::NotLoaded),
                row("C", "PM 12:00", LoadStatus::Loaded),
                row("D", "CARREG. AM", LoadStatus::Unset),
            ],
            "01/01/2024",
            Vec::new(),
            false,
        )
    }

    fn ids(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|r| r.cage_id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let ds = dataset();
        assert_eq!(RowFilter::new().select(&ds).len(), 4);
    }

    #[test]
    fn test_status_filter() {
        let ds = dataset();
        let selected = RowFilter::status([LoadStatus::Loaded]).select(&ds);
        assert_eq!(ids(&selected), vec!["A", "C"]);
    }

    #[test]
    fn test_and_combines_predicates() {
        let ds = dataset();
        let filter = RowFilter::window(WindowSpec::label("PM 12:00"))
            .and(&RowFilter::status([LoadStatus::Loaded]));
        assert_eq!(ids(&filter.select(&ds)), vec!["C"]);
    }

    #[test]
    fn test_cutoff_window_skips_unparsable_labels() {
        let ds = dataset();
        let cutoff = ClockTime::parse("12:00").unwrap();
        let am = RowFilter::window(WindowSpec::Before { cutoff }).select(&ds);
        assert_eq!(ids(&am), vec!["A"]);
        let pm = RowFilter::window(WindowSpec::AtOrAfter { cutoff }).select(&ds);
        assert_eq!(ids(&pm), vec!["B", "C"]);
    }

    #[test]
    fn test_filter_does_not_touch_dataset() {
        let ds = dataset();
        let before = ds.clone();
        let _ = RowFilter::status([LoadStatus::NotLoaded]).select(&ds);
        assert_eq!(ds, before);
    }

    #[test]
    fn test_filter_from_json() {
        let filter: RowFilter = serde_json::from_str(
            r#"[{"kind": "status", "statuses": ["loaded", "not_loaded"]},
                {"kind": "window", "window": {"kind": "label", "labels": ["PM 12:00"]}}]"#,
        )
        .unwrap();
        assert_eq!(filter.predicates().len(), 2);
    }
}
