//! Normalized rows of one pull

use loadboard_types::CoercionWarning;
use serde::Serialize;

use super::row::Row;

/// Rows of one pull plus the resolved reference date
///
/// Built once by the normalizer and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    rows: Vec<Row>,
    reference_date: String,
    warnings: Vec<CoercionWarning>,
    has_quantity_column: bool,
}

impl Dataset {
    pub fn new(
        rows: Vec<Row>,
        reference_date: impl Into<String>,
        warnings: Vec<CoercionWarning>,
        has_quantity_column: bool,
    ) -> Self {
        Self {
            rows,
            reference_date: reference_date.into(),
            warnings,
            has_quantity_column,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Date the loading refers to, as shown on the dashboard
    pub fn reference_date(&self) -> &str {
        &self.reference_date
    }

    /// Quantity cells that were coerced to 0
    pub fn warnings(&self) -> &[CoercionWarning] {
        &self.warnings
    }

    pub fn has_quantity_column(&self) -> bool {
        self.has_quantity_column
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
