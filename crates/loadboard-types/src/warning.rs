//! Non-fatal data quality findings

use serde::{Deserialize, Serialize};

/// A cell that could not be read as a package count and was counted as 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionWarning {
    /// 1-based row number in the source grid
    pub row: usize,
    /// Column header as it appears in the source
    pub column: String,
    /// Raw cell text
    pub value: String,
}

impl std::fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {}, column {}: '{}' is not a package count, counted as 0",
            self.row, self.column, self.value
        )
    }
}
