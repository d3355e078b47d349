//! Normalized loading-sheet record

use serde::{Deserialize, Serialize};

/// Loading state of a cage, classified from the status marker column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Loaded,
    NotLoaded,
    /// Blank or unrecognised marker. Neither loaded nor not-loaded.
    Unset,
}

impl LoadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::Loaded => "loaded",
            LoadStatus::NotLoaded => "not loaded",
            LoadStatus::Unset => "unset",
        }
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Package count cell after parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Missing,
    Count(u64),
    Invalid(String),
}

impl Quantity {
    /// Count used for sums. Missing and invalid cells count as 0.
    pub fn coerced(&self) -> u64 {
        match self {
            Quantity::Count(n) => *n,
            Quantity::Missing | Quantity::Invalid(_) => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based row number in the source grid
    pub source_row: usize,
    pub cage_id: String,
    pub ops_clock: String,
    pub status: LoadStatus,
    /// Marker text as written in the sheet
    pub status_marker: String,
    pub quantity: Quantity,
}
