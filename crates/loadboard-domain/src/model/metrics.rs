//! Derived dashboard figures

use serde::{Deserialize, Serialize};

/// Distinct-cage counts over one subset of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteCounts {
    /// Distinct cage ids in the subset
    pub total_routes: usize,
    /// Distinct cage ids with a loaded row
    pub loaded: usize,
    /// Distinct cage ids with a not-loaded row
    pub not_loaded: usize,
    /// Distinct cage ids with an unrecognised or blank marker
    pub unset: usize,
    /// Distinct cage ids without any loaded row
    pub remaining: usize,
    /// `loaded + not_loaded`
    pub processed: usize,
    /// `loaded / processed * 100`, 0 when nothing is processed
    pub percent_loaded: f64,
    /// Packages on loaded rows
    pub quantity_shipped: u64,
}

/// Counts restricted to one named time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowMetrics {
    pub name: String,
    #[serde(flatten)]
    pub counts: RouteCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(flatten)]
    pub counts: RouteCounts,
    pub windows: Vec<WindowMetrics>,
}

impl Metrics {
    pub fn window(&self, name: &str) -> Option<&WindowMetrics> {
        self.windows.iter().find(|w| w.name == name)
    }
}
