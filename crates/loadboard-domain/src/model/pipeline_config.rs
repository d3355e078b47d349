//! Sheet layout settings shared by every profile

use serde::{Deserialize, Serialize};

use super::row::LoadStatus;

/// Banner rows above the header in the operations sheet
pub const DEFAULT_HEADER_SKIP: usize = 2;

/// Header names of the columns the pipeline reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    #[serde(default = "default_date_column")]
    pub date: String,
    #[serde(default = "default_cage_id_column")]
    pub cage_id: String,
    #[serde(default = "default_ops_clock_column")]
    pub ops_clock: String,
    #[serde(default = "default_status_column")]
    pub status: String,
    #[serde(default = "default_quantity_column")]
    pub quantity: String,
}

fn default_date_column() -> String {
    "Data Exp.".to_string()
}

fn default_cage_id_column() -> String {
    "Gaiola".to_string()
}

fn default_ops_clock_column() -> String {
    "OpsClock".to_string()
}

fn default_status_column() -> String {
    "OK?".to_string()
}

fn default_quantity_column() -> String {
    "Pacotes".to_string()
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            date: default_date_column(),
            cage_id: default_cage_id_column(),
            ops_clock: default_ops_clock_column(),
            status: default_status_column(),
            quantity: default_quantity_column(),
        }
    }
}

/// Literal markers of the status column
///
/// Matching is exact on the trimmed cell. Anything else is `Unset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMarkers {
    #[serde(default = "default_loaded_markers")]
    pub loaded: Vec<String>,
    #[serde(default = "default_not_loaded_markers")]
    pub not_loaded: Vec<String>,
}

fn default_loaded_markers() -> Vec<String> {
    vec!["OK".to_string()]
}

fn default_not_loaded_markers() -> Vec<String> {
    vec!["-".to_string()]
}

impl Default for StatusMarkers {
    fn default() -> Self {
        Self {
            loaded: default_loaded_markers(),
            not_loaded: default_not_loaded_markers(),
        }
    }
}

impl StatusMarkers {
    pub fn classify(&self, marker: &str) -> LoadStatus {
        let marker = marker.trim();
        if self.loaded.iter().any(|m| m == marker) {
            LoadStatus::Loaded
        } else if self.not_loaded.iter().any(|m| m == marker) {
            LoadStatus::NotLoaded
        } else {
            LoadStatus::Unset
        }
    }
}

/// Everything the normalizer needs to know about the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Rows skipped before the header row
    #[serde(default = "default_header_skip")]
    pub header_skip: usize,
    #[serde(default)]
    pub columns: ColumnNames,
    #[serde(default)]
    pub markers: StatusMarkers,
}

fn default_header_skip() -> usize {
    DEFAULT_HEADER_SKIP
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            header_skip: DEFAULT_HEADER_SKIP,
            columns: ColumnNames::default(),
            markers: StatusMarkers::default(),
        }
    }
}
