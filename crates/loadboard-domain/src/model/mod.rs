//! Domain model types

pub mod dataset;
pub mod goal;
pub mod grid;
pub mod metrics;
pub mod pipeline_config;
pub mod profile;
pub mod row;
pub mod window;

pub use dataset::Dataset;
pub use goal::{GoalBaseline, GoalFraction, GoalResult, GoalSpec, NamedGoalResult};
pub use grid::{Cell, RawGrid};
pub use metrics::{Metrics, RouteCounts, WindowMetrics};
pub use pipeline_config::{ColumnNames, PipelineConfig, StatusMarkers};
pub use profile::Profile;
pub use row::{LoadStatus, Quantity, Row};
pub use window::{ClockTime, NamedWindow, WindowSpec};
