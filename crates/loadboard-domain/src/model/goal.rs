//! Loading-completion goals

use loadboard_types::ConfigError;
use serde::{Deserialize, Serialize};

/// Target completion ratio, `0 < f <= 1`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GoalFraction(f64);

impl GoalFraction {
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidGoalFraction(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for GoalFraction {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GoalFraction> for f64 {
    fn from(value: GoalFraction) -> Self {
        value.0
    }
}

impl std::fmt::Display for GoalFraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", (self.0 * 10_000.0).round() / 100.0)
    }
}

/// Which count a goal is measured against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoalBaseline {
    /// All distinct routes of the (filtered) sheet
    TotalRoutes,
    /// Routes with a loaded or not-loaded marker
    Processed,
    /// All distinct routes of one named window
    Window { name: String },
}

impl std::fmt::Display for GoalBaseline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalBaseline::TotalRoutes => write!(f, "total routes"),
            GoalBaseline::Processed => write!(f, "processed routes"),
            GoalBaseline::Window { name } => write!(f, "{} routes", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSpec {
    pub name: String,
    pub fraction: GoalFraction,
    #[serde(default = "default_baseline")]
    pub baseline: GoalBaseline,
}

fn default_baseline() -> GoalBaseline {
    GoalBaseline::TotalRoutes
}

/// Progress toward one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    pub baseline: u64,
    pub achieved: u64,
    pub fraction: f64,
    /// `round_half_up(baseline * fraction)`
    pub required: u64,
    /// `max(0, required - achieved)`
    pub shortfall: u64,
    /// Clamped to `[0, 100]`, 0 when nothing is required
    pub progress_percent: f64,
    pub goal_met: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedGoalResult {
    pub name: String,
    pub baseline_kind: GoalBaseline,
    #[serde(flatten)]
    pub result: GoalResult,
}
