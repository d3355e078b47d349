//! Report profiles
//!
//! One profile per dashboard variant (general, AM shift, PM shift). All of
//! them run the same pipeline with different filters, windows and goals.

use loadboard_types::ConfigError;
use serde::{Deserialize, Serialize};

use super::goal::{GoalBaseline, GoalSpec};
use super::window::NamedWindow;
use crate::service::row_filter::RowFilter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Dashboard heading
    #[serde(default)]
    pub title: String,
    /// Restricts every figure of the report
    #[serde(default)]
    pub filter: RowFilter,
    /// Windows reported as separate subtotals
    #[serde(default)]
    pub windows: Vec<NamedWindow>,
    #[serde(default)]
    pub goals: Vec<GoalSpec>,
}

impl Profile {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            filter: RowFilter::default(),
            windows: Vec::new(),
            goals: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: RowFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_window(mut self, window: NamedWindow) -> Self {
        self.windows.push(window);
        self
    }

    pub fn with_goal(mut self, goal: GoalSpec) -> Self {
        self.goals.push(goal);
        self
    }

    /// Check that every goal baseline refers to a declared window
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in &self.goals {
            if let GoalBaseline::Window { name } = &goal.baseline {
                if !self.windows.iter().any(|w| &w.name == name) {
                    return Err(ConfigError::UnknownWindow {
                        goal: goal.name.clone(),
                        window: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
