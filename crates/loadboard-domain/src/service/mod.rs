//! Domain services
//!
//! The four stages of a report run. Each one is a pure function of its
//! inputs.

pub mod goal_evaluator;
pub mod metrics_calculator;
pub mod normalizer;
pub mod row_filter;

pub use goal_evaluator::{evaluate_goal, evaluate_goals, round_half_up};
pub use metrics_calculator::{compute_metrics, percent_of, tally};
pub use normalizer::normalize;
pub use row_filter::{Predicate, RowFilter};
