//! Goal evaluator
//!
//! `required` is always rounded half-up. The product is snapped to 1e-9
//! first so that `30 * 0.95` (28.499999999999996 in binary) rounds to 29.

use loadboard_types::ConfigError;

use crate::model::{GoalBaseline, GoalFraction, GoalResult, GoalSpec, Metrics, NamedGoalResult};
use crate::service::metrics_calculator::percent_of;

const SNAP: f64 = 1e9;

/// Round a non-negative value half-up
pub fn round_half_up(value: f64) -> u64 {
    let snapped = (value * SNAP).round() / SNAP;
    (snapped + 0.5).floor().max(0.0) as u64
}

pub fn evaluate_goal(baseline: u64, achieved: u64, fraction: GoalFraction) -> GoalResult {
    let required = round_half_up(baseline as f64 * fraction.value());
    let shortfall = required.saturating_sub(achieved);
    let progress_percent = percent_of(achieved as f64, required as f64).min(100.0);

    GoalResult {
        baseline,
        achieved,
        fraction: fraction.value(),
        required,
        shortfall,
        progress_percent,
        goal_met: achieved >= required,
    }
}

/// Evaluate each goal against the loaded count of its baseline scope
pub fn evaluate_goals(
    goals: &[GoalSpec],
    metrics: &Metrics,
) -> Result<Vec<NamedGoalResult>, ConfigError> {
    goals
        .iter()
        .map(|goal| {
            let (baseline, achieved) = match &goal.baseline {
                GoalBaseline::TotalRoutes => (metrics.counts.total_routes, metrics.counts.loaded),
                GoalBaseline::Processed => (metrics.counts.processed, metrics.counts.loaded),
                GoalBaseline::Window { name } => {
                    let window =
                        metrics
                            .window(name)
                            .ok_or_else(|| ConfigError::UnknownWindow {
                                goal: goal.name.clone(),
                                window: name.clone(),
                            })?;
                    (window.counts.total_routes, window.counts.loaded)
                }
            };
            Ok(NamedGoalResult {
                name: goal.name.clone(),
                baseline_kind: goal.baseline.clone(),
                result: evaluate_goal(baseline as u64, achieved as u64, goal.fraction),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RouteCounts, WindowMetrics};

    fn fraction(f: f64) -> GoalFraction {
        GoalFraction::new(f).unwrap()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(9.5), 10);
        assert_eq!(round_half_up(9.49), 9);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(30.0 * 0.95), 29);
        assert_eq!(round_half_up(10.0 * 0.95), 10);
    }

    #[test]
    fn test_ten_routes_at_98_percent() {
        let result = evaluate_goal(10, 6, fraction(0.98));
        assert_eq!(result.required, 10);
        assert_eq!(result.shortfall, 4);
        assert!((result.progress_percent - 60.0).abs() < 1e-9);
        assert!(!result.goal_met);
    }

    #[test]
    fn test_progress_is_clamped() {
        let result = evaluate_goal(10, 10, fraction(0.5));
        assert_eq!(result.required, 5);
        assert_eq!(result.shortfall, 0);
        assert_eq!(result.progress_percent, 100.0);
        assert!(result.goal_met);
    }

    #[test]
    fn test_zero_required() {
        let result = evaluate_goal(0, 0, fraction(0.95));
        assert_eq!(result.required, 0);
        assert_eq!(result.shortfall, 0);
        assert_eq!(result.progress_percent, 0.0);
        assert!(result.goal_met);
    }

    #[test]
    fn test_invariants_over_range() {
        for baseline in 0..40u64 {
            for achieved in 0..=baseline {
                for f in [0.01, 0.5, 0.95, 0.98, 1.0] {
                    let r = evaluate_goal(baseline, achieved, fraction(f));
                    assert!(r.progress_percent <= 100.0);
                    assert!(r.progress_percent >= 0.0);
                    assert_eq!(r.shortfall, r.required.saturating_sub(achieved));
                    if r.required == 0 {
                        assert_eq!(r.progress_percent, 0.0);
                        assert_eq!(r.shortfall, 0);
                    }
                }
            }
        }
    }

    fn metrics() -> Metrics {
        Metrics {
            counts: RouteCounts {
                total_routes: 20,
                loaded: 12,
                not_loaded: 4,
                processed: 16,
                ..RouteCounts::default()
            },
            windows: vec![WindowMetrics {
                name: "PM".to_string(),
                counts: RouteCounts {
                    total_routes: 8,
                    loaded: 8,
                    processed: 8,
                    ..RouteCounts::default()
                },
            }],
        }
    }

    #[test]
    fn test_goals_by_baseline() {
        let goals = vec![
            GoalSpec {
                name: "total".to_string(),
                fraction: fraction(0.95),
                baseline: GoalBaseline::TotalRoutes,
            },
            GoalSpec {
                name: "processed".to_string(),
                fraction: fraction(1.0),
                baseline: GoalBaseline::Processed,
            },
            GoalSpec {
                name: "pm".to_string(),
                fraction: fraction(0.98),
                baseline: GoalBaseline::Window {
                    name: "PM".to_string(),
                },
            },
        ];
        let results = evaluate_goals(&goals, &metrics()).unwrap();
        assert_eq!(results[0].result.required, 19);
        assert_eq!(results[0].result.shortfall, 7);
        assert_eq!(results[1].result.required, 16);
        assert_eq!(results[2].result.required, 8);
        assert!(results[2].result.goal_met);
    }

    #[test]
    fn test_goal_on_unknown_window() {
        let goals = vec![GoalSpec {
            name: "am".to_string(),
            fraction: fraction(0.95),
            baseline: GoalBaseline::Window {
                name: "AM".to_string(),
            },
        }];
        assert!(matches!(
            evaluate_goals(&goals, &metrics()),
            Err(ConfigError::UnknownWindow { .. })
        ));
    }
}
