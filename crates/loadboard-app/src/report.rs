//! Report Service - one pull-compute-render cycle
//!
//! 1. Pull the raw grid from a grid source
//! 2. Normalize it into a dataset
//! 3. Compute metrics for the profile's filter and windows
//! 4. Evaluate the profile's goals
//! 5. Hand back the report; nothing is kept between runs

use chrono::{Local, NaiveDate};
use loadboard_domain::service::{compute_metrics, evaluate_goals, normalize, percent_of};
use loadboard_domain::{
    Dataset, GoalSpec, GridSource, Metrics, NamedGoalResult, PipelineConfig, Profile, RawGrid,
};
use loadboard_types::{CoercionWarning, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

/// One slice of the loaded / not-loaded pie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: usize,
    /// Share of the processed routes, 0 when nothing is processed
    pub share_percent: f64,
}

/// Everything the rendering layer needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingReport {
    pub title: String,
    pub profile: String,
    pub reference_date: String,
    pub metrics: Metrics,
    pub goals: Vec<NamedGoalResult>,
    pub status_chart: Vec<ChartSlice>,
    /// `percent_loaded` as shown in the middle of the pie
    pub chart_center_label: String,
    pub warnings: Vec<CoercionWarning>,
}

/// A finished run: the report plus the dataset it was computed from
#[derive(Debug, Clone)]
pub struct ReportRun {
    pub dataset: Dataset,
    pub report: LoadingReport,
}

fn status_chart(metrics: &Metrics) -> Vec<ChartSlice> {
    let counts = &metrics.counts;
    let processed = counts.processed as f64;
    vec![
        ChartSlice {
            label: "Loaded".to_string(),
            value: counts.loaded,
            share_percent: percent_of(counts.loaded as f64, processed),
        },
        ChartSlice {
            label: "Not loaded".to_string(),
            value: counts.not_loaded,
            share_percent: percent_of(counts.not_loaded as f64, processed),
        },
    ]
}

/// Runs the pipeline for one profile
#[derive(Debug, Clone)]
pub struct ReportService {
    pipeline: PipelineConfig,
    profile: Profile,
}

impl ReportService {
    pub fn new(pipeline: PipelineConfig, profile: Profile) -> Result<Self> {
        profile.validate()?;
        Ok(Self { pipeline, profile })
    }

    /// Add goals on top of the profile's own
    pub fn with_goals(mut self, goals: impl IntoIterator<Item = GoalSpec>) -> Self {
        self.profile.goals.extend(goals);
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Pull from the source and build the report, dated today
    pub fn run(&self, source: &dyn GridSource) -> Result<ReportRun> {
        let span = info_span!("report", profile = %self.profile.name);
        let _guard = span.enter();

        info!(source = %source.describe(), "pulling sheet");
        let grid = source.fetch()?;
        self.build(&grid, Local::now().date_naive())
    }

    /// Build the report from an already pulled grid
    pub fn build(&self, grid: &RawGrid, today: NaiveDate) -> Result<ReportRun> {
        let dataset = normalize(grid, &self.pipeline, today)?;
        let filter = (!self.profile.filter.is_empty()).then_some(&self.profile.filter);
        let metrics = compute_metrics(&dataset, filter, &self.profile.windows);
        let goals = evaluate_goals(&self.profile.goals, &metrics)?;

        info!(
            total_routes = metrics.counts.total_routes,
            loaded = metrics.counts.loaded,
            not_loaded = metrics.counts.not_loaded,
            percent_loaded = metrics.counts.percent_loaded,
            "metrics computed"
        );

        let report = LoadingReport {
            title: self.profile.title.clone(),
            profile: self.profile.name.clone(),
            reference_date: dataset.reference_date().to_string(),
            status_chart: status_chart(&metrics),
            chart_center_label: format!("{:.1}%", metrics.counts.percent_loaded),
            goals,
            warnings: dataset.warnings().to_vec(),
            metrics,
        };

        Ok(ReportRun { dataset, report })
    }
}
