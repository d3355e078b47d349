//! Output formatting module

use crate::cli::OutputFormat;
use loadboard_app::report::LoadingReport;
use loadboard_domain::{Profile, RouteCounts};
use loadboard_types::Result;

fn print_counts(counts: &RouteCounts) {
    println!("Total routes:    {}", counts.total_routes);
    println!("Loaded:          {}", counts.loaded);
    println!("Not loaded:      {}", counts.not_loaded);
    if counts.unset > 0 {
        println!("Unset:           {}", counts.unset);
    }
    println!("Remaining:       {}", counts.remaining);
    println!("Loaded %:        {:.1}% of {} processed", counts.percent_loaded, counts.processed);
}

pub fn output_report(output_format: OutputFormat, report: &LoadingReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\n{}", report.title);
    println!("{}", "=".repeat(report.title.chars().count().max(16)));
    println!("Loading date:    {}", report.reference_date);
    println!("Profile:         {}", report.profile);
    println!();

    print_counts(&report.metrics.counts);
    println!("Packages:        {}", report.metrics.counts.quantity_shipped);

    for window in &report.metrics.windows {
        println!("\n--- {} ---", window.name);
        print_counts(&window.counts);
    }

    if !report.goals.is_empty() {
        println!("\nGoals");
        println!("-----");
        for goal in &report.goals {
            let r = &goal.result;
            println!(
                "{:<16} {:>4} / {:<4} ({:>5.1}%)  short {:<4} {}",
                goal.name,
                r.achieved,
                r.required,
                r.progress_percent,
                r.shortfall,
                if r.goal_met { "met" } else { "" }
            );
        }
    }

    println!("\nStatus");
    for slice in &report.status_chart {
        println!("  {:<12} {:>4}  {:>5.1}%", slice.label, slice.value, slice.share_percent);
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  {}", warning);
        }
    }

    Ok(())
}

pub fn output_profiles(
    output_format: OutputFormat,
    profiles: &[Profile],
    default_profile: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(profiles)?;
        println!("{}", content);
        return Ok(());
    }

    for profile in profiles {
        let marker = if profile.name == default_profile { " (default)" } else { "" };
        println!("{}{} - {}", profile.name, marker, profile.title);
        for window in &profile.windows {
            println!("    window {}: {}", window.name, window.window);
        }
        for goal in &profile.goals {
            println!("    goal {}: {} of {}", goal.name, goal.fraction, goal.baseline);
        }
    }

    Ok(())
}
