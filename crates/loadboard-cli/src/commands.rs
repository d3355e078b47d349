//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat, RunArgs};
use crate::output::{output_profiles, output_report};
use chrono::Local;
use loadboard_app::config::{extra_goal, Config};
use loadboard_app::export::export_to_excel;
use loadboard_app::report::{ReportRun, ReportService};
use loadboard_app::telemetry::init_tracing;
use loadboard_domain::{GoalFraction, GoalSpec};
use loadboard_infra::{open_source, ProfileLoader};
use loadboard_types::{ConfigError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    init_tracing(log_level, config.log_json);

    let profile_file = cli
        .profiles
        .as_deref()
        .map(ProfileLoader::load_from_file)
        .transpose()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Report { run } => {
            let run = run_pipeline(&config, profile_file.as_ref(), run)?;
            output_report(output_format, &run.report)
        }

        Commands::Export { run, output } => {
            cmd_export(&config, profile_file.as_ref(), run, output.clone())
        }

        Commands::Profiles => {
            let profiles = config.all_profiles(profile_file.as_ref())?;
            output_profiles(output_format, &profiles, &config.default_profile)
        }

        Commands::Config {
            show,
            set_goal,
            clear_goal,
            set_profile,
            set_output,
            set_header_skip,
            set_log_level,
            reset,
        } => cmd_config(
            config,
            profile_file.as_ref(),
            *show,
            *set_goal,
            *clear_goal,
            set_profile.clone(),
            *set_output,
            *set_header_skip,
            set_log_level.clone(),
            *reset,
        ),
    }
}

fn parse_delimiter(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(ConfigError::ParseError(format!(
            "delimiter must be a single ASCII character, got '{}'",
            delimiter
        ))
        .into())
    }
}

/// One pull-compute cycle with CLI overrides applied
fn run_pipeline(
    config: &Config,
    profile_file: Option<&ProfileLoader>,
    args: &RunArgs,
) -> Result<ReportRun> {
    let mut pipeline = config.pipeline.clone();
    if let Some(skip) = args.header_skip {
        pipeline.header_skip = skip;
    }

    let profile = config.resolve_profile(args.profile.as_deref(), profile_file)?;
    let goals = args
        .goal
        .iter()
        .map(|f| GoalFraction::new(*f).map(extra_goal))
        .collect::<std::result::Result<Vec<GoalSpec>, ConfigError>>()?;

    let delimiter = args.delimiter.map(parse_delimiter).transpose()?;
    let source = open_source(&args.source, args.source_kind, delimiter)?;

    debug!(profile = %profile.name, header_skip = pipeline.header_skip, "running report");
    let service = ReportService::new(pipeline, profile)?.with_goals(goals);
    service.run(source.as_ref())
}

fn cmd_export(
    config: &Config,
    profile_file: Option<&ProfileLoader>,
    args: &RunArgs,
    output: Option<PathBuf>,
) -> Result<()> {
    let run = run_pipeline(config, profile_file, args)?;

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let stamp = Local::now().format("%Y%m%d");
        args.source
            .with_file_name(format!("loadboard-{}-{}.xlsx", run.report.profile, stamp))
    });

    export_to_excel(&run.report, &run.dataset, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: Config,
    profile_file: Option<&ProfileLoader>,
    show: bool,
    set_goal: Option<f64>,
    clear_goal: bool,
    set_profile: Option<String>,
    set_output: Option<OutputFormat>,
    set_header_skip: Option<usize>,
    set_log_level: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(fraction) = set_goal {
        config.goal_fraction = Some(GoalFraction::new(fraction)?);
        modified = true;
    }

    if clear_goal {
        config.goal_fraction = None;
        modified = true;
    }

    if let Some(profile) = set_profile {
        // Fail early on typos
        config.resolve_profile(Some(&profile), profile_file)?;
        config.default_profile = profile;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(skip) = set_header_skip {
        config.pipeline.header_skip = skip;
        modified = true;
    }

    if let Some(level) = set_log_level {
        config.log_level = level;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
