//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use loadboard_types::{OutputFormat, SourceKind};

#[derive(Parser)]
#[command(name = "loadboard")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Route-loading KPI report for the daily fleet programming sheet")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Extra report profiles (TOML)
    #[arg(long, global = true)]
    pub profiles: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Options shared by every command that runs the pipeline
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Saved sheet (.csv export or .json values dump)
    pub source: PathBuf,

    /// Report profile (general, am, pm or a user profile)
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// Source format, when the extension does not tell
    #[arg(long)]
    pub source_kind: Option<SourceKind>,

    /// CSV field delimiter
    #[arg(long, short = 'd')]
    pub delimiter: Option<char>,

    /// Banner rows above the header. Uses config value if not specified.
    #[arg(long)]
    pub header_skip: Option<usize>,

    /// Extra goal on total routes, as a fraction (e.g. 0.97). Repeatable.
    #[arg(long, short = 'g')]
    pub goal: Vec<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute and print the loading report
    Report {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Compute the report and write it to Excel
    Export {
        #[command(flatten)]
        run: RunArgs,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List report profiles
    Profiles,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set an extra goal fraction applied to every report
        #[arg(long)]
        set_goal: Option<f64>,

        /// Remove the extra goal
        #[arg(long)]
        clear_goal: bool,

        /// Set default profile
        #[arg(long)]
        set_profile: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set number of banner rows above the header
        #[arg(long)]
        set_header_skip: Option<usize>,

        /// Set log level used when RUST_LOG is not set
        #[arg(long)]
        set_log_level: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
