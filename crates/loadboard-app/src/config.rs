//! Configuration management for loadboard
//!
//! Config stored at: ~/.config/loadboard/config.json

use std::path::{Path, PathBuf};

use loadboard_domain::{GoalBaseline, GoalFraction, GoalSpec, PipelineConfig, Profile};
use loadboard_infra::ProfileLoader;
use loadboard_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

use crate::profiles::{builtin_profiles, DEFAULT_PROFILE};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Sheet layout: header offset, column names, status markers
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Profile used when none is given on the command line
    #[serde(default = "default_profile")]
    pub default_profile: String,

    /// User profiles. A user profile replaces the built-in one of the same name.
    #[serde(default)]
    pub profiles: Vec<Profile>,

    /// Extra goal on total routes added to every report
    #[serde(default)]
    pub goal_fraction: Option<GoalFraction>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit log lines as JSON
    #[serde(default)]
    pub log_json: bool,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            default_profile: default_profile(),
            profiles: Vec::new(),
            goal_fraction: None,
            output_format: default_output_format(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Goal added on top of a profile's own goals
pub fn extra_goal(fraction: GoalFraction) -> GoalSpec {
    GoalSpec {
        name: format!("Meta {}", fraction),
        fraction,
        baseline: GoalBaseline::TotalRoutes,
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("loadboard");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            for profile in &config.profiles {
                profile.validate()?;
            }
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Every known profile: file profiles first, then user profiles, then
    /// built-ins not shadowed by either
    pub fn all_profiles(&self, profile_file: Option<&ProfileLoader>) -> Result<Vec<Profile>> {
        let mut profiles: Vec<Profile> = Vec::new();
        let file_profiles = profile_file.map(|l| l.all()).unwrap_or(&[]);
        let candidates = file_profiles
            .iter()
            .cloned()
            .chain(self.profiles.iter().cloned())
            .chain(builtin_profiles()?);
        for profile in candidates {
            if !profiles.iter().any(|p| p.name == profile.name) {
                profiles.push(profile);
            }
        }
        Ok(profiles)
    }

    /// Look up a profile by name, or the default profile
    pub fn resolve_profile(
        &self,
        name: Option<&str>,
        profile_file: Option<&ProfileLoader>,
    ) -> Result<Profile> {
        let name = name.unwrap_or(self.default_profile.as_str());
        let mut profile = self
            .all_profiles(profile_file)?
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;

        if let Some(fraction) = self.goal_fraction {
            profile.goals.push(extra_goal(fraction));
        }
        Ok(profile)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let columns = &self.pipeline.columns;
        let markers = &self.pipeline.markers;

        writeln!(f, "Loadboard Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Header skip:     {}", self.pipeline.header_skip)?;
        writeln!(f, "Date column:     {}", columns.date)?;
        writeln!(f, "Cage column:     {}", columns.cage_id)?;
        writeln!(f, "Window column:   {}", columns.ops_clock)?;
        writeln!(f, "Status column:   {}", columns.status)?;
        writeln!(f, "Quantity column: {}", columns.quantity)?;
        writeln!(f, "Loaded markers:  {}", markers.loaded.join(", "))?;
        writeln!(f, "Pending markers: {}", markers.not_loaded.join(", "))?;
        writeln!(f, "Default profile: {}", self.default_profile)?;
        writeln!(f, "User profiles:   {}", self.profiles.len())?;
        writeln!(
            f,
            "Extra goal:      {}",
            self.goal_fraction
                .map(|g| g.to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Log level:       {}", self.log_level)?;
        writeln!(f, "JSON logs:       {}", self.log_json)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
