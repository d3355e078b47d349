//! Report profiles loaded from a TOML file

use std::fs;
use std::path::Path;

use loadboard_domain::Profile;
use loadboard_types::{ConfigError, Error, Result};
use serde::Deserialize;

/// Container for parsing profiles.toml
#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Profiles keyed by name, in file order
#[derive(Debug, Clone, Default)]
pub struct ProfileLoader {
    profiles: Vec<Profile>,
}

impl ProfileLoader {
    /// Load profiles from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read profile file {}: {}",
                path.display(),
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load profiles from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: ProfileFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse profile TOML: {}",
                e
            )))
        })?;

        for profile in &file.profiles {
            profile.validate()?;
        }

        Ok(Self {
            profiles: file.profiles,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn all(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn into_profiles(self) -> Vec<Profile> {
        self.profiles
    }

    pub fn count(&self) -> usize {
        self.profiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadboard_domain::service::Predicate;
    use loadboard_domain::{GoalBaseline, LoadStatus, WindowSpec};

    const TEST_TOML: &str = r#"
[[profiles]]
name = "pm"
title = "Report Carregamento PM - LPA-03"
filter = [{ kind = "status", statuses = ["loaded", "not_loaded"] }]

[[profiles.windows]]
name = "PM"
window = { kind = "label", labels = ["PM 12:00"] }

[[profiles.goals]]
name = "Meta PM 98%"
fraction = 0.98
baseline = { kind = "window", name = "PM" }

[[profiles]]
name = "am"

[[profiles.windows]]
name = "AM"
window = { kind = "before", cutoff = "12:00" }

[[profiles.goals]]
name = "Meta 95%"
fraction = 0.95
"#;

    #[test]
    fn test_load_from_str() {
        let loader = ProfileLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.count(), 2);

        let pm = loader.get("pm").unwrap();
        assert_eq!(pm.title, "Report Carregamento PM - LPA-03");
        assert_eq!(pm.windows[0].window, WindowSpec::label("PM 12:00"));
        assert_eq!(
            pm.goals[0].baseline,
            GoalBaseline::Window {
                name: "PM".to_string()
            }
        );
        assert_eq!(
            pm.filter.predicates(),
            &[Predicate::Status {
                statuses: vec![LoadStatus::Loaded, LoadStatus::NotLoaded]
            }]
        );

        let am = loader.get("am").unwrap();
        assert_eq!(am.goals[0].baseline, GoalBaseline::TotalRoutes);
        assert!(loader.get("general").is_none());
    }

    #[test]
    fn test_rejects_goal_on_undeclared_window() {
        let toml = r#"
[[profiles]]
name = "broken"

[[profiles.goals]]
name = "x"
fraction = 0.9
baseline = { kind = "window", name = "PM" }
"#;
        let err = ProfileLoader::load_from_str(toml).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::UnknownWindow { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_fraction() {
        let toml = r#"
[[profiles]]
name = "broken"

[[profiles.goals]]
name = "x"
fraction = 1.2
"#;
        assert!(ProfileLoader::load_from_str(toml).is_err());
    }
}
