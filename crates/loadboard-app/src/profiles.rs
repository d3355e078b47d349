//! Built-in report profiles
//!
//! `general` is the full-day dashboard with the PM cages as a subtotal.
//! `am` and `pm` are the shift dashboards.

use loadboard_domain::Profile;
use loadboard_infra::ProfileLoader;
use loadboard_types::Result;

pub const DEFAULT_PROFILE: &str = "general";

const BUILTIN_PROFILES: &str = r#"
[[profiles]]
name = "general"
title = "Report de Carregamento - LPA-03"

[[profiles.windows]]
name = "PM"
window = { kind = "label", labels = ["PM 12:00"] }

[[profiles.goals]]
name = "Meta 95%"
fraction = 0.95

[[profiles.goals]]
name = "Meta 98%"
fraction = 0.98

[[profiles]]
name = "am"
title = "Report de Carregamento AM - LPA-03"
filter = [{ kind = "window", window = { kind = "any_of", windows = [
    { kind = "before", cutoff = "12:00" },
    { kind = "label", labels = ["CARREG. AM"] },
] } }]

[[profiles.goals]]
name = "Meta AM 95%"
fraction = 0.95

[[profiles]]
name = "pm"
title = "Report de Carregamento PM - LPA-03"
filter = [{ kind = "window", window = { kind = "label", labels = ["PM 12:00"] } }]

[[profiles.goals]]
name = "Meta PM 98%"
fraction = 0.98
"#;

pub fn builtin_profiles() -> Result<Vec<Profile>> {
    Ok(ProfileLoader::load_from_str(BUILTIN_PROFILES)?.into_profiles())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles_parse() {
        let profiles = builtin_profiles().unwrap();
        let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["general", "am", "pm"]);
        assert!(profiles.iter().any(|p| p.name == DEFAULT_PROFILE));
        assert_eq!(profiles[0].goals.len(), 2);
        assert_eq!(profiles[0].windows[0].name, "PM");
    }
}
