use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/state.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    /// Profiles offered by the picker. Empty means any valid name is accepted.
    pub profiles: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let profiles = lookup("APP_PROFILES")
            .map(|raw| parse_profiles(&raw))
            .unwrap_or_default();

        Self {
            port,
            data_path,
            profiles,
        }
    }
}

/// Comma-separated names; invalid and repeated entries are skipped.
pub fn parse_profiles(raw: &str) -> Vec<String> {
    let mut profiles: Vec<String> = Vec::new();
    for name in raw.split(',').filter_map(valid_profile_name) {
        if !profiles.contains(&name) {
            profiles.push(name);
        }
    }
    profiles
}

/// Trimmed name of 1-64 ASCII alphanumerics, `-` or `_`.
pub fn valid_profile_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    let valid = !name.is_empty()
        && name.len() <= 64
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/state.json"));
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("APP_DATA_PATH", "/tmp/helper.json"),
            ("APP_PROFILES", " ana, ben ,ana,,bad name"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/helper.json"));
        assert_eq!(config.profiles, vec!["ana".to_string(), "ben".to_string()]);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = AppConfig::from_lookup(lookup(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn profile_names_are_restricted() {
        assert_eq!(valid_profile_name(" ana_1 "), Some("ana_1".to_string()));
        assert_eq!(valid_profile_name(""), None);
        assert_eq!(valid_profile_name("a/b"), None);
        assert_eq!(valid_profile_name(&"x".repeat(65)), None);
    }
}
