//! Places tenant configuration can come from, in precedence order.

use crate::config::types::TenantsDocument;
use crate::error::ConfigError;
use std::fmt;
use std::path::PathBuf;

/// Env var holding the inline tenants document. Highest precedence.
pub const TENANTS_CONFIG_ENV: &str = "TENANTS_CONFIG_JSON";
/// Optional env var naming an extra organizations.json, tried before the defaults.
pub const TENANTS_CONFIG_PATH_ENV: &str = "TENANTS_CONFIG_PATH";

/// Conventional file locations, tried in order.
pub const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "config/organizations.json",
    "app/config/organizations.json",
    "/app/config/organizations.json",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// JSON text taken from an environment variable.
    Inline { var: String, json: String },
    File(PathBuf),
}

impl ConfigSource {
    /// Sources from the process environment: inline env var (when set and non-blank),
    /// then `TENANTS_CONFIG_PATH`, then the default file list.
    pub fn from_env() -> Vec<ConfigSource> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Vec<ConfigSource>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut sources = Vec::with_capacity(DEFAULT_CONFIG_PATHS.len() + 2);
        if let Some(json) = lookup(TENANTS_CONFIG_ENV).filter(|s| !s.trim().is_empty()) {
            sources.push(ConfigSource::Inline {
                var: TENANTS_CONFIG_ENV.to_string(),
                json,
            });
        }
        if let Some(path) = lookup(TENANTS_CONFIG_PATH_ENV).filter(|s| !s.trim().is_empty()) {
            sources.push(ConfigSource::File(PathBuf::from(path.trim())));
        }
        sources.extend(DEFAULT_CONFIG_PATHS.iter().map(|p| ConfigSource::File(PathBuf::from(p))));
        sources
    }

    /// Read and parse the source.
    /// `Ok(None)` means the source is absent (file does not exist) and is skipped silently;
    /// `Err(SourceUnavailable)` means it exists but could not be read or parsed.
    pub fn read(&self) -> Result<Option<TenantsDocument>, ConfigError> {
        match self {
            ConfigSource::Inline { json, .. } => self.parse(json).map(Some),
            ConfigSource::File(path) => {
                if !path.exists() {
                    return Ok(None);
                }
                let text = std::fs::read_to_string(path).map_err(|e| self.unavailable(e.to_string()))?;
                self.parse(&text).map(Some)
            }
        }
    }

    fn parse(&self, text: &str) -> Result<TenantsDocument, ConfigError> {
        serde_json::from_str(text).map_err(|e| self.unavailable(e.to_string()))
    }

    fn unavailable(&self, reason: String) -> ConfigError {
        ConfigError::SourceUnavailable {
            origin: self.to_string(),
            reason,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Inline { var, .. } => write!(f, "env:{}", var),
            ConfigSource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_source_comes_first_then_paths() {
        let sources = ConfigSource::from_lookup(lookup(&[
            (TENANTS_CONFIG_ENV, r#"{"organizations":{}}"#),
            (TENANTS_CONFIG_PATH_ENV, "/etc/agent-os/orgs.json"),
        ]));
        assert!(matches!(&sources[0], ConfigSource::Inline { var, .. } if var == TENANTS_CONFIG_ENV));
        assert_eq!(sources[1], ConfigSource::File(PathBuf::from("/etc/agent-os/orgs.json")));
        assert_eq!(sources.len(), DEFAULT_CONFIG_PATHS.len() + 2);
        assert_eq!(sources[2].to_string(), "file:config/organizations.json");
    }

    #[test]
    fn blank_env_value_is_absent() {
        let sources = ConfigSource::from_lookup(lookup(&[(TENANTS_CONFIG_ENV, "  ")]));
        assert_eq!(sources.len(), DEFAULT_CONFIG_PATHS.len());
        assert!(sources.iter().all(|s| matches!(s, ConfigSource::File(_))));
    }

    #[test]
    fn missing_file_is_skipped_not_an_error() {
        let source = ConfigSource::File(PathBuf::from("/definitely/not/here/organizations.json"));
        assert!(matches!(source.read(), Ok(None)));
    }

    #[test]
    fn unparsable_inline_is_unavailable() {
        let source = ConfigSource::Inline {
            var: TENANTS_CONFIG_ENV.into(),
            json: "{not json".into(),
        };
        let err = source.read().unwrap_err();
        assert!(matches!(err, ConfigError::SourceUnavailable { ref origin, .. } if origin == "env:TENANTS_CONFIG_JSON"));
    }
}
