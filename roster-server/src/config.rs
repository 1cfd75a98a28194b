//! Server configuration sourced from environment variables, with an optional
//! YAML override file.
//!
//! | variable | default |
//! |---|---|
//! | `ROSTER_BIND` | `127.0.0.1:8000` |
//! | `ROSTER_STATIC_DIR` | unset (front-end compiled into the binary) |
//! | `ROSTER_SEED` | unset (built-in seed) |
//! | `ROSTER_ENFORCE_CAPACITY` | `false` |
//! | `ROSTER_LOG_FORMAT` | `text` (`json` also accepted) |
//! | `ROSTER_CONFIG` | unset; path to a YAML override file |

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use roster_core::CapacityPolicy;
use serde::Deserialize;

use crate::error::{io_err, ServerError};

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`; `None` serves the bundled front-end.
    pub static_dir: Option<PathBuf>,
    /// YAML seed file; `None` uses the built-in activities.
    pub seed_path: Option<PathBuf>,
    pub capacity_policy: CapacityPolicy,
    pub log_format: LogFormat,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerConfigOverride {
    bind_addr: Option<String>,
    static_dir: Option<PathBuf>,
    seed_path: Option<PathBuf>,
    enforce_capacity: Option<bool>,
    log_format: Option<LogFormat>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            static_dir: None,
            seed_path: None,
            capacity_policy: CapacityPolicy::Unchecked,
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `from_env`, then apply the YAML file named by `ROSTER_CONFIG` if set.
    pub fn from_env_or_yaml() -> Result<Self, ServerError> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("ROSTER_CONFIG") {
            config.apply_yaml_file(Path::new(&path))?;
        }
        Ok(config)
    }

    /// Build from an arbitrary key lookup; tests pass a closure over a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let mut config = Self::default();
        if let Some(bind) = lookup("ROSTER_BIND") {
            config.bind_addr = parse_addr("ROSTER_BIND", &bind)?;
        }
        if let Some(dir) = lookup("ROSTER_STATIC_DIR").filter(|d| !d.is_empty()) {
            config.static_dir = Some(PathBuf::from(dir));
        }
        if let Some(seed) = lookup("ROSTER_SEED").filter(|s| !s.is_empty()) {
            config.seed_path = Some(PathBuf::from(seed));
        }
        if let Some(flag) = lookup("ROSTER_ENFORCE_CAPACITY") {
            config.capacity_policy = policy(parse_bool("ROSTER_ENFORCE_CAPACITY", &flag)?);
        }
        if let Some(format) = lookup("ROSTER_LOG_FORMAT") {
            config.log_format = parse_log_format(&format)?;
        }
        Ok(config)
    }

    pub fn apply_yaml_file(&mut self, path: &Path) -> Result<(), ServerError> {
        let contents = fs::read_to_string(path).map_err(|e| io_err(path.display().to_string(), e))?;
        let override_cfg: ServerConfigOverride = serde_yaml::from_str(&contents)?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = parse_addr("bind_addr", &value)?;
        }
        if let Some(value) = override_cfg.static_dir {
            self.static_dir = Some(value);
        }
        if let Some(value) = override_cfg.seed_path {
            self.seed_path = Some(value);
        }
        if let Some(value) = override_cfg.enforce_capacity {
            self.capacity_policy = policy(value);
        }
        if let Some(value) = override_cfg.log_format {
            self.log_format = value;
        }
        Ok(())
    }
}

fn policy(enforce: bool) -> CapacityPolicy {
    if enforce {
        CapacityPolicy::Enforce
    } else {
        CapacityPolicy::Unchecked
    }
}

fn parse_addr(key: &str, value: &str) -> Result<SocketAddr, ServerError> {
    value
        .parse()
        .map_err(|err| ServerError::Config(format!("parse {key}={value:?}: {err}")))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ServerError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ServerError::Config(format!(
            "parse {key}: expected true/false, got '{other}'"
        ))),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ServerError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" | "" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(ServerError::Config(format!(
            "parse ROSTER_LOG_FORMAT: expected text or json, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn environment_overrides_every_field() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("ROSTER_BIND", "0.0.0.0:9100"),
            ("ROSTER_STATIC_DIR", "/srv/www"),
            ("ROSTER_SEED", "/etc/roster/seed.yaml"),
            ("ROSTER_ENFORCE_CAPACITY", "TRUE"),
            ("ROSTER_LOG_FORMAT", "json"),
        ]))
        .expect("config");
        assert_eq!(config.bind_addr.port(), 9100);
        assert_eq!(config.static_dir, Some(PathBuf::from("/srv/www")));
        assert_eq!(config.seed_path, Some(PathBuf::from("/etc/roster/seed.yaml")));
        assert_eq!(config.capacity_policy, CapacityPolicy::Enforce);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_bind_names_the_variable() {
        let err = ServerConfig::from_lookup(lookup(&[("ROSTER_BIND", "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains("ROSTER_BIND"), "got: {err}");
    }

    #[test]
    fn bad_bool_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("ROSTER_ENFORCE_CAPACITY", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn yaml_override_applies_on_top_of_env() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("roster.yaml");
        fs::write(&path, "bind_addr: 127.0.0.1:9200\nenforce_capacity: true\n").expect("write");

        let mut config =
            ServerConfig::from_lookup(lookup(&[("ROSTER_BIND", "127.0.0.1:9100")])).expect("env");
        config.apply_yaml_file(&path).expect("yaml");
        assert_eq!(config.bind_addr.port(), 9200);
        assert_eq!(config.capacity_policy, CapacityPolicy::Enforce);
        assert_eq!(config.static_dir, None);
    }

    #[test]
    fn yaml_override_rejects_unknown_keys() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("roster.yaml");
        fs::write(&path, "bind: 127.0.0.1:9200\n").expect("write");

        let mut config = ServerConfig::default();
        let err = config.apply_yaml_file(&path).unwrap_err();
        assert!(matches!(err, ServerError::Yaml(_)));
    }
}
