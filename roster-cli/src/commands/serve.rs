//! `roster serve`: run the HTTP server in the foreground.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use roster_core::CapacityPolicy;
use roster_server::{start_blocking, LogFormat, ServerConfig};

/// Arguments for `roster serve`. Flags override `ROSTER_*` environment settings.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on (default 127.0.0.1:8000).
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// YAML seed file to load instead of the built-in activities.
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Directory served under /static instead of the bundled front-end.
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Reject signups once an activity reaches max_participants.
    #[arg(long)]
    pub enforce_capacity: bool,

    /// Emit JSON log lines instead of text.
    #[arg(long)]
    pub json_logs: bool,
}

impl ServeArgs {
    pub fn run(self) -> Result<()> {
        let config = self.into_config(
            ServerConfig::from_env_or_yaml().context("failed to load server configuration")?,
        );
        start_blocking(config).context("roster server exited with error")
    }

    fn into_config(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(seed) = self.seed {
            config.seed_path = Some(seed);
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = Some(dir);
        }
        if self.enforce_capacity {
            config.capacity_policy = CapacityPolicy::Enforce;
        }
        if self.json_logs {
            config.log_format = LogFormat::Json;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_loaded_config() {
        let args = ServeArgs {
            bind: Some("127.0.0.1:9300".parse().expect("addr")),
            seed: Some(PathBuf::from("seed.yaml")),
            static_dir: None,
            enforce_capacity: true,
            json_logs: false,
        };
        let config = args.into_config(ServerConfig::default());
        assert_eq!(config.bind_addr.port(), 9300);
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.yaml")));
        assert_eq!(config.capacity_policy, CapacityPolicy::Enforce);
        assert_eq!(config.static_dir, ServerConfig::default().static_dir);
    }

    #[test]
    fn absent_flags_keep_loaded_config() {
        let loaded = ServerConfig {
            capacity_policy: CapacityPolicy::Enforce,
            ..ServerConfig::default()
        };
        let args = ServeArgs {
            bind: None,
            seed: None,
            static_dir: None,
            enforce_capacity: false,
            json_logs: false,
        };
        assert_eq!(args.into_config(loaded.clone()), loaded);
    }
}
