//! Layered application configuration.
//!
//! Sources are merged in order, later ones winning:
//! 1) built-in defaults -> 2) YAML file (if provided) -> 3) env (`CALCULATOR__*`)
//! -> 4) CLI overrides.

use std::path::Path;

use anyhow::{Context, Result, bail};
use api_gateway::ApiGatewayConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read into the configuration.
/// Nesting uses a double underscore: `CALCULATOR__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "CALCULATOR__";

/// Top-level configuration of the calculator server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub api_gateway: ApiGatewayConfig,
}

/// Listening socket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// `host:port`, with IPv6 literals bracketed.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `calculator=debug,info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Values given on the command line that take precedence over every other source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub port: Option<u16>,
    /// `-v` count: 1 = info, 2 = debug, 3+ = trace.
    pub verbose: u8,
}

impl AppConfig {
    /// Provider chain without CLI overrides.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load the layered configuration.
    ///
    /// # Errors
    /// Returns an error if `path` is given but is not a file, or if any source
    /// holds a malformed or unknown value.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path
            && !path.is_file()
        {
            bail!("config file does not exist: {}", path.display());
        }

        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    pub fn apply_cli_overrides(&mut self, cli: CliOverrides) {
        if let Some(port) = cli.port {
            self.server.port = port;
        }

        let level = match cli.verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.logging.level);
    }

    /// Pretty-printed JSON rendering of the effective configuration.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to render configuration")
    }
}
