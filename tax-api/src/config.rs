//! Runtime configuration.
//!
//! Values come from, in order of precedence:
//! 1. command-line flags
//! 2. an optional TOML file given with `--config`
//! 3. built-in defaults
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8080"
//! shutdown_timeout_secs = 10
//!
//! [logging]
//! level = "debug"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::server::DEFAULT_SHUTDOWN_TIMEOUT;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Progressive income tax calculator over HTTP.
///
/// Serves `POST /tax/calculations`.
#[derive(Debug, Default, Parser)]
#[command(name = "tax-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on [default: 0.0.0.0:8080]
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Log filter, a level ("debug") or any `RUST_LOG` directive [default: info]
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seconds to wait for open connections on shutdown [default: 30]
    #[arg(long)]
    pub shutdown_timeout: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server: ServerSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub shutdown_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub log_level: String,
    pub shutdown_timeout: Duration,
}

impl AppConfig {
    /// Reads the file named by `--config`, if any, and merges it under the flags.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(cli, file))
    }

    pub fn resolve(
        cli: &Cli,
        file: FileConfig,
    ) -> Self {
        let bind = cli
            .bind
            .or(file.server.bind)
            .unwrap_or_else(default_bind);
        let log_level = cli
            .log_level
            .clone()
            .or(file.logging.level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let shutdown_timeout = cli
            .shutdown_timeout
            .or(file.server.shutdown_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT);

        Self {
            bind,
            log_level,
            shutdown_timeout,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(&Cli::default(), FileConfig::default())
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
