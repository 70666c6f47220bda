//! Configuration resolution for mesh-anime
//!
//! Priority per setting: CLI flag → environment variable → TOML file →
//! compiled default. Clap handles the first two; the TOML file and
//! defaults come from `mesh_common::config`.

use clap::Parser;
use mesh_common::config::{LoggingConfig, ServiceConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Module name used for the default config file location
pub const MODULE_NAME: &str = "anime-detector";

/// Command-line arguments for mesh-anime
#[derive(Parser, Debug, Default)]
#[command(name = "mesh-anime")]
#[command(about = "Anime detector plugin for MetaMesh")]
#[command(version)]
pub struct CliArgs {
    /// TOML config file
    #[arg(short, long, env = "MESH_ANIME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "MESH_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Timeout in seconds for meta-core and callback requests
    #[arg(long, env = "MESH_REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,
}

/// How a verdict's property writes reach meta-core
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// One call per property
    #[default]
    Individual,
    /// Single-value properties in one merge call, then set additions
    Merged,
}

/// `[detection]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Appended to the built-in filename keywords
    pub extra_keywords: Vec<String>,
    pub write_mode: WriteMode,
}

/// Full TOML file layout
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetectorToml {
    #[serde(flatten)]
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub detection: DetectionConfig,
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub log_level: String,
    pub extra_keywords: Vec<String>,
    pub write_mode: WriteMode,
}

impl Settings {
    /// Apply CLI/env overrides on top of the TOML file
    pub fn resolve(args: &CliArgs, toml: DetectorToml) -> Self {
        let DetectorToml {
            service,
            logging,
            detection,
        } = toml;

        Self {
            host: args.host.clone().unwrap_or(service.host),
            port: args.port.unwrap_or(service.port),
            request_timeout: Duration::from_secs(
                args.request_timeout.unwrap_or(service.request_timeout_secs),
            ),
            log_level: logging.level,
            extra_keywords: detection.extra_keywords,
            write_mode: detection.write_mode,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&CliArgs::default(), DetectorToml::default())
    }
}
