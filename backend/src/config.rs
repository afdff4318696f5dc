//! Application configuration file support.
//!
//! Settings are read from `justpark.toml` and may be overridden by
//! environment variables. Every field has a default, so an empty or missing
//! file yields a working configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::services::earnings::DEFAULT_MILESTONE_STEP;

pub const CONFIG_FILE_NAME: &str = "justpark.toml";
pub const CONFIG_PATH_ENV: &str = "JUSTPARK_CONFIG";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const BOOKINGS_FILE_ENV: &str = "JUSTPARK_BOOKINGS_FILE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub occupancy: OccupancySettings,
    #[serde(default)]
    pub earnings: EarningsSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum upload size in megabytes.
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,
}

/// Data loaded at start-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default)]
    pub bootstrap_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancySettings {
    /// Rolling windows (days) used when a request names none.
    #[serde(default = "default_windows")]
    pub default_windows: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsSettings {
    #[serde(default = "default_milestone_step")]
    pub milestone_step: f64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit_mb() -> usize {
    50
}

fn default_windows() -> Vec<usize> {
    vec![7, 30]
}

fn default_milestone_step() -> f64 {
    DEFAULT_MILESTONE_STEP
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_mb: default_body_limit_mb(),
        }
    }
}

impl Default for OccupancySettings {
    fn default() -> Self {
        Self {
            default_windows: default_windows(),
        }
    }
}

impl Default for EarningsSettings {
    fn default() -> Self {
        Self {
            milestone_step: default_milestone_step(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Uses the file named by `JUSTPARK_CONFIG` when set, otherwise searches
    /// for `justpark.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> Result<Self> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                info!("Using configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        info!("No {} found, using default configuration", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// Apply `HOST`, `PORT` and `JUSTPARK_BOOKINGS_FILE` on top of the file.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = env::var(HOST_ENV) {
            self.server.host = host;
        }
        if let Ok(port) = env::var(PORT_ENV) {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid {} value '{}'", PORT_ENV, port))?;
        }
        if let Ok(file) = env::var(BOOKINGS_FILE_ENV) {
            self.data.bootstrap_file = Some(PathBuf::from(file));
        }
        Ok(())
    }

    /// Default location plus environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_default_location()?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.occupancy.default_windows.is_empty() {
            bail!("occupancy.default_windows must not be empty");
        }
        if let Some(window) = self.occupancy.default_windows.iter().find(|&&w| w == 0) {
            bail!("occupancy.default_windows contains invalid window {}", window);
        }
        let step = self.earnings.milestone_step;
        if step.is_nan() || step <= 0.0 {
            bail!(
                "earnings.milestone_step must be positive, got {}",
                step
            );
        }
        if self.server.body_limit_mb == 0 {
            bail!("server.body_limit_mb must be at least 1");
        }
        Ok(())
    }
}
