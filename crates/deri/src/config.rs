//! Settings from `deri.toml` (or `--config`), then `DERI_*` environment
//! overrides.

use deri_core::analysis::AnalysisSettings;
use deri_core::analysis::attention::DEFAULT_PERCENTILES;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_FILE: &str = "deri.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("percentile {value} is outside 0..=100")]
    InvalidPercentile { value: u8 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub analysis: AnalysisSection,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: ".deri/deri.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 4830,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    pub percentiles: Vec<u8>,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            percentiles: DEFAULT_PERCENTILES.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub filter: Option<String>,
}

impl Settings {
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_FILE).is_file() => Self::from_file(Path::new(DEFAULT_FILE))?,
            None => Self::default(),
        };
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = lookup("DERI_DB_PATH") {
            self.database.path = path;
        }
        if let Some(host) = lookup("DERI_HOST") {
            self.server.host = host.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "DERI_HOST",
                value: host.clone(),
            })?;
        }
        if let Some(port) = lookup("DERI_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "DERI_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(filter) = lookup("DERI_LOG") {
            self.log.filter = Some(filter);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.analysis.percentiles.iter().find(|value| **value > 100) {
            Some(value) => Err(ConfigError::InvalidPercentile { value: *value }),
            None => Ok(()),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            percentiles: self.analysis.percentiles.clone(),
        }
    }
}
