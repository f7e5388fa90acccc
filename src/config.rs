//! Service configuration
//!
//! Layered, lowest precedence first:
//! 1. Built-in defaults
//! 2. YAML file named by `TAXONOMY_CONFIG` (default `config/taxonomy.yaml`, optional)
//! 3. Environment variables (a `.env` file is honored via dotenvy)
//!
//! | Variable                 | Overrides          |
//! |--------------------------|--------------------|
//! | `TAXONOMY_BIND_ADDR`     | `server.bind_addr` |
//! | `SERVER_PORT`            | port of `server.bind_addr` |
//! | `TAXONOMY_DATA_DIR`      | `data.dir`         |
//! | `TAXONOMY_FULL_FILE`     | `data.full_file`   |
//! | `TAXONOMY_AUTH_USER`     | `auth.username`    |
//! | `TAXONOMY_AUTH_PASSWORD` | `auth.password`    |

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Default configuration path
pub const DEFAULT_CONFIG_PATH: &str = "config/taxonomy.yaml";

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:2345";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// Where the reference datasets and the full-tree artifact live
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub continents_file: String,
    pub countries_file: String,
    pub cities_file: String,
    /// Pre-generated tree; relative paths resolve against `dir`
    pub full_file: PathBuf,
}

/// The single credential pair guarding `/private`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            continents_file: "continents.json".to_string(),
            countries_file: "countries.json".to_string(),
            cities_file: "cities.json".to_string(),
            full_file: PathBuf::from("full.json"),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "taxonomy".to_string(),
        }
    }
}

impl DataConfig {
    pub fn continents_path(&self) -> PathBuf {
        self.dir.join(&self.continents_file)
    }

    pub fn countries_path(&self) -> PathBuf {
        self.dir.join(&self.countries_file)
    }

    pub fn cities_path(&self) -> PathBuf {
        self.dir.join(&self.cities_file)
    }

    pub fn full_path(&self) -> PathBuf {
        if self.full_file.is_absolute() {
            self.full_file.clone()
        } else {
            self.dir.join(&self.full_file)
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "server.bind_addr".to_string(),
                value: self.bind_addr.clone(),
            })
    }
}

impl TaxonomyConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Defaults, then the YAML file if present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`load`](Self::load), but `path` (when given) must name an
    /// existing YAML file. Environment overrides apply either way.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Layering behind `load_from`, with the environment behind `lookup`.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading configuration");
                Self::from_file(path)?
            }
            None => {
                let path = lookup("TAXONOMY_CONFIG")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
                if path.exists() {
                    tracing::info!(path = %path.display(), "Loading configuration");
                    Self::from_file(&path)?
                } else {
                    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env(&lookup)?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in production).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("TAXONOMY_BIND_ADDR") {
            self.server.bind_addr = addr;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port: u16 = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT".to_string(),
                value: port.clone(),
            })?;
            let mut addr = self.server.socket_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        if let Some(dir) = lookup("TAXONOMY_DATA_DIR") {
            self.data.dir = PathBuf::from(dir);
        }
        if let Some(full) = lookup("TAXONOMY_FULL_FILE") {
            self.data.full_file = PathBuf::from(full);
        }
        if let Some(user) = lookup("TAXONOMY_AUTH_USER") {
            self.auth.username = user;
        }
        if let Some(password) = lookup("TAXONOMY_AUTH_PASSWORD") {
            self.auth.password = password;
        }
        Ok(())
    }
}
