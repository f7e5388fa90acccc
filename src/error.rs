//! Error types for the geo taxonomy system
//!
//! Resolution misses and broken dataset references are structural data
//! conditions, not transient failures. They are returned as values and the
//! calling layer decides what the user sees.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type
#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from path resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The country selector (second path segment) matched no code or name
    #[error("No country matches '{attempted}' (query: '{raw_query}')")]
    NotFound {
        raw_query: String,
        attempted: String,
    },
}

/// A dataset row pointing at a parent key that does not exist
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("City '{city}' references unknown country '{country_code}'")]
    UnknownCountry { city: String, country_code: String },

    #[error("Country '{country_code}' references unknown continent '{continent_code}'")]
    UnknownContinent {
        country_code: String,
        continent_code: String,
    },
}

/// Dataset loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

impl TaxonomyError {
    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Resolve(ResolveError::NotFound { .. }) => "NOT_FOUND",
            Self::Reference(_) => "MALFORMED_REFERENCE",
            Self::Load(_) => "LOAD_FAILED",
            Self::Config(_) => "INVALID_CONFIG",
        }
    }
}
