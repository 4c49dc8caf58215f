use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use lucas_core::DEFAULT_STRIDE;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "bradify.toml";
pub const DEFAULT_ITERATIONS: u64 = 1000;
pub const DEFAULT_PRECISION: u32 = 100;

/// Optional settings read from `bradify.toml`. Command line flags win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    pub iterations: Option<u64>,
    pub precision: Option<u32>,
    pub stride: Option<u64>,
}

/// Fully resolved run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub iterations: u64,
    pub precision: u32,
    pub stride: u64,
}

impl DriverConfig {
    /// Load from an explicit path (errors are fatal) or from
    /// `bradify.toml` in the working directory (errors fall back to defaults).
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                Self::from_file(path).or_else(|e| {
                    tracing::warn!("{e}. Using defaults.");
                    Ok(Self::default())
                })
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
            path: PathBuf::from(path),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseConfig {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Overlay command line values on top of this file's values.
    pub fn resolve(
        &self,
        iterations: Option<u64>,
        precision: Option<u32>,
        stride: Option<u64>,
    ) -> Settings {
        Settings {
            iterations: iterations
                .or(self.iterations)
                .unwrap_or(DEFAULT_ITERATIONS),
            // zero digits is meaningless, the formatter needs at least one
            precision: precision
                .or(self.precision)
                .unwrap_or(DEFAULT_PRECISION)
                .max(1),
            stride: stride.or(self.stride).unwrap_or(DEFAULT_STRIDE),
        }
    }
}
