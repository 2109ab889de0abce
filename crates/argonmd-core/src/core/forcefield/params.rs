use crate::core::constants::ARGON_MASS_AMU;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// Pair separations below this are treated as coincident particles.
const DEFAULT_MIN_SEPARATION: f64 = 1e-6;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct LjParams {
    pub epsilon: f64,
    pub sigma: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ForcefieldParams {
    pub lj: LjParams,
    pub mass: f64,
    #[serde(default = "default_min_separation")]
    pub min_separation: f64,
}

fn default_min_separation() -> f64 {
    DEFAULT_MIN_SEPARATION
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl ForcefieldParams {
    /// Parameters for argon: ε = 0.0103 eV, σ = 3.4 Å, mass = 39.948 amu.
    pub fn argon() -> Self {
        Self {
            lj: LjParams {
                epsilon: 0.0103,
                sigma: 3.4,
            },
            mass: ARGON_MASS_AMU,
            min_separation: DEFAULT_MIN_SEPARATION,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
