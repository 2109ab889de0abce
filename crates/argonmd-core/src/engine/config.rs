use crate::core::forcefield::params::ForcefieldParams;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Timestep length (in the toy model's reduced time units).
    pub timestep: f64,
    /// Number of velocity-Verlet iterations to run.
    pub steps: usize,
    /// Temperature seeding the initial velocities (K).
    pub temperature: f64,
    #[serde(default = "ForcefieldParams::argon")]
    pub forcefield: ForcefieldParams,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timestep <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "timestep",
                value: self.timestep,
            });
        }
        if self.temperature < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "temperature",
                value: self.temperature,
            });
        }
        if self.forcefield.mass <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "forcefield.mass",
                value: self.forcefield.mass,
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    timestep: Option<f64>,
    steps: Option<usize>,
    temperature: Option<f64>,
    forcefield: Option<ForcefieldParams>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timestep(mut self, dt: f64) -> Self {
        self.timestep = Some(dt);
        self
    }
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
    pub fn forcefield(mut self, params: ForcefieldParams) -> Self {
        self.forcefield = Some(params);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            timestep: self
                .timestep
                .ok_or(ConfigError::MissingParameter("timestep"))?,
            steps: self.steps.ok_or(ConfigError::MissingParameter("steps"))?,
            temperature: self
                .temperature
                .ok_or(ConfigError::MissingParameter("temperature"))?,
            forcefield: self.forcefield.unwrap_or_else(ForcefieldParams::argon),
        };
        config.validate()?;
        Ok(config)
    }
}
