use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "Particles {i} and {j} are coincident (separation below the minimum); \
         forces are undefined at zero distance"
    )]
    CoincidentParticles { i: usize, j: usize },

    #[error("Cannot simulate an empty particle system")]
    EmptySystem,

    #[error("Invalid simulation configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
