use crate::core::models::system::ParticleSystem;
use crate::core::models::trajectory::Trajectory;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::integrator;
use crate::engine::progress::ProgressReporter;
use nalgebra::DVector;
use rand::{Rng, thread_rng};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub trajectory: Trajectory,
    pub final_system: ParticleSystem,
}

/// Run a complete MD simulation from caller-supplied initial positions.
///
/// Velocities are seeded from the thread-local RNG; use [`run_with_rng`] when
/// a reproducible run is needed.
#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(
    initial_positions: &[f64],
    config: &SimulationConfig,
    reporter: &ProgressReporter,
) -> Result<SimulationResult, EngineError> {
    run_with_rng(initial_positions, config, reporter, &mut thread_rng())
}

pub fn run_with_rng(
    initial_positions: &[f64],
    config: &SimulationConfig,
    reporter: &ProgressReporter,
    rng: &mut impl Rng,
) -> Result<SimulationResult, EngineError> {
    config.validate()?;
    if initial_positions.is_empty() {
        return Err(EngineError::EmptySystem);
    }

    info!(
        particles = initial_positions.len(),
        steps = config.steps,
        temperature = config.temperature,
        "Starting MD simulation."
    );

    let velocities = integrator::initialize_velocities(
        config.temperature,
        initial_positions.len(),
        config.forcefield.mass,
        rng,
    );
    let mut system = ParticleSystem::with_velocities(
        DVector::from_column_slice(initial_positions),
        velocities,
        config.forcefield.mass,
    );

    let trajectory = integrator::run(
        &mut system,
        &config.forcefield,
        config.timestep,
        config.steps,
        reporter,
    )?;

    info!(
        recorded_steps = trajectory.len(),
        "Simulation complete. Returning trajectory."
    );
    Ok(SimulationResult {
        trajectory,
        final_system: system,
    })
}
