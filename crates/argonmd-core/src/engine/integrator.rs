use crate::core::constants::{BOLTZMANN, EV_TO_JOULE};
use crate::core::forcefield::params::ForcefieldParams;
use crate::core::models::system::ParticleSystem;
use crate::core::models::trajectory::Trajectory;
use crate::engine::error::EngineError;
use crate::engine::forces;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::DVector;
use rand::Rng;
use tracing::{debug, instrument};

/// Initial velocities for `n` particles drawn from a uniform distribution
/// centered at zero and scaled to the target temperature (K).
pub fn initialize_velocities(
    temperature: f64,
    n: usize,
    mass: f64,
    rng: &mut impl Rng,
) -> DVector<f64> {
    let scale = (BOLTZMANN * temperature / (mass * EV_TO_JOULE)).sqrt();
    DVector::from_fn(n, |_, _| rng.gen_range(-0.5..0.5) * scale)
}

/// Position update: x + v·dt + ½a·dt².
pub(crate) fn update_positions(
    x: &DVector<f64>,
    v: &DVector<f64>,
    a: &DVector<f64>,
    dt: f64,
) -> DVector<f64> {
    x + v * dt + a * (0.5 * dt * dt)
}

/// Velocity update: v + ½(a + a1)·dt, averaging the accelerations before and
/// after the position update.
pub(crate) fn update_velocities(
    v: &DVector<f64>,
    a: &DVector<f64>,
    a1: &DVector<f64>,
    dt: f64,
) -> DVector<f64> {
    v + (a + a1) * (0.5 * dt)
}

/// Advance the system through exactly `number_of_steps` velocity-Verlet
/// iterations, recording the post-step positions after each one.
///
/// There is no convergence check and no early termination: numeric
/// instability from too large a timestep propagates silently into the
/// returned trajectory. Only coincident particles abort the run.
#[instrument(skip_all, fields(particles = system.len(), steps = number_of_steps, dt = dt))]
pub fn run(
    system: &mut ParticleSystem,
    params: &ForcefieldParams,
    dt: f64,
    number_of_steps: usize,
    reporter: &ProgressReporter,
) -> Result<Trajectory, EngineError> {
    if system.is_empty() {
        return Err(EngineError::EmptySystem);
    }

    system.accelerations = forces::accelerations(&system.positions, params)?;
    reporter.report(Progress::SimulationStart {
        total_steps: number_of_steps as u64,
    });

    let mut trajectory = Trajectory::with_capacity(number_of_steps);
    for step in 0..number_of_steps {
        let new_positions = update_positions(
            &system.positions,
            &system.velocities,
            &system.accelerations,
            dt,
        );
        let new_accelerations = forces::accelerations(&new_positions, params)?;
        system.velocities = update_velocities(
            &system.velocities,
            &system.accelerations,
            &new_accelerations,
            dt,
        );
        system.positions = new_positions;
        system.accelerations = new_accelerations;

        trajectory.push(system.positions.clone());
        reporter.report(Progress::StepComplete { step });
    }

    reporter.report(Progress::SimulationFinish);
    debug!(recorded_steps = trajectory.len(), "Integration loop finished.");
    Ok(trajectory)
}
