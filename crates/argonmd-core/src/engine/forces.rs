use crate::core::forcefield::params::ForcefieldParams;
use crate::core::forcefield::potentials;
use crate::engine::error::EngineError;
use nalgebra::DVector;

/// Net acceleration on every particle from all pairwise Lennard-Jones
/// interactions (eV/Å·amu).
///
/// Each unordered pair (i, j) with i < j is evaluated exactly once; the signed
/// directional force is accumulated into both particles with opposite sign
/// (Newton's third law). Pairs separated by less than
/// `params.min_separation` are rejected rather than dividing by a near-zero
/// distance.
pub fn accelerations(
    positions: &DVector<f64>,
    params: &ForcefieldParams,
) -> Result<DVector<f64>, EngineError> {
    let n = positions.len();
    let mut accel = DVector::zeros(n);

    for i in 0..n {
        for j in (i + 1)..n {
            let r_x = positions[j] - positions[i];
            let rmag = r_x.abs();
            if rmag < params.min_separation {
                return Err(EngineError::CoincidentParticles { i, j });
            }

            let force_scalar = potentials::lj_force(rmag, params.lj.epsilon, params.lj.sigma);
            let force_x = force_scalar * r_x / rmag;

            accel[j] += force_x / params.mass;
            accel[i] -= force_x / params.mass;
        }
    }

    Ok(accel)
}
