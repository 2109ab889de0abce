use crate::core::forcefield::params::LjParams;
use crate::core::forcefield::potentials;
use nalgebra::DVector;

/// The evolving state of an N-particle system on a single 1-D coordinate.
///
/// Positions, velocities, and accelerations are index-aligned: element `i` of
/// each vector belongs to particle `i`. All particles share one mass.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSystem {
    /// Positions (Å).
    pub positions: DVector<f64>,
    /// Velocities (eV·s/Å·amu).
    pub velocities: DVector<f64>,
    /// Accelerations (eV/Å·amu).
    pub accelerations: DVector<f64>,
    /// Shared particle mass (amu).
    pub mass: f64,
}

impl ParticleSystem {
    /// Create a system at rest from initial positions.
    pub fn new(positions: DVector<f64>, mass: f64) -> Self {
        let n = positions.len();
        Self {
            positions,
            velocities: DVector::zeros(n),
            accelerations: DVector::zeros(n),
            mass,
        }
    }

    /// Create a system with explicit initial velocities.
    pub fn with_velocities(positions: DVector<f64>, velocities: DVector<f64>, mass: f64) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());
        let n = positions.len();
        Self {
            positions,
            velocities,
            accelerations: DVector::zeros(n),
            mass,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total kinetic energy: ½ m Σ v².
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocities.norm_squared()
    }

    /// Total Lennard-Jones potential energy over all unique pairs (eV).
    pub fn potential_energy(&self, lj: &LjParams) -> f64 {
        let n = self.len();
        let mut energy = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let rmag = (self.positions[j] - self.positions[i]).abs();
                energy += potentials::lj_energy(rmag, lj.epsilon, lj.sigma);
            }
        }
        energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::params::ForcefieldParams;
    use approx::assert_relative_eq;

    #[test]
    fn new_creates_system_at_rest() {
        let system = ParticleSystem::new(DVector::from_vec(vec![0.0, 5.0, 10.0]), 39.948);
        assert_eq!(system.len(), 3);
        assert!(system.velocities.iter().all(|&v| v == 0.0));
        assert!(system.accelerations.iter().all(|&a| a == 0.0));
    }

    #[test]
    fn kinetic_energy_of_resting_system_is_zero() {
        let system = ParticleSystem::new(DVector::from_vec(vec![0.0, 5.0]), 39.948);
        assert_eq!(system.kinetic_energy(), 0.0);
    }

    #[test]
    fn kinetic_energy_matches_half_m_v_squared() {
        let system = ParticleSystem::with_velocities(
            DVector::from_vec(vec![0.0]),
            DVector::from_vec(vec![1.0]),
            2.0,
        );
        assert_relative_eq!(system.kinetic_energy(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn potential_energy_vanishes_for_pair_at_sigma_separation() {
        let params = ForcefieldParams::argon();
        let system = ParticleSystem::new(DVector::from_vec(vec![0.0, 3.4]), params.mass);
        assert_eq!(system.potential_energy(&params.lj), 0.0);
    }

    #[test]
    fn potential_energy_at_well_minimum_is_minus_epsilon() {
        let params = ForcefieldParams::argon();
        let r_min = 2.0_f64.powf(1.0 / 6.0) * params.lj.sigma;
        let system = ParticleSystem::new(DVector::from_vec(vec![0.0, r_min]), params.mass);
        assert_relative_eq!(
            system.potential_energy(&params.lj),
            -params.lj.epsilon,
            epsilon = 1e-12
        );
    }

    #[test]
    fn potential_energy_sums_all_unique_pairs() {
        let params = ForcefieldParams::argon();
        let system = ParticleSystem::new(DVector::from_vec(vec![0.0, 4.0, 8.0]), params.mass);
        let pair = |r: f64| potentials::lj_energy(r, params.lj.epsilon, params.lj.sigma);
        let expected = pair(4.0) + pair(8.0) + pair(4.0);
        assert_relative_eq!(system.potential_energy(&params.lj), expected, epsilon = 1e-15);
    }
}
