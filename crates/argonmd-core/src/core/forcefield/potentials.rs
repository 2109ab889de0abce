use crate::core::constants::{
    ANGSTROM_TO_METER, ELEMENTARY_CHARGE, EV_TO_JOULE, VACUUM_PERMITTIVITY,
};
use std::f64::consts::PI;

pub const CUTOFF_DISTANCE: f64 = 15.0; // In Å

#[inline]
pub fn attractive_energy(r: f64, epsilon: f64, sigma: f64) -> f64 {
    if r == 0.0 {
        return 0.0;
    }
    -4.0 * epsilon * (sigma / r).powi(6)
}

#[inline]
pub fn repulsive_energy(r: f64, epsilon: f64, sigma: f64) -> f64 {
    if r == 0.0 {
        return 0.0;
    }
    4.0 * epsilon * (sigma / r).powi(12)
}

#[inline]
pub fn lj_energy(r: f64, epsilon: f64, sigma: f64) -> f64 {
    if r == 0.0 {
        return 0.0;
    }
    repulsive_energy(r, epsilon, sigma) + attractive_energy(r, epsilon, sigma)
}

#[inline]
pub fn coulomb_energy(qi: f64, qj: f64, r: f64) -> f64 {
    if r == 0.0 {
        return 0.0;
    }
    let energy_joules = (qi * qj * ELEMENTARY_CHARGE.powi(2))
        / (4.0 * PI * VACUUM_PERMITTIVITY * r * ANGSTROM_TO_METER);
    energy_joules / EV_TO_JOULE
}

#[inline]
pub fn harmonic_bond_energy(kb: f64, b0: f64, b: f64) -> f64 {
    kb / 2.0 * (b - b0).powi(2)
}

#[inline]
pub fn lj_force(r: f64, epsilon: f64, sigma: f64) -> f64 {
    if r == 0.0 {
        return 0.0;
    }
    48.0 * epsilon * sigma.powi(12) / r.powi(13) - 24.0 * epsilon * sigma.powi(6) / r.powi(7)
}

// Truncated variant. The (sigma/r)^13 form and the hard zero beyond the cutoff
// (a force discontinuity at the boundary) are kept as-is from the reference
// parameterization.
#[inline]
pub fn lj_force_cutoff(r: f64, epsilon: f64, sigma: f64) -> f64 {
    if r < CUTOFF_DISTANCE {
        48.0 * epsilon * (sigma / r).powi(13) - 24.0 * epsilon * (sigma / r).powi(7)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 0.0103; // Argon well depth (eV)
    const SIGMA: f64 = 3.4; // Argon zero-crossing distance (Å)

    #[test]
    fn lj_energy_is_sum_of_attractive_and_repulsive_components() {
        for r in [1.0, 3.0, 3.4, 5.0, 12.0] {
            let sum = attractive_energy(r, EPSILON, SIGMA) + repulsive_energy(r, EPSILON, SIGMA);
            assert_relative_eq!(lj_energy(r, EPSILON, SIGMA), sum, epsilon = 1e-15);
        }
    }

    #[test]
    fn guarded_functions_return_zero_at_zero_distance() {
        assert_eq!(attractive_energy(0.0, EPSILON, SIGMA), 0.0);
        assert_eq!(repulsive_energy(0.0, EPSILON, SIGMA), 0.0);
        assert_eq!(lj_energy(0.0, EPSILON, SIGMA), 0.0);
        assert_eq!(lj_force(0.0, EPSILON, SIGMA), 0.0);
        assert_eq!(coulomb_energy(1.0, -1.0, 0.0), 0.0);
    }

    #[test]
    fn attractive_energy_at_sigma_equals_minus_four_epsilon() {
        let energy = attractive_energy(3.4, EPSILON, SIGMA);
        assert_relative_eq!(energy, -0.0412, epsilon = 1e-12);
    }

    #[test]
    fn repulsive_energy_at_sigma_equals_four_epsilon() {
        let energy = repulsive_energy(3.4, EPSILON, SIGMA);
        assert_relative_eq!(energy, 0.0412, epsilon = 1e-12);
    }

    #[test]
    fn lj_energy_vanishes_at_sigma() {
        assert_eq!(lj_energy(3.4, EPSILON, SIGMA), 0.0);
    }

    #[test]
    fn lj_energy_minimum_is_minus_epsilon_at_well_distance() {
        let r_min = 2.0_f64.powf(1.0 / 6.0) * SIGMA;
        assert_relative_eq!(lj_energy(r_min, EPSILON, SIGMA), -EPSILON, epsilon = 1e-12);
    }

    #[test]
    fn lj_force_vanishes_at_well_minimum_distance() {
        let r_min = 2.0_f64.powf(1.0 / 6.0) * SIGMA;
        assert!(lj_force(r_min, EPSILON, SIGMA).abs() < 1e-12);
    }

    #[test]
    fn lj_force_is_repulsive_inside_and_attractive_outside_the_well() {
        let r_min = 2.0_f64.powf(1.0 / 6.0) * SIGMA;
        assert!(lj_force(0.9 * r_min, EPSILON, SIGMA) > 0.0);
        assert!(lj_force(1.5 * r_min, EPSILON, SIGMA) < 0.0);
    }

    #[test]
    fn lj_force_cutoff_is_zero_at_and_beyond_the_cutoff() {
        assert_eq!(lj_force_cutoff(CUTOFF_DISTANCE, EPSILON, SIGMA), 0.0);
        assert_eq!(lj_force_cutoff(20.0, EPSILON, SIGMA), 0.0);
        assert_eq!(lj_force_cutoff(1e6, EPSILON, SIGMA), 0.0);
    }

    #[test]
    fn lj_force_cutoff_is_nonzero_just_inside_the_cutoff() {
        assert!(lj_force_cutoff(14.9, EPSILON, SIGMA) != 0.0);
    }

    #[test]
    fn coulomb_energy_of_unit_charges_at_one_angstrom_is_about_fourteen_ev() {
        let energy = coulomb_energy(1.0, 1.0, 1.0);
        assert_relative_eq!(energy, 14.40, epsilon = 1e-2);
    }

    #[test]
    fn coulomb_energy_is_negative_for_opposite_charges() {
        assert!(coulomb_energy(1.0, -1.0, 2.0) < 0.0);
    }

    #[test]
    fn coulomb_energy_falls_off_as_inverse_distance() {
        let e1 = coulomb_energy(1.0, 1.0, 1.0);
        let e2 = coulomb_energy(1.0, 1.0, 2.0);
        assert_relative_eq!(e1 / e2, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn harmonic_bond_energy_is_zero_at_equilibrium_length() {
        assert_eq!(harmonic_bond_energy(100.0, 1.5, 1.5), 0.0);
    }

    #[test]
    fn harmonic_bond_energy_matches_half_k_dr_squared() {
        // dr = 0.5, so kb/2 * dr² = 100/2 * 0.25 = 12.5
        assert_relative_eq!(harmonic_bond_energy(100.0, 1.5, 2.0), 12.5, epsilon = 1e-12);
    }

    #[test]
    fn negative_distance_yields_signed_real_values() {
        assert!(lj_energy(-3.4, EPSILON, SIGMA).is_finite());
        assert!(lj_force(-3.4, EPSILON, SIGMA).is_finite());
    }
}
