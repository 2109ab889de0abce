pub const BOLTZMANN: f64 = 1.380649e-23; // In J/K
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19; // In C
pub const VACUUM_PERMITTIVITY: f64 = 8.8541878128e-12; // In F/m

// Rounded conversion factor used throughout the energy formulas; kept at this
// precision so results match the reference argon parameterization.
pub const EV_TO_JOULE: f64 = 1.602e-19;

pub const ANGSTROM_TO_METER: f64 = 1e-10;

pub const ARGON_MASS_AMU: f64 = 39.948;
