//! # Force Field Module
//!
//! This module provides the energy and force calculations for the ArgonMD toy model.
//! It implements the pairwise potentials and the parameter structures that describe
//! a simulated species.
//!
//! ## Overview
//!
//! The force field module computes interaction energies and forces between particles
//! using classical molecular mechanics potentials. It supports:
//!
//! - **Van der Waals interactions** using the Lennard-Jones 12-6 potential, split
//!   into its attractive and repulsive components
//! - **Electrostatic interactions** with Coulomb's law, converted to electron-volts
//! - **Bonded interactions** using a harmonic bond potential
//! - **Truncated forces** via a fixed-radius cutoff variant of the Lennard-Jones force
//!
//! ## Key Components
//!
//! - [`potentials`] - Stateless energy and force functions of inter-particle distance
//! - [`params`] - Force field parameter structures and TOML loading

pub mod params;
pub mod potentials;
