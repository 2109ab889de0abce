//! # Core Module
//!
//! This module provides the fundamental building blocks for molecular dynamics
//! simulation in ArgonMD, serving as the stateless computational core of the library.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different aspects
//! of the physical model:
//!
//! - **Physical Constants** ([`constants`]) - Named constants sourced from standard tables
//! - **Energy and Force Calculations** ([`forcefield`]) - Pairwise potentials and parameter sets
//! - **State Representation** ([`models`]) - Particle systems and recorded trajectories

pub mod constants;
pub mod forcefield;
pub mod models;
