//! # Engine Module
//!
//! This module implements the simulation engine for ArgonMD: the stateful layer
//! that advances a particle system through time.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Timestep, step count, temperature, and
//!   forcefield parameters with builder-based validation
//! - **Force Accumulation** ([`forces`]) - O(N²) pairwise evaluation producing
//!   net accelerations
//! - **Time Integration** ([`integrator`]) - Velocity initialization and the
//!   velocity-Verlet loop
//! - **Progress Monitoring** ([`progress`]) - Step-granular progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod progress;
