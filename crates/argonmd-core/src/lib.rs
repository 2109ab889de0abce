//! # ArgonMD Core Library
//!
//! A minimal one-dimensional molecular dynamics engine for argon-like particles,
//! built as a teaching artifact for classical MD mechanics: pairwise potential
//! evaluation, force accumulation, and velocity-Verlet time integration.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains physical constants, pure mathematical
//!   representations of the forcefield (`potentials`, `params`), and the stateless
//!   data models (`ParticleSystem`, `Trajectory`).
//!
//! - **[`engine`]: The Logic Core.** This stateful layer drives the simulation.
//!   It includes the O(N²) force accumulator, velocity initialization from a target
//!   temperature, the velocity-Verlet integration loop, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute a complete simulation,
//!   turning initial positions and a configuration into a finished trajectory.

pub mod core;
pub mod engine;
pub mod workflows;
