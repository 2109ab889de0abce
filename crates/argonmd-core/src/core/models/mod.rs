//! # Core Models Module
//!
//! This module contains the data structures used to represent the simulated
//! system and its recorded history.
//!
//! ## Key Components
//!
//! - [`system`] - The evolving particle state: index-aligned positions, velocities,
//!   and accelerations on a 1-D coordinate, plus the shared particle mass
//! - [`trajectory`] - The ordered sequence of position snapshots produced by the
//!   integrator, one row per completed step

pub mod system;
pub mod trajectory;
