//! # Workflows Module
//!
//! This module provides the high-level entry points for users of ArgonMD.
//! Workflows tie the `core` and `engine` layers together, turning caller-supplied
//! initial positions and a validated configuration into a finished trajectory.
//!
//! ## Key Components
//!
//! - **Simulation Workflow** ([`simulate`]) - Complete MD run: velocity
//!   initialization from the target temperature, force accumulation, and
//!   velocity-Verlet integration.

pub mod simulate;
