//! # Configuration Optimizer
//!
//! Brute-force search for the cost-minimizing (component count,
//! repairman count) configuration of a k-out-of-n maintenance system.
//!
//! ## Layers
//!
//! ```text
//! LAYER 2: Grid Search    (bounded n × r enumeration, rayon-parallel)
//! LAYER 1: Cost Model     (linear component/repairman/downtime rates)
//! LAYER 0: Steady State   (stationary distribution engine, reused per cell)
//! ```
//!
//! The grid is small by construction, so exhaustive enumeration is the
//! whole algorithm; the only subtlety is the deterministic tie-break
//! (first candidate in increasing n, then increasing r, wins) which
//! the parallel reduction preserves.

pub mod cost_model;
pub mod search;

pub use cost_model::total_cost;
pub use search::{find_optimal_configuration, OptimalConfiguration, OptimizerInputs, SearchBounds};
