//! # MAINTSIM-RS
//!
//! Repairable k-out-of-n Maintenance System Analyzer
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         MAINTSIM-RS                               │
//! │          k-out-of-n Maintenance Analysis in Rust                  │
//! ├───────────────────────────────────────────────────────────────────┤
//! │  LEVEL 1: CHAIN        (birth–death transition rates)             │
//! │  LEVEL 2: STEADY STATE (product-form stationary distribution)     │
//! │  LEVEL 3: OPTIMIZER    (cost-minimizing grid search)              │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A system of n identical components is up while at least k of them
//! are operational; failed components queue for r repairmen. Failures
//! and repairs are exponential, so the failed-component count is a
//! finite birth–death Markov chain whose stationary distribution gives
//! the long-run uptime fraction in closed form. On top of that engine
//! sits a brute-force optimizer that searches the (n, r) grid for the
//! cheapest configuration under a linear cost model.
//!
//! Everything is a pure synchronous computation: no I/O, no shared
//! state. The presentation layer that collects parameters and renders
//! the chain diagram is an external caller of this crate.
//!
//! ## Example
//!
//! ```
//! use maintsim_rs::{SteadyStateSolution, SystemParameters};
//!
//! let solution = SteadyStateSolution::solve(&SystemParameters::default()).unwrap();
//! assert!(solution.uptime_fraction() > 0.95);
//! ```

pub mod chain;
pub mod error;
pub mod optimizer;
pub mod steady_state;
pub mod types;

// Re-exports
pub use chain::BirthDeathChain;
pub use error::{Error, Result};
pub use optimizer::{
    find_optimal_configuration, total_cost, OptimalConfiguration, OptimizerInputs, SearchBounds,
};
pub use steady_state::SteadyStateSolution;
pub use types::{ColdBoundary, CostRates, StandbyMode, SystemParameters};

/// MAINTSIM version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Information about the analyzer
pub fn info() -> String {
    format!(
        "MAINTSIM-RS v{}\n\
         Repairable k-out-of-n Maintenance System Analyzer\n\
         Birth–Death Markov Steady-State Engine + Cost Optimizer",
        VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info() {
        let info = info();
        assert!(info.contains("MAINTSIM-RS"));
        assert!(info.contains(VERSION));
    }

    #[test]
    fn test_engine_to_optimizer_flow() {
        // The data flow of a full invocation: parameters → engine →
        // (uptime, distribution) → optimizer → best configuration.
        let params = SystemParameters::default();
        let solution = SteadyStateSolution::solve(&params).unwrap();
        assert_eq!(solution.distribution().len(), 6);

        let best = find_optimal_configuration(&OptimizerInputs {
            failure_rate: params.failure_rate,
            repair_rate: params.repair_rate,
            standby: params.standby,
            cold_boundary: params.cold_boundary,
            quorum: params.quorum,
            costs: CostRates { component: 1.0, repairman: 3.0, downtime: 100.0 },
            bounds: SearchBounds { n_max: 20, r_max: 5 },
        })
        .unwrap();

        assert!(best.component_count >= params.quorum);
        assert!(best.repairman_count >= 1);
        assert!(best.total_cost.is_finite());
    }
}
