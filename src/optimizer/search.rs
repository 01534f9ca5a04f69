//! # Grid Search
//!
//! Exhaustive enumeration of (component count, repairman count) pairs
//! over a bounded grid, scoring each cell with the steady-state engine
//! and the linear cost model.
//!
//! Cells are independent, so they are evaluated in parallel with
//! rayon. The sequential semantics being preserved is strict-`<`
//! replacement in (increasing n, then increasing r) scan order, which
//! a lexicographic (cost, n, r) minimum reproduces regardless of which
//! worker finishes first.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::optimizer::cost_model::total_cost;
use crate::steady_state::SteadyStateSolution;
use crate::types::{ColdBoundary, CostRates, StandbyMode, SystemParameters};

/// Upper bounds of the search grid. The grid must be finite; the
/// defaults keep an interactive search well under a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBounds {
    /// Largest component count considered (N_MAX).
    pub n_max: u32,
    /// Largest repairman count considered (R_MAX).
    pub r_max: u32,
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self { n_max: 100, r_max: 25 }
    }
}

/// Everything the optimizer needs for one search: chain rates and
/// standby policy shared by every cell, the fixed quorum, the cost
/// coefficients, and the grid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizerInputs {
    pub failure_rate: f64,
    pub repair_rate: f64,
    pub standby: StandbyMode,
    #[serde(default)]
    pub cold_boundary: ColdBoundary,
    /// Minimum operational components k, fixed across the search.
    pub quorum: u32,
    pub costs: CostRates,
    #[serde(default)]
    pub bounds: SearchBounds,
}

/// The winning grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalConfiguration {
    pub component_count: u32,
    pub repairman_count: u32,
    pub total_cost: f64,
    /// Achieved long-run uptime of the winning configuration.
    pub uptime_fraction: f64,
}

/// Search the grid for the cheapest feasible configuration.
///
/// Cells whose chain is degenerate (no steady state) are skipped, not
/// scored as zero or infinite. Returns
/// [`Error::NoFeasibleConfiguration`] when the bounds admit no usable
/// cell at all, either because k exceeds `n_max` or because every cell
/// is degenerate.
pub fn find_optimal_configuration(inputs: &OptimizerInputs) -> Result<OptimalConfiguration> {
    inputs.costs.validate()?;

    // Validate the shared scalars once up front; after this the only
    // per-cell failure mode left is a degenerate chain.
    cell_parameters(inputs, inputs.quorum.max(1), 1).validate()?;

    if inputs.quorum > inputs.bounds.n_max {
        return Err(Error::NoFeasibleConfiguration);
    }

    let cells: Vec<(u32, u32)> = (inputs.quorum..=inputs.bounds.n_max)
        .flat_map(|n| (1..=inputs.bounds.r_max).map(move |r| (n, r)))
        .collect();

    let best = cells
        .par_iter()
        .filter_map(|&(n, r)| evaluate_cell(inputs, n, r))
        .min_by(|a, b| {
            a.total_cost
                .total_cmp(&b.total_cost)
                .then_with(|| a.component_count.cmp(&b.component_count))
                .then_with(|| a.repairman_count.cmp(&b.repairman_count))
        });

    match best {
        Some(config) => {
            debug!(
                n = config.component_count,
                r = config.repairman_count,
                cost = config.total_cost,
                uptime = config.uptime_fraction,
                cells = cells.len(),
                "grid search complete"
            );
            Ok(config)
        }
        None => Err(Error::NoFeasibleConfiguration),
    }
}

fn evaluate_cell(inputs: &OptimizerInputs, n: u32, r: u32) -> Option<OptimalConfiguration> {
    let params = cell_parameters(inputs, n, r);
    match SteadyStateSolution::solve(&params) {
        Ok(solution) => {
            let cost = total_cost(&inputs.costs, n, r, solution.uptime_fraction());
            Some(OptimalConfiguration {
                component_count: n,
                repairman_count: r,
                total_cost: cost,
                uptime_fraction: solution.uptime_fraction(),
            })
        }
        Err(err) => {
            trace!(n, r, %err, "skipping unusable grid cell");
            None
        }
    }
}

fn cell_parameters(inputs: &OptimizerInputs, n: u32, r: u32) -> SystemParameters {
    SystemParameters {
        failure_rate: inputs.failure_rate,
        repair_rate: inputs.repair_rate,
        component_count: n,
        quorum: inputs.quorum,
        repairman_count: r,
        standby: inputs.standby,
        cold_boundary: inputs.cold_boundary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(lambda: f64, mu: f64, k: u32, costs: CostRates, bounds: SearchBounds) -> OptimizerInputs {
        OptimizerInputs {
            failure_rate: lambda,
            repair_rate: mu,
            standby: StandbyMode::Warm,
            cold_boundary: ColdBoundary::default(),
            quorum: k,
            costs,
            bounds,
        }
    }

    /// Sequential strict-< reference over the same grid, the scan
    /// order the parallel reduction must reproduce.
    fn reference_search(inputs: &OptimizerInputs) -> Option<OptimalConfiguration> {
        let mut best: Option<OptimalConfiguration> = None;
        for n in inputs.quorum..=inputs.bounds.n_max {
            for r in 1..=inputs.bounds.r_max {
                let Some(candidate) = evaluate_cell(inputs, n, r) else {
                    continue;
                };
                if best.as_ref().map_or(true, |b| candidate.total_cost < b.total_cost) {
                    best = Some(candidate);
                }
            }
        }
        best
    }

    #[test]
    fn test_matches_sequential_reference() {
        let inp = inputs(
            0.2,
            0.9,
            3,
            CostRates { component: 3.0, repairman: 8.0, downtime: 200.0 },
            SearchBounds { n_max: 10, r_max: 4 },
        );
        let found = find_optimal_configuration(&inp).unwrap();
        let reference = reference_search(&inp).unwrap();
        assert_eq!(found.component_count, reference.component_count);
        assert_eq!(found.repairman_count, reference.repairman_count);
        assert!((found.total_cost - reference.total_cost).abs() < 1e-12);
    }

    #[test]
    fn test_zero_downtime_cost_picks_smallest_grid_cell() {
        // Without a downtime penalty every component and repairman is
        // pure cost, so the minimum is the first cell, (k, 1).
        let inp = inputs(
            0.3,
            0.5,
            2,
            CostRates { component: 1.0, repairman: 1.0, downtime: 0.0 },
            SearchBounds { n_max: 8, r_max: 3 },
        );
        let found = find_optimal_configuration(&inp).unwrap();
        assert_eq!(found.component_count, 2);
        assert_eq!(found.repairman_count, 1);
    }

    #[test]
    fn test_tie_break_prefers_first_scan_position() {
        // All-zero costs make every cell score 0.0; the strict-<
        // policy keeps the first candidate in (n, then r) order.
        let inp = inputs(
            0.1,
            1.0,
            2,
            CostRates { component: 0.0, repairman: 0.0, downtime: 0.0 },
            SearchBounds { n_max: 5, r_max: 3 },
        );
        let found = find_optimal_configuration(&inp).unwrap();
        assert_eq!(found.component_count, 2);
        assert_eq!(found.repairman_count, 1);
    }

    #[test]
    fn test_heavy_downtime_buys_redundancy() {
        let cheap_downtime = inputs(
            0.4,
            0.8,
            3,
            CostRates { component: 2.0, repairman: 2.0, downtime: 1.0 },
            SearchBounds { n_max: 12, r_max: 4 },
        );
        let dear_downtime = inputs(
            0.4,
            0.8,
            3,
            CostRates { component: 2.0, repairman: 2.0, downtime: 5000.0 },
            SearchBounds { n_max: 12, r_max: 4 },
        );
        let cheap = find_optimal_configuration(&cheap_downtime).unwrap();
        let dear = find_optimal_configuration(&dear_downtime).unwrap();
        assert!(dear.component_count > cheap.component_count);
        assert!(dear.uptime_fraction > cheap.uptime_fraction);
    }

    #[test]
    fn test_quorum_beyond_bounds_is_infeasible() {
        let inp = inputs(
            0.1,
            1.0,
            20,
            CostRates { component: 1.0, repairman: 1.0, downtime: 10.0 },
            SearchBounds { n_max: 10, r_max: 3 },
        );
        assert_eq!(
            find_optimal_configuration(&inp),
            Err(Error::NoFeasibleConfiguration)
        );
    }

    #[test]
    fn test_all_degenerate_cells_is_infeasible() {
        // μ = 0 with λ > 0 makes every cell's chain degenerate; the
        // cells are skipped rather than scored, leaving nothing.
        let inp = inputs(
            0.2,
            0.0,
            2,
            CostRates { component: 1.0, repairman: 1.0, downtime: 10.0 },
            SearchBounds { n_max: 6, r_max: 2 },
        );
        assert_eq!(
            find_optimal_configuration(&inp),
            Err(Error::NoFeasibleConfiguration)
        );
    }

    #[test]
    fn test_invalid_costs_rejected_before_search() {
        let inp = inputs(
            0.1,
            1.0,
            2,
            CostRates { component: -1.0, repairman: 1.0, downtime: 10.0 },
            SearchBounds::default(),
        );
        assert!(matches!(
            find_optimal_configuration(&inp),
            Err(Error::InvalidParameters { .. })
        ));
    }
}
