//! # Linear Cost Model
//!
//! Steady-state cost rate of one (n, r) configuration: fixed capital
//! and labor terms plus an expected downtime penalty.

use crate::types::CostRates;

/// Total steady-state cost rate of running n components with r
/// repairmen at the given long-run uptime fraction:
///
/// ```text
/// cost(n, r) = n·c_component + r·c_repairman + (1 − uptime)·c_downtime
/// ```
pub fn total_cost(rates: &CostRates, component_count: u32, repairman_count: u32, uptime_fraction: f64) -> f64 {
    f64::from(component_count) * rates.component
        + f64::from(repairman_count) * rates.repairman
        + (1.0 - uptime_fraction) * rates.downtime
}
