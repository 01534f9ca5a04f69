//! # Core Types
//!
//! Parameter types for the repairable k-out-of-n maintenance system.
//!
//! All types here are plain immutable value types: the engine and the
//! optimizer receive a fresh parameter struct on every invocation and
//! keep no state between calls.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// STANDBY POLICY
// ============================================================================

/// Whether idle components are exposed to failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandbyMode {
    /// Every non-failed component can fail, whether in active service
    /// or idling as a spare.
    Warm,
    /// Only the k components in active service can fail; spares are
    /// powered off and immune.
    Cold,
}

/// Where Cold-standby failure pressure stops.
///
/// Source material disagrees on the boundary condition (`i ≤ n − k`
/// versus `i ≤ k − 1`), so the cutoff is an explicit policy rather
/// than a hard-coded index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColdBoundary {
    /// Failures drive the chain while `i ≤ n − k`, i.e. until the
    /// system goes down; past the down boundary no further failure
    /// transitions occur. This is the default policy.
    SystemDown,
    /// Failures drive the chain while `i ≤ k − 1`.
    Quorum,
}

impl ColdBoundary {
    /// Largest failed-component count at which Cold failure pressure
    /// still applies.
    pub const fn cutoff(&self, n: u32, k: u32) -> u32 {
        match self {
            Self::SystemDown => n - k,
            Self::Quorum => k - 1,
        }
    }
}

impl Default for ColdBoundary {
    fn default() -> Self {
        Self::SystemDown
    }
}

// ============================================================================
// SYSTEM PARAMETERS
// ============================================================================

/// Immutable parameter set for one steady-state evaluation.
///
/// State i of the derived chain counts currently-failed components, so
/// the system is up whenever `i ≤ n − k` (at least k operational).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemParameters {
    /// Per-component failure rate λ (failures per unit time), ≥ 0.
    pub failure_rate: f64,
    /// Per-repairman repair rate μ (repairs per unit time), ≥ 0.
    pub repair_rate: f64,
    /// Total number of components n, ≥ 1.
    pub component_count: u32,
    /// Minimum operational components k, 1 ≤ k ≤ n.
    pub quorum: u32,
    /// Number of repairmen r, ≥ 1. At most r repairs run in parallel.
    pub repairman_count: u32,
    /// Failure exposure of idle components.
    pub standby: StandbyMode,
    /// Cold-standby boundary policy; ignored under Warm standby.
    #[serde(default)]
    pub cold_boundary: ColdBoundary,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            failure_rate: 0.1,
            repair_rate: 1.0,
            component_count: 5,
            quorum: 3,
            repairman_count: 1,
            standby: StandbyMode::Warm,
            cold_boundary: ColdBoundary::default(),
        }
    }
}

impl SystemParameters {
    /// Check the parameter invariants without computing anything.
    ///
    /// A presentation layer calls this first so it can surface an
    /// infeasibility warning (n < k) instead of ever invoking the
    /// engine on a broken configuration.
    pub fn validate(&self) -> Result<()> {
        if self.component_count < 1 {
            return Err(Error::invalid(format!(
                "component count n={} must be at least 1",
                self.component_count
            )));
        }
        if self.quorum < 1 {
            return Err(Error::invalid(format!(
                "quorum k={} must be at least 1",
                self.quorum
            )));
        }
        if self.quorum > self.component_count {
            return Err(Error::invalid(format!(
                "quorum k={} exceeds component count n={}",
                self.quorum, self.component_count
            )));
        }
        if self.repairman_count < 1 {
            return Err(Error::invalid(format!(
                "repairman count r={} must be at least 1",
                self.repairman_count
            )));
        }
        if !(self.failure_rate.is_finite() && self.failure_rate >= 0.0) {
            return Err(Error::invalid(format!(
                "failure rate λ={} must be finite and non-negative",
                self.failure_rate
            )));
        }
        if !(self.repair_rate.is_finite() && self.repair_rate >= 0.0) {
            return Err(Error::invalid(format!(
                "repair rate μ={} must be finite and non-negative",
                self.repair_rate
            )));
        }
        Ok(())
    }

    /// Maximum failed components the system tolerates while staying up.
    pub const fn max_tolerated_failures(&self) -> u32 {
        self.component_count - self.quorum
    }
}

// ============================================================================
// COST MODEL PARAMETERS
// ============================================================================

/// Linear steady-state cost coefficients for the optimizer.
///
/// Total cost rate of a configuration (n, r) is
/// `n·component + r·repairman + (1 − uptime)·downtime`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRates {
    /// Capital/operational cost per installed component.
    pub component: f64,
    /// Cost per employed repairman.
    pub repairman: f64,
    /// Penalty rate while the system is down.
    pub downtime: f64,
}

impl CostRates {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("component", self.component),
            ("repairman", self.repairman),
            ("downtime", self.downtime),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::invalid(format!(
                    "{name} cost {value} must be finite and non-negative"
                )));
            }
        }
        Ok(())
    }
}
