//! # Birth–Death Chain Construction
//!
//! Derives the finite birth–death chain for a k-out-of-n maintenance
//! system. State i counts currently-failed components, so the chain
//! lives on 0..=n with forward (failure) transitions and backward
//! (repair) transitions only between adjacent states.
//!
//! ## Transition Rates
//!
//! ```text
//! birth[i] = (n − i)·λ                    Warm standby
//!          = k·λ  while i ≤ cutoff, else 0   Cold standby
//! death[i] = min(i, r)·μ                  i = 1..=n
//! ```
//!
//! The rate sequences are exposed read-only so a diagram renderer can
//! label its edges without recomputing the chain.
//!
//! ## References
//!
//! [1] Tijms, H.C. "A First Course in Stochastic Models", Wiley, 2003
//! [2] Taylor & Karlin, "An Introduction to Stochastic Modeling"

use crate::error::Result;
use crate::types::{StandbyMode, SystemParameters};

/// The derived birth–death chain of one parameter set.
///
/// `birth_rates[i]` is the failure rate out of state i into i+1, for
/// i in 0..n. `death_rates[i-1]` is the repair rate out of state i
/// into i−1, for i in 1..=n (the same off-by-one layout a diagram
/// walks: one forward edge and one backward edge per adjacent pair).
#[derive(Debug, Clone, PartialEq)]
pub struct BirthDeathChain {
    params: SystemParameters,
    birth_rates: Vec<f64>,
    death_rates: Vec<f64>,
}

impl BirthDeathChain {
    /// Build the chain for a validated parameter set.
    pub fn build(params: &SystemParameters) -> Result<Self> {
        params.validate()?;

        let n = params.component_count;
        let birth_rates = (0..n)
            .map(|i| f64::from(Self::failure_multiplicity_for(params, i)) * params.failure_rate)
            .collect();
        let death_rates = (1..=n)
            .map(|i| f64::from(i.min(params.repairman_count)) * params.repair_rate)
            .collect();

        Ok(Self { params: *params, birth_rates, death_rates })
    }

    /// Number of chain states, n + 1.
    pub fn state_count(&self) -> usize {
        self.birth_rates.len() + 1
    }

    /// Failure rates out of states 0..n.
    pub fn birth_rates(&self) -> &[f64] {
        &self.birth_rates
    }

    /// Repair rates out of states 1..=n; index i−1 holds state i.
    pub fn death_rates(&self) -> &[f64] {
        &self.death_rates
    }

    /// The parameter set this chain was built from.
    pub fn params(&self) -> &SystemParameters {
        &self.params
    }

    /// How many components are simultaneously exposed to failure in
    /// state i. This is the integer a diagram prints on the forward
    /// edge out of state i ("3 failures").
    pub fn failure_multiplicity(&self, state: u32) -> u32 {
        Self::failure_multiplicity_for(&self.params, state)
    }

    /// How many repairs run in parallel in state i, `min(i, r)`. The
    /// integer on the backward edge out of state i ("2 repairs").
    pub fn repair_multiplicity(&self, state: u32) -> u32 {
        state.min(self.params.repairman_count)
    }

    fn failure_multiplicity_for(params: &SystemParameters, state: u32) -> u32 {
        debug_assert!(state < params.component_count);
        match params.standby {
            StandbyMode::Warm => params.component_count - state,
            StandbyMode::Cold => {
                let cutoff = params
                    .cold_boundary
                    .cutoff(params.component_count, params.quorum);
                if state <= cutoff {
                    params.quorum
                } else {
                    0
                }
            }
        }
    }
}
