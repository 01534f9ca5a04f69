//! # Stationary Distribution Engine
//!
//! Product-form steady-state solution of the maintenance chain.
//!
//! ## Method
//!
//! A finite birth–death chain satisfies detailed balance, so the
//! stationary distribution has the closed product form
//!
//! ```text
//! w[0] = 1
//! w[i] = w[i−1] · birth[i−1] / death[i]      i = 1..=n
//! π[i] = w[i] / Σ w[j]
//! ```
//!
//! and the long-run operational fraction is the stationary mass of the
//! up states, `Σ π[i]` for `i ≤ n − k`.
//!
//! A zero death rate makes the corresponding ratio contribute 0, which
//! collapses that weight and everything multiplicatively derived from
//! it. A state that cannot be left by repair but can still be entered
//! is a different matter: the true detailed-balance weight diverges,
//! so the distribution is undefined and the solve reports
//! [`Error::DegenerateChain`] instead of a finite-looking value.
//!
//! The solve is pure and allocation-local; concurrent calls with
//! different parameters never share state.

use crate::chain::BirthDeathChain;
use crate::error::{Error, Result};
use crate::types::SystemParameters;

/// Stationary distribution and derived uptime of one parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct SteadyStateSolution {
    pi: Vec<f64>,
    uptime_fraction: f64,
}

impl SteadyStateSolution {
    /// Solve the chain derived from `params`.
    pub fn solve(params: &SystemParameters) -> Result<Self> {
        let chain = BirthDeathChain::build(params)?;
        Self::solve_chain(&chain)
    }

    /// Solve an already-built chain (spares a rebuild when the caller
    /// also renders the rate sequences).
    pub fn solve_chain(chain: &BirthDeathChain) -> Result<Self> {
        let births = chain.birth_rates();
        let deaths = chain.death_rates();
        let n = births.len();

        // A state with positive inflow and no repair transition out
        // traps probability mass; its detailed-balance weight is
        // infinite and normalization is meaningless.
        for i in 0..n {
            if births[i] > 0.0 && deaths[i] == 0.0 {
                return Err(Error::DegenerateChain { denominator: f64::INFINITY });
            }
        }

        let mut weights = Vec::with_capacity(n + 1);
        weights.push(1.0_f64);
        for i in 0..n {
            let ratio = if deaths[i] > 0.0 { births[i] / deaths[i] } else { 0.0 };
            let prev = weights[i];
            weights.push(prev * ratio);
        }

        // Single summation over the full sequence; the same weights
        // normalize π and feed the uptime sum so the two stay
        // internally consistent.
        let denominator: f64 = weights.iter().sum();
        if !denominator.is_finite() || denominator <= 0.0 {
            return Err(Error::DegenerateChain { denominator });
        }

        let pi: Vec<f64> = weights.iter().map(|w| w / denominator).collect();

        let up_states = chain.params().max_tolerated_failures() as usize;
        let uptime_fraction: f64 = pi[..=up_states].iter().sum::<f64>().clamp(0.0, 1.0);

        Ok(Self { pi, uptime_fraction })
    }

    /// Long-run fraction of time at least k components are operational.
    pub fn uptime_fraction(&self) -> f64 {
        self.uptime_fraction
    }

    /// Long-run fraction of time the system is down.
    pub fn downtime_fraction(&self) -> f64 {
        1.0 - self.uptime_fraction
    }

    /// The stationary distribution π over failed-component counts,
    /// ordered state 0 (all working) through state n (all failed).
    pub fn distribution(&self) -> &[f64] {
        &self.pi
    }
}
