//! # Error Types
//!
//! Unified error type for the steady-state engine and the configuration
//! optimizer. Every fallible public API in this crate returns
//! [`Result`] with this error; nothing is converted to a default value
//! or a sentinel cost.

use thiserror::Error;

/// Unified error type for all maintsim operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Parameters rejected before any computation: n < 1, k < 1, k > n,
    /// r < 1, or a rate that is negative or non-finite.
    #[error("invalid parameters: {detail}")]
    InvalidParameters { detail: String },

    /// The stationary distribution is undefined: the normalization
    /// denominator is zero or non-finite, or a state with positive
    /// inflow has no repair transition back (μ = 0 with failures
    /// still occurring). Surfaced per call; the optimizer treats the
    /// affected grid cell as unusable and continues.
    #[error("degenerate chain: normalization denominator {denominator} is unusable")]
    DegenerateChain { denominator: f64 },

    /// The optimizer's search bounds yielded zero usable candidates,
    /// either because k exceeds the component-count bound or because
    /// every grid cell produced a degenerate chain.
    #[error("no feasible configuration within the search bounds")]
    NoFeasibleConfiguration,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        Self::InvalidParameters { detail: detail.into() }
    }
}
