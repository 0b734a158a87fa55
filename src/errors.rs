//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// Raised when an input violates its declared domain or practical range.
    #[error("invalid input: {field} = {value} is outside {range}")]
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the accepted range.
        range: &'static str,
    },
    /// Raised when the length formula yields a non-positive patch length.
    #[error("degenerate geometry: computed patch length {length_m} m is not positive")]
    DegenerateGeometry {
        /// The non-positive length produced by the fringing-corrected formula.
        length_m: f64,
    },
    /// Raised when a numerical stage produces a non-finite value.
    #[error("numerical failure in {stage}: non-finite result")]
    Numerical {
        /// Pipeline stage that produced the non-finite value.
        stage: &'static str,
    },
}
