//! composition::errors — error types for compositional-data routines.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the compositional-data
//! routines (noise injection and the logistic-normal negative log-density).
//! Only *structural* misuse is typed here: shape mismatches, empty inputs,
//! and unusable variance settings.
//!
//! Key behaviors
//! -------------
//! - Define [`CompResult`] and [`CompError`] as the canonical result and
//!   error types for the `composition` subtree.
//! - Attach human-readable `Display` messages phrased as domain constraints
//!   ("proportions vectors must have equal length") rather than low-level
//!   detail.
//!
//! Invariants & assumptions
//! ------------------------
//! - Numeric degeneracy is deliberately *not* an error: zero or negative
//!   proportions flow through the log/exp arithmetic (collapsing to zero
//!   shares or propagating NaN), matching the drop-in contract of the
//!   original assessment code. Callers who need a guard apply it upstream.
//! - `CompError` values are small, `Clone`, and comparable, so tests can
//!   match on exact variants.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending lengths or variance).

/// Result alias for compositional-data routines.
pub type CompResult<T> = Result<T, CompError>;

/// CompError — structural failures in compositional-data routines.
///
/// Variants
/// --------
/// - `EmptyComposition`
///   A proportions vector has length zero, so geometric means and
///   normalization are undefined.
/// - `LengthMismatch { left, right }`
///   Two paired vectors (proportions vs. noise, observed vs. expected)
///   disagree in length.
/// - `InvalidVariance(f64)`
///   The logistic-normal variance is non-finite or not strictly positive,
///   so its log is meaningless as a density term.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
#[derive(Debug, Clone, PartialEq)]
pub enum CompError {
    //------ Input validation errors ------
    EmptyComposition,
    LengthMismatch { left: usize, right: usize },
    InvalidVariance(f64),
}

impl std::error::Error for CompError {}

impl std::fmt::Display for CompError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompError::EmptyComposition => {
                write!(f, "Composition vectors must contain at least one proportion.")
            }
            CompError::LengthMismatch { left, right } => {
                write!(
                    f,
                    "Paired composition vectors must have equal length; got {left} and {right}."
                )
            }
            CompError::InvalidVariance(var) => {
                write!(f, "Invalid variance: {var}. Must be finite and strictly positive.")
            }
        }
    }
}
