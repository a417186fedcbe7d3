//! mortality::errors — error types for mortality estimators and solvers.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the Chapman-Robson
//! estimator and the Baranov catch-equation solver. As elsewhere in the
//! crate, only structural misuse is typed: age-range configuration that
//! cannot index the data, and solver settings that make no sense.
//!
//! Key behaviors
//! -------------
//! - Define [`MortResult`] and [`MortError`] as the canonical result and
//!   error types for the `mortality` subtree.
//! - Phrase `Display` messages as domain constraints ("1 ≤ kage ≤ Aplus ≤
//!   number of ages") so diagnostics are meaningful without extra context.
//!
//! Invariants & assumptions
//! ------------------------
//! - Numeric degeneracy stays numeric: the Chapman-Robson `-1` sentinel and
//!   NaN propagation from empty truncations are part of the estimator's
//!   contract, not errors.
//! - `MortError` values are small, `Clone`, and comparable for exact
//!   matching in tests.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload.

/// Result alias for mortality estimators and solvers.
pub type MortResult<T> = Result<T, MortError>;

/// MortError — structural failures in mortality routines.
///
/// Variants
/// --------
/// - `EmptyAgeComposition`
///   The age-composition vector has length zero.
/// - `InvalidRecruitmentAge { kage }`
///   The age of full recruitment is zero; ages are 1-based in the
///   Chapman-Robson convention, so `kage >= 1` is required.
/// - `InvalidAgeRange { kage, aplus, len }`
///   The plus-group age does not satisfy `kage <= aplus <= len`, so the
///   requested age window cannot index the composition.
/// - `ZeroIterations`
///   The Baranov solver was configured with zero Newton iterations; the
///   result would just be the crude initial approximation.
/// - `InvalidStepSize(f64)`
///   The Newton damping factor is outside `(0, 1]` or non-finite.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
#[derive(Debug, Clone, PartialEq)]
pub enum MortError {
    //------ Age-range validation errors ------
    EmptyAgeComposition,
    InvalidRecruitmentAge { kage: usize },
    InvalidAgeRange { kage: usize, aplus: usize, len: usize },

    //------ Solver configuration errors ------
    ZeroIterations,
    InvalidStepSize(f64),
}

impl std::error::Error for MortError {}

impl std::fmt::Display for MortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MortError::EmptyAgeComposition => {
                write!(f, "Age composition must contain at least one age class.")
            }
            MortError::InvalidRecruitmentAge { kage } => {
                write!(f, "Invalid recruitment age kage = {kage}. Ages are 1-based; kage must be >= 1.")
            }
            MortError::InvalidAgeRange { kage, aplus, len } => {
                write!(
                    f,
                    "Invalid age range: kage = {kage}, Aplus = {aplus}, ages available = {len}. \
                     Must satisfy 1 <= kage <= Aplus <= number of ages."
                )
            }
            MortError::ZeroIterations => {
                write!(f, "Newton iteration count must be at least 1.")
            }
            MortError::InvalidStepSize(step) => {
                write!(f, "Invalid Newton step fraction: {step}. Must lie in (0, 1].")
            }
        }
    }
}
