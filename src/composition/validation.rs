//! composition::validation — shared input guards for compositional routines.
//!
//! Purpose
//! -------
//! Centralize the structural checks (shape and configuration) performed
//! before any compositional arithmetic runs, so the kernel modules stay
//! free of duplicated precondition code.
//!
//! Key behaviors
//! -------------
//! - Enforce non-emptiness and pairwise length agreement for proportion
//!   vectors.
//! - Enforce finiteness and strict positivity of the logistic-normal
//!   variance.
//!
//! Invariants & assumptions
//! ------------------------
//! - These guards are purely structural. Element values are *not* checked:
//!   zero/negative proportions are a documented propagate-as-NaN failure
//!   mode of the kernels, not a validation error.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and a success path for each guard.

use ndarray::Array1;

use crate::composition::errors::{CompError, CompResult};
use crate::numeric::scalar::Scalar;

/// Validate a pair of same-length, non-empty composition vectors.
///
/// Parameters
/// ----------
/// - `left`, `right`: the paired vectors (e.g. proportions and noise, or
///   observed and expected proportions).
///
/// Returns
/// -------
/// `CompResult<()>`
///   - `Ok(())` when both vectors are non-empty and equal in length.
///   - `Err(CompError::EmptyComposition)` when `left` is empty.
///   - `Err(CompError::LengthMismatch { .. })` when lengths differ.
///
/// Notes
/// -----
/// - Element values are not inspected; see the module docs.
pub fn validate_pair<T: Scalar>(left: &Array1<T>, right: &Array1<T>) -> CompResult<()> {
    if left.is_empty() {
        return Err(CompError::EmptyComposition);
    }
    if left.len() != right.len() {
        return Err(CompError::LengthMismatch { left: left.len(), right: right.len() });
    }
    Ok(())
}

/// Validate a logistic-normal variance: finite and strictly positive.
///
/// Returns
/// -------
/// `CompResult<()>`
///   - `Ok(())` for usable variances.
///   - `Err(CompError::InvalidVariance(var))` otherwise, with the value
///     reported as `f64` (NaN if it cannot be represented).
pub fn validate_variance<T: Scalar>(var: T) -> CompResult<()> {
    if !var.is_finite() || var <= T::zero() {
        return Err(CompError::InvalidVariance(var.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(())
}
