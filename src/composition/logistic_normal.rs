//! composition::logistic_normal — logistic-normal negative log-density.
//!
//! Purpose
//! -------
//! Score observed compositional data against expected proportions under a
//! logistic-normal observation model (Schnute & Haigh 2007): a normal
//! distribution on centred log-ratios with a single shared variance.
//!
//! Key behaviors
//! -------------
//! - Centre both vectors by their geometric means, accumulate squared
//!   log-ratio residuals scaled by `1/(2·var)`, and add the
//!   `(N−1)·ln(var)/2` normalizing term.
//! - Return a *negative log* value: lower means a better fit. Constant
//!   terms independent of the parameters are omitted, so this is a loss to
//!   minimize, not a normalized density.
//!
//! Invariants & assumptions
//! ------------------------
//! - Proportions must be strictly positive for a finite result; zero or
//!   negative entries propagate non-finite values through the logs rather
//!   than erroring (drop-in contract of the original assessment code).
//! - The `1/N` exponent in the geometric means is computed with
//!   **real-valued** division. The reference implementation wrote the
//!   literal `1/N` with an integer `N`, which truncates to zero in C-family
//!   languages and silently degrades both geometric means to 1; that latent
//!   bug is not reproduced here.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the exact value for `y == p`, check invariance under a
//!   common rescaling of `y` and `p`, and cover the structural guards.

use crate::composition::errors::CompResult;
use crate::composition::validation::{validate_pair, validate_variance};
use crate::numeric::scalar::Scalar;
use crate::numeric::square;
use ndarray::Array1;

/// Negative log-density of a logistic-normal observation model.
///
/// Parameters
/// ----------
/// - `y`: observed proportions, length `N >= 1`, strictly positive for a
///   finite result.
/// - `p`: expected (model-predicted) proportions, same length as `y`.
/// - `var`: shared variance of the log-ratio residuals; must be finite and
///   strictly positive.
///
/// Returns
/// -------
/// `CompResult<T>`
///   - `Ok(nld)` with
///     `nld = (N−1)·ln(var)/2 + Σᵢ (ln(yᵢ/ỹ) − ln(pᵢ/p̃))² / (2·var)`,
///     where `ỹ = (Πyᵢ)^(1/N)` and `p̃ = (Πpᵢ)^(1/N)` are geometric means.
///   - `Err(CompError)` for empty input, a length mismatch, or an unusable
///     variance.
///
/// Panics
/// ------
/// - Never panics. Non-positive proportions yield non-finite results that
///   propagate to the caller.
///
/// Notes
/// -----
/// - For `y == p` the residual sum vanishes exactly and the result is
///   `(N−1)·ln(var)/2`.
/// - Rescaling `y` and `p` by common positive factors leaves the result
///   unchanged: the geometric-mean centring removes overall scale, so the
///   function depends only on the ratio structure of each vector.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use stock_assessment::composition::neg_log_logistic_normal;
///
/// let y = array![0.2_f64, 0.3, 0.5];
/// let var = 0.1_f64;
///
/// let nld = neg_log_logistic_normal(&y, &y, var).unwrap();
/// assert_eq!(nld, (3.0 - 1.0) * var.ln() / 2.0);
/// ```
pub fn neg_log_logistic_normal<T: Scalar>(
    y: &Array1<T>, p: &Array1<T>, var: T,
) -> CompResult<T> {
    validate_pair(y, p)?;
    validate_variance(var)?;

    let two = T::lit(2.0);
    let n = T::lit(y.len() as f64);
    let lnvar = var.ln();

    // Real-valued 1/N exponent; see the module docs.
    let ytilde = y.product().powf(T::one() / n);
    let ptilde = p.product().powf(T::one() / n);

    let mut nld = (n - T::one()) * lnvar / two;
    for (yi, pi) in y.iter().zip(p.iter()) {
        nld = nld + square((*yi / ytilde).ln() - (*pi / ptilde).ln()) / two / var;
    }

    Ok(nld)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;
    use crate::composition::errors::CompError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The exact closed form for identical observed/expected vectors.
    // - Scale invariance under common positive rescaling.
    // - A hand-computed two-component value.
    // - Structural validation (variance, shapes).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that identical vectors score exactly (N−1)·ln(var)/2: every
    // log-ratio residual is identically zero, with no rounding slack.
    //
    // Given
    // -----
    // - y = p = [0.2, 0.3, 0.5], var = 0.1.
    //
    // Expect
    // ------
    // - nld == 2 · ln(0.1) / 2 exactly.
    fn identical_vectors_score_variance_term_exactly() {
        // Arrange
        let y = array![0.2_f64, 0.3, 0.5];
        let var = 0.1_f64;

        // Act
        let nld = neg_log_logistic_normal(&y, &y, var).unwrap();

        // Assert
        assert_eq!(nld, (3.0 - 1.0) * var.ln() / 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify scale invariance: multiplying y and p by arbitrary positive
    // scalars leaves the density unchanged, because the geometric-mean
    // centring removes overall scale.
    //
    // Given
    // -----
    // - A base (y, p, var) and the same pair scaled by 7.3 and 0.02.
    //
    // Expect
    // ------
    // - Both calls agree to ~1e-12 relative.
    fn common_rescaling_leaves_density_unchanged() {
        // Arrange
        let y = array![0.1_f64, 0.2, 0.3, 0.4];
        let p = array![0.15_f64, 0.25, 0.35, 0.25];
        let var = 0.05_f64;

        // Act
        let base = neg_log_logistic_normal(&y, &p, var).unwrap();
        let scaled = neg_log_logistic_normal(&(&y * 7.3), &(&p * 0.02), var).unwrap();

        // Assert
        assert_relative_eq!(base, scaled, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Pin a hand-computed two-component value so formula regressions are
    // caught (residual terms, 1/(2·var) scaling, and the variance term).
    //
    // Given
    // -----
    // - y = [0.4, 0.6], p = [0.5, 0.5], var = 0.2.
    //
    // Expect
    // ------
    // - With ỹ = sqrt(0.24), p̃ = 0.5: each centred log-ratio residual is
    //   ±ln(0.4/ỹ) ∓ 0 = ±(ln 0.4 − ln ỹ), so
    //   nld = ln(0.2)/2 + 2·r²/(2·0.2) with r = (ln 0.4 − ln 0.6)/2.
    fn two_component_value_matches_hand_computation() {
        // Arrange
        let y = array![0.4_f64, 0.6];
        let p = array![0.5_f64, 0.5];
        let var = 0.2_f64;

        // Act
        let nld = neg_log_logistic_normal(&y, &p, var).unwrap();

        // Assert
        let r = (0.4_f64.ln() - 0.6_f64.ln()) / 2.0;
        let expected = var.ln() / 2.0 + 2.0 * r * r / (2.0 * var);
        assert_relative_eq!(nld, expected, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify structural guards: bad variance, empty input, and length
    // mismatch come back as typed errors.
    fn structural_misuse_is_reported_as_typed_errors() {
        let y = array![0.5_f64, 0.5];

        assert_eq!(neg_log_logistic_normal(&y, &y, 0.0), Err(CompError::InvalidVariance(0.0)));
        assert_eq!(neg_log_logistic_normal(&y, &y, -1.0), Err(CompError::InvalidVariance(-1.0)));

        let empty: Array1<f64> = array![];
        assert_eq!(neg_log_logistic_normal(&empty, &empty, 0.1), Err(CompError::EmptyComposition));

        let p = array![0.2_f64, 0.3, 0.5];
        assert_eq!(
            neg_log_logistic_normal(&y, &p, 0.1),
            Err(CompError::LengthMismatch { left: 2, right: 3 })
        );
    }
}
