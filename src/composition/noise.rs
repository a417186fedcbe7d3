//! composition::noise — additive log-ratio noise for compositional data.
//!
//! Purpose
//! -------
//! Perturb a vector of proportions in log space and renormalize, the way
//! assessment models simulate ageing error or take random-walk steps on
//! compositional quantities.
//!
//! Key behaviors
//! -------------
//! - `exp(ln(comp) + noise)` followed by division by the perturbed sum, so
//!   the output is again a composition (sums to 1 up to rounding).
//! - Zero-noise input reproduces the input, normalized.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input proportions are expected to be strictly positive. A zero entry
//!   produces `-inf` in the log step, which the exponential collapses back
//!   to a zero output share; a negative entry produces NaN, which
//!   normalization smears across the whole output. Both match the original
//!   assessment code and are documented, not guarded.
//! - Only shape is validated; see `composition::validation`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover zero-noise idempotence, unit-sum preservation under
//!   arbitrary finite noise, the zero-share collapse for a zero proportion,
//!   and NaN propagation for a negative proportion.

use ndarray::Array1;

use crate::composition::errors::CompResult;
use crate::composition::validation::validate_pair;
use crate::numeric::scalar::Scalar;

/// Add log-ratio noise to a composition and renormalize.
///
/// Parameters
/// ----------
/// - `input_comp`: proportions (strictly positive for meaningful output);
///   need not sum to 1 on input — normalization handles scale.
/// - `noise`: additive perturbation in log space, same length as
///   `input_comp`. Zeros leave the composition unchanged up to
///   normalization.
///
/// Returns
/// -------
/// `CompResult<Array1<T>>`
///   - `Ok(out)` with `out = exp(ln(input_comp) + noise) / Σ exp(...)`,
///     same length as the input and summing to 1 up to floating-point
///     error whenever all inputs are positive and the noise is finite.
///   - `Err(CompError)` for empty input or a length mismatch.
///
/// Panics
/// ------
/// - Never panics. A zero proportion logs to `-inf` and comes back as a
///   zero output share; a negative proportion yields NaN that contaminates
///   every output entry through the shared normalizer. Neither is caught
///   here.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use stock_assessment::composition::add_comp_noise;
///
/// let comp = array![0.2_f64, 0.3, 0.5];
/// let noise = array![0.0, 0.0, 0.0];
///
/// let out = add_comp_noise(&comp, &noise).unwrap();
/// assert!((out.sum() - 1.0).abs() < 1e-12);
/// ```
pub fn add_comp_noise<T: Scalar>(
    input_comp: &Array1<T>, noise: &Array1<T>,
) -> CompResult<Array1<T>> {
    validate_pair(input_comp, noise)?;

    let log_comp = input_comp.mapv(|c| c.ln());
    let perturbed = (&log_comp + noise).mapv(|v| v.exp());
    let total = perturbed.sum();

    Ok(perturbed.mapv(|v| v / total))
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
    // - Zero-noise idempotence on an already-normalized composition.
    // - Normalization of an unnormalized input.
    // - Unit-sum preservation under non-trivial noise.
    // - The zero-share collapse for a zero proportion and NaN propagation
    //   for a negative proportion.
    // - Structural validation errors.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that zero noise reproduces a normalized composition exactly
    // (up to floating-point rounding).
    //
    // Given
    // -----
    // - comp = [0.2, 0.3, 0.5] (sums to 1), noise = 0.
    //
    // Expect
    // ------
    // - Output elements match the input to ~1e-15 and sum to 1.
    fn zero_noise_is_idempotent_on_normalized_input() {
        // Arrange
        let comp = array![0.2_f64, 0.3, 0.5];
        let noise = array![0.0, 0.0, 0.0];

        // Act
        let out = add_comp_noise(&comp, &noise).unwrap();

        // Assert
        for (o, c) in out.iter().zip(comp.iter()) {
            assert_relative_eq!(*o, *c, max_relative = 1e-14);
        }
        assert_relative_eq!(out.sum(), 1.0, max_relative = 1e-14);
    }

    #[test]
    // Purpose
    // -------
    // Verify that an unnormalized input comes out normalized under zero
    // noise (counts in, proportions out).
    //
    // Given
    // -----
    // - comp = [2, 3, 5] (sums to 10), noise = 0.
    //
    // Expect
    // ------
    // - Output == [0.2, 0.3, 0.5] up to rounding.
    fn zero_noise_normalizes_counts_to_proportions() {
        // Arrange
        let comp = array![2.0_f64, 3.0, 5.0];
        let noise = array![0.0, 0.0, 0.0];

        // Act
        let out = add_comp_noise(&comp, &noise).unwrap();

        // Assert
        let expected = [0.2, 0.3, 0.5];
        for (o, e) in out.iter().zip(expected.iter()) {
            assert_relative_eq!(*o, *e, max_relative = 1e-14);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that arbitrary finite noise preserves the unit-sum and
    // positivity of the output.
    //
    // Given
    // -----
    // - A 4-component composition and mixed-sign noise.
    //
    // Expect
    // ------
    // - All outputs strictly positive; sum == 1 up to rounding.
    fn noisy_output_is_positive_and_sums_to_one() {
        // Arrange
        let comp = array![0.1_f64, 0.4, 0.25, 0.25];
        let noise = array![0.3, -0.8, 0.05, 1.2];

        // Act
        let out = add_comp_noise(&comp, &noise).unwrap();

        // Assert
        assert!(out.iter().all(|v| *v > 0.0));
        assert_relative_eq!(out.sum(), 1.0, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the zero-proportion behavior: ln(0) = -inf collapses back to
    // a zero share under exp, so the output is finite with the zero entry
    // preserved and the remaining mass renormalized.
    //
    // Given
    // -----
    // - comp = [0.0, 1.0], noise = 0.
    //
    // Expect
    // ------
    // - The call succeeds; out == [0.0, 1.0] with every entry finite.
    fn zero_proportion_collapses_to_zero_share() {
        // Arrange
        let comp = array![0.0_f64, 1.0];
        let noise = array![0.0, 0.0];

        // Act
        let out = add_comp_noise(&comp, &noise).unwrap();

        // Assert
        assert!(out.iter().all(|v| v.is_finite()));
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the documented failure mode for truly invalid input: a
    // negative proportion logs to NaN, and the shared normalizer smears
    // NaN across every output entry rather than erroring.
    //
    // Given
    // -----
    // - comp = [-0.2, 1.0], noise = 0.
    //
    // Expect
    // ------
    // - The call succeeds structurally; every output entry is NaN.
    fn negative_proportion_propagates_nan_everywhere() {
        // Arrange
        let comp = array![-0.2_f64, 1.0];
        let noise = array![0.0, 0.0];

        // Act
        let out = add_comp_noise(&comp, &noise).unwrap();

        // Assert
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    // Purpose
    // -------
    // Verify structural validation: empty input and mismatched lengths are
    // typed errors, not panics.
    fn structural_misuse_is_reported_as_typed_errors() {
        let empty: Array1<f64> = array![];
        assert_eq!(add_comp_noise(&empty, &empty), Err(CompError::EmptyComposition));

        let comp = array![0.5_f64, 0.5];
        let noise = array![0.0];
        assert_eq!(
            add_comp_noise(&comp, &noise),
            Err(CompError::LengthMismatch { left: 2, right: 1 })
        );
    }
}
