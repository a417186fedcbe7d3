//! Smooth penalty and squaring kernels.
//!
//! Provides the soft-floor transform used to keep state variables positive
//! under stochastic dynamics (e.g. catch exceeding biomass in a simulation
//! step) together with the squaring helpers the rest of the crate shares.
//!
//! # Provided items
//! - [`POSFUN_PENALTY_WEIGHT`]: the quadratic penalty weight (0.01) applied
//!   when a value is pushed back above the floor.
//! - [`posfun(x, eps)`]: smooth floor at `eps` with a penalty term, returned
//!   as a [`PosfunOutcome`].
//! - [`square(x)`] and [`square_elements(v)`]: scalar and element-wise
//!   squaring.
//!
//! # Rationale
//! A hard `max(x, eps)` has a derivative discontinuity and a dead gradient
//! below the floor, both of which stall gradient-based fitting. The
//! hyperbolic replacement `eps / (2 - eps/x)` is smooth in `x`, lands just
//! above `eps` as `x → eps⁻`, and maps negative `x` into `(0, eps/2)`, while
//! the accumulated quadratic penalty steers the optimizer back toward the
//! feasible region.
use ndarray::Array1;

use crate::numeric::scalar::Scalar;

/// Weight of the quadratic penalty accumulated when `posfun` engages.
///
/// The penalty term is `0.01 * (x - eps)^2`, added to the model objective by
/// the caller. The weight is mild on purpose: it should steer a fit away
/// from the infeasible region without dominating the data likelihood.
pub const POSFUN_PENALTY_WEIGHT: f64 = 0.01;

/// PosfunOutcome — result of one soft-floor evaluation.
///
/// Purpose
/// -------
/// Carry the floored value together with the penalty increment it generated,
/// so callers accumulate penalties explicitly instead of threading a mutable
/// reference through every process equation.
///
/// Fields
/// ------
/// - `value`: the (possibly replaced) quantity to use downstream.
/// - `penalty`: `0` when the input was already at or above the floor,
///   `0.01 * (x - eps)^2` otherwise.
///
/// Invariants
/// ----------
/// - `penalty >= 0` for finite inputs.
/// - `value == x` exactly whenever `x >= eps`.
///
/// Notes
/// -----
/// - Two scalars, `Copy`; cheap to return by value from hot loops.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PosfunOutcome<T: Scalar> {
    value: T,
    penalty: T,
}

impl<T: Scalar> PosfunOutcome<T> {
    /// The (possibly replaced) quantity to use downstream.
    pub fn value(&self) -> T {
        self.value
    }

    /// The penalty increment to add to the model objective.
    pub fn penalty(&self) -> T {
        self.penalty
    }
}

/// Soft floor with quadratic penalty.
///
/// Parameters
/// ----------
/// - `x`: the quantity to check (e.g. post-catch biomass).
/// - `eps`: the floor. Must be strictly positive for the transform to make
///   sense; typical values are small fractions of the state's scale.
///
/// Returns
/// -------
/// [`PosfunOutcome`] with:
/// - `value = x` and `penalty = 0` when `x >= eps`;
/// - `value = eps / (2 - eps/x)` and `penalty = 0.01 * (x - eps)^2` when
///   `x < eps`.
///
/// The replacement arm behaves piecewise in `x`:
/// - `x → eps⁻`: value approaches `eps` from **above**, so quantities that
///   dip marginally below the floor come back usable, slightly over it.
/// - `x < 0`: value lies in `(0, eps/2)`, i.e. negative states map to small
///   positive ones.
/// - `0 < x <= eps/2`: the denominator crosses zero at `x = eps/2`; the
///   result blows up or goes negative there. Models are expected to keep
///   `eps` far below the working scale of `x`, so this window is not hit in
///   practice; nothing is guarded here.
///
/// Panics
/// ------
/// - Never panics. `x == 0` makes the replacement arm divide by zero; the
///   resulting non-finite value propagates through the select per the
///   crate's propagate-don't-throw policy.
///
/// Notes
/// -----
/// - Both select arms are evaluated unconditionally, so the full expression
///   stays on an AD tape; see [`Scalar::select_ge`]. Because of this, the
///   division in the replacement arm runs even when `x >= eps`.
///
/// Examples
/// --------
/// ```rust
/// use stock_assessment::numeric::posfun;
///
/// let above = posfun(5.0_f64, 1e-3);
/// assert_eq!(above.value(), 5.0);
/// assert_eq!(above.penalty(), 0.0);
///
/// let below = posfun(-0.2_f64, 1e-3);
/// assert!(below.value() > 0.0 && below.value() < 1e-3);
/// assert!(below.penalty() > 0.0);
/// ```
pub fn posfun<T: Scalar>(x: T, eps: T) -> PosfunOutcome<T> {
    let two = T::lit(2.0);
    let weight = T::lit(POSFUN_PENALTY_WEIGHT);

    let replaced = eps / (two - eps / x);
    let value = T::select_ge(x, eps, x, replaced);
    let penalty = T::select_ge(x, eps, T::zero(), weight * square(x - eps));

    PosfunOutcome { value, penalty }
}

/// `x²`. Exists so squared residual terms read as intent rather than as
/// `powi` noise at every call site.
#[inline]
pub fn square<T: Scalar>(x: T) -> T {
    x * x
}

/// Element-wise [`square`] over a vector; returns a new vector of the same
/// length.
pub fn square_elements<T: Scalar>(values: &Array1<T>) -> Array1<T> {
    values.mapv(square)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - posfun identity and zero penalty at/above the floor.
    // - The replacement formula and penalty below the floor, in the regime
    //   models actually hit (x near eps and x negative).
    // - Continuity of the replacement at the threshold.
    // - square / square_elements contracts.
    //
    // They intentionally DO NOT cover:
    // - AD scalar types; only the f64/f32 impls ship with this crate.
    // - The singular window 0 < x <= eps/2, where the formula is documented
    //   to blow up and nothing is guarded.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that values at or above the floor pass through untouched with
    // zero penalty (identity case, `>=` not `>`).
    //
    // Given
    // -----
    // - x = 5.0 and x = eps itself, with eps = 1e-3.
    //
    // Expect
    // ------
    // - value == x exactly, penalty == 0 exactly.
    fn posfun_is_identity_at_and_above_floor() {
        let eps = 1e-3_f64;

        let above = posfun(5.0, eps);
        assert_eq!(above.value(), 5.0);
        assert_eq!(above.penalty(), 0.0);

        let at = posfun(eps, eps);
        assert_eq!(at.value(), eps);
        assert_eq!(at.penalty(), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the replacement arm just below the floor: value matches the
    // closed form eps / (2 - eps/x), lands above eps, and the penalty is
    // 0.01 * (x - eps)^2.
    //
    // Given
    // -----
    // - x = 0.8, eps = 1.0 (below the floor, above the singular window).
    //
    // Expect
    // ------
    // - value == 1 / (2 - 1.25) = 4/3, penalty == 0.01 * 0.04.
    fn posfun_replaces_below_floor_with_quadratic_penalty() {
        let x = 0.8_f64;
        let eps = 1.0;

        let out = posfun(x, eps);

        let expected_value = eps / (2.0 - eps / x);
        let expected_penalty = 0.01 * (x - eps) * (x - eps);

        assert_relative_eq!(out.value(), expected_value, max_relative = 1e-15);
        assert_relative_eq!(out.penalty(), expected_penalty, max_relative = 1e-15);
        assert!(out.value() > eps, "replacement near the floor lands above it");
    }

    #[test]
    // Purpose
    // -------
    // Verify that negative inputs map to small strictly positive values,
    // which is the property state-space models rely on when a stochastic
    // step drives biomass negative.
    //
    // Given
    // -----
    // - x = -3.0, eps = 0.5.
    //
    // Expect
    // ------
    // - 0 < value < eps / 2; penalty = 0.01 * (x - eps)^2.
    fn posfun_maps_negative_input_into_positive_band() {
        let out = posfun(-3.0, 0.5);

        assert!(out.value() > 0.0, "negative input must map positive, got {}", out.value());
        assert!(out.value() < 0.25);
        assert_relative_eq!(out.penalty(), 0.01 * (-3.5_f64) * (-3.5), max_relative = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify continuity at the threshold: approaching eps from below, the
    // replacement approaches eps (from above).
    //
    // Given
    // -----
    // - x = eps * (1 - 1e-9), eps = 1.0.
    //
    // Expect
    // ------
    // - value >= eps and within 1e-8 of it.
    fn posfun_is_continuous_at_the_threshold() {
        let eps = 1.0_f64;
        let x = eps * (1.0 - 1e-9);

        let out = posfun(x, eps);

        assert!(out.value() >= eps);
        assert!((out.value() - eps).abs() < 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // Verify square(x) == x * x and that the vectorized form applies
    // element-wise and preserves length.
    fn square_and_square_elements_agree() {
        assert_eq!(square(3.0_f64), 9.0);
        assert_eq!(square(-0.5_f64), 0.25);

        let v = array![1.0_f64, -2.0, 0.0, 1.5];
        let squared = square_elements(&v);

        assert_eq!(squared.len(), v.len());
        for (orig, sq) in v.iter().zip(squared.iter()) {
            assert_eq!(*sq, orig * orig);
        }
    }
}
