//! mortality::chapman_robson — Chapman-Robson total-mortality estimator.
//!
//! Purpose
//! -------
//! Estimate total instantaneous mortality Z from the age-frequency
//! distribution of a catch sample (Chapman & Robson 1960; Dunn et al. 2002),
//! using the mean recoded age above full recruitment.
//!
//! Key behaviors
//! -------------
//! - Recode ages relative to the age of full recruitment `kage`, accumulate
//!   the weighted mean recoded age ābar, and apply the closed form
//!   `Z = ln((1 + ābar − 1/N) / ābar)`.
//! - Truncate the usable age range at the **first** age whose count falls
//!   below `min_obs`. This is a deliberate early-exit policy inherited from
//!   the reference estimator — one sparse age class ends the window, it
//!   does not merely skip that age. Callers who want a filter must filter
//!   upstream.
//! - Signal "no estimate possible" (all usable weight at the recruitment
//!   age, ābar = 0) with the sentinel `z = −1` at the numeric layer, and as
//!   `None` through the typed [`CREstimate::estimate`] accessor.
//!
//! Invariants & assumptions
//! ------------------------
//! - `kage` and `aplus` are 1-based ages; the composition vector is
//!   0-indexed by age − 1. Window validity is checked up front.
//! - If the very first age is already below `min_obs`, nothing is recorded
//!   and the arithmetic produces NaN (0/0), which propagates per the
//!   crate's propagate-don't-throw policy; [`CREstimate::estimate`] maps it
//!   to `None`.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the closed form on a hand-computed example, exercise
//!   the truncation policy with an interior sparse age, and cover the
//!   sentinel and NaN degeneracies.

use ndarray::Array1;

use crate::mortality::errors::MortResult;
use crate::mortality::validation::validate_age_range;

/// Sentinel written when the mean recoded age is zero and no mortality
/// estimate is possible. Kept at the numeric layer for drop-in parity with
/// assessment models that branch on `z == -1`.
pub const CR_NO_ESTIMATE: f64 = -1.0;

/// CREstimate — outcome of a Chapman-Robson total-mortality fit.
///
/// Purpose
/// -------
/// Hold the estimated total mortality Z from one age-composition sample,
/// preserving the reference estimator's sentinel semantics while also
/// offering a typed accessor for callers who prefer `Option`.
///
/// Fields
/// ------
/// - `z`: the estimate; `-1.0` (see [`CR_NO_ESTIMATE`]) when ābar = 0, NaN
///   when the truncation left no observations at all.
///
/// Invariants
/// ----------
/// - Constructed only through [`CREstimate::chapman_robson`], so the value
///   always reflects the documented formula on a validated age window.
///
/// Notes
/// -----
/// - Single scalar, `Copy`; cheap to collect per year/fleet in a loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CREstimate {
    z: f64,
}

impl CREstimate {
    /// Run the Chapman-Robson estimator on one age composition.
    ///
    /// Parameters
    /// ----------
    /// - `age_comp`: per-age proportions or counts, 0-indexed by age − 1.
    /// - `kage`: 1-based age of full recruitment; recoded ages count from
    ///   here.
    /// - `aplus`: 1-based plus-group age, the last age considered.
    /// - `min_obs`: minimum count/proportion for an age to be usable. The
    ///   first age below this value truncates the remaining range.
    ///
    /// Returns
    /// -------
    /// `MortResult<CREstimate>`
    ///   - `Ok(est)` with `est.z()` equal to:
    ///     - `ln((1 + ābar − 1/N) / ābar)` when usable observations give
    ///       ābar > 0, where N is their sum and ābar the mean recoded age;
    ///     - [`CR_NO_ESTIMATE`] (−1) when ābar = 0;
    ///     - NaN when truncation recorded nothing (N = 0).
    ///   - `Err(MortError)` when the age window cannot index the data.
    ///
    /// Panics
    /// ------
    /// - Never panics; window validity is checked before any indexing, and
    ///   the recoded-age arithmetic stays in range for every validated
    ///   window (including `kage == 1`, where recoding starts at the first
    ///   element).
    ///
    /// Notes
    /// -----
    /// - Deliberately `f64`-only, unlike the smooth kernels: the
    ///   below-threshold early exit branches on data values, so the control
    ///   flow is not fixed and the estimator cannot sit on an AD tape
    ///   anyway. It consumes observed counts, not model quantities.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use ndarray::array;
    /// use stock_assessment::mortality::CREstimate;
    ///
    /// // Ages 1..=5; age 4 has no fish, so ages 4 and 5 are truncated.
    /// let comp = array![5.0, 10.0, 3.0, 0.0, 0.0];
    /// let est = CREstimate::chapman_robson(&comp, 1, 5, 1.0).unwrap();
    /// assert!(est.estimate().is_some());
    /// ```
    pub fn chapman_robson(
        age_comp: &Array1<f64>, kage: usize, aplus: usize, min_obs: f64,
    ) -> MortResult<Self> {
        validate_age_range(age_comp.len(), kage, aplus)?;

        let max_ages = aplus - kage + 1;
        let mut age_obs = Array1::<f64>::zeros(max_ages);
        let mut abar = 0.0;

        for a in (kage - 1)..aplus {
            if age_comp[a] >= min_obs {
                // a >= kage - 1, so adding first keeps the subtraction in
                // range for unsigned arithmetic.
                let rel = a + 1 - kage;
                age_obs[rel] = age_comp[a];
                abar += rel as f64 * age_comp[a];
            } else {
                // One sparse age ends the usable window; see module docs.
                break;
            }
        }

        let n = age_obs.sum();
        abar /= n;

        let z = if abar == 0.0 {
            CR_NO_ESTIMATE
        } else {
            ((1.0 + abar - 1.0 / n) / abar).ln()
        };

        Ok(CREstimate { z })
    }

    /// The raw estimate, sentinel semantics included: `-1` means "no
    /// estimate possible", NaN means the truncation recorded nothing.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// The estimate as a typed optional: `None` for the `-1` sentinel and
    /// for non-finite degeneracies, `Some(z)` otherwise.
    pub fn estimate(&self) -> Option<f64> {
        if self.z == CR_NO_ESTIMATE || !self.z.is_finite() {
            None
        } else {
            Some(self.z)
        }
    }
}
