//! numeric — generic scalar seam and smooth penalty kernels.
//!
//! Purpose
//! -------
//! Hold the pieces the rest of the crate builds on: the [`Scalar`] trait
//! that abstracts over `f64`/`f32` and user-supplied differentiable scalar
//! types, and the small transform kernels ([`posfun`], [`square`],
//! [`square_elements`]) used inside model process equations.
//!
//! Conventions
//! -----------
//! - Kernels here never allocate except where a new `Array1` is the
//!   documented return value.
//! - Conditionals that sit inside differentiable expressions go through
//!   [`Scalar::select_ge`], which evaluates both arms, rather than a native
//!   `if`; see the `posfun` docs for why.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`penalty`] cover the closed-form contracts of the soft
//!   floor (identity above threshold, penalty accumulation below) and the
//!   squaring helpers.

pub mod penalty;
pub mod scalar;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::penalty::{posfun, square, square_elements, PosfunOutcome, POSFUN_PENALTY_WEIGHT};
pub use self::scalar::Scalar;
