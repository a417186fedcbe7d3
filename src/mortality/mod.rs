//! mortality — mortality-rate estimators and solvers.
//!
//! Purpose
//! -------
//! Collect the routines that recover mortality rates from data: the
//! Chapman-Robson catch-curve estimator of total mortality Z from an age
//! composition ([`CREstimate`]), and the fixed-iteration Newton-Raphson
//! solver that recovers fishing mortality F from the Baranov catch equation
//! ([`BaranovRates`]), together with their shared validation and error
//! infrastructure.
//!
//! Key behaviors
//! -------------
//! - Expose both routines as outcome types with constructor-style entry
//!   points, so callers receive values instead of mutating out-parameters.
//! - Keep solver configuration explicit and validated
//!   ([`BaranovOptions`]), never hidden in constants.
//! - Preserve the reference estimators' numeric signaling: the
//!   Chapman-Robson `-1` sentinel and NaN propagation survive at the
//!   numeric layer, with typed accessors on top.
//!
//! Invariants & assumptions
//! ------------------------
//! - Chapman-Robson ages are 1-based (`kage`, `aplus`); compositions are
//!   0-indexed by age − 1. The window is validated before any indexing.
//! - The Baranov solver runs a fixed iteration count with no convergence
//!   branch, for deterministic flop sequences and AD-tape compatibility.
//!
//! Conventions
//! -----------
//! - Structural misuse is a typed [`MortError`]; numeric degeneracy is
//!   propagated arithmetic. Error messages are phrased as domain
//!   constraints.
//!
//! Downstream usage
//! ----------------
//! - Assessment models call [`CREstimate::chapman_robson`] per year/fleet
//!   on observed age comps (often to initialize a mortality prior), and
//!   [`BaranovRates::solve`] inside the population-dynamics loop to
//!   condition F on observed catch.
//!
//! Testing notes
//! -------------
//! - Unit tests live with each routine; the crate-level integration test
//!   runs both on simulated data end to end.

pub mod baranov;
pub mod chapman_robson;
pub mod errors;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::baranov::{BaranovOptions, BaranovRates};
pub use self::chapman_robson::{CREstimate, CR_NO_ESTIMATE};
pub use self::errors::{MortError, MortResult};
pub use self::validation::validate_age_range;
