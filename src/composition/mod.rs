//! composition — compositional-data utilities for assessment models.
//!
//! Purpose
//! -------
//! Collect the routines that operate on vectors of proportions: log-ratio
//! noise injection for simulation ([`add_comp_noise`]) and the
//! logistic-normal negative log-density for likelihood evaluation
//! ([`neg_log_logistic_normal`]), together with their shared validation and
//! error infrastructure.
//!
//! Key behaviors
//! -------------
//! - Expose noise injection that perturbs a composition in log space and
//!   renormalizes to a unit sum.
//! - Expose a logistic-normal loss over centred log-ratios with a single
//!   shared variance (Schnute & Haigh 2007).
//! - Centralize shape and variance guards in [`validation`], reported
//!   through [`CompError`] / [`CompResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Proportions are expected to be strictly positive; degeneracy stays
//!   numeric rather than erroring, which is the drop-in contract of the
//!   original assessment code. In noise injection a zero proportion
//!   collapses to a zero output share while a negative one propagates NaN;
//!   in the likelihood a non-positive proportion drives the loss non-finite.
//! - Routines never panic on user-facing invalid input: structural misuse
//!   is a typed error, numeric degeneracy is propagated arithmetic.
//!
//! Conventions
//! -----------
//! - Vectors are `ndarray::Array1` over a [`crate::numeric::Scalar`], so
//!   both kernels are usable from differentiable objective functions.
//! - Error messages are phrased as domain constraints ("must have equal
//!   length") rather than implementation detail.
//!
//! Downstream usage
//! ----------------
//! - Simulation code calls [`add_comp_noise`] with drawn noise vectors;
//!   objective functions call [`neg_log_logistic_normal`] per composition
//!   observation and sum the results.
//!
//! Testing notes
//! -------------
//! - Unit tests live with each kernel; the crate-level integration test
//!   chains noise injection into likelihood scoring the way a simulation
//!   study would.

pub mod errors;
pub mod logistic_normal;
pub mod noise;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{CompError, CompResult};
pub use self::logistic_normal::neg_log_logistic_normal;
pub use self::noise::add_comp_noise;
pub use self::validation::{validate_pair, validate_variance};
