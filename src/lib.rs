//! stock_assessment — numeric utility kernels for fisheries stock-assessment
//! models.
//!
//! Purpose
//! -------
//! Provide the small, stateless numeric routines that recur across
//! age-structured and delay-difference stock-assessment models: a smooth
//! penalized floor for quantities that must stay positive, compositional
//! noise injection, the Chapman-Robson total-mortality estimator, a
//! fixed-iteration Newton-Raphson solver for the Baranov catch equation, and
//! the logistic-normal negative log-density for compositional likelihoods.
//!
//! Key behaviors
//! -------------
//! - Every routine is a pure transformation of caller-supplied values;
//!   results come back as return values or small `Copy` outcome structs
//!   ([`mortality::CREstimate`], [`mortality::BaranovRates`],
//!   [`numeric::PosfunOutcome`]) rather than through out-parameters.
//! - Scalar kernels are generic over [`numeric::Scalar`], so they run on
//!   plain `f64`/`f32` or on a user-supplied automatic-differentiation type
//!   that implements the same arithmetic surface.
//! - Structural misuse (length mismatches, out-of-range configuration) is
//!   reported through per-subtree error enums; numeric degeneracies (log of
//!   a non-positive proportion, the Chapman-Robson `-1` sentinel) propagate
//!   through floating-point arithmetic exactly as assessment models expect.
//!
//! Invariants & assumptions
//! ------------------------
//! - No routine holds state between calls, performs I/O, or spawns threads;
//!   everything here is safe to call concurrently from multiple threads.
//! - Vector inputs use `ndarray::Array1`; indexing is 0-based throughout,
//!   with age conventions documented where they differ (Chapman-Robson ages
//!   are 1-based in the scientific convention and mapped explicitly).
//! - The Baranov solver runs a caller-chosen fixed iteration count with no
//!   convergence branch, so its floating-point operation sequence is
//!   deterministic and reproducible across runs and platforms.
//!
//! Downstream usage
//! ----------------
//! - Assessment models typically call [`numeric::posfun`] inside their
//!   process equations, [`composition::add_comp_noise`] when simulating
//!   observation error, [`mortality::BaranovRates::solve`] inside the
//!   population dynamics loop, and
//!   [`composition::neg_log_logistic_normal`] in the objective function.
//! - Gradient-based callers supply a differentiable scalar implementing
//!   [`numeric::Scalar`]; the branch-free select in `posfun` keeps both
//!   conditional arms on the tape.
//!
//! Testing notes
//! -------------
//! - Each kernel module carries unit tests for its closed-form contracts
//!   and edge cases; `tests/integration_assessment_pipeline.rs` chains the
//!   routines the way a model would (simulate → estimate → score).

pub mod composition;
pub mod mortality;
pub mod numeric;

// ---- Re-exports (primary public surface) ----------------------------------

pub use composition::{add_comp_noise, neg_log_logistic_normal, CompError, CompResult};
pub use mortality::{BaranovOptions, BaranovRates, CREstimate, MortError, MortResult};
pub use numeric::{posfun, square, square_elements, PosfunOutcome, Scalar};
