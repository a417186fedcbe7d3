//! Scalar abstraction for differentiable numeric kernels.
//!
//! The kernels in this crate are written once, generically, and run either on
//! plain floating-point values or on a reverse/forward-mode automatic
//! differentiation scalar supplied by the caller. [`Scalar`] names exactly
//! the surface the kernels need: field arithmetic, `exp`/`ln`/`pow`,
//! ordering, lifting of `f64` literals, and a branch-free select.
//!
//! # Why a branch-free select
//! Tape-based AD records the operations actually executed. A native `if`
//! on a taped value bakes the taken branch into the recorded graph, so the
//! derivative is wrong on the other side of the threshold. `select_ge`
//! evaluates **both** arms and then chooses, which keeps the full expression
//! graph on the tape; AD scalar types should override it with their native
//! conditional-expression primitive when they have one.
use num_traits::{Float, FromPrimitive};

/// Numeric scalar usable in the assessment kernels.
///
/// Parameters and semantics
/// ------------------------
/// Supertraits supply field arithmetic, comparison, and the elementary
/// transcendentals (`exp`, `ln`, `powi`, `powf`) via [`num_traits::Float`],
/// plus conversion from primitive literals via [`num_traits::FromPrimitive`].
/// The trait adds:
///
/// - [`lit`](Scalar::lit): lift an `f64` literal (penalty weights, step
///   fractions) into the scalar type.
/// - [`select_ge`](Scalar::select_ge): branch-free conditional on `>=`.
///
/// Invariants
/// ----------
/// - `lit` must be total for the literals this crate uses (small constants
///   in `[0, 2]`); the default implementation treats a failed conversion as
///   a programming error.
/// - `select_ge(a, b, x, y)` must equal `x` when `a >= b` and `y` otherwise,
///   with both `x` and `y` already evaluated by the caller.
///
/// Notes
/// -----
/// - Implemented out of the box for `f64` and `f32`. AD types implement the
///   supertraits through operator overloading and override `select_ge` with
///   their tape-native conditional.
pub trait Scalar: Float + FromPrimitive {
    /// Lift an `f64` literal into the scalar type.
    fn lit(value: f64) -> Self {
        Self::from_f64(value).expect("kernel literals are representable in every Scalar impl")
    }

    /// Branch-free conditional: `if_ge` when `lhs >= rhs`, else `if_lt`.
    ///
    /// Both arms are evaluated before the call; this function only selects.
    /// The default is an ordinary comparison, which is correct for plain
    /// floats. Tape-based AD scalars should override it with their native
    /// conditional-expression operation so the non-taken arm stays on the
    /// recorded graph.
    fn select_ge(lhs: Self, rhs: Self, if_ge: Self, if_lt: Self) -> Self {
        if lhs >= rhs {
            if_ge
        } else {
            if_lt
        }
    }
}

impl Scalar for f64 {
    fn lit(value: f64) -> Self {
        value
    }
}

impl Scalar for f32 {}
