//! Explicit Runge-Kutta ODE integration over fixed time grids.
//!
//! A single stepping algorithm, [`explicit_rk`], implements the whole family
//! of explicit Runge-Kutta methods. Each method is a [`ButcherTableau`]
//! holding its nodes `c`, weights `b`, and strictly lower-triangular stage
//! matrix `a`; the engine consumes the tableau together with a derivative
//! function, a time grid, an initial state, and opaque parameters, and
//! returns the state at every grid node.
//!
//! # Built-in methods
//!
//! | Binding           | Tableau                            | Stages | Order |
//! |-------------------|------------------------------------|--------|-------|
//! | [`forward_euler`] | [`ButcherTableau::FORWARD_EULER`]  |      1 |     1 |
//! | [`rk4`]           | [`ButcherTableau::RK4`]            |      4 |     4 |
//! | [`rk38`]          | [`ButcherTableau::RK38`]           |      4 |     4 |
//! | —                 | [`ButcherTableau::MIDPOINT`]       |      2 |     2 |
//! | —                 | [`ButcherTableau::HEUN`]           |      2 |     2 |
//!
//! Custom methods go through [`ButcherTableau::new`], which validates the
//! coefficients before any stepping can begin.
//!
//! # State containers
//!
//! The engine is generic over the state type: anything that is [`Clone`] and
//! supports elementwise addition and scalar multiplication ([`OdeState`],
//! blanket-implemented). Plain `f64` works for scalar problems,
//! [`Vector`](crate::Vector) for systems.
//!
//! # Example
//!
//! ```
//! use butcher::ode::rk4;
//!
//! // Exponential decay: dy/dt = -λy, with λ passed as a parameter.
//! let t: Vec<f64> = (0..=100).map(|i| i as f64 * 0.01).collect();
//! let yt = rk4(|y, _t, lam: &f64| -lam * y, &t, &1.0, &1.0).unwrap();
//!
//! assert_eq!(yt.len(), t.len());
//! assert!((yt.last().unwrap() - (-1.0_f64).exp()).abs() < 1e-10);
//! ```

mod explicit;
mod tableau;

use core::fmt;
use core::ops::{Add, Mul};


pub use explicit::{explicit_rk, forward_euler, rk38, rk4, rk_step};
pub use tableau::ButcherTableau;

/// Errors from tableau construction or integration setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OdeError {
    /// Tableau has zero stages.
    NoStages,
    /// First node `c[0]` is not zero.
    FirstNodeNonzero,
    /// Stage matrix has a nonzero entry on or above the diagonal.
    NotLowerTriangular { row: usize, col: usize },
    /// Weights do not sum to one (consistency condition).
    WeightsNotConsistent { sum: f64 },
    /// Time grid is empty; at least one node is required.
    EmptyTimeGrid,
}

impl fmt::Display for OdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStages => write!(f, "tableau must have at least one stage"),
            Self::FirstNodeNonzero => write!(f, "first tableau node c[0] must be zero"),
            Self::NotLowerTriangular { row, col } => write!(
                f,
                "tableau matrix entry a[{row}][{col}] must be zero (strictly lower triangular)"
            ),
            Self::WeightsNotConsistent { sum } => {
                write!(f, "tableau weights sum to {sum}, expected 1")
            }
            Self::EmptyTimeGrid => write!(f, "time grid is empty; at least one node is required"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OdeError {}

/// Trait for state containers the engine can advance.
///
/// The minimal algebra a Runge-Kutta step needs: elementwise addition and
/// multiplication by the time scalar `T`. Blanket-implemented, so `f32`,
/// `f64`, [`Vector`](crate::Vector), and any user container with the right
/// operator impls all qualify.
pub trait OdeState<T>: Clone + Add<Output = Self> + Mul<T, Output = Self> {}

impl<T, Y: Clone + Add<Output = Y> + Mul<T, Output = Y>> OdeState<T> for Y {}
