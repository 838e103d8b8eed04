use super::OdeError;

/// Tolerance on the weight consistency condition `sum(b) = 1`.
const WEIGHT_TOL: f64 = 1e-12;

/// Butcher tableau of an `S`-stage explicit Runge-Kutta method.
///
/// Holds the nodes `c`, weights `b`, and stage matrix `a` that fully specify
/// one method. The matrix is strictly lower triangular: stage `i` may only
/// depend on stages `j < i`. Coefficients are stored as `f64` and cast to
/// the working scalar at use sites.
///
/// Construction via [`new`](Self::new) validates the coefficients; built-in
/// methods are exposed as `const` items and shared by every invocation.
/// There is no mutation path after construction.
///
/// # Examples
///
/// ```
/// use butcher::ode::{explicit_rk, ButcherTableau};
///
/// // Explicit midpoint method as a custom tableau.
/// let midpoint = ButcherTableau::new(
///     [0.0, 0.5],
///     [0.0, 1.0],
///     [[0.0, 0.0], [0.5, 0.0]],
/// ).unwrap();
///
/// let yt = explicit_rk(&midpoint, |y, _t, _p: &()| -y, &[0.0, 0.1], &1.0, &()).unwrap();
/// assert!((yt[1] - (-0.1_f64).exp()).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButcherTableau<const S: usize> {
    pub(super) c: [f64; S],
    pub(super) b: [f64; S],
    pub(super) a: [[f64; S]; S],
}

impl<const S: usize> ButcherTableau<S> {
    /// Create a tableau from nodes `c`, weights `b`, and stage matrix `a`.
    ///
    /// The stage count is the const parameter `S`, so the three pieces can
    /// never disagree on length. Fails if `S` is zero, `c[0]` is nonzero,
    /// `a` has a nonzero entry on or above the diagonal, or the weights do
    /// not sum to one.
    pub fn new(c: [f64; S], b: [f64; S], a: [[f64; S]; S]) -> Result<Self, OdeError> {
        if S == 0 {
            return Err(OdeError::NoStages);
        }
        if c[0] != 0.0 {
            return Err(OdeError::FirstNodeNonzero);
        }
        for (i, row) in a.iter().enumerate() {
            for (j, &entry) in row.iter().enumerate().skip(i) {
                if entry != 0.0 {
                    return Err(OdeError::NotLowerTriangular { row: i, col: j });
                }
            }
        }
        let sum: f64 = b.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_TOL {
            return Err(OdeError::WeightsNotConsistent { sum });
        }
        Ok(Self { c, b, a })
    }

    /// Number of stages.
    #[inline]
    pub const fn stages(&self) -> usize {
        S
    }

    /// Nodes (fractional time offsets of each stage).
    #[inline]
    pub const fn c(&self) -> &[f64; S] {
        &self.c
    }

    /// Weights combining the stage derivatives into the state update.
    #[inline]
    pub const fn b(&self) -> &[f64; S] {
        &self.b
    }

    /// Stage matrix (strictly lower triangular).
    #[inline]
    pub const fn a(&self) -> &[[f64; S]; S] {
        &self.a
    }
}

impl ButcherTableau<1> {
    /// Forward Euler: `y1 = y0 + h f(y0, t0)`. The only consistent
    /// one-stage explicit method.
    pub const FORWARD_EULER: Self = Self {
        c: [0.0],
        b: [1.0],
        a: [[0.0]],
    };
}

impl ButcherTableau<2> {
    /// Explicit midpoint method, second order.
    pub const MIDPOINT: Self = Self {
        c: [0.0, 0.5],
        b: [0.0, 1.0],
        a: [[0.0, 0.0], [0.5, 0.0]],
    };

    /// Heun's method (explicit trapezoidal rule), second order.
    pub const HEUN: Self = Self {
        c: [0.0, 1.0],
        b: [0.5, 0.5],
        a: [[0.0, 0.0], [1.0, 0.0]],
    };
}

impl ButcherTableau<4> {
    /// The classical fourth-order Runge-Kutta method.
    pub const RK4: Self = Self {
        c: [0.0, 0.5, 0.5, 1.0],
        b: [1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
        a: [
            [0.0, 0.0, 0.0, 0.0],
            [0.5, 0.0, 0.0, 0.0],
            [0.0, 0.5, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ],
    };

    /// Kutta's 3/8 rule, fourth order. Slightly smaller error coefficients
    /// than [`RK4`](Self::RK4) at the cost of a few more flops per step.
    pub const RK38: Self = Self {
        c: [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0],
        b: [1.0 / 8.0, 3.0 / 8.0, 3.0 / 8.0, 1.0 / 8.0],
        a: [
            [0.0, 0.0, 0.0, 0.0],
            [1.0 / 3.0, 0.0, 0.0, 0.0],
            [-1.0 / 3.0, 1.0, 0.0, 0.0],
            [1.0, -1.0, 1.0, 0.0],
        ],
    };
}
