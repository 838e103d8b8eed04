use alloc::vec::Vec;

use super::{ButcherTableau, OdeError, OdeState};
use crate::traits::FloatScalar;

/// Single explicit Runge-Kutta step.
///
/// Advances `y` from `t0` to `t0 + h` under the given tableau, calling
/// `f(state, time, params) -> dstate/dt` once per stage. Stage `j` sees the
/// intermediate state `y + h * Σ_{m<j} a[j][m] k[m]` at time `t0 + c[j] h`;
/// the update is `y + h * Σ_j b[j] k[j]`. Returns a fresh state value and
/// leaves `y` untouched.
///
/// ```
/// use butcher::ode::{rk_step, ButcherTableau};
///
/// let mut f = |y: &f64, _t: f64, _p: &()| -y;
/// let y1 = rk_step(&ButcherTableau::RK4, &mut f, 0.0, 0.01, &1.0, &());
/// assert!((y1 - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn rk_step<T, Y, P, F, const S: usize>(
    tableau: &ButcherTableau<S>,
    f: &mut F,
    t0: T,
    h: T,
    y: &Y,
    params: &P,
) -> Y
where
    T: FloatScalar,
    Y: OdeState<T>,
    F: FnMut(&Y, T, &P) -> Y,
{
    let zero = T::zero();
    let mut ks: Vec<Y> = Vec::with_capacity(S);

    // The first stage always evaluates at the base state. Tableau
    // construction rejects S == 0, so it exists for every reachable tableau.
    let k0 = f(y, t0, params);
    let mut dy = k0.clone() * T::from(tableau.b[0]).unwrap();
    ks.push(k0);

    for j in 1..S {
        let mut ystage = y.clone();
        for (m, k) in ks.iter().enumerate() {
            let a_jm = T::from(tableau.a[j][m]).unwrap();
            if a_jm != zero {
                ystage = ystage + k.clone() * (a_jm * h);
            }
        }
        let k = f(&ystage, t0 + T::from(tableau.c[j]).unwrap() * h, params);

        let b_j = T::from(tableau.b[j]).unwrap();
        if b_j != zero {
            dy = dy + k.clone() * b_j;
        }
        ks.push(k);
    }

    y.clone() + dy * h
}

/// Integrate an ODE across a fixed time grid with an explicit Runge-Kutta
/// tableau.
///
/// Returns the trajectory: one state per node of `t`, starting with a clone
/// of `y0`. Step sizes are the consecutive node differences, so the grid
/// need not be uniform, and a decreasing grid integrates backward in time.
/// `params` is handed to every derivative call unchanged.
///
/// The stepping is strictly sequential and deterministic, and makes exactly
/// `(t.len() - 1) * S` derivative evaluations. A single-node grid returns
/// `[y0]` without evaluating the derivative at all.
///
/// # Errors
///
/// [`OdeError::EmptyTimeGrid`] if `t` is empty.
///
/// # Example
///
/// ```
/// use butcher::ode::{explicit_rk, ButcherTableau};
/// use butcher::Vector;
///
/// // Harmonic oscillator: y'' = -y  →  [y, y']
/// let t: Vec<f64> = (0..=1000).map(|i| i as f64 * 1e-3 * std::f64::consts::TAU).collect();
/// let y0 = Vector::from_array([1.0_f64, 0.0]);
/// let yt = explicit_rk(
///     &ButcherTableau::RK4,
///     |y: &Vector<f64, 2>, _t, _p: &()| Vector::from_array([y[1], -y[0]]),
///     &t,
///     &y0,
///     &(),
/// ).unwrap();
/// let yf = yt.last().unwrap();
/// assert!((yf[0] - 1.0).abs() < 1e-9);
/// assert!(yf[1].abs() < 1e-9);
/// ```
pub fn explicit_rk<T, Y, P, F, const S: usize>(
    tableau: &ButcherTableau<S>,
    mut f: F,
    t: &[T],
    y0: &Y,
    params: &P,
) -> Result<Vec<Y>, OdeError>
where
    T: FloatScalar,
    Y: OdeState<T>,
    F: FnMut(&Y, T, &P) -> Y,
{
    if t.is_empty() {
        return Err(OdeError::EmptyTimeGrid);
    }

    let mut yt: Vec<Y> = Vec::with_capacity(t.len());
    yt.push(y0.clone());

    let mut y = y0.clone();
    for pair in t.windows(2) {
        let h = pair[1] - pair[0];
        y = rk_step(tableau, &mut f, pair[0], h, &y, params);
        yt.push(y.clone());
    }

    Ok(yt)
}

/// Integrate with the forward Euler method.
///
/// One derivative evaluation per step: `y1 = y0 + h f(y0, t0, params)`.
pub fn forward_euler<T, Y, P, F>(f: F, t: &[T], y0: &Y, params: &P) -> Result<Vec<Y>, OdeError>
where
    T: FloatScalar,
    Y: OdeState<T>,
    F: FnMut(&Y, T, &P) -> Y,
{
    explicit_rk(&ButcherTableau::FORWARD_EULER, f, t, y0, params)
}

/// Integrate with the classical fourth-order Runge-Kutta method.
///
/// ```
/// use butcher::ode::rk4;
///
/// let t: Vec<f64> = (0..=50).map(|i| i as f64 * 0.02).collect();
/// let yt = rk4(|y, _t, _p: &()| -y, &t, &1.0, &()).unwrap();
/// assert!((yt.last().unwrap() - (-1.0_f64).exp()).abs() < 1e-8);
/// ```
pub fn rk4<T, Y, P, F>(f: F, t: &[T], y0: &Y, params: &P) -> Result<Vec<Y>, OdeError>
where
    T: FloatScalar,
    Y: OdeState<T>,
    F: FnMut(&Y, T, &P) -> Y,
{
    explicit_rk(&ButcherTableau::RK4, f, t, y0, params)
}

/// Integrate with Kutta's 3/8 rule (fourth order).
pub fn rk38<T, Y, P, F>(f: F, t: &[T], y0: &Y, params: &P) -> Result<Vec<Y>, OdeError>
where
    T: FloatScalar,
    Y: OdeState<T>,
    F: FnMut(&Y, T, &P) -> Y,
{
    explicit_rk(&ButcherTableau::RK38, f, t, y0, params)
}
