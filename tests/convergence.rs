//! Order-of-convergence checks against dy/dt = -y, y(0) = 1 on [0, 1].
//!
//! Halving the step size must shrink the global error at t = 1 by a factor
//! of 2^p for a method of order p.

use butcher::ode::{explicit_rk, forward_euler, rk38, rk4, ButcherTableau, OdeError};

const EXP_M1: f64 = 0.36787944117144233;

fn decay(y: &f64, _t: f64, _p: &()) -> f64 {
    -y
}

fn grid(steps: usize) -> Vec<f64> {
    (0..=steps).map(|i| i as f64 / steps as f64).collect()
}

fn solve(steps: usize, method: impl Fn(&[f64]) -> Result<Vec<f64>, OdeError>) -> f64 {
    let yt = method(&grid(steps)).unwrap();
    (yt.last().unwrap() - EXP_M1).abs()
}

#[test]
fn forward_euler_is_first_order() {
    let coarse = solve(40, |t| forward_euler(decay, t, &1.0, &()));
    let fine = solve(80, |t| forward_euler(decay, t, &1.0, &()));
    let ratio = coarse / fine;
    assert!(
        (ratio - 2.0).abs() < 0.1,
        "euler error ratio {ratio}, expected ~2"
    );
}

#[test]
fn midpoint_is_second_order() {
    let run = |steps| {
        solve(steps, |t| {
            explicit_rk(&ButcherTableau::MIDPOINT, decay, t, &1.0, &())
        })
    };
    let ratio = run(40) / run(80);
    assert!(
        (ratio - 4.0).abs() < 0.4,
        "midpoint error ratio {ratio}, expected ~4"
    );
}

#[test]
fn heun_is_second_order() {
    let run = |steps| {
        solve(steps, |t| {
            explicit_rk(&ButcherTableau::HEUN, decay, t, &1.0, &())
        })
    };
    let ratio = run(40) / run(80);
    assert!(
        (ratio - 4.0).abs() < 0.4,
        "heun error ratio {ratio}, expected ~4"
    );
}

#[test]
fn rk4_is_fourth_order() {
    let coarse = solve(10, |t| rk4(decay, t, &1.0, &()));
    let fine = solve(20, |t| rk4(decay, t, &1.0, &()));
    let ratio = coarse / fine;
    assert!(
        ratio > 14.0 && ratio < 18.0,
        "rk4 error ratio {ratio}, expected ~16"
    );
}

#[test]
fn rk38_is_fourth_order() {
    let coarse = solve(10, |t| rk38(decay, t, &1.0, &()));
    let fine = solve(20, |t| rk38(decay, t, &1.0, &()));
    let ratio = coarse / fine;
    assert!(
        ratio > 14.0 && ratio < 18.0,
        "rk38 error ratio {ratio}, expected ~16"
    );
}

#[test]
fn higher_order_wins_at_equal_step_count() {
    let euler = solve(100, |t| forward_euler(decay, t, &1.0, &()));
    let heun = solve(100, |t| {
        explicit_rk(&ButcherTableau::HEUN, decay, t, &1.0, &())
    });
    let four = solve(100, |t| rk4(decay, t, &1.0, &()));
    assert!(heun < euler);
    assert!(four < heun);
}
