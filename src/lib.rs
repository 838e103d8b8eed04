//! # butcher
//!
//! Explicit Runge-Kutta ODE integration parameterized by Butcher tableaus.
//! Pure Rust, no-std compatible (needs `alloc` for trajectory storage).
//!
//! ## Quick start
//!
//! ```
//! use butcher::ode::rk4;
//!
//! // dy/dt = -y, y(0) = 1, integrated over a uniform grid on [0, 1]
//! let t: Vec<f64> = (0..=100).map(|i| i as f64 * 0.01).collect();
//! let yt = rk4(|y, _t, _p: &()| -y, &t, &1.0, &()).unwrap();
//!
//! assert_eq!(yt[0], 1.0);
//! assert!((yt.last().unwrap() - (-1.0_f64).exp()).abs() < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`ode`] — The tableau-driven stepping engine ([`ode::explicit_rk`],
//!   [`ode::rk_step`]), the [`ode::ButcherTableau`] type with built-in
//!   methods (forward Euler, classical RK4, Kutta's 3/8 rule, midpoint,
//!   Heun), and the named method bindings.
//!
//! - [`vector`] — Fixed-size `Vector<T, N>` state container with the
//!   elementwise algebra the engine needs. Stack-allocated, const-generic
//!   length. The engine accepts any type with that algebra
//!   ([`ode::OdeState`]); this is just the batteries-included backend.
//!
//! - [`traits`] — Scalar trait hierarchy: [`Scalar`] for elements,
//!   [`FloatScalar`] for the independent variable and step arithmetic.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm; `std::error::Error` impls |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ode;
pub mod traits;
pub mod vector;

pub use ode::{ButcherTableau, OdeError, OdeState};
pub use traits::{FloatScalar, Scalar};
pub use vector::Vector;
