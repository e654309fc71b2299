//! Locating where a function stops returning valid values.
//!
//! Many functions are only defined on part of the real line and return NaN
//! elsewhere (`ln`, `sqrt`, `acos`, ...).  Given one point on each side of such
//! a transition, bisection narrows the bracket down to a requested width.
//!
//! # Examples
//!
//! ```
//! use numchop::boundary::{nan_boundary, DEFAULT_MAX_ITERATIONS};
//!
//! // sqrt(1 - x) is NaN for x > 1
//! let f = |x: f64| (1.0 - x).sqrt();
//! let b = nan_boundary(&f, 0.0, None, 3.0, 1e-8, DEFAULT_MAX_ITERATIONS).expect("boundary");
//!
//! assert!(b.x_valid <= 1.0 && b.x_nan > 1.0);
//! assert!(b.width() <= 1e-8);
//! assert!(!b.f_valid.is_nan());
//! ```
//!
//! A custom stopping criterion can be supplied through `nan_boundary_with`.

use crate::convergence::{BracketWidth, IsConverged};

/// Iteration cap conventionally used for `nan_boundary`.
pub const DEFAULT_MAX_ITERATIONS: usize = 40;

/// Bracket around a valid/NaN transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NanBracket {
    /// Point where the function is valid.
    pub x_valid: f64,

    /// Point where the function is NaN.
    pub x_nan: f64,

    /// Function value at `x_valid`.
    pub f_valid: f64,
}

impl NanBracket {
    pub fn width(&self) -> f64 {
        (self.x_valid - self.x_nan).abs()
    }
}

/// Boundary search error conditions.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum BoundaryError {
    /// Iteration limit was reached before the bracket was narrow enough.
    #[error("iteration limit reached with bracket still at [{x_valid}, {x_nan}]")]
    IterationLimit { x_valid: f64, x_nan: f64 },
}

/// Bisects between `x_valid` and `x_nan` until the bracket is within
/// `tolerance`.
///
/// If `f_valid` is supplied it is taken as `f(x_valid)` and the function is not
/// evaluated there.  Bisection halves the bracket each step, so a starting
/// width `w` needs about `log2(w / tolerance)` iterations.
///
/// # Panics
///
/// If `tolerance` is not positive and finite, if `f(x_nan)` is not NaN, or if
/// `f_valid` is NaN.
pub fn nan_boundary<F>(
    f: &F,
    x_valid: f64,
    f_valid: Option<f64>,
    x_nan: f64,
    tolerance: f64,
    max_iter: usize,
) -> Result<NanBracket, BoundaryError>
where
    F: Fn(f64) -> f64,
{
    let finish = BracketWidth::new(tolerance);
    nan_boundary_with(f, x_valid, f_valid, x_nan, &finish, max_iter)
}

/// Bisection towards a NaN boundary with an arbitrary stopping criterion.
///
/// Convergence is checked before each bisection step, so exhausting `max_iter`
/// is always an error even if the final step happened to converge.
pub fn nan_boundary_with<F, C>(
    f: &F,
    x_valid: f64,
    f_valid: Option<f64>,
    x_nan: f64,
    finish: &C,
    max_iter: usize,
) -> Result<NanBracket, BoundaryError>
where
    F: Fn(f64) -> f64,
    C: IsConverged,
{
    // ensure we started with valid bracket
    assert!(f(x_nan).is_nan(), "f(x_nan) must be NaN");
    let f_valid = f_valid.unwrap_or_else(|| f(x_valid));
    assert!(!f_valid.is_nan(), "f(x_valid) must not be NaN");

    let mut window = NanBracket {
        x_valid,
        x_nan,
        f_valid,
    };

    for _ in 0..max_iter {
        if finish.is_converged(window.x_valid, window.x_nan) {
            return Ok(window);
        }

        let mid = (window.x_valid + window.x_nan) / 2.0;
        let f_mid = f(mid);

        if f_mid.is_nan() {
            window.x_nan = mid;
        } else {
            window.x_valid = mid;
            window.f_valid = f_mid;
        }
    }
    Err(BoundaryError::IterationLimit {
        x_valid: window.x_valid,
        x_nan: window.x_nan,
    })
}
