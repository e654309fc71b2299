//! Small numeric helpers.
//!
//! * `chop` snaps negligible floating-point values to exact zero.
//! * `boundary` bisects towards the point where a function starts returning NaN.
//!
//! Stopping criteria for the boundary search live in `convergence`.
//!
//! # Examples
//!
//! ```
//! use numchop::{chop_default, nan_boundary, DEFAULT_MAX_ITERATIONS};
//!
//! assert_eq!(chop_default(1e-20), 0.0);
//!
//! let f = |x: f64| x.ln();
//! let b = nan_boundary(&f, 1.0, None, -1.0, 1e-6, DEFAULT_MAX_ITERATIONS).expect("boundary");
//! assert!(b.x_valid >= 0.0 && b.x_nan < 0.0);
//! ```

pub mod boundary;
pub mod chop;
pub mod convergence;

pub use boundary::{
    nan_boundary, nan_boundary_with, BoundaryError, NanBracket, DEFAULT_MAX_ITERATIONS,
};
pub use chop::{chop, chop_default, chop_in_place, chop_into, chopped, DEFAULT_THRESHOLD};
pub use convergence::{BracketWidth, IsConverged};
