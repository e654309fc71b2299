//! Replacing negligible floating-point values with exact zero.
//!
//! Results of numeric work often carry round-off noise where an exact zero
//! belongs, e.g. `1e-17` instead of `0.0`.  Chopping snaps any value whose
//! magnitude is below a threshold to zero and leaves everything else as is.
//!
//! # Examples
//!
//! ```
//! use numchop::chop::{chop, chop_in_place, chopped};
//!
//! assert_eq!(chop(1e-12_f64, 1e-10), 0.0);
//! assert_eq!(chop(0.25_f32, 1e-3), 0.25);
//!
//! let xs = [1.0, -3e-14, 2.5];
//! assert_eq!(chopped(&xs, 1e-10), vec![1.0, 0.0, 2.5]);
//!
//! let mut ys = vec![4e-11, -7.0];
//! chop_in_place(&mut ys, 1e-10);
//! assert_eq!(ys, vec![0.0, -7.0]);
//! ```

use num_traits::Float;

/// Threshold used by `chop_default`.
pub const DEFAULT_THRESHOLD: f64 = 1e-10;

/// Returns zero if `|x| < threshold`, otherwise `x` unchanged.
///
/// NaN is never below a threshold, so it passes through untouched.
pub fn chop<T: Float>(x: T, threshold: T) -> T {
    if x.abs() < threshold {
        T::zero()
    } else {
        x
    }
}

/// `chop` with `DEFAULT_THRESHOLD`.
pub fn chop_default(x: f64) -> f64 {
    chop(x, DEFAULT_THRESHOLD)
}

/// Chops every element of `xs` in place.
pub fn chop_in_place<T: Float>(xs: &mut [T], threshold: T) {
    for x in xs.iter_mut() {
        *x = chop(*x, threshold);
    }
}

/// Writes the chopped values of `xs` into `out` and returns it.
///
/// A missing buffer is allocated and a short one is extended to `xs.len()`.
/// A longer buffer keeps its tail past `xs.len()` untouched.
pub fn chop_into<T: Float>(xs: &[T], threshold: T, out: Option<Vec<T>>) -> Vec<T> {
    let mut out = out.unwrap_or_default();
    if out.len() < xs.len() {
        out.resize(xs.len(), T::zero());
    }

    for (dst, &x) in out.iter_mut().zip(xs) {
        *dst = chop(x, threshold);
    }
    out
}

/// Chopped copy of `xs`.
pub fn chopped<T: Float>(xs: &[T], threshold: T) -> Vec<T> {
    chop_into(xs, threshold, None)
}
