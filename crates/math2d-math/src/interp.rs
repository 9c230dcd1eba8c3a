//! Scalar interpolation, remapping and clamping.
//!
//! - Smoothstep interpolation ([`lerp`]) and its inverse ([`inverse_lerp`])
//! - Range remapping ([`map`], [`normalize`])
//! - Clamping ([`constrain`], [`clamp`])
//! - Point distance ([`distance`])
//!
//! Note that the scalar [`lerp`] here is **eased**, not linear: the blend
//! weight follows the cubic `(3 - 2t) t²`. [`Vector2D::lerp`](crate::Vector2D::lerp)
//! is plain linear interpolation.
//!
//! # Usage
//!
//! ```rust
//! use math2d_math::{lerp, map, constrain};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(lerp(0.0, 10.0, 0.25), 1.5625);
//!
//! assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 50.0);
//! assert!(map(5.0, 2.0, 2.0, 0.0, 10.0).is_err());
//!
//! assert_eq!(constrain(12.0, 10.0, 0.0), 10.0);
//! ```

use math2d_core::{Error, Result};
use tracing::debug;

/// Smoothstep-weighted interpolation between `a` and `b`.
///
/// Returns `a` when `amt = 0.0` and `b` when `amt = 1.0`. In between, the
/// weight eases in and out. `amt` is not clamped.
///
/// # Formula
///
/// `(b - a) * (3 - 2 * amt) * amt² + a`
///
/// # Example
///
/// ```rust
/// use math2d_math::lerp;
///
/// assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
/// assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, amt: f64) -> f64 {
    (b - a) * (3.0 - amt * 2.0) * amt * amt + a
}

/// Inverse of a linear blend: where `value` sits in `[a, b]`.
///
/// Unguarded: `a == b` yields `inf` or `NaN`.
///
/// # Formula
///
/// `(value - a) / (b - a)`
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    (value - a) / (b - a)
}

/// Remaps `value` from `[a1, a2]` to `[b1, b2]`.
///
/// Fails with `InvalidArgument` when `a1 == a2`.
///
/// # Example
///
/// ```rust
/// use math2d_math::map;
///
/// assert_eq!(map(0.5, 0.0, 1.0, 0.0, 100.0).unwrap(), 50.0);
/// assert_eq!(map(15.0, 10.0, 20.0, 1.0, 0.0).unwrap(), 0.5);
/// ```
pub fn map(value: f64, a1: f64, a2: f64, b1: f64, b2: f64) -> Result<f64> {
    if a1 == a2 {
        debug!(value, a1, a2, "map: degenerate source range");
        return Err(Error::degenerate_range(a1));
    }
    Ok(map_unchecked(value, a1, a2, b1, b2))
}

/// Same arithmetic as [`map`] without the degenerate-range guard.
///
/// The caller guarantees `a1 != a2`; otherwise the result is `inf` or `NaN`.
#[inline]
pub fn map_unchecked(value: f64, a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    let slope = (b2 - b1) / (a2 - a1);
    b1 + slope * (value - a1)
}

/// Remaps `value` from `[a, b]` into `[0, 1]`.
///
/// Shorthand for `map(value, a, b, 0.0, 1.0)`.
#[inline]
pub fn normalize(value: f64, a: f64, b: f64) -> Result<f64> {
    map(value, a, b, 0.0, 1.0)
}

/// Clamps `x` into `[min(a, b), max(a, b)]`.
///
/// The bounds may be given in either order.
///
/// # Example
///
/// ```rust
/// use math2d_math::constrain;
///
/// assert_eq!(constrain(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(constrain(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(constrain(1.5, 1.0, 0.0), 1.0);
/// ```
#[inline]
pub fn constrain(x: f64, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    x.max(lo).min(hi)
}

/// Alias for [`constrain`].
#[inline]
pub fn clamp(x: f64, a: f64, b: f64) -> f64 {
    constrain(x, a, b)
}

/// Euclidean distance between the points `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}
