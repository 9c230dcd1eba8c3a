//! Angle constants and degree/radian conversion.
//!
//! # Usage
//!
//! ```rust
//! use math2d_core::{to_deg, to_rad, HALF_PI};
//!
//! assert!((to_deg(HALF_PI) - 90.0).abs() < 1e-12);
//! assert!((to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
//! ```

use std::f64::consts::PI;

/// Half of PI.
pub const HALF_PI: f64 = PI / 2.0;

/// A quarter of PI.
pub const QUARTER_PI: f64 = PI / 4.0;

/// Twice PI.
pub const TWO_PI: f64 = PI * 2.0;

/// Alias for [`TWO_PI`].
pub const TAU: f64 = TWO_PI;

/// Multiply degrees by this to get radians.
pub const DEG2RAD: f64 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD2DEG: f64 = 180.0 / PI;

/// Converts `angle` radians to degrees.
#[inline]
pub fn to_deg(angle: f64) -> f64 {
    angle * RAD2DEG
}

/// Converts `angle` degrees to radians.
#[inline]
pub fn to_rad(angle: f64) -> f64 {
    angle * DEG2RAD
}
