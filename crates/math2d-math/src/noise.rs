//! Classic 2D Perlin gradient noise.
//!
//! The noise field is a pure function of its coordinates: no seed, no
//! permutation table, no state. Corner gradients come from a fixed
//! trigonometric hash, so the same `(x, y)` always yields the same value.
//!
//! # Usage
//!
//! ```rust
//! use math2d_math::{noise, unit_noise};
//!
//! let scale = 0.02;
//! let heights: Vec<f64> = (0..600).map(|x| unit_noise(x as f64 * scale, 0.3)).collect();
//! assert!(heights.iter().all(|h| (0.0..=1.0).contains(h)));
//!
//! // Lattice points are always zero.
//! assert_eq!(noise(4.0, -2.0), 0.0);
//! ```

use crate::interp::lerp;

/// Pseudo-random unit gradient for lattice corner `(ix, iy)`.
///
/// The constants are part of the output contract; changing them changes
/// every noise value.
#[inline]
fn random_gradient(ix: f64, iy: f64) -> (f64, f64) {
    let random = 2920.0
        * (ix * 21942.0 + iy * 171324.0 + 8912.0).sin()
        * (ix * 23157.0 * iy * 217832.0 + 9758.0).cos();
    (random.cos(), random.sin())
}

/// Dot product of the corner gradient with the offset from the corner to `(x, y)`.
#[inline]
fn dot_grid_gradient(ix: f64, iy: f64, x: f64, y: f64) -> f64 {
    let (gx, gy) = random_gradient(ix, iy);
    (x - ix) * gx + (y - iy) * gy
}

/// Perlin noise at `(x, y)`.
///
/// The result is centered on zero, is exactly zero on integer lattice
/// points, and stays well inside `[-1, 1]`. Use [`unit_noise`] for a value
/// in `[0, 1]`.
///
/// Corner contributions are blended with the smoothstep [`lerp`], first
/// along x and then along y.
pub fn noise(x: f64, y: f64) -> f64 {
    let x0 = x.floor();
    let x1 = x0 + 1.0;
    let y0 = y.floor();
    let y1 = y0 + 1.0;

    let sx = x - x0;
    let sy = y - y0;

    let n0 = dot_grid_gradient(x0, y0, x, y);
    let n1 = dot_grid_gradient(x1, y0, x, y);
    let ix0 = lerp(n0, n1, sx);

    let n0 = dot_grid_gradient(x0, y1, x, y);
    let n1 = dot_grid_gradient(x1, y1, x, y);
    let ix1 = lerp(n0, n1, sx);

    lerp(ix0, ix1, sy)
}

/// One-dimensional noise: `noise(x, 0.0)`.
#[inline]
pub fn noise1(x: f64) -> f64 {
    noise(x, 0.0)
}

/// Perlin noise remapped into `[0, 1]`.
#[inline]
pub fn unit_noise(x: f64, y: f64) -> f64 {
    noise(x, y) * 0.5 + 0.5
}
