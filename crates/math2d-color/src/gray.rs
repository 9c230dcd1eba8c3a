//! Grayscale color construction.

use math2d_math::map_unchecked;
use rand::Rng;

use crate::Color;

/// Opaque gray from an 8-bit level, or a random level when `value` is `None`.
///
/// `Some(v)` maps `v` from `[0, 255]` into `[0, 1]` and takes the absolute
/// value. `None` draws the level uniformly from `[0, 1)` using the
/// thread-local RNG; see [`grayscale_with`] for a caller-supplied RNG.
///
/// # Example
///
/// ```rust
/// use math2d_color::grayscale;
///
/// assert_eq!(grayscale(Some(0.0)), [0.0, 0.0, 0.0, 1.0]);
///
/// let c = grayscale(None);
/// assert!(c[0] >= 0.0 && c[0] < 1.0);
/// assert_eq!(c[0], c[1]);
/// ```
pub fn grayscale(value: Option<f64>) -> Color {
    grayscale_with(value, &mut rand::thread_rng())
}

/// Like [`grayscale`], drawing random levels from `rng`.
pub fn grayscale_with<R: Rng + ?Sized>(value: Option<f64>, rng: &mut R) -> Color {
    // abs() only changes negative inputs; kept for compatibility
    let c = match value {
        Some(v) => map_unchecked(v, 0.0, 255.0, 0.0, 1.0).abs(),
        None => rng.gen_range(0.0..1.0),
    };
    [c, c, c, 1.0]
}

/// Alias for [`grayscale`].
#[inline]
pub fn greyscale(value: Option<f64>) -> Color {
    grayscale(value)
}
