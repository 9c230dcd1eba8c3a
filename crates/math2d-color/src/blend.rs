//! Color interpolation in RGB and HSV.
//!
//! Both blends ease their channels with the smoothstep
//! [`lerp`](math2d_math::lerp). [`lerp_hue`] additionally walks the hue
//! circle along the shorter arc, which keeps intensity ramps (heat maps,
//! probability densities) from detouring through unrelated hues.

use math2d_math::lerp;
use tracing::trace;

use crate::{Color, hsv_to_rgb, rgb_to_hsv};

/// Blends two RGBA colors channel by channel.
///
/// # Example
///
/// ```rust
/// use math2d_color::lerp_rgb;
///
/// let black = [0.0, 0.0, 0.0, 1.0];
/// let white = [1.0, 1.0, 1.0, 1.0];
/// assert_eq!(lerp_rgb(black, white, 0.5), [0.5, 0.5, 0.5, 1.0]);
/// ```
#[inline]
pub fn lerp_rgb(a: Color, b: Color, amt: f64) -> Color {
    [
        lerp(a[0], b[0], amt),
        lerp(a[1], b[1], amt),
        lerp(a[2], b[2], amt),
        lerp(a[3], b[3], amt),
    ]
}

/// Blends two RGBA colors through HSV space.
///
/// Hue moves linearly along the shorter way around the circle; saturation,
/// value and alpha use the eased [`lerp`]. `amt = 0` gives `a`, `amt = 1`
/// gives `b` regardless of which hue is numerically larger.
///
/// # Example
///
/// ```rust
/// use math2d_color::lerp_hue;
///
/// let red = [1.0, 0.0, 0.0, 1.0];
/// let blue = [0.0, 0.0, 1.0, 1.0];
///
/// // Halfway from red to blue passes through magenta, not green.
/// let mid = lerp_hue(red, blue, 0.5);
/// assert!((mid[0] - 1.0).abs() < 1e-9);
/// assert!(mid[1].abs() < 1e-9);
/// assert!((mid[2] - 1.0).abs() < 1e-9);
/// ```
pub fn lerp_hue(a: Color, b: Color, amt: f64) -> Color {
    let mut lo = rgb_to_hsv(a);
    let mut hi = rgb_to_hsv(b);
    let mut amt = amt;

    let d = (hi[0] - lo[0]).abs();
    if lo[0] > hi[0] {
        std::mem::swap(&mut lo, &mut hi);
        amt = 1.0 - amt;
    }

    let wrapped = d > 0.5;
    let h = if wrapped {
        lo[0] += 1.0;
        (lo[0] + amt * (hi[0] - lo[0])).rem_euclid(1.0)
    } else {
        lo[0] + amt * d
    };
    trace!(h, wrapped, "lerp_hue");

    hsv_to_rgb([
        h,
        lerp(lo[1], hi[1], amt),
        lerp(lo[2], hi[2], amt),
        lerp(lo[3], hi[3], amt),
    ])
}
