//! RGB <-> HSV conversion.
//!
//! Both representations are [`Color`] arrays with every component in
//! `[0, 1]`. Hue is a fraction of a full turn, not degrees. Alpha is carried
//! through untouched.
//!
//! # Example
//!
//! ```rust
//! use math2d_color::{hsv_to_rgb, rgb_to_hsv};
//!
//! let orange = [1.0, 0.5, 0.0, 1.0];
//! let hsv = rgb_to_hsv(orange);
//! assert!((hsv[0] - 1.0 / 12.0).abs() < 1e-12);
//!
//! let back = hsv_to_rgb(hsv);
//! for (a, b) in back.iter().zip(orange.iter()) {
//!     assert!((a - b).abs() < 1e-12);
//! }
//! ```

use math2d_core::{Error, Result};
use tracing::debug;

use crate::Color;

/// Builds a [`Color`] from the first four elements of a slice.
///
/// Extra elements are ignored; fewer than four is `InvalidArgument`.
pub fn color_from_slice(s: &[f64]) -> Result<Color> {
    match s {
        [a, b, c, d, ..] => Ok([*a, *b, *c, *d]),
        _ => {
            debug!(len = s.len(), "color_from_slice: too few elements");
            Err(Error::too_few_elements("color", 4, s.len()))
        }
    }
}

/// Converts an RGBA color to HSVA.
///
/// Hue is computed per sector of the maximum channel (checked in r, g, b
/// order) and wrapped into `[0, 1)`. Achromatic colors get hue 0 and black
/// gets saturation 0.
pub fn rgb_to_hsv(color: Color) -> Color {
    let [r, g, b, a] = color;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };

    let sector = if max == min {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [sector / 6.0, s, v, a]
}

/// Converts an HSVA color to RGBA.
///
/// Hues outside `[0, 1)` wrap around the circle.
pub fn hsv_to_rgb(color: Color) -> Color {
    let [h, s, v, a] = color;

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [r, g, b, a]
}
