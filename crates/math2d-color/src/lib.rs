//! # math2d-color
//!
//! Color utilities on plain RGBA / HSVA arrays.
//!
//! - [`rgb_to_hsv`], [`hsv_to_rgb`] - color space conversion
//! - [`lerp_rgb`], [`lerp_hue`] - eased color blending
//! - [`grayscale`] - gray levels, fixed or random
//! - [`color_from_slice`] - checked construction from a slice
//!
//! # Representation
//!
//! A [`Color`] is `[f64; 4]` with every component nominally in `[0, 1]`.
//! The same type holds `(r, g, b, a)` and `(h, s, v, a)`; each function
//! documents which one it expects. Hue is a fraction of a full turn.
//!
//! # Quick Start
//!
//! ```rust
//! use math2d_color::{lerp_hue, rgb_to_hsv};
//!
//! let cold = [0.0, 0.0, 1.0, 1.0];
//! let hot = [1.0, 0.0, 0.0, 1.0];
//! let warm = lerp_hue(cold, hot, 0.5);
//! assert!((rgb_to_hsv(warm)[0] - 5.0 / 6.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod blend;
mod convert;
mod gray;

pub use blend::*;
pub use convert::*;
pub use gray::*;

/// RGBA or HSVA color, components in `[0, 1]`.
pub type Color = [f64; 4];
