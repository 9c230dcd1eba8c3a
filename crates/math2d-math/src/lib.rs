//! # math2d-math
//!
//! 2D vector algebra and scalar math for graphics and animation code.
//!
//! - [`Vector2D`] - 2D vector value type (screen convention, y down)
//! - Scalar utilities ([`lerp`], [`inverse_lerp`], [`map`], [`normalize`], [`constrain`], [`distance`])
//! - Perlin noise ([`noise`], [`unit_noise`])
//!
//! # Design
//!
//! Everything here is pure. [`Vector2D`] is `Copy` and every operation
//! returns a new value; there are no in-place variants.
//!
//! Two interpolations coexist on purpose:
//!
//! ```text
//! lerp(a, b, t)          = (b - a) * (3 - 2t) * t² + a    eased, scalar
//! Vector2D::lerp(b, t)   = a + (b - a) * t                 linear, vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use math2d_math::{Vector2D, lerp};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = Vector2D::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! let turned = v.rotate(FRAC_PI_2);
//! assert!((turned.magnitude() - 5.0).abs() < 1e-12);
//!
//! assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Vector2D`]
//!
//! # Dependencies
//!
//! - [`glam`] - conversions to and from `DVec2`
//! - [`rand`] - random unit vectors
//! - `math2d-core` - error type and angle constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod noise;
mod vector2;

pub use interp::*;
pub use noise::*;
pub use vector2::*;
