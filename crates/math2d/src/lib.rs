//! # math2d
//!
//! Mathematical tools for 2D graphics and animation: a vector type, scalar
//! helpers, Perlin noise and RGB/HSV color utilities.
//!
//! # Architecture
//!
//! ```text
//!                 math2d
//!                    |
//!          +---------+---------+
//!          |                   |
//!     math2d-color        math2d-math
//!          |                   |
//!          +---------+---------+
//!                    |
//!               math2d-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use math2d::prelude::*;
//!
//! let pos = Vector2D::new(35.0, 365.0);
//! let target = Vector2D::new(200.0, 100.0);
//! let mid = pos.lerp(target, 0.5);
//! assert_eq!(mid, Vector2D::new(117.5, 232.5));
//!
//! let height = utils2d::noise(mid.x * 0.02, mid.y * 0.02);
//! assert!(height.abs() <= 1.0);
//!
//! let t = utils2d::normalize(height, -1.0, 1.0)?;
//! let shade = utils2d::lerp_hue([0.0, 0.0, 1.0, 1.0], [1.0, 0.0, 0.0, 1.0], t);
//! assert_eq!(shade[3], 1.0);
//! # Ok::<(), math2d::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Vector2D`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use math2d_color::Color;
pub use math2d_core::{Error, Result};
pub use math2d_math::Vector2D;

/// Stateless scalar, noise and color helpers in one namespace.
///
/// # Usage
///
/// ```rust
/// use math2d::utils2d;
///
/// assert_eq!(utils2d::constrain(1.5, 0.0, 1.0), 1.0);
/// assert!(utils2d::map(5.0, 2.0, 2.0, 0.0, 10.0).is_err());
/// assert!((utils2d::to_deg(utils2d::HALF_PI) - 90.0).abs() < 1e-12);
/// ```
pub mod utils2d {
    pub use math2d_core::consts::*;

    pub use math2d_math::{
        clamp, constrain, distance, inverse_lerp, lerp, map, map_unchecked, noise, noise1,
        normalize, unit_noise,
    };

    pub use math2d_color::{
        color_from_slice, grayscale, grayscale_with, greyscale, hsv_to_rgb, lerp_hue, lerp_rgb,
        rgb_to_hsv,
    };
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use math2d::prelude::*;
/// ```
pub mod prelude {
    pub use crate::utils2d;
    pub use crate::{Color, Error, Result, Vector2D};
}
