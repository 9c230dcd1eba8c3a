//! 2D vector value type.
//!
//! [`Vector2D`] represents a point or a direction in the plane. It is a
//! `Copy` value type: every operation returns a new vector and nothing is
//! modified in place. To "update" a vector, rebind it:
//!
//! ```rust
//! use math2d_math::Vector2D;
//!
//! let mut pos = Vector2D::new(10.0, 10.0);
//! let vel = Vector2D::new(1.0, 0.5);
//! pos = pos + vel * 2.0;
//! assert_eq!(pos, Vector2D::new(12.0, 11.0));
//! ```
//!
//! # Coordinate convention
//!
//! The y axis points **down** (screen convention): [`Vector2D::UP`] is
//! `(0, -1)`, and a positive angle passed to [`Vector2D::rotate`] turns a
//! vector clockwise on screen.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use math2d_core::{Error, HALF_PI, Result, TWO_PI};
use rand::Rng;
use tracing::debug;

/// A 2D vector with `f64` components.
///
/// # Example
///
/// ```rust
/// use math2d_math::Vector2D;
///
/// let v = Vector2D::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v[0], 3.0);
///
/// let n = v.normalize();
/// assert!((n.magnitude() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2D {
    /// X component
    pub x: f64,
    /// Y component (grows downward)
    pub y: f64,
}

impl Vector2D {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Up on screen (0, -1).
    pub const UP: Self = Self::new(0.0, -1.0);

    /// Down on screen (0, 1).
    pub const DOWN: Self = Self::new(0.0, 1.0);

    /// Left (-1, 0).
    pub const LEFT: Self = Self::new(-1.0, 0.0);

    /// Right (1, 0).
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shorthand for [`Vector2D::ZERO`].
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Shorthand for [`Vector2D::ONE`].
    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    /// Shorthand for [`Vector2D::UP`].
    #[inline]
    pub const fn up() -> Self {
        Self::UP
    }

    /// Shorthand for [`Vector2D::DOWN`].
    #[inline]
    pub const fn down() -> Self {
        Self::DOWN
    }

    /// Shorthand for [`Vector2D::LEFT`].
    #[inline]
    pub const fn left() -> Self {
        Self::LEFT
    }

    /// Shorthand for [`Vector2D::RIGHT`].
    #[inline]
    pub const fn right() -> Self {
        Self::RIGHT
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Returns a copy with `x` replaced.
    #[inline]
    pub const fn with_x(self, x: f64) -> Self {
        Self::new(x, self.y)
    }

    /// Returns a copy with `y` replaced.
    #[inline]
    pub const fn with_y(self, y: f64) -> Self {
        Self::new(self.x, y)
    }

    /// Unit vector pointing at angle `theta` (radians).
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        Self::from_angle_len(theta, 1.0)
    }

    /// Vector of length `len` pointing at angle `theta` (radians).
    ///
    /// # Example
    ///
    /// ```rust
    /// use math2d_math::Vector2D;
    ///
    /// let v = Vector2D::from_angle_len(0.0, 5.0);
    /// assert_eq!(v, Vector2D::new(5.0, 0.0));
    /// ```
    #[inline]
    pub fn from_angle_len(theta: f64, len: f64) -> Self {
        Self::new(len * theta.cos(), len * theta.sin())
    }

    /// Unit vector at a uniformly random angle, drawn from the thread-local RNG.
    ///
    /// Use [`Vector2D::random_with`] for reproducible output.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Unit vector at a uniformly random angle in `[0, 2π)`, drawn from `rng`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use math2d_math::Vector2D;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let a = Vector2D::random_with(&mut StdRng::seed_from_u64(7));
    /// let b = Vector2D::random_with(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let theta = rng.gen_range(0.0..TWO_PI);
        Self::from_angle(theta)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Creates from the first two elements of a slice.
    ///
    /// Extra elements are ignored. Fails with `InvalidArgument` when fewer
    /// than two elements are given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use math2d_math::Vector2D;
    ///
    /// assert_eq!(Vector2D::from_slice(&[1.0, 2.0, 3.0]).unwrap(), Vector2D::new(1.0, 2.0));
    /// assert!(Vector2D::from_slice(&[1.0]).is_err());
    /// ```
    pub fn from_slice(s: &[f64]) -> Result<Self> {
        match s {
            [x, y, ..] => Ok(Self::new(*x, *y)),
            _ => {
                debug!(len = s.len(), "Vector2D::from_slice: too few elements");
                Err(Error::too_few_elements("Vector2D", 2, s.len()))
            }
        }
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Negated vector `(-x, -y)`.
    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    /// Alias for [`Vector2D::negate`].
    #[inline]
    pub fn reverse(self) -> Self {
        -self
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross (wedge) product: `self.x * other.y - other.x * self.y`.
    ///
    /// This is a signed scalar, the z component of the 3D cross product of
    /// the two vectors lifted into the xy plane.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - other.x * self.y
    }

    /// Alias for [`Vector2D::cross`].
    #[inline]
    pub fn wedge(self, other: Self) -> f64 {
        self.cross(other)
    }

    /// Squared magnitude (avoids sqrt).
    #[inline]
    pub fn squared_magnitude(self) -> f64 {
        self.dot(self)
    }

    /// Magnitude (Euclidean length).
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.squared_magnitude().sqrt()
    }

    /// Alias for [`Vector2D::magnitude`].
    #[inline]
    pub fn length(self) -> f64 {
        self.magnitude()
    }

    /// Squared distance to `other`.
    #[inline]
    pub fn squared_distance(self, other: Self) -> f64 {
        (other - self).squared_magnitude()
    }

    /// Distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Ratio `x / y`. IEEE semantics apply when `y == 0`.
    #[inline]
    pub fn ratio(self) -> f64 {
        self.x / self.y
    }

    /// Caps the magnitude at `max`.
    ///
    /// Returns `self` unchanged when already within bound.
    #[inline]
    pub fn limit(self, max: f64) -> Self {
        let msq = self.squared_magnitude();
        if msq <= max * max {
            return self;
        }
        self * (max / msq.sqrt())
    }

    /// Keeps the magnitude inside `[min, max]`, preserving direction.
    ///
    /// Bounds given in reverse order are swapped. The zero vector has no
    /// direction and stays zero.
    pub fn clamp_magnitude(self, min: f64, max: f64) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let msq = self.squared_magnitude();
        if msq > max * max {
            self.set_magnitude(max)
        } else if msq < min * min {
            self.set_magnitude(min)
        } else {
            self
        }
    }

    /// Rescales to magnitude `mag`.
    ///
    /// A zero-length vector has its length treated as infinite, so the
    /// result is the zero vector rather than `NaN`.
    #[inline]
    pub fn set_magnitude(self, mag: f64) -> Self {
        let mut len = self.magnitude();
        if len == 0.0 {
            len = f64::INFINITY;
        }
        self * (mag / len)
    }

    /// Unit vector in the same direction; zero stays zero.
    #[inline]
    pub fn normalize(self) -> Self {
        self.set_magnitude(1.0)
    }

    /// Alias for [`Vector2D::normalize`].
    #[inline]
    pub fn unit(self) -> Self {
        self.normalize()
    }

    /// Returns true if the magnitude is exactly 1.
    #[inline]
    pub fn is_normalized(self) -> bool {
        self.magnitude() == 1.0
    }

    /// Angle from the positive x axis, in `(-π, π]`.
    #[inline]
    pub fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle from the positive y axis: `HALF_PI - heading()`.
    #[inline]
    pub fn y_heading(self) -> f64 {
        HALF_PI - self.heading()
    }

    /// Unsigned angle between `self` and `other`, in `[0, π]`.
    ///
    /// Either vector being zero is a precondition violation and yields `NaN`.
    #[inline]
    pub fn angle_between(self, other: Self) -> f64 {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        // rounding can push parallel vectors just past ±1
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Returns true if `self` faces away from `other`.
    #[inline]
    pub fn is_opposite(self, other: Self) -> bool {
        self.dot(other) < 0.0
    }

    /// Rotates by `angle` radians; clockwise on screen for positive angles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use math2d_math::Vector2D;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vector2D::RIGHT.rotate(FRAC_PI_2);
    /// assert!(v.x.abs() < 1e-12);
    /// assert!((v.y - 1.0).abs() < 1e-12); // now pointing down the screen
    /// ```
    #[inline]
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates by `angle` radians around `pivot`.
    #[inline]
    pub fn rotate_around(self, pivot: Self, angle: f64) -> Self {
        pivot + (self - pivot).rotate(angle)
    }

    /// Linear interpolation between self and other.
    ///
    /// `amt = 0.0` returns self, `amt = 1.0` returns other. Not clamped.
    #[inline]
    pub fn lerp(self, other: Self, amt: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * amt,
            self.y + (other.y - self.y) * amt,
        )
    }

    /// Per-component parameter `t` such that `self.lerp(other, t) == value`.
    ///
    /// Components where `self` and `other` agree yield `inf` or `NaN`.
    #[inline]
    pub fn inverse_lerp(self, other: Self, value: Self) -> Self {
        (value - self) / (other - self)
    }

    /// Reflects off a surface with the given `normal` (normalized internally).
    ///
    /// # Example
    ///
    /// ```rust
    /// use math2d_math::Vector2D;
    ///
    /// let v = Vector2D::new(1.0, -1.0).reflect(Vector2D::new(0.0, 2.0));
    /// assert_eq!(v, Vector2D::new(1.0, 1.0));
    /// ```
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        let n = normal.normalize();
        self - n * (2.0 * n.dot(self))
    }

    /// Refracts through a surface with `normal` and ratio of indices `eta`.
    ///
    /// Expects normalized inputs. Total internal reflection yields the zero vector.
    #[inline]
    pub fn refract(self, normal: Self, eta: f64) -> Self {
        let d = normal.dot(self);
        let k = 1.0 - eta * eta * (1.0 - d * d);
        if k < 0.0 {
            return Self::ZERO;
        }
        self * eta - normal * (eta * d + k.sqrt())
    }

    /// Perpendicular `(y, -x)`.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to glam DVec2.
    #[inline]
    pub fn to_glam(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }

    /// Creates from glam DVec2.
    #[inline]
    pub fn from_glam(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.x, self.y)
    }
}

impl Index<usize> for Vector2D {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2D index out of bounds: {}", i),
        }
    }
}

impl Neg for Vector2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Vector2D + Vector2D
impl Add for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// Vector2D + f64
impl Add<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::new(self.x + rhs, self.y + rhs)
    }
}

// Vector2D + [f64; 2]
impl Add<[f64; 2]> for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: [f64; 2]) -> Self {
        self + Self::from_array(rhs)
    }
}

// Vector2D - Vector2D
impl Sub for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Vector2D - f64
impl Sub<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.x - rhs, self.y - rhs)
    }
}

// Vector2D - [f64; 2]
impl Sub<[f64; 2]> for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: [f64; 2]) -> Self {
        self - Self::from_array(rhs)
    }
}

// Vector2D * Vector2D (component-wise)
impl Mul for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

// Vector2D * f64
impl Mul<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// Vector2D * [f64; 2]
impl Mul<[f64; 2]> for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: [f64; 2]) -> Self {
        self * Self::from_array(rhs)
    }
}

// f64 * Vector2D
impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    #[inline]
    fn mul(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self * rhs.x, self * rhs.y)
    }
}

// Vector2D / Vector2D (component-wise)
impl Div for Vector2D {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

// Vector2D / f64
impl Div<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

// Vector2D / [f64; 2]
impl Div<[f64; 2]> for Vector2D {
    type Output = Self;

    #[inline]
    fn div(self, rhs: [f64; 2]) -> Self {
        self / Self::from_array(rhs)
    }
}

impl From<[f64; 2]> for Vector2D {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<(f64, f64)> for Vector2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    #[inline]
    fn from(v: Vector2D) -> [f64; 2] {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vector2D {
    type Error = Error;

    #[inline]
    fn try_from(s: &[f64]) -> Result<Self> {
        Self::from_slice(s)
    }
}

impl From<glam::DVec2> for Vector2D {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vector2D> for glam::DVec2 {
    #[inline]
    fn from(v: Vector2D) -> glam::DVec2 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_vec_eq(a: Vector2D, b: Vector2D) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn test_factories() {
        assert_eq!(Vector2D::zero(), Vector2D::new(0.0, 0.0));
        assert_eq!(Vector2D::one(), Vector2D::splat(1.0));
        assert_eq!(Vector2D::up(), Vector2D::new(0.0, -1.0));
        assert_eq!(Vector2D::down(), Vector2D::new(0.0, 1.0));
        assert_eq!(Vector2D::left(), Vector2D::new(-1.0, 0.0));
        assert_eq!(Vector2D::right(), Vector2D::new(1.0, 0.0));
        assert_eq!(Vector2D::default(), Vector2D::ZERO);
    }

    #[test]
    fn test_with_components() {
        let v = Vector2D::new(1.0, 2.0);
        assert_eq!(v.with_x(5.0), Vector2D::new(5.0, 2.0));
        assert_eq!(v.with_y(5.0), Vector2D::new(1.0, 5.0));
        assert_eq!(v, Vector2D::new(1.0, 2.0));
    }

    #[test]
    fn test_ops_vector() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(4.0, 8.0);
        assert_eq!(a + b, Vector2D::new(5.0, 10.0));
        assert_eq!(b - a, Vector2D::new(3.0, 6.0));
        assert_eq!(a * b, Vector2D::new(4.0, 16.0));
        assert_eq!(b / a, Vector2D::new(4.0, 4.0));
    }

    #[test]
    fn test_ops_scalar() {
        let a = Vector2D::new(1.0, 2.0);
        assert_eq!(a + 1.0, Vector2D::new(2.0, 3.0));
        assert_eq!(a - 1.0, Vector2D::new(0.0, 1.0));
        assert_eq!(a * 3.0, Vector2D::new(3.0, 6.0));
        assert_eq!(3.0 * a, Vector2D::new(3.0, 6.0));
        assert_eq!(a / 2.0, Vector2D::new(0.5, 1.0));
    }

    #[test]
    fn test_ops_array() {
        let a = Vector2D::new(1.0, 2.0);
        assert_eq!(a + [1.0, -1.0], Vector2D::new(2.0, 1.0));
        assert_eq!(a - [1.0, -1.0], Vector2D::new(0.0, 3.0));
        assert_eq!(a * [2.0, 0.5], Vector2D::new(2.0, 1.0));
        assert_eq!(a / [2.0, 0.5], Vector2D::new(0.5, 4.0));
    }

    #[test]
    fn test_div_by_zero_is_ieee() {
        let v = Vector2D::new(1.0, 0.0) / 0.0;
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }

    #[test]
    fn test_negate() {
        for (x, y) in [(1.0, 1.0), (3.0, 5.0), (-3.0, 5.0), (3.0, -15.0)] {
            let v = Vector2D::new(x, y);
            assert_eq!(v.negate(), Vector2D::new(-x, -y));
            assert_eq!(v.reverse(), -v);
        }
    }

    #[test]
    fn test_dot_cross() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.cross(b), -2.0);
        assert_eq!(b.wedge(a), 2.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector2D::new(3.0, 4.0).magnitude(), 5.0);
        for (x, mag2) in [(1.0, 2.0), (2.0, 8.0), (3.0, 18.0)] {
            let v = Vector2D::splat(x);
            assert_eq!(v.squared_magnitude(), mag2);
            assert_eq!(v.length(), f64::sqrt(mag2));
        }
    }

    #[test]
    fn test_distance() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(4.0, 5.0);
        assert_eq!(a.squared_distance(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_ratio() {
        assert_eq!(Vector2D::new(3.0, 2.0).ratio(), 1.5);
        assert!(Vector2D::new(1.0, 0.0).ratio().is_infinite());
    }

    #[test]
    fn test_limit() {
        let small = Vector2D::new(1.0, 1.0);
        assert_eq!(small.limit(3.0), small);

        let big = Vector2D::new(3.0, 3.0).limit(3.0);
        assert_relative_eq!(big.magnitude(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(big.heading(), Vector2D::ONE.heading());
    }

    #[test]
    fn test_clamp_magnitude() {
        let v = Vector2D::new(1.0, 1.0);
        assert_eq!(v.clamp_magnitude(1.0, 3.0), v);

        let long = Vector2D::new(3.0, 3.0).clamp_magnitude(1.0, 3.0);
        assert_relative_eq!(long.magnitude(), 3.0, epsilon = 1e-12);

        let short = Vector2D::new(0.5, 0.5).clamp_magnitude(3.0, 1.0);
        assert_relative_eq!(short.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(short.x, short.y);

        assert_eq!(Vector2D::ZERO.clamp_magnitude(1.0, 2.0), Vector2D::ZERO);
    }

    #[test]
    fn test_set_magnitude() {
        let v = Vector2D::new(3.0, 4.0).set_magnitude(10.0);
        assert_vec_eq(v, Vector2D::new(6.0, 8.0));
        assert_eq!(Vector2D::ZERO.set_magnitude(5.0), Vector2D::ZERO);
    }

    #[test]
    fn test_normalize() {
        let v = Vector2D::new(10.0, 10.0);
        let n = v.normalize();
        assert_ne!(n, v);
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_eq!(Vector2D::ZERO.normalize(), Vector2D::ZERO);
        assert!(Vector2D::new(0.0, 2.0).unit().is_normalized());
    }

    #[test]
    fn test_heading() {
        assert_eq!(Vector2D::RIGHT.heading(), 0.0);
        assert_relative_eq!(Vector2D::DOWN.heading(), FRAC_PI_2);
        assert_relative_eq!(Vector2D::LEFT.heading(), PI);
        assert_relative_eq!(Vector2D::RIGHT.y_heading(), FRAC_PI_2);
        assert_relative_eq!(Vector2D::DOWN.y_heading(), 0.0);
    }

    #[test]
    fn test_from_angle() {
        assert_vec_eq(Vector2D::from_angle(FRAC_PI_2), Vector2D::DOWN);
        assert_vec_eq(Vector2D::from_angle_len(PI, 2.0), Vector2D::new(-2.0, 0.0));
    }

    #[test]
    fn test_angle_between() {
        assert_relative_eq!(Vector2D::RIGHT.angle_between(Vector2D::DOWN), FRAC_PI_2);
        assert_relative_eq!(Vector2D::RIGHT.angle_between(Vector2D::LEFT), PI);
        let v = Vector2D::new(0.1, 0.7);
        let parallel = v.angle_between(v * 3.0);
        assert!(!parallel.is_nan());
        assert!(parallel < 1e-6);
        assert!(Vector2D::ZERO.angle_between(Vector2D::ONE).is_nan());
    }

    #[test]
    fn test_is_opposite() {
        assert!(Vector2D::LEFT.is_opposite(Vector2D::RIGHT));
        assert!(!Vector2D::UP.is_opposite(Vector2D::RIGHT));
    }

    #[test]
    fn test_rotate_screen_clockwise() {
        assert_vec_eq(Vector2D::RIGHT.rotate(FRAC_PI_2), Vector2D::DOWN);
        assert_vec_eq(Vector2D::DOWN.rotate(FRAC_PI_2), Vector2D::LEFT);
        assert_vec_eq(Vector2D::RIGHT.rotate(-FRAC_PI_2), Vector2D::UP);
    }

    #[test]
    fn test_rotate_returns_new_vector() {
        let v = Vector2D::new(10.0, 10.0);
        let r = v.rotate(1.0);
        assert_ne!(r, v);
        assert_relative_eq!(r.magnitude(), v.magnitude(), epsilon = 1e-12);
        assert_vec_eq(r.rotate(-1.0), v);
    }

    #[test]
    fn test_rotate_around() {
        let pivot = Vector2D::ONE;
        let v = Vector2D::new(2.0, 1.0);
        assert_vec_eq(v.rotate_around(pivot, FRAC_PI_2), Vector2D::new(1.0, 2.0));
        assert_vec_eq(pivot.rotate_around(pivot, 2.0), pivot);
    }

    #[test]
    fn test_lerp() {
        let a = Vector2D::new(0.0, 10.0);
        let b = Vector2D::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.25), Vector2D::new(2.5, 7.5));
        assert_eq!(a.lerp(b, 2.0), Vector2D::new(20.0, -10.0));
    }

    #[test]
    fn test_inverse_lerp() {
        let a = Vector2D::new(0.0, 10.0);
        let b = Vector2D::new(10.0, 0.0);
        let t = a.inverse_lerp(b, Vector2D::new(2.5, 7.5));
        assert_eq!(t, Vector2D::splat(0.25));
    }

    #[test]
    fn test_reflect() {
        let v = Vector2D::new(3.0, 4.0).reflect(Vector2D::new(-5.0, 0.0));
        assert_vec_eq(v, Vector2D::new(-3.0, 4.0));
    }

    #[test]
    fn test_refract_straight_through() {
        let v = Vector2D::new(0.0, -1.0).refract(Vector2D::new(0.0, 1.0), 1.0);
        assert_vec_eq(v, Vector2D::new(0.0, -1.0));
    }

    #[test]
    fn test_refract_bends() {
        let incident = Vector2D::new(1.0, -1.0).normalize();
        let normal = Vector2D::new(0.0, 1.0);
        let eta = 1.0 / 1.5;
        let r = incident.refract(normal, eta);
        assert_relative_eq!(r.magnitude(), 1.0, epsilon = 1e-12);
        // Snell: sin(theta_t) = eta * sin(theta_i)
        assert_relative_eq!(r.x, eta * incident.x, epsilon = 1e-12);
        assert!(r.y < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        let v = Vector2D::new(1.0, 0.0).refract(Vector2D::new(0.0, 1.0), 1.5);
        assert_eq!(v, Vector2D::ZERO);
    }

    #[test]
    fn test_random_is_unit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = Vector2D::random_with(&mut rng);
            assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(Vector2D::random().magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perp() {
        for x in [1.0, 2.0, 3.0] {
            let v = Vector2D::new(x, x + 1.0);
            assert_eq!(v.perp(), Vector2D::new(x + 1.0, -x));
            assert_eq!(v.perp().dot(v), 0.0);
        }
    }

    #[test]
    fn test_array_roundtrip() {
        let v = Vector2D::new(1.5, -2.0);
        assert_eq!(Vector2D::from_array(v.to_array()), v);
        let a: [f64; 2] = v.into();
        assert_eq!(a, [1.5, -2.0]);
        assert_eq!(Vector2D::from((1.5, -2.0)), v);
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(Vector2D::from_slice(&[1.0, 2.0]).unwrap(), Vector2D::new(1.0, 2.0));
        assert_eq!(Vector2D::try_from(&[1.0, 2.0, 9.0][..]).unwrap(), Vector2D::new(1.0, 2.0));
        assert!(Vector2D::from_slice(&[]).unwrap_err().is_invalid_argument());
        assert!(Vector2D::from_slice(&[1.0]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2D::new(1.0, -2.5).to_string(), "[1.0, -2.5]");
    }

    #[test]
    fn test_index() {
        let v = Vector2D::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Vector2D::new(0.1 + 0.2, 1.0);
        assert_ne!(a, Vector2D::new(0.3, 1.0));
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vector2D::new(1.0, 2.0);
        let g: glam::DVec2 = v.into();
        assert_eq!(g, glam::DVec2::new(1.0, 2.0));
        assert_eq!(Vector2D::from(g), v);
    }
}
