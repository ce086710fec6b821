use crate::core::prelude::*;
use crate::util::linalg::common::impl_vector;

/// A 2D vector using 64-bit floating point coordinates.
///
/// Equality is exact component-wise comparison; use [`Vec2::almost_eq`] for a tolerant
/// comparison.
///
/// # Examples
///
/// ```
/// use dmath::core::prelude::*;
///
/// let v = Vec2::new(1.0, 0.0);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.component(1), Ok(0.0));
/// assert!(v.component(2).is_err());
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl_vector!(Vec2, 2, [0 => x, 1 => y]);

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Returns a unit vector pointing to the right (positive x-axis).
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (positive y-axis).
    pub fn up() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    pub fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    pub fn down() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    pub fn splat(v: f64) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    #[must_use]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the unsigned angle to `to` in degrees, in the range `[0, 180]`.
    ///
    /// ```
    /// use dmath::core::prelude::*;
    /// assert_eq!(Vec2::right().angle(Vec2::up()), 90.0);
    /// ```
    #[must_use]
    pub fn angle(&self, to: Vec2) -> f64 {
        dm_float::clamp_unit(self.normed().dot(to.normed()))
            .acos()
            .to_degrees()
    }

    /// Reflects the vector off the plane (line) defined by `normal`, which should be normalised.
    #[must_use]
    pub fn reflect(&self, normal: Vec2) -> Vec2 {
        -2.0 * normal.dot(*self) * normal + *self
    }

    /// Zero-fills `z`.
    #[must_use]
    pub fn widen(&self) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z: 0.0,
        }
    }
    /// Zero-fills `z` and `w`.
    #[must_use]
    pub fn widen_to_vec4(&self) -> Vec4 {
        Vec4 {
            x: self.x,
            y: self.y,
            z: 0.0,
            w: 0.0,
        }
    }
}

impl From<Vec2> for Vec3 {
    fn from(value: Vec2) -> Self {
        value.widen()
    }
}
impl From<Vec2> for Vec4 {
    fn from(value: Vec2) -> Self {
        value.widen_to_vec4()
    }
}
