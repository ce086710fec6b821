use crate::core::prelude::*;
use crate::util::linalg::common::impl_vector;

/// A 3D vector using 64-bit floating point coordinates.
///
/// The rotation-aware operations ([`slerp`](Vec3::slerp), [`rotate_towards`](Vec3::rotate_towards),
/// [`ortho_normalize`](Vec3::ortho_normalize)) are built on [`Mat4x4::from_axis_angle`] and live
/// in the `rotation` module.
///
/// # Examples
///
/// ```
/// use dmath::core::prelude::*;
///
/// let v = Vec3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.len(), 5.0);
/// assert_eq!(v.normed(), Vec3::new(0.6, 0.8, 0.0));
/// assert_eq!(Vec3::right().cross(Vec3::up()), Vec3::forward());
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl_vector!(Vec3, 3, [0 => x, 1 => y, 2 => z]);

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }

    pub fn right() -> Vec3 {
        Vec3 {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        }
    }
    pub fn left() -> Vec3 {
        Vec3 {
            x: -1.0,
            y: 0.0,
            z: 0.0,
        }
    }
    pub fn up() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        }
    }
    pub fn down() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: -1.0,
            z: 0.0,
        }
    }
    pub fn forward() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }
    pub fn back() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: -1.0,
        }
    }
    pub fn one() -> Vec3 {
        Vec3::splat(1.0)
    }
    pub fn zero() -> Vec3 {
        Vec3::splat(0.0)
    }
    pub fn splat(v: f64) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    #[must_use]
    pub fn dot(&self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product, following the right-hand rule.
    #[must_use]
    pub fn cross(&self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Returns the unsigned angle to `to` in radians, in the range `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` first, so nearly (anti-)parallel inputs cannot produce
    /// `NaN` through rounding.
    #[must_use]
    pub fn angle_between(&self, to: Vec3) -> f64 {
        dm_float::clamp_unit(self.normed().dot(to.normed())).acos()
    }
    /// Returns the unsigned angle to `to` in degrees, in the range `[0, 180]`.
    #[must_use]
    pub fn angle(&self, to: Vec3) -> f64 {
        self.angle_between(to).to_degrees()
    }

    /// Projects this vector onto the plane through the origin with the given normal.
    #[must_use]
    pub fn project_on_plane(&self, normal: Vec3) -> Vec3 {
        *self - self.project(normal)
    }

    /// Reflects the vector off the plane defined by `normal`, which should be normalised.
    #[must_use]
    pub fn reflect(&self, normal: Vec3) -> Vec3 {
        -2.0 * normal.dot(*self) * normal + *self
    }

    /// Returns a unit vector orthogonal to this one, which must be normalised.
    ///
    /// Works in whichever coordinate plane this vector is least aligned with, so the
    /// intermediate length never degenerates.
    #[must_use]
    pub fn ortho_normal_vector_fast(&self) -> Vec3 {
        if self.z.abs() > ORTHO_PLANE_THRESHOLD {
            let k = 1.0 / (self.y * self.y + self.z * self.z).sqrt();
            Vec3 {
                x: 0.0,
                y: -self.z * k,
                z: self.y * k,
            }
        } else {
            let k = 1.0 / (self.x * self.x + self.y * self.y).sqrt();
            Vec3 {
                x: -self.y * k,
                y: self.x * k,
                z: 0.0,
            }
        }
    }

    /// Zero-fills `w`.
    #[must_use]
    pub fn widen(&self) -> Vec4 {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w: 0.0,
        }
    }
    /// Drops `z`.
    #[must_use]
    pub fn narrow(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }
}

impl From<Vec3> for Vec4 {
    fn from(value: Vec3) -> Self {
        value.widen()
    }
}
