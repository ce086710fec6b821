use crate::core::prelude::*;
use crate::util::linalg::common::impl_vector;

/// A 4D vector using 64-bit floating point coordinates, mostly used as a homogeneous point or
/// as a row/column of a [`Mat4x4`].
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl_vector!(Vec4, 4, [0 => x, 1 => y, 2 => z, 3 => w]);

impl Vec4 {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    pub fn one() -> Vec4 {
        Vec4::splat(1.0)
    }
    pub fn zero() -> Vec4 {
        Vec4::splat(0.0)
    }
    pub fn splat(v: f64) -> Vec4 {
        Vec4 {
            x: v,
            y: v,
            z: v,
            w: v,
        }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
    }

    #[must_use]
    pub fn dot(&self, other: Vec4) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Drops `w`.
    #[must_use]
    pub fn narrow(&self) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
    /// Drops `z` and `w`.
    #[must_use]
    pub fn narrow_to_vec2(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn vec4_basics() {
        let v = Vec4::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(v.len_squared(), 25.0);
        assert_eq!(v.len(), 5.0);
        assert_eq!(v.dot(Vec4::one()), 9.0);
        assert_eq!(v.normed(), Vec4::new(0.2, 0.4, 0.4, 0.8));
        assert_eq!(Vec4::zero().normed(), Vec4::zero());
        assert_eq!(v.dist(v), 0.0);
        assert_eq!(v * 0.5, Vec4::new(0.5, 1.0, 1.0, 2.0));
        assert_eq!(v - v, Vec4::zero());

        let mut w = Vec4::zero();
        w.set(1.0, 2.0, 3.0, 4.0);
        assert_eq!(w.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn vec4_indexing() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        v[3] = 1.0;
        assert_eq!(v.w, 1.0);
        assert!(matches!(
            v.component(4),
            Err(LinalgError::IndexOutOfRange { kind: "Vec4", index: 4, len: 4 })
        ));
    }

    #[test]
    #[should_panic(expected = "invalid Vec4 index: 9")]
    fn vec4_index_mut_panics() {
        let mut v = Vec4::zero();
        v[9] = 1.0;
    }

    #[test]
    fn vec4_interpolation() {
        let a = Vec4::zero();
        let b = Vec4::new(4.0, 8.0, -4.0, 2.0);
        assert_eq!(a.lerp(b, 0.25), Vec4::new(1.0, 2.0, -1.0, 0.5));
        assert_eq!(a.move_towards(b, 100.0), b);
        assert_abs_diff_eq!(a.move_towards(b, 1.0).len(), 1.0, epsilon = 1e-12);
        assert_eq!(b.clamp_len(b.len()), b);
    }

    #[test]
    fn vec4_conversions() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.narrow(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.narrow_to_vec2(), Vec2::new(1.0, 2.0));
        assert_eq!(Vec4::from_host([1.0, 2.0, 3.0, 4.0]), v);
        assert_eq!(v.to_host_checked().unwrap(), [1.0_f32, 2.0, 3.0, 4.0]);
        let err = Vec4::new(0.0, 0.0, 0.0, f64::MAX).to_host_checked().unwrap_err();
        assert!(format!("{err:#}").contains("Vec4::to_host_checked"));
    }
}
