//! Rotation-aware [`Vec3`] operations, built on [`Mat4x4::from_axis_angle`].

use crate::core::prelude::*;
use std::f64::consts::PI;

/// Something that can produce a 3D rotation as a [`Mat4x4`], e.g. a quaternion type.
///
/// [`Mat4x4::trs`] accepts any implementor.
pub trait ToRotationMatrix {
    fn to_rotation_matrix(&self) -> Mat4x4;
}

impl ToRotationMatrix for Mat4x4 {
    fn to_rotation_matrix(&self) -> Mat4x4 {
        *self
    }
}

/// A rotation of `radians` about `axis`.
///
/// ```
/// use dmath::core::prelude::*;
///
/// let rot = AxisAngle::new(Vec3::up(), std::f64::consts::FRAC_PI_2);
/// let m = Mat4x4::trs(Vec3::zero(), &rot, Vec3::one());
/// assert!(m.multiply_vector(Vec3::forward()).almost_eq(Vec3::right()));
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct AxisAngle {
    pub axis: Vec3,
    pub radians: f64,
}

impl AxisAngle {
    pub fn new(axis: Vec3, radians: f64) -> AxisAngle {
        AxisAngle { axis, radians }
    }
    pub fn from_degrees(axis: Vec3, degrees: f64) -> AxisAngle {
        AxisAngle {
            axis,
            radians: degrees.to_radians(),
        }
    }
}

impl ToRotationMatrix for AxisAngle {
    /// The axis is normalised first, so the result is always a pure rotation (or the identity,
    /// for a zero axis and zero angle).
    fn to_rotation_matrix(&self) -> Mat4x4 {
        Mat4x4::from_axis_angle(self.axis.normed(), self.radians)
    }
}

impl Vec3 {
    /// Spherically interpolates between `self` and `to`, with `t` clamped to `[0, 1]`.
    ///
    /// The direction follows the great-circle arc between the two vectors and the magnitude is
    /// interpolated linearly. Falls back to [`lerp`](Vec3::lerp) if either vector is zero.
    #[must_use]
    pub fn slerp(&self, to: Vec3, t: f64) -> Vec3 {
        self.slerp_unclamped(to, t.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn slerp_unclamped(&self, to: Vec3, t: f64) -> Vec3 {
        let lhs_mag = self.len();
        let rhs_mag = to.len();
        if lhs_mag <= 0.0 || rhs_mag <= 0.0 {
            return self.lerp_unclamped(to, t);
        }

        let lhs_norm = *self / lhs_mag;
        let rhs_norm = to / rhs_mag;
        let dot = lhs_norm.dot(rhs_norm);
        if dot > 1.0 {
            return self.lerp_unclamped(to, t);
        }
        let axis = lhs_norm.cross(rhs_norm).normed();
        // The cross product can vanish before the cosine reaches -1.
        if axis == Vec3::zero() && dot > 0.0 {
            return self.lerp_unclamped(to, t);
        }
        let direction = if dot <= -1.0 || axis == Vec3::zero() {
            // Anti-parallel: any perpendicular axis gives a valid half-turn.
            let axis = lhs_norm.ortho_normal_vector_fast();
            Mat4x4::from_axis_angle(axis, PI * t).multiply_vector(lhs_norm)
        } else {
            Mat4x4::from_axis_angle(axis, dot.acos() * t).multiply_vector(lhs_norm)
        };
        direction * (lhs_mag + (rhs_mag - lhs_mag) * t)
    }

    /// Rotates towards `target` by at most `max_radians`, while moving the magnitude towards
    /// `target`'s by at most `max_magnitude_delta`.
    ///
    /// Nearly parallel or near-zero inputs fall back to
    /// [`move_towards`](Vec3::move_towards) with `max_magnitude_delta`.
    #[must_use]
    pub fn rotate_towards(&self, target: Vec3, max_radians: f64, max_magnitude_delta: f64) -> Vec3 {
        let lhs_mag = self.len();
        let rhs_mag = target.len();
        if lhs_mag <= EPSILON || rhs_mag <= EPSILON {
            return self.move_towards(target, max_magnitude_delta);
        }

        let lhs_norm = *self / lhs_mag;
        let rhs_norm = target / rhs_mag;
        let dot = lhs_norm.dot(rhs_norm);
        if dot > 1.0 - EPSILON {
            return self.move_towards(target, max_magnitude_delta);
        }
        let angle = dm_float::clamp_unit(dot).acos();
        let direction = if dot < -1.0 + EPSILON {
            let axis = lhs_norm.ortho_normal_vector_fast();
            Mat4x4::from_axis_angle(axis, max_radians.min(angle)).multiply_vector(lhs_norm)
        } else {
            let axis = lhs_norm.cross(rhs_norm).normed();
            Mat4x4::from_axis_angle(axis, max_radians.min(angle)).multiply_vector(lhs_norm)
        };
        direction * clamped_move(lhs_mag, rhs_mag, max_magnitude_delta)
    }

    /// Makes `normal` unit length and `tangent` a unit vector perpendicular to it (Gram-Schmidt).
    ///
    /// A (near-)zero `normal` becomes [`right`](Vec3::right); a `tangent` that collapses
    /// (parallel to `normal`) is replaced by an arbitrary perpendicular.
    pub fn ortho_normalize(normal: &mut Vec3, tangent: &mut Vec3) {
        let mag = normal.len();
        if mag > EPSILON {
            *normal /= mag;
        } else {
            *normal = Vec3::right();
        }

        *tangent -= normal.dot(*tangent) * *normal;
        let mag = tangent.len();
        if mag > EPSILON {
            *tangent /= mag;
        } else {
            *tangent = normal.ortho_normal_vector_fast();
        }
    }

    /// As [`ortho_normalize`](Vec3::ortho_normalize), and also makes `binormal` perpendicular to
    /// both. A collapsed `binormal` becomes `normal × tangent`.
    pub fn ortho_normalize3(normal: &mut Vec3, tangent: &mut Vec3, binormal: &mut Vec3) {
        Vec3::ortho_normalize(normal, tangent);

        *binormal -= normal.dot(*binormal) * *normal + tangent.dot(*binormal) * *tangent;
        let mag = binormal.len();
        if mag > EPSILON {
            *binormal /= mag;
        } else {
            *binormal = normal.cross(*tangent);
        }
    }
}
