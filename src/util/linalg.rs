//! Double-precision vectors and 4x4 matrices.
//!
//! [`Vec2`] and [`Vec4`] stand alone, [`Mat4x4`] works on [`Vec3`] and [`Vec4`], and the
//! rotation-aware parts of [`Vec3`] (slerp, rotate-towards, orthonormalisation) are built on
//! [`Mat4x4::from_axis_angle`].

mod common;
mod mat4x4;
mod rotation;
mod vec2;
mod vec3;
mod vec4;

pub use mat4x4::Mat4x4;
pub use rotation::{AxisAngle, ToRotationMatrix};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Moves `value` towards `target` by at most `clamp`, in either direction.
///
/// ```
/// use dmath::util::linalg::clamped_move;
///
/// assert_eq!(clamped_move(1.0, 5.0, 2.0), 3.0);
/// assert_eq!(clamped_move(5.0, 1.0, 2.0), 3.0);
/// assert_eq!(clamped_move(1.0, 2.0, 5.0), 2.0);
/// ```
pub fn clamped_move(value: f64, target: f64, clamp: f64) -> f64 {
    let delta = target - value;
    if delta > 0.0 {
        value + delta.min(clamp)
    } else {
        value - (-delta).min(clamp)
    }
}
