//! Behaviour shared by [`Vec2`](super::Vec2), [`Vec3`](super::Vec3) and [`Vec4`](super::Vec4).
//!
//! The metric and interpolation family is written once, generically over [`VectorSpace`], and
//! the [`impl_vector!`] macro stamps out the operators and the public methods delegating to it.

use crate::core::prelude::*;
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, Div, Mul, Sub};

pub(crate) trait VectorSpace:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    fn origin() -> Self;
    fn inner(self, other: Self) -> f64;
}

pub(crate) fn len<V: VectorSpace>(v: V) -> f64 {
    v.inner(v).sqrt()
}

pub(crate) fn normed<V: VectorSpace>(v: V) -> V {
    if v == V::origin() {
        V::origin()
    } else {
        v / len(v)
    }
}

pub(crate) fn lerp<V: VectorSpace>(from: V, to: V, t: f64) -> V {
    if t <= 0.0 {
        from
    } else if t >= 1.0 {
        to
    } else {
        lerp_unclamped(from, to, t)
    }
}

pub(crate) fn lerp_unclamped<V: VectorSpace>(from: V, to: V, t: f64) -> V {
    from + (to - from) * t
}

pub(crate) fn move_towards<V: VectorSpace>(current: V, target: V, max_delta: f64) -> V {
    let delta = target - current;
    let dist = len(delta);
    if dist <= max_delta || dist == 0.0 {
        target
    } else {
        current + delta / dist * max_delta
    }
}

pub(crate) fn project<V: VectorSpace>(v: V, on_normal: V) -> V {
    if v == V::origin() || on_normal == V::origin() {
        return V::origin();
    }
    let on_len = len(on_normal);
    on_normal * (v.inner(on_normal) / (on_len * on_len))
}

pub(crate) fn clamp_len<V: VectorSpace>(v: V, max_len: f64) -> V {
    if max_len * max_len >= v.inner(v) {
        v
    } else {
        normed(v) * max_len
    }
}

pub(crate) fn smooth_damp<V: VectorSpace>(
    current: V,
    target: V,
    velocity: &mut V,
    smooth_time: f64,
    max_speed: Option<f64>,
    delta_time: f64,
) -> V {
    let smooth_time = smooth_time.max(SMOOTH_TIME_MIN);
    let omega = 2.0 / smooth_time;
    let x = omega * delta_time;
    let exp = 1.0 / (1.0 + x + SMOOTH_DAMP_COEFF_2 * x * x + SMOOTH_DAMP_COEFF_3 * x * x * x);

    let original_target = target;
    let mut change = current - target;
    if let Some(max_speed) = max_speed {
        change = clamp_len(change, max_speed * smooth_time);
    }
    let target = current - change;

    let temp = (*velocity + change * omega) * delta_time;
    *velocity = (*velocity - temp * omega) * exp;
    let mut output = target + (change + temp) * exp;

    // Overshot: the output lies beyond the target as seen from the starting point.
    if (original_target - current).inner(output - original_target) > 0.0 {
        output = original_target;
        *velocity = (output - original_target) / delta_time;
    }
    output
}

/// Writes `(a, b, ...)`, applying the formatter's precision to every component.
pub(crate) fn fmt_components(f: &mut Formatter<'_>, components: &[f64]) -> fmt::Result {
    let precision = f.precision();
    write!(f, "(")?;
    for (i, &c) in components.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        let c = dm_float::force_positive_zero(c);
        if let Some(p) = precision {
            write!(f, "{c:.p$}")?;
        } else {
            write!(f, "{c}")?;
        }
    }
    write!(f, ")")
}

/// Implements the operators, conversions and the shared metric/interpolation methods for a
/// vector struct whose fields are all `f64`.
macro_rules! impl_vector {
    ($name:ident, $len:literal, [$($idx:literal => $field:ident),+ $(,)?]) => {
        impl $name {
            /// Returns the component at `index`, or [`LinalgError::IndexOutOfRange`].
            pub fn component(&self, index: usize) -> LinalgResult<f64> {
                match index {
                    $($idx => Ok(self.$field),)+
                    _ => Err(LinalgError::index(stringify!($name), index, $len)),
                }
            }
            pub fn component_mut(&mut self, index: usize) -> LinalgResult<&mut f64> {
                match index {
                    $($idx => Ok(&mut self.$field),)+
                    _ => Err(LinalgError::index(stringify!($name), index, $len)),
                }
            }

            /// Returns the squared length. Cheaper than [`len`](Self::len) for comparisons.
            #[must_use]
            pub fn len_squared(&self) -> f64 {
                self.dot(*self)
            }
            #[must_use]
            pub fn len(&self) -> f64 {
                $crate::util::linalg::common::len(*self)
            }

            /// Returns a unit vector in the same direction, or the zero vector unchanged.
            #[must_use]
            pub fn normed(&self) -> $name {
                $crate::util::linalg::common::normed(*self)
            }
            /// In-place form of [`normed`](Self::normed).
            pub fn normalise(&mut self) {
                *self = self.normed();
            }

            #[must_use]
            pub fn dist(&self, other: $name) -> f64 {
                (*self - other).len()
            }

            /// Linear interpolation with `t` clamped to `[0, 1]`. The endpoints are returned
            /// exactly for `t <= 0` and `t >= 1`.
            #[must_use]
            pub fn lerp(&self, to: $name, t: f64) -> $name {
                $crate::util::linalg::common::lerp(*self, to, t)
            }
            #[must_use]
            pub fn lerp_unclamped(&self, to: $name, t: f64) -> $name {
                $crate::util::linalg::common::lerp_unclamped(*self, to, t)
            }

            /// Moves towards `target` by at most `max_delta`, snapping to it once within reach.
            #[must_use]
            pub fn move_towards(&self, target: $name, max_delta: f64) -> $name {
                $crate::util::linalg::common::move_towards(*self, target, max_delta)
            }

            /// Gradually moves towards `target` like a critically damped spring.
            ///
            /// `velocity` is the spring state; pass the same value back in on every call.
            /// `smooth_time` is roughly the time to reach the target and is floored at
            /// [`SMOOTH_TIME_MIN`]. `max_speed` optionally limits how fast the value may move.
            /// If the step would overshoot the target, the target is returned and `velocity`
            /// is reset.
            #[must_use]
            pub fn smooth_damp(
                &self,
                target: $name,
                velocity: &mut $name,
                smooth_time: f64,
                max_speed: Option<f64>,
                delta_time: f64,
            ) -> $name {
                $crate::util::linalg::common::smooth_damp(
                    *self,
                    target,
                    velocity,
                    smooth_time,
                    max_speed,
                    delta_time,
                )
            }

            /// Projects this vector onto `on_normal`. Returns zero if either vector is zero.
            #[must_use]
            pub fn project(&self, on_normal: $name) -> $name {
                $crate::util::linalg::common::project(*self, on_normal)
            }

            #[must_use]
            pub fn clamp_len(&self, max_len: f64) -> $name {
                $crate::util::linalg::common::clamp_len(*self, max_len)
            }

            #[must_use]
            pub fn component_max(&self, other: $name) -> $name {
                $name { $($field: self.$field.max(other.$field)),+ }
            }
            #[must_use]
            pub fn component_min(&self, other: $name) -> $name {
                $name { $($field: self.$field.min(other.$field)),+ }
            }

            /// Component-wise product.
            #[must_use]
            pub fn component_wise(&self, other: $name) -> $name {
                $name { $($field: self.$field * other.$field),+ }
            }
            /// In-place form of [`component_wise`](Self::component_wise).
            pub fn scale(&mut self, by: $name) {
                $(self.$field *= by.$field;)+
            }

            /// Checks if the vector is approximately equal to another vector, i.e. the length
            /// of their difference is less than [`EPSILON`].
            pub fn almost_eq(&self, rhs: $name) -> bool {
                (*self - rhs).len() < EPSILON
            }
            pub fn is_finite(&self) -> bool {
                $(self.$field.is_finite())&&+
            }

            #[must_use]
            pub fn to_array(&self) -> [f64; $len] {
                [$(self.$field),+]
            }

            /// Exact conversion from the host's single-precision representation.
            pub fn from_host(value: [f32; $len]) -> $name {
                $name { $($field: f64::from(value[$idx])),+ }
            }
            /// Lossy conversion to the host's single-precision representation.
            #[must_use]
            pub fn to_host(&self) -> [f32; $len] {
                [$(dm_float::narrow(self.$field)),+]
            }
            /// Like [`to_host`](Self::to_host), but fails if a component overflows `f32`.
            pub fn to_host_checked(&self) -> Result<[f32; $len]> {
                Ok([$(dm_float::narrow_checked(self.$field)
                    .with_context(|| format!("{}::to_host_checked({})", stringify!($name), self))?),+])
            }
        }

        impl $crate::util::linalg::common::VectorSpace for $name {
            fn origin() -> Self {
                $name { $($field: 0.0),+ }
            }
            fn inner(self, other: Self) -> f64 {
                self.dot(other)
            }
        }

        impl num_traits::Zero for $name {
            fn zero() -> Self {
                $name { $($field: 0.0),+ }
            }
            fn is_zero(&self) -> bool {
                $(self.$field == 0.0)&&+
            }
        }

        impl ::std::ops::Index<usize> for $name {
            type Output = f64;

            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("{}", LinalgError::index(stringify!($name), index, $len)),
                }
            }
        }
        impl ::std::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match self.component_mut(index) {
                    Ok(component) => component,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl From<[f64; $len]> for $name {
            fn from(value: [f64; $len]) -> Self {
                $name { $($field: value[$idx]),+ }
            }
        }
        impl From<$name> for [f64; $len] {
            fn from(value: $name) -> Self {
                value.to_array()
            }
        }
        impl From<[f32; $len]> for $name {
            fn from(value: [f32; $len]) -> Self {
                $name::from_host(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::util::linalg::common::fmt_components(f, &self.to_array())
            }
        }

        impl ::std::ops::Add<$name> for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> Self::Output {
                $name { $($field: self.$field + rhs.$field),+ }
            }
        }
        impl ::std::ops::AddAssign<$name> for $name {
            fn add_assign(&mut self, rhs: $name) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl ::std::ops::Sub<$name> for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> Self::Output {
                $name { $($field: self.$field - rhs.$field),+ }
            }
        }
        impl ::std::ops::SubAssign<$name> for $name {
            fn sub_assign(&mut self, rhs: $name) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl ::std::iter::Sum<$name> for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> Self {
                iter.fold(<$name as num_traits::Zero>::zero(), |acc, v| acc + v)
            }
        }

        impl ::std::ops::Mul<f64> for $name {
            type Output = $name;

            fn mul(self, rhs: f64) -> Self::Output {
                $name { $($field: self.$field * rhs),+ }
            }
        }
        impl ::std::ops::Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }
        impl ::std::ops::MulAssign<f64> for $name {
            fn mul_assign(&mut self, rhs: f64) {
                $(self.$field *= rhs;)+
            }
        }

        impl ::std::ops::Div<f64> for $name {
            type Output = $name;

            fn div(self, rhs: f64) -> Self::Output {
                $name { $($field: self.$field / rhs),+ }
            }
        }
        impl ::std::ops::DivAssign<f64> for $name {
            fn div_assign(&mut self, rhs: f64) {
                $(self.$field /= rhs;)+
            }
        }

        impl ::std::ops::Neg for $name {
            type Output = $name;

            fn neg(self) -> Self::Output {
                $name { $($field: -self.$field),+ }
            }
        }
    };
}
pub(crate) use impl_vector;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_damp_approaches_without_overshoot() {
        let target = Vec2::new(10.0, 0.0);
        let mut current = Vec2::zero();
        let mut velocity = Vec2::zero();
        let mut last_dist = current.dist(target);
        for _ in 0..200 {
            current = smooth_damp(current, target, &mut velocity, 0.3, None, 1.0 / 60.0);
            let dist = current.dist(target);
            assert!(dist <= last_dist + 1e-12);
            assert!(current.x <= target.x);
            last_dist = dist;
        }
        assert!(current.almost_eq(target));
    }

    #[test]
    fn smooth_damp_respects_max_speed() {
        let target = Vec2::new(100.0, 0.0);
        let mut velocity = Vec2::zero();
        let next = smooth_damp(Vec2::zero(), target, &mut velocity, 1.0, Some(1.0), 0.1);
        // With the change clamped to max_speed * smooth_time = 1, the spring only ever sees a
        // target one unit away.
        assert!(next.x < 1.0);
        assert!(velocity.x <= 1.0);
    }

    #[test]
    fn smooth_damp_snaps_on_overshoot() {
        let target = Vec2::new(1.0, 0.0);
        let mut velocity = Vec2::new(1000.0, 0.0);
        let next = smooth_damp(Vec2::zero(), target, &mut velocity, 0.1, None, 0.1);
        assert_eq!(next, target);
        assert_eq!(velocity, Vec2::zero());
    }

    #[test]
    fn smooth_damp_floors_smooth_time() {
        let target = Vec2::new(1.0, 1.0);
        let mut velocity = Vec2::zero();
        let next = smooth_damp(Vec2::zero(), target, &mut velocity, 0.0, None, 0.5);
        assert!(next.is_finite());
        assert!(velocity.is_finite());
    }

    #[test]
    fn clamp_len_keeps_short_vectors() {
        let v = Vec3::new(1.0, 2.0, 2.0);
        assert_eq!(clamp_len(v, 3.0), v);
        assert_eq!(clamp_len(v, 10.0), v);
        assert!(clamp_len(v, 1.5).almost_eq(Vec3::new(0.5, 1.0, 1.0)));
    }

    #[test]
    fn display_precision() {
        let v = Vec4::new(1.23456, -0.0, 2.0, 7.5);
        assert_eq!(format!("{v}"), "(1.23456, 0, 2, 7.5)");
        assert_eq!(format!("{v:.2}"), "(1.23, 0.00, 2.00, 7.50)");
    }
}
