pub mod assert;
pub mod linalg;
pub mod log;

pub mod dm_float {
    use anyhow::{bail, Result};
    use num_traits::{ToPrimitive, Zero};

    pub fn force_positive_zero(x: f64) -> f64 {
        if x.is_zero() { 0.0 } else { x }
    }

    /// Rounds to the nearest `f32`. Values beyond the `f32` range become infinite.
    #[allow(clippy::cast_possible_truncation)]
    pub fn narrow(x: f64) -> f32 {
        x as f32
    }

    /// Like [`narrow`], but fails if a finite value does not fit in an `f32`.
    /// Non-finite inputs are passed through unchanged.
    pub fn narrow_checked(x: f64) -> Result<f32> {
        if !x.is_finite() {
            return Ok(narrow(x));
        }
        match x.to_f32() {
            Some(narrowed) if narrowed.is_finite() => Ok(narrowed),
            _ => bail!("{x} does not fit in range of f32"),
        }
    }

    /// Clamps `x` into `[-1, 1]` so rounding error cannot push it out of the domain of `acos`.
    pub fn clamp_unit(x: f64) -> f64 {
        x.clamp(-1.0, 1.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn narrow_and_widen() {
            assert_eq!(narrow(0.5), 0.5_f32);
            assert_eq!(narrow(1e300), f32::INFINITY);
            assert_eq!(f64::from(narrow(0.1)), f64::from(0.1_f32));
        }

        #[test]
        fn narrow_checked_range() {
            assert_eq!(narrow_checked(2.5).unwrap(), 2.5_f32);
            assert!(narrow_checked(1e300).is_err());
            assert!(narrow_checked(-1e300).is_err());
            assert!(narrow_checked(f64::NAN).unwrap().is_nan());
            assert_eq!(narrow_checked(f64::INFINITY).unwrap(), f32::INFINITY);
        }

        #[test]
        fn positive_zero() {
            assert!(force_positive_zero(-0.0).is_sign_positive());
            assert_eq!(force_positive_zero(-2.0), -2.0);
        }

        #[test]
        fn clamp_unit_domain() {
            assert_eq!(clamp_unit(1.0000000000000002), 1.0);
            assert_eq!(clamp_unit(-3.0), -1.0);
            assert_eq!(clamp_unit(0.25), 0.25);
        }
    }
}
