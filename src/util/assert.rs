//! `check!`-family macros for runtime self-checks.
//!
//! Unlike [`assert!`], a failed check does not panic: it returns early from the enclosing
//! function with an [`anyhow::Error`] describing the call site and the operands. The enclosing
//! function must therefore return [`anyhow::Result`].
//!
//! ```
//! use dmath::core::prelude::*;
//! use dmath::{check_almost_eq, check_eq};
//!
//! fn run() -> Result<()> {
//!     check_eq!(Vec3::new(3.0, 4.0, 0.0).len(), 5.0);
//!     check_almost_eq!(Vec3::right().slerp(Vec3::up(), 1.0), Vec3::up());
//!     Ok(())
//! }
//! assert!(run().is_ok());
//! ```

pub fn assert_partial_ord<T: PartialOrd>(_: &T) {}
pub fn assert_partial_eq<T: PartialEq>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check {
    ($lhs:expr) => {{
        let value = $lhs;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            return ::std::result::Result::Err($crate::core::prelude::anyhow!(
                "check failed: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
            ));
        }
    }};
    ($lhs:expr, $extra:expr) => {{
        let value = $lhs;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            return ::std::result::Result::Err($crate::core::prelude::anyhow!(
                "check failed: {}: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                $extra
            ));
        }
    }};
}
#[allow(unused_imports)]
pub use check;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_eq(&lhs);
        if lhs != rhs {
            return ::std::result::Result::Err($crate::core::prelude::anyhow!(
                "check failed: {}: {} == {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            ));
        }
    }};
}
#[allow(unused_imports)]
pub use check_eq;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if !(lhs < rhs) {
            return ::std::result::Result::Err($crate::core::prelude::anyhow!(
                "check failed: {}: {} < {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            ));
        }
    }};
}
#[allow(unused_imports)]
pub use check_lt;

/// Checks approximate equality through the operands' `almost_eq` method.
#[allow(unused_macros)]
#[macro_export]
macro_rules! check_almost_eq {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        if !lhs.almost_eq(rhs) {
            return ::std::result::Result::Err($crate::core::prelude::anyhow!(
                "check failed: {}: {} ~= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            ));
        }
    }};
}
#[allow(unused_imports)]
pub use check_almost_eq;

/// Checks that a `Result` is an `Err` matching the given pattern.
#[allow(unused_macros)]
#[macro_export]
macro_rules! check_err {
    ($lhs:expr, $pattern:pat) => {{
        let value = $lhs;
        if !matches!(value, ::std::result::Result::Err($pattern)) {
            return ::std::result::Result::Err($crate::core::prelude::anyhow!(
                "check failed: {}: {} is Err({}): {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($pattern),
                value
            ));
        }
    }};
}
#[allow(unused_imports)]
pub use check_err;
