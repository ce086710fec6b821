//! Double-precision 2D/3D/4D vectors and 4x4 transform matrices.
//!
//! Everything commonly needed is re-exported from [`core::prelude`]:
//!
//! ```
//! use dmath::core::prelude::*;
//!
//! let v = Vec3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.len(), 5.0);
//! assert_eq!(Mat4x4::translate(v).multiply_point(Vec3::zero()), v);
//! ```

pub mod core;
pub mod util;
