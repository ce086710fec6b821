#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{
        config::*,
        error::{LinalgError, LinalgResult},
    },
    util::{
        assert::*,
        dm_float,
        linalg,
        linalg::{clamped_move, AxisAngle, Mat4x4, ToRotationMatrix, Vec2, Vec3, Vec4},
    },
};
