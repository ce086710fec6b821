/// Tolerance used by `almost_eq` and the degenerate-input checks in the rotation helpers.
pub const EPSILON: f64 = 1e-5;

/// Smallest smoothing time accepted by `smooth_damp`.
pub const SMOOTH_TIME_MIN: f64 = 0.0001;
/// Quadratic and cubic coefficients of the `exp(-x)` approximation used by `smooth_damp`.
pub const SMOOTH_DAMP_COEFF_2: f64 = 0.48;
pub const SMOOTH_DAMP_COEFF_3: f64 = 0.235;

/// Above this `|n.z|`, `ortho_normal_vector_fast` works in the y-z plane instead of x-y.
pub const ORTHO_PLANE_THRESHOLD: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Minimum interval between repeated warnings from the same call site.
pub const WARN_INTERVAL_SECS: u64 = 1;
