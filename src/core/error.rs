//! Error type for the fallible parts of the linear algebra API.

use thiserror::Error;

/// Errors returned by component accessors and by the matrix constructors that can fail.
///
/// These signal programmer error rather than a transient condition. Numerically degenerate
/// inputs (normalising a zero vector, projecting onto a zero vector, inverting a singular matrix
/// through [`Mat4x4::inverse`](crate::util::linalg::Mat4x4::inverse)) never produce an error;
/// they return a defined fallback value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A component, row, column or flat matrix index was outside the valid range.
    #[error("invalid {kind} index: {index} (expected 0..{len})")]
    IndexOutOfRange {
        /// What was being indexed, e.g. `"Vec3"` or `"Mat4x4 row"`.
        kind: &'static str,
        index: usize,
        /// Number of valid indices.
        len: usize,
    },

    /// The operation is declared but deliberately not available.
    #[error("operation not available: {0}")]
    UnsupportedOperation(&'static str),

    /// [`Mat4x4::try_inverse`](crate::util::linalg::Mat4x4::try_inverse) found no usable pivot.
    #[error("matrix is singular")]
    SingularMatrix,
}

impl LinalgError {
    pub(crate) fn index(kind: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }
}

pub type LinalgResult<T> = Result<T, LinalgError>;
