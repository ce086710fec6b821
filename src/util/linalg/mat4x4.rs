use crate::core::prelude::*;
use num_traits::{One, Zero};
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 4x4 matrix for 3D transformations in homogeneous coordinates.
///
/// Elements are named `m<row><column>`:
/// ```text
/// | m00 m01 m02 m03 |
/// | m10 m11 m12 m13 |
/// | m20 m21 m22 m23 |
/// | m30 m31 m32 m33 |
/// ```
/// Points are column vectors, so the translation lives in `m03`, `m13` and `m23`. The flat
/// index used by [`element`](Mat4x4::element) and `Index<usize>` is column-major:
/// `index = row + column * 4`.
///
/// # Examples
///
/// ```
/// use dmath::core::prelude::*;
///
/// let m = Mat4x4::translate(Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(m[(0, 3)], 1.0);
/// assert_eq!(m[12], 1.0);
/// assert_eq!(m.multiply_point(Vec3::zero()), Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(m.multiply_vector(Vec3::one()), Vec3::one());
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[must_use]
pub struct Mat4x4 {
    pub m00: f64,
    pub m01: f64,
    pub m02: f64,
    pub m03: f64,
    pub m10: f64,
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m20: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
    pub m30: f64,
    pub m31: f64,
    pub m32: f64,
    pub m33: f64,
}

impl Mat4x4 {
    pub fn zero() -> Mat4x4 {
        Mat4x4::default()
    }
    /// Creates an identity matrix, representing no transformation.
    pub fn identity() -> Mat4x4 {
        Mat4x4 {
            m00: 1.0,
            m11: 1.0,
            m22: 1.0,
            m33: 1.0,
            ..Mat4x4::default()
        }
    }
    /// Exact comparison with [`identity`](Mat4x4::identity).
    pub fn is_identity(&self) -> bool {
        *self == Mat4x4::identity()
    }

    fn from_rows_array(rows: [[f64; 4]; 4]) -> Mat4x4 {
        let [[m00, m01, m02, m03], [m10, m11, m12, m13], [m20, m21, m22, m23], [m30, m31, m32, m33]] =
            rows;
        Mat4x4 {
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
            m30,
            m31,
            m32,
            m33,
        }
    }
    fn to_rows_array(self) -> [[f64; 4]; 4] {
        [
            [self.m00, self.m01, self.m02, self.m03],
            [self.m10, self.m11, self.m12, self.m13],
            [self.m20, self.m21, self.m22, self.m23],
            [self.m30, self.m31, self.m32, self.m33],
        ]
    }

    /// Builds a matrix from 16 values in column-major order.
    pub fn from_cols_array(values: [f64; 16]) -> Mat4x4 {
        let mut rows = [[0.0; 4]; 4];
        for (index, value) in values.into_iter().enumerate() {
            rows[index % 4][index / 4] = value;
        }
        Mat4x4::from_rows_array(rows)
    }
    /// Returns the 16 values in column-major order.
    #[must_use]
    pub fn to_cols_array(&self) -> [f64; 16] {
        [
            self.m00, self.m10, self.m20, self.m30, self.m01, self.m11, self.m21, self.m31,
            self.m02, self.m12, self.m22, self.m32, self.m03, self.m13, self.m23, self.m33,
        ]
    }

    /// Exact conversion from the host's single-precision, column-major representation
    /// (`host[column][row]`).
    pub fn from_host(host: [[f32; 4]; 4]) -> Mat4x4 {
        let mut values = [0.0; 16];
        for (value, host_value) in values.iter_mut().zip(host.into_iter().flatten()) {
            *value = f64::from(host_value);
        }
        Mat4x4::from_cols_array(values)
    }
    /// Lossy conversion to the host's single-precision, column-major representation.
    #[must_use]
    pub fn to_host(&self) -> [[f32; 4]; 4] {
        let values = self.to_cols_array();
        let mut host = [[0.0; 4]; 4];
        for (index, value) in values.into_iter().enumerate() {
            host[index / 4][index % 4] = dm_float::narrow(value);
        }
        host
    }

    fn check_flat(index: usize) -> LinalgResult<(usize, usize)> {
        if index >= 16 {
            Err(LinalgError::index("Mat4x4 element", index, 16))
        } else {
            Ok((index % 4, index / 4))
        }
    }

    fn field(&self, row: usize, col: usize) -> LinalgResult<&f64> {
        [
            [&self.m00, &self.m01, &self.m02, &self.m03],
            [&self.m10, &self.m11, &self.m12, &self.m13],
            [&self.m20, &self.m21, &self.m22, &self.m23],
            [&self.m30, &self.m31, &self.m32, &self.m33],
        ]
        .into_iter()
        .nth(row)
        .ok_or(LinalgError::index("Mat4x4 row", row, 4))?
        .into_iter()
        .nth(col)
        .ok_or(LinalgError::index("Mat4x4 column", col, 4))
    }
    fn field_mut(&mut self, row: usize, col: usize) -> LinalgResult<&mut f64> {
        [
            [&mut self.m00, &mut self.m01, &mut self.m02, &mut self.m03],
            [&mut self.m10, &mut self.m11, &mut self.m12, &mut self.m13],
            [&mut self.m20, &mut self.m21, &mut self.m22, &mut self.m23],
            [&mut self.m30, &mut self.m31, &mut self.m32, &mut self.m33],
        ]
        .into_iter()
        .nth(row)
        .ok_or(LinalgError::index("Mat4x4 row", row, 4))?
        .into_iter()
        .nth(col)
        .ok_or(LinalgError::index("Mat4x4 column", col, 4))
    }

    fn zip_with(self, rhs: Mat4x4, f: impl Fn(f64, f64) -> f64) -> Mat4x4 {
        let mut values = self.to_cols_array();
        for (value, rhs_value) in values.iter_mut().zip(rhs.to_cols_array()) {
            *value = f(*value, rhs_value);
        }
        Mat4x4::from_cols_array(values)
    }

    /// Returns the element at `(row, col)`. Row and column are validated separately.
    pub fn get(&self, row: usize, col: usize) -> LinalgResult<f64> {
        self.field(row, col).copied()
    }
    pub fn get_mut(&mut self, row: usize, col: usize) -> LinalgResult<&mut f64> {
        self.field_mut(row, col)
    }
    /// Returns the element at the column-major flat `index` (0 to 15).
    pub fn element(&self, index: usize) -> LinalgResult<f64> {
        let (row, col) = Self::check_flat(index)?;
        self.get(row, col)
    }
    pub fn element_mut(&mut self, index: usize) -> LinalgResult<&mut f64> {
        let (row, col) = Self::check_flat(index)?;
        self.get_mut(row, col)
    }

    pub fn row(&self, i: usize) -> LinalgResult<Vec4> {
        self.to_rows_array()
            .get(i)
            .map(|&row| Vec4::from(row))
            .ok_or_else(|| LinalgError::index("Mat4x4 row", i, 4))
    }
    pub fn column(&self, i: usize) -> LinalgResult<Vec4> {
        self.transpose()
            .to_rows_array()
            .get(i)
            .map(|&col| Vec4::from(col))
            .ok_or_else(|| LinalgError::index("Mat4x4 column", i, 4))
    }
    pub fn set_row(&mut self, i: usize, v: Vec4) -> LinalgResult<()> {
        let mut rows = self.to_rows_array();
        *rows
            .get_mut(i)
            .ok_or_else(|| LinalgError::index("Mat4x4 row", i, 4))? = v.to_array();
        *self = Mat4x4::from_rows_array(rows);
        Ok(())
    }
    pub fn set_column(&mut self, i: usize, v: Vec4) -> LinalgResult<()> {
        let mut transposed = self.transpose();
        transposed
            .set_row(i, v)
            .map_err(|_| LinalgError::index("Mat4x4 column", i, 4))?;
        *self = transposed.transpose();
        Ok(())
    }

    #[allow(clippy::suspicious_operation_groupings)]
    pub fn determinant(&self) -> f64 {
        let Mat4x4 {
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
            m30,
            m31,
            m32,
            m33,
        } = *self;
        m03 * m12 * m21 * m30 - m02 * m13 * m21 * m30 - m03 * m11 * m22 * m30
            + m01 * m13 * m22 * m30
            + m02 * m11 * m23 * m30
            - m01 * m12 * m23 * m30
            - m03 * m12 * m20 * m31
            + m02 * m13 * m20 * m31
            + m03 * m10 * m22 * m31
            - m00 * m13 * m22 * m31
            - m02 * m10 * m23 * m31
            + m00 * m12 * m23 * m31
            + m03 * m11 * m20 * m32
            - m01 * m13 * m20 * m32
            - m03 * m10 * m21 * m32
            + m00 * m13 * m21 * m32
            + m01 * m10 * m23 * m32
            - m00 * m11 * m23 * m32
            - m02 * m11 * m20 * m33
            + m01 * m12 * m20 * m33
            + m02 * m10 * m21 * m33
            - m00 * m12 * m21 * m33
            - m01 * m10 * m22 * m33
            + m00 * m11 * m22 * m33
    }

    /// Inverts the matrix by Gauss-Jordan elimination on `[M | I]` without row pivoting.
    ///
    /// A zero on the diagonal at any step (which includes every singular matrix, but also e.g.
    /// permutation matrices) gives a non-finite result rather than an error; use
    /// [`try_inverse`](Mat4x4::try_inverse) where that matters.
    pub fn inverse(&self) -> Mat4x4 {
        let mut augmented = [[0.0; 8]; 4];
        for (i, row) in self.to_rows_array().into_iter().enumerate() {
            augmented[i][..4].copy_from_slice(&row);
            augmented[i][4 + i] = 1.0;
        }

        for k in 0..4 {
            let pivot = augmented[k][k];
            if pivot == 0.0 {
                crate::warn_every_seconds!(
                    WARN_INTERVAL_SECS,
                    "Mat4x4::inverse(): zero pivot in column {k}, result will not be finite: {:?}",
                    self
                );
            }
            if pivot != 1.0 {
                augmented[k][k] = 1.0;
                for value in &mut augmented[k][k + 1..] {
                    *value /= pivot;
                }
            }
            let pivot_row = augmented[k];
            for (q, row) in augmented.iter_mut().enumerate() {
                if q == k {
                    continue;
                }
                let factor = row[k];
                for (value, pivot_value) in row.iter_mut().zip(pivot_row) {
                    *value -= factor * pivot_value;
                }
            }
        }

        let mut rows = [[0.0; 4]; 4];
        for (row, augmented_row) in rows.iter_mut().zip(augmented) {
            row.copy_from_slice(&augmented_row[4..]);
        }
        Mat4x4::from_rows_array(rows)
    }

    /// Inverts the matrix by Gauss-Jordan elimination with partial pivoting.
    ///
    /// ```
    /// use dmath::core::prelude::*;
    ///
    /// let m = Mat4x4::scale(Vec3::new(2.0, 4.0, 8.0));
    /// assert_eq!(m.try_inverse(), Ok(Mat4x4::scale(Vec3::new(0.5, 0.25, 0.125))));
    /// assert_eq!(Mat4x4::zero().try_inverse(), Err(LinalgError::SingularMatrix));
    /// ```
    pub fn try_inverse(&self) -> LinalgResult<Mat4x4> {
        let mut augmented = [[0.0; 8]; 4];
        for (i, row) in self.to_rows_array().into_iter().enumerate() {
            augmented[i][..4].copy_from_slice(&row);
            augmented[i][4 + i] = 1.0;
        }

        for k in 0..4 {
            let pivot_index = (k..4)
                .max_by(|&a, &b| augmented[a][k].abs().total_cmp(&augmented[b][k].abs()))
                .unwrap_or(k);
            let pivot = augmented[pivot_index][k];
            if pivot == 0.0 || !pivot.is_finite() {
                return Err(LinalgError::SingularMatrix);
            }
            augmented.swap(k, pivot_index);
            for value in &mut augmented[k] {
                *value /= pivot;
            }
            let pivot_row = augmented[k];
            for (q, row) in augmented.iter_mut().enumerate() {
                if q == k {
                    continue;
                }
                let factor = row[k];
                for (value, pivot_value) in row.iter_mut().zip(pivot_row) {
                    *value -= factor * pivot_value;
                }
            }
        }

        let mut rows = [[0.0; 4]; 4];
        for (row, augmented_row) in rows.iter_mut().zip(augmented) {
            row.copy_from_slice(&augmented_row[4..]);
        }
        let inverse = Mat4x4::from_rows_array(rows);
        if inverse.is_finite() {
            Ok(inverse)
        } else {
            Err(LinalgError::SingularMatrix)
        }
    }

    pub fn transpose(&self) -> Mat4x4 {
        Mat4x4 {
            m00: self.m00,
            m01: self.m10,
            m02: self.m20,
            m03: self.m30,
            m10: self.m01,
            m11: self.m11,
            m12: self.m21,
            m13: self.m31,
            m20: self.m02,
            m21: self.m12,
            m22: self.m22,
            m23: self.m32,
            m30: self.m03,
            m31: self.m13,
            m32: self.m23,
            m33: self.m33,
        }
    }

    /// Transforms a point, including the perspective divide by the resulting `w`.
    #[must_use]
    pub fn multiply_point(&self, v: Vec3) -> Vec3 {
        let w = 1.0 / (self.m30 * v.x + self.m31 * v.y + self.m32 * v.z + self.m33);
        self.multiply_point3x4(v) * w
    }
    /// Transforms a point by an affine matrix; the bottom row is ignored.
    #[must_use]
    pub fn multiply_point3x4(&self, v: Vec3) -> Vec3 {
        Vec3 {
            x: self.m00 * v.x + self.m01 * v.y + self.m02 * v.z + self.m03,
            y: self.m10 * v.x + self.m11 * v.y + self.m12 * v.z + self.m13,
            z: self.m20 * v.x + self.m21 * v.y + self.m22 * v.z + self.m23,
        }
    }
    /// Transforms a direction; translation is ignored.
    #[must_use]
    pub fn multiply_vector(&self, v: Vec3) -> Vec3 {
        Vec3 {
            x: self.m00 * v.x + self.m01 * v.y + self.m02 * v.z,
            y: self.m10 * v.x + self.m11 * v.y + self.m12 * v.z,
            z: self.m20 * v.x + self.m21 * v.y + self.m22 * v.z,
        }
    }

    pub fn scale(v: Vec3) -> Mat4x4 {
        Mat4x4 {
            m00: v.x,
            m11: v.y,
            m22: v.z,
            m33: 1.0,
            ..Mat4x4::default()
        }
    }
    pub fn translate(v: Vec3) -> Mat4x4 {
        Mat4x4 {
            m03: v.x,
            m13: v.y,
            m23: v.z,
            ..Mat4x4::identity()
        }
    }

    /// Creates an orthographic projection mapping the given box onto `[-1, 1]` on each axis.
    pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, z_near: f64, z_far: f64) -> Mat4x4 {
        let dx = right - left;
        let dy = top - bottom;
        let dz = z_far - z_near;
        Mat4x4 {
            m00: 2.0 / dx,
            m03: -(right + left) / dx,
            m11: 2.0 / dy,
            m13: -(top + bottom) / dy,
            m22: -2.0 / dz,
            m23: -(z_far + z_near) / dz,
            ..Mat4x4::identity()
        }
    }

    /// Creates a perspective projection. `fov_degrees` is the vertical field of view.
    pub fn perspective(fov_degrees: f64, aspect: f64, z_near: f64, z_far: f64) -> Mat4x4 {
        let radians = (fov_degrees / 2.0).to_radians();
        let cotangent = radians.cos() / radians.sin();
        let dz = z_near - z_far;
        Mat4x4 {
            m00: cotangent / aspect,
            m11: cotangent,
            m22: (z_far + z_near) / dz,
            m23: 2.0 * z_near * z_far / dz,
            m32: -1.0,
            ..Mat4x4::default()
        }
    }

    /// Creates a translation, rotation and scaling matrix: scale first, then rotate, then
    /// translate.
    pub fn trs(pos: Vec3, rot: &impl ToRotationMatrix, scale: Vec3) -> Mat4x4 {
        let mut m = rot.to_rotation_matrix();
        m.m00 *= scale.x;
        m.m10 *= scale.x;
        m.m20 *= scale.x;
        m.m01 *= scale.y;
        m.m11 *= scale.y;
        m.m21 *= scale.y;
        m.m02 *= scale.z;
        m.m12 *= scale.z;
        m.m22 *= scale.z;
        m.m03 = pos.x;
        m.m13 = pos.y;
        m.m23 = pos.z;
        m
    }
    pub fn set_trs(&mut self, pos: Vec3, rot: &impl ToRotationMatrix, scale: Vec3) {
        *self = Mat4x4::trs(pos, rot, scale);
    }

    /// Not available: always returns [`LinalgError::UnsupportedOperation`].
    pub fn look_at(_from: Vec3, _to: Vec3, _up: Vec3) -> LinalgResult<Mat4x4> {
        Err(LinalgError::UnsupportedOperation("Mat4x4::look_at"))
    }

    /// Creates a rotation of `radians` about `axis` (Rodrigues' formula). The axis is used as
    /// given and should be normalised.
    pub fn from_axis_angle(axis: Vec3, radians: f64) -> Mat4x4 {
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis;
        Mat4x4 {
            m00: x * x * t + c,
            m01: x * y * t - z * s,
            m02: z * x * t + y * s,
            m10: x * y * t + z * s,
            m11: y * y * t + c,
            m12: y * z * t - x * s,
            m20: z * x * t - y * s,
            m21: y * z * t + x * s,
            m22: z * z * t + c,
            ..Mat4x4::identity()
        }
    }
    pub fn set_axis_angle(&mut self, axis: Vec3, radians: f64) {
        *self = Mat4x4::from_axis_angle(axis, radians);
    }

    /// Checks if every element is within [`EPSILON`] of the corresponding element of `rhs`.
    pub fn almost_eq(&self, rhs: Mat4x4) -> bool {
        self.to_cols_array()
            .into_iter()
            .zip(rhs.to_cols_array())
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }
    pub fn is_finite(&self) -> bool {
        self.to_cols_array().into_iter().all(f64::is_finite)
    }
}

impl One for Mat4x4 {
    fn one() -> Self {
        Self::identity()
    }
}

impl Zero for Mat4x4 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Index<usize> for Mat4x4 {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match Self::check_flat(index).and_then(|(row, col)| self.field(row, col)) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}
impl IndexMut<usize> for Mat4x4 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.element_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}
impl Index<(usize, usize)> for Mat4x4 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.field(row, col) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}
impl IndexMut<(usize, usize)> for Mat4x4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.field_mut(row, col) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Add<Mat4x4> for Mat4x4 {
    type Output = Mat4x4;

    fn add(self, rhs: Mat4x4) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}
impl AddAssign<Mat4x4> for Mat4x4 {
    fn add_assign(&mut self, rhs: Mat4x4) {
        *self = *self + rhs;
    }
}
impl Sub<Mat4x4> for Mat4x4 {
    type Output = Mat4x4;

    fn sub(self, rhs: Mat4x4) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}
impl SubAssign<Mat4x4> for Mat4x4 {
    fn sub_assign(&mut self, rhs: Mat4x4) {
        *self = *self - rhs;
    }
}
impl Neg for Mat4x4 {
    type Output = Mat4x4;

    fn neg(self) -> Self::Output {
        Mat4x4::zero() - self
    }
}

impl Mul<Vec4> for Mat4x4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.m00 * rhs.x + self.m01 * rhs.y + self.m02 * rhs.z + self.m03 * rhs.w,
            y: self.m10 * rhs.x + self.m11 * rhs.y + self.m12 * rhs.z + self.m13 * rhs.w,
            z: self.m20 * rhs.x + self.m21 * rhs.y + self.m22 * rhs.z + self.m23 * rhs.w,
            w: self.m30 * rhs.x + self.m31 * rhs.y + self.m32 * rhs.z + self.m33 * rhs.w,
        }
    }
}

impl Mul<Mat4x4> for Mat4x4 {
    type Output = Mat4x4;

    fn mul(self, rhs: Mat4x4) -> Self::Output {
        let lhs = self.to_rows_array();
        let rhs = rhs.to_rows_array();
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = lhs[i][0] * rhs[0][j]
                    + lhs[i][1] * rhs[1][j]
                    + lhs[i][2] * rhs[2][j]
                    + lhs[i][3] * rhs[3][j];
            }
        }
        Mat4x4::from_rows_array(rows)
    }
}
impl MulAssign<Mat4x4> for Mat4x4 {
    fn mul_assign(&mut self, rhs: Mat4x4) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Mat4x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let text = self
            .to_rows_array()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&value| {
                        let value = dm_float::force_positive_zero(value);
                        match precision {
                            Some(p) => format!("{value:.p$}"),
                            None => format!("{value}"),
                        }
                    })
                    .join("\t")
            })
            .join("\n");
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Mat4x4 {
        Mat4x4::from_rows_array([
            [4.0, 7.0, 2.0, 3.0],
            [0.0, 5.0, 0.0, 1.0],
            [1.0, 0.0, 3.0, 0.0],
            [2.0, 2.0, 1.0, 6.0],
        ])
    }

    fn permutation() -> Mat4x4 {
        Mat4x4::from_rows_array([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    #[test]
    fn identity() {
        let m = Mat4x4::identity();
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(m[(row, col)], expected);
            }
        }
        assert!(m.is_identity());
        assert!(!Mat4x4::zero().is_identity());
        assert_eq!(m.determinant(), 1.0);
        assert_eq!(m.inverse(), m);
        assert_eq!(m.try_inverse(), Ok(m));
        assert_eq!(<Mat4x4 as One>::one(), m);
        assert!(<Mat4x4 as Zero>::zero().is_zero());
    }

    #[test]
    fn flat_index_is_column_major() {
        let m = sample();
        assert_eq!(m[1], m.m10);
        assert_eq!(m[4], m.m01);
        assert_eq!(m[14], m.m23);
        assert_eq!(m.element(7), Ok(m.m31));
        assert_eq!(m.get(3, 1), Ok(m.m31));
        let values = m.to_cols_array();
        for (index, value) in values.into_iter().enumerate() {
            assert_eq!(m[index], value);
            assert_eq!(m[(index % 4, index / 4)], value);
        }
        assert_eq!(Mat4x4::from_cols_array(values), m);
    }

    #[test]
    fn index_errors() {
        let mut m = Mat4x4::identity();
        assert_eq!(
            m.element(16),
            Err(LinalgError::IndexOutOfRange {
                kind: "Mat4x4 element",
                index: 16,
                len: 16
            })
        );
        assert_eq!(
            m.get(4, 0),
            Err(LinalgError::IndexOutOfRange {
                kind: "Mat4x4 row",
                index: 4,
                len: 4
            })
        );
        // (0, 5) would be a valid flat offset, but the column is out of range.
        assert_eq!(
            m.get(0, 5),
            Err(LinalgError::IndexOutOfRange {
                kind: "Mat4x4 column",
                index: 5,
                len: 4
            })
        );
        assert!(m.get_mut(2, 4).is_err());
        assert!(m.element_mut(20).is_err());
        assert!(m.row(4).is_err());
        assert!(m.column(4).is_err());
        assert!(m.set_row(4, Vec4::one()).is_err());
        assert!(m.set_column(7, Vec4::one()).is_err());
        assert!(m.is_identity());
    }

    #[test]
    #[should_panic(expected = "invalid Mat4x4 column index: 4")]
    fn pair_index_panics() {
        let m = Mat4x4::identity();
        let _ = m[(1, 4)];
    }

    #[test]
    #[should_panic(expected = "invalid Mat4x4 element index: 16")]
    fn flat_index_mut_panics() {
        let mut m = Mat4x4::identity();
        m[16] = 1.0;
    }

    #[test]
    fn last_element() {
        let mut m = sample();
        assert_eq!(m.get(3, 3), Ok(6.0));
        assert_eq!(m[15], 6.0);
        m[(3, 3)] = -1.0;
        assert_eq!(m.m33, -1.0);
        assert!(m.get(3, 4).is_err());
        assert!(m.get(4, 3).is_err());
    }

    #[test]
    fn add_and_sub() {
        let m = sample();
        assert_eq!(m + Mat4x4::zero(), m);
        assert_eq!(m + <Mat4x4 as Zero>::zero(), m);
        assert!((m - m).is_zero());
        assert!((-m + m).is_zero());
        assert_eq!((-m).m01, -7.0);

        let sum = m + Mat4x4::identity();
        assert_eq!(sum.m00, 5.0);
        assert_eq!(sum.m01, 7.0);
        assert_eq!(sum.m33, 7.0);
        assert_eq!(sum - Mat4x4::identity(), m);

        let mut acc = Mat4x4::zero();
        acc += m;
        acc += m;
        acc -= m;
        assert_eq!(acc, m);
    }

    #[test]
    fn element_mutation() {
        let mut m = Mat4x4::zero();
        m[(1, 2)] = 5.0;
        m[3] = 2.0;
        *m.get_mut(0, 0).unwrap() = 1.0;
        *m.element_mut(15).unwrap() = 9.0;
        assert_eq!(m.m12, 5.0);
        assert_eq!(m.m30, 2.0);
        assert_eq!(m.m00, 1.0);
        assert_eq!(m.m33, 9.0);
    }

    #[test]
    fn rows_and_columns() {
        let mut m = sample();
        assert_eq!(m.row(0), Ok(Vec4::new(4.0, 7.0, 2.0, 3.0)));
        assert_eq!(m.column(0), Ok(Vec4::new(4.0, 0.0, 1.0, 2.0)));
        m.set_row(1, Vec4::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(m.row(1), Ok(Vec4::new(1.0, 2.0, 3.0, 4.0)));
        m.set_column(3, Vec4::new(-1.0, -2.0, -3.0, -4.0)).unwrap();
        assert_eq!(m.column(3), Ok(Vec4::new(-1.0, -2.0, -3.0, -4.0)));
        assert_eq!(m.m13, -2.0);
        assert_eq!(m.m12, 3.0);
    }

    #[test]
    fn determinant() {
        assert_eq!(sample().determinant(), 240.0);
        assert_eq!(Mat4x4::zero().determinant(), 0.0);
        assert_eq!(Mat4x4::scale(Vec3::new(2.0, 3.0, 4.0)).determinant(), 24.0);
        assert_eq!(permutation().determinant(), 1.0);
        assert_eq!(sample().transpose().determinant(), 240.0);
    }

    #[test]
    fn inverse() {
        let m = sample();
        let inv = m.inverse();
        assert!((m * inv).almost_eq(Mat4x4::identity()));
        assert!((inv * m).almost_eq(Mat4x4::identity()));
        assert_abs_diff_eq!(inv.determinant(), 1.0 / 240.0, epsilon = 1e-12);
        assert!(m.try_inverse().unwrap().almost_eq(inv));

        let t = Mat4x4::translate(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(t.inverse(), Mat4x4::translate(Vec3::new(-1.0, 2.0, -3.0)));
    }

    #[test]
    fn inverse_without_pivoting() {
        let p = permutation();
        assert!(!p.inverse().is_finite());
        let inv = p.try_inverse().unwrap();
        assert_eq!(inv, p);
        assert!((p * inv).is_identity());
    }

    #[test]
    fn singular() {
        let mut m = sample();
        m.set_row(3, m.row(0).unwrap() * 2.0).unwrap();
        assert_eq!(m.try_inverse(), Err(LinalgError::SingularMatrix));
        assert_eq!(Mat4x4::zero().try_inverse(), Err(LinalgError::SingularMatrix));
        assert!(!Mat4x4::zero().inverse().is_finite());
    }

    #[test]
    fn transpose() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().m01, m.m10);
        assert_eq!(m.transpose().row(2), m.column(2));
        assert_eq!(Mat4x4::identity().transpose(), Mat4x4::identity());
    }

    #[test]
    fn multiply_point_and_vector() {
        let t = Mat4x4::translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.multiply_point(Vec3::zero()), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.multiply_point3x4(Vec3::one()), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(t.multiply_vector(Vec3::one()), Vec3::one());

        let mut homogeneous = Mat4x4::identity();
        homogeneous.m33 = 2.0;
        assert_eq!(homogeneous.multiply_point(Vec3::new(2.0, 4.0, 6.0)), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(homogeneous.multiply_point3x4(Vec3::new(2.0, 4.0, 6.0)), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn products() {
        let s = Mat4x4::scale(Vec3::new(2.0, 3.0, 4.0));
        let t = Mat4x4::translate(Vec3::new(1.0, 2.0, 3.0));
        let st = t * s;
        assert_eq!(st.multiply_point(Vec3::one()), Vec3::new(3.0, 5.0, 7.0));
        assert_eq!(st * Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(3.0, 5.0, 7.0, 1.0));
        assert_eq!(st * Vec4::new(1.0, 1.0, 1.0, 0.0), Vec4::new(2.0, 3.0, 4.0, 0.0));
        assert_eq!(Mat4x4::identity() * sample(), sample());
        assert_eq!(sample() * Mat4x4::identity(), sample());

        let mut m = t;
        m *= s;
        assert_eq!(m, st);
        assert_ne!(s * t, t * s);
    }

    #[test]
    fn ortho() {
        let m = Mat4x4::ortho(0.0, 4.0, 0.0, 2.0, 0.0, 10.0);
        assert_eq!(m.m00, 0.5);
        assert_eq!(m.m03, -1.0);
        assert_eq!(m.m11, 1.0);
        assert_eq!(m.m13, -1.0);
        assert_eq!(m.m22, -0.2);
        assert_eq!(m.m23, -1.0);
        assert_eq!(m.m33, 1.0);
        assert_eq!(m.multiply_point(Vec3::new(4.0, 2.0, -10.0)), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(m.multiply_point(Vec3::zero()), Vec3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn perspective() {
        let m = Mat4x4::perspective(90.0, 2.0, 1.0, 3.0);
        assert_abs_diff_eq!(m.m00, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(m.m11, 1.0, epsilon = 1e-12);
        assert_eq!(m.m22, -2.0);
        assert_eq!(m.m23, -3.0);
        assert_eq!(m.m32, -1.0);
        assert_eq!(m.m33, 0.0);
        // The near plane maps to -1 and the far plane to 1.
        assert_abs_diff_eq!(m.multiply_point(Vec3::new(0.0, 0.0, -1.0)).z, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.multiply_point(Vec3::new(0.0, 0.0, -3.0)).z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn trs_without_rotation() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let scale = Vec3::new(2.0, 3.0, 4.0);
        let m = Mat4x4::trs(pos, &Mat4x4::identity(), scale);
        assert_eq!(m, Mat4x4::translate(pos) * Mat4x4::scale(scale));

        let mut n = Mat4x4::zero();
        n.set_trs(pos, &Mat4x4::identity(), scale);
        assert_eq!(n, m);
    }

    #[test]
    fn look_at_unavailable() {
        assert_eq!(
            Mat4x4::look_at(Vec3::zero(), Vec3::forward(), Vec3::up()),
            Err(LinalgError::UnsupportedOperation("Mat4x4::look_at"))
        );
    }

    #[test]
    fn axis_angle() {
        let m = Mat4x4::from_axis_angle(Vec3::up(), std::f64::consts::FRAC_PI_2);
        assert!(m.multiply_vector(Vec3::forward()).almost_eq(Vec3::right()));
        assert!(m.multiply_vector(Vec3::right()).almost_eq(Vec3::back()));
        assert!(m.multiply_vector(Vec3::up()).almost_eq(Vec3::up()));
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        assert!((m * m.transpose()).almost_eq(Mat4x4::identity()));

        let mut n = Mat4x4::zero();
        n.set_axis_angle(Vec3::up(), 0.0);
        assert!(n.is_identity());
    }

    #[test]
    fn host_round_trip() {
        let m = sample();
        let host = m.to_host();
        // Column-major: host[column][row].
        assert_eq!(host[0], [4.0, 0.0, 1.0, 2.0]);
        assert_eq!(host[3][0], 3.0);
        assert_eq!(Mat4x4::from_host(host), m);

        let mut fine = sample();
        fine.m01 = 0.1;
        let back = Mat4x4::from_host(fine.to_host());
        assert_ne!(back, fine);
        assert!(back.almost_eq(fine));
    }

    #[test]
    fn display() {
        let m = Mat4x4::translate(Vec3::new(1.5, -2.0, 0.0));
        assert_eq!(
            format!("{m}"),
            "1\t0\t0\t1.5\n0\t1\t0\t-2\n0\t0\t1\t0\n0\t0\t0\t1"
        );
        assert_eq!(
            format!("{:.1}", Mat4x4::identity()).lines().next(),
            Some("1.0\t0.0\t0.0\t0.0")
        );
    }
}
