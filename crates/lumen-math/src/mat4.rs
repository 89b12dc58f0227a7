// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{Index, IndexMut, Mul, MulAssign};

use bytemuck::{Pod, Zeroable};

use crate::scalar::FLOAT_EPSILON;
use crate::{MathError, Quat, Vec3, Vec4};

/// Row-major 4×4 matrix.
///
/// - Cell `(row, col)` lives at flat index `row * 4 + col`; `M11` is `(0, 0)`
///   and `M44` is `(3, 3)`.
/// - Vectors are rows multiplied on the left (`v' = v · M`), so the
///   translation of an affine transform occupies the fourth row and
///   `a * b` applies `a` first, then `b`.
///
/// # Examples
/// ```
/// use lumen_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Inversion failure
/// [`Mat4::inverse`] and [`Mat4::invert`] never fail loudly: a singular matrix
/// inverts to [`Mat4::ZERO`]. Equality is exact, so `m.inverse() == Mat4::ZERO`
/// is the check.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat4 {
    data: [f32; 16],
}

const _: () = assert!(core::mem::size_of::<Mat4>() == 64);

impl Mat4 {
    /// All zeroes; also the result of inverting a singular matrix.
    pub const ZERO: Self = Self::splat(0.0);

    /// Ones on the diagonal.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    ]);

    /// Creates a matrix from row-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix with every cell set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self { data: [value; 16] }
    }

    /// Creates a matrix from four rows.
    pub const fn from_rows(r1: Vec4, r2: Vec4, r3: Vec4, r4: Vec4) -> Self {
        Self::new([
            r1.x(), r1.y(), r1.z(), r1.w(), //
            r2.x(), r2.y(), r2.z(), r2.w(), //
            r3.x(), r3.y(), r3.z(), r3.w(), //
            r4.x(), r4.y(), r4.z(), r4.w(), //
        ])
    }

    /// Builds a translation matrix.
    ///
    /// Translation occupies the fourth row.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            tx, ty, tz, 1.0, //
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ])
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity rotation.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Constructs a rotation matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Returns the matrix as a row-major array.
    pub const fn to_array(self) -> [f32; 16] {
        self.data
    }

    #[inline]
    pub(crate) const fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 4 + col]
    }

    /// Cell at `(row, col)`, both in `0..=3`.
    pub fn get(&self, row: usize, col: usize) -> Result<f32, MathError> {
        let idx = cell_index(row, col)?;
        Ok(self.data[idx])
    }

    /// Sets the cell at `(row, col)`, both in `0..=3`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MathError> {
        let idx = cell_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Cell at flat index `0..=15`.
    pub fn get_flat(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::index("Mat4", index, 16))
    }

    /// Sets the cell at flat index `0..=15`.
    pub fn set_flat(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::index("Mat4", index, 16))?;
        *slot = value;
        Ok(())
    }

    fn row(&self, r: usize) -> Vec4 {
        Vec4::new(self.at(r, 0), self.at(r, 1), self.at(r, 2), self.at(r, 3))
    }

    fn set_row(&mut self, r: usize, v: Vec4) {
        self.data[r * 4..r * 4 + 4].copy_from_slice(&v.to_array());
    }

    fn column(&self, c: usize) -> Vec4 {
        Vec4::new(self.at(0, c), self.at(1, c), self.at(2, c), self.at(3, c))
    }

    fn set_column(&mut self, c: usize, v: Vec4) {
        for (r, value) in v.to_array().into_iter().enumerate() {
            self.data[r * 4 + c] = value;
        }
    }

    /// First row `(M11, M12, M13, M14)`.
    pub fn row1(&self) -> Vec4 {
        self.row(0)
    }

    /// Second row.
    pub fn row2(&self) -> Vec4 {
        self.row(1)
    }

    /// Third row.
    pub fn row3(&self) -> Vec4 {
        self.row(2)
    }

    /// Fourth row; holds the translation of an affine transform.
    pub fn row4(&self) -> Vec4 {
        self.row(3)
    }

    /// Replaces the first row.
    pub fn set_row1(&mut self, v: Vec4) {
        self.set_row(0, v);
    }

    /// Replaces the second row.
    pub fn set_row2(&mut self, v: Vec4) {
        self.set_row(1, v);
    }

    /// Replaces the third row.
    pub fn set_row3(&mut self, v: Vec4) {
        self.set_row(2, v);
    }

    /// Replaces the fourth row.
    pub fn set_row4(&mut self, v: Vec4) {
        self.set_row(3, v);
    }

    /// First column `(M11, M21, M31, M41)`.
    pub fn column1(&self) -> Vec4 {
        self.column(0)
    }

    /// Second column.
    pub fn column2(&self) -> Vec4 {
        self.column(1)
    }

    /// Third column.
    pub fn column3(&self) -> Vec4 {
        self.column(2)
    }

    /// Fourth column.
    pub fn column4(&self) -> Vec4 {
        self.column(3)
    }

    /// Replaces the first column.
    pub fn set_column1(&mut self, v: Vec4) {
        self.set_column(0, v);
    }

    /// Replaces the second column.
    pub fn set_column2(&mut self, v: Vec4) {
        self.set_column(1, v);
    }

    /// Replaces the third column.
    pub fn set_column3(&mut self, v: Vec4) {
        self.set_column(2, v);
    }

    /// Replaces the fourth column.
    pub fn set_column4(&mut self, v: Vec4) {
        self.set_column(3, v);
    }

    /// `(M41, M42, M43)`.
    pub fn translation_vector(&self) -> Vec3 {
        Vec3::new(self.at(3, 0), self.at(3, 1), self.at(3, 2))
    }

    /// Overwrites `(M41, M42, M43)`.
    pub fn set_translation_vector(&mut self, t: Vec3) {
        self.data[12..15].copy_from_slice(&t.to_array());
    }

    /// The diagonal `(M11, M22, M33)`.
    ///
    /// Only meaningful for axis-aligned transforms; this is not a
    /// decomposition.
    pub fn scale_vector(&self) -> Vec3 {
        Vec3::new(self.at(0, 0), self.at(1, 1), self.at(2, 2))
    }

    /// Overwrites the diagonal `(M11, M22, M33)`.
    pub fn set_scale_vector(&mut self, s: Vec3) {
        self.data[0] = s.x();
        self.data[5] = s.y();
        self.data[10] = s.z();
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] =
            self.data;

        let t1 = m33 * m44 - m34 * m43;
        let t2 = m32 * m44 - m34 * m42;
        let t3 = m32 * m43 - m33 * m42;
        let t4 = m31 * m44 - m34 * m41;
        let t5 = m31 * m43 - m33 * m41;
        let t6 = m31 * m42 - m32 * m41;

        m11 * (m22 * t1 - m23 * t2 + m24 * t3) - m12 * (m21 * t1 - m23 * t4 + m24 * t5)
            + m13 * (m21 * t2 - m22 * t4 + m24 * t6)
            - m14 * (m21 * t3 - m22 * t5 + m23 * t6)
    }

    /// Inverse via the adjugate, or [`Mat4::ZERO`] when singular.
    ///
    /// The matrix counts as singular when `|det| < FLOAT_EPSILON`.
    pub fn inverse(&self) -> Self {
        let [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p] = self.data;

        let kp_lo = k * p - l * o;
        let jp_ln = j * p - l * n;
        let jo_kn = j * o - k * n;
        let ip_lm = i * p - l * m;
        let io_km = i * o - k * m;
        let in_jm = i * n - j * m;

        let a11 = f * kp_lo - g * jp_ln + h * jo_kn;
        let a12 = -(e * kp_lo - g * ip_lm + h * io_km);
        let a13 = e * jp_ln - f * ip_lm + h * in_jm;
        let a14 = -(e * jo_kn - f * io_km + g * in_jm);

        let det = a * a11 + b * a12 + c * a13 + d * a14;
        if det.abs() < FLOAT_EPSILON {
            return Self::ZERO;
        }
        let inv_det = 1.0 / det;

        let gp_ho = g * p - h * o;
        let fp_hn = f * p - h * n;
        let fo_gn = f * o - g * n;
        let ep_hm = e * p - h * m;
        let eo_gm = e * o - g * m;
        let en_fm = e * n - f * m;

        let gl_hk = g * l - h * k;
        let fl_hj = f * l - h * j;
        let fk_gj = f * k - g * j;
        let el_hi = e * l - h * i;
        let ek_gi = e * k - g * i;
        let ej_fi = e * j - f * i;

        Self::new([
            // row 1
            a11 * inv_det,
            -(b * kp_lo - c * jp_ln + d * jo_kn) * inv_det,
            (b * gp_ho - c * fp_hn + d * fo_gn) * inv_det,
            -(b * gl_hk - c * fl_hj + d * fk_gj) * inv_det,
            // row 2
            a12 * inv_det,
            (a * kp_lo - c * ip_lm + d * io_km) * inv_det,
            -(a * gp_ho - c * ep_hm + d * eo_gm) * inv_det,
            (a * gl_hk - c * el_hi + d * ek_gi) * inv_det,
            // row 3
            a13 * inv_det,
            -(a * jp_ln - b * ip_lm + d * in_jm) * inv_det,
            (a * fp_hn - b * ep_hm + d * en_fm) * inv_det,
            -(a * fl_hj - b * el_hi + d * ej_fi) * inv_det,
            // row 4
            a14 * inv_det,
            (a * jo_kn - b * io_km + c * in_jm) * inv_det,
            -(a * fo_gn - b * eo_gm + c * en_fm) * inv_det,
            (a * fk_gj - b * ek_gi + c * ej_fi) * inv_det,
        ])
    }

    /// Inverts in place; a singular matrix becomes [`Mat4::ZERO`].
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Under the row-vector convention the product applies `self` first,
    /// then `rhs`.
    ///
    /// # Examples
    /// ```
    /// use lumen_math::Mat4;
    /// let a = Mat4::IDENTITY;
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 4 + col] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        point.transform(self)
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        Vec4::from_vec3(*direction, 0.0).transform(self).xyz()
    }

    /// Full homogeneous transform `v · self`.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        v.transform(self)
    }

    /// True when every cell differs from `other` by at most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

fn cell_index(row: usize, col: usize) -> Result<usize, MathError> {
    if row < 4 && col < 4 {
        Ok(row * 4 + col)
    } else {
        Err(MathError::CellOutOfRange { row, column: col })
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(value: Mat4) -> Self {
        value.data
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < 4 && col < 4, "matrix cell ({row}, {col}) out of range");
        &self.data[row * 4 + col]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < 4 && col < 4, "matrix cell ({row}, {col}) out of range");
        &mut self.data[row * 4 + col]
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for &Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: &Mat4) -> Mat4 {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..4 {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.row(r))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_index_rejects_either_axis() {
        assert_eq!(cell_index(3, 3), Ok(15));
        assert_eq!(
            cell_index(4, 0),
            Err(MathError::CellOutOfRange { row: 4, column: 0 })
        );
        assert_eq!(
            cell_index(0, 9),
            Err(MathError::CellOutOfRange { row: 0, column: 9 })
        );
    }

    #[test]
    fn columns_and_rows_agree_with_transpose() {
        let m = Mat4::new([
            0.0, 1.0, 2.0, 3.0, //
            4.0, 5.0, 6.0, 7.0, //
            8.0, 9.0, 10.0, 11.0, //
            12.0, 13.0, 14.0, 15.0, //
        ]);
        let t = m.transpose();
        assert_eq!(m.column2(), t.row2());
        assert_eq!(m.row4(), t.column4());
    }
}
