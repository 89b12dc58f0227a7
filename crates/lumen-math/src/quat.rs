// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};

use crate::scalar::EPSILON;
use crate::{Mat4, MathError, Vec3, Vec4};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are expressed in radians.
/// * The type never normalises on its own. Rotations are expected to be unit
///   length; callers chaining many products should call
///   [`Quat::normalized`] now and then to stop drift.
/// * Equality compares orientation by dot product: `a == b` when
///   `dot(a, b) >= 1 - DOT_EPSILON²`. Antipodal `q` and `-q` describe the same
///   rotation but compare unequal, and non-unit values may not equal
///   themselves.
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
#[repr(C)]
pub struct Quat {
    data: [f32; 4],
}

const _: () = assert!(core::mem::size_of::<Quat>() == 16);

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Tolerance for dot-product equality (about 0.16° of rotation).
    pub const DOT_EPSILON: f32 = 1e-3;

    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// X component of the vector part.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component of the vector part.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Z component of the vector part.
    pub const fn z(self) -> f32 {
        self.data[2]
    }

    /// Scalar part.
    pub const fn w(self) -> f32 {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f32) {
        self.data[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f32) {
        self.data[1] = y;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, z: f32) {
        self.data[2] = z;
    }

    /// Sets the scalar part.
    pub fn set_w(&mut self, w: f32) {
        self.data[3] = w;
    }

    /// Returns the quaternion as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Component by index (`0..=2` vector part, `3` scalar part).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::index("Quat", index, 4))
    }

    /// Sets a component by index.
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::index("Quat", index, 4))?;
        *slot = value;
        Ok(())
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON` to
    /// avoid undefined orientations. No small-angle approximation is applied.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::IDENTITY;
        }
        let norm_axis = axis * (1.0 / len_sq.sqrt());
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let scaled = norm_axis * sin_half;
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: the result rotates by `other` first, then by
    /// `self`. Quaternion multiplication is non-commutative. When both operands
    /// are unit quaternions the result stays unit length up to rounding.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use lumen_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates `point`, expanding the rotation matrix inline.
    pub fn rotate_vec3(&self, point: Vec3) -> Vec3 {
        let [qx, qy, qz, qw] = self.data;
        let x = qx * 2.0;
        let y = qy * 2.0;
        let z = qz * 2.0;
        let xx = qx * x;
        let yy = qy * y;
        let zz = qz * z;
        let xy = qx * y;
        let xz = qx * z;
        let yz = qy * z;
        let wx = qw * x;
        let wy = qw * y;
        let wz = qw * z;

        let [px, py, pz] = point.to_array();
        Vec3::new(
            (1.0 - (yy + zz)) * px + (xy - wz) * py + (xz + wy) * pz,
            (xy + wz) * px + (1.0 - (xx + zz)) * py + (yz - wx) * pz,
            (xz - wy) * px + (yz + wx) * py + (1.0 - (xx + yy)) * pz,
        )
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        ax * bx + ay * by + az * bz + aw * bw
    }

    /// Norm of the quaternion.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Unit-length copy; returns identity when the norm is ≤ `EPSILON`.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::IDENTITY;
        }
        let inv = 1.0 / len;
        let [x, y, z, w] = self.data;
        Self::new(x * inv, y * inv, z * inv, w * inv)
    }

    /// Normalises in place with the same rules as [`Quat::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// `(-x, -y, -z, w)`; the inverse rotation for unit quaternions.
    pub fn conjugate(&self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, w)
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    ///
    /// Returns identity when the norm is ≤ `EPSILON`.
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::IDENTITY;
        }
        let inv = 1.0 / len_sq;
        let [x, y, z, w] = self.conjugate().data;
        Self::new(x * inv, y * inv, z * inv, w * inv)
    }

    /// Converts the quaternion to a row-major rotation matrix.
    ///
    /// The quaternion is normalised first, so the result is always a pure
    /// rotation. `from_quat(a * b) == from_quat(b) * from_quat(a)`.
    pub fn to_mat4(&self) -> Mat4 {
        let [x, y, z, w] = self.normalized().data;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts a 4-element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        self.dot(other) >= 1.0 - Self::DOT_EPSILON * Self::DOT_EPSILON
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "({x}, {y}, {z}, {w})")
    }
}

impl Index<usize> for Quat {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Quat {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate_vec3(rhs)
    }
}

/// Rotates the `xyz` part and carries `w` through unchanged.
impl Mul<Vec4> for Quat {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        Vec4::from_vec3(self.rotate_vec3(rhs.xyz()), rhs.w())
    }
}
