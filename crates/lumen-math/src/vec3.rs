// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::scalar::{self, EPSILON, VECTOR_EPSILON};
use crate::{Mat4, MathError, Quat, Vec2, Vec4};

/// 3D vector used for positions, directions and scales.
///
/// * Components are world-space units and may represent either points or
///   directions depending on the calling context.
/// * Use [`Vec3::transform`] / [`Mat4::transform_point`] for points (implicit
///   `w = 1`) and [`Mat4::transform_direction`] for directions (`w = 0`).
/// * Equality is tolerance based: `a == b` when `|a - b|² < VECTOR_EPSILON²`.
///   This is reflexive and symmetric but **not** transitive: `a == b` and
///   `b == c` do not imply `a == c`. Compare [`Vec3::to_array`] for exact
///   equality.
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Vec3 {
    data: [f32; 3],
}

const _: () = assert!(core::mem::size_of::<Vec3>() == 12);

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);
    /// `+Z`.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// `-Z`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);
    /// `+Y`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// `-Y`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// `+X`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// `-X`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// All components `+∞`.
    pub const POSITIVE_INFINITY: Self = Self::splat(f32::INFINITY);
    /// All components `-∞`.
    pub const NEGATIVE_INFINITY: Self = Self::splat(f32::NEG_INFINITY);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with every component set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Extends a 2D vector with a `z` component.
    pub const fn from_vec2(v: Vec2, z: f32) -> Self {
        Self::new(v.x(), v.y(), z)
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(self) -> f32 {
        self.data[2]
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

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// Component by index (`0..=2`).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::index("Vec3", index, 3))
    }

    /// Sets a component by index (`0..=2`).
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::index("Vec3", index, 3))?;
        *slot = value;
        Ok(())
    }

    /// Drops `z`.
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.data[0], self.data[1])
    }

    /// Applies `f` to every component.
    #[inline]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.data[0]), f(self.data[1]), f(self.data[2]))
    }

    /// Applies `f` pairwise to the components of `self` and `other`.
    #[inline]
    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.data[0], other.data[0]),
            f(self.data[1], other.data[1]),
            f(self.data[2], other.data[2]),
        )
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product (right-handed).
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scales to unit length in place.
    ///
    /// Vectors with length ≤ [`EPSILON`] are degenerate and left unchanged.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > EPSILON {
            *self *= 1.0 / len;
        }
    }

    /// Unit-length copy, or [`Vec3::ZERO`] if length ≤ [`EPSILON`].
    ///
    /// `EPSILON` is a degeneracy threshold, not numeric precision: degenerate
    /// input maps to zero so downstream callers can detect it.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self * (1.0 / len)
    }

    /// Distance to `other`.
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Squared distance to `other`.
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        self.zip(other, scalar::min)
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        self.zip(other, scalar::max)
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        self.map(f32::abs)
    }

    /// Raises every component to `power`.
    pub fn pow(self, power: f32) -> Self {
        self.map(|c| c.powf(power))
    }

    /// Component-wise clamp to `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.data[0], min.data[0], max.data[0]),
            scalar::clamp(self.data[1], min.data[1], max.data[1]),
            scalar::clamp(self.data[2], min.data[2], max.data[2]),
        )
    }

    /// Component-wise clamp to `[0, 1]`.
    pub fn clamp01(self) -> Self {
        self.map(scalar::clamp01)
    }

    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.zip(other, |a, b| scalar::lerp(a, b, t))
    }

    /// Linear interpolation toward `other` without clamping `t`.
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        self.zip(other, |a, b| scalar::lerp_unclamped(a, b, t))
    }

    /// Component-wise Hermite ease toward `other`.
    pub fn smooth_step(self, other: Self, t: f32) -> Self {
        self.zip(other, |a, b| scalar::smooth_step(a, b, t))
    }

    /// Moves toward `target` in a straight line by at most `max_distance_delta`.
    pub fn move_towards(self, target: Self, max_distance_delta: f32) -> Self {
        let to_target = target - self;
        let distance = to_target.length();
        if distance <= max_distance_delta || distance < EPSILON {
            return target;
        }
        self + to_target / distance * max_distance_delta
    }

    /// Mirrors `self` about the plane with unit `normal`:
    /// `self - 2·dot(normal, self)·normal`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * normal.dot(self))
    }

    /// Refracts `self` through a surface with unit `normal` and index ratio
    /// `eta` (Snell's law).
    ///
    /// Returns [`Vec3::ZERO`] on total internal reflection (`k < 0`).
    pub fn refract(self, normal: Self, eta: f32) -> Self {
        let d = self.dot(normal);
        let k = 1.0 - eta * eta * (1.0 - d * d);
        if k < 0.0 {
            return Self::ZERO;
        }
        self * eta - normal * (eta * d + k.sqrt())
    }

    /// Projection of `self` onto the line through `on_normal`.
    ///
    /// Returns [`Vec3::ZERO`] when `on_normal` is degenerate.
    pub fn project(self, on_normal: Self) -> Self {
        let len_sq = on_normal.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::ZERO;
        }
        on_normal * (self.dot(on_normal) / len_sq)
    }

    /// Transforms `self` as a point (`w = 1`) and drops the resulting `w`.
    pub fn transform(self, m: &Mat4) -> Self {
        self.transform4(m).xyz()
    }

    /// Full homogeneous transform of `self` as a point, keeping `w`.
    pub fn transform4(self, m: &Mat4) -> Vec4 {
        Vec4::from_vec3(self, 1.0).transform(m)
    }

    /// Rotates `self` by `rotation` without building a matrix.
    ///
    /// Computes `t = 2·(q.xyz × v)` then `v + w·t + q.xyz × t`, which equals
    /// the sandwich product `q·v·q⁻¹` for unit `q`.
    pub fn rotate(self, rotation: &Quat) -> Self {
        let u = rotation.xyz();
        let t = u.cross(self) * 2.0;
        self + t * rotation.w() + u.cross(t)
    }

    /// [`Vec3::rotate`] followed by a component-wise `scale`.
    pub fn rotate_scaled(self, rotation: &Quat, scale: &Self) -> Self {
        self.rotate(rotation) * *scale
    }

    /// [`Vec3::rotate`] returning a point with `w = 1`.
    pub fn rotate4(self, rotation: &Quat) -> Vec4 {
        Vec4::from_vec3(self.rotate(rotation), 1.0)
    }

    /// [`Vec3::rotate_scaled`] returning a point with `w = 1`.
    pub fn rotate_scaled4(self, rotation: &Quat, scale: &Self) -> Vec4 {
        Vec4::from_vec3(self.rotate_scaled(rotation, scale), 1.0)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        // NaN in either operand makes this false.
        (*self - *other).length_squared() < VECTOR_EPSILON * VECTOR_EPSILON
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.data[0], self.data[1], self.data[2])
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a * b)
    }
}

impl Div for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a / b)
    }
}

/// Component-wise floored modulo; each result takes the sign of the divisor.
impl Rem for Vec3 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.zip(rhs, scalar::modulo)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|c| c * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.map(|c| c / rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: Vec3) -> Vec3 {
        rhs.map(|c| self / c)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
