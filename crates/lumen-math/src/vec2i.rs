// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::{scalar, MathError, Vec2};

/// Integer 2D vector used for window sizes, viewport origins and grid cells.
///
/// Equality is exact. Operators follow `i32` semantics, so division
/// truncates toward zero and overflow panics in debug builds. Scalar
/// products (`dot`, `cross`, the squared lengths) widen to `i64`; they are
/// exact whenever each component difference fits in an `i32`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Vec2i {
    data: [i32; 2],
}

const _: () = assert!(core::mem::size_of::<Vec2i>() == 8);

impl Vec2i {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1, 1);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(1, 0);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(0, 1);

    /// Creates a vector from components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector with both components set to `v`.
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    /// X component.
    pub const fn x(self) -> i32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> i32 {
        self.data[1]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: i32) {
        self.data[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: i32) {
        self.data[1] = y;
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [i32; 2] {
        self.data
    }

    /// Component by index (`0 = x`, `1 = y`).
    pub fn get(&self, index: usize) -> Result<i32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::index("Vec2i", index, 2))
    }

    /// Sets a component by index (`0 = x`, `1 = y`).
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::index("Vec2i", index, 2))?;
        *slot = value;
        Ok(())
    }

    /// Widens to a float vector.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.data[0] as f32, self.data[1] as f32)
    }

    fn wide(self) -> [i64; 2] {
        [i64::from(self.data[0]), i64::from(self.data[1])]
    }

    /// Dot product, widened to `i64`.
    pub fn dot(self, other: Self) -> i64 {
        let ([ax, ay], [bx, by]) = (self.wide(), other.wide());
        ax * bx + ay * by
    }

    /// 2D cross product `x1*y2 - y1*x2`, widened to `i64`.
    pub fn cross(self, other: Self) -> i64 {
        let ([ax, ay], [bx, by]) = (self.wide(), other.wide());
        ax * by - ay * bx
    }

    /// Unsigned angle between the two vectors in radians.
    pub fn angle(self, other: Self) -> f32 {
        self.as_vec2().angle(other.as_vec2())
    }

    /// Euclidean length truncated toward zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn magnitude(self) -> i32 {
        let x = f64::from(self.data[0]);
        let y = f64::from(self.data[1]);
        (x * x + y * y).sqrt() as i32
    }

    /// Squared length.
    pub fn magnitude_squared(self) -> i64 {
        self.dot(self)
    }

    /// Divides both components by the truncated magnitude.
    ///
    /// A vector whose truncated magnitude is zero is left unchanged.
    pub fn normalize(&mut self) {
        let len = self.magnitude();
        if len != 0 {
            *self /= len;
        }
    }

    /// Copy normalised with [`Vec2i::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Truncated distance to `other`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn distance(self, other: Self) -> i32 {
        (self.distance_squared(other) as f64).sqrt() as i32
    }

    /// Squared distance to `other`.
    pub fn distance_squared(self, other: Self) -> i64 {
        let ([ax, ay], [bx, by]) = (self.wide(), other.wide());
        let (dx, dy) = (ax - bx, ay - by);
        dx * dx + dy * dy
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.data[0].min(other.data[0]),
            self.data[1].min(other.data[1]),
        )
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.data[0].max(other.data[0]),
            self.data[1].max(other.data[1]),
        )
    }

    /// Component-wise clamp to `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.data[0], min.data[0], max.data[0]),
            scalar::clamp(self.data[1], min.data[1], max.data[1]),
        )
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.data[0].abs(), self.data[1].abs())
    }

    /// Interpolates toward `other` in float space and truncates the result.
    #[allow(clippy::cast_possible_truncation)]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let v = self.as_vec2().lerp(other.as_vec2(), t);
        Self::new(v.x() as i32, v.y() as i32)
    }
}

impl From<[i32; 2]> for Vec2i {
    fn from(value: [i32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2i> for [i32; 2] {
    fn from(value: Vec2i) -> Self {
        value.data
    }
}

impl fmt::Display for Vec2i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.data[0], self.data[1])
    }
}

impl Index<usize> for Vec2i {
    type Output = i32;
    #[inline]
    fn index(&self, index: usize) -> &i32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec2i {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        &mut self.data[index]
    }
}

impl Add for Vec2i {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.data[0] + rhs.data[0], self.data[1] + rhs.data[1])
    }
}

impl Sub for Vec2i {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.data[0] - rhs.data[0], self.data[1] - rhs.data[1])
    }
}

impl Mul for Vec2i {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.data[0] * rhs.data[0], self.data[1] * rhs.data[1])
    }
}

impl Div for Vec2i {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.data[0] / rhs.data[0], self.data[1] / rhs.data[1])
    }
}

impl Mul<i32> for Vec2i {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.data[0] * rhs, self.data[1] * rhs)
    }
}

impl Div<i32> for Vec2i {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::new(self.data[0] / rhs, self.data[1] / rhs)
    }
}

impl Mul<Vec2i> for i32 {
    type Output = Vec2i;
    #[inline]
    fn mul(self, rhs: Vec2i) -> Vec2i {
        rhs * self
    }
}

impl Div<Vec2i> for i32 {
    type Output = Vec2i;
    #[inline]
    fn div(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self / rhs.data[0], self / rhs.data[1])
    }
}

impl Neg for Vec2i {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1])
    }
}

impl AddAssign for Vec2i {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2i {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<i32> for Vec2i {
    #[inline]
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

impl DivAssign<i32> for Vec2i {
    #[inline]
    fn div_assign(&mut self, rhs: i32) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_truncates() {
        assert_eq!(Vec2i::new(3, 4).magnitude(), 5);
        assert_eq!(Vec2i::new(1, 1).magnitude(), 1);
    }

    #[test]
    fn normalize_zero_vector_is_a_no_op() {
        let mut v = Vec2i::ZERO;
        v.normalize();
        assert_eq!(v, Vec2i::ZERO);
        assert_eq!(Vec2i::new(0, 7).normalized(), Vec2i::UNIT_Y);
    }
}
