// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::scalar::{self, EPSILON, VECTOR_EPSILON};
use crate::MathError;

/// Continuous 2D vector (pointer positions, UV offsets, screen-space maths).
///
/// Equality is tolerance based: `a == b` when `|a - b|² < VECTOR_EPSILON²`.
/// The relation is reflexive and symmetric but not transitive.
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Vec2 {
    data: [f32; 2],
}

const _: () = assert!(core::mem::size_of::<Vec2>() == 8);

impl Vec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector with both components set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f32) {
        self.data[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f32) {
        self.data[1] = y;
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Component by index (`0 = x`, `1 = y`).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::index("Vec2", index, 2))
    }

    /// Sets a component by index (`0 = x`, `1 = y`).
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::index("Vec2", index, 2))?;
        *slot = value;
        Ok(())
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
    }

    /// 2D cross product `x1*y2 - y1*x2` (signed parallelogram area).
    pub fn cross(self, other: Self) -> f32 {
        self.data[0] * other.data[1] - self.data[1] * other.data[0]
    }

    /// Unsigned angle between the two vectors in radians.
    ///
    /// NaN when either vector has zero length.
    pub fn angle(self, other: Self) -> f32 {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        scalar::clamp(cos, -1.0, 1.0).acos()
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length.
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scales to unit length in place; vectors no longer than
    /// [`EPSILON`] are left unchanged.
    pub fn normalize(&mut self) {
        let len = self.magnitude();
        if len > EPSILON {
            *self /= len;
        }
    }

    /// Unit-length copy, or [`Vec2::ZERO`] for degenerate input.
    pub fn normalized(self) -> Self {
        let len = self.magnitude();
        if len > EPSILON {
            self / len
        } else {
            Self::ZERO
        }
    }

    /// Distance to `other`.
    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// Squared distance to `other`.
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).magnitude_squared()
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            scalar::min(self.data[0], other.data[0]),
            scalar::min(self.data[1], other.data[1]),
        )
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            scalar::max(self.data[0], other.data[0]),
            scalar::max(self.data[1], other.data[1]),
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

    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            scalar::lerp(self.data[0], other.data[0], t),
            scalar::lerp(self.data[1], other.data[1], t),
        )
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        (*self - *other).magnitude_squared() < VECTOR_EPSILON * VECTOR_EPSILON
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.data[0], self.data[1])
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.data[0] + rhs.data[0], self.data[1] + rhs.data[1])
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.data[0] - rhs.data[0], self.data[1] - rhs.data[1])
    }
}

impl Mul for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.data[0] * rhs.data[0], self.data[1] * rhs.data[1])
    }
}

impl Div for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.data[0] / rhs.data[0], self.data[1] / rhs.data[1])
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.data[0] * rhs, self.data[1] * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.data[0] / rhs, self.data[1] / rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<Vec2> for f32 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self / rhs.data[0], self / rhs.data[1])
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1])
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
