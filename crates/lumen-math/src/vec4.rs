// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::{Mat4, MathError, Vec2, Vec3};

/// Homogeneous 4D vector, mostly produced by transforms.
///
/// `w` is conventionally `1` for points and `0` for directions.
///
/// Unlike [`Vec3`], equality is exact: all four components are compared with
/// `==`. Use [`Vec4::approx_eq`] for tolerance comparisons.
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vec4 {
    data: [f32; 4],
}

const _: () = assert!(core::mem::size_of::<Vec4>() == 16);

impl Vec4 {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// `(1, 1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Extends a 3D vector with `w`.
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
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

    /// W component.
    pub const fn w(self) -> f32 {
        self.data[3]
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

    /// Sets the W component.
    pub fn set_w(&mut self, w: f32) {
        self.data[3] = w;
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Component by index (`0..=3`).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::index("Vec4", index, 4))
    }

    /// Sets a component by index (`0..=3`).
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::index("Vec4", index, 4))?;
        *slot = value;
        Ok(())
    }

    /// Drops `z` and `w`.
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.data[0], self.data[1])
    }

    /// Drops `w`.
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scales to unit length in place. Only an exactly zero vector is skipped.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 {
            for c in &mut self.data {
                *c /= len;
            }
        }
    }

    /// Copy normalised with [`Vec4::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Row-vector transform `self · m`.
    pub fn transform(self, m: &Mat4) -> Self {
        let mut out = [0.0; 4];
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|row| self.data[row] * m.at(row, col)).sum();
        }
        Self { data: out }
    }

    /// True when every component differs from `other` by at most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        value.data
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "({x}, {y}, {z}, {w})")
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let [x, y, z, w] = self.data;
        let [rx, ry, rz, rw] = rhs.data;
        Self::new(x + rx, y + ry, z + rz, w + rw)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let [x, y, z, w] = self.data;
        let [rx, ry, rz, rw] = rhs.data;
        Self::new(x - rx, y - ry, z - rz, w - rw)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(x * rhs, y * rhs, z * rhs, w * rhs)
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs * self
    }
}

impl Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, -w)
    }
}

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
