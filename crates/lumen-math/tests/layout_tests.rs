// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::mem::{align_of, size_of};

use lumen_math::{Mat4, Quat, Vec2, Vec2i, Vec3, Vec4};

#[test]
fn value_types_are_tightly_packed() {
    assert_eq!(size_of::<Vec2>(), 8);
    assert_eq!(size_of::<Vec2i>(), 8);
    assert_eq!(size_of::<Vec3>(), 12);
    assert_eq!(size_of::<Vec4>(), 16);
    assert_eq!(size_of::<Quat>(), 16);
    assert_eq!(size_of::<Mat4>(), 64);
    assert_eq!(align_of::<Mat4>(), align_of::<f32>());
}

#[test]
fn vertex_slices_cast_to_raw_floats() {
    let positions = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
    let floats: &[f32] = bytemuck::cast_slice(&positions);
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let bytes: &[u8] = bytemuck::cast_slice(&positions);
    assert_eq!(bytes.len(), 24);
}

#[test]
fn matrix_uploads_in_row_major_order() {
    let m = Mat4::translation(7.0, 8.0, 9.0);
    let floats: &[f32] = bytemuck::cast_slice(core::slice::from_ref(&m));
    assert_eq!(&floats[12..15], &[7.0, 8.0, 9.0]);
    assert_eq!(floats, &m.to_array());
}

#[test]
fn zeroed_values_match_zero_constants() {
    let m: Mat4 = bytemuck::Zeroable::zeroed();
    assert_eq!(m, Mat4::ZERO);
    let v: Vec4 = bytemuck::Zeroable::zeroed();
    assert_eq!(v, Vec4::ZERO);
    let q: Quat = bytemuck::Zeroable::zeroed();
    assert_eq!(q.to_array(), [0.0; 4]);
    let i: Vec2i = bytemuck::Zeroable::zeroed();
    assert_eq!(i, Vec2i::ZERO);
}

#[test]
fn raw_floats_cast_back_to_vectors() {
    let raw = [1.0_f32, 0.0, 0.0, 1.0, 0.5, 0.5, 0.5, 0.5];
    let quats: &[Quat] = bytemuck::cast_slice(&raw);
    assert_eq!(quats.len(), 2);
    assert_eq!(quats[1].w(), 0.5);
    let pairs: &[Vec2] = bytemuck::cast_slice(&raw);
    assert_eq!(pairs[3].to_array(), [0.5, 0.5]);
}
