// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use lumen_math::scalar::{clamp, delta_angle, lerp, repeat};
use lumen_math::{Mat4, Quat, Vec3, EPSILON};

// Pinned seed so the matrix and rotation cases are identical on every machine.
// Override locally with PROPTEST_SEED if a wider search is needed.
const SEED_BYTES: [u8; 32] = [
    0x1d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0,
];

fn pinned_runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::default(), rng)
}

fn vec3_in(range: core::ops::Range<f32>) -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(range).prop_map(Vec3::from)
}

fn axis() -> impl Strategy<Value = Vec3> {
    vec3_in(-1.0..1.0).prop_filter("non-degenerate axis", |v| v.length() > 0.1)
}

proptest! {
    #[test]
    fn clamp_is_idempotent(v in -1.0e4f32..1.0e4, a in -1.0e3f32..1.0e3, b in -1.0e3f32..1.0e3) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let once = clamp(v, lo, hi);
        prop_assert!(once >= lo && once <= hi);
        prop_assert_eq!(clamp(once, lo, hi), once);
    }

    #[test]
    fn lerp_stays_between_endpoints(a in -1.0e3f32..1.0e3, b in -1.0e3f32..1.0e3, t in -2.0f32..3.0) {
        let out = lerp(a, b, t);
        let slack = 1e-4 * (1.0 + a.abs() + b.abs());
        prop_assert!(out >= a.min(b) - slack && out <= a.max(b) + slack, "lerp({a}, {b}, {t}) = {out}");
        prop_assert_eq!(lerp(a, b, 0.0), a);
        prop_assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn repeat_lands_in_half_open_range(t in -1.0e4f32..1.0e4, length in 0.1f32..100.0) {
        let r = repeat(t, length);
        prop_assert!((0.0..length).contains(&r), "repeat({t}, {length}) = {r}");
    }

    #[test]
    fn delta_angle_is_shortest_arc(a in -1.0e4f32..1.0e4, b in -1.0e4f32..1.0e4) {
        let d = delta_angle(a, b);
        prop_assert!(d > -180.0 && d <= 180.0, "delta_angle({a}, {b}) = {d}");
        prop_assert_eq!(delta_angle(a, a), 0.0);
    }

    #[test]
    fn normalized_vectors_have_unit_length(v in vec3_in(-100.0..100.0)) {
        prop_assume!(v.length() > EPSILON * 1000.0);
        let n = v.normalized();
        prop_assert!((n.length() - 1.0).abs() <= 1e-5, "|{n}| = {}", n.length());
        prop_assert!(n.dot(v) > 0.0);
    }

    #[test]
    fn vec3_equality_is_symmetric(a in vec3_in(-10.0..10.0), d in vec3_in(-2e-5..2e-5)) {
        let b = a + d;
        prop_assert_eq!(a == b, b == a);
        prop_assert!(a == a + Vec3::ZERO);
    }

    #[test]
    fn quaternion_product_matches_reversed_matrix_product(
        ax1 in axis(), ang1 in -3.0f32..3.0, ax2 in axis(), ang2 in -3.0f32..3.0
    ) {
        let q1 = Quat::from_axis_angle(ax1, ang1);
        let q2 = Quat::from_axis_angle(ax2, ang2);
        let lhs = Mat4::from_quat(&(q1 * q2));
        let rhs = Mat4::from_quat(&q2) * Mat4::from_quat(&q1);
        prop_assert!(lhs.approx_eq(&rhs, 1e-5), "{lhs}\nvs\n{rhs}");
    }
}

#[test]
fn proptest_seed_pinned_inverse_round_trip() {
    let scale = prop::array::uniform3(0.5f32..4.0);
    let translation = prop::array::uniform3(-10.0f32..10.0);
    let strategy = (scale, axis(), -3.0f32..3.0, translation);

    let result = pinned_runner().run(&strategy, |([sx, sy, sz], ax, angle, [tx, ty, tz])| {
        let m = Mat4::scale(sx, sy, sz)
            * Mat4::rotation_axis_angle(ax, angle)
            * Mat4::translation(tx, ty, tz);
        prop_assert!(m.determinant().abs() > 0.1);

        let inv = m.inverse();
        prop_assert_ne!(inv, Mat4::ZERO);
        prop_assert!((m * inv).approx_eq(&Mat4::IDENTITY, 1e-3), "{}", m * inv);
        prop_assert!((inv * m).approx_eq(&Mat4::IDENTITY, 1e-3), "{}", inv * m);
        Ok(())
    });
    assert!(result.is_ok(), "pinned proptest failed: {result:?}");
}

#[test]
fn proptest_seed_pinned_rotation_round_trip() {
    let strategy = (axis(), -6.0f32..6.0, vec3_in(-100.0..100.0));

    let result = pinned_runner().run(&strategy, |(ax, angle, v)| {
        let q = Quat::from_axis_angle(ax, angle);
        let back = q.inverse() * (q * v);
        let tol = 1e-4 * (1.0 + v.length());
        prop_assert!(back.distance(v) <= tol, "{back} vs {v}");
        // Rotation preserves length.
        prop_assert!(((q * v).length() - v.length()).abs() <= tol);
        Ok(())
    });
    assert!(result.is_ok(), "pinned proptest failed: {result:?}");
}
