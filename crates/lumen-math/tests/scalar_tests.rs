// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lumen_math::scalar::{
    self, approximately, ceil_to_int, clamp, clamp01, deg_to_rad, delta_angle, floor_to_int,
    gamma, inverse_lerp, inverse_lerp_eps, lerp, lerp_angle, lerp_unclamped, line_intersection,
    line_segment_intersection, max, max_of, min, min_of, modulo, move_towards,
    move_towards_angle, ping_pong, repeat, round_to_int, sign, smooth_damp, smooth_damp_angle,
    smooth_damp_angle_limited, smooth_damp_clocked, smooth_step,
};
use lumen_math::{MathError, Vec2};

const EPS: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) {
    assert!((a - b).abs() <= EPS, "{a} vs {b}");
}

#[test]
fn clamp01_saturates_both_ends() {
    assert_eq!(clamp01(1.5), 1.0);
    assert_eq!(clamp01(-0.2), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
}

#[test]
fn generic_clamp_min_max_cover_ints_and_floats() {
    assert_eq!(clamp(5, 0, 3), 3);
    assert_eq!(clamp(-5, 0, 3), 0);
    assert_eq!(clamp(2.5_f32, 0.0, 3.0), 2.5);
    assert_eq!(min(2, 3), 2);
    assert_eq!(max(2.0_f32, 3.0), 3.0);
}

#[test]
fn slice_extrema_reject_empty_input() {
    assert_eq!(min_of(&[3.0_f32, 1.0, 2.0]), Ok(1.0));
    assert_eq!(max_of(&[3, 9, 2]), Ok(9));
    assert_eq!(min_of::<i32>(&[]), Err(MathError::EmptyInput));
}

#[test]
fn lerp_clamps_and_unclamped_extrapolates() {
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_eq!(lerp(2.0, 4.0, 2.0), 4.0);
    assert_eq!(lerp(2.0, 4.0, -1.0), 2.0);
    assert_eq!(lerp_unclamped(2.0, 4.0, 2.0), 6.0);
}

#[test]
fn inverse_lerp_guards_empty_ranges() {
    assert_eq!(inverse_lerp(2.0, 4.0, 3.0), 0.5);
    assert_eq!(inverse_lerp(2.0, 4.0, 10.0), 1.0);
    assert_eq!(inverse_lerp(1.0, 1.0, 5.0), 0.0);
    assert_eq!(inverse_lerp_eps(1.0, 1.0005, 1.0002, 1e-3), 0.0);
}

#[test]
fn repeat_and_ping_pong_wrap() {
    assert_eq!(repeat(5.5, 2.0), 1.5);
    assert_eq!(repeat(-0.5, 2.0), 1.5);
    assert_eq!(ping_pong(3.0, 2.0), 1.0);
    assert_eq!(ping_pong(4.0, 2.0), 0.0);
    assert_eq!(ping_pong(5.0, 2.0), 1.0);
}

#[test]
fn repeat_with_negative_length_follows_floored_formula() {
    assert_eq!(repeat(5.0, -3.0), -1.0);
    assert_eq!(repeat(5.0, -3.0), modulo(5.0, -3.0));
    assert_eq!(repeat(-1.0, -3.0), -1.0);
    assert_eq!(ping_pong(1.0, -2.0), -3.0);
}

#[test]
fn delta_angle_takes_the_short_way_round() {
    assert_eq!(delta_angle(350.0, 10.0), 20.0);
    assert_eq!(delta_angle(10.0, 350.0), -20.0);
    assert_eq!(delta_angle(0.0, 180.0), 180.0);
    assert_eq!(delta_angle(0.0, -180.0), 180.0);
    assert_eq!(delta_angle(45.0, 405.0), 0.0);
    assert_eq!(lerp_angle(350.0, 10.0, 0.5), 360.0);
}

#[test]
fn move_towards_never_overshoots() {
    assert_eq!(move_towards(0.0, 10.0, 3.0), 3.0);
    assert_eq!(move_towards(9.0, 10.0, 3.0), 10.0);
    assert_eq!(move_towards(0.0, -10.0, 3.0), -3.0);
    assert_eq!(move_towards_angle(350.0, 10.0, 5.0), 355.0);
    assert_eq!(move_towards_angle(350.0, 10.0, 30.0), 10.0);
}

#[test]
fn approximately_is_relative() {
    assert!(approximately(1.0, 1.0 + 1e-7));
    assert!(!approximately(1.0, 1.001));
    assert!(approximately(1.0e6, 1.0e6 + 0.5));
    assert!(approximately(0.0, 0.0));
}

#[test]
fn sign_reports_nan_as_error() {
    assert_eq!(sign(-3.0), Ok(-1.0));
    assert_eq!(sign(0.0), Ok(0.0));
    assert_eq!(sign(-0.0), Ok(0.0));
    assert_eq!(sign(7.0), Ok(1.0));
    assert_eq!(sign(f32::NAN), Err(MathError::NotANumber));
}

#[test]
fn smooth_step_and_gamma_curves() {
    assert_eq!(smooth_step(0.0, 1.0, 0.5), 0.5);
    assert_eq!(smooth_step(0.0, 10.0, 2.0), 10.0);
    approx_eq(gamma(0.25, 1.0, 0.5), 0.5);
    approx_eq(gamma(-0.25, 1.0, 0.5), -0.5);
    assert_eq!(gamma(2.0, 1.0, 3.0), 2.0);
    assert_eq!(gamma(-2.0, 1.0, 3.0), -2.0);
}

#[test]
fn integer_rounding_helpers() {
    assert_eq!(floor_to_int(-1.5), -2);
    assert_eq!(ceil_to_int(-1.5), -1);
    assert_eq!(round_to_int(2.5), 3);
    assert_eq!(modulo(-1.0, 3.0), 2.0);
    approx_eq(deg_to_rad(180.0), scalar::PI);
}

#[test]
fn smooth_damp_converges_without_crossing_target() {
    let mut velocity = 0.0;
    let mut x = 0.0;
    for _ in 0..600 {
        x = smooth_damp(x, 10.0, &mut velocity, 0.2, f32::INFINITY, 1.0 / 60.0);
        assert!(x <= 10.0, "crossed target: {x}");
    }
    assert!((x - 10.0).abs() < 1e-3);
}

#[test]
fn smooth_damp_with_zero_delta_holds_position() {
    let mut velocity = 2.0;
    let x = smooth_damp(0.0, 10.0, &mut velocity, 0.3, f32::INFINITY, 0.0);
    assert_eq!(x, 0.0);
    assert_eq!(velocity, 2.0);
}

#[test]
fn smooth_damp_respects_max_speed() {
    let mut velocity = 0.0;
    let x = smooth_damp(0.0, 10.0, &mut velocity, 1.0, 1.0, 0.1);
    assert!(x > 0.0 && x <= 1.0 + EPS, "got {x}");
}

#[test]
fn smooth_damp_snaps_and_zeroes_velocity_on_overshoot() {
    // A huge incoming velocity would carry the value far past the target.
    let mut velocity = 1000.0;
    let x = smooth_damp(9.9, 10.0, &mut velocity, 0.1, f32::INFINITY, 0.5);
    assert_eq!(x, 10.0);
    assert_eq!(velocity, 0.0);
}

#[test]
fn smooth_damp_angle_wraps_target() {
    let mut velocity = 0.0;
    let mut a = 350.0;
    for _ in 0..600 {
        a = smooth_damp_angle(a, 10.0, &mut velocity, 0.2, f32::INFINITY, 1.0 / 60.0);
    }
    // Converges to 370 (the same heading as 10) instead of sweeping back.
    assert!((a - 370.0).abs() < 1e-2, "got {a}");
}

#[test]
fn smooth_damp_angle_limited_raises_speed_floor() {
    let mut v1 = 0.0;
    let mut v2 = 0.0;
    let slow = smooth_damp_angle(0.0, 90.0, &mut v1, 1.0, 1.0, 0.1);
    let fast = smooth_damp_angle_limited(0.0, 90.0, &mut v2, 1.0, 1.0, 0.1, 5.0);
    assert!(fast > slow, "{fast} <= {slow}");
}

#[test]
fn clocked_overload_reads_delta_from_source() {
    let mut v1 = 0.0;
    let mut v2 = 0.0;
    let explicit = smooth_damp(0.0, 5.0, &mut v1, 0.3, f32::INFINITY, 0.02);
    let clocked = smooth_damp_clocked(0.0, 5.0, &mut v2, 0.3, None, &0.02_f32);
    assert_eq!(explicit, clocked);
    assert_eq!(v1, v2);
}

#[test]
fn segment_intersection_scenario() {
    let hit = line_segment_intersection(
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(0.0, 2.0),
        Vec2::new(2.0, 0.0),
    );
    assert_eq!(hit, Some(Vec2::new(1.0, 1.0)));
}

#[test]
fn segments_that_miss_still_have_a_line_intersection() {
    let (p1, p2) = (Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
    let (p3, p4) = (Vec2::new(3.0, 0.0), Vec2::new(2.0, 1.0));
    assert_eq!(line_segment_intersection(p1, p2, p3, p4), None);
    assert_eq!(line_intersection(p1, p2, p3, p4), Some(Vec2::new(1.5, 1.5)));
}

#[test]
fn parallel_lines_do_not_intersect() {
    let hit = line_intersection(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 2.0),
    );
    assert_eq!(hit, None);
}
