// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by every vector type.
//!
//! All routines operate on `f32` to match the engine's float32 mode. Angle
//! helpers (`delta_angle`, `lerp_angle`, `move_towards_angle`,
//! `smooth_damp_angle`) work in degrees on a 360° circle.
//!
//! Nothing here intercepts IEEE-754 special values: division by zero and NaN
//! propagate to the caller. The only checked operation is [`sign`], because
//! NaN has no sign to report.

use crate::clock::DeltaTime;
use crate::{MathError, Vec2};

/// Archimedes' constant (π).
pub const PI: f32 = core::f32::consts::PI;

/// Full turn in radians (2π).
pub const TAU: f32 = core::f32::consts::TAU;

/// Quarter turn in radians (π/2).
pub const HALF_PI: f32 = core::f32::consts::FRAC_PI_2;

/// Eighth turn in radians (π/4).
pub const QUARTER_PI: f32 = core::f32::consts::FRAC_PI_4;

/// Euler's number.
pub const E: f32 = core::f32::consts::E;

/// Multiply degrees by this to get radians.
pub const DEG2RAD: f32 = TAU / 360.0;

/// Multiply radians by this to get degrees.
pub const RAD2DEG: f32 = 360.0 / TAU;

/// Smallest positive subnormal `f32` (≈1.4e-45).
///
/// Default epsilon for [`approximately`] and the singularity threshold for
/// [`crate::Mat4::inverse`].
pub const FLOAT_EPSILON: f32 = 1.4e-45;

/// Degeneracy threshold: vectors shorter than this normalise to zero and
/// rotation axes shorter than this yield the identity rotation.
pub const EPSILON: f32 = 1e-6;

/// Tolerance for floating-point vector equality.
///
/// `a == b` holds for `Vec2`/`Vec3` when `|a - b|² < VECTOR_EPSILON²`.
pub const VECTOR_EPSILON: f32 = 1e-5;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// Works for any ordered type, so the float and integer variants share one
/// definition. `min > max` is a caller error and is only checked in debug
/// builds.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "invalid clamp range");
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps `value` to `[0, 1]`.
pub fn clamp01(value: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

/// Returns the smaller of two values (`b` when they compare equal or unordered).
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of two values (`b` when they compare equal or unordered).
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Smallest element of `values`.
pub fn min_of<T: PartialOrd + Copy>(values: &[T]) -> Result<T, MathError> {
    let (first, rest) = values.split_first().ok_or(MathError::EmptyInput)?;
    Ok(rest.iter().fold(*first, |acc, &v| if v < acc { v } else { acc }))
}

/// Largest element of `values`.
pub fn max_of<T: PartialOrd + Copy>(values: &[T]) -> Result<T, MathError> {
    let (first, rest) = values.split_first().ok_or(MathError::EmptyInput)?;
    Ok(rest.iter().fold(*first, |acc, &v| if v > acc { v } else { acc }))
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * DEG2RAD
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * RAD2DEG
}

/// Reciprocal square root, `1 / sqrt(value)`.
pub fn inv_sqrt(value: f32) -> f32 {
    1.0 / value.sqrt()
}

/// Floored modulo: `x - m * floor(x / m)`. The result takes the sign of `m`.
pub fn modulo(x: f32, m: f32) -> f32 {
    x - m * (x / m).floor()
}

/// Rounds down and converts to `i32` (saturating at the `i32` range).
#[allow(clippy::cast_possible_truncation)]
pub fn floor_to_int(value: f32) -> i32 {
    value.floor() as i32
}

/// Rounds up and converts to `i32` (saturating at the `i32` range).
#[allow(clippy::cast_possible_truncation)]
pub fn ceil_to_int(value: f32) -> i32 {
    value.ceil() as i32
}

/// Rounds half away from zero and converts to `i32`.
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_int(value: f32) -> i32 {
    value.round() as i32
}

/// Returns `-1`, `0` or `1` according to the sign of `value`.
///
/// Both zeroes report `0`. NaN has no sign and yields
/// [`MathError::NotANumber`].
pub fn sign(value: f32) -> Result<f32, MathError> {
    if value < 0.0 {
        Ok(-1.0)
    } else if value > 0.0 {
        Ok(1.0)
    } else if value == 0.0 {
        Ok(0.0)
    } else {
        Err(MathError::NotANumber)
    }
}

/// Linearly interpolates from `a` to `b`; `t` is clamped to `[0, 1]`.
///
/// Evaluated as `a·(1 - t) + b·t`, so `t = 0` yields exactly `a` and `t = 1`
/// exactly `b` for every finite input.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    lerp_unclamped(a, b, clamp01(t))
}

/// Linearly interpolates from `a` to `b` without clamping `t`.
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Returns where `value` sits between `a` and `b`, clamped to `[0, 1]`.
///
/// Returns `0` when `a == b` exactly.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        0.0
    } else {
        clamp01((value - a) / (b - a))
    }
}

/// [`inverse_lerp`] that treats the range as empty when `|b - a| <= epsilon`.
pub fn inverse_lerp_eps(a: f32, b: f32, value: f32, epsilon: f32) -> f32 {
    if (b - a).abs() > epsilon {
        clamp01((value - a) / (b - a))
    } else {
        0.0
    }
}

/// Wraps `t` into `[0, length)`.
///
/// Equivalent to `t - floor(t / length) * length`. For a positive `length`
/// the result is computed with an exact remainder so the half-open range
/// holds for every finite `t`; a negative `length` wraps into `(length, 0]`.
pub fn repeat(t: f32, length: f32) -> f32 {
    if length > 0.0 {
        let r = t.rem_euclid(length);
        // `r + length` inside rem_euclid can round up to exactly `length`.
        if r >= length {
            0.0
        } else {
            r
        }
    } else {
        t - (t / length).floor() * length
    }
}

/// Triangle wave over `[0, length]`: rises for `length`, then falls back.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    let t = repeat(t, length * 2.0);
    length - (t - length).abs()
}

/// Shortest signed difference from `current` to `target` in degrees.
///
/// The result lies in `(-180, 180]`.
///
/// ```
/// use lumen_math::scalar::delta_angle;
/// assert_eq!(delta_angle(350.0, 10.0), 20.0);
/// ```
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = repeat(target - current, 360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// [`lerp`] for angles in degrees: interpolates along the shorter arc.
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    a + delta_angle(a, b) * clamp01(t)
}

/// Moves `current` toward `target` by at most `max_delta` without overshooting.
///
/// A negative `max_delta` moves away from `target`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        return target;
    }
    current + signum_or_zero(diff) * max_delta
}

/// [`move_towards`] for angles in degrees, taking the shorter arc.
pub fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = delta_angle(current, target);
    if -max_delta < delta && delta < max_delta {
        return target;
    }
    move_towards(current, current + delta, max_delta)
}

/// Relative-tolerance comparison using [`FLOAT_EPSILON`].
///
/// `|a - b| < max(1e-6 * max(|a|, |b|), FLOAT_EPSILON * 8)`.
pub fn approximately(a: f32, b: f32) -> bool {
    approximately_eps(a, b, FLOAT_EPSILON)
}

/// Relative-tolerance comparison with a caller-supplied absolute floor.
///
/// `|a - b| < max(1e-6 * max(|a|, |b|), epsilon * 8)`.
pub fn approximately_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (b - a).abs() < max(1e-6 * max(a.abs(), b.abs()), epsilon * 8.0)
}

/// Cubic Hermite ease between `from` and `to`; `t` is clamped to `[0, 1]`.
pub fn smooth_step(from: f32, to: f32, t: f32) -> f32 {
    let t = clamp01(t);
    let t = -2.0 * t * t * t + 3.0 * t * t;
    to * t + from * (1.0 - t)
}

/// Sign-preserving power curve on `[-abs_max, abs_max]`.
///
/// Values whose magnitude exceeds `abs_max` pass through unchanged.
pub fn gamma(value: f32, abs_max: f32, gamma: f32) -> f32 {
    let negative = value < 0.0;
    let abs_value = value.abs();
    if abs_value > abs_max {
        return if negative { -abs_value } else { abs_value };
    }
    let result = (abs_value / abs_max).powf(gamma) * abs_max;
    if negative {
        -result
    } else {
        result
    }
}

/// Critically damped spring toward `target`.
///
/// `velocity` is the caller-owned spring state and is updated in place.
/// The change per call is limited to `max_speed * smooth_time`. If the
/// integration would carry the value past `target`, the result snaps to
/// `target` and `velocity` becomes zero.
///
/// ```
/// use lumen_math::scalar::smooth_damp;
/// let mut velocity = 0.0;
/// let mut x = 0.0;
/// for _ in 0..240 {
///     x = smooth_damp(x, 10.0, &mut velocity, 0.3, f32::INFINITY, 1.0 / 60.0);
/// }
/// assert!((x - 10.0).abs() < 1e-3);
/// ```
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> f32 {
    let smooth_time = max(0.0001, smooth_time);
    let omega = 2.0 / smooth_time;
    let x = omega * delta_time;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let max_change = max_speed * smooth_time;
    let change = clamp(current - target, -max_change, max_change);
    let clamped_target = current - change;

    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * decay;
    let output = clamped_target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        *velocity = 0.0;
        return target;
    }
    output
}

/// [`smooth_damp`] for angles in degrees, taking the shorter arc.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, max_speed, delta_time)
}

/// [`smooth_damp_angle`] whose speed limit is raised to at least
/// `max_speed_delta / delta_time`.
pub fn smooth_damp_angle_limited(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
    max_speed_delta: f32,
) -> f32 {
    let max_speed = max(max_speed, max_speed_delta / delta_time);
    smooth_damp_angle(current, target, velocity, smooth_time, max_speed, delta_time)
}

/// [`smooth_damp`] reading the frame delta from `clock`.
///
/// `max_speed` defaults to unbounded.
pub fn smooth_damp_clocked(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: Option<f32>,
    clock: &impl DeltaTime,
) -> f32 {
    smooth_damp(
        current,
        target,
        velocity,
        smooth_time,
        max_speed.unwrap_or(f32::INFINITY),
        clock.delta_time(),
    )
}

/// [`smooth_damp_angle`] reading the frame delta from `clock`.
///
/// `max_speed` defaults to unbounded.
pub fn smooth_damp_angle_clocked(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: Option<f32>,
    clock: &impl DeltaTime,
) -> f32 {
    smooth_damp_angle(
        current,
        target,
        velocity,
        smooth_time,
        max_speed.unwrap_or(f32::INFINITY),
        clock.delta_time(),
    )
}

/// Intersection of the infinite lines through `p1..p2` and `p3..p4`.
///
/// Returns `None` for parallel (or degenerate) lines.
pub fn line_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let solved = solve_lines(p1, p2, p3, p4)?;
    Some(solved.point)
}

/// Intersection of the segments `p1..p2` and `p3..p4`.
///
/// Returns `None` for parallel segments and when the crossing point lies
/// outside either segment.
///
/// ```
/// use lumen_math::{scalar::line_segment_intersection, Vec2};
/// let hit = line_segment_intersection(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(2.0, 2.0),
///     Vec2::new(0.0, 2.0),
///     Vec2::new(2.0, 0.0),
/// );
/// assert_eq!(hit, Some(Vec2::new(1.0, 1.0)));
/// ```
pub fn line_segment_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let solved = solve_lines(p1, p2, p3, p4)?;
    let unit = 0.0..=1.0;
    if unit.contains(&solved.t) && unit.contains(&solved.u) {
        Some(solved.point)
    } else {
        None
    }
}

struct LineSolution {
    point: Vec2,
    t: f32,
    u: f32,
}

/// Solves `p1 + t·b = p3 + u·d` with the perp-dot product.
fn solve_lines(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<LineSolution> {
    let b = p2 - p1;
    let d = p4 - p3;
    let b_perp_d = b.cross(d);
    if approximately(b_perp_d, 0.0) {
        return None;
    }
    let c = p3 - p1;
    let t = c.cross(d) / b_perp_d;
    let u = c.cross(b) / b_perp_d;
    Some(LineSolution {
        point: p1 + b * t,
        t,
        u,
    })
}

/// `-1`, `0` or `1`, letting NaN propagate.
fn signum_or_zero(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        value.signum()
    }
}
