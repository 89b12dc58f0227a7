// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! lumen-math: the geometric math kernel of the Lumen engine.
//!
//! Fixed-size value types ([`Vec2`], [`Vec2i`], [`Vec3`], [`Vec4`], [`Mat4`],
//! [`Quat`]), the scalar helper library in [`scalar`], and the per-frame
//! [`FrameClock`]. Everything except the clock is pure, synchronous and
//! allocation-free; the value types are `#[repr(C)]` and `bytemuck::Pod` so
//! slices of them can be handed to a GPU buffer as-is.
//!
//! Conventions:
//! - Matrices are row-major and transform row vectors (`v' = v · M`), so the
//!   translation lives in the fourth row.
//! - `q1 * q2` rotates by `q2` first, then by `q1`.
//! - Angles in the scalar helpers are degrees unless a name says otherwise;
//!   constructors such as [`Quat::from_axis_angle`] take radians.
#![deny(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::float_cmp
)]

/// Per-frame monotonic clock and pluggable time sources.
pub mod clock;
/// JSON-backed configuration for the frame clock.
pub mod config;
mod error;
mod mat4;
mod quat;
/// Dimension-independent float/int helpers (clamping, interpolation, damping).
pub mod scalar;
mod vec2;
mod vec2i;
mod vec3;
mod vec4;

pub use clock::{DeltaTime, FrameClock, ManualTimeSource, MonotonicTimeSource, TimeSource};
pub use config::{ClockConfig, ConfigError};
pub use error::MathError;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::{EPSILON, VECTOR_EPSILON};
pub use vec2::Vec2;
pub use vec2i::Vec2i;
pub use vec3::Vec3;
pub use vec4::Vec4;
