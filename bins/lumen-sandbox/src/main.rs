// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lumen sandbox (lumen-sandbox)
//!
//! Runs a fixed number of frames against the wall clock: an orbiting camera
//! eases toward a swinging yaw target and a drifting waypoint, and each frame
//! rebuilds its view matrix. Useful for eyeballing clock behaviour (caps,
//! time scale) and for smoke-testing the kernel outside unit tests.
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use lumen_math::scalar::{self, smooth_damp_angle_clocked};
use lumen_math::{ClockConfig, FrameClock, Mat4, MonotonicTimeSource, Quat, TimeSource, Vec3};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to run before exiting
    #[arg(short, long, default_value_t = 240)]
    frames: u64,

    /// Target frame rate; the loop sleeps off any leftover budget
    #[arg(short, long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    target_fps: u32,

    /// Optional JSON clock config (`max_delta_seconds`, `time_scale`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log per-frame camera state
    #[arg(short, long)]
    verbose: bool,
}

/// Eased camera state carried across frames.
#[derive(Debug, Default)]
struct Camera {
    yaw_degrees: f32,
    yaw_velocity: f32,
    position: Vec3,
}

impl Camera {
    /// Seconds for the yaw spring to cover most of the remaining arc.
    const YAW_SMOOTH_TIME: f32 = 0.35;
    /// Metres per second the camera may travel toward its waypoint.
    const TRAVEL_SPEED: f32 = 2.5;

    fn step<S: TimeSource>(&mut self, clock: &FrameClock<S>, waypoint: Vec3) {
        // Swing the target between -90° and +90° every four seconds.
        let target_yaw = scalar::ping_pong(clock.total_seconds() * 45.0, 180.0) - 90.0;
        self.yaw_degrees = smooth_damp_angle_clocked(
            self.yaw_degrees,
            target_yaw,
            &mut self.yaw_velocity,
            Self::YAW_SMOOTH_TIME,
            None,
            clock,
        );
        self.position = self
            .position
            .move_towards(waypoint, Self::TRAVEL_SPEED * clock.delta_time());
    }

    fn orientation(&self) -> Quat {
        Quat::from_axis_angle(Vec3::UP, scalar::deg_to_rad(self.yaw_degrees))
    }

    /// World transform: rotate first, then translate.
    fn world(&self) -> Mat4 {
        let [x, y, z] = self.position.to_array();
        Mat4::from_quat(&self.orientation()) * Mat4::translation(x, y, z)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = match &args.config {
        Some(path) => ClockConfig::load(path)
            .with_context(|| format!("loading clock config from {}", path.display()))?,
        None => ClockConfig::default(),
    };

    info!("Starting Lumen sandbox...");
    info!(
        frames = args.frames,
        target_fps = args.target_fps,
        ?config,
        "sandbox configured"
    );

    let frame_budget = Duration::from_secs_f64(1.0 / f64::from(args.target_fps));
    let waypoints = [
        Vec3::new(4.0, 1.5, 0.0),
        Vec3::new(0.0, 1.5, 4.0),
        Vec3::new(-4.0, 1.5, 0.0),
        Vec3::new(0.0, 1.5, -4.0),
    ];
    let probe = Vec3::new(0.0, 0.0, 10.0);

    let mut clock = FrameClock::with_source(MonotonicTimeSource::new(), config);
    let mut camera = Camera::default();
    let mut waypoint_index = 0;
    let mut singular_frames = 0_u64;
    clock.start();

    while clock.frame_count() < args.frames {
        let frame_start = Instant::now();
        clock.update();

        let waypoint = waypoints[waypoint_index];
        camera.step(&clock, waypoint);
        if camera.position == waypoint {
            waypoint_index = (waypoint_index + 1) % waypoints.len();
            debug!(frame = clock.frame_count(), next = %waypoints[waypoint_index], "waypoint reached");
        }

        let view = camera.world().inverse();
        if view == Mat4::ZERO {
            singular_frames += 1;
            warn!(frame = clock.frame_count(), "camera transform is singular; skipping frame");
        } else {
            let in_view = view.transform_point(&probe);
            debug!(
                frame = clock.frame_count(),
                dt = clock.delta_time(),
                yaw = camera.yaw_degrees,
                position = %camera.position,
                probe = %in_view,
                "frame"
            );
        }

        if clock.frame_count() % 60 == 0 {
            info!(
                frame = clock.frame_count(),
                elapsed_s = clock.total_seconds(),
                yaw = camera.yaw_degrees,
                "tick"
            );
        }

        thread::sleep(frame_budget.saturating_sub(frame_start.elapsed()));
    }

    info!(
        frames = clock.frame_count(),
        elapsed_s = clock.total_seconds(),
        singular_frames,
        final_position = %camera.position,
        "sandbox finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lumen_math::ManualTimeSource;

    use super::*;

    fn run(camera: &mut Camera, clock: &mut FrameClock<ManualTimeSource>, waypoint: Vec3) {
        for _ in 0..30 {
            clock.source_mut().advance(Duration::from_millis(100));
            clock.update();
            camera.step(clock, waypoint);
        }
    }

    #[test]
    fn camera_reaches_waypoint_and_view_stays_invertible() {
        let mut clock = FrameClock::with_source(ManualTimeSource::new(), ClockConfig::default());
        let mut camera = Camera::default();
        let waypoint = Vec3::new(4.0, 1.5, 0.0);

        run(&mut camera, &mut clock, waypoint);

        assert_eq!(camera.position, waypoint);
        let view = camera.world().inverse();
        assert_ne!(view, Mat4::ZERO);
        assert!((camera.world() * view).approx_eq(&Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn paused_clock_leaves_camera_in_place() {
        let config = ClockConfig {
            time_scale: 0.0,
            ..ClockConfig::default()
        };
        let mut clock = FrameClock::with_source(ManualTimeSource::new(), config);
        let mut camera = Camera::default();

        run(&mut camera, &mut clock, Vec3::new(4.0, 1.5, 0.0));

        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.yaw_degrees, 0.0);
    }
}
