//! Buffer packing
//!
//! Maps simulation and camera state into the flat little-endian f32 blocks
//! the render backend consumes. Every call rebuilds every element from
//! current authoritative state; nothing is delta-encoded, so a frame can
//! never observe a partially stale block.

use crate::camera::Camera;
use crate::sim::Simulation;

/// Per-ball fields enabled for a run
///
/// Fixed at construction; stride and region sizes never change mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLayout {
    /// Balls carry a z position component
    pub third_axis: bool,
    /// Balls carry their velocity
    pub velocity: bool,
}

impl BufferLayout {
    /// Full 3D field with per-ball velocity (stride 7)
    pub const VOLUMETRIC: Self = Self {
        third_axis: true,
        velocity: true,
    };
    /// 2D field with per-ball velocity (stride 5)
    pub const DRIFTING: Self = Self {
        third_axis: false,
        velocity: true,
    };
    /// 2D field, positions and radii only (stride 3)
    pub const FLAT: Self = Self {
        third_axis: false,
        velocity: false,
    };

    /// Floats per ball under this layout
    pub const fn ball_stride(&self) -> usize {
        let dims = if self.third_axis { 3 } else { 2 };
        dims + 1 + if self.velocity { dims } else { 0 }
    }
}

/// Cyclic color block: sin, cos, tan, atan of the color clock
///
/// Evaluated in f64 before narrowing; see `FrameClock::color_time`. tan is
/// unbounded near its poles and the shader gets whatever comes out.
pub fn color_block(color_time: f64) -> [f32; 4] {
    [
        color_time.sin() as f32,
        color_time.cos() as f32,
        color_time.tan() as f32,
        color_time.atan() as f32,
    ]
}

/// Row-major per-ball block, `ball_stride` floats per ball in field order:
/// x, y, [z,] radius[, vx, vy[, vz]]
pub fn ball_block(sim: &Simulation, layout: BufferLayout) -> Vec<f32> {
    let mut values = Vec::with_capacity(layout.ball_stride() * sim.ball_count());
    for ball in &sim.balls {
        values.push(ball.pos.x);
        values.push(ball.pos.y);
        if layout.third_axis {
            values.push(ball.pos.z);
        }
        values.push(ball.radius);
        if layout.velocity {
            values.push(ball.vel.x);
            values.push(ball.vel.y);
            if layout.third_axis {
                values.push(ball.vel.z);
            }
        }
    }
    values
}

/// Viewport block: pixel width, pixel height. Written once at init.
pub fn viewport_block(width: f32, height: f32) -> [f32; 2] {
    [width, height]
}

/// Delta-time block: the last frame's delta in seconds
pub fn delta_time_block(delta_seconds: f32) -> [f32; 1] {
    [delta_seconds]
}

/// Camera block: the clamped depth scalar
pub fn camera_block(camera: &Camera) -> [f32; 1] {
    [camera.depth]
}
