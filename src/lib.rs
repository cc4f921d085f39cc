//! Metaballs - an animated metaball field rendered with WebGPU
//!
//! Core modules:
//! - `sim`: Ball field simulation (integration, boundary reflection)
//! - `packing`: Simulation state -> flat GPU buffer blocks
//! - `render`: Region/backend interface and the wgpu implementation
//! - `frame_loop`: Per-frame orchestration
//! - `platform`: Browser/native time source

pub mod camera;
pub mod clock;
pub mod frame_loop;
pub mod input;
pub mod packing;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{FieldVariant, Settings};

/// Field configuration constants
pub mod consts {
    /// Balls spawned by the default field
    pub const DEFAULT_BALL_COUNT: usize = 50;

    /// Camera depth travel speed (units/second)
    pub const CAMERA_SPEED: f32 = 0.5;

    /// Ball radius is uniform in [RADIUS_BASE, RADIUS_BASE + RADIUS_SPREAD)
    pub const RADIUS_BASE: f32 = 0.1;
    pub const RADIUS_SPREAD: f32 = 0.01;

    /// Velocity per axis is uniform in ±VELOCITY_HALF_RANGE
    pub const VELOCITY_HALF_RANGE: f32 = 0.1;
}
