//! Render backend interface and the WebGPU implementation
//!
//! The frame loop only knows about named regions of backend memory and a
//! draw trigger; `gpu` owns the actual wgpu plumbing.

mod gpu;

pub use gpu::GpuState;

/// Named backend memory regions, one buffer each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// 4 floats: sin, cos, tan, atan of the color clock
    Color,
    /// `ball_stride * ball_count` floats, row-major
    Balls,
    /// 2 floats: pixel width, height
    Viewport,
    /// 1 float: last frame's delta in seconds
    DeltaTime,
    /// 1 float: clamped camera depth
    CameraDepth,
}

/// A fixed-function backend the frame loop hands buffers to
///
/// Writes are fire-and-forget and assumed synchronously queued; the caller
/// never learns whether a submitted frame actually drew.
pub trait RenderBackend {
    /// Queue `data` into `region` starting at `offset` bytes
    fn write_region(&mut self, region: Region, offset: u64, data: &[f32]);

    /// Draw using whatever was last written
    fn submit_frame(&mut self);
}
