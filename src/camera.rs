//! Depth camera
//!
//! One scalar: how deep into the field the eye sits. Held keys nudge it,
//! and it is clamped back into [0,1] every step.

use crate::consts::CAMERA_SPEED;
use crate::input::InputState;

#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub depth: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply held-key impulses for `dt` seconds, then clamp
    ///
    /// Both keys may apply in the same step; they nearly cancel and that is
    /// the contract, not a case to special-handle.
    pub fn step(&mut self, dt: f32, input: &InputState) {
        if input.up_held {
            self.depth += CAMERA_SPEED * dt;
        }
        if input.down_held {
            self.depth -= CAMERA_SPEED * dt;
        }
        self.depth = self.depth.clamp(0.0, 1.0);
    }
}
