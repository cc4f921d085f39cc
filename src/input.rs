//! Camera key state
//!
//! The input collaborator reports press/release edges; the frame loop samples
//! the held flags once per frame. No debouncing and no queue: a press and
//! release that both land between two samples are lost, last write wins.

/// Logical camera control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraKey {
    /// Increase depth (ArrowUp in the browser driver)
    Up,
    /// Decrease depth (ArrowDown)
    Down,
}

/// Held-key booleans for camera control
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up_held: bool,
    pub down_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press (`true`) or release (`false`) edge
    pub fn set_pressed(&mut self, key: CameraKey, pressed: bool) {
        match key {
            CameraKey::Up => self.up_held = pressed,
            CameraKey::Down => self.down_held = pressed,
        }
    }
}
