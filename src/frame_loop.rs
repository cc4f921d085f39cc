//! Per-frame orchestration
//!
//! One frame is: measure time, step the field, step the camera, pack, hand
//! the blocks to the backend, trigger the draw. The order within a frame is
//! strict; input is whatever the collaborator last wrote, and a one-frame
//! stale read is accepted.

use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::input::InputState;
use crate::packing::{self, BufferLayout};
use crate::render::{Region, RenderBackend};
use crate::sim::{self, Simulation};

/// Scheduling state: Idle until the first frame, Running forever after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Idle,
    Running,
}

pub struct FrameLoop {
    clock: FrameClock,
    sim: Simulation,
    camera: Camera,
    layout: BufferLayout,
    state: LoopState,
}

impl FrameLoop {
    pub fn new(sim: Simulation, layout: BufferLayout) -> Self {
        Self {
            clock: FrameClock::new(),
            sim,
            camera: Camera::new(),
            layout,
            state: LoopState::Idle,
        }
    }

    /// Current camera depth, for the diagnostic readout
    pub fn camera_depth(&self) -> f32 {
        self.camera.depth
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Write the viewport block; the value never changes after init
    pub fn write_viewport(&self, width: f32, height: f32, backend: &mut impl RenderBackend) {
        backend.write_region(Region::Viewport, 0, &packing::viewport_block(width, height));
    }

    /// Advance one frame: clock, field, camera, pack, hand off
    pub fn frame(&mut self, input: &InputState, backend: &mut impl RenderBackend) {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            log::info!("Frame loop running ({} balls)", self.sim.ball_count());
        }

        let dt = self.clock.tick();
        sim::step(&mut self.sim, dt);
        self.camera.step(dt, input);

        backend.write_region(
            Region::Color,
            0,
            &packing::color_block(self.clock.color_time()),
        );
        backend.write_region(Region::Balls, 0, &packing::ball_block(&self.sim, self.layout));
        backend.write_region(Region::DeltaTime, 0, &packing::delta_time_block(dt));
        backend.write_region(Region::CameraDepth, 0, &packing::camera_block(&self.camera));
        backend.submit_frame();
    }

    /// Drive frames for as long as the host's next-tick primitive allows
    ///
    /// Hosts that cannot block (the browser) call `frame` from their own
    /// scheduler callback instead. There is no terminal state of our own;
    /// the loop ends only when `next_tick` declines.
    pub fn run(
        &mut self,
        input: &InputState,
        backend: &mut impl RenderBackend,
        mut next_tick: impl FnMut() -> bool,
    ) {
        while next_tick() {
            self.frame(input, backend);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CameraKey;

    #[derive(Debug, PartialEq)]
    enum Event {
        Write(Region, u64, usize),
        Submit,
    }

    /// Records the order and shape of every handoff
    #[derive(Default)]
    struct RecordingBackend {
        events: Vec<Event>,
        last_camera: Vec<f32>,
    }

    impl RenderBackend for RecordingBackend {
        fn write_region(&mut self, region: Region, offset: u64, data: &[f32]) {
            if region == Region::CameraDepth {
                self.last_camera = data.to_vec();
            }
            self.events.push(Event::Write(region, offset, data.len()));
        }

        fn submit_frame(&mut self) {
            self.events.push(Event::Submit);
        }
    }

    fn field(count: usize) -> Simulation {
        Simulation::generate(123, count)
    }

    #[test]
    fn test_frame_writes_regions_in_order() {
        let mut frame_loop = FrameLoop::new(field(50), BufferLayout::VOLUMETRIC);
        let mut backend = RecordingBackend::default();
        let input = InputState::new();

        frame_loop.frame(&input, &mut backend);

        assert_eq!(
            backend.events,
            vec![
                Event::Write(Region::Color, 0, 4),
                Event::Write(Region::Balls, 0, 7 * 50),
                Event::Write(Region::DeltaTime, 0, 1),
                Event::Write(Region::CameraDepth, 0, 1),
                Event::Submit,
            ]
        );
    }

    #[test]
    fn test_idle_until_first_frame() {
        let mut frame_loop = FrameLoop::new(field(2), BufferLayout::FLAT);
        assert!(!frame_loop.is_running());

        let mut backend = RecordingBackend::default();
        frame_loop.frame(&InputState::new(), &mut backend);
        assert!(frame_loop.is_running());
    }

    #[test]
    fn test_run_stops_when_host_declines() {
        let mut frame_loop = FrameLoop::new(field(3), BufferLayout::VOLUMETRIC);
        let mut backend = RecordingBackend::default();
        let input = InputState::new();

        let mut remaining = 5;
        frame_loop.run(&input, &mut backend, || {
            remaining -= 1;
            remaining >= 0
        });

        let submits = backend
            .events
            .iter()
            .filter(|e| **e == Event::Submit)
            .count();
        assert_eq!(submits, 5);
    }

    #[test]
    fn test_viewport_written_separately_from_frames() {
        let frame_loop = FrameLoop::new(field(1), BufferLayout::VOLUMETRIC);
        let mut backend = RecordingBackend::default();

        frame_loop.write_viewport(800.0, 600.0, &mut backend);
        assert_eq!(backend.events, vec![Event::Write(Region::Viewport, 0, 2)]);
    }

    #[test]
    fn test_camera_input_reaches_packed_block() {
        let mut frame_loop = FrameLoop::new(field(1), BufferLayout::VOLUMETRIC);
        let mut backend = RecordingBackend::default();

        let mut input = InputState::new();
        input.set_pressed(CameraKey::Up, true);

        // Held key for several frames nudges depth upward; the packed block
        // always carries the current clamped value.
        for _ in 0..3 {
            frame_loop.frame(&input, &mut backend);
        }
        assert_eq!(backend.last_camera, vec![frame_loop.camera_depth()]);
        assert!((0.0..=1.0).contains(&frame_loop.camera_depth()));
    }

    #[test]
    fn test_every_frame_repacks_every_region() {
        let mut frame_loop = FrameLoop::new(field(4), BufferLayout::DRIFTING);
        let mut backend = RecordingBackend::default();
        let input = InputState::new();

        frame_loop.frame(&input, &mut backend);
        frame_loop.frame(&input, &mut backend);

        let writes = backend
            .events
            .iter()
            .filter(|e| matches!(e, Event::Write(..)))
            .count();
        assert_eq!(writes, 8); // 4 regions per frame, both frames
    }
}
