//! Metaballs entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use metaballs::frame_loop::FrameLoop;
    use metaballs::input::{CameraKey, InputState};
    use metaballs::render::GpuState;
    use metaballs::settings::Settings;
    use metaballs::sim::Simulation;

    /// App instance holding all state
    struct App {
        frame_loop: FrameLoop,
        input: InputState,
        gpu: GpuState,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Metaballs starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the backing store to the device pixel grid
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        // Write the effective settings back so first runs leave an editable blob
        settings.save();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let layout = settings.variant.layout();
        let sim = Simulation::generate(seed, settings.ball_count);

        log::info!(
            "Field initialized: {} balls, stride {}, seed {}",
            settings.ball_count,
            layout.ball_stride(),
            seed
        );

        // Both failures here are fatal: without an adapter and a device
        // there is nothing to hand frames to.
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("No adapter found");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let mut gpu =
            GpuState::new(surface, &adapter, width, height, layout, settings.ball_count).await;

        let frame_loop = FrameLoop::new(sim, layout);
        frame_loop.write_viewport(width as f32, height as f32, &mut gpu);

        let app = Rc::new(RefCell::new(App {
            frame_loop,
            input: InputState::new(),
            gpu,
        }));

        setup_key_listeners(app.clone());

        // Start the frame loop
        request_animation_frame(app);

        log::info!("Metaballs running!");
    }

    fn camera_key(key: &str) -> Option<CameraKey> {
        match key {
            "ArrowUp" => Some(CameraKey::Up),
            "ArrowDown" => Some(CameraKey::Down),
            _ => None,
        }
    }

    fn setup_key_listeners(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key press edges
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = camera_key(&event.key()) {
                    app.borrow_mut().input.set_pressed(key, true);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key release edges
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = camera_key(&event.key()) {
                    app.borrow_mut().input.set_pressed(key, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let a = &mut *app.borrow_mut();
            a.frame_loop.frame(&a.input, &mut a.gpu);
            update_depth_readout(a.frame_loop.camera_depth());
        }

        request_animation_frame(app);
    }

    /// Read-only projection of the camera for the page
    fn update_depth_readout(depth: f32) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("info") {
            el.set_text_content(Some(&format!("Camera Z: {depth}")));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Metaballs (native) starting...");
    log::info!("Native mode has no window backend - run with `trunk serve` for the web version");

    println!("\nRunning headless smoke loop...");
    smoke_loop();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the frame loop against a sink backend for a couple of seconds'
/// worth of frames
#[cfg(not(target_arch = "wasm32"))]
fn smoke_loop() {
    use metaballs::frame_loop::FrameLoop;
    use metaballs::input::InputState;
    use metaballs::render::{Region, RenderBackend};
    use metaballs::settings::Settings;
    use metaballs::sim::Simulation;

    struct SinkBackend {
        frames: u32,
    }

    impl RenderBackend for SinkBackend {
        fn write_region(&mut self, _region: Region, _offset: u64, _data: &[f32]) {}

        fn submit_frame(&mut self) {
            self.frames += 1;
        }
    }

    let settings = Settings::load();
    let sim = Simulation::generate(settings.seed.unwrap_or(42), settings.ball_count);
    let mut frame_loop = FrameLoop::new(sim, settings.variant.layout());
    let mut backend = SinkBackend { frames: 0 };
    let input = InputState::new();

    let mut remaining = 120;
    frame_loop.run(&input, &mut backend, || {
        remaining -= 1;
        remaining >= 0
    });

    assert_eq!(backend.frames, 120);
    println!(
        "✓ {} headless frames, camera depth {}",
        backend.frames,
        frame_loop.camera_depth()
    );
}
