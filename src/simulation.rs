//! Simulation builder and window runner.
//!
//! Opens a window, spawns the field once the window size is known, and then
//! runs one frame per redraw: attractors chase the pointer, particles are
//! integrated, positions and colors go to the GPU, and the frame is drawn.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::color::SpeedPalette;
use crate::config::FieldConfig;
use crate::error::SimulationError;
use crate::field::ParticleField;
use crate::gpu::PointRenderer;
use crate::input::Input;
use crate::time::FrameTimer;

const WINDOW_TITLE: &str = "gravfield";

/// A particle field builder.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// Simulation::new()
///     .with_particle_count(20_000)
///     .with_seed(7)
///     .run()?;
/// ```
pub struct Simulation {
    config: FieldConfig,
    seed: Option<u64>,
}

impl Simulation {
    /// Create a new simulation with the default constants.
    pub fn new() -> Self {
        Self {
            config: FieldConfig::default(),
            seed: None,
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Set the speed-to-color ramp.
    pub fn with_palette(mut self, palette: SpeedPalette) -> Self {
        self.config.palette = palette;
        self
    }

    /// Seed the particle layout so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }

    /// Run the simulation. This blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        log::info!(
            "Starting field with {} particles and {} attractors",
            self.config.particle_count,
            self.config.attractors.len()
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config.clone(), self.rng());
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    config: FieldConfig,
    rng: SmallRng,
    window: Option<Arc<Window>>,
    renderer: Option<PointRenderer>,
    field: Option<ParticleField>,
    input: Input,
    timer: FrameTimer,
    error: Option<SimulationError>,
}

impl App {
    fn new(config: FieldConfig, rng: SmallRng) -> Self {
        Self {
            config,
            rng,
            window: None,
            renderer: None,
            field: None,
            input: Input::new(),
            timer: FrameTimer::default(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let size = window.inner_size();

        let renderer = pollster::block_on(PointRenderer::new(
            window.clone(),
            self.config.particle_count,
            self.config.point_size,
        ))?;

        let field = ParticleField::new(
            self.config.clone(),
            size.width.max(1),
            size.height.max(1),
            &mut self.rng,
        );
        log::info!(
            "Field spawned over {:.1} x {:.1} world units",
            field.viewport().bounds().width,
            field.viewport().bounds().height
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.field = Some(field);
        Ok(())
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(field), Some(renderer)) = (&mut self.field, &mut self.renderer) else {
            return;
        };

        if let Some(pointer) = self.input.mouse_position() {
            field.set_pointer_px(pointer.x, pointer.y);
        }
        field.step();

        match field.present(renderer) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if let Some(fps) = self.timer.tick() {
            log::debug!("frame {} at {:.1} fps", field.frame(), fps);
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "{} - {} particles - {:.0} fps",
                    WINDOW_TITLE,
                    field.particles().len(),
                    fps
                ));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("{}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { .. } if self.input.escape_pressed() => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                if let Some(field) = &mut self.field {
                    field.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
