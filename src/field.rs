//! The particle field: everything one frame needs, owned in one place.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::attractor::{update_attractors, Attractor};
use crate::config::FieldConfig;
use crate::integrator::{integrate, StepParams};
use crate::particles::ParticleBuffer;
use crate::sink::RenderSink;
use crate::viewport::Viewport;

/// Particles, attractors and the view they live in.
///
/// ```ignore
/// let mut field = ParticleField::new(FieldConfig::default(), 1280, 720, &mut rng);
/// loop {
///     if let Some(p) = input.mouse_position() {
///         field.set_pointer_px(p.x, p.y);
///     }
///     field.step();
///     field.present(&mut renderer)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: ParticleBuffer,
    attractors: Vec<Attractor>,
    viewport: Viewport,
    pointer_px: Option<Vec2>,
    params: StepParams,
    frame: u64,
}

impl ParticleField {
    /// Spawn the particles over a window of `width_px` x `height_px` pixels.
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, width_px: u32, height_px: u32, rng: &mut R) -> Self {
        let viewport = Viewport::new(width_px, height_px, config.world_height, config.fov_y_degrees);
        let particles = ParticleBuffer::spawn(&config, viewport.bounds(), rng);
        Self::from_parts(particles, config.attractors.clone(), viewport, StepParams::from(&config))
    }

    /// Assemble a field from already built pieces.
    pub fn from_parts(
        particles: ParticleBuffer,
        attractors: Vec<Attractor>,
        viewport: Viewport,
        params: StepParams,
    ) -> Self {
        Self {
            particles,
            attractors,
            viewport,
            pointer_px: None,
            params,
            frame: 0,
        }
    }

    pub fn particles(&self) -> &ParticleBuffer {
        &self.particles
    }

    pub fn attractors(&self) -> &[Attractor] {
        &self.attractors
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Record the latest pointer position in window pixels (origin top-left).
    ///
    /// The pixels are kept as given and converted against the current
    /// viewport, so a later resize moves the pointer with the window.
    pub fn set_pointer_px(&mut self, x: f32, y: f32) {
        self.pointer_px = Some(Vec2::new(x, y));
    }

    /// Pointer in normalized device coordinates. The window center until a
    /// pointer position has been recorded.
    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer_px
            .map_or(Vec2::ZERO, |p| self.viewport.ndc_from_pixels(p.x, p.y))
    }

    /// Where the pointer currently lands on the simulation plane.
    pub fn pointer_target(&self) -> Vec3 {
        self.viewport.plane_point(self.pointer_ndc())
    }

    /// Follow a window resize. Home positions are kept; particles that end up
    /// outside the new bounds bounce back in over the next frames.
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.viewport.resize(width_px, height_px);
    }

    /// Advance one frame: attractors chase the pointer, then every particle
    /// is integrated once.
    pub fn step(&mut self) {
        let target = self.pointer_target();
        update_attractors(&mut self.attractors, target);
        integrate(
            &mut self.particles,
            &self.attractors,
            self.viewport.bounds(),
            &self.params,
        );
        self.frame += 1;
    }

    /// Hand the current positions and colors to `sink` and draw.
    pub fn present<S: RenderSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.upload_positions(self.particles.positions());
        sink.upload_colors(self.particles.colors());
        sink.draw(self.viewport.view_proj())
    }
}
