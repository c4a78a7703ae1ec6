//! Tunable constants for the particle field.
//!
//! Everything here is fixed at compile time. [`FieldConfig::default()`] bundles
//! the constants into one value so the integrator and initializer can be
//! driven from a single place (and so tests can tweak individual knobs).

use glam::Vec3;
use rand::Rng;

use crate::attractor::Attractor;
use crate::color::SpeedPalette;

/// Number of particles spawned at startup.
pub const PARTICLE_COUNT: u32 = 75_000;

/// Height of the visible world rectangle in world units.
///
/// The width follows from the window aspect ratio.
pub const WORLD_HEIGHT: f32 = 100.0;

/// Per-frame velocity multiplier applied to every particle.
pub const DAMPING: f32 = 0.90;

/// Fraction of velocity kept (and reversed) when a particle hits an edge.
pub const BOUNCE_DAMPING: f32 = 0.8;

/// Noise floor guarding normalizations against near-zero lengths.
pub const EPSILON: f32 = 1e-6;

/// How strongly a particle reacts to repulsion.
pub const EFFECTIVENESS: Span = Span::new(0.01, 1.0);

/// Peak repulsion impulse at the center of an attractor.
pub const REPEL_FORCE: Span = Span::new(1.0, 9.0);

/// Constant pull back toward the home position.
pub const RETURN_SPEED: Span = Span::new(0.005, 0.01);

/// Speed at which a particle is drawn fully in the fast color.
pub const MAX_SPEED: f32 = 4.0;

/// Color of a particle at rest.
pub const SLOW_COLOR: Vec3 = Vec3::new(1.0, 0.97, 0.88);

/// Color of a particle at or above [`MAX_SPEED`].
pub const FAST_COLOR: Vec3 = Vec3::new(1.0, 0.78, 0.22);

/// Point sprite size in world units.
pub const POINT_SIZE: f32 = 0.18;

/// Vertical field of view of the camera, in degrees.
pub const FOV_Y_DEGREES: f32 = 75.0;

/// Inclusive `[min, max]` range a per-particle tunable is sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw a value uniformly from the range, bounds included.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// All knobs of the field in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub particle_count: u32,
    pub world_height: f32,
    pub damping: f32,
    pub bounce_damping: f32,
    pub epsilon: f32,
    pub effectiveness: Span,
    pub repel_force: Span,
    pub return_speed: Span,
    pub palette: SpeedPalette,
    /// Attractors in declaration order; the first wins distance ties.
    pub attractors: Vec<Attractor>,
    pub point_size: f32,
    pub fov_y_degrees: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            world_height: WORLD_HEIGHT,
            damping: DAMPING,
            bounce_damping: BOUNCE_DAMPING,
            epsilon: EPSILON,
            effectiveness: EFFECTIVENESS,
            repel_force: REPEL_FORCE,
            return_speed: RETURN_SPEED,
            palette: SpeedPalette::new(SLOW_COLOR, FAST_COLOR, MAX_SPEED),
            attractors: Attractor::default_pair().to_vec(),
            point_size: POINT_SIZE,
            fov_y_degrees: FOV_Y_DEGREES,
        }
    }
}
