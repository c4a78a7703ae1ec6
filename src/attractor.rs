//! Mouse-chasing attractors.
//!
//! Each attractor pursues the pointer on its own: the offset to the target is
//! scaled into an acceleration, added to the velocity, damped, and integrated
//! with an implicit unit time step. Particles are pushed away from whichever
//! attractor is nearest (see [`crate::integrator`]).

use glam::Vec3;

/// A body that chases the pointer and repels particles within `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Repulsion reach in world units.
    pub radius: f32,
    /// Fraction of the offset to the target added to velocity each frame.
    pub strength: f32,
    /// Velocity multiplier applied after the pull.
    pub damping: f32,
}

impl Attractor {
    pub const fn new(radius: f32, strength: f32, damping: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            radius,
            strength,
            damping,
        }
    }

    pub const fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// The two attractors the field runs with: a wide lazy one and a small
    /// nimble one.
    pub const fn default_pair() -> [Attractor; 2] {
        [Attractor::new(18.0, 0.012, 0.92), Attractor::new(10.0, 0.04, 0.86)]
    }

    /// Advance one frame toward `target`.
    #[inline]
    pub fn pursue(&mut self, target: Vec3) {
        self.velocity += (target - self.position) * self.strength;
        self.velocity *= self.damping;
        self.position += self.velocity;
    }

    #[inline]
    pub fn radius_squared(&self) -> f32 {
        self.radius * self.radius
    }
}

/// Move every attractor one frame toward the pointer target.
pub fn update_attractors(attractors: &mut [Attractor], target: Vec3) {
    for attractor in attractors {
        attractor.pursue(target);
    }
}
