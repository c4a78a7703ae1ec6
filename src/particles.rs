//! Particle storage.
//!
//! Particles are kept as a struct of arrays: one `Vec` per attribute, all the
//! same length and indexed by particle id. The positions and colors are handed
//! to the renderer as-is, so they stay contiguous `Vec3` slices.

use glam::Vec3;
use rand::Rng;

use crate::bounds::WorldBounds;
use crate::config::FieldConfig;

/// Per-particle constants that shape how a particle reacts to forces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tunables {
    /// Scales the repulsion impulse, in `[0.01, 1.0]` by default.
    pub effectiveness: f32,
    /// Repulsion impulse at the attractor center, in `[1.0, 9.0]` by default.
    pub repel_force: f32,
    /// Magnitude of the pull toward home, in `[0.005, 0.01]` by default.
    pub return_speed: f32,
}

/// Owned, fixed-size particle store.
///
/// Indices stay valid for the lifetime of the buffer; nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct ParticleBuffer {
    home: Vec<Vec3>,
    pub(crate) positions: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
    pub(crate) colors: Vec<Vec3>,
    effectiveness: Vec<f32>,
    repel_force: Vec<f32>,
    return_speed: Vec<f32>,
}

impl ParticleBuffer {
    /// An empty buffer with room for `capacity` particles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            home: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            effectiveness: Vec::with_capacity(capacity),
            repel_force: Vec::with_capacity(capacity),
            return_speed: Vec::with_capacity(capacity),
        }
    }

    /// Scatter `config.particle_count` particles uniformly over `bounds`.
    ///
    /// Every particle starts at rest on its home position, colored with the
    /// palette's slow color.
    pub fn spawn<R: Rng + ?Sized>(config: &FieldConfig, bounds: WorldBounds, rng: &mut R) -> Self {
        let count = config.particle_count as usize;
        let mut buffer = Self::with_capacity(count);
        let (hw, hh) = (bounds.half_width(), bounds.half_height());

        for _ in 0..count {
            let home = Vec3::new(rng.gen_range(-hw..=hw), rng.gen_range(-hh..=hh), 0.0);
            let tunables = Tunables {
                effectiveness: config.effectiveness.sample(rng),
                repel_force: config.repel_force.sample(rng),
                return_speed: config.return_speed.sample(rng),
            };
            buffer.push(home, home, tunables, config.palette.slow);
        }

        buffer
    }

    /// Append a particle with explicit state. Velocity starts at zero.
    ///
    /// Returns the new particle's index.
    pub fn push(&mut self, home: Vec3, position: Vec3, tunables: Tunables, color: Vec3) -> usize {
        self.home.push(home);
        self.positions.push(position);
        self.velocities.push(Vec3::ZERO);
        self.colors.push(color);
        self.effectiveness.push(tunables.effectiveness);
        self.repel_force.push(tunables.repel_force);
        self.return_speed.push(tunables.return_speed);
        self.positions.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn homes(&self) -> &[Vec3] {
        &self.home
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn tunables(&self, index: usize) -> Tunables {
        Tunables {
            effectiveness: self.effectiveness[index],
            repel_force: self.repel_force[index],
            return_speed: self.return_speed[index],
        }
    }

    /// Overwrite a particle's velocity.
    pub fn set_velocity(&mut self, index: usize, velocity: Vec3) {
        self.velocities[index] = velocity;
    }

    /// Mutable views over every attribute the integrator touches, split so
    /// they can be walked in lockstep.
    pub(crate) fn lanes_mut(&mut self) -> Lanes<'_> {
        Lanes {
            home: &self.home,
            positions: &mut self.positions,
            velocities: &mut self.velocities,
            colors: &mut self.colors,
            effectiveness: &self.effectiveness,
            repel_force: &self.repel_force,
            return_speed: &self.return_speed,
        }
    }
}

pub(crate) struct Lanes<'a> {
    pub home: &'a [Vec3],
    pub positions: &'a mut [Vec3],
    pub velocities: &'a mut [Vec3],
    pub colors: &'a mut [Vec3],
    pub effectiveness: &'a [f32],
    pub repel_force: &'a [f32],
    pub return_speed: &'a [f32],
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn small_config(count: u32) -> FieldConfig {
        FieldConfig {
            particle_count: count,
            ..FieldConfig::default()
        }
    }

    #[test]
    fn test_spawn_inside_bounds_and_at_rest() {
        let config = small_config(5_000);
        let bounds = WorldBounds::new(160.0, 90.0);
        let mut rng = SmallRng::seed_from_u64(42);
        let buffer = ParticleBuffer::spawn(&config, bounds, &mut rng);

        assert_eq!(buffer.len(), 5_000);
        for i in 0..buffer.len() {
            assert!(bounds.contains(buffer.positions()[i]));
            assert_eq!(buffer.positions()[i].z, 0.0);
            assert_eq!(buffer.positions()[i], buffer.homes()[i]);
            assert_eq!(buffer.velocities()[i], Vec3::ZERO);
            assert_eq!(buffer.colors()[i], config.palette.slow);
        }
    }

    #[test]
    fn test_spawn_tunables_in_range() {
        let config = small_config(5_000);
        let mut rng = SmallRng::seed_from_u64(3);
        let buffer = ParticleBuffer::spawn(&config, WorldBounds::new(50.0, 50.0), &mut rng);

        for i in 0..buffer.len() {
            let t = buffer.tunables(i);
            assert!((0.01..=1.0).contains(&t.effectiveness));
            assert!((1.0..=9.0).contains(&t.repel_force));
            assert!((0.005..=0.01).contains(&t.return_speed));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let config = small_config(100);
        let bounds = WorldBounds::new(20.0, 10.0);
        let a = ParticleBuffer::spawn(&config, bounds, &mut SmallRng::seed_from_u64(9));
        let b = ParticleBuffer::spawn(&config, bounds, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.tunables(57), b.tunables(57));
    }

    #[test]
    fn test_push_returns_index() {
        let mut buffer = ParticleBuffer::default();
        let t = Tunables {
            effectiveness: 1.0,
            repel_force: 5.0,
            return_speed: 0.01,
        };
        assert_eq!(buffer.push(Vec3::ZERO, Vec3::ZERO, t, Vec3::ONE), 0);
        assert_eq!(buffer.push(Vec3::X, Vec3::X, t, Vec3::ONE), 1);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.tunables(1), t);
    }
}
