//! Per-frame particle integration.
//!
//! One call to [`integrate`] advances every particle by one frame. There is no
//! delta time: a frame is one unit of integration, so the motion depends on
//! the frame rate. For each particle, in order:
//!
//! 1. find the nearest attractor (first one wins ties)
//! 2. add a repulsion impulse if inside its radius
//! 3. damp velocity
//! 4. add a constant pull toward home
//! 5. move
//! 6. reflect off the X and Y edges of the world
//! 7. recolor by speed

use glam::Vec3;

use crate::attractor::Attractor;
use crate::bounds::WorldBounds;
use crate::color::SpeedPalette;
use crate::config::FieldConfig;
use crate::particles::ParticleBuffer;

/// The subset of [`FieldConfig`] the integrator reads every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub damping: f32,
    pub bounce_damping: f32,
    pub epsilon: f32,
    pub palette: SpeedPalette,
}

impl From<&FieldConfig> for StepParams {
    fn from(config: &FieldConfig) -> Self {
        Self {
            damping: config.damping,
            bounce_damping: config.bounce_damping,
            epsilon: config.epsilon,
            palette: config.palette,
        }
    }
}

/// Index and squared distance of the attractor closest to `position`.
///
/// Linear scan with a strict `<`, so an earlier attractor keeps its place on
/// equal distance. Returns `None` only for an empty slice.
#[inline]
pub fn nearest_attractor(position: Vec3, attractors: &[Attractor]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, attractor) in attractors.iter().enumerate() {
        let dist_sq = position.distance_squared(attractor.position);
        match best {
            Some((_, best_sq)) if dist_sq >= best_sq => {}
            // NaN distances never replace a real one
            Some(_) if dist_sq.is_nan() => {}
            _ => best = Some((i, dist_sq)),
        }
    }
    best
}

/// Repulsion impulse from `attractor` on a particle at `position`.
///
/// Falls off linearly from `repel_force * effectiveness` at the center to zero
/// at the radius, pointing away from the attractor. Nothing is applied outside
/// the radius or when the particle sits within `epsilon` of the center.
#[inline]
pub fn repulsion(
    position: Vec3,
    attractor: &Attractor,
    repel_force: f32,
    effectiveness: f32,
    epsilon: f32,
) -> Option<Vec3> {
    let offset = position - attractor.position;
    let dist_sq = offset.length_squared();
    if !(dist_sq < attractor.radius_squared() && dist_sq > epsilon) {
        return None;
    }
    let dist = dist_sq.sqrt();
    let magnitude = (1.0 - dist / attractor.radius) * repel_force * effectiveness;
    Some(offset / dist * magnitude)
}

/// Reflect one axis off `[-limit, limit]`, returning the new `(position, velocity)`.
#[inline]
fn reflect_axis(pos: f32, vel: f32, limit: f32, bounce_damping: f32) -> (f32, f32) {
    if pos > limit {
        (limit, vel * -bounce_damping)
    } else if pos < -limit {
        (-limit, vel * -bounce_damping)
    } else {
        (pos, vel)
    }
}

/// Advance every particle in `particles` by one frame.
pub fn integrate(
    particles: &mut ParticleBuffer,
    attractors: &[Attractor],
    bounds: WorldBounds,
    params: &StepParams,
) {
    let lanes = particles.lanes_mut();
    let (hw, hh) = (bounds.half_width(), bounds.half_height());

    for i in 0..lanes.positions.len() {
        let mut pos = lanes.positions[i];
        let mut vel = lanes.velocities[i];

        if let Some((nearest, _)) = nearest_attractor(pos, attractors) {
            if let Some(push) = repulsion(
                pos,
                &attractors[nearest],
                lanes.repel_force[i],
                lanes.effectiveness[i],
                params.epsilon,
            ) {
                vel += push;
            }
        }

        vel *= params.damping;

        let to_home = lanes.home[i] - pos;
        let home_dist = to_home.length();
        if home_dist > params.epsilon {
            vel += to_home / home_dist * lanes.return_speed[i];
        }

        pos += vel;

        (pos.x, vel.x) = reflect_axis(pos.x, vel.x, hw, params.bounce_damping);
        (pos.y, vel.y) = reflect_axis(pos.y, vel.y, hh, params.bounce_damping);

        lanes.positions[i] = pos;
        lanes.velocities[i] = vel;
        lanes.colors[i] = params.palette.color_for_velocity(vel);
    }
}
