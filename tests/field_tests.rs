//! Integration tests for the particle field.
//!
//! These drive the public API the same way the window loop does: build a
//! field or a buffer, step it, and look at what comes out the other end.

use gravfield::{
    integrate, Attractor, FieldConfig, Mat4, ParticleBuffer, ParticleField, RenderSink, SpeedPalette,
    StepParams, Tunables, Vec2, Vec3, Viewport, WorldBounds,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn params() -> StepParams {
    StepParams::from(&FieldConfig::default())
}

fn single(home: Vec3, position: Vec3, tunables: Tunables) -> ParticleBuffer {
    let mut buffer = ParticleBuffer::default();
    buffer.push(home, position, tunables, Vec3::ONE);
    buffer
}

fn far_away() -> Attractor {
    Attractor::new(20.0, 0.01, 0.9).at(Vec3::splat(f32::INFINITY))
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_default_field_spawns_inside_world_at_rest() {
    let field = ParticleField::new(FieldConfig::default(), 1280, 720, &mut SmallRng::seed_from_u64(1));
    let bounds = field.viewport().bounds();
    let particles = field.particles();

    assert_eq!(particles.len(), 75_000);
    assert!(particles.positions().iter().all(|p| bounds.contains(*p)));
    assert!(particles.velocities().iter().all(|v| *v == Vec3::ZERO));
    assert!(particles.colors().iter().all(|c| *c == FieldConfig::default().palette.slow));

    for i in (0..particles.len()).step_by(97) {
        let t = particles.tunables(i);
        assert!((0.01..=1.0).contains(&t.effectiveness));
        assert!((1.0..=9.0).contains(&t.repel_force));
        assert!((0.005..=0.01).contains(&t.return_speed));
    }
}

// ============================================================================
// Integrator properties
// ============================================================================

#[test]
fn test_rest_at_home_is_a_fixed_point() {
    let home = Vec3::new(3.0, -2.0, 0.0);
    let mut buffer = single(
        home,
        home,
        Tunables {
            effectiveness: 1.0,
            repel_force: 9.0,
            return_speed: 0.01,
        },
    );

    integrate(&mut buffer, &[far_away()], WorldBounds::new(100.0, 100.0), &params());

    assert_eq!(buffer.positions()[0], home);
    assert_eq!(buffer.velocities()[0], Vec3::ZERO);
}

#[test]
fn test_boundary_reflection_order() {
    let bounds = WorldBounds::new(40.0, 20.0);
    let hw = bounds.half_width();
    let eps = 0.01;
    let v = 2.0;
    let start = Vec3::new(hw + eps, 0.0, 0.0);
    let mut buffer = single(
        start,
        start,
        Tunables {
            effectiveness: 1.0,
            repel_force: 1.0,
            return_speed: 0.0,
        },
    );
    buffer.set_velocity(0, Vec3::new(v, 0.0, 0.0));

    integrate(&mut buffer, &[far_away()], bounds, &params());

    // damping, then position update, then clamp and bounce
    assert_eq!(buffer.positions()[0].x, hw);
    assert!((buffer.velocities()[0].x - (-0.8 * 0.9 * v)).abs() < 1e-6);
}

#[test]
fn test_first_attractor_wins_tie() {
    let tunables = Tunables {
        effectiveness: 1.0,
        repel_force: 5.0,
        return_speed: 0.0,
    };
    let attractors = [
        Attractor::new(20.0, 0.0, 1.0).at(Vec3::new(5.0, 0.0, 0.0)),
        Attractor::new(10.0, 0.0, 1.0).at(Vec3::new(-5.0, 0.0, 0.0)),
    ];
    let mut buffer = single(Vec3::ZERO, Vec3::ZERO, tunables);

    integrate(&mut buffer, &attractors, WorldBounds::new(100.0, 100.0), &params());

    // first attractor: 3.75 toward -X; the second would give 2.5 toward +X
    let vx = buffer.velocities()[0].x;
    assert!((vx - (-3.75 * 0.9)).abs() < 1e-5, "vx = {}", vx);

    let mut swapped = single(Vec3::ZERO, Vec3::ZERO, tunables);
    let reversed = [attractors[1], attractors[0]];
    integrate(&mut swapped, &reversed, WorldBounds::new(100.0, 100.0), &params());
    assert!((swapped.velocities()[0].x - 2.5 * 0.9).abs() < 1e-5);
}

#[test]
fn test_repulsion_example_scenario() {
    let attractor = Attractor::new(20.0, 0.5, 0.5).at(Vec3::new(5.0, 0.0, 0.0));
    let mut buffer = single(
        Vec3::ZERO,
        Vec3::ZERO,
        Tunables {
            effectiveness: 1.0,
            repel_force: 5.0,
            return_speed: 0.01,
        },
    );

    integrate(&mut buffer, &[attractor], WorldBounds::new(100.0, 100.0), &params());

    // (1 - 5/20) * 5 * 1 = 3.75 away from the attractor, then damped
    let vel = buffer.velocities()[0];
    assert!((vel - Vec3::new(-3.375, 0.0, 0.0)).length() < 1e-5, "vel = {:?}", vel);
    assert!((buffer.positions()[0] - vel).length() < 1e-6);
}

#[test]
fn test_coincident_attractor_does_not_blow_up() {
    let attractor = Attractor::new(20.0, 0.0, 1.0).at(Vec3::new(1.0, 1.0, 0.0));
    let mut buffer = single(
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Tunables {
            effectiveness: 1.0,
            repel_force: 9.0,
            return_speed: 0.01,
        },
    );

    integrate(&mut buffer, &[attractor], WorldBounds::new(100.0, 100.0), &params());

    assert!(buffer.positions()[0].is_finite());
    assert_eq!(buffer.velocities()[0], Vec3::ZERO);
}

#[test]
fn test_color_mapping_endpoints_and_blend() {
    let palette = SpeedPalette::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 0.5, 0.0), 4.0);
    let p = StepParams { palette, ..params() };
    let bounds = WorldBounds::new(1000.0, 1000.0);
    let tunables = Tunables {
        effectiveness: 1.0,
        repel_force: 1.0,
        return_speed: 0.0,
    };

    let mut buffer = ParticleBuffer::default();
    for _ in 0..3 {
        buffer.push(Vec3::ZERO, Vec3::ZERO, tunables, Vec3::ZERO);
    }
    // speeds after damping: 0, 2 (half of max), 9 (saturated)
    buffer.set_velocity(1, Vec3::new(0.0, 2.0 / 0.9, 0.0));
    buffer.set_velocity(2, Vec3::new(10.0, 0.0, 0.0));

    integrate(&mut buffer, &[], bounds, &p);

    assert_eq!(buffer.colors()[0], palette.slow);
    assert!((buffer.colors()[1] - Vec3::new(1.0, 0.75, 0.5)).length() < 1e-5);
    assert_eq!(buffer.colors()[2], palette.fast);
}

#[test]
fn test_displaced_particles_settle_home() {
    let home = Vec3::new(10.0, 5.0, 0.0);
    let mut buffer = single(
        home,
        Vec3::new(12.0, 3.0, 0.0),
        Tunables {
            effectiveness: 1.0,
            repel_force: 1.0,
            return_speed: 0.01,
        },
    );

    for _ in 0..2_000 {
        integrate(&mut buffer, &[far_away()], WorldBounds::new(100.0, 100.0), &params());
    }

    // constant-magnitude pull leaves a small jitter around home
    assert!((buffer.positions()[0] - home).length() < 0.1);
}

// ============================================================================
// Field and render sink
// ============================================================================

#[derive(Default)]
struct RecordingSink {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    draws: Vec<Mat4>,
}

impl RenderSink for RecordingSink {
    type Error = ();

    fn upload_positions(&mut self, positions: &[Vec3]) {
        self.positions = positions.to_vec();
    }

    fn upload_colors(&mut self, colors: &[Vec3]) {
        self.colors = colors.to_vec();
    }

    fn draw(&mut self, view_proj: Mat4) -> Result<(), ()> {
        self.draws.push(view_proj);
        Ok(())
    }
}

#[test]
fn test_present_hands_over_buffers() {
    let config = FieldConfig {
        particle_count: 500,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(config, 800, 600, &mut SmallRng::seed_from_u64(5));
    field.set_pointer_px(280.0, 180.0);
    field.step();

    let mut sink = RecordingSink::default();
    field.present(&mut sink).unwrap();

    assert_eq!(sink.positions, field.particles().positions());
    assert_eq!(sink.colors, field.particles().colors());
    assert_eq!(sink.draws, vec![field.viewport().view_proj()]);
}

#[test]
fn test_attractor_sweep_disturbs_and_field_recovers() {
    let config = FieldConfig {
        particle_count: 2_000,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(config, 1000, 1000, &mut SmallRng::seed_from_u64(21));

    for i in 0..120 {
        let x = 50.0 + 900.0 * (i as f32 / 120.0);
        field.set_pointer_px(x, 500.0);
        field.step();
    }
    let moving = field
        .particles()
        .velocities()
        .iter()
        .filter(|v| v.length() > 1e-3)
        .count();
    assert!(moving > 0);

    let bounds = field.viewport().bounds();
    assert!(field.particles().positions().iter().all(|p| bounds.contains(*p)));
}

#[test]
fn test_viewport_round_trip_through_field() {
    let mut field = ParticleField::new(
        FieldConfig {
            particle_count: 1,
            ..FieldConfig::default()
        },
        1600,
        900,
        &mut SmallRng::seed_from_u64(2),
    );
    let viewport: Viewport = *field.viewport();
    field.set_pointer_px(1600.0, 450.0);
    assert_eq!(field.pointer_ndc(), viewport.ndc_from_pixels(1600.0, 450.0));

    let target = field.pointer_target();
    assert!((target.x - viewport.bounds().half_width()).abs() < 1e-2);
    assert!(target.y.abs() < 1e-2);

    // after the window doubles in width the same pixel is its center
    field.resize(3200, 900);
    assert_eq!(field.pointer_ndc(), Vec2::ZERO);
    assert!(field.pointer_target().length() < 1e-2);
}
