//! Speed to color mapping.

use glam::Vec3;

/// Two-stop color ramp indexed by particle speed.
///
/// Slow particles are drawn in `slow`, anything at or above `max_speed`
/// in `fast`, with a linear blend in between.
///
/// ```ignore
/// let palette = SpeedPalette::new(
///     Vec3::new(0.2, 0.3, 0.8), // blue when slow
///     Vec3::new(1.0, 0.9, 0.5), // yellow when fast
///     2.0,
/// );
/// let c = palette.color_for_velocity(Vec3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedPalette {
    /// Color at zero speed.
    pub slow: Vec3,
    /// Color at max speed.
    pub fast: Vec3,
    /// Speed for full `fast` color.
    pub max_speed: f32,
}

impl SpeedPalette {
    pub const fn new(slow: Vec3, fast: Vec3, max_speed: f32) -> Self {
        Self {
            slow,
            fast,
            max_speed,
        }
    }

    /// Blend factor in `[0, 1]` for the given speed.
    #[inline]
    pub fn factor(&self, speed: f32) -> f32 {
        if self.max_speed <= 0.0 {
            return 1.0;
        }
        (speed / self.max_speed).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn color_for_speed(&self, speed: f32) -> Vec3 {
        let t = self.factor(speed);
        // Exact endpoints; `lerp` at t = 1 can be off by an ulp.
        if t <= 0.0 {
            self.slow
        } else if t >= 1.0 {
            self.fast
        } else {
            self.slow.lerp(self.fast, t)
        }
    }

    #[inline]
    pub fn color_for_velocity(&self, velocity: Vec3) -> Vec3 {
        self.color_for_speed(velocity.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> SpeedPalette {
        SpeedPalette::new(Vec3::new(0.0, 0.2, 1.0), Vec3::new(1.0, 0.6, 0.0), 2.0)
    }

    #[test]
    fn test_rest_is_slow_color() {
        let p = palette();
        assert_eq!(p.color_for_velocity(Vec3::ZERO), p.slow);
    }

    #[test]
    fn test_saturates_at_max_speed() {
        let p = palette();
        assert_eq!(p.color_for_speed(2.0), p.fast);
        assert_eq!(p.color_for_velocity(Vec3::new(0.0, 30.0, 0.0)), p.fast);
    }

    #[test]
    fn test_midpoint_blend() {
        let p = palette();
        let c = p.color_for_speed(1.0);
        assert!((c - Vec3::new(0.5, 0.4, 0.5)).length() < 1e-6);
    }
}
