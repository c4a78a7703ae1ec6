//! World rectangle the particles live in.

use glam::Vec3;

/// Axis-aligned rectangle centered on the origin of the z = 0 plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds for a viewport of the given aspect ratio (width / height).
    pub fn from_aspect(aspect: f32, height: f32) -> Self {
        Self::new(height * aspect, height)
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    /// Whether `p` lies inside the rectangle (edges included). Z is ignored.
    pub fn contains(&self, p: Vec3) -> bool {
        p.x.abs() <= self.half_width() && p.y.abs() <= self.half_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_aspect() {
        let b = WorldBounds::from_aspect(16.0 / 9.0, 90.0);
        assert!((b.width - 160.0).abs() < 1e-4);
        assert_eq!(b.half_height(), 45.0);
    }

    #[test]
    fn test_contains_edges() {
        let b = WorldBounds::new(10.0, 4.0);
        assert!(b.contains(Vec3::new(5.0, -2.0, 3.0)));
        assert!(!b.contains(Vec3::new(5.01, 0.0, 0.0)));
        assert!(!b.contains(Vec3::new(0.0, -2.5, 0.0)));
    }
}
