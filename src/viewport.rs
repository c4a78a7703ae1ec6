//! Window-to-world adapter.
//!
//! Turns pixel coordinates into points on the simulation plane and keeps the
//! camera aspect and world bounds in step with the window size.

use glam::{Mat4, Vec2, Vec3};

use crate::bounds::WorldBounds;
use crate::camera::Camera;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width_px: u32,
    height_px: u32,
    world_height: f32,
    fov_y_degrees: f32,
    camera: Camera,
    bounds: WorldBounds,
}

impl Viewport {
    pub fn new(width_px: u32, height_px: u32, world_height: f32, fov_y_degrees: f32) -> Self {
        let aspect = aspect_of(width_px, height_px);
        Self {
            width_px,
            height_px,
            world_height,
            fov_y_degrees,
            camera: Camera::framing(world_height, fov_y_degrees, aspect),
            bounds: WorldBounds::from_aspect(aspect, world_height),
        }
    }

    /// Apply a new window size. Zero-sized windows (minimized) are ignored.
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        if width_px == 0 || height_px == 0 {
            return;
        }
        *self = Self::new(width_px, height_px, self.world_height, self.fov_y_degrees);
    }

    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.view_proj()
    }

    /// Pixel position (origin top-left, Y down) to NDC (origin center, Y up).
    pub fn ndc_from_pixels(&self, x: f32, y: f32) -> Vec2 {
        if self.width_px == 0 || self.height_px == 0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            (x / self.width_px as f32) * 2.0 - 1.0,
            1.0 - (y / self.height_px as f32) * 2.0,
        )
    }

    /// Project an NDC position onto the z = 0 plane.
    ///
    /// Falls back to the origin if the camera ray misses the plane, which
    /// cannot happen for the straight-on camera used here.
    pub fn plane_point(&self, ndc: Vec2) -> Vec3 {
        self.camera.unproject_to_plane(ndc).unwrap_or(Vec3::ZERO)
    }
}

fn aspect_of(width_px: u32, height_px: u32) -> f32 {
    if width_px == 0 || height_px == 0 {
        1.0
    } else {
        width_px as f32 / height_px as f32
    }
}
