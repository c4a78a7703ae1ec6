//! Camera looking straight down the -Z axis at the simulation plane.

use glam::{Mat4, Vec2, Vec3};

const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

/// Perspective camera framing the z = 0 plane.
///
/// The camera backs off along +Z far enough that exactly `plane_height` world
/// units of the plane are visible vertically; the visible width follows the
/// aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height of the viewport.
    pub aspect: f32,
    /// Distance from the camera to the z = 0 plane.
    pub distance: f32,
}

impl Camera {
    /// Frame `plane_height` world units of the plane with the given field of view.
    pub fn framing(plane_height: f32, fov_y_degrees: f32, aspect: f32) -> Self {
        let fov_y = fov_y_degrees.to_radians();
        Self {
            fov_y,
            aspect,
            distance: plane_height * 0.5 / (fov_y * 0.5).tan(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, NEAR, FAR)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Cast a ray through `ndc` and return where it meets the z = 0 plane.
    ///
    /// Returns `None` if the ray runs parallel to the plane.
    pub fn unproject_to_plane(&self, ndc: Vec2) -> Option<Vec3> {
        let half_height = (self.fov_y * 0.5).tan();
        let dir_view = Vec3::new(ndc.x * half_height * self.aspect, ndc.y * half_height, -1.0);
        let dir = self.view_matrix().inverse().transform_vector3(dir_view);
        if dir.z.abs() <= f32::EPSILON {
            return None;
        }

        let eye = self.position();
        let t = -eye.z / dir.z;
        let hit = eye + dir * t;
        Some(Vec3::new(hit.x, hit.y, 0.0))
    }
}
