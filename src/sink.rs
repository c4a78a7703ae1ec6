//! Output side of the frame loop.

use glam::{Mat4, Vec3};

/// Anything that can display the particle field.
///
/// The field hands over its position and color arrays after every step and
/// then asks for a draw. Implementations copy what they need; the slices are
/// only borrowed for the duration of the call.
pub trait RenderSink {
    type Error;

    /// Replace the particle positions to draw.
    fn upload_positions(&mut self, positions: &[Vec3]);

    /// Replace the particle colors to draw.
    fn upload_colors(&mut self, colors: &[Vec3]);

    /// Draw the last uploaded particles with the given view-projection.
    fn draw(&mut self, view_proj: Mat4) -> Result<(), Self::Error>;
}
