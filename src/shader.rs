//! Point shader source and the uniform block it reads.

use bytemuck::{Pod, Zeroable};

pub const POINT_SHADER_SOURCE: &str = include_str!("points.wgsl");

/// Mirrors `Uniforms` in `points.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub point_size: f32,
    pub _padding: [f32; 3],
}

impl Uniforms {
    pub fn new(view_proj: glam::Mat4, point_size: f32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            point_size,
            _padding: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 80);
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
    }

    #[test]
    fn test_point_shader_validates() {
        let module = naga::front::wgsl::parse_str(POINT_SHADER_SOURCE).expect("WGSL should parse");
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        );
        validator.validate(&module).expect("WGSL should validate");
    }
}
