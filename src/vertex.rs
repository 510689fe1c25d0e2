//! # Vertex Data Structures
//!
//! This module defines the vertex formats consumed and produced by the
//! dimension-space transform stage. Both are GPU-compatible value types.

/// A 2D vertex with position and texture coordinate data.
///
/// This structure represents a single untransformed vertex as it appears in
/// the vertex stream: a position in dimension space and a texture coordinate
/// that the transform stage treats as opaque.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations. The struct is 16
/// bytes: two `f32` pairs with no padding.
///
/// # Examples
///
/// ```no_run
/// use dimspace::vertex::Vertex2D;
///
/// let vertex = Vertex2D {
///     position: [128.0, 64.0],
///     tex_coord: [0.5, 0.25],
/// };
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex2D {
    /// Raw position in dimension space [x, y]
    pub position: [f32; 2],
    /// Texture-sampling coordinate [u, v], opaque to the transform stage
    pub tex_coord: [f32; 2],
}

impl Vertex2D {
    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// # Returns
    ///
    /// A [`wgpu::VertexBufferLayout`] that describes:
    /// - Attribute 0: Position (Float32x2) at shader location 0
    /// - Attribute 1: Texture coordinate (Float32x2) at shader location 1
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// A transformed vertex as handed to the rasterizer.
///
/// `clip_position` is the homogeneous clip-space position (the mandated
/// pipeline output); `tex_coord` is the input texture coordinate, passed
/// through unchanged at output location 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformedVertex {
    /// Homogeneous clip-space position [x, y, z, w]
    pub clip_position: [f32; 4],
    /// Texture coordinate [u, v], identical to the input vertex
    pub tex_coord: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_16_bytes() {
        assert_eq!(std::mem::size_of::<Vertex2D>(), 16);
    }

    #[test]
    fn layout_matches_stream_locations() {
        let desc = Vertex2D::desc();
        assert_eq!(desc.array_stride, 16);
        assert_eq!(desc.attributes.len(), 2);

        assert_eq!(desc.attributes[0].shader_location, 0);
        assert_eq!(desc.attributes[0].offset, 0);
        assert_eq!(desc.attributes[0].format, wgpu::VertexFormat::Float32x2);

        assert_eq!(desc.attributes[1].shader_location, 1);
        assert_eq!(desc.attributes[1].offset, 8);
        assert_eq!(desc.attributes[1].format, wgpu::VertexFormat::Float32x2);
    }
}
