//! Per-draw parameters for the dimension-space transform.
//!
//! One [`DrawParams`] value is fixed for the duration of a draw call and
//! shared by every vertex in it. [`DrawParamsRaw`] is its packed GPU form,
//! uploaded verbatim as vertex-stage push constants.

use cgmath::{Matrix4, SquareMatrix, Vector2};

/// Parameters supplied once per draw call.
#[derive(Copy, Clone, Debug)]
pub struct DrawParams {
    /// Maps a scaled position in homogeneous space to clip space.
    pub view_proj: Matrix4<f32>,

    /// Per-axis reciprocal scale applied to raw positions before projection.
    ///
    /// Decouples the authoring unit of the vertex data (pixels, layout
    /// units) from the projection's native coordinate space, so the scale
    /// can vary per draw call without touching the vertex buffer.
    pub dims_inv: Vector2<f32>,
}

impl DrawParams {
    /// Creates parameters from a view-projection matrix and the dimensions
    /// of the surface the positions were authored against.
    ///
    /// Stores the reciprocal of each dimension. A zero dimension yields an
    /// infinite scale factor, which propagates arithmetically like any other
    /// non-finite input.
    pub fn for_dims(view_proj: Matrix4<f32>, dims: Vector2<f32>) -> Self {
        Self {
            view_proj,
            dims_inv: Vector2::new(1.0 / dims.x, 1.0 / dims.y),
        }
    }

    /// Packs the parameters into the GPU block layout.
    pub fn to_raw(&self) -> DrawParamsRaw {
        DrawParamsRaw {
            view_proj: self.view_proj.into(),
            dims_inv: self.dims_inv.into(),
        }
    }
}

impl Default for DrawParams {
    /// Identity projection with unit scale: positions pass to clip space
    /// unchanged.
    fn default() -> Self {
        Self {
            view_proj: Matrix4::identity(),
            dims_inv: Vector2::new(1.0, 1.0),
        }
    }
}

/// The packed per-draw parameter block.
///
/// This layout is an ABI contract with the vertex shader: 72 bytes total,
/// `view_proj` as 16 floats at byte 0 (column-major, matching both cgmath
/// and WGSL `mat4x4<f32>`), `dims_inv` as 2 floats at byte 64. It is
/// uploaded as vertex-stage push constants; see
/// [`DrawParamsRaw::SHADER_SIZE`] for the declared range.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawParamsRaw {
    /// Contains the view projection matrix, column-major.
    pub view_proj: [[f32; 4]; 4],

    /// Contains the reciprocal dimension scale.
    pub dims_inv: [f32; 2],
}

impl DrawParamsRaw {
    /// Size of the block as the shader declares it: WGSL rounds a struct
    /// containing a `mat4x4<f32>` up to its 16-byte alignment, so the
    /// declared range is 80 bytes even though only 72 are ever written.
    pub const SHADER_SIZE: u32 = (std::mem::size_of::<DrawParamsRaw>() as u32).next_multiple_of(16);

    /// Borrows the block as the byte slice to hand to
    /// [`wgpu::RenderPass::set_push_constants`].
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Returns the push constant range covering this block in the vertex
    /// stage, for use in a [`wgpu::PipelineLayoutDescriptor`].
    pub fn push_constant_range() -> wgpu::PushConstantRange {
        wgpu::PushConstantRange {
            stages: wgpu::ShaderStages::VERTEX,
            range: 0..Self::SHADER_SIZE,
        }
    }
}

impl Default for DrawParamsRaw {
    fn default() -> Self {
        DrawParams::default().to_raw()
    }
}

impl From<DrawParams> for DrawParamsRaw {
    fn from(params: DrawParams) -> Self {
        params.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;
    use std::mem::{offset_of, size_of};

    #[test]
    fn block_is_72_bytes_with_dims_at_64() {
        assert_eq!(size_of::<DrawParamsRaw>(), 72);
        assert_eq!(offset_of!(DrawParamsRaw, view_proj), 0);
        assert_eq!(offset_of!(DrawParamsRaw, dims_inv), 64);
    }

    #[test]
    fn push_constant_range_covers_rounded_block() {
        let range = DrawParamsRaw::push_constant_range();
        assert_eq!(range.stages, wgpu::ShaderStages::VERTEX);
        assert_eq!(range.range, 0..80);
    }

    #[test]
    fn matrix_packs_column_major() {
        let params = DrawParams {
            view_proj: Matrix4::from_translation(Vector3::new(10.0, -5.0, 0.0)),
            dims_inv: Vector2::new(1.0, 1.0),
        };
        let raw = params.to_raw();

        // Translation lands in the fourth column.
        assert_eq!(raw.view_proj[3], [10.0, -5.0, 0.0, 1.0]);
        assert_eq!(raw.view_proj[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn bytes_split_at_matrix_boundary() {
        let raw = DrawParamsRaw {
            view_proj: Matrix4::identity().into(),
            dims_inv: [0.5, 2.0],
        };
        let bytes = raw.as_bytes();
        assert_eq!(bytes.len(), 72);
        assert_eq!(&bytes[..64], bytemuck::bytes_of(&raw.view_proj));
        assert_eq!(&bytes[64..], bytemuck::bytes_of(&raw.dims_inv));
    }

    #[test]
    fn for_dims_stores_reciprocals() {
        let params = DrawParams::for_dims(Matrix4::identity(), Vector2::new(2.0, 0.5));
        assert_eq!(params.dims_inv, Vector2::new(0.5, 2.0));
    }
}
