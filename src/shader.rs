//! WGSL source for the dimension-space transform stage.

use log::trace;

/// Vertex shader performing the dimension-space transform.
///
/// The push-constant block mirrors [`crate::params::DrawParamsRaw`] byte for
/// byte, and the entry point is the same arithmetic as
/// [`crate::transform::transform_vertex`].
pub const TRANSFORM_SHADER: &str = r#"
struct DrawParams {
    view_proj: mat4x4<f32>,
    dims_inv: vec2<f32>,
}

var<push_constant> draw: DrawParams;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) tex_coord: vec2<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tex_coord: vec2<f32>,
}

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let scaled = vertex.position * draw.dims_inv;
    out.clip_position = draw.view_proj * vec4<f32>(scaled, 0.0, 1.0);
    out.tex_coord = vertex.tex_coord;
    return out;
}
"#;

/// Compiles the transform shader on the given device.
///
/// The caller owns everything downstream: pipeline layout (which must
/// include [`crate::params::DrawParamsRaw::push_constant_range`]), fragment
/// stage, and render pass wiring. The device must have
/// [`wgpu::Features::PUSH_CONSTANTS`] enabled.
pub fn create_shader_module(device: &wgpu::Device) -> wgpu::ShaderModule {
    trace!("create transform shader module");

    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Dimension Space Transform Shader"),
        source: wgpu::ShaderSource::Wgsl(TRANSFORM_SHADER.into()),
    })
}
