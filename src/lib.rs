// src/lib.rs
//! Dimspace
//!
//! A 2D dimension-space vertex transform stage for wgpu rendering pipelines.
//!
//! Vertex positions are authored in an unnormalized "dimension" space (for
//! example pixel or layout units). A per-draw reciprocal scale (`dims_inv`)
//! and a view-projection matrix map each position into clip space, while the
//! texture coordinate rides through to the next pipeline stage unchanged.
//!
//! The transform exists twice, with identical semantics:
//! - on the CPU as [`transform_vertex`] / [`transform_vertices`], the
//!   testable reference form;
//! - on the GPU as the WGSL vertex entry point in [`shader`], driven by the
//!   packed push-constant block [`DrawParamsRaw`].

pub mod params;
pub mod shader;
pub mod transform;
pub mod vertex;

// Re-export main types for convenience
pub use params::{DrawParams, DrawParamsRaw};
pub use shader::create_shader_module;
pub use transform::{transform_vertex, transform_vertices};
pub use vertex::{TransformedVertex, Vertex2D};
