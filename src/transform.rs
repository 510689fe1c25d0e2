//! The per-vertex transform.
//!
//! This is the CPU reference form of the stage: a pure, stateless function
//! evaluated once per vertex with no cross-vertex dependency. The WGSL entry
//! point in [`crate::shader`] performs the identical arithmetic on the GPU.

use cgmath::{ElementWise, Vector2, Vector4};

use crate::params::DrawParams;
use crate::vertex::{TransformedVertex, Vertex2D};

/// Transforms one vertex from dimension space into clip space.
///
/// The position is scaled componentwise by `dims_inv`, lifted to the
/// homogeneous point `(x, y, 0, 1)`, and multiplied by the view-projection
/// matrix (matrix on the left, column-vector convention). The texture
/// coordinate passes through unchanged.
///
/// No input validation is performed: non-finite positions or parameters
/// propagate arithmetically into the output, they never cause a fault.
pub fn transform_vertex(params: &DrawParams, vertex: Vertex2D) -> TransformedVertex {
    let scaled = Vector2::from(vertex.position).mul_element_wise(params.dims_inv);
    let clip = params.view_proj * Vector4::new(scaled.x, scaled.y, 0.0, 1.0);

    TransformedVertex {
        clip_position: clip.into(),
        tex_coord: vertex.tex_coord,
    }
}

/// Transforms a whole vertex stream with one set of draw parameters.
///
/// Each vertex is independent, so the output is the elementwise image of the
/// input in order. This is the semantics the GPU reproduces with whatever
/// parallelism its vertex stage provides.
pub fn transform_vertices(params: &DrawParams, vertices: &[Vertex2D]) -> Vec<TransformedVertex> {
    vertices
        .iter()
        .map(|&vertex| transform_vertex(params, vertex))
        .collect()
}
