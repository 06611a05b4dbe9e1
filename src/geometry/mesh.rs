use lyon::tessellation::VertexBuffers;

use crate::error::ShapeError;
use crate::outline::{vertex_centroid, OutlinePoints};
use crate::spacial::{perpendicular, Position, ToArray2, Vector};

/// Vertex and index buffers, in the layout a renderer uploads.
///
/// Indices are `u32`, so a single buffer holds at most `u32::MAX` vertices.
pub type MeshBuffers = VertexBuffers<[f32; 2], u32>;

fn buffer_vertex_count(vertex_count: usize) -> Result<u32, ShapeError> {
    u32::try_from(vertex_count).map_err(|_| ShapeError::TooManyVertices {
        count: vertex_count,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub vertices: [Position; 3],
}

/// One outline segment.
///
/// Vertex order is `[p, p + d, q + d, q]` where `p -> q` is the edge and `d` the extrusion offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad {
    pub vertices: [Position; 4],
}

impl Quad {
    pub fn inner_edge(&self) -> (Position, Position) {
        (self.vertices[0], self.vertices[3])
    }

    pub fn outer_edge(&self) -> (Position, Position) {
        (self.vertices[1], self.vertices[2])
    }
}

/// Triangle fan covering the interior of an outline, pivoted at the outline's first point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillMesh {
    triangles: Vec<Triangle>,
}

impl FillMesh {
    pub fn from_outline<T: OutlinePoints + ?Sized>(outline: &T) -> Self {
        let mut mesh = Self::default();
        triangulate_fan(outline, &mut mesh);
        mesh
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Position> {
        self.triangles
            .iter()
            .flat_map(|triangle| triangle.vertices.iter())
    }

    /// The fan shares its vertices, `len() + 2` vertices and `3 * len()` indices.
    pub fn to_vertex_buffers(&self) -> Result<MeshBuffers, ShapeError> {
        let Some(first) = self.triangles.first() else {
            return Ok(MeshBuffers::new());
        };
        let vertex_count = buffer_vertex_count(self.triangles.len() + 2)?;

        let mut buffers = MeshBuffers::with_capacity(self.triangles.len() + 2, self.triangles.len() * 3);

        buffers.vertices.extend(
            first
                .vertices
                .iter()
                .map(|vertex| vertex.to_array2()),
        );
        buffers
            .vertices
            .extend(self.triangles[1..].iter().map(|triangle| triangle.vertices[2].to_array2()));

        for index in 1..vertex_count - 1 {
            buffers
                .indices
                .extend_from_slice(&[0, index, index + 1]);
        }

        Ok(buffers)
    }
}

/// Non-mitered stroke geometry, one quad per edge of the closed outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlineMesh {
    quads: Vec<Quad>,
}

impl OutlineMesh {
    pub fn from_outline<T: OutlinePoints + ?Sized>(outline: &T, thickness: f64) -> Self {
        let mut mesh = Self::default();
        extrude_outline(outline, thickness, &mut mesh);
        mesh
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Position> {
        self.quads
            .iter()
            .flat_map(|quad| quad.vertices.iter())
    }

    /// Each quad becomes the two triangles `p, p + d, q + d` and `p, q + d, q`.
    pub fn to_vertex_buffers(&self) -> Result<MeshBuffers, ShapeError> {
        let vertex_count = buffer_vertex_count(self.quads.len().saturating_mul(4))?;
        let mut buffers = MeshBuffers::with_capacity(self.quads.len() * 4, self.quads.len() * 6);

        for (quad, base) in self
            .quads
            .iter()
            .zip((0..vertex_count).step_by(4))
        {
            buffers.vertices.extend(
                quad.vertices
                    .iter()
                    .map(|vertex| vertex.to_array2()),
            );
            buffers
                .indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Ok(buffers)
    }
}

/// Replaces the contents of `mesh` with a triangle fan pivoted at point 0.
///
/// Emits `(p0, p[i], p[i + 1])` for `i` in `1..=count - 2`, keeping the input winding. Only exact for convex
/// outlines; concave outlines still produce a mesh, it is just wrong over the concave regions.
#[cfg_attr(feature = "profile-pipeline", profiling::function)]
pub fn triangulate_fan<T: OutlinePoints + ?Sized>(outline: &T, mesh: &mut FillMesh) {
    mesh.triangles.clear();

    let count = outline.point_count();
    if count < 3 {
        return;
    }

    let pivot = outline.point_at(0);
    mesh.triangles.reserve(count - 2);
    mesh.triangles.extend((1..count - 1).map(|index| Triangle {
        vertices: [pivot, outline.point_at(index), outline.point_at(index + 1)],
    }));
}

/// Replaces the contents of `mesh` with one quad per edge, including the closing edge.
///
/// Each edge is offset along its unit normal by `thickness`. The normal is oriented away from the vertex
/// centroid, which is the outside for convex outlines of either winding. A negative thickness extrudes
/// inwards and a zero thickness gives zero-area quads. Zero-length edges have no normal and give a
/// degenerate quad.
///
/// Corners are not mitered; neighbouring quads overlap outside convex corners and leave the corner's
/// outward wedge open.
#[cfg_attr(feature = "profile-pipeline", profiling::function)]
pub fn extrude_outline<T: OutlinePoints + ?Sized>(outline: &T, thickness: f64, mesh: &mut OutlineMesh) {
    mesh.quads.clear();

    let count = outline.point_count();
    if count < 2 {
        return;
    }
    let Some(centroid) = vertex_centroid(outline) else {
        return;
    };

    mesh.quads.reserve(count);
    for index in 0..count {
        let p = outline.point_at(index);
        let q = outline.point_at((index + 1) % count);

        let offset = outward_normal(p, q, centroid) * thickness;

        mesh.quads.push(Quad {
            vertices: [p, p + offset, q + offset, q],
        });
    }
}

fn outward_normal(p: Position, q: Position, centroid: Position) -> Vector {
    let edge = q - p;
    let length = edge.norm();
    if length == 0.0 {
        return Vector::zeros();
    }

    let normal = perpendicular(edge) / length;
    if normal.dot(&(p - centroid)) < 0.0 {
        -normal
    } else {
        normal
    }
}
