//! # Mesh Data Structure
//!
//! Triangle mesh representation with per-vertex normals.

use glam::DVec3;

use crate::error::SceneError;

/// A triangle mesh with positions, per-vertex normals, and indices.
///
/// All geometry calculations use f64 internally. Normals are stored per
/// vertex and kept parallel to the position array; shape generators that
/// know their analytic normals store them here so that smooth shading does
/// not depend on tessellation density.
///
/// # Example
///
/// ```rust
/// use scene_core::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec3::Z);
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec3::Z);
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    positions: Vec<DVec3>,
    /// Per-vertex normals, parallel to `positions`
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex with its normal and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the position of the vertex at the given index.
    #[inline]
    pub fn position(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Returns the normal of the vertex at the given index.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for p in &self.positions[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        (min, max)
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// Normals are transformed with the inverse transpose and re-normalized.
    pub fn transform(&mut self, matrix: &glam::DMat4) {
        for p in &mut self.positions {
            *p = matrix.transform_point3(*p);
        }

        let normal_matrix = matrix.inverse().transpose();
        for n in &mut self.normals {
            let transformed = normal_matrix.transform_vector3(*n);
            *n = transformed.normalize_or_zero();
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Normal array is parallel to the position array
    /// - All triangle indices are in bounds
    /// - No triangle references the same vertex twice
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.normals.len() != self.positions.len() {
            return Err(SceneError::degenerate(format!(
                "normal count {} does not match vertex count {}",
                self.normals.len(),
                self.positions.len()
            )));
        }

        let vertex_count = self.positions.len() as u32;
        for (i, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&v| v >= vertex_count) {
                return Err(SceneError::degenerate(format!(
                    "triangle {i} references vertex out of bounds"
                )));
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(SceneError::degenerate(format!(
                    "triangle {i} repeats a vertex index"
                )));
            }
        }

        Ok(())
    }
}
