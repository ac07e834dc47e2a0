// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle mesh accumulation

use loft_lite_model::MeshData;
use nalgebra::Point3;

/// Triangle mesh under construction
///
/// Positions are double-precision working values; indices form triangle
/// triples into the position buffer. Both buffers grow append-only: a
/// vertex is never mutated or removed once added, so indices handed out
/// by [`Mesh::add_vertex`] stay valid for the lifetime of the mesh.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions, indexed by the triangle buffer
    pub positions: Vec<Point3<f64>>,
    /// Triangle indices as flattened [i0, i1, i2, i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with pre-allocated capacity
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3<f64>) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Append a triangle
    ///
    /// Winding order is preserved as given; it determines the
    /// outward-facing side downstream.
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
    }

    /// Convert to flattened single-precision handoff buffers
    pub fn to_mesh_data(&self) -> MeshData {
        let mut data = MeshData::with_capacity(self.positions.len(), self.indices.len());

        for position in &self.positions {
            data.positions.push(position.x as f32);
            data.positions.push(position.y as f32);
            data.positions.push(position.z as f32);
        }
        data.indices.extend_from_slice(&self.indices);

        data
    }
}
