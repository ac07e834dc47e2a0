// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GPU-ready mesh buffers

use crate::error::{MeshError, Result};
use serde::{Deserialize, Serialize};

/// GPU-ready mesh data
///
/// Contains flattened vertex data suitable for GPU upload or handoff to an
/// external solid constructor. Positions are `[x, y, z, x, y, z, ...]`;
/// indices are triangle triples into the position buffer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Vertex positions as flattened [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create mesh with pre-allocated capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Merge another mesh into this one
    ///
    /// The other mesh's indices are rebased past this mesh's vertices.
    pub fn merge(&mut self, other: &MeshData) {
        let vertex_offset = self.vertex_count() as u32;

        self.positions.extend_from_slice(&other.positions);
        self.indices
            .extend(other.indices.iter().map(|i| i + vertex_offset));
    }

    /// Validate the structural invariants of the buffers
    ///
    /// Checks that both buffers hold whole vertices/triangles and that
    /// every triangle index references an existing vertex.
    pub fn validate(&self) -> Result<()> {
        if self.positions.len() % 3 != 0 {
            return Err(MeshError::TruncatedPositionBuffer(self.positions.len()));
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::TruncatedIndexBuffer(self.indices.len()));
        }

        let vertex_count = self.vertex_count();
        for &index in &self.indices {
            if index as usize >= vertex_count {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> MeshData {
        MeshData {
            positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_counts() {
        let mesh = unit_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_merge_rebases_indices() {
        let mut mesh = unit_triangle();
        mesh.merge(&unit_triangle());

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut mesh = unit_triangle();
        mesh.indices = vec![0, 1, 3];

        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_validate_rejects_truncated_buffers() {
        let mut mesh = unit_triangle();
        mesh.indices = vec![0, 1];
        assert_eq!(mesh.validate(), Err(MeshError::TruncatedIndexBuffer(2)));

        let mut mesh = unit_triangle();
        mesh.positions.pop();
        assert_eq!(mesh.validate(), Err(MeshError::TruncatedPositionBuffer(8)));
    }
}
