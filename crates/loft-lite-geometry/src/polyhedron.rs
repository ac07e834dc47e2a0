// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polyhedron construction from explicit vertex and face lists

use crate::error::Result;
use crate::mesh::Mesh;
use crate::triangulation::triangulate_face;
use nalgebra::Point3;

/// Triangulate every face of a face soup against a shared vertex buffer
///
/// Faces are ordered index lists of at least three vertices, assumed
/// planar. Each face is triangulated in its own plane and the results
/// concatenated; output triangles reference the original vertex indices.
pub fn triangulate_faces(
    vertices: &[Point3<f64>],
    faces: &[Vec<u32>],
    tolerance: f64,
) -> Result<Vec<[u32; 3]>> {
    let mut result = Vec::with_capacity(faces.len() * 2);
    for face in faces {
        result.extend(triangulate_face(vertices, face, tolerance)?);
    }
    Ok(result)
}

/// Build a mesh from arbitrary planar N-gon faces
///
/// The vertex buffer passes through unmodified; only the faces are
/// regrouped into triangles (default triangulation tolerance).
pub fn polyhedron(vertices: &[Point3<f64>], faces: &[Vec<u32>]) -> Result<Mesh> {
    let triangles = triangulate_faces(vertices, faces, -1.0)?;

    let mut mesh = Mesh::with_capacity(vertices.len(), triangles.len());
    for &vertex in vertices {
        mesh.add_vertex(vertex);
    }
    for tri in triangles {
        mesh.add_triangle(tri[0], tri[1], tri[2]);
    }

    Ok(mesh)
}
