// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon triangulation utilities
//!
//! Wrapper around earcutr for 2D ring triangulation, plus the planar
//! projection and index remapping used to triangulate 3D faces in place.

use crate::error::{Error, Result};
use crate::profile::Ring;
use nalgebra::{Point2, Point3};

/// Epsilon used when a caller passes a negative tolerance
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Signed area of a ring (shoelace formula); positive when
/// counter-clockwise
fn ring_signed_area(ring: &[Point2<f64>]) -> f64 {
    let n = ring.len();
    let mut doubled = 0.0;
    for i in 0..n {
        let p = &ring[i];
        let q = &ring[(i + 1) % n];
        doubled += p.x * q.y - q.x * p.y;
    }
    doubled / 2.0
}

/// Triangulate a ring group (one outer ring plus optional hole rings)
///
/// Rings whose absolute signed area is at or below the tolerance are
/// rejected as degenerate before reaching the primitive; a negative
/// tolerance selects [`DEFAULT_EPSILON`]. Returned triangles are local
/// indices into the flattened ring ordering (outer first, then holes) —
/// triangulation never invents vertices, only regroups existing ones.
pub fn triangulate_rings(rings: &[Ring], tolerance: f64) -> Result<Vec<[u32; 3]>> {
    let epsilon = if tolerance < 0.0 {
        DEFAULT_EPSILON
    } else {
        tolerance
    };

    if rings.is_empty() {
        return Err(Error::triangulation("No rings to triangulate"));
    }
    for (i, ring) in rings.iter().enumerate() {
        if ring.len() < 3 {
            return Err(Error::ring(format!(
                "Ring {} has {} vertices, need at least 3",
                i,
                ring.len()
            )));
        }
        if ring_signed_area(ring).abs() <= epsilon {
            return Err(Error::ring(format!("Ring {} is degenerate (zero area)", i)));
        }
    }

    // Flatten rings for earcutr; rings after the first are holes
    let total: usize = rings.iter().map(|r| r.len()).sum();
    let mut vertices = Vec::with_capacity(total * 2);
    let mut hole_indices = Vec::with_capacity(rings.len().saturating_sub(1));

    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            hole_indices.push(vertices.len() / 2);
        }
        for p in ring {
            vertices.push(p.x);
            vertices.push(p.y);
        }
    }

    let indices = earcutr::earcut(&vertices, &hole_indices, 2)
        .map_err(|e| Error::triangulation(format!("{:?}", e)))?;

    Ok(indices
        .chunks_exact(3)
        .map(|chunk| [chunk[0] as u32, chunk[1] as u32, chunk[2] as u32])
        .collect())
}

/// Project a planar 3D face into its own 2D plane
///
/// The basis comes from the face's first three vertices:
/// `right = normalize(v1 - v0)`, `normal = normalize(right × (v2 - v0))`,
/// `up = right × normal`. The first three vertices must not be collinear.
pub fn project_face(vertices: &[Point3<f64>], face: &[u32]) -> Result<Vec<Point2<f64>>> {
    if face.len() < 3 {
        return Err(Error::face(format!(
            "Face has {} vertices, need at least 3",
            face.len()
        )));
    }

    let v0 = face_vertex(vertices, face[0])?;
    let v1 = face_vertex(vertices, face[1])?;
    let v2 = face_vertex(vertices, face[2])?;

    let right = v1 - v0;
    let normal = right.cross(&(v2 - v0));
    if right.norm() <= DEFAULT_EPSILON || normal.norm() <= DEFAULT_EPSILON {
        return Err(Error::face(
            "First three face vertices are collinear, cannot build projection plane",
        ));
    }
    let right = right.normalize();
    let normal = normal.normalize();
    let up = right.cross(&normal);

    let mut projected = Vec::with_capacity(face.len());
    for &index in face {
        let local = face_vertex(vertices, index)? - v0;
        projected.push(Point2::new(local.dot(&right), local.dot(&up)));
    }

    Ok(projected)
}

/// Triangulate one 3D face and remap the result to the face's own
/// vertex indices
///
/// A 3-vertex face is returned unchanged, preserving the supplied
/// winding. Larger faces are projected into their plane, handed to the
/// triangulation primitive, and every local index `t` of the output is
/// replaced by `face[t]` — the emitted triangles reference only indices
/// the face already referenced.
pub fn triangulate_face(
    vertices: &[Point3<f64>],
    face: &[u32],
    tolerance: f64,
) -> Result<Vec<[u32; 3]>> {
    if face.len() < 3 {
        return Err(Error::face(format!(
            "Face has {} vertices, need at least 3",
            face.len()
        )));
    }

    // Triangles pass through untouched
    if face.len() == 3 {
        return Ok(vec![[face[0], face[1], face[2]]]);
    }

    let projected = project_face(vertices, face)?;
    let triangles = triangulate_rings(&[projected], tolerance)?;

    Ok(triangles
        .iter()
        .map(|tri| [
            face[tri[0] as usize],
            face[tri[1] as usize],
            face[tri[2] as usize],
        ])
        .collect())
}

fn face_vertex(vertices: &[Point3<f64>], index: u32) -> Result<Point3<f64>> {
    vertices
        .get(index as usize)
        .copied()
        .ok_or_else(|| {
            Error::face(format!(
                "Face references vertex {} but only {} vertices exist",
                index,
                vertices.len()
            ))
        })
}
