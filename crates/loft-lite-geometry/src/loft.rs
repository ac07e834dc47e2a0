// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lofting: watertight solids from stacked cross sections
//!
//! The orchestrator transforms each section's rings into world space,
//! stitches every consecutive section pair with the selected strategy,
//! and closes the ends with triangulated caps. All validation happens
//! before the first buffer is touched; a failed loft never returns a
//! partial mesh.

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::profile::{Profile2D, Ring, Section};
use crate::stitch::{stitch_adaptive, stitch_isomorphic};
use crate::transform::transform_ring;
use crate::triangulation::triangulate_rings;
use nalgebra::Isometry3;

/// Strategy used to stitch consecutive sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoftAlgorithm {
    /// Greedy nearest-neighbor walk; handles sections whose rings have
    /// different vertex counts
    #[default]
    AdaptiveNearestNeighbor,
    /// Pairwise quad split; requires every section to carry the same
    /// total vertex count
    Isomorphic,
}

/// Loft a stack of sections placed by rigid transforms into a closed
/// triangle mesh
///
/// Each section is a ring group (outer ring first, holes after). The
/// i-th transform places the i-th section in world space. Side walls
/// connect consecutive sections ring by ring; the first section is
/// triangulated as the front cap (winding reversed, facing backward
/// along the loft direction) and the last as the back cap.
pub fn loft(
    sections: &[Section],
    transforms: &[Isometry3<f64>],
    algorithm: LoftAlgorithm,
) -> Result<Mesh> {
    if sections.len() != transforms.len() {
        return Err(Error::SectionTransformMismatch {
            sections: sections.len(),
            transforms: transforms.len(),
        });
    }
    if sections.len() < 2 {
        return Err(Error::InsufficientSections(sections.len()));
    }

    let section_sizes: Vec<usize> = sections.iter().map(section_vertex_count).collect();

    if algorithm == LoftAlgorithm::Isomorphic {
        let expected = section_sizes[0];
        for (i, &found) in section_sizes.iter().enumerate().skip(1) {
            if found != expected {
                return Err(Error::VertexCountMismatch {
                    section: i,
                    expected,
                    found,
                });
            }
        }
    }
    if algorithm == LoftAlgorithm::AdaptiveNearestNeighbor {
        for i in 0..sections.len() - 1 {
            if sections[i].len() != sections[i + 1].len() {
                return Err(Error::PolygonCountMismatch {
                    bottom: i,
                    top: i + 1,
                    bottom_count: sections[i].len(),
                    top_count: sections[i + 1].len(),
                });
            }
        }
    }

    // Place every section in world space up front; vertex order (section
    // by section, ring by ring) defines the global indexing.
    let world: Vec<Vec<Vec<nalgebra::Point3<f64>>>> = sections
        .iter()
        .zip(transforms.iter())
        .map(|(section, transform)| {
            section
                .iter()
                .map(|ring| transform_ring(transform, ring))
                .collect()
        })
        .collect();

    let total_vertices: usize = section_sizes.iter().sum();
    let mut mesh = Mesh::with_capacity(total_vertices, total_vertices * 2);

    for section in &world {
        for ring in section {
            for &vertex in ring {
                mesh.add_vertex(vertex);
            }
        }
    }

    // Side walls between consecutive section pairs.
    let mut bottom_offset = 0usize;
    for i in 0..world.len() - 1 {
        let top_offset = bottom_offset + section_sizes[i];

        let mut bottom_ring_offset = 0usize;
        let mut top_ring_offset = 0usize;
        for (bottom_ring, top_ring) in world[i].iter().zip(world[i + 1].iter()) {
            let triangles = match algorithm {
                LoftAlgorithm::AdaptiveNearestNeighbor => stitch_adaptive(
                    bottom_ring,
                    top_ring,
                    (bottom_offset + bottom_ring_offset) as u32,
                    (top_offset + top_ring_offset) as u32,
                )?,
                LoftAlgorithm::Isomorphic => stitch_isomorphic(
                    bottom_ring,
                    top_ring,
                    (bottom_offset + bottom_ring_offset) as u32,
                    (top_offset + top_ring_offset) as u32,
                )?,
            };
            for tri in triangles {
                mesh.add_triangle(tri[0], tri[1], tri[2]);
            }

            bottom_ring_offset += bottom_ring.len();
            top_ring_offset += top_ring.len();
        }

        bottom_offset += section_sizes[i];
    }

    // Front cap: the first section's vertices start at global index 0;
    // its winding is reversed so the cap faces backward along the loft.
    let front = triangulate_rings(&sections[0], -1.0)?;
    for tri in front {
        mesh.add_triangle(tri[2], tri[1], tri[0]);
    }

    // Back cap: offset to the last section's first vertex.
    let last = sections.len() - 1;
    let back = triangulate_rings(&sections[last], -1.0)?;
    let back_offset = (total_vertices - section_sizes[last]) as u32;
    for tri in back {
        mesh.add_triangle(
            tri[0] + back_offset,
            tri[1] + back_offset,
            tri[2] + back_offset,
        );
    }

    Ok(mesh)
}

/// Loft free-standing rings, one ring per section
pub fn loft_rings(
    rings: &[Ring],
    transforms: &[Isometry3<f64>],
    algorithm: LoftAlgorithm,
) -> Result<Mesh> {
    let sections: Vec<Section> = rings.iter().map(|ring| vec![ring.clone()]).collect();
    loft(&sections, transforms, algorithm)
}

/// Loft a single profile replicated across every transform
pub fn loft_profile(
    profile: &Profile2D,
    transforms: &[Isometry3<f64>],
    algorithm: LoftAlgorithm,
) -> Result<Mesh> {
    let sections: Vec<Section> = vec![profile.to_rings(); transforms.len()];
    loft(&sections, transforms, algorithm)
}

/// Loft one profile per transform
pub fn loft_profiles(
    profiles: &[Profile2D],
    transforms: &[Isometry3<f64>],
    algorithm: LoftAlgorithm,
) -> Result<Mesh> {
    let sections: Vec<Section> = profiles.iter().map(|p| p.to_rings()).collect();
    loft(&sections, transforms, algorithm)
}

fn section_vertex_count(section: &Section) -> usize {
    section.iter().map(|ring| ring.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn square_ring() -> Ring {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    fn triangle_ring() -> Ring {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ]
    }

    fn stacked_transforms(count: usize) -> Vec<Isometry3<f64>> {
        (0..count)
            .map(|i| Isometry3::translation(0.0, 0.0, i as f64))
            .collect()
    }

    #[test]
    fn test_isomorphic_square_prism() {
        let sections = vec![vec![square_ring()], vec![square_ring()]];
        let mesh = loft(&sections, &stacked_transforms(2), LoftAlgorithm::Isomorphic).unwrap();

        // 8 side triangles (two per ring edge) plus two triangles per cap.
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        for tri in mesh.triangles() {
            for i in tri {
                assert!((i as usize) < mesh.vertex_count());
            }
        }
        assert!(mesh.to_mesh_data().validate().is_ok());
    }

    #[test]
    fn test_adaptive_square_prism_matches_vertex_layout() {
        let sections = vec![vec![square_ring()], vec![square_ring()]];
        let mesh = loft(
            &sections,
            &stacked_transforms(2),
            LoftAlgorithm::AdaptiveNearestNeighbor,
        )
        .unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.to_mesh_data().validate().is_ok());
    }

    #[test]
    fn test_adaptive_triangle_to_square() {
        let sections = vec![vec![triangle_ring()], vec![square_ring()]];
        let mesh = loft(
            &sections,
            &stacked_transforms(2),
            LoftAlgorithm::AdaptiveNearestNeighbor,
        )
        .unwrap();

        assert_eq!(mesh.vertex_count(), 7);
        // At least one side triangle per vertex of the larger ring, plus
        // one front cap triangle and two back cap triangles.
        assert!(mesh.triangle_count() >= 4 + 1 + 2);
        assert!(mesh.to_mesh_data().validate().is_ok());
    }

    #[test]
    fn test_three_section_stack() {
        let sections = vec![vec![square_ring()], vec![square_ring()], vec![square_ring()]];
        let mesh = loft(&sections, &stacked_transforms(3), LoftAlgorithm::Isomorphic).unwrap();

        assert_eq!(mesh.vertex_count(), 12);
        // Two stitched pairs plus both caps.
        assert_eq!(mesh.triangle_count(), 8 + 8 + 2 + 2);
        assert!(mesh.to_mesh_data().validate().is_ok());
    }

    #[test]
    fn test_hollow_profile_loft() {
        let mut profile = Profile2D::rectangle(4.0, 4.0);
        profile.add_hole(vec![
            Point2::new(-1.0, -1.0),
            Point2::new(-1.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, -1.0),
        ]);

        let mesh = loft_profile(&profile, &stacked_transforms(2), LoftAlgorithm::Isomorphic)
            .unwrap();

        // Outer and hole rings each stitch 8 side triangles per pair;
        // each cap of a square-with-hole triangulates to 8.
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 16 + 16);
        assert!(mesh.to_mesh_data().validate().is_ok());
    }

    #[test]
    fn test_loft_rings_adapter() {
        let rings = vec![square_ring(), square_ring()];
        let mesh = loft_rings(&rings, &stacked_transforms(2), LoftAlgorithm::default()).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        assert!(mesh.to_mesh_data().validate().is_ok());
    }

    #[test]
    fn test_mismatched_counts_rejected() {
        let sections = vec![vec![square_ring()], vec![square_ring()], vec![square_ring()]];
        let result = loft(
            &sections,
            &stacked_transforms(2),
            LoftAlgorithm::AdaptiveNearestNeighbor,
        );

        assert!(matches!(
            result,
            Err(Error::SectionTransformMismatch {
                sections: 3,
                transforms: 2
            })
        ));
    }

    #[test]
    fn test_single_section_rejected() {
        let sections = vec![vec![square_ring()]];
        let result = loft(
            &sections,
            &stacked_transforms(1),
            LoftAlgorithm::AdaptiveNearestNeighbor,
        );

        assert!(matches!(result, Err(Error::InsufficientSections(1))));
    }

    #[test]
    fn test_polygon_count_mismatch_rejected() {
        let hollow = vec![square_ring(), triangle_ring()];
        let solid = vec![square_ring()];
        let result = loft(
            &[hollow, solid],
            &stacked_transforms(2),
            LoftAlgorithm::AdaptiveNearestNeighbor,
        );

        assert!(matches!(
            result,
            Err(Error::PolygonCountMismatch {
                bottom: 0,
                top: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_vertex_count_mismatch_rejected() {
        let sections = vec![vec![square_ring()], vec![triangle_ring()]];
        let result = loft(&sections, &stacked_transforms(2), LoftAlgorithm::Isomorphic);

        assert!(matches!(
            result,
            Err(Error::VertexCountMismatch {
                section: 1,
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_replicated_profile_adapter() {
        let profile = Profile2D::circle(1.0, Some(12));
        let mesh = loft_profile(&profile, &stacked_transforms(4), LoftAlgorithm::Isomorphic)
            .unwrap();

        assert_eq!(mesh.vertex_count(), 48);
        // Three stitched pairs of 24 triangles each, caps of 10 each.
        assert_eq!(mesh.triangle_count(), 3 * 24 + 2 * 10);
        assert!(mesh.to_mesh_data().validate().is_ok());
    }
}
