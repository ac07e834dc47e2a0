// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Loft-Lite Geometry
//!
//! Watertight triangle meshes from stacked 2D cross sections ("lofting")
//! and from explicit polygonal face sets ("polyhedron construction").
//!
//! ## Overview
//!
//! The crate turns cross-section placements into closed solids:
//!
//! - **Profiles**: 2D ring containers with hole support ([`Profile2D`])
//! - **Lofting**: side walls stitched between consecutive sections with
//!   an adaptive nearest-neighbor walk or a fixed isomorphic quad split,
//!   plus triangulated end caps ([`loft`])
//! - **Polyhedra**: arbitrary planar N-gon faces triangulated in place
//!   against a shared vertex buffer ([`polyhedron`])
//! - **Triangulation**: ring triangulation with hole support via earcutr,
//!   planar projection, and index remapping back to caller indices
//!
//! The output [`Mesh`] converts to `loft_lite_model::MeshData` for GPU
//! upload or handoff to an external solid constructor; this crate does
//! not itself enforce manifoldness.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use loft_lite_geometry::{loft_profile, Isometry3, LoftAlgorithm, Profile2D};
//!
//! // Sweep a circle along z.
//! let profile = Profile2D::circle(1.0, None);
//! let transforms = vec![
//!     Isometry3::identity(),
//!     Isometry3::translation(0.0, 0.0, 2.0),
//! ];
//!
//! let mesh = loft_profile(&profile, &transforms, LoftAlgorithm::default())?;
//! println!("Generated {} triangles", mesh.triangle_count());
//! ```

pub mod error;
pub mod loft;
pub mod mesh;
pub mod polyhedron;
pub mod profile;
pub mod stitch;
pub mod transform;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Isometry3, Point2, Point3, Vector2, Vector3};

// Re-export main types
pub use error::{Error, Result};
pub use loft::{loft, loft_profile, loft_profiles, loft_rings, LoftAlgorithm};
pub use mesh::Mesh;
pub use polyhedron::{polyhedron, triangulate_faces};
pub use profile::{calculate_circle_segments, Profile2D, Ring, Section};
pub use stitch::{stitch_adaptive, stitch_isomorphic};
pub use transform::{apply_transform, transform_ring};
pub use triangulation::{project_face, triangulate_face, triangulate_rings, DEFAULT_EPSILON};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_loft() {
        let profile = Profile2D::rectangle(2.0, 1.0);
        let transforms = vec![
            Isometry3::identity(),
            Isometry3::translation(0.0, 0.0, 3.0),
        ];
        let mesh = loft_profile(&profile, &transforms, LoftAlgorithm::default()).unwrap();

        assert!(mesh.vertex_count() > 0);
        assert!(mesh.triangle_count() > 0);
        assert!(mesh.to_mesh_data().validate().is_ok());
    }

    #[test]
    fn test_mesh_handoff() {
        let profile = Profile2D::rectangle(1.0, 1.0);
        let transforms = vec![
            Isometry3::identity(),
            Isometry3::translation(0.0, 0.0, 1.0),
        ];
        let mesh = loft_profile(&profile, &transforms, LoftAlgorithm::Isomorphic).unwrap();
        let data = mesh.to_mesh_data();

        assert_eq!(data.vertex_count(), mesh.vertex_count());
        assert_eq!(data.triangle_count(), mesh.triangle_count());
    }
}
