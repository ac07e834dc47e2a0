// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for loft and polyhedron construction

use thiserror::Error;

/// Geometry processing result type
pub type Result<T> = std::result::Result<T, Error>;

/// Geometry processing errors
///
/// Loft validation failures are reported before any buffer is built;
/// no partial mesh is ever returned.
#[derive(Error, Debug)]
pub enum Error {
    /// Section and transform lists have different lengths
    #[error("Mismatched section and transform counts: {sections} sections, {transforms} transforms")]
    SectionTransformMismatch { sections: usize, transforms: usize },

    /// A loft needs at least two sections
    #[error("Loft requires at least two sections, got {0}")]
    InsufficientSections(usize),

    /// Adjacent sections carry different numbers of polygons
    #[error("Sections {bottom} and {top} have mismatched polygon counts: {bottom_count} vs {top_count}")]
    PolygonCountMismatch {
        bottom: usize,
        top: usize,
        bottom_count: usize,
        top_count: usize,
    },

    /// Vertex count mismatch across sections (isomorphic loft)
    #[error("Vertex count mismatch across sections: section {section} has {found} vertices, expected {expected}")]
    VertexCountMismatch {
        section: usize,
        expected: usize,
        found: usize,
    },

    /// Face processing error
    #[error("Face error: {0}")]
    Face(String),

    /// Ring processing error
    #[error("Ring error: {0}")]
    Ring(String),

    /// Triangulation error
    #[error("Triangulation error: {0}")]
    Triangulation(String),
}

impl Error {
    /// Create a face error
    pub fn face(msg: impl Into<String>) -> Self {
        Error::Face(msg.into())
    }

    /// Create a ring error
    pub fn ring(msg: impl Into<String>) -> Self {
        Error::Ring(msg.into())
    }

    /// Create a triangulation error
    pub fn triangulation(msg: impl Into<String>) -> Self {
        Error::Triangulation(msg.into())
    }
}
