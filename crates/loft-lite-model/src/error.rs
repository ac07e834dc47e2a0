// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for mesh data validation

use thiserror::Error;

/// Result type alias for mesh validation
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors raised when a mesh buffer violates its structural invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Position buffer length is not a whole number of vertices
    #[error("Position buffer length {0} is not a multiple of 3")]
    TruncatedPositionBuffer(usize),

    /// Index buffer length is not a whole number of triangles
    #[error("Index buffer length {0} is not a multiple of 3")]
    TruncatedIndexBuffer(usize),

    /// A triangle references a vertex that does not exist
    #[error("Triangle index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}
