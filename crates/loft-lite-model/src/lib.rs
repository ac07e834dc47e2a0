// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loft-Lite Model - Shared mesh handoff types
//!
//! This crate holds the types that cross the boundary between the geometry
//! core and its consumers: renderers, FFI layers, and external solid
//! constructors. It carries no geometry math of its own, so downstream
//! crates can depend on it without pulling in the algorithm stack.
//!
//! The central type is [`MeshData`]: flattened single-precision vertex
//! positions plus a `u32` triangle index buffer, the layout GPU upload
//! paths and manifold constructors expect.

pub mod error;
pub mod mesh;

// Re-export all public types
pub use error::*;
pub use mesh::*;
