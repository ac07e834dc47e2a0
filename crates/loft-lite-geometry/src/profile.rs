// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D cross-section profiles and ring containers

use crate::error::Result;
use crate::triangulation::triangulate_rings;
use nalgebra::Point2;

/// A closed polygon boundary: the last vertex implicitly connects to the
/// first.
pub type Ring = Vec<Point2<f64>>;

/// One cross section: an outer ring optionally followed by hole rings.
pub type Section = Vec<Ring>;

/// 2D cross-section profile with optional holes
#[derive(Debug, Clone)]
pub struct Profile2D {
    /// Outer boundary (counter-clockwise)
    pub outer: Ring,
    /// Holes (clockwise)
    pub holes: Vec<Ring>,
}

impl Profile2D {
    /// Create a new profile
    pub fn new(outer: Ring) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Add a hole to the profile
    pub fn add_hole(&mut self, hole: Ring) {
        self.holes.push(hole);
    }

    /// Flatten into the ring list consumed by the loft orchestrator:
    /// outer ring first, holes after
    pub fn to_rings(&self) -> Section {
        let mut rings = Vec::with_capacity(1 + self.holes.len());
        rings.push(self.outer.clone());
        rings.extend(self.holes.iter().cloned());
        rings
    }

    /// Total vertex count across outer ring and holes
    pub fn vertex_count(&self) -> usize {
        self.outer.len() + self.holes.iter().map(|h| h.len()).sum::<usize>()
    }

    /// Triangulate the profile with the default tolerance
    ///
    /// Returns triangles as local indices into the flattened ring
    /// ordering (outer first, then holes).
    pub fn triangulate(&self) -> Result<Vec<[u32; 3]>> {
        triangulate_rings(&self.to_rings(), -1.0)
    }

    /// Create a rectangular profile centered at origin
    pub fn rectangle(width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;

        Self::new(vec![
            Point2::new(-half_w, -half_h),
            Point2::new(half_w, -half_h),
            Point2::new(half_w, half_h),
            Point2::new(-half_w, half_h),
        ])
    }

    /// Create a circular profile centered at origin
    pub fn circle(radius: f64, segments: Option<usize>) -> Self {
        let segments = segments.unwrap_or_else(|| calculate_circle_segments(radius));
        let mut outer = Vec::with_capacity(segments);

        for i in 0..segments {
            let angle = 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
            outer.push(Point2::new(radius * angle.cos(), radius * angle.sin()));
        }

        Self::new(outer)
    }
}

/// Calculate adaptive number of segments for a circle
#[inline]
pub fn calculate_circle_segments(radius: f64) -> usize {
    let segments = (radius.sqrt() * 8.0).ceil() as usize;
    segments.clamp(8, 32)
}
