// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Section placement in world space

use nalgebra::{Isometry3, Point2, Point3};

/// Lift a 2D section point to z = 0 and apply a rigid placement
pub fn apply_transform(transform: &Isometry3<f64>, point: &Point2<f64>) -> Point3<f64> {
    transform.transform_point(&Point3::new(point.x, point.y, 0.0))
}

/// Transform every vertex of a ring into world space
pub fn transform_ring(transform: &Isometry3<f64>, ring: &[Point2<f64>]) -> Vec<Point3<f64>> {
    ring.iter().map(|p| apply_transform(transform, p)).collect()
}
