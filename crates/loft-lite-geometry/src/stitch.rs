// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ring stitching: triangle strips connecting two world-space rings
//!
//! Two interchangeable strategies with the same signature. The adaptive
//! stitcher walks both rings with a greedy nearest-edge heuristic and
//! handles rings of unequal vertex count; the isomorphic stitcher
//! connects corresponding indices of equal-count rings with no distance
//! computation at all.

use crate::error::{Error, Result};
use nalgebra::{distance, Point3};

/// Stitch two rings with the greedy nearest-neighbor walk
///
/// Both rings are expected in world space; `bottom_offset`/`top_offset`
/// are the global indices of each ring's first vertex. The walk starts
/// at the top vertex nearest `bottom[0]` and advances both cursors
/// cyclically until each has completed exactly one full loop, emitting
/// one triangle per single advance and two per diagonal advance.
///
/// Candidate selection order matters: the diagonal wins only when
/// strictly shorter than the bottom advance and no longer than the top
/// advance; otherwise the shorter single advance wins, restricted to
/// rings that still have room in their cycle. Changing this precedence
/// changes the emitted strip.
pub fn stitch_adaptive(
    bottom: &[Point3<f64>],
    top: &[Point3<f64>],
    bottom_offset: u32,
    top_offset: u32,
) -> Result<Vec<[u32; 3]>> {
    if bottom.is_empty() || top.is_empty() {
        return Err(Error::ring("Cannot stitch an empty ring"));
    }

    let bot_len = bottom.len();
    let top_len = top.len();

    // Seed the zipper at the top vertex closest to the bottom start.
    let bot_start = 0usize;
    let mut top_start = 0usize;
    let mut min_distance = f64::MAX;
    for (j, p) in top.iter().enumerate() {
        let d = distance(&bottom[bot_start], p);
        if d < min_distance {
            min_distance = d;
            top_start = j;
        }
    }

    let mut triangles = Vec::with_capacity(bot_len + top_len);
    let mut bot_cursor = bot_start;
    let mut top_cursor = top_start;
    let mut bot_moved = false;
    let mut top_moved = false;
    let mut steps = 0usize;

    loop {
        let bot_next = (bot_cursor + 1) % bot_len;
        let top_next = (top_cursor + 1) % top_len;

        let d_bot_advance = distance(&bottom[bot_next], &top[top_cursor]);
        let d_top_advance = distance(&bottom[bot_cursor], &top[top_next]);
        let d_diagonal = distance(&bottom[bot_next], &top[top_next]);

        // A cursor has room until its next step would re-enter the cycle
        // it has already completed; the very first step is always legal.
        let bot_has_next = bot_next != (bot_start + 1) % bot_len || !bot_moved;
        let top_has_next = top_next != (top_start + 1) % top_len || !top_moved;

        if d_diagonal < d_bot_advance
            && d_diagonal <= d_top_advance
            && bot_has_next
            && top_has_next
        {
            triangles.push([
                bottom_offset + bot_cursor as u32,
                top_offset + top_next as u32,
                top_offset + top_cursor as u32,
            ]);
            triangles.push([
                bottom_offset + bot_cursor as u32,
                bottom_offset + bot_next as u32,
                top_offset + top_next as u32,
            ]);
            bot_cursor = bot_next;
            top_cursor = top_next;
            bot_moved = true;
            top_moved = true;
        } else if bot_has_next && (d_bot_advance < d_top_advance || !top_has_next) {
            triangles.push([
                bottom_offset + bot_cursor as u32,
                bottom_offset + bot_next as u32,
                top_offset + top_cursor as u32,
            ]);
            bot_cursor = bot_next;
            bot_moved = true;
        } else {
            triangles.push([
                bottom_offset + bot_cursor as u32,
                top_offset + top_next as u32,
                top_offset + top_cursor as u32,
            ]);
            top_cursor = top_next;
            top_moved = true;
        }

        steps += 1;
        debug_assert!(steps <= bot_len + top_len, "stitch walk exceeded its step bound");

        if bot_cursor == bot_start && top_cursor == top_start {
            break;
        }
    }

    Ok(triangles)
}

/// Stitch two equal-count rings by structural correspondence
///
/// Each ring edge contributes one quad split into two triangles; no
/// distances are computed. Rings must already be topologically matched
/// (equal vertex counts, corresponding start vertices) — that is the
/// caller's contract, validated at the section level.
pub fn stitch_isomorphic(
    bottom: &[Point3<f64>],
    top: &[Point3<f64>],
    bottom_offset: u32,
    top_offset: u32,
) -> Result<Vec<[u32; 3]>> {
    if bottom.is_empty() || top.is_empty() {
        return Err(Error::ring("Cannot stitch an empty ring"));
    }
    debug_assert_eq!(bottom.len(), top.len());

    let len = bottom.len();
    let mut triangles = Vec::with_capacity(len * 2);

    for k in 0..len {
        let next = (k + 1) % len;

        triangles.push([
            bottom_offset + k as u32,
            bottom_offset + next as u32,
            top_offset + k as u32,
        ]);
        triangles.push([
            bottom_offset + next as u32,
            top_offset + next as u32,
            top_offset + k as u32,
        ]);
    }

    Ok(triangles)
}
