// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Crack lines and crack strips
//
// Cracks are short random walks on one face of the cube. Each step of a walk
// becomes a CrackLine; revealed lines are promoted to flat CrackStrip decals
// framed by the face normal.

use super::cube::{surface_normal, CubeFace, FACES};
use super::seed::{SeededRandom, StreamPurpose};
use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Span of the starting point draw (u, v in [-0.39, 0.39)).
const START_SPAN: f64 = 0.78;
/// Span of each random-walk step.
const STEP_SPAN: f64 = 0.34;
/// Walks are clamped to this inset so cracks never reach the cube edges.
const WALK_LIMIT: f64 = 0.48;
const MIN_SEGMENTS: usize = 2;
const EXTRA_SEGMENTS: usize = 4;
/// Upper bound on crack walks per sample; larger requests are truncated.
pub const MAX_CRACK_WALKS: usize = 1024;

/// Segments shorter than this produce no strip.
pub const MIN_STRIP_LENGTH: f32 = 0.01;
/// Outward nudge of strip centers along the face normal.
pub const STRIP_LIFT: f32 = 0.0032;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrackLine {
    pub face: CubeFace,
    pub start: Vector3<f32>,
    pub end: Vector3<f32>,
}

impl CrackLine {
    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }
}

/// Decal placement for one revealed crack line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrackStrip {
    pub center: Vector3<f32>,
    /// Rotation taking the canonical basis to (tangent, bitangent, normal),
    /// as `[x, y, z, w]`.
    pub quaternion: [f32; 4],
    pub length: f32,
}

/// Generates `count` crack walks from the `"{seed_key}:cracks"` stream.
///
/// `count` is capped at [`MAX_CRACK_WALKS`]. Each walk yields 2..=5 lines,
/// so the result holds between `2 * count` and `5 * count` lines, grouped
/// walk by walk.
pub fn generate_crack_lines(seed_key: &str, count: usize) -> Vec<CrackLine> {
    let count = count.min(MAX_CRACK_WALKS);
    let mut random = SeededRandom::for_purpose(seed_key, StreamPurpose::Cracks);
    let mut lines = Vec::with_capacity(count * (MIN_SEGMENTS + EXTRA_SEGMENTS - 1));

    for _ in 0..count {
        let face = FACES[random.index(FACES.len())];
        let segment_count = MIN_SEGMENTS + random.index(EXTRA_SEGMENTS);
        let mut u = random.centered(START_SPAN);
        let mut v = random.centered(START_SPAN);

        for _ in 0..segment_count {
            let (prev_u, prev_v) = (u, v);
            u = (u + random.centered(STEP_SPAN)).clamp(-WALK_LIMIT, WALK_LIMIT);
            v = (v + random.centered(STEP_SPAN)).clamp(-WALK_LIMIT, WALK_LIMIT);
            lines.push(CrackLine {
                face,
                start: face.project(prev_u as f32, prev_v as f32),
                end: face.project(u as f32, v as f32),
            });
        }
    }

    lines
}

/// Frames a crack line as a decal flush with its host face.
///
/// Returns `None` for segments shorter than [`MIN_STRIP_LENGTH`].
pub fn crack_strip(line: &CrackLine) -> Option<CrackStrip> {
    let direction = line.end - line.start;
    let length = direction.norm();
    if length < MIN_STRIP_LENGTH {
        return None;
    }

    let tangent = direction / length;
    let normal = surface_normal(&line.start);
    let bitangent = normal.cross(&tangent).normalize();
    let tangent = bitangent.cross(&normal).normalize();

    let basis = Matrix3::from_columns(&[tangent, bitangent, normal]);
    let rotation = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(basis));
    let center = (line.start + line.end) * 0.5 + normal * STRIP_LIFT;

    Some(CrackStrip {
        center,
        quaternion: [rotation.i, rotation.j, rotation.k, rotation.w],
        length,
    })
}

/// Strips for a prefix of lines, skipping degenerate ones.
pub fn crack_strips(lines: &[CrackLine]) -> Vec<CrackStrip> {
    lines.iter().filter_map(crack_strip).collect()
}
