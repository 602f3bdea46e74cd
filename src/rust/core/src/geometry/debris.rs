// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Post-failure debris: fragment placements and ambient dust particles.

use super::seed::{SeededRandom, StreamPurpose};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Spread of fragment centers per axis.
const FRAGMENT_SPREAD: [f64; 3] = [1.5, 1.4, 1.5];
const FRAGMENT_MIN_SCALE: f64 = 0.12;
const FRAGMENT_SCALE_RANGE: f64 = 0.17;
/// Particles fill the [-1, 1) cube.
const PARTICLE_SPAN: f64 = 2.0;

/// Upper bounds per sample; larger requests are truncated.
pub const MAX_FRAGMENTS: usize = 1024;
pub const MAX_PARTICLES: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub position: Vector3<f32>,
    pub scale: f32,
    /// XYZ Euler angles (radians), each in [0, π).
    pub rotation: Vector3<f32>,
}

/// Draws `count` fragments from the `"{seed_key}:fragments"` stream.
///
/// Per fragment the draw order is position x, y, z, scale, rotation x, y, z.
pub fn generate_fragments(seed_key: &str, count: usize) -> Vec<Fragment> {
    let mut random = SeededRandom::for_purpose(seed_key, StreamPurpose::Fragments);
    (0..count.min(MAX_FRAGMENTS))
        .map(|_| {
            let position = Vector3::new(
                random.centered(FRAGMENT_SPREAD[0]) as f32,
                random.centered(FRAGMENT_SPREAD[1]) as f32,
                random.centered(FRAGMENT_SPREAD[2]) as f32,
            );
            let scale = (FRAGMENT_MIN_SCALE + random.next_f64() * FRAGMENT_SCALE_RANGE) as f32;
            let rotation = Vector3::new(
                (random.next_f64() * PI) as f32,
                (random.next_f64() * PI) as f32,
                (random.next_f64() * PI) as f32,
            );
            Fragment {
                position,
                scale,
                rotation,
            }
        })
        .collect()
}

/// Flat `[x0, y0, z0, x1, ...]` buffer of `count` particle offsets.
pub fn generate_particle_positions(seed_key: &str, count: usize) -> Vec<f32> {
    SeededRandom::for_purpose(seed_key, StreamPurpose::Particles)
        .take(count.min(MAX_PARTICLES) * 3)
        .map(|r| ((r - 0.5) * PARTICLE_SPAN) as f32)
        .collect()
}
