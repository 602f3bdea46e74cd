// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

pub mod cracks;
pub mod cube;
pub mod debris;
pub mod generator;
pub mod reveal;
pub mod seed; // FNV-1a + LCG

pub use cracks::{crack_strip, crack_strips, CrackLine, CrackStrip};
pub use cube::{surface_normal, CubeFace};
pub use debris::Fragment;
pub use generator::{
    generate_geometry, generate_geometry_with, GeometryConfig, SampleGeometry,
    SeededGeometryGenerator,
};
pub use reveal::{strip_width, visible_crack_count};
pub use seed::{hash_to_seed, seeded_random_stream, SeededRandom, StreamPurpose};
