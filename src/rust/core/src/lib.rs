// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CubeTest — virtual compression test for the concrete class explorer
// Core: scripted load simulation, seeded crack geometry, texture tones
//

pub mod error;
pub mod formulas;
pub mod geometry;
pub mod kernel;
pub mod simulation;
pub mod texture;
#[cfg(test)]
pub mod tests_simulation;

// Re-export core types
pub use error::{Result, StrengthTestError};
pub use geometry::{
    generate_geometry, generate_geometry_with, hash_to_seed, seeded_random_stream, CrackLine,
    CrackStrip, Fragment, GeometryConfig, SampleGeometry, SeededGeometryGenerator, SeededRandom,
};
pub use kernel::{FrameReport, KernelConfig, StrengthTestKernel};
pub use simulation::{
    evaluate, CubePose, CubeState, RunState, SimulationConfig, Snapshot, Stage,
    StrengthSimulationEngine, TestRun,
};
pub use texture::synthesize_variant_texture;
