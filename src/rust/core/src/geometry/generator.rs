// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// SeededGeometryGenerator: stable per-sample visuals
//
// Every sample (concrete class) gets its own crack pattern, debris layout and
// dust cloud, derived only from its seed key. Re-renders of the same sample
// reproduce the same geometry; each sub-purpose owns its random stream.

use super::cracks::{crack_strips, generate_crack_lines, CrackLine, CrackStrip, MAX_CRACK_WALKS};
use super::debris::{
    generate_fragments, generate_particle_positions, Fragment, MAX_FRAGMENTS, MAX_PARTICLES,
};
use super::reveal::visible_crack_count;
use crate::error::{Result, StrengthTestError};
use crate::simulation::CubeState;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Presentation counts for generated geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeometryConfig {
    /// Number of crack walks (each walk yields 2-5 lines).
    pub crack_count: usize,
    pub fragment_count: usize,
    pub particle_count: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            crack_count: 16,
            fragment_count: 9,
            particle_count: 50,
        }
    }
}

impl GeometryConfig {
    /// Parse a (possibly partial) JSON config; missing counts take defaults.
    pub fn from_json(json: &str) -> Result<GeometryConfig> {
        let config: GeometryConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded geometry config: {} crack walks, {} fragments, {} particles",
            config.crack_count,
            config.fragment_count,
            config.particle_count
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("crackCount", self.crack_count, MAX_CRACK_WALKS),
            ("fragmentCount", self.fragment_count, MAX_FRAGMENTS),
            ("particleCount", self.particle_count, MAX_PARTICLES),
        ];
        for (name, value, max) in limits {
            if value > max {
                return Err(StrengthTestError::InvalidConfig(format!(
                    "{} must be <= {}, got {}",
                    name, max, value
                )));
            }
        }
        Ok(())
    }

    /// Counts truncated to the per-sample limits.
    pub fn clamped(&self) -> GeometryConfig {
        GeometryConfig {
            crack_count: self.crack_count.min(MAX_CRACK_WALKS),
            fragment_count: self.fragment_count.min(MAX_FRAGMENTS),
            particle_count: self.particle_count.min(MAX_PARTICLES),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleGeometry {
    pub seed_key: String,
    pub crack_lines: Vec<CrackLine>,
    pub fragments: Vec<Fragment>,
    /// Flat xyz buffer, three floats per particle.
    pub particle_positions: Vec<f32>,
}

impl SampleGeometry {
    /// The revealed prefix of crack lines for this frame.
    pub fn visible_lines(&self, cube_state: CubeState, load: f64, max_load: f64) -> &[CrackLine] {
        let count = visible_crack_count(cube_state, load, max_load, self.crack_lines.len());
        &self.crack_lines[..count]
    }

    /// Decals for the revealed crack lines.
    pub fn visible_strips(&self, cube_state: CubeState, load: f64, max_load: f64) -> Vec<CrackStrip> {
        crack_strips(self.visible_lines(cube_state, load, max_load))
    }

    pub fn particle_count(&self) -> usize {
        self.particle_positions.len() / 3
    }
}

pub struct SeededGeometryGenerator;

impl SeededGeometryGenerator {
    pub fn generate(seed_key: &str, config: &GeometryConfig) -> SampleGeometry {
        let config = config.clamped();
        let geometry = SampleGeometry {
            seed_key: seed_key.to_string(),
            crack_lines: generate_crack_lines(seed_key, config.crack_count),
            fragments: generate_fragments(seed_key, config.fragment_count),
            particle_positions: generate_particle_positions(seed_key, config.particle_count),
        };
        log::debug!(
            "Generated geometry for '{}': {} crack lines, {} fragments, {} particles",
            seed_key,
            geometry.crack_lines.len(),
            geometry.fragments.len(),
            geometry.particle_count()
        );
        geometry
    }
}

/// Geometry for `seed_key` with the default counts.
pub fn generate_geometry(seed_key: &str) -> SampleGeometry {
    SeededGeometryGenerator::generate(seed_key, &GeometryConfig::default())
}

/// Geometry for `seed_key` with tuned counts.
pub fn generate_geometry_with(seed_key: &str, config: &GeometryConfig) -> SampleGeometry {
    SeededGeometryGenerator::generate(seed_key, config)
}

/// JS entry point: geometry as a plain object (`crackLines`, `fragments`,
/// `particlePositions`).
#[wasm_bindgen(js_name = generateGeometry)]
pub fn generate_geometry_js(seed_key: &str) -> std::result::Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&generate_geometry(seed_key))?)
}
