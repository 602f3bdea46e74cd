// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CubeTest — virtual compression test for the concrete class explorer
// StrengthTestKernel: Rust/WASM orchestrator for one visual session
//
// This file is part of CubeTest.
// For licensing terms, see the LICENSE file in the project root.

// ============================================================================
// StrengthTestKernel
// ============================================================================
// The front end talks to this type only. It holds the run config, keeps the
// geometry of the sample currently on screen, and answers per-frame queries
// with a single JSON document.
// ============================================================================

use crate::error::Result;
use crate::formulas::crack_progress;
use crate::geometry::{
    strip_width, visible_crack_count, CrackStrip, Fragment, GeometryConfig, SampleGeometry,
    SeededGeometryGenerator,
};
use crate::simulation::engine::safe_max_load;
use crate::simulation::{evaluate, shadow_opacity, CubeState, SimulationConfig, Snapshot};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub snapshot: Snapshot,
    pub crack_progress: f64,
    pub visible_crack_count: usize,
    pub crack_strips: Vec<CrackStrip>,
    pub strip_width: f32,
    pub shadow_opacity: f64,
    /// Debris only exists once the cube is destroyed.
    pub fragments: Vec<Fragment>,
    pub particle_positions: Vec<f32>,
}

/// Kernel settings accepted from JSON.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KernelConfig {
    pub simulation: SimulationConfig,
    pub geometry: GeometryConfig,
}

#[wasm_bindgen]
pub struct StrengthTestKernel {
    simulation: SimulationConfig,
    geometry_config: GeometryConfig,
    /// Geometry of the sample currently on screen; replaced when the seed
    /// key changes.
    cached: Option<SampleGeometry>,
}

impl Default for StrengthTestKernel {
    fn default() -> Self {
        Self::with_config(KernelConfig::default())
    }
}

#[wasm_bindgen]
impl StrengthTestKernel {
    #[wasm_bindgen(constructor)]
    pub fn new() -> StrengthTestKernel {
        StrengthTestKernel::default()
    }

    /// Kernel from a JSON `{ simulation, geometry }` document.
    pub fn from_json(config_json: &str) -> std::result::Result<StrengthTestKernel, JsValue> {
        Ok(Self::try_from_json(config_json)?)
    }

    pub fn config(&self) -> SimulationConfig {
        self.simulation
    }

    pub fn evaluate(&self, elapsed_ms: f64, max_load: f64) -> Snapshot {
        evaluate(elapsed_ms, max_load, &self.simulation)
    }

    /// Geometry for `seed_key` as a JSON string.
    pub fn geometry_json(&mut self, seed_key: &str) -> String {
        serde_json::to_string(self.geometry(seed_key)).unwrap_or_else(|e| {
            log::warn!("Failed to serialize geometry for '{}': {}", seed_key, e);
            "{}".to_string()
        })
    }

    /// Geometry for `seed_key` as a plain JS object.
    pub fn geometry_value(&mut self, seed_key: &str) -> std::result::Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.geometry(seed_key))?)
    }

    /// Snapshot plus revealed geometry for one frame, as JSON.
    pub fn frame_json(&mut self, seed_key: &str, elapsed_ms: f64, max_load: f64) -> String {
        let report = self.frame(seed_key, elapsed_ms, max_load);
        serde_json::to_string(&report).unwrap_or_else(|e| {
            log::warn!("Failed to serialize frame for '{}' at {}ms: {}", seed_key, elapsed_ms, e);
            "{}".to_string()
        })
    }

    /// Drops the cached geometry (the sample left the screen).
    pub fn release_geometry(&mut self) {
        if let Some(geometry) = self.cached.take() {
            log::debug!("Released geometry for '{}'", geometry.seed_key);
        }
    }

    pub fn cached_seed_key(&self) -> Option<String> {
        self.cached.as_ref().map(|g| g.seed_key.clone())
    }
}

impl StrengthTestKernel {
    pub fn with_config(config: KernelConfig) -> StrengthTestKernel {
        StrengthTestKernel {
            simulation: config.simulation,
            geometry_config: config.geometry,
            cached: None,
        }
    }

    pub fn try_from_json(config_json: &str) -> Result<StrengthTestKernel> {
        let config: KernelConfig = serde_json::from_str(config_json)?;
        config.simulation.validate()?;
        config.geometry.validate()?;
        log::info!(
            "Kernel configured: crack_ratio={}, ramp={}ms, hold={}ms, {} crack walks",
            config.simulation.crack_ratio,
            config.simulation.ramp_duration_ms,
            config.simulation.failure_hold_ms,
            config.geometry.crack_count
        );
        Ok(Self::with_config(config))
    }

    /// Cached geometry for `seed_key`, generating it on first request.
    pub fn geometry(&mut self, seed_key: &str) -> &SampleGeometry {
        if self
            .cached
            .as_ref()
            .is_some_and(|geometry| geometry.seed_key != seed_key)
        {
            self.release_geometry();
        }
        let config = self.geometry_config;
        self.cached
            .get_or_insert_with(|| SeededGeometryGenerator::generate(seed_key, &config))
    }

    pub fn frame(&mut self, seed_key: &str, elapsed_ms: f64, max_load: f64) -> FrameReport {
        let snapshot = self.evaluate(elapsed_ms, max_load);
        // Same floor the engine applied to the snapshot
        let max_load = safe_max_load(max_load);
        let progress = crack_progress(snapshot.load, max_load);
        let geometry = self.geometry(seed_key);

        let count = visible_crack_count(
            snapshot.cube_state,
            snapshot.load,
            max_load,
            geometry.crack_lines.len(),
        );
        let crack_strips = geometry.visible_strips(snapshot.cube_state, snapshot.load, max_load);
        let destroyed = snapshot.cube_state == CubeState::Destroyed;

        FrameReport {
            snapshot,
            crack_progress: progress,
            visible_crack_count: count,
            crack_strips,
            strip_width: strip_width(snapshot.cube_state),
            shadow_opacity: shadow_opacity(progress),
            fragments: if destroyed {
                geometry.fragments.clone()
            } else {
                Vec::new()
            },
            particle_positions: if destroyed {
                geometry.particle_positions.clone()
            } else {
                Vec::new()
            },
        }
    }
}

/// Stateless JS entry point for a single snapshot.
#[wasm_bindgen(js_name = evaluateStrengthTest)]
pub fn evaluate_strength_test(elapsed_ms: f64, max_load: f64, config: &SimulationConfig) -> Snapshot {
    evaluate(elapsed_ms, max_load, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Stage;

    #[test]
    fn test_geometry_cached_per_seed() {
        let mut kernel = StrengthTestKernel::new();
        let first = kernel.geometry("b25").clone();
        assert_eq!(kernel.cached_seed_key().as_deref(), Some("b25"));
        assert_eq!(kernel.geometry("b25"), &first);

        let other = kernel.geometry("b30").clone();
        assert_eq!(kernel.cached_seed_key().as_deref(), Some("b30"));
        assert_ne!(other.crack_lines, first.crack_lines);

        kernel.release_geometry();
        assert!(kernel.cached_seed_key().is_none());
    }

    #[test]
    fn test_frame_before_crack_shows_nothing() {
        let mut kernel = StrengthTestKernel::new();
        let frame = kernel.frame("b25", 1000.0, 32.7);
        assert_eq!(frame.snapshot.stage, Stage::Ramp);
        assert_eq!(frame.visible_crack_count, 0);
        assert!(frame.crack_strips.is_empty());
        assert!(frame.fragments.is_empty());
        assert!(frame.particle_positions.is_empty());
    }

    #[test]
    fn test_frame_after_failure_shows_debris() {
        let mut kernel = StrengthTestKernel::new();
        let frame = kernel.frame("b25", 5200.0, 32.7);
        assert_eq!(frame.snapshot.stage, Stage::Failure);
        assert_eq!(frame.fragments.len(), 9);
        assert_eq!(frame.particle_positions.len(), 150);
        assert_eq!(frame.strip_width, 0.027);
        let total = kernel.geometry("b25").crack_lines.len();
        assert_eq!(frame.visible_crack_count, total);
    }

    #[test]
    fn test_frame_json_shape() {
        let mut kernel = StrengthTestKernel::new();
        let json: serde_json::Value = serde_json::from_str(&kernel.frame_json("b25", 4000.0, 32.7)).unwrap();
        assert_eq!(json["snapshot"]["stage"], "crack");
        assert!(json["visibleCrackCount"].as_u64().unwrap() >= 1);
        assert!(json["crackStrips"].is_array());
    }

    #[test]
    fn test_kernel_from_json() {
        let kernel = StrengthTestKernel::try_from_json(
            r#"{"simulation": {"crackRatio": 0.5}, "geometry": {"fragmentCount": 4}}"#,
        )
        .unwrap();
        assert_eq!(kernel.config().crack_ratio, 0.5);
        assert_eq!(kernel.config().ramp_duration_ms, 5000.0);

        let mut kernel = kernel;
        assert_eq!(kernel.geometry("b25").fragments.len(), 4);

        assert!(StrengthTestKernel::try_from_json(r#"{"simulation": {"failureHoldMs": -1}}"#).is_err());
    }

    #[test]
    fn test_json_documents_survive_non_finite_input() {
        let mut kernel = StrengthTestKernel::new();
        let frame: serde_json::Value =
            serde_json::from_str(&kernel.frame_json("b25", f64::NAN, f64::INFINITY)).unwrap();
        assert_eq!(frame["snapshot"]["stage"], "ramp");
        assert!(frame["crackStrips"].is_array());

        let geometry: serde_json::Value = serde_json::from_str(&kernel.geometry_json("b25")).unwrap();
        assert_eq!(geometry["seedKey"], "b25");
    }

    #[test]
    fn test_kernel_rejects_oversized_geometry() {
        let result =
            StrengthTestKernel::try_from_json(r#"{"geometry": {"crackCount": 4611686018427387904}}"#);
        assert!(matches!(result, Err(crate::error::StrengthTestError::InvalidConfig(_))));
    }

    #[test]
    fn test_frame_with_non_positive_max_load() {
        let mut kernel = StrengthTestKernel::new();
        for max_load in [0.0, -3.0] {
            let frame = kernel.frame("b25", 5200.0, max_load);
            assert_eq!(frame.snapshot.stage, Stage::Failure);
            assert_eq!(frame.crack_progress, 1.0);
            assert!((frame.shadow_opacity - 0.23).abs() < 1e-12);
            assert_eq!(frame.visible_crack_count, kernel.geometry("b25").crack_lines.len());
        }

        let cracked = kernel.frame("b25", 4500.0, 0.0);
        assert_eq!(cracked.snapshot.stage, Stage::Crack);
        assert!((cracked.crack_progress - 0.9).abs() < 1e-9);
        assert!(cracked.visible_crack_count > 1);
    }
}
