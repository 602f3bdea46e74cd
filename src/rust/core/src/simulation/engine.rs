// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// StrengthSimulationEngine: scripted compression test
//
// Maps elapsed time onto the intact -> cracked -> destroyed narrative of a
// cube under a press. Stateless: every call is recomputed from its arguments.

use super::config::SimulationConfig;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Floor substituted for non-positive max loads (MPa).
pub const MIN_MAX_LOAD: f64 = 0.001;

/// Fine-grained simulation phase.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Idle,
    Ramp,
    Crack,
    Failure,
    Complete,
}

/// Coarse visual state of the cube.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeState {
    Intact,
    Cracked,
    Destroyed,
}

impl Stage {
    pub fn cube_state(self) -> CubeState {
        match self {
            Stage::Idle | Stage::Ramp => CubeState::Intact,
            Stage::Crack => CubeState::Cracked,
            Stage::Failure | Stage::Complete => CubeState::Destroyed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Ramp => "ramp",
            Stage::Crack => "crack",
            Stage::Failure => "failure",
            Stage::Complete => "complete",
        }
    }
}

impl CubeState {
    pub fn as_str(self) -> &'static str {
        match self {
            CubeState::Intact => "intact",
            CubeState::Cracked => "cracked",
            CubeState::Destroyed => "destroyed",
        }
    }

    pub fn parse(value: &str) -> Option<CubeState> {
        match value {
            "intact" => Some(CubeState::Intact),
            "cracked" => Some(CubeState::Cracked),
            "destroyed" => Some(CubeState::Destroyed),
            _ => None,
        }
    }
}

/// One frame of the simulation.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub stage: Stage,
    pub cube_state: CubeState,
    /// Applied load (MPa), 0 <= load <= max load.
    pub load: f64,
    /// load / max load * 100, clamped to [0, 100].
    pub progress_percent: f64,
    pub is_shaking: bool,
    pub is_complete: bool,
}

impl Snapshot {
    /// Caller-side state before the first tick.
    pub fn idle() -> Snapshot {
        Snapshot {
            stage: Stage::Idle,
            cube_state: CubeState::Intact,
            load: 0.0,
            progress_percent: 0.0,
            is_shaking: false,
            is_complete: false,
        }
    }

    fn destroyed(stage: Stage, max_load: f64) -> Snapshot {
        let terminal = stage == Stage::Complete;
        Snapshot {
            stage,
            cube_state: CubeState::Destroyed,
            load: max_load,
            progress_percent: 100.0,
            is_shaking: !terminal,
            is_complete: terminal,
        }
    }
}

#[wasm_bindgen]
pub struct StrengthSimulationEngine;

#[wasm_bindgen]
impl StrengthSimulationEngine {
    /// Computes the snapshot at `elapsed_ms` for a cube failing at `max_load`.
    ///
    /// Never fails: negative or NaN time reads as 0, a non-positive max load
    /// is floored to `MIN_MAX_LOAD`, and the config is normalized.
    pub fn evaluate(elapsed_ms: f64, max_load: f64, config: &SimulationConfig) -> Snapshot {
        let config = config.normalized();
        let max_load = safe_max_load(max_load);
        // f64::max ignores NaN
        let elapsed = elapsed_ms.max(0.0);

        // Phase boundaries are inclusive on the later stage
        if elapsed >= config.total_duration_ms() {
            return Snapshot::destroyed(Stage::Complete, max_load);
        }
        if elapsed >= config.ramp_duration_ms {
            return Snapshot::destroyed(Stage::Failure, max_load);
        }

        let ramp_progress = (elapsed / config.ramp_duration_ms).clamp(0.0, 1.0);
        let load = ramp_progress * max_load;
        let progress_percent = ((load / max_load) * 100.0).clamp(0.0, 100.0);

        let stage = if load >= max_load * config.crack_ratio {
            Stage::Crack
        } else {
            Stage::Ramp
        };

        Snapshot {
            stage,
            cube_state: stage.cube_state(),
            load,
            progress_percent,
            is_shaking: stage == Stage::Crack,
            is_complete: false,
        }
    }

    /// Load at which cracking begins.
    pub fn crack_threshold(max_load: f64, config: &SimulationConfig) -> f64 {
        safe_max_load(max_load) * config.normalized().crack_ratio
    }

    /// Crack threshold as a percentage of max load, for the load-bar marker.
    pub fn crack_marker_percent(max_load: f64, config: &SimulationConfig) -> f64 {
        let max_load = safe_max_load(max_load);
        ((Self::crack_threshold(max_load, config) / max_load) * 100.0).clamp(0.0, 100.0)
    }
}

/// Free-function form of [`StrengthSimulationEngine::evaluate`].
pub fn evaluate(elapsed_ms: f64, max_load: f64, config: &SimulationConfig) -> Snapshot {
    StrengthSimulationEngine::evaluate(elapsed_ms, max_load, config)
}

pub(crate) fn safe_max_load(max_load: f64) -> f64 {
    if max_load.is_finite() {
        max_load.max(MIN_MAX_LOAD)
    } else {
        MIN_MAX_LOAD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_LOAD: f64 = 32.7;

    #[test]
    fn test_starts_in_ramp_with_zero_load() {
        let snapshot = evaluate(0.0, MAX_LOAD, &SimulationConfig::default());
        assert_eq!(snapshot.stage, Stage::Ramp);
        assert_eq!(snapshot.cube_state, CubeState::Intact);
        assert_eq!(snapshot.load, 0.0);
        assert!(!snapshot.is_shaking);
        assert!(!snapshot.is_complete);
    }

    #[test]
    fn test_crack_after_threshold() {
        let snapshot = evaluate(4000.0, MAX_LOAD, &SimulationConfig::default());
        assert_eq!(snapshot.stage, Stage::Crack);
        assert_eq!(snapshot.cube_state, CubeState::Cracked);
        assert!(snapshot.is_shaking);
        assert!((snapshot.load - 26.16).abs() < 1e-9, "load = {}", snapshot.load);
        assert!((snapshot.progress_percent - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_crack_boundary_is_inclusive() {
        let config = SimulationConfig::default();
        let at = config.ramp_duration_ms * config.crack_ratio;
        assert_eq!(evaluate(at, MAX_LOAD, &config).stage, Stage::Crack);
        assert_eq!(evaluate(at - 1.0, MAX_LOAD, &config).stage, Stage::Ramp);

        let half = SimulationConfig::new(0.5, 4000.0, 250.0);
        assert_eq!(evaluate(2000.0, 10.0, &half).stage, Stage::Crack);
    }

    #[test]
    fn test_failure_at_ramp_end() {
        let snapshot = evaluate(5000.0, MAX_LOAD, &SimulationConfig::default());
        assert_eq!(snapshot.stage, Stage::Failure);
        assert_eq!(snapshot.cube_state, CubeState::Destroyed);
        assert_eq!(snapshot.load, MAX_LOAD);
        assert_eq!(snapshot.progress_percent, 100.0);
        assert!(snapshot.is_shaking);
        assert!(!snapshot.is_complete);
    }

    #[test]
    fn test_complete_after_hold() {
        let config = SimulationConfig::default();
        for elapsed in [config.total_duration_ms(), 5501.0, 1.0e9] {
            let snapshot = evaluate(elapsed, MAX_LOAD, &config);
            assert_eq!(snapshot.stage, Stage::Complete);
            assert_eq!(snapshot.cube_state, CubeState::Destroyed);
            assert!(snapshot.is_complete);
            assert!(!snapshot.is_shaking);
            assert_eq!(snapshot.load, MAX_LOAD);
        }
    }

    #[test]
    fn test_clamps_negative_and_nan_elapsed() {
        for elapsed in [-100.0, -1.0e12, f64::NAN, f64::NEG_INFINITY] {
            let snapshot = evaluate(elapsed, MAX_LOAD, &SimulationConfig::default());
            assert_eq!(snapshot.stage, Stage::Ramp);
            assert_eq!(snapshot.load, 0.0);
            assert_eq!(snapshot.progress_percent, 0.0);
        }
    }

    #[test]
    fn test_floors_non_positive_max_load() {
        for max_load in [0.0, -5.0, f64::NAN] {
            let snapshot = evaluate(5000.0, max_load, &SimulationConfig::default());
            assert_eq!(snapshot.load, MIN_MAX_LOAD);
            assert!(snapshot.progress_percent.is_finite());
        }
        let ramp = evaluate(2500.0, 0.0, &SimulationConfig::default());
        assert_eq!(ramp.progress_percent, 50.0);
    }

    #[test]
    fn test_cube_state_mapping() {
        assert_eq!(Stage::Idle.cube_state(), CubeState::Intact);
        assert_eq!(Stage::Ramp.cube_state(), CubeState::Intact);
        assert_eq!(Stage::Crack.cube_state(), CubeState::Cracked);
        assert_eq!(Stage::Failure.cube_state(), CubeState::Destroyed);
        assert_eq!(Stage::Complete.cube_state(), CubeState::Destroyed);
    }

    #[test]
    fn test_crack_marker_percent() {
        let config = SimulationConfig::default();
        let marker = StrengthSimulationEngine::crack_marker_percent(MAX_LOAD, &config);
        assert!((marker - 70.0).abs() < 1e-9);
        let threshold = StrengthSimulationEngine::crack_threshold(MAX_LOAD, &config);
        assert!((threshold - 22.89).abs() < 1e-9);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(evaluate(4000.0, MAX_LOAD, &SimulationConfig::default())).unwrap();
        assert_eq!(json["stage"], "crack");
        assert_eq!(json["cubeState"], "cracked");
        assert_eq!(json["isShaking"], true);
        assert_eq!(CubeState::parse("destroyed"), Some(CubeState::Destroyed));
        assert_eq!(CubeState::parse("Destroyed"), None);
        assert_eq!(Stage::Failure.as_str(), "failure");
    }
}
