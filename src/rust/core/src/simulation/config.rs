// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Simulation configuration.
//!
//! Timing and ratio parameters that script a single virtual strength test.

use crate::error::{Result, StrengthTestError};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Smallest crack ratio accepted after normalization.
pub const MIN_CRACK_RATIO: f64 = 0.001;

/// Smallest phase duration (ms) accepted after normalization.
pub const MIN_DURATION_MS: f64 = 1.0;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Fraction of max load (0, 1] at which cracking begins.
    pub crack_ratio: f64,
    /// Duration of the load ramp (ms).
    pub ramp_duration_ms: f64,
    /// How long the destroyed visual is held before the run completes (ms).
    pub failure_hold_ms: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            crack_ratio: 0.7,
            ramp_duration_ms: 5000.0,
            failure_hold_ms: 500.0,
        }
    }
}

#[wasm_bindgen]
impl SimulationConfig {
    #[wasm_bindgen(constructor)]
    pub fn new(crack_ratio: f64, ramp_duration_ms: f64, failure_hold_ms: f64) -> SimulationConfig {
        SimulationConfig {
            crack_ratio,
            ramp_duration_ms,
            failure_hold_ms,
        }
    }

    /// Ramp plus failure hold.
    pub fn total_duration_ms(&self) -> f64 {
        self.ramp_duration_ms + self.failure_hold_ms
    }
}

impl SimulationConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<SimulationConfig> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded simulation config: crack_ratio={}, ramp={}ms, hold={}ms",
            config.crack_ratio,
            config.ramp_duration_ms,
            config.failure_hold_ms
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.crack_ratio > 0.0 && self.crack_ratio <= 1.0) {
            return Err(StrengthTestError::InvalidConfig(format!(
                "crackRatio must be in (0, 1], got {}",
                self.crack_ratio
            )));
        }
        if !(self.ramp_duration_ms.is_finite() && self.ramp_duration_ms > 0.0) {
            return Err(StrengthTestError::InvalidConfig(format!(
                "rampDurationMs must be > 0, got {}",
                self.ramp_duration_ms
            )));
        }
        if !(self.failure_hold_ms.is_finite() && self.failure_hold_ms > 0.0) {
            return Err(StrengthTestError::InvalidConfig(format!(
                "failureHoldMs must be > 0, got {}",
                self.failure_hold_ms
            )));
        }
        Ok(())
    }

    /// Coerce every field into its valid range.
    ///
    /// Valid configs come back unchanged, so the engine can call this on
    /// every frame without altering well-formed input.
    pub fn normalized(&self) -> SimulationConfig {
        let defaults = SimulationConfig::default();

        let crack_ratio = if self.crack_ratio.is_finite() {
            self.crack_ratio.clamp(MIN_CRACK_RATIO, 1.0)
        } else {
            defaults.crack_ratio
        };
        let ramp_duration_ms = if self.ramp_duration_ms.is_finite() {
            self.ramp_duration_ms.max(MIN_DURATION_MS)
        } else {
            defaults.ramp_duration_ms
        };
        let failure_hold_ms = if self.failure_hold_ms.is_finite() {
            self.failure_hold_ms.max(MIN_DURATION_MS)
        } else {
            defaults.failure_hold_ms
        };

        SimulationConfig {
            crack_ratio,
            ramp_duration_ms,
            failure_hold_ms,
        }
    }
}
