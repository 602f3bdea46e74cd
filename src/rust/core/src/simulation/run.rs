// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Host-side run controller.
//!
//! Converts raw animation-frame timestamps into elapsed test time with
//! start / pause / resume / reset, then asks the engine for a snapshot.
//! The engine itself stays stateless; all bookkeeping lives here.

use super::config::SimulationConfig;
use super::engine::{evaluate, Snapshot};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Complete,
}

#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct TestRun {
    config: SimulationConfig,
    max_load: f64,
    state: RunState,
    /// Host timestamp corresponding to elapsed = 0; cleared on pause.
    anchor_ms: Option<f64>,
    elapsed_ms: f64,
    snapshot: Snapshot,
    reduced_motion: bool,
}

#[wasm_bindgen]
impl TestRun {
    #[wasm_bindgen(constructor)]
    pub fn new(max_load: f64, config: &SimulationConfig) -> TestRun {
        TestRun {
            config: *config,
            max_load,
            state: RunState::Idle,
            anchor_ms: None,
            elapsed_ms: 0.0,
            snapshot: Snapshot::idle(),
            reduced_motion: false,
        }
    }

    /// Suppress the shake flag for users who prefer reduced motion.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
        if reduced_motion {
            self.snapshot.is_shaking = false;
        }
    }

    /// Starts from zero, discarding any previous progress.
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.snapshot = Snapshot::idle();
        self.run_from_current_point();
    }

    pub fn pause(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.anchor_ms = None;
        self.snapshot.is_shaking = false;
        self.state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        if self.state != RunState::Paused {
            return;
        }
        self.run_from_current_point();
    }

    pub fn reset(&mut self) {
        self.anchor_ms = None;
        self.elapsed_ms = 0.0;
        self.snapshot = Snapshot::idle();
        self.state = RunState::Idle;
    }

    /// Advances to the host timestamp and returns the resulting snapshot.
    ///
    /// Outside the running state the last snapshot is returned unchanged.
    pub fn tick(&mut self, timestamp_ms: f64) -> Snapshot {
        if self.state != RunState::Running {
            return self.snapshot;
        }

        let anchor = *self
            .anchor_ms
            .get_or_insert(timestamp_ms - self.elapsed_ms);
        self.elapsed_ms = timestamp_ms - anchor;

        let mut snapshot = evaluate(self.elapsed_ms, self.max_load, &self.config);
        snapshot.is_shaking = snapshot.is_shaking && !self.reduced_motion;
        self.snapshot = snapshot;

        if snapshot.is_complete {
            self.state = RunState::Complete;
            self.anchor_ms = None;
        }
        snapshot
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}

impl TestRun {
    fn run_from_current_point(&mut self) {
        self.anchor_ms = None;
        self.snapshot.is_shaking = false;
        self.state = RunState::Running;
    }
}
