// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Per-frame cube motion: press shake, idle spin and contact shadows.

use super::engine::CubeState;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

const SHAKE_FREQ_X: f64 = 40.0;
const SHAKE_FREQ_Y: f64 = 48.0;
const SHAKE_AMP_X: f64 = 0.016;
const SHAKE_AMP_Y: f64 = 0.008;

/// Spin rates (rad/s) while the cube is still whole.
const SPIN_INTACT: f64 = 0.24;
const SPIN_CRACKED: f64 = 0.16;
/// Tumble rates (rad/s) of the debris group about x, y, z.
const TUMBLE_DESTROYED: [f64; 3] = [0.12, 0.08, 0.06];

/// Horizontal jitter of the cube under load.
///
/// `clock_s` is the renderer clock in seconds, `crack_progress` the load
/// fraction in [0, 1]. The debris group never shakes.
pub fn shake_offset(clock_s: f64, crack_progress: f64, cube_state: CubeState, is_shaking: bool) -> [f64; 2] {
    if !is_shaking || cube_state == CubeState::Destroyed {
        return [0.0, 0.0];
    }
    let p = crack_progress.clamp(0.0, 1.0);
    [
        (clock_s * SHAKE_FREQ_X).sin() * SHAKE_AMP_X * p,
        (clock_s * SHAKE_FREQ_Y).cos() * SHAKE_AMP_Y * p,
    ]
}

/// Opacity of the press-plate shadows above and below the cube.
pub fn shadow_opacity(crack_progress: f64) -> f64 {
    0.08 + crack_progress.clamp(0.0, 1.0) * 0.15
}

/// Accumulated orientation of the cube group (XYZ Euler, radians).
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CubePose {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub rotation_z: f64,
}

#[wasm_bindgen]
impl CubePose {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CubePose {
        CubePose::default()
    }

    /// Integrates one frame of `delta_s` seconds.
    pub fn advance(&mut self, delta_s: f64, cube_state: CubeState) {
        let delta = delta_s.max(0.0);
        match cube_state {
            CubeState::Destroyed => {
                self.rotation_x += delta * TUMBLE_DESTROYED[0];
                self.rotation_y += delta * TUMBLE_DESTROYED[1];
                self.rotation_z += delta * TUMBLE_DESTROYED[2];
            }
            CubeState::Cracked | CubeState::Intact => {
                let spin = if cube_state == CubeState::Cracked {
                    SPIN_CRACKED
                } else {
                    SPIN_INTACT
                };
                self.rotation_x = 0.0;
                self.rotation_z = 0.0;
                self.rotation_y += delta * spin;
            }
        }
    }
}
