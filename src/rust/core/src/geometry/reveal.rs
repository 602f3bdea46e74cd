// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! How much of the precomputed crack geometry to show for a given frame.

use crate::formulas::{crack_progress, round_half_up};
use crate::simulation::CubeState;

/// Cracks start appearing once progress passes this fraction of max load.
pub const REVEAL_START: f64 = 0.6;
/// Progress span over which the crack count ramps to the full set.
pub const REVEAL_SPAN: f64 = 0.4;

const STRIP_WIDTH_CRACKED: f32 = 0.02;
const STRIP_WIDTH_DESTROYED: f32 = 0.027;

/// Number of leading crack lines to draw.
///
/// None while intact, all once destroyed, and in between a count that
/// ramps from 60 % to 100 % of max load with at least one line shown.
pub fn visible_crack_count(cube_state: CubeState, load: f64, max_load: f64, total: usize) -> usize {
    match cube_state {
        CubeState::Intact => 0,
        CubeState::Destroyed => total,
        CubeState::Cracked => {
            if total == 0 {
                return 0;
            }
            let progress = crack_progress(load, max_load);
            let ramp = ((progress - REVEAL_START) / REVEAL_SPAN).clamp(0.0, 1.0);
            let count = round_half_up(total as f64 * ramp) as usize;
            count.clamp(1, total)
        }
    }
}

/// Rendered width of crack strips.
pub fn strip_width(cube_state: CubeState) -> f32 {
    if cube_state == CubeState::Destroyed {
        STRIP_WIDTH_DESTROYED
    } else {
        STRIP_WIDTH_CRACKED
    }
}
