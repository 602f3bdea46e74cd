// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Scalar helpers shared by the simulation, geometry and texture code.
//!
//! These are pure functions on plain numbers. Rounding and hashing follow
//! the browser's number semantics so that values computed here line up with
//! what the page drew before the core moved to Rust.

use wasm_bindgen::prelude::*;

// ============================================================================
// ROUNDING
// ============================================================================

/// Rounds half-way cases towards +∞ (`Math.round`).
///
/// `f64::round` rounds half away from zero, which differs for negative
/// half-way values such as -2.5.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Fractional part in [0, 1), also for negative inputs.
pub fn fract_floor(x: f64) -> f64 {
    x - x.floor()
}

// ============================================================================
// PROGRESS
// ============================================================================

/// Load as a fraction of max load, clamped to [0, 1].
///
/// A non-positive max load gives 0 instead of dividing by zero.
#[wasm_bindgen(js_name = crackProgress)]
pub fn crack_progress(load: f64, max_load: f64) -> f64 {
    if !(max_load > 0.0) {
        return 0.0;
    }
    let progress = load / max_load;
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

// ============================================================================
// COLOUR
// ============================================================================

/// Rec. 601 luma of an 8-bit RGB triple.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    r as f64 * 0.299 + g as f64 * 0.587 + b as f64 * 0.114
}

/// Closed-form trigonometric hash of an integer index, in [0, 1).
///
/// Stateless film-grain source: the same index always gives the same value.
pub fn trig_hash(index: usize) -> f64 {
    let seed = ((index as f64) * 0.067 + 1.13).sin() * 43758.5453;
    fract_floor(seed)
}
