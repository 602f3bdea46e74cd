// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Per-pixel tone curve and film grain for the concrete base colour map.

use crate::formulas::{luminance, round_half_up, trig_hash};
use crate::simulation::CubeState;
use image::RgbaImage;

/// Darkest channel value any variant may produce.
pub const TONE_MIN: u8 = 44;
/// Brightest channel value any variant may produce.
pub const TONE_MAX: u8 = 240;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneProfile {
    /// Gain applied around mid-grey (128).
    pub contrast: f64,
    /// Brightness lift added after the contrast curve.
    pub offset: f64,
    /// Peak-to-peak amplitude of the grain.
    pub noise: f64,
}

impl ToneProfile {
    /// Intact cubes are lighter and smoother; damage darkens and roughens.
    pub fn for_variant(variant: CubeState) -> ToneProfile {
        match variant {
            CubeState::Intact => ToneProfile {
                contrast: 1.02,
                offset: 24.0,
                noise: 4.5,
            },
            CubeState::Cracked => ToneProfile {
                contrast: 1.05,
                offset: 16.0,
                noise: 5.2,
            },
            CubeState::Destroyed => ToneProfile {
                contrast: 1.08,
                offset: 6.0,
                noise: 6.0,
            },
        }
    }

    /// Grey level for one pixel given its luminance and row-major index.
    pub fn grey(&self, luminance: f64, pixel_index: usize) -> u8 {
        let grain = (trig_hash(pixel_index) - 0.5) * self.noise;
        let contrasted = (luminance - 128.0) * self.contrast + 128.0;
        clamp_tone(round_half_up(contrasted + self.offset + grain))
    }
}

/// Clamps a channel value into [`TONE_MIN`, `TONE_MAX`].
pub fn clamp_tone(value: f64) -> u8 {
    value.clamp(TONE_MIN as f64, TONE_MAX as f64) as u8
}

/// Rewrites every pixel as a toned grey; alpha is kept.
pub fn apply_tone(image: &mut RgbaImage, profile: &ToneProfile) {
    for (index, pixel) in image.pixels_mut().enumerate() {
        let [r, g, b, a] = pixel.0;
        let value = profile.grey(luminance(r, g, b), index);
        pixel.0 = [value, value, value, a];
    }
}
