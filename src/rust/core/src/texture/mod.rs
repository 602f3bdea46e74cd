// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// TextureToneSynthesizer: weathered variants of the concrete colour map
//
// One base photo texture is turned into three greyscale variants (intact,
// cracked, destroyed). Pure image processing: the output depends only on the
// input pixels and the variant.

pub mod pits;
pub mod tone;

use crate::simulation::CubeState;
use image::{Rgba, RgbaImage};
use wasm_bindgen::prelude::*;

pub use pits::{draw_pits, paint_disc, pit_layout, Pit, PIT_COUNT, PIT_SEED_KEY};
pub use tone::{apply_tone, ToneProfile, TONE_MAX, TONE_MIN};

/// Canvas colour used when no base image is available (#b7bcc0).
pub const FALLBACK_COLOR: Rgba<u8> = Rgba([0xb7, 0xbc, 0xc0, 0xff]);
/// Canvas size used when the base image has no usable dimensions.
pub const FALLBACK_SIZE: u32 = 1024;

/// Produces the `variant` texture from `base`.
///
/// A missing base is replaced by a flat fallback canvas, so this never fails.
pub fn synthesize_variant_texture(base: Option<&RgbaImage>, variant: CubeState) -> RgbaImage {
    let start = instant::Instant::now();

    let mut image = match base {
        Some(base) if base.width() > 0 && base.height() > 0 => base.clone(),
        _ => fallback_canvas(FALLBACK_SIZE, FALLBACK_SIZE),
    };

    apply_tone(&mut image, &ToneProfile::for_variant(variant));
    if variant == CubeState::Destroyed {
        draw_pits(&mut image);
    }

    log::debug!(
        "Synthesized {} texture {}x{} in {:?}",
        variant.as_str(),
        image.width(),
        image.height(),
        start.elapsed()
    );
    image
}

/// Raw-buffer form for callers holding `ImageData` bytes.
///
/// Zero dimensions are raised to 1; a buffer whose length does not match
/// `width * height * 4` is replaced by the fallback canvas of that size.
pub fn synthesize_variant_rgba(rgba: &[u8], width: u32, height: u32, variant: CubeState) -> RgbaImage {
    let (width, height) = (width.max(1), height.max(1));
    let base = RgbaImage::from_raw(width, height, rgba.to_vec()).unwrap_or_else(|| {
        log::warn!(
            "Base texture buffer has {} bytes, expected {}; using fallback colour",
            rgba.len(),
            width as usize * height as usize * 4
        );
        fallback_canvas(width, height)
    });
    synthesize_variant_texture(Some(&base), variant)
}

/// JS entry point: returns the RGBA bytes of the synthesized variant.
#[wasm_bindgen(js_name = synthesizeVariantTexture)]
pub fn synthesize_variant_texture_js(rgba: &[u8], width: u32, height: u32, variant: CubeState) -> Vec<u8> {
    synthesize_variant_rgba(rgba, width, height, variant).into_raw()
}

pub fn fallback_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width.max(1), height.max(1), FALLBACK_COLOR)
}
