// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Pit blemishes painted over the destroyed-variant texture.
//!
//! Each pit is a dark disc with a smaller highlight offset up and to the
//! left. Positions come from a fixed seed so every asset load looks the same.

use super::tone::clamp_tone;
use crate::formulas::round_half_up;
use crate::geometry::SeededRandom;
use image::RgbaImage;

pub const PIT_SEED_KEY: &str = "concrete:destroyed:pits";
pub const PIT_COUNT: usize = 220;

const PIT_DARK: [f64; 3] = [24.0, 28.0, 32.0];
const PIT_LIGHT: [f64; 3] = [240.0, 242.0, 244.0];

/// Highlight offset and size, relative to the pit radius.
const HIGHLIGHT_SHIFT: f64 = 0.35;
const HIGHLIGHT_SCALE: f64 = 0.55;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pit {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dark_alpha: f64,
    pub light_alpha: f64,
}

/// Pit layout for an image of the given size.
///
/// Draw order per pit: radius, x, y, dark alpha, light alpha.
pub fn pit_layout(width: u32, height: u32) -> Vec<Pit> {
    let mut random = SeededRandom::from_key(PIT_SEED_KEY);
    (0..PIT_COUNT)
        .map(|_| {
            let radius = 0.4 + random.next_f64() * 2.2;
            let x = random.next_f64() * width as f64;
            let y = random.next_f64() * height as f64;
            let dark_alpha = 0.03 + random.next_f64() * 0.07;
            let light_alpha = 0.015 + random.next_f64() * 0.03;
            Pit {
                x,
                y,
                radius,
                dark_alpha,
                light_alpha,
            }
        })
        .collect()
}

pub fn draw_pits(image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    for pit in pit_layout(width, height) {
        paint_disc(image, pit.x, pit.y, pit.radius, PIT_DARK, pit.dark_alpha);
        paint_disc(
            image,
            pit.x - pit.radius * HIGHLIGHT_SHIFT,
            pit.y - pit.radius * HIGHLIGHT_SHIFT,
            pit.radius * HIGHLIGHT_SCALE,
            PIT_LIGHT,
            pit.light_alpha,
        );
    }
}

/// Source-over blend of a translucent disc.
///
/// Edge pixels get partial coverage `clamp(r + 0.5 - d, 0, 1)` measured from
/// pixel centres, so sub-pixel pits still leave a faint mark.
pub fn paint_disc(image: &mut RgbaImage, cx: f64, cy: f64, radius: f64, rgb: [f64; 3], alpha: f64) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || radius <= 0.0 || alpha <= 0.0 {
        return;
    }

    let reach = radius + 1.0;
    let x0 = (cx - reach).floor().max(0.0) as i64;
    let y0 = (cy - reach).floor().max(0.0) as i64;
    let x1 = (cx + reach).ceil().min(width as f64 - 1.0) as i64;
    let y1 = (cy + reach).ceil().min(height as f64 - 1.0) as i64;

    for py in y0..=y1 {
        for px in x0..=x1 {
            let dx = px as f64 + 0.5 - cx;
            let dy = py as f64 + 0.5 - cy;
            let coverage = (radius + 0.5 - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
            let a = alpha * coverage;
            if a <= 0.0 {
                continue;
            }

            let pixel = image.get_pixel_mut(px as u32, py as u32);
            for (channel, src) in pixel.0.iter_mut().take(3).zip(rgb) {
                let blended = *channel as f64 * (1.0 - a) + src * a;
                *channel = clamp_tone(round_half_up(blended));
            }
        }
    }
}
