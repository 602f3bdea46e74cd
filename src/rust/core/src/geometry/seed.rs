// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Seeded randomness for procedural visuals.
//!
//! Sequences must stay bit-identical to what the page has always drawn for a
//! given sample key.

use wasm_bindgen::prelude::*;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_MODULUS: f64 = 4_294_967_296.0; // 2^32

/// Seed used when a key hashes to zero.
pub const FALLBACK_SEED: u32 = 1;

/// 32-bit FNV-1a over the UTF-16 code units of `value`.
///
/// Never returns zero; a zero hash is replaced with [`FALLBACK_SEED`].
#[wasm_bindgen(js_name = hashToSeed)]
pub fn hash_to_seed(value: &str) -> u32 {
    let hash = value.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ unit as u32).wrapping_mul(FNV_PRIME)
    });
    if hash == 0 {
        FALLBACK_SEED
    } else {
        hash
    }
}

/// Independent sub-purposes drawing from one seed key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamPurpose {
    Cracks,
    Fragments,
    Particles,
}

impl StreamPurpose {
    pub fn tag(self) -> &'static str {
        match self {
            StreamPurpose::Cracks => "cracks",
            StreamPurpose::Fragments => "fragments",
            StreamPurpose::Particles => "particles",
        }
    }

    /// `"{seed_key}:{tag}"`
    pub fn stream_key(self, seed_key: &str) -> String {
        format!("{}:{}", seed_key, self.tag())
    }
}

/// Linear congruential stream of floats in [0, 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> SeededRandom {
        SeededRandom { state: seed }
    }

    /// Stream seeded from the hash of an arbitrary key.
    pub fn from_key(key: &str) -> SeededRandom {
        SeededRandom::new(hash_to_seed(key))
    }

    /// Stream reserved for one purpose of a sample.
    pub fn for_purpose(seed_key: &str, purpose: StreamPurpose) -> SeededRandom {
        SeededRandom::from_key(&purpose.stream_key(seed_key))
    }

    /// Next value; advances the state by one LCG step.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state as f64 / LCG_MODULUS
    }

    /// Centered draw in [-0.5, 0.5) scaled by `span`.
    pub fn centered(&mut self, span: f64) -> f64 {
        (self.next_f64() - 0.5) * span
    }

    /// Uniform index in `0..len`; `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64).floor() as usize).min(len - 1)
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Infinite stream for `seed`.
pub fn seeded_random_stream(seed: u32) -> SeededRandom {
    SeededRandom::new(seed)
}
