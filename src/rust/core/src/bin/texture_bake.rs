// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! texture_bake — pre-renders the three concrete texture variants
//!
//! Loads the base colour map and writes the intact, cracked and destroyed
//! variants as PNG files, so the page can ship baked textures instead of
//! synthesizing them on load.
//!
//! Usage:
//!   texture_bake public/textures/concrete/concrete_basecolor_1k.jpg out/

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use cubetest_core::simulation::CubeState;
use cubetest_core::texture::synthesize_variant_texture;

const VARIANTS: [CubeState; 3] = [CubeState::Intact, CubeState::Cracked, CubeState::Destroyed];

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (base_path, out_dir) = parse_args(&args)?;

    let base = image::open(&base_path)
        .with_context(|| format!("Failed to load base texture {}", base_path.display()))?
        .to_rgba8();
    log::info!(
        "Loaded base texture {} ({}x{})",
        base_path.display(),
        base.width(),
        base.height()
    );

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for variant in VARIANTS {
        let texture = synthesize_variant_texture(Some(&base), variant);
        let path = out_dir.join(format!("concrete_{}.png", variant.as_str()));
        texture
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Variant saved: {}", path.display());
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(PathBuf, PathBuf)> {
    match args {
        [_, base, out_dir, ..] => Ok((PathBuf::from(base), PathBuf::from(out_dir))),
        _ => {
            let program = args.first().map_or("texture_bake", String::as_str);
            bail!("Usage: {} <base-image> <out-dir>", program)
        }
    }
}
