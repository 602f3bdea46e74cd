// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! strength_trace — CLI binary that replays a virtual strength test
//!
//! Takes a JSON request on stdin or as --json argument, steps the simulation
//! from 0 ms to completion and prints the snapshot timeline as JSON. With a
//! seed key it also prints the sample's crack/debris geometry.
//!
//! Usage:
//!   echo '{"maxLoad": 32.7}' | strength_trace
//!   strength_trace --json '{"maxLoad": 32.7, "stepMs": 100, "seedKey": "b25"}'
//!   strength_trace --json '{"maxLoad": 45.8, "config": {"crackRatio": 0.65}}'

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::io::{self, Read};

use cubetest_core::geometry::{generate_geometry, SampleGeometry};
use cubetest_core::simulation::{evaluate, SimulationConfig, Snapshot};

const DEFAULT_STEP_MS: f64 = 250.0;
/// Guard against tiny steps producing enormous traces.
const MAX_FRAMES: usize = 100_000;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TraceRequest {
    max_load: f64,
    #[serde(default)]
    config: Option<SimulationConfig>,
    #[serde(default)]
    step_ms: Option<f64>,
    #[serde(default)]
    seed_key: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceFrame {
    elapsed_ms: f64,
    #[serde(flatten)]
    snapshot: Snapshot,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceOutput {
    max_load: f64,
    config: SimulationConfig,
    total_duration_ms: f64,
    frames: Vec<TraceFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    geometry: Option<SampleGeometry>,
}

fn main() -> Result<()> {
    env_logger::init();

    let input = get_input()?;
    let request: TraceRequest = serde_json::from_str(&input).context("Invalid JSON input")?;

    let config = request.config.unwrap_or_default();
    config.validate()?;

    let step_ms = request.step_ms.unwrap_or(DEFAULT_STEP_MS);
    if !(step_ms.is_finite() && step_ms > 0.0) {
        bail!("stepMs must be > 0, got {}", step_ms);
    }

    let frames = trace(request.max_load, &config, step_ms);
    log::info!(
        "Traced {} frames for maxLoad={} MPa at {} ms steps",
        frames.len(),
        request.max_load,
        step_ms
    );

    let output = TraceOutput {
        max_load: request.max_load,
        config,
        total_duration_ms: config.total_duration_ms(),
        frames,
        geometry: request.seed_key.as_deref().map(generate_geometry),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Samples every `step_ms` until the run is complete; the completing frame
/// is always included.
fn trace(max_load: f64, config: &SimulationConfig, step_ms: f64) -> Vec<TraceFrame> {
    let mut frames = Vec::new();
    for i in 0..MAX_FRAMES {
        let elapsed_ms = (i as f64 * step_ms).min(config.total_duration_ms());
        let snapshot = evaluate(elapsed_ms, max_load, config);
        frames.push(TraceFrame {
            elapsed_ms,
            snapshot,
        });
        if snapshot.is_complete {
            break;
        }
    }
    frames
}

fn get_input() -> Result<String> {
    let args: Vec<String> = env::args().collect();

    // Check for --json argument
    if let Some(pos) = args.iter().position(|a| a == "--json") {
        if let Some(json) = args.get(pos + 1) {
            return Ok(json.clone());
        }
        bail!("--json requires a value");
    }

    // Otherwise read from stdin
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}
