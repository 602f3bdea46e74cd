// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! CubeTest Simulation Tests
//!
//! End-to-end checks of the load narrative and the determinism guarantees
//! the renderer relies on.

use crate::geometry::{
    generate_geometry, generate_geometry_with, hash_to_seed, CubeFace, GeometryConfig,
    SeededRandom, StreamPurpose,
};
use crate::kernel::StrengthTestKernel;
use crate::simulation::{evaluate, CubeState, SimulationConfig, Stage};
use proptest::prelude::*;
use serde_json::json;

const MAX_LOAD: f64 = 32.7;

fn stage_rank(stage: Stage) -> u8 {
    match stage {
        Stage::Idle => 0,
        Stage::Ramp => 1,
        Stage::Crack => 2,
        Stage::Failure => 3,
        Stage::Complete => 4,
    }
}

#[test]
fn test_reference_scenario_c25() {
    println!(" Running reference scenario (maxLoad = 32.7 MPa)");
    let config = SimulationConfig::default();

    let crack = evaluate(4000.0, MAX_LOAD, &config);
    assert_eq!(crack.stage, Stage::Crack);
    assert!((crack.load - 26.16).abs() < 1e-9, "load at 80% ramp: {}", crack.load);
    assert!(crack.is_shaking);

    let failure = evaluate(5000.0, MAX_LOAD, &config);
    assert_eq!(failure.stage, Stage::Failure);
    assert_eq!(failure.load, MAX_LOAD);

    let complete = evaluate(5501.0, MAX_LOAD, &config);
    assert_eq!(complete.stage, Stage::Complete);
    assert!(complete.is_complete);
    println!(" Reference scenario OK");
}

#[test]
fn test_boundaries_are_inclusive() {
    let config = SimulationConfig::default();
    assert_eq!(evaluate(config.ramp_duration_ms * config.crack_ratio, MAX_LOAD, &config).stage, Stage::Crack);
    assert_eq!(evaluate(config.ramp_duration_ms, MAX_LOAD, &config).stage, Stage::Failure);

    let end = evaluate(config.total_duration_ms(), MAX_LOAD, &config);
    assert_eq!(end.stage, Stage::Complete);
    assert!(end.is_complete);
    assert!(!end.is_shaking);
}

#[test]
fn test_full_run_visits_every_stage_in_order() {
    let config = SimulationConfig::default();
    let mut seen = Vec::new();
    let mut elapsed = 0.0;
    while elapsed <= config.total_duration_ms() {
        let stage = evaluate(elapsed, MAX_LOAD, &config).stage;
        if seen.last() != Some(&stage) {
            seen.push(stage);
        }
        elapsed += 50.0;
    }
    assert_eq!(seen, vec![Stage::Ramp, Stage::Crack, Stage::Failure, Stage::Complete]);
}

#[test]
fn test_empty_seed_hashes_to_defined_value() {
    let seed = hash_to_seed("");
    assert_ne!(seed, 0);
    assert_eq!(seed, 2_166_136_261);
}

#[test]
fn test_geometry_is_pinned_across_runs() {
    // Values fixed by the FNV-1a + LCG definition; any change here would
    // redraw every sample's cracks on the live page.
    assert_eq!(hash_to_seed("sample-A"), 295_351_533);
    assert_eq!(hash_to_seed("sample-A:cracks"), 2_037_291_270);

    let mut cracks = SeededRandom::for_purpose("sample-A", StreamPurpose::Cracks);
    assert_eq!(cracks.next_f64(), 1_771_773_101.0 / 4_294_967_296.0);

    let geometry = generate_geometry("sample-A");
    // First walk: r = 0.4125 picks face index 2 (py), r = 0.2017 gives 2 segments
    assert_eq!(geometry.crack_lines[0].face, CubeFace::Py);
    assert_eq!(geometry.crack_lines[1].face, CubeFace::Py);
    assert_eq!(geometry.crack_lines[0].end, geometry.crack_lines[1].start);

    let expected_x = ((0.257_313_352_311_030_03 - 0.5) * 1.5) as f32;
    assert!((geometry.fragments[0].position.x - expected_x).abs() < 1e-6);

    let expected_particle = ((0.393_233_329_756_185_4 - 0.5) * 2.0) as f32;
    assert!((geometry.particle_positions[0] - expected_particle).abs() < 1e-6);
}

#[test]
fn test_kernel_session_from_json_config() {
    let config = json!({
        "simulation": { "crackRatio": 0.6, "rampDurationMs": 3000, "failureHoldMs": 400 },
        "geometry": { "crackCount": 6, "fragmentCount": 5, "particleCount": 20 }
    });
    let mut kernel = StrengthTestKernel::try_from_json(&config.to_string()).unwrap();

    let mut last_visible = 0;
    let mut elapsed = 0.0;
    while elapsed <= 3400.0 {
        let frame = kernel.frame("b20", elapsed, 26.2);
        // Revealed cracks never disappear as the test progresses
        assert!(frame.visible_crack_count >= last_visible);
        last_visible = frame.visible_crack_count;
        if frame.snapshot.cube_state == CubeState::Destroyed {
            assert_eq!(frame.fragments.len(), 5);
            assert_eq!(frame.particle_positions.len(), 60);
        }
        elapsed += 100.0;
    }
    assert_eq!(last_visible, kernel.geometry("b20").crack_lines.len());
}

proptest! {
    #[test]
    fn prop_negative_elapsed_is_zero_load(elapsed in -1.0e9f64..0.0, max_load in 0.1f64..200.0) {
        let snapshot = evaluate(elapsed, max_load, &SimulationConfig::default());
        prop_assert_eq!(snapshot.load, 0.0);
        prop_assert_eq!(snapshot.stage, Stage::Ramp);
    }

    #[test]
    fn prop_ramp_load_is_linear(elapsed in 0.0f64..5000.0, max_load in 0.1f64..200.0) {
        let snapshot = evaluate(elapsed, max_load, &SimulationConfig::default());
        prop_assert_eq!(snapshot.load, (elapsed / 5000.0) * max_load);
        prop_assert!(snapshot.progress_percent >= 0.0 && snapshot.progress_percent <= 100.0);
    }

    #[test]
    fn prop_monotonic_in_time(a in -100.0f64..7000.0, b in -100.0f64..7000.0, max_load in 0.1f64..200.0) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let config = SimulationConfig::default();
        let s1 = evaluate(early, max_load, &config);
        let s2 = evaluate(late, max_load, &config);
        prop_assert!(s1.load <= s2.load);
        prop_assert!(stage_rank(s1.stage) <= stage_rank(s2.stage));
    }

    #[test]
    fn prop_evaluate_is_pure(elapsed in -1000.0f64..10000.0, max_load in -10.0f64..200.0) {
        let config = SimulationConfig::default();
        let a = evaluate(elapsed, max_load, &config);
        let b = evaluate(elapsed, max_load, &config);
        prop_assert_eq!(a.load.to_bits(), b.load.to_bits());
        prop_assert_eq!(a.progress_percent.to_bits(), b.progress_percent.to_bits());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_streams_are_independent(seed_key in "[a-zA-Z0-9:-]{0,16}", fragments in 0usize..32) {
        let base = generate_geometry(&seed_key);
        let tuned = generate_geometry_with(&seed_key, &GeometryConfig {
            fragment_count: fragments,
            ..GeometryConfig::default()
        });
        prop_assert_eq!(&base.crack_lines, &tuned.crack_lines);
        prop_assert_eq!(&base.particle_positions, &tuned.particle_positions);
    }
}
