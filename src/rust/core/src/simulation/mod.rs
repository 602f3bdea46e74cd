// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod config;
pub mod engine;
pub mod motion;
pub mod run; // Host-side clock bookkeeping

pub use config::SimulationConfig;
pub use engine::{evaluate, CubeState, Snapshot, Stage, StrengthSimulationEngine};
pub use motion::{shadow_opacity, shake_offset, CubePose};
pub use run::{RunState, TestRun};
