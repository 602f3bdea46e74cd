// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Unit test-cube surface parameterization.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Half extent of the unit cube.
pub const HALF_EXTENT: f32 = 0.5;

/// Fixed coordinate of projected points: half extent plus a 0.003 outward
/// lift so decals do not z-fight with the faces.
pub const SURFACE: f32 = 0.503;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeFace {
    Px,
    Nx,
    Py,
    Ny,
    Pz,
    Nz,
}

/// Draw order used when picking a random face.
pub const FACES: [CubeFace; 6] = [
    CubeFace::Px,
    CubeFace::Nx,
    CubeFace::Py,
    CubeFace::Ny,
    CubeFace::Pz,
    CubeFace::Nz,
];

impl CubeFace {
    pub fn normal(self) -> Vector3<f32> {
        match self {
            CubeFace::Px => Vector3::x(),
            CubeFace::Nx => -Vector3::x(),
            CubeFace::Py => Vector3::y(),
            CubeFace::Ny => -Vector3::y(),
            CubeFace::Pz => Vector3::z(),
            CubeFace::Nz => -Vector3::z(),
        }
    }

    /// Places face-local `(u, v)` on the lifted surface of this face.
    ///
    /// `u, v` are in [-0.5, 0.5]; the fixed coordinate is `±SURFACE`.
    pub fn project(self, u: f32, v: f32) -> Vector3<f32> {
        let s = SURFACE;
        match self {
            CubeFace::Px => Vector3::new(s, u, v),
            CubeFace::Nx => Vector3::new(-s, u, v),
            CubeFace::Py => Vector3::new(u, s, v),
            CubeFace::Ny => Vector3::new(u, -s, v),
            CubeFace::Pz => Vector3::new(u, v, s),
            CubeFace::Nz => Vector3::new(u, v, -s),
        }
    }
}

/// Outward face normal at a point on (or near) the cube surface.
///
/// Picks the dominant axis; ties go to x, then y. Zero coordinates count as
/// positive.
pub fn surface_normal(point: &Vector3<f32>) -> Vector3<f32> {
    let (ax, ay, az) = (point.x.abs(), point.y.abs(), point.z.abs());
    let sign = |c: f32| if c < 0.0 { -1.0 } else { 1.0 };

    if ax >= ay && ax >= az {
        Vector3::new(sign(point.x), 0.0, 0.0)
    } else if ay >= ax && ay >= az {
        Vector3::new(0.0, sign(point.y), 0.0)
    } else {
        Vector3::new(0.0, 0.0, sign(point.z))
    }
}
