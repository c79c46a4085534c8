// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Rivetgen Developers

//! Geometry module - planar contours and solids of revolution

mod contour;
mod mesh;
mod revolve;

pub use contour::{Contour, Segment};
pub use mesh::{Mesh, Triangle, Vertex};
pub use revolve::{revolve, revolve_with_normal, DEFAULT_SEGMENTS};

/// Linear tolerance shared by the geometry routines.
pub(crate) const TOLERANCE: f64 = 1e-9;
