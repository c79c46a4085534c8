// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Rivetgen Developers

//! Rivetgen
//!
//! A parametric generator for rivet part geometry. Given numeric dimension
//! tuples it produces a small catalog of rivet objects with derived mass and
//! price, a 2D cross-section contour, a revolved 3D solid, and a hatched
//! drawing representation.

pub mod catalog;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod part;

pub use catalog::Generator;
pub use error::Error;
pub use geometry::{Contour, Mesh};
pub use part::Rivet;

use anyhow::Result;

/// Main entry point: generate a rivet catalog from raw dimension tuples.
///
/// Each definition is `[rivet_diameter, rivet_length, head_diameter,
/// head_length]`; rivets are named `rivet1`, `rivet2`, … in input order.
pub fn generate(definitions: Vec<[f64; 4]>) -> Result<Vec<Rivet>> {
    let generator = Generator::new(definitions, "");
    Ok(generator.generate()?)
}
