// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Rivetgen Developers

//! Rivet part model: dimensions, derived physics, profile and solid.

use crate::draw::{EdgeStyle, HatchPattern, HatchedContour, PrimitiveGroup, SurfaceStyle};
use crate::error::Error;
use crate::geometry::{revolve, Contour, Mesh, DEFAULT_SEGMENTS};
use nalgebra::{Point2, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Hatch spacing used for rivet cross-section drawings.
const HATCH_SPACING: f64 = 0.1;

/// A fastener with a cylindrical shank and a wider cylindrical head,
/// modeled as a solid of revolution.
///
/// Dimensions are fixed at construction; `price` and `mass` are derived
/// once and can never go stale because nothing is mutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rivet {
    rivet_diameter: f64,
    rivet_length: f64,
    head_diameter: f64,
    head_length: f64,
    price_factor: f64,
    rho: f64,
    name: String,
    price: f64,
    mass: f64,
}

impl Rivet {
    /// Validated factory: all six numeric parameters must be strictly
    /// positive. `price_factor` calibrates against raw (uncut) stock
    /// volume; `rho` is the material density.
    pub fn new(
        rivet_diameter: f64,
        rivet_length: f64,
        head_diameter: f64,
        head_length: f64,
        price_factor: f64,
        rho: f64,
        name: impl Into<String>,
    ) -> Result<Self, Error> {
        let checks = [
            ("rivet_diameter", rivet_diameter),
            ("rivet_length", rivet_length),
            ("head_diameter", head_diameter),
            ("head_length", head_length),
            ("price_factor", price_factor),
            ("rho", rho),
        ];
        for (name, value) in checks {
            if value <= 0.0 {
                return Err(Error::NonPositiveDimension { name, value });
            }
        }

        let volume = cylinder_volume(head_diameter, head_length)
            + cylinder_volume(rivet_diameter, rivet_length);
        // Raw stock: the head diameter over the full combined length, the
        // material consumed before machining the shank down.
        let raw_volume = cylinder_volume(head_diameter, head_length + rivet_length);

        Ok(Self {
            rivet_diameter,
            rivet_length,
            head_diameter,
            head_length,
            price_factor,
            rho,
            name: name.into(),
            price: price_factor * raw_volume / volume,
            mass: rho * volume,
        })
    }

    /// Build from a `[rivet_diameter, rivet_length, head_diameter,
    /// head_length]` tuple with unit price factor and density.
    pub fn from_definition(definition: [f64; 4], name: impl Into<String>) -> Result<Self, Error> {
        let [rivet_diameter, rivet_length, head_diameter, head_length] = definition;
        Self::new(
            rivet_diameter,
            rivet_length,
            head_diameter,
            head_length,
            1.0,
            1.0,
            name,
        )
    }

    pub fn rivet_diameter(&self) -> f64 {
        self.rivet_diameter
    }

    pub fn rivet_length(&self) -> f64 {
        self.rivet_length
    }

    pub fn head_diameter(&self) -> f64 {
        self.head_diameter
    }

    pub fn head_length(&self) -> f64 {
        self.head_length
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derived price: `price_factor × raw_volume / volume`. Always at
    /// least `price_factor`, since raw stock contains the finished part.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Derived mass: `rho × volume`.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Material volume: head cylinder plus shank cylinder.
    pub fn volume(&self) -> f64 {
        cylinder_volume(self.head_diameter, self.head_length)
            + cylinder_volume(self.rivet_diameter, self.rivet_length)
    }

    /// Axial cross-section silhouette.
    ///
    /// With `full_contour` the closed 9-edge outline is returned (the
    /// ninth edge is the degenerate closing edge of the translation loop).
    /// Otherwise the outline is cut by the rivet's central axis and the
    /// half on the positive side comes back as a closed revolvable profile.
    ///
    /// The origin sits on the axis at the head/shank junction; the head
    /// extends toward +y, the shank toward -y.
    pub fn contour(&self, full_contour: bool) -> Result<Contour, Error> {
        let half_shank = self.rivet_diameter / 2.0;
        let half_head = self.head_diameter / 2.0;
        let overhang = half_head - half_shank;

        let steps = [
            Vector2::new(half_shank, 0.0),
            Vector2::new(overhang, 0.0),
            Vector2::new(0.0, self.head_length),
            Vector2::new(-self.head_diameter, 0.0),
            Vector2::new(0.0, -self.head_length),
            Vector2::new(overhang, 0.0),
            Vector2::new(0.0, -self.rivet_length),
            Vector2::new(self.rivet_diameter, 0.0),
            Vector2::new(0.0, self.rivet_length),
        ];

        let mut points = Vec::with_capacity(steps.len());
        let mut cursor = Point2::origin();
        for step in steps {
            cursor += step;
            points.push(cursor);
        }

        let outline = Contour::closed(points)?;
        if full_contour {
            return Ok(outline);
        }

        let axis_direction = Vector2::new(0.0, -self.rivet_length);
        outline
            .cut_by_line(Point2::origin(), axis_direction)
            .into_iter()
            .next()
            .ok_or(Error::EmptyProfile)
    }

    /// Build the rivet's 3D representation: a single solid of revolution,
    /// the half profile swept 2π around `axis` through `center`.
    ///
    /// The in-plane normal is picked arbitrarily among the unit vectors
    /// orthogonal to `axis`; the rivet is axially symmetric, so the choice
    /// cannot change the solid.
    pub fn revolved(&self, center: Point3<f64>, axis: Vector3<f64>) -> Result<Vec<Mesh>, Error> {
        let profile = self.contour(false)?;
        let solid = revolve(&profile, center, axis, 2.0 * PI, DEFAULT_SEGMENTS)?;
        Ok(vec![solid])
    }

    /// Build the rivet's 2D drawing representation: one primitive group
    /// holding the contour, hatched at spacing 0.1 with a unit-width
    /// outline stroke.
    pub fn plot(&self, full_contour: bool) -> Result<PrimitiveGroup, Error> {
        let contour = self.contour(full_contour)?;
        let edge_style = EdgeStyle::new(1.0);
        let surface_style = SurfaceStyle::hatched(HatchPattern::with_spacing(HATCH_SPACING));
        let primitive = HatchedContour::new(&contour, edge_style, surface_style);
        Ok(PrimitiveGroup::new(vec![primitive]))
    }
}

fn cylinder_volume(diameter: f64, length: f64) -> f64 {
    PI * diameter * diameter / 4.0 * length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Rivet {
        Rivet::new(0.01, 0.05, 0.012, 0.005, 1.0, 1.0, "sample").unwrap()
    }

    #[test]
    fn test_volume_formula() {
        let rivet = sample();
        let expected = PI * 0.012_f64.powi(2) / 4.0 * 0.005 + PI * 0.01_f64.powi(2) / 4.0 * 0.05;
        assert_relative_eq!(rivet.volume(), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_mass_scales_with_density() {
        let rivet = Rivet::new(0.01, 0.05, 0.012, 0.005, 1.0, 7800.0, "steel").unwrap();
        assert_relative_eq!(rivet.mass(), 7800.0 * rivet.volume(), epsilon = 1e-12);
    }

    #[test]
    fn test_price_formula() {
        let rivet = Rivet::new(0.01, 0.05, 0.012, 0.005, 2.5, 1.0, "").unwrap();
        let raw_volume = PI * 0.012_f64.powi(2) / 4.0 * (0.005 + 0.05);
        assert_relative_eq!(
            rivet.price(),
            2.5 * raw_volume / rivet.volume(),
            epsilon = 1e-12
        );
        // Raw stock strictly contains the finished part.
        assert!(rivet.price() >= 2.5);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        for bad in [0.0, -1.0] {
            let result = Rivet::new(bad, 0.05, 0.012, 0.005, 1.0, 1.0, "");
            assert!(matches!(
                result,
                Err(Error::NonPositiveDimension {
                    name: "rivet_diameter",
                    ..
                }
            )));
        }
        let result = Rivet::new(0.01, 0.05, 0.012, 0.005, 1.0, 0.0, "");
        assert!(matches!(
            result,
            Err(Error::NonPositiveDimension { name: "rho", .. })
        ));
    }

    #[test]
    fn test_full_contour_has_nine_edges() {
        let contour = sample().contour(true).unwrap();
        assert_eq!(contour.edge_count(), 9);
        // The loop closes back where it started.
        assert_relative_eq!(contour.edges()[8].length(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_full_contour_silhouette_extents() {
        let contour = sample().contour(true).unwrap();
        let (min, max) = contour.bounds();
        assert_relative_eq!(min.x, -0.006, epsilon = 1e-12); // half head diameter
        assert_relative_eq!(max.x, 0.006, epsilon = 1e-12);
        assert_relative_eq!(min.y, -0.05, epsilon = 1e-12); // shank length
        assert_relative_eq!(max.y, 0.005, epsilon = 1e-12); // head length
    }

    #[test]
    fn test_half_profile_is_positive_side() {
        let profile = sample().contour(false).unwrap();
        assert!(profile.points().iter().all(|p| p.x >= -1e-12));
        // Half the silhouette area.
        let full = sample().contour(true).unwrap();
        assert_relative_eq!(
            profile.signed_area().abs(),
            full.signed_area().abs() / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_revolved_single_closed_solid() {
        let rivet = sample();
        let solids = rivet.revolved(Point3::origin(), Vector3::z()).unwrap();
        assert_eq!(solids.len(), 1);
        assert!(solids[0].is_closed());
        assert!(solids[0].is_manifold());
    }

    #[test]
    fn test_revolved_volume_matches_analytic() {
        let rivet = sample();
        let solids = rivet.revolved(Point3::origin(), Vector3::z()).unwrap();
        let vol = solids[0].volume();
        let expected = rivet.volume();
        assert!(
            (vol - expected).abs() < expected * 0.01,
            "expected ~{expected:e}, got {vol:e}"
        );
    }

    #[test]
    fn test_revolved_axis_choice_is_irrelevant() {
        let rivet = sample();
        let along_z = rivet.revolved(Point3::origin(), Vector3::z()).unwrap();
        let along_x = rivet.revolved(Point3::origin(), Vector3::x()).unwrap();
        assert!((along_z[0].volume() - along_x[0].volume()).abs() < 1e-12);
    }

    #[test]
    fn test_plot_group_shape() {
        let group = sample().plot(true).unwrap();
        assert_eq!(group.primitives.len(), 1);
        let primitive = &group.primitives[0];
        assert_eq!(primitive.outline.len(), 9);
        assert_relative_eq!(primitive.edge_style.line_width, 1.0);
        let hatching = primitive.surface_style.hatching.unwrap();
        assert_relative_eq!(hatching.spacing, HATCH_SPACING);
    }
}
