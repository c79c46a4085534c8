// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Rivetgen Developers

//! Renderable 2D primitives: hatched contours with stroke styles.
//!
//! The output types are plain serializable data; rendering itself is left
//! to whatever frontend consumes the JSON.

use crate::geometry::Contour;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

const TOLERANCE: f64 = 1e-9;

/// Stroke style for contour edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    /// Stroke width in drawing units.
    pub line_width: f64,
}

impl EdgeStyle {
    pub fn new(line_width: f64) -> Self {
        Self { line_width }
    }
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self { line_width: 1.0 }
    }
}

/// Parallel-line hatching pattern for solid cross-sections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HatchPattern {
    /// Distance between hatch lines.
    pub spacing: f64,
    /// Direction in radians (0 = horizontal, π/4 = 45°).
    pub angle: f64,
}

impl HatchPattern {
    pub fn new(spacing: f64, angle: f64) -> Self {
        Self { spacing, angle }
    }

    /// 45-degree hatch at the given spacing, the usual drafting convention.
    pub fn with_spacing(spacing: f64) -> Self {
        Self {
            spacing,
            angle: std::f64::consts::FRAC_PI_4,
        }
    }
}

/// Fill style: hatched when a pattern is present, plain otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceStyle {
    pub hatching: Option<HatchPattern>,
}

impl SurfaceStyle {
    pub fn hatched(pattern: HatchPattern) -> Self {
        Self {
            hatching: Some(pattern),
        }
    }
}

/// A closed contour rendered as an outline with optional hatch fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HatchedContour {
    /// Outline vertices in loop order.
    pub outline: Vec<Point2<f64>>,
    pub edge_style: EdgeStyle,
    pub surface_style: SurfaceStyle,
    /// Precomputed hatch segments, clipped to the outline.
    pub hatch_lines: Vec<(Point2<f64>, Point2<f64>)>,
}

impl HatchedContour {
    /// Build the renderable for a contour, generating hatch lines up front.
    pub fn new(contour: &Contour, edge_style: EdgeStyle, surface_style: SurfaceStyle) -> Self {
        let hatch_lines = match surface_style.hatching {
            Some(pattern) => hatch_lines(contour, &pattern),
            None => Vec::new(),
        };
        Self {
            outline: contour.points().to_vec(),
            edge_style,
            surface_style,
            hatch_lines,
        }
    }
}

/// Top-level renderable group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimitiveGroup {
    pub primitives: Vec<HatchedContour>,
}

impl PrimitiveGroup {
    pub fn new(primitives: Vec<HatchedContour>) -> Self {
        Self { primitives }
    }
}

/// Generate hatch lines for a contour.
///
/// Creates parallel lines at the pattern's angle, stepped by its spacing
/// along the perpendicular, and clips each to the contour polygon.
pub fn hatch_lines(contour: &Contour, pattern: &HatchPattern) -> Vec<(Point2<f64>, Point2<f64>)> {
    if contour.points().len() < 3 || pattern.spacing <= 0.0 {
        return Vec::new();
    }

    let (min, max) = contour.bounds();
    let margin = pattern.spacing;

    // Direction along hatch lines and perpendicular stepping direction.
    let (sin_a, cos_a) = pattern.angle.sin_cos();
    let dir = Point2::new(cos_a, sin_a);
    let perp = Point2::new(-sin_a, cos_a);

    let corners = [
        Point2::new(min.x - margin, min.y - margin),
        Point2::new(max.x + margin, min.y - margin),
        Point2::new(max.x + margin, max.y + margin),
        Point2::new(min.x - margin, max.y + margin),
    ];

    // Offset range along the perpendicular, and extent along the line
    // direction, both taken from the expanded bounding box corners.
    let mut min_offset = f64::INFINITY;
    let mut max_offset = f64::NEG_INFINITY;
    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    for c in &corners {
        let offset = c.x * perp.x + c.y * perp.y;
        min_offset = min_offset.min(offset);
        max_offset = max_offset.max(offset);
        let t = c.x * dir.x + c.y * dir.y;
        t_min = t_min.min(t);
        t_max = t_max.max(t);
    }

    let mut lines = Vec::new();
    let mut offset = min_offset;
    while offset <= max_offset {
        let line_start = Point2::new(
            perp.x * offset + t_min * dir.x,
            perp.y * offset + t_min * dir.y,
        );
        let line_end = Point2::new(
            perp.x * offset + t_max * dir.x,
            perp.y * offset + t_max * dir.y,
        );
        lines.extend(clip_line_to_contour(&line_start, &line_end, contour));
        offset += pattern.spacing;
    }

    lines
}

/// Clip a line segment to a contour, returning the inside pieces.
fn clip_line_to_contour(
    line_start: &Point2<f64>,
    line_end: &Point2<f64>,
    contour: &Contour,
) -> Vec<(Point2<f64>, Point2<f64>)> {
    let dx = line_end.x - line_start.x;
    let dy = line_end.y - line_start.y;
    if (dx * dx + dy * dy).sqrt() < TOLERANCE {
        return Vec::new();
    }

    // Intersection parameters with every contour edge.
    let mut intersections: Vec<f64> = Vec::new();
    for edge in contour.edges() {
        if let Some(t) = line_edge_intersection(line_start, line_end, &edge.start, &edge.end) {
            intersections.push(t);
        }
    }

    intersections.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    intersections.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);

    // Between consecutive intersections the line is entirely inside or
    // entirely outside; keep the spans whose midpoint is inside.
    let mut segments = Vec::new();
    for pair in intersections.windows(2) {
        let (t0, t1) = (pair[0], pair[1]);
        let mid = Point2::new(
            line_start.x + (t0 + t1) / 2.0 * dx,
            line_start.y + (t0 + t1) / 2.0 * dy,
        );
        if contour.contains(&mid) {
            segments.push((
                Point2::new(line_start.x + t0 * dx, line_start.y + t0 * dy),
                Point2::new(line_start.x + t1 * dx, line_start.y + t1 * dy),
            ));
        }
    }

    segments
}

/// Intersection of an infinite-ish line with one polygon edge, as the t
/// parameter along the line, if the hit lies within the edge.
fn line_edge_intersection(
    p0: &Point2<f64>,
    p1: &Point2<f64>,
    e0: &Point2<f64>,
    e1: &Point2<f64>,
) -> Option<f64> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let ex = e1.x - e0.x;
    let ey = e1.y - e0.y;

    let denom = dx * ey - dy * ex;
    if denom.abs() < TOLERANCE {
        return None; // Parallel
    }

    let t = ((e0.x - p0.x) * ey - (e0.y - p0.y) * ex) / denom;
    let s = ((e0.x - p0.x) * dy - (e0.y - p0.y) * dx) / denom;

    if (0.0..=1.0).contains(&s) {
        Some(t)
    } else {
        None
    }
}
