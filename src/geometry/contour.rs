// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Rivetgen Developers

//! Closed planar polyline contours

use super::TOLERANCE;
use crate::error::Error;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Straight edge between two contour vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Segment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    pub fn midpoint(&self) -> Point2<f64> {
        Point2::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}

/// Closed planar contour backed by an ordered vertex sequence.
///
/// The loop is implicit: every vertex connects to the next, and the last
/// vertex connects back to the first. Duplicate vertices are kept as given,
/// so a sequence whose last point coincides with its first yields a
/// zero-length closing edge rather than a shorter loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    points: Vec<Point2<f64>>,
}

impl Contour {
    /// Build a closed contour from an ordered point sequence.
    pub fn closed(points: Vec<Point2<f64>>) -> Result<Self, Error> {
        if points.len() < 3 {
            return Err(Error::DegenerateContour(points.len()));
        }
        Ok(Self { points })
    }

    /// Vertices in loop order.
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// One edge per vertex: consecutive pairs plus the closing edge.
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.points.len();
        (0..n)
            .map(|i| Segment::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    /// Number of edges (equals the number of vertices).
    pub fn edge_count(&self) -> usize {
        self.points.len()
    }

    /// Shoelace area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = &self.points[i];
            let b = &self.points[(i + 1) % n];
            twice_area += a.x * b.y - b.x * a.y;
        }
        twice_area / 2.0
    }

    /// Axis-aligned bounds as (min, max) corners.
    pub fn bounds(&self) -> (Point2<f64>, Point2<f64>) {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Point-in-polygon test using ray casting.
    pub fn contains(&self, p: &Point2<f64>) -> bool {
        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = &self.points[i];
            let vj = &self.points[j];
            if ((vi.y > p.y) != (vj.y > p.y))
                && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Cut the contour by an infinite line through `origin` along `direction`.
    ///
    /// Returns the closed pieces on each side of the line, the piece on the
    /// positive side (left of `direction`) first. Each piece is closed with
    /// vertices on the cut line. Pieces that collapse below three vertices
    /// are dropped.
    pub fn cut_by_line(&self, origin: Point2<f64>, direction: Vector2<f64>) -> Vec<Contour> {
        let mut halves = Vec::with_capacity(2);
        for keep_positive in [true, false] {
            let clipped = clip_half_plane(&self.points, &origin, &direction, keep_positive);
            if clipped.len() >= 3 {
                halves.push(Contour { points: clipped });
            }
        }
        halves
    }
}

/// Signed distance proxy: positive on the left of `direction`.
fn line_side(origin: &Point2<f64>, direction: &Vector2<f64>, p: &Point2<f64>) -> f64 {
    direction.x * (p.y - origin.y) - direction.y * (p.x - origin.x)
}

/// Sutherland-Hodgman clip of a closed polygon against one half-plane.
fn clip_half_plane(
    points: &[Point2<f64>],
    origin: &Point2<f64>,
    direction: &Vector2<f64>,
    keep_positive: bool,
) -> Vec<Point2<f64>> {
    let sign = if keep_positive { 1.0 } else { -1.0 };
    let inside = |p: &Point2<f64>| sign * line_side(origin, direction, p) >= -TOLERANCE;

    let n = points.len();
    let mut out: Vec<Point2<f64>> = Vec::with_capacity(n + 2);

    for i in 0..n {
        let cur = &points[i];
        let next = &points[(i + 1) % n];
        let cur_in = inside(cur);
        let next_in = inside(next);

        if cur_in {
            out.push(*cur);
        }
        if cur_in != next_in {
            let s_cur = line_side(origin, direction, cur);
            let s_next = line_side(origin, direction, next);
            let t = s_cur / (s_cur - s_next);
            out.push(cur + t * (next - cur));
        }
    }

    dedup_loop(out)
}

/// Remove consecutive near-duplicate vertices, including across the seam.
fn dedup_loop(points: Vec<Point2<f64>>) -> Vec<Point2<f64>> {
    let mut out: Vec<Point2<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().map_or(true, |last| (p - last).norm() > TOLERANCE) {
            out.push(p);
        }
    }
    while out.len() > 1 && (out[out.len() - 1] - out[0]).norm() <= TOLERANCE {
        out.pop();
    }
    out
}
