// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Rivetgen Developers

//! Revolve operation: create a solid by rotating a profile around an axis.

use super::{Contour, Mesh, Triangle, Vertex, TOLERANCE};
use crate::error::Error;
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Default angular resolution for revolved solids.
pub const DEFAULT_SEGMENTS: u32 = 64;

/// Revolve a closed planar profile around an axis to create a triangle mesh.
///
/// The profile lives in the plane spanned by an in-plane normal and the axis:
/// a vertex `(x, y)` sits at radius `x` from the axis and height `y` along
/// it. The in-plane normal is chosen arbitrarily among the unit vectors
/// orthogonal to `axis`; any choice produces the same solid because the
/// sweep covers the full set of in-plane directions.
///
/// # Errors
///
/// - `ZeroAxis` if the axis direction is zero
/// - `InvalidAngle` if `angle` is not in (0, 2π]
/// - `AxisCrossing` if any profile vertex has a negative radius
///
/// A full 2π revolution of a closed profile yields a closed manifold mesh;
/// partial revolutions yield the open swept surface without end caps.
pub fn revolve(
    profile: &Contour,
    center: Point3<f64>,
    axis: Vector3<f64>,
    angle: f64,
    segments: u32,
) -> Result<Mesh, Error> {
    if axis.norm() < TOLERANCE {
        return Err(Error::ZeroAxis);
    }
    revolve_with_normal(profile, center, axis, unit_normal(&axis), angle, segments)
}

/// Revolve with an explicit in-plane normal.
///
/// `normal` fixes which in-plane direction the profile's x coordinates are
/// measured along before the sweep. It must not be parallel to `axis`; its
/// component along `axis` is discarded.
pub fn revolve_with_normal(
    profile: &Contour,
    center: Point3<f64>,
    axis: Vector3<f64>,
    normal: Vector3<f64>,
    angle: f64,
    segments: u32,
) -> Result<Mesh, Error> {
    if axis.norm() < TOLERANCE {
        return Err(Error::ZeroAxis);
    }
    if angle <= 0.0 || angle > 2.0 * PI + 1e-9 {
        return Err(Error::InvalidAngle(angle));
    }

    let a = axis.normalize();
    let in_plane = normal - a * normal.dot(&a);
    if in_plane.norm() < TOLERANCE {
        return Err(Error::ParallelNormal);
    }
    let u = in_plane.normalize();
    let v = a.cross(&u);

    let points = profile.points();
    for p in points {
        if p.x < -TOLERANCE {
            return Err(Error::AxisCrossing);
        }
    }

    let segments = segments.max(3) as usize;
    let is_full = (angle - 2.0 * PI).abs() < 1e-9;
    // Full revolutions close the seam by index wraparound; partial ones get
    // an extra ring of vertices at the final angle.
    let columns = if is_full { segments } else { segments + 1 };

    let mut mesh = Mesh::with_capacity(points.len() * columns, points.len() * segments * 2);

    // One vertex ring per profile point; on-axis points collapse to a single
    // vertex so the mesh stays manifold at the poles.
    let mut rings: Vec<Vec<usize>> = Vec::with_capacity(points.len());
    for p in points {
        if p.x.abs() < TOLERANCE {
            let position = center + a * p.y;
            rings.push(vec![mesh.add_vertex(Vertex::new(position, a))]);
        } else {
            let mut ring = Vec::with_capacity(columns);
            for j in 0..columns {
                let theta = angle * j as f64 / segments as f64;
                let radial = u * theta.cos() + v * theta.sin();
                let position = center + radial * p.x + a * p.y;
                ring.push(mesh.add_vertex(Vertex::new(position, radial)));
            }
            rings.push(ring);
        }
    }

    let n = points.len();
    for i in 0..n {
        let k = (i + 1) % n;
        // Zero-length profile edges (duplicated vertices) sweep nothing.
        if (points[k] - points[i]).norm() < TOLERANCE {
            continue;
        }
        let (ring_i, ring_k) = (&rings[i], &rings[k]);
        for j in 0..segments {
            let jn = if is_full { (j + 1) % segments } else { j + 1 };
            match (ring_i.len(), ring_k.len()) {
                // Edge along the axis: degenerate, no surface.
                (1, 1) => {}
                // Fan from an on-axis apex toward a ring.
                (1, _) => {
                    mesh.add_triangle(Triangle::new([ring_i[0], ring_k[j], ring_k[jn]]));
                }
                // Fan from a ring toward an on-axis apex.
                (_, 1) => {
                    mesh.add_triangle(Triangle::new([ring_k[0], ring_i[jn], ring_i[j]]));
                }
                // Quad strip between two rings.
                _ => {
                    mesh.add_triangle(Triangle::new([ring_i[j], ring_k[j], ring_k[jn]]));
                    mesh.add_triangle(Triangle::new([ring_i[j], ring_k[jn], ring_i[jn]]));
                }
            }
        }
    }

    mesh.recompute_normals();
    Ok(mesh)
}

/// An arbitrary unit vector orthogonal to `axis`.
fn unit_normal(axis: &Vector3<f64>) -> Vector3<f64> {
    let pick = if axis.x.abs() < 0.9 * axis.norm() {
        Vector3::x()
    } else {
        Vector3::y()
    };
    axis.cross(&pick).normalize()
}
