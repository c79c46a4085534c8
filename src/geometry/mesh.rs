// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Rivetgen Developers

//! Triangle mesh representation and analytics

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Vertex with position and normal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f64>,
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }
}

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }
}

/// Triangular mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Enclosed volume from the sum of signed tetrahedron volumes.
    ///
    /// Only meaningful for closed meshes.
    pub fn volume(&self) -> f64 {
        let mut volume = 0.0;
        for triangle in &self.triangles {
            let v0 = &self.vertices[triangle.indices[0]].position;
            let v1 = &self.vertices[triangle.indices[1]].position;
            let v2 = &self.vertices[triangle.indices[2]].position;
            volume += v0.coords.dot(&v1.coords.cross(&v2.coords)) / 6.0;
        }
        volume.abs()
    }

    /// Check if the mesh is closed (every edge shared by exactly 2 triangles)
    pub fn is_closed(&self) -> bool {
        !self.triangles.is_empty() && self.edge_counts().values().all(|&count| count == 2)
    }

    /// Check if the mesh is manifold (every edge shared by at most 2 triangles)
    pub fn is_manifold(&self) -> bool {
        self.edge_counts().values().all(|&count| count <= 2)
    }

    fn edge_counts(&self) -> HashMap<(usize, usize), u32> {
        let mut counts: HashMap<(usize, usize), u32> = HashMap::new();
        for triangle in &self.triangles {
            let indices = &triangle.indices;
            for i in 0..3 {
                let v0 = indices[i];
                let v1 = indices[(i + 1) % 3];
                // Smaller index first for consistent hashing
                let edge = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                *counts.entry(edge).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Recompute vertex normals by area-weighted averaging of face normals
    pub fn recompute_normals(&mut self) {
        if self.vertices.is_empty() || self.triangles.is_empty() {
            return;
        }

        let mut normal_sums: Vec<Vector3<f64>> = vec![Vector3::zeros(); self.vertices.len()];

        for triangle in &self.triangles {
            let v0 = &self.vertices[triangle.indices[0]];
            let v1 = &self.vertices[triangle.indices[1]];
            let v2 = &self.vertices[triangle.indices[2]];

            let edge1 = v1.position - v0.position;
            let edge2 = v2.position - v0.position;
            let face_normal = edge1.cross(&edge2);

            if face_normal.norm() > 1e-10 {
                for &idx in &triangle.indices {
                    normal_sums[idx] += face_normal;
                }
            }
        }

        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            if normal_sums[i].norm() > 1e-10 {
                vertex.normal = normal_sums[i].normalize();
            } else {
                vertex.normal = Vector3::new(0.0, 0.0, 1.0);
            }
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit right tetrahedron with outward winding.
    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        let n = Vector3::z();
        let v0 = mesh.add_vertex(Vertex::new(Point3::origin(), n));
        let v1 = mesh.add_vertex(Vertex::new(Point3::new(1.0, 0.0, 0.0), n));
        let v2 = mesh.add_vertex(Vertex::new(Point3::new(0.0, 1.0, 0.0), n));
        let v3 = mesh.add_vertex(Vertex::new(Point3::new(0.0, 0.0, 1.0), n));
        mesh.add_triangle(Triangle::new([v0, v2, v1]));
        mesh.add_triangle(Triangle::new([v0, v1, v3]));
        mesh.add_triangle(Triangle::new([v0, v3, v2]));
        mesh.add_triangle(Triangle::new([v1, v2, v3]));
        mesh
    }

    #[test]
    fn test_tetrahedron_volume() {
        assert_relative_eq!(tetrahedron().volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tetrahedron_is_closed_and_manifold() {
        let mesh = tetrahedron();
        assert!(mesh.is_closed());
        assert!(mesh.is_manifold());
    }

    #[test]
    fn test_open_mesh_detected() {
        let mut mesh = tetrahedron();
        mesh.triangles.pop();
        assert!(!mesh.is_closed());
        assert!(mesh.is_manifold());
    }

    #[test]
    fn test_recompute_normals_unit_length() {
        let mut mesh = tetrahedron();
        mesh.recompute_normals();
        for v in &mesh.vertices {
            assert_relative_eq!(v.normal.norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert!(!mesh.is_closed());
        assert!(mesh.is_manifold());
    }
}
