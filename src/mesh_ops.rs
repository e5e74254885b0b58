//! Geometric operations on decoded meshes
//!
//! This module provides the operations the rescaling pipeline needs:
//! - Axis-aligned bounding box and dimensions
//! - Uniform scaling
//! - Signed volume computation
//!
//! All operations are pure: they read a borrowed mesh and never mutate it,
//! so callers can keep the decoded mesh around and derive scaled copies at
//! different factors without re-parsing.

use crate::error::{Error, Result};
use crate::model::{Dimensions, Mesh, Triangle, Vertex};

/// Compute the axis-aligned bounding box of a mesh
///
/// Folds min/max over every corner vertex of every triangle. Duplicate
/// vertices shared between triangles need no deduplication (min/max is
/// invariant to duplicates), and facet normals are direction vectors, so
/// they do not participate.
///
/// # Returns
/// The (min, max) corners of the box, or [`Error::EmptyMesh`] for a mesh
/// with zero triangles — an empty mesh has no extents.
pub fn aabb(mesh: &Mesh) -> Result<(Vertex, Vertex)> {
    if mesh.triangles.is_empty() {
        return Err(Error::EmptyMesh);
    }

    let mut min = Vertex::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
    let mut max = Vertex::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);

    for triangle in &mesh.triangles {
        for vertex in triangle.vertices {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            min.z = min.z.min(vertex.z);
            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
            max.z = max.z.max(vertex.z);
        }
    }

    Ok((min, max))
}

/// Compute the bounding-box extents of a mesh
///
/// Width, height and depth are the extents along X, Y and Z respectively.
/// A flat mesh legitimately reports a zero extent on the flat axis. Fails
/// with [`Error::EmptyMesh`] for a mesh with zero triangles.
pub fn dimensions(mesh: &Mesh) -> Result<Dimensions> {
    let (min, max) = aabb(mesh)?;
    Ok(Dimensions {
        width: max.x - min.x,
        height: max.y - min.y,
        depth: max.z - min.z,
    })
}

/// Produce a uniformly scaled copy of a mesh
///
/// Every corner coordinate is multiplied by `factor`. Facet normals are
/// direction vectors and a uniform positive scale preserves their direction,
/// so they are copied through untouched, as are the per-triangle attribute
/// bytes, the solid name and the preserved binary header.
///
/// The input mesh is not mutated; callers may scale the same mesh repeatedly
/// with different factors.
///
/// # Errors
/// [`Error::InvalidScaleFactor`] if `factor` is not a strictly positive
/// finite number. The factor is user-supplied, so this is checked here even
/// though the rest of the pipeline treats mesh consistency as an invariant.
pub fn scale(mesh: &Mesh, factor: f32) -> Result<Mesh> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidScaleFactor(factor));
    }

    let triangles = mesh
        .triangles
        .iter()
        .map(|triangle| Triangle {
            normal: triangle.normal,
            vertices: triangle.vertices.map(|v| Vertex {
                x: v.x * factor,
                y: v.y * factor,
                z: v.z * factor,
            }),
            attribute: triangle.attribute,
        })
        .collect();

    Ok(Mesh {
        triangles,
        name: mesh.name.clone(),
        header: mesh.header,
    })
}

/// Compute the signed volume of a mesh using the divergence theorem
///
/// For a watertight mesh with outward-facing winding the result is positive;
/// a negative result indicates inverted triangles. Open meshes give a value
/// without physical meaning. An empty mesh has zero volume.
///
/// Accumulates in f64: f32 coordinates times f32 coordinates overflow
/// precision quickly on real print files.
pub fn signed_volume(mesh: &Mesh) -> f64 {
    let mut volume = 0.0_f64;
    for triangle in &mesh.triangles {
        let [v1, v2, v3] = triangle.vertices.map(|v| (v.x as f64, v.y as f64, v.z as f64));
        volume += v1.0 * (v2.1 * v3.2 - v2.2 * v3.1)
            + v2.0 * (v3.1 * v1.2 - v3.2 * v1.1)
            + v3.0 * (v1.1 * v2.2 - v1.2 * v2.1);
    }
    volume / 6.0
}
