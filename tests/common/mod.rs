//! Shared fixture builders for integration tests
//!
//! Binary fixtures are assembled by hand with `to_le_bytes` rather than via
//! the crate's own encoder, so decoder tests do not depend on encoder
//! correctness.

#![allow(dead_code)] // not every test binary uses every fixture

use stlscale::{Triangle, Vertex};

/// Assemble a binary STL buffer from raw parts
pub fn build_binary(header: [u8; 80], triangles: &[Triangle]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&header);
    data.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        push_vertex(&mut data, tri.normal);
        for v in tri.vertices {
            push_vertex(&mut data, v);
        }
        data.extend_from_slice(&tri.attribute.to_le_bytes());
    }
    data
}

fn push_vertex(data: &mut Vec<u8>, v: Vertex) {
    data.extend_from_slice(&v.x.to_le_bytes());
    data.extend_from_slice(&v.y.to_le_bytes());
    data.extend_from_slice(&v.z.to_le_bytes());
}

/// A right triangle in the XY plane with +Z normal
pub fn unit_right_triangle() -> Triangle {
    Triangle::new(
        Vertex::new(0.0, 0.0, 1.0),
        Vertex::new(0.0, 0.0, 0.0),
        Vertex::new(10.0, 0.0, 0.0),
        Vertex::new(0.0, 10.0, 0.0),
    )
}

/// A small well-formed ASCII fixture with one facet
pub fn ascii_fixture() -> &'static str {
    "solid t\n\
     facet normal 0 0 1\n\
     outer loop\n\
     vertex 1.000000 2.000000 3.000000\n\
     vertex 0 0 0\n\
     vertex 1 1 1\n\
     endloop\n\
     endfacet\n\
     endsolid t\n"
}
