//! STL encoding
//!
//! This module serializes a [`Mesh`] back into STL bytes, in either encoding.
//! Binary output reproduces the wire layout exactly: the original 80-byte
//! header (or a placeholder when the mesh was not decoded from binary), a
//! little-endian u32 triangle count, and one 50-byte record per triangle with
//! the attribute field passed through unchanged. ASCII output regenerates the
//! keyword wrapper with fixed 6-decimal coordinate formatting.
//!
//! Normals are emitted exactly as stored on the mesh. Scaling never rewrites
//! them: a uniform positive scale preserves surface normal direction.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::{Encoding, Mesh, Vertex};
use crate::parser::{COUNT_LEN, HEADER_LEN, TRIANGLE_RECORD_LEN};

/// Header written for meshes that carry no original binary header
const PLACEHOLDER_HEADER: &[u8] = b"Exported by stlscale";

/// Solid name written for meshes that carry no original name
const DEFAULT_SOLID_NAME: &str = "stlscale";

/// Encode a mesh into STL bytes in the given encoding
pub fn encode(mesh: &Mesh, encoding: Encoding) -> Result<Vec<u8>> {
    match encoding {
        Encoding::Binary => encode_binary(mesh),
        Encoding::Ascii => encode_ascii(mesh),
    }
}

/// Encode a mesh into binary STL bytes
///
/// Fails with [`Error::TooManyTriangles`] if the triangle count does not fit
/// the u32 count field; meshes produced by this crate's decoder cannot hit
/// this.
pub fn encode_binary(mesh: &Mesh) -> Result<Vec<u8>> {
    let count = u32::try_from(mesh.triangles.len())
        .map_err(|_| Error::TooManyTriangles(mesh.triangles.len()))?;

    let mut out =
        Vec::with_capacity(HEADER_LEN + COUNT_LEN + mesh.triangles.len() * TRIANGLE_RECORD_LEN);

    match mesh.header {
        Some(header) => out.extend_from_slice(&header),
        None => {
            let mut header = [b' '; HEADER_LEN];
            header[..PLACEHOLDER_HEADER.len()].copy_from_slice(PLACEHOLDER_HEADER);
            out.extend_from_slice(&header);
        }
    }

    out.extend_from_slice(&count.to_le_bytes());

    for triangle in &mesh.triangles {
        push_vertex_le(&mut out, triangle.normal);
        for vertex in triangle.vertices {
            push_vertex_le(&mut out, vertex);
        }
        out.extend_from_slice(&triangle.attribute.to_le_bytes());
    }

    Ok(out)
}

/// Encode a mesh into ASCII STL bytes
///
/// Coordinates (normals included) are formatted with fixed 6 decimal places.
/// The solid name comes from [`Mesh::name`], falling back to a default so the
/// output is always syntactically valid.
pub fn encode_ascii(mesh: &Mesh) -> Result<Vec<u8>> {
    let name = mesh.name.as_deref().unwrap_or(DEFAULT_SOLID_NAME);

    // Rough per-facet size to avoid repeated reallocation on large meshes.
    let mut text = String::with_capacity(64 + mesh.triangles.len() * 200);
    text.push_str(&format!("solid {}\n", name));

    for triangle in &mesh.triangles {
        let n = triangle.normal;
        text.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        text.push_str("    outer loop\n");
        for v in triangle.vertices {
            text.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", v.x, v.y, v.z));
        }
        text.push_str("    endloop\n");
        text.push_str("  endfacet\n");
    }

    text.push_str(&format!("endsolid {}\n", name));

    Ok(text.into_bytes())
}

/// Encode a mesh and write the bytes to a writer
pub fn write_stl<W: Write>(mesh: &Mesh, encoding: Encoding, writer: &mut W) -> Result<()> {
    let bytes = encode(mesh, encoding)?;
    writer.write_all(&bytes)?;
    Ok(())
}

fn push_vertex_le(out: &mut Vec<u8>, vertex: Vertex) {
    out.extend_from_slice(&vertex.x.to_le_bytes());
    out.extend_from_slice(&vertex.y.to_le_bytes());
    out.extend_from_slice(&vertex.z.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Triangle;

    fn one_triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.triangles.push(Triangle::new(
            Vertex::new(0.0, 0.0, 1.0),
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(10.0, 0.0, 0.0),
            Vertex::new(0.0, 10.0, 0.0),
        ));
        mesh
    }

    #[test]
    fn binary_output_has_exact_record_layout() {
        let bytes = encode_binary(&one_triangle_mesh()).unwrap();
        assert_eq!(bytes.len(), HEADER_LEN + COUNT_LEN + TRIANGLE_RECORD_LEN);
        assert_eq!(
            u32::from_le_bytes(bytes[80..84].try_into().unwrap()),
            1
        );
        // normal.z sits at offset 84 + 8
        assert_eq!(
            f32::from_le_bytes(bytes[92..96].try_into().unwrap()),
            1.0
        );
        // attribute is the final two bytes
        assert_eq!(&bytes[132..134], &[0, 0]);
    }

    #[test]
    fn binary_output_copies_preserved_header() {
        let mut mesh = one_triangle_mesh();
        let mut header = [0xA5u8; 80];
        header[0] = b'x';
        mesh.header = Some(header);
        let bytes = encode_binary(&mesh).unwrap();
        assert_eq!(&bytes[..80], &header);
    }

    #[test]
    fn binary_placeholder_header_is_space_padded() {
        let bytes = encode_binary(&one_triangle_mesh()).unwrap();
        assert!(bytes[..80].starts_with(PLACEHOLDER_HEADER));
        assert_eq!(bytes[79], b' ');
    }

    #[test]
    fn ascii_output_uses_six_decimal_places() {
        let bytes = encode_ascii(&one_triangle_mesh()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("solid stlscale\n"));
        assert!(text.contains("facet normal 0.000000 0.000000 1.000000"));
        assert!(text.contains("vertex 10.000000 0.000000 0.000000"));
        assert!(text.ends_with("endsolid stlscale\n"));
    }

    #[test]
    fn ascii_output_keeps_solid_name() {
        let mut mesh = one_triangle_mesh();
        mesh.name = Some("bracket v2".to_string());
        let text = String::from_utf8(encode_ascii(&mesh).unwrap()).unwrap();
        assert!(text.starts_with("solid bracket v2\n"));
        assert!(text.ends_with("endsolid bracket v2\n"));
    }

    #[test]
    fn empty_mesh_encodes_in_both_variants() {
        let mesh = Mesh::new();
        let binary = encode_binary(&mesh).unwrap();
        assert_eq!(binary.len(), HEADER_LEN + COUNT_LEN);
        let text = String::from_utf8(encode_ascii(&mesh).unwrap()).unwrap();
        assert_eq!(text, "solid stlscale\nendsolid stlscale\n");
    }
}
