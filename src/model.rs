//! Core STL types and structures

/// A single 3D point or direction with 32-bit float components
///
/// STL stores all coordinates as IEEE-754 single-precision values
/// (little-endian in the binary encoding), so the in-memory representation
/// uses `f32` as well to avoid any precision mismatch on re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The zero vector
    ///
    /// Used as the facet normal when an ASCII file carries no parseable
    /// `facet normal` line.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// A single STL facet: one normal plus three corner vertices
///
/// The binary encoding additionally carries a 2-byte attribute field per
/// facet. Its meaning is not standardized (commonly zero, sometimes abused
/// for color data), so it is preserved verbatim across decode and encode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    /// Facet normal as stored in the file
    pub normal: Vertex,
    /// The three corner vertices, in file order
    pub vertices: [Vertex; 3],
    /// Attribute byte count field from the binary encoding (passthrough)
    pub attribute: u16,
}

impl Triangle {
    /// Create a new triangle with a zero attribute field
    pub fn new(normal: Vertex, v1: Vertex, v2: Vertex, v3: Vertex) -> Self {
        Self {
            normal,
            vertices: [v1, v2, v3],
            attribute: 0,
        }
    }

    /// Compute the unit normal from the corner vertices (right-hand rule)
    ///
    /// This does not touch the stored `normal`; it is for callers that want a
    /// real normal when the file carried none (ASCII files may omit it, in
    /// which case the decoder stores a zero vector). Degenerate triangles
    /// fall back to +Z.
    pub fn computed_normal(&self) -> Vertex {
        let [v1, v2, v3] = self.vertices;
        let edge1 = (v2.x - v1.x, v2.y - v1.y, v2.z - v1.z);
        let edge2 = (v3.x - v1.x, v3.y - v1.y, v3.z - v1.z);
        let normal = (
            edge1.1 * edge2.2 - edge1.2 * edge2.1,
            edge1.2 * edge2.0 - edge1.0 * edge2.2,
            edge1.0 * edge2.1 - edge1.1 * edge2.0,
        );
        let length = (normal.0 * normal.0 + normal.1 * normal.1 + normal.2 * normal.2).sqrt();
        if length > 0.0 {
            Vertex::new(normal.0 / length, normal.1 / length, normal.2 / length)
        } else {
            Vertex::new(0.0, 0.0, 1.0)
        }
    }
}

/// An ordered triangle soup decoded from an STL file
///
/// Triangle order is significant: it is preserved exactly across decode,
/// scale and encode so that output files stay deterministic relative to
/// their input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// List of triangles, in file order
    pub triangles: Vec<Triangle>,
    /// Solid name from the `solid ...` line of an ASCII file
    pub name: Option<String>,
    /// The original 80-byte header of a binary file
    ///
    /// Preserved so that re-encoding to binary copies the header through
    /// unchanged. `None` for meshes decoded from ASCII or built in memory;
    /// the encoder substitutes a fixed placeholder in that case.
    pub header: Option<[u8; 80]>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
            name: None,
            header: None,
        }
    }

    /// Create a new mesh with pre-allocated triangle capacity
    ///
    /// Useful when the triangle count is known in advance (the binary
    /// decoder knows it from the file header), as it avoids reallocations.
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangles),
            name: None,
            header: None,
        }
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh contains no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// STL on-disk encoding variant
///
/// Determined once per input buffer at decode time and carried through to
/// encode time, so a scaled copy of a binary file is itself binary and a
/// scaled copy of an ASCII file is ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Fixed-layout little-endian binary encoding (80-byte header, u32
    /// triangle count, 50-byte records)
    Binary,
    /// Human-readable keyword-delimited text encoding
    Ascii,
}

impl Encoding {
    /// Get a human-readable name for this encoding
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Binary => "binary",
            Encoding::Ascii => "ascii",
        }
    }
}

/// Axis-aligned bounding-box extents of a mesh
///
/// Derived from the mesh vertices on demand and never stored as ground
/// truth; recompute after any operation that moves vertices.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    /// Extent along the X axis
    pub width: f32,
    /// Extent along the Y axis
    pub height: f32,
    /// Extent along the Z axis
    pub depth: f32,
}

/// A decoded STL file: the mesh together with its source encoding
#[derive(Debug, Clone, PartialEq)]
pub struct Stl {
    /// The decoded geometry
    pub mesh: Mesh,
    /// The encoding the input used, reused when re-encoding
    pub encoding: Encoding,
}
