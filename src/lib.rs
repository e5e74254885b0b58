//! # stlscale
//!
//! A pure Rust implementation for parsing, uniformly rescaling and writing
//! STL (stereolithography) files.
//!
//! This library provides the decode/transform/encode core of an STL
//! rescaling tool: it detects the binary or ASCII encoding of a raw byte
//! buffer, parses the triangle data, computes axis-aligned bounding-box
//! dimensions, applies a uniform scale factor to every vertex, and
//! re-serializes to the original encoding with the binary layout preserved
//! byte-for-byte in structure (header, triangle count, per-record attribute
//! bytes).
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Content-based binary/ASCII detection
//! - Round-trip-safe decoding: triangle order, binary header and attribute
//!   bytes are preserved
//! - Pure, non-mutating scaling; the decoded mesh can be re-scaled at any
//!   number of factors without re-parsing
//!
//! ## Example
//!
//! ```no_run
//! use stlscale::Stl;
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("part.stl")?;
//! let stl = Stl::from_reader(file)?;
//!
//! let dims = stl.dimensions()?;
//! println!("{} x {} x {} mm", dims.width, dims.height, dims.depth);
//!
//! let doubled = stl.scaled(2.0)?;
//! doubled.write_to_file(stlscale::scaled_filename("part.stl", 2.0))?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod detect;
pub mod error;
pub mod filename;
pub mod mesh_ops;
pub mod model;
pub mod parser;
pub mod writer;

pub use detect::detect_encoding;
pub use error::{Error, Result};
pub use filename::scaled_filename;
pub use model::{Dimensions, Encoding, Mesh, Stl, Triangle, Vertex};
pub use parser::decode;
pub use writer::encode;

use std::io::Read;

impl Stl {
    /// Decode an STL file from a byte buffer
    ///
    /// Detects the encoding (binary or ASCII) and parses the triangle data.
    /// The buffer is only borrowed for the duration of the call.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stlscale::Stl;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let bytes = std::fs::read("part.stl")?;
    /// let stl = Stl::from_bytes(&bytes)?;
    /// println!("{} triangles", stl.mesh.triangle_count());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        parser::decode(data)
    }

    /// Decode an STL file from a reader
    ///
    /// Reads the full contents into memory first; STL decoding needs the
    /// complete buffer (binary detection reads the declared triangle count
    /// against the total length), so there is no streaming variant.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Compute the bounding-box dimensions of the decoded mesh
    ///
    /// Fails with [`Error::EmptyMesh`] if the mesh has no triangles.
    pub fn dimensions(&self) -> Result<Dimensions> {
        mesh_ops::dimensions(&self.mesh)
    }

    /// Produce a uniformly scaled copy
    ///
    /// The original is untouched, so callers can derive copies at several
    /// factors from one decode. The source encoding is carried over: scaling
    /// a binary file yields a binary file, and likewise for ASCII.
    ///
    /// Fails with [`Error::InvalidScaleFactor`] if `factor` is not a
    /// strictly positive finite number.
    pub fn scaled(&self, factor: f32) -> Result<Self> {
        Ok(Self {
            mesh: mesh_ops::scale(&self.mesh, factor)?,
            encoding: self.encoding,
        })
    }

    /// Serialize back to STL bytes in the source encoding
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        writer::encode(&self.mesh, self.encoding)
    }

    /// Serialize to a writer in the source encoding
    pub fn to_writer<W: std::io::Write>(&self, writer: &mut W) -> Result<()> {
        writer::write_stl(&self.mesh, self.encoding, writer)
    }

    /// Serialize to a file path in the source encoding
    ///
    /// This is a convenience method that creates the file and writes the
    /// encoded bytes to it.
    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let mut file = std::fs::File::create(path)?;
        self.to_writer(&mut file)
    }
}
