//! Error types for STL decoding, scaling and encoding
//!
//! All errors include error codes for categorization and enough context to
//! identify the offending input without re-running the operation.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xx**: I/O errors
//! - **E2xx**: Decode errors (format detection, binary layout, text grammar)
//! - **E3xx**: Geometry and encode errors
//!
//! ## Common Error Codes
//!
//! - `E101`: I/O error reading or writing a file
//! - `E201`: Input not recognizable as STL
//! - `E202`: Binary input truncated relative to its declared triangle count
//! - `E203`: ASCII grammar or numeric parse error
//! - `E301`: Invalid scale factor
//! - `E302`: Empty mesh where geometry was required
//! - `E303`: Triangle count too large for the binary encoding

use std::io;
use thiserror::Error;

/// Result type for STL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when decoding, scaling or encoding STL data
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading or writing a file
    ///
    /// **Error Code**: E101
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - Disk read/write error
    #[error("[E101] I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input buffer is not recognizable as STL
    ///
    /// **Error Code**: E201
    ///
    /// **Common Causes**:
    /// - Buffer too short to contain even a binary header
    /// - Text input that is not valid UTF-8
    /// - Text input missing the opening `solid` keyword
    #[error("[E201] Unsupported input: {0}")]
    UnsupportedInput(String),

    /// Binary input is shorter than its declared triangle count implies
    ///
    /// **Error Code**: E202
    ///
    /// **Common Causes**:
    /// - Interrupted download or copy
    /// - A text file misidentified as binary by its producer
    #[error(
        "[E202] Truncated binary STL: {declared} triangles require {expected} bytes, \
         buffer has {actual}"
    )]
    Truncated {
        /// Triangle count from the file header
        declared: u32,
        /// Bytes the declared count requires (header included)
        expected: usize,
        /// Bytes actually present
        actual: usize,
    },

    /// ASCII grammar or numeric parse error
    ///
    /// **Error Code**: E203
    ///
    /// **Common Causes**:
    /// - Keywords out of order (e.g. `vertex` outside `outer loop`)
    /// - A facet with more or fewer than three vertices
    /// - Non-numeric coordinate tokens
    #[error("[E203] Parse error: {0}")]
    Parse(String),

    /// Scale factor is not a strictly positive finite number
    ///
    /// **Error Code**: E301
    ///
    /// Scale factors are user-supplied, so this is validated at the public
    /// API boundary rather than treated as an internal invariant.
    #[error("[E301] Invalid scale factor {0}: must be finite and greater than zero")]
    InvalidScaleFactor(f32),

    /// Mesh has no triangles where geometry was required
    ///
    /// **Error Code**: E302
    ///
    /// Returned by bounding-box queries; an empty mesh has no extents.
    #[error("[E302] Mesh contains no triangles")]
    EmptyMesh,

    /// Triangle count exceeds what the binary encoding can represent
    ///
    /// **Error Code**: E303
    ///
    /// The binary count field is a u32; this cannot arise for meshes produced
    /// by this crate's own decoder.
    #[error("[E303] Mesh has {0} triangles, more than the binary encoding can hold")]
    TooManyTriangles(usize),
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::Parse(format!("Failed to parse floating-point number: {}", err))
    }
}

impl Error {
    /// Create a Truncated error from the declared count and actual length
    ///
    /// Saturating arithmetic: on 32-bit targets an absurd declared count can
    /// overflow `usize`, and this runs on the error path for exactly those
    /// inputs.
    pub(crate) fn truncated(declared: u32, actual: usize) -> Self {
        let body = (declared as usize).saturating_mul(crate::parser::TRIANGLE_RECORD_LEN);
        Error::Truncated {
            declared,
            expected: (crate::parser::HEADER_LEN + crate::parser::COUNT_LEN)
                .saturating_add(body),
            actual,
        }
    }

    /// Create a Parse error with keyword context
    ///
    /// # Arguments
    /// * `expected` - What the grammar required at this point
    /// * `found` - What was actually found (token text, or "end of input")
    pub(crate) fn parse_expected(expected: &str, found: &str) -> Self {
        Error::Parse(format!("Expected {}, found '{}'", expected, found))
    }

    /// Create a Parse error for a coordinate that failed to parse
    ///
    /// # Arguments
    /// * `field` - The field being parsed (e.g. "vertex x coordinate")
    /// * `value` - The token that failed to parse
    pub(crate) fn parse_number(field: &str, value: &str) -> Self {
        Error::Parse(format!(
            "Failed to parse '{}': expected a number, got '{}'",
            field, value
        ))
    }
}
