//! STL decoding
//!
//! This module handles decoding of both STL encodings into a [`Mesh`]:
//! the fixed-layout little-endian binary variant and the keyword-delimited
//! ASCII variant. The ASCII decoder is a small tokenizer plus recursive
//! descent over the `solid / facet normal / outer loop / vertex / endloop /
//! endfacet / endsolid` grammar rather than a line-pattern scan, so malformed
//! structure is rejected instead of silently producing an empty mesh.
//!
//! A failed decode never yields a partial mesh.

use crate::detect::detect_encoding;
use crate::error::{Error, Result};
use crate::model::{Encoding, Mesh, Stl, Triangle, Vertex};

/// Length of the free-form binary header
pub const HEADER_LEN: usize = 80;
/// Length of the little-endian u32 triangle count that follows the header
pub const COUNT_LEN: usize = 4;
/// Length of one binary triangle record: 12 floats plus the attribute field
pub const TRIANGLE_RECORD_LEN: usize = 50;

/// Decode an STL buffer, detecting its encoding
///
/// Runs [`detect_encoding`] on the buffer and dispatches to the matching
/// decoder. The detected encoding is carried in the returned [`Stl`] so that
/// re-encoding reproduces the input variant.
pub fn decode(data: &[u8]) -> Result<Stl> {
    match detect_encoding(data) {
        Encoding::Binary => Ok(Stl {
            mesh: decode_binary(data)?,
            encoding: Encoding::Binary,
        }),
        Encoding::Ascii => Ok(Stl {
            mesh: decode_ascii(data)?,
            encoding: Encoding::Ascii,
        }),
    }
}

/// Decode a binary STL buffer
///
/// Layout: 80-byte free-form header, little-endian u32 triangle count, then
/// one 50-byte record per triangle (normal, three vertices, u16 attribute,
/// all little-endian). The header is preserved into [`Mesh::header`] and the
/// attribute field is kept verbatim per triangle.
///
/// Fails with [`Error::Truncated`] when the declared count implies more bytes
/// than the buffer holds. Trailing bytes beyond the declared count are
/// ignored, matching common reader behavior.
pub fn decode_binary(data: &[u8]) -> Result<Mesh> {
    if data.len() < HEADER_LEN + COUNT_LEN {
        return Err(Error::UnsupportedInput(format!(
            "Buffer of {} bytes is too short for a binary STL header",
            data.len()
        )));
    }

    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&data[..HEADER_LEN]);

    let count = u32::from_le_bytes([
        data[HEADER_LEN],
        data[HEADER_LEN + 1],
        data[HEADER_LEN + 2],
        data[HEADER_LEN + 3],
    ]);

    let body_len = (count as usize)
        .checked_mul(TRIANGLE_RECORD_LEN)
        .ok_or_else(|| Error::truncated(count, data.len()))?;
    let expected = HEADER_LEN + COUNT_LEN + body_len;
    if expected > data.len() {
        return Err(Error::truncated(count, data.len()));
    }

    let mut mesh = Mesh::with_capacity(count as usize);
    mesh.header = Some(header);

    let body = &data[HEADER_LEN + COUNT_LEN..expected];
    for record in body.chunks_exact(TRIANGLE_RECORD_LEN) {
        let mut floats = [0.0f32; 12];
        for (value, bytes) in floats.iter_mut().zip(record[..48].chunks_exact(4)) {
            *value = le_f32(bytes);
        }
        mesh.triangles.push(Triangle {
            normal: Vertex::new(floats[0], floats[1], floats[2]),
            vertices: [
                Vertex::new(floats[3], floats[4], floats[5]),
                Vertex::new(floats[6], floats[7], floats[8]),
                Vertex::new(floats[9], floats[10], floats[11]),
            ],
            attribute: u16::from_le_bytes([record[48], record[49]]),
        });
    }

    Ok(mesh)
}

/// Decode an ASCII STL buffer
///
/// Grammar: `solid <name>` opening line, zero or more facet blocks
/// (`facet normal nx ny nz` / `outer loop` / three `vertex x y z` lines /
/// `endloop` / `endfacet`), closed by `endsolid`. Keywords are matched
/// case-insensitively and the grammar is whitespace-insensitive; coordinates
/// may be integers, decimals or scientific notation, with leading sign.
///
/// A facet whose `normal` keyword is missing gets a zero normal (the encoder
/// still emits a syntactically valid normal line for it). A solid with zero
/// facets decodes to an empty mesh. Input that is not ASCII STL at all
/// (not valid UTF-8, or missing the opening `solid` keyword) fails with
/// [`Error::UnsupportedInput`]; structural errors inside the solid (a facet
/// with the wrong number of vertices, keywords out of order, non-numeric
/// coordinates) fail with [`Error::Parse`].
pub fn decode_ascii(data: &[u8]) -> Result<Mesh> {
    let text = std::str::from_utf8(data)
        .map_err(|e| Error::UnsupportedInput(format!("ASCII STL is not valid UTF-8: {}", e)))?;
    let mut lexer = Lexer::new(text);

    // A buffer that does not even open with `solid` is not ASCII STL at
    // all, as opposed to STL with broken interior grammar.
    match lexer.next_token() {
        Some(token) if token.eq_ignore_ascii_case("solid") => {}
        Some(token) => {
            return Err(Error::UnsupportedInput(format!(
                "ASCII STL must start with 'solid', found '{}'",
                token
            )));
        }
        None => {
            return Err(Error::UnsupportedInput(
                "ASCII STL must start with 'solid', found empty input".to_string(),
            ));
        }
    }

    let mut mesh = Mesh::new();
    let name = lexer.rest_of_line().trim();
    if !name.is_empty() {
        mesh.name = Some(name.to_string());
    }

    loop {
        match lexer.next_token() {
            Some(token) if token.eq_ignore_ascii_case("endsolid") => {
                // Trailing name after endsolid is not required to match.
                lexer.rest_of_line();
                break;
            }
            Some(token) if token.eq_ignore_ascii_case("facet") => {
                mesh.triangles.push(parse_facet(&mut lexer)?);
            }
            Some(token) => return Err(Error::parse_expected("'facet' or 'endsolid'", token)),
            None => return Err(Error::parse_expected("'facet' or 'endsolid'", "end of input")),
        }
    }

    Ok(mesh)
}

/// Parse one facet block; the `facet` keyword has already been consumed
fn parse_facet(lexer: &mut Lexer<'_>) -> Result<Triangle> {
    let normal = match lexer.peek_token() {
        Some(token) if token.eq_ignore_ascii_case("normal") => {
            lexer.next_token();
            parse_coordinates(lexer, "facet normal")?
        }
        // Missing normal line: keep a zero vector so the facet stays usable.
        _ => Vertex::zero(),
    };

    expect_keyword(lexer, "outer")?;
    expect_keyword(lexer, "loop")?;

    let mut corners = [Vertex::zero(); 3];
    for corner in &mut corners {
        expect_keyword(lexer, "vertex")?;
        *corner = parse_coordinates(lexer, "vertex")?;
    }

    expect_keyword(lexer, "endloop")?;
    expect_keyword(lexer, "endfacet")?;

    Ok(Triangle {
        normal,
        vertices: corners,
        attribute: 0,
    })
}

/// Parse three whitespace-separated float tokens
fn parse_coordinates(lexer: &mut Lexer<'_>, context: &str) -> Result<Vertex> {
    let x = parse_f32(lexer, context, "x")?;
    let y = parse_f32(lexer, context, "y")?;
    let z = parse_f32(lexer, context, "z")?;
    Ok(Vertex::new(x, y, z))
}

fn parse_f32(lexer: &mut Lexer<'_>, context: &str, axis: &str) -> Result<f32> {
    let field = format!("{} {} coordinate", context, axis);
    match lexer.next_token() {
        Some(token) => token
            .parse::<f32>()
            .map_err(|_| Error::parse_number(&field, token)),
        None => Err(Error::parse_expected(&field, "end of input")),
    }
}

fn expect_keyword(lexer: &mut Lexer<'_>, keyword: &str) -> Result<()> {
    match lexer.next_token() {
        Some(token) if token.eq_ignore_ascii_case(keyword) => Ok(()),
        Some(token) => Err(Error::parse_expected(&format!("'{}'", keyword), token)),
        None => Err(Error::parse_expected(
            &format!("'{}'", keyword),
            "end of input",
        )),
    }
}

fn le_f32(bytes: &[u8]) -> f32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    f32::from_le_bytes(buf)
}

/// Whitespace tokenizer over ASCII STL text
///
/// Tokens are maximal runs of non-whitespace characters. `rest_of_line`
/// exists because the solid name is the only line-oriented piece of the
/// grammar (it may contain spaces).
struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
    }

    /// Consume and return the next token, if any
    fn next_token(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .find(|c: char| c.is_whitespace())
            .unwrap_or(rest.len());
        self.pos += end;
        Some(&rest[..end])
    }

    /// Return the next token without consuming it
    fn peek_token(&mut self) -> Option<&'a str> {
        let saved = self.pos;
        let token = self.next_token();
        self.pos = saved;
        token
    }

    /// Consume up to (not including) the next newline
    fn rest_of_line(&mut self) -> &'a str {
        let rest = &self.input[self.pos..];
        let end = rest.find('\n').unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }
}
