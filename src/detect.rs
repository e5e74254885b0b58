//! STL encoding detection
//!
//! STL has no magic number, so classification is heuristic. Naive length-only
//! detection (seen in several viewers) misclassifies any non-trivial ASCII
//! file, and `solid`-prefix sniffing alone misclassifies binary files whose
//! free-form header happens to start with "solid" (some exporters do this).
//! Detection here is content-based first, with length as a tiebreaker only.

use crate::model::Encoding;
use crate::parser::{COUNT_LEN, HEADER_LEN, TRIANGLE_RECORD_LEN};

/// Decide whether a raw buffer holds binary or ASCII STL
///
/// Policy, in order:
/// 1. If the buffer is large enough to hold a binary header and its declared
///    triangle count matches the buffer length exactly, it is binary. The
///    structural match is authoritative and wins even over a `solid` prefix.
/// 2. Otherwise, if the buffer starts (after leading whitespace) with the
///    case-insensitive keyword `solid`, it is ASCII.
/// 3. Otherwise fall back to length: anything longer than the 84-byte binary
///    preamble is binary, shorter is ASCII.
pub fn detect_encoding(data: &[u8]) -> Encoding {
    if binary_size_matches(data) {
        return Encoding::Binary;
    }
    if starts_with_solid(data) {
        return Encoding::Ascii;
    }
    if data.len() > HEADER_LEN + COUNT_LEN {
        Encoding::Binary
    } else {
        Encoding::Ascii
    }
}

/// Whether the declared binary triangle count accounts for the buffer exactly
fn binary_size_matches(data: &[u8]) -> bool {
    if data.len() < HEADER_LEN + COUNT_LEN {
        return false;
    }
    let count_bytes: [u8; 4] = data[HEADER_LEN..HEADER_LEN + COUNT_LEN]
        .try_into()
        .unwrap_or([0; 4]);
    let count = u32::from_le_bytes(count_bytes) as usize;
    // Overflow-safe: checked_mul covers absurd counts on 32-bit targets.
    match count.checked_mul(TRIANGLE_RECORD_LEN) {
        Some(body) => HEADER_LEN + COUNT_LEN + body == data.len(),
        None => false,
    }
}

/// Whether the buffer opens with the ASCII `solid` keyword
fn starts_with_solid(data: &[u8]) -> bool {
    let trimmed = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map(|start| &data[start..])
        .unwrap_or(&[]);
    trimmed.len() >= 5 && trimmed[..5].eq_ignore_ascii_case(b"solid")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_fixture(count: u32) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_LEN + COUNT_LEN];
        data[HEADER_LEN..].copy_from_slice(&count.to_le_bytes());
        data.extend(std::iter::repeat_n(0u8, count as usize * TRIANGLE_RECORD_LEN));
        data
    }

    #[test]
    fn detects_binary_by_structural_match() {
        assert_eq!(detect_encoding(&binary_fixture(1)), Encoding::Binary);
        assert_eq!(detect_encoding(&binary_fixture(100)), Encoding::Binary);
    }

    #[test]
    fn detects_zero_triangle_binary() {
        // 84 bytes, count = 0: structurally valid binary
        assert_eq!(detect_encoding(&binary_fixture(0)), Encoding::Binary);
    }

    #[test]
    fn detects_ascii_by_solid_keyword() {
        let text = b"solid cube\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid cube\n";
        assert!(text.len() > 84, "fixture must defeat the length heuristic");
        assert_eq!(detect_encoding(&text[..]), Encoding::Ascii);
    }

    #[test]
    fn detects_ascii_with_leading_whitespace_and_mixed_case() {
        assert_eq!(detect_encoding(b"  \n\tSOLID x\nendsolid x\n"), Encoding::Ascii);
    }

    #[test]
    fn binary_starting_with_solid_in_header_is_still_binary() {
        let mut data = binary_fixture(2);
        data[..5].copy_from_slice(b"solid");
        assert_eq!(detect_encoding(&data), Encoding::Binary);
    }

    #[test]
    fn short_garbage_falls_back_to_ascii() {
        assert_eq!(detect_encoding(b"not an stl"), Encoding::Ascii);
        assert_eq!(detect_encoding(b""), Encoding::Ascii);
    }

    #[test]
    fn long_garbage_falls_back_to_binary() {
        assert_eq!(detect_encoding(&vec![0xABu8; 200]), Encoding::Binary);
    }
}
