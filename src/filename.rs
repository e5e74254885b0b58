//! Output filename derivation

/// Derive the download filename for a scaled copy of a file
///
/// Produces `<basename>_<round(factor * 100)>percent.<extension>`, splitting
/// on the last dot: `part.stl` scaled by 1.5 becomes `part_150percent.stl`.
/// A filename without a dot keeps no extension; the suffix is still applied.
///
/// The factor is not validated here. This is a pure string transform; the
/// scaling pipeline has already rejected invalid factors by the time a
/// filename is needed.
pub fn scaled_filename(filename: &str, factor: f32) -> String {
    let percent = (factor * 100.0).round() as i64;
    match filename.rfind('.') {
        Some(dot) => format!(
            "{}_{}percent.{}",
            &filename[..dot],
            percent,
            &filename[dot + 1..]
        ),
        None => format!("{}_{}percent", filename, percent),
    }
}
