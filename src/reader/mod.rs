use crate::error::ScaleError;
use crate::models::scale::ColorScale;
use std::path::Path;

pub mod plotly;
pub mod style;

/// File extensions recognised as scale definitions.
pub const SCALE_EXTENSIONS: [&str; 3] = ["txt", "csv", "json"];

pub fn is_scale_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SCALE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Scale name for a file (filename without extension only)
pub fn key_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Reads one scale file, choosing the format by extension.
pub fn read_scale_file(path: &Path) -> Result<ColorScale, ScaleError> {
    let name = key_for(path);
    let is_json = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        plotly::parse_colorscale_file(path, &name)
    } else {
        style::parse_style_file(path, &name)
    }
}
