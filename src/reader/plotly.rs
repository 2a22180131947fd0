use crate::error::ScaleError;
use crate::models::{
    scale::ColorScale,
    style::{ColorStop, Rgb},
};
use std::fs;
use std::path::Path;

/// Reads a chart-library colourscale: `[[0.0, "rgb(247,251,255)"], [1.0, "#08306b"]]`.
pub fn parse_colorscale_file<P: AsRef<Path>>(
    path: P,
    name: &str,
) -> Result<ColorScale, ScaleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ScaleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_colorscale(&content, name, path)
}

pub fn parse_colorscale(content: &str, name: &str, origin: &Path) -> Result<ColorScale, ScaleError> {
    let pairs: Vec<(f64, String)> =
        serde_json::from_str(content).map_err(|e| ScaleError::parse(origin, e.to_string()))?;
    let stops = pairs
        .into_iter()
        .map(|(position, color)| Ok(ColorStop::new(position, color.parse::<Rgb>()?)))
        .collect::<Result<Vec<_>, ScaleError>>()?;
    ColorScale::new(name, stops)
}
