use crate::error::ScaleError;
use crate::models::{
    scale::ColorScale,
    style::{ColorStop, Rgb},
};
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::Path;

/// Reads a stop table: one `value,red,green,blue[,alpha[,label]]` row per stop.
pub fn parse_style_file<P: AsRef<Path>>(path: P, name: &str) -> Result<ColorScale, ScaleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ScaleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_style(&content, name, path)
}

/// Values are in data units; they are normalized against the first and last
/// row, so a table written in [0, 1] keeps its positions.
pub fn parse_style(content: &str, name: &str, origin: &Path) -> Result<ColorScale, ScaleError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut values = Vec::new();
    let mut colors = Vec::new();

    for record in rdr.records() {
        let record = record.map_err(|e| ScaleError::parse(origin, e.to_string()))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let first = record.get(0).unwrap_or_default();
        if first.starts_with("INTERPOLATION") || record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() < 4 {
            return Err(ScaleError::parse(
                origin,
                format!("line {}: expected value,red,green,blue", line),
            ));
        }

        let value: f64 = first
            .parse()
            .map_err(|e| ScaleError::parse(origin, format!("line {}: invalid value: {}", line, e)))?;
        let channel = |i: usize, label: &str| -> Result<u8, ScaleError> {
            record[i].parse().map_err(|e| {
                ScaleError::parse(origin, format!("line {}: invalid {}: {}", line, label, e))
            })
        };
        let red = channel(1, "red")?;
        let green = channel(2, "green")?;
        let blue = channel(3, "blue")?;

        values.push(value);
        colors.push(Rgb::new(red, green, blue));
    }

    let stops: Vec<ColorStop> = match (values.first(), values.last()) {
        (Some(&min), Some(&max)) if values.len() >= 2 => {
            if max <= min {
                return Err(ScaleError::malformed(
                    name,
                    format!("last value {} is not above first value {}", max, min),
                ));
            }
            values
                .iter()
                .zip(&colors)
                .map(|(&v, &color)| ColorStop::new((v - min) / (max - min), color))
                .collect()
        }
        _ => values
            .iter()
            .zip(&colors)
            .map(|(&v, &color)| ColorStop::new(v, color))
            .collect(),
    };

    ColorScale::new(name, stops)
}
