use crate::error::ScaleError;
use crate::models::style::{ColorStop, Rgb};
use serde::Serialize;

/// A named continuous colour scale.
///
/// Stops are ordered by non-decreasing position, starting at exactly 0 and
/// ending at exactly 1. The only way to build one is [`ColorScale::new`],
/// which checks this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    name: String,
    stops: Vec<ColorStop>,
}

impl ColorScale {
    pub fn new(name: impl Into<String>, stops: Vec<ColorStop>) -> Result<Self, ScaleError> {
        let name = name.into();
        validate_stops(&name, &stops)?;
        Ok(ColorScale { name, stops })
    }

    /// Places `colors` at `i / (n - 1)`.
    pub fn evenly_spaced(name: impl Into<String>, colors: &[Rgb]) -> Result<Self, ScaleError> {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop::new(i as f64 / last, color))
            .collect();
        ColorScale::new(name, stops)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn first(&self) -> Rgb {
        self.stops[0].color
    }

    pub fn last(&self) -> Rgb {
        self.stops[self.stops.len() - 1].color
    }

    /// The `_r` variant: colours run the other way along mirrored positions.
    pub fn reversed(&self) -> ColorScale {
        let stops = self
            .stops
            .iter()
            .rev()
            .map(|s| ColorStop::new(1.0 - s.position, s.color))
            .collect();
        ColorScale {
            name: format!("{}_r", self.name),
            stops,
        }
    }

    /// Number of adjacent stop pairs sharing a position.
    pub fn hard_breaks(&self) -> usize {
        self.stops
            .windows(2)
            .filter(|pair| pair[0].position == pair[1].position)
            .count()
    }

    /// Colour at a normalized position. `ratio` is clamped to [0, 1] first.
    pub fn color_at(&self, ratio: f64) -> Rgb {
        let ratio = ratio.clamp(0.0, 1.0);
        for pair in self.stops.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            if left.position <= ratio && ratio <= right.position {
                let width = right.position - left.position;
                let sub_ratio = if width == 0.0 {
                    0.0
                } else {
                    (ratio - left.position) / width
                };
                return left.color.lerp(right.color, sub_ratio);
            }
        }
        // NaN never lands in a segment
        self.last()
    }
}

fn validate_stops(name: &str, stops: &[ColorStop]) -> Result<(), ScaleError> {
    if stops.len() < 2 {
        return Err(ScaleError::malformed(
            name,
            format!("needs at least two stops, found {}", stops.len()),
        ));
    }
    for (i, stop) in stops.iter().enumerate() {
        if !stop.position.is_finite() || !(0.0..=1.0).contains(&stop.position) {
            return Err(ScaleError::malformed(
                name,
                format!("stop {} has position {} outside [0, 1]", i, stop.position),
            ));
        }
    }
    if stops[0].position != 0.0 {
        return Err(ScaleError::malformed(
            name,
            format!("first stop is at {}, expected 0", stops[0].position),
        ));
    }
    let last = stops[stops.len() - 1].position;
    if last != 1.0 {
        return Err(ScaleError::malformed(
            name,
            format!("last stop is at {}, expected 1", last),
        ));
    }
    if let Some(i) = stops
        .windows(2)
        .position(|pair| pair[1].position < pair[0].position)
    {
        return Err(ScaleError::malformed(
            name,
            format!(
                "stop {} at {} comes after stop at {}",
                i + 1,
                stops[i + 1].position,
                stops[i].position
            ),
        ));
    }
    // A zero-width end segment hides its outer stop from every value
    if stops[1].position == 0.0 {
        return Err(ScaleError::malformed(
            name,
            "first two stops both sit at 0, the first colour is unreachable",
        ));
    }
    if stops[stops.len() - 2].position == 1.0 {
        return Err(ScaleError::malformed(
            name,
            "last two stops both sit at 1, the last colour is unreachable",
        ));
    }
    Ok(())
}
