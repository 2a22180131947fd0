use crate::error::ScaleError;
use crate::models::{scale::ColorScale, style::Rgb};
use crate::registry::ScaleRegistry;
use std::sync::LazyLock;

static BUILTIN_SCALES: LazyLock<ScaleRegistry> = LazyLock::new(ScaleRegistry::builtin);

/// The registry backing [`interpolate`].
pub fn builtin_scales() -> &'static ScaleRegistry {
    &BUILTIN_SCALES
}

/// Maps `value` within `[range_min, range_max]` to an `rgb(R,G,B)` string on
/// one of the built-in scales.
///
/// A range with `range_max <= range_min` always gives `rgb(0,0,0)`. Values
/// outside the range take the colour of the nearest end of the scale.
///
/// ```
/// assert_eq!(evlegend::interpolate(0.0, 0.0, 322.0, "Blues").unwrap(), "rgb(247,251,255)");
/// assert_eq!(evlegend::interpolate(5.0, 5.0, 5.0, "Blues").unwrap(), "rgb(0,0,0)");
/// ```
pub fn interpolate(
    value: f64,
    range_min: f64,
    range_max: f64,
    scale_name: &str,
) -> Result<String, ScaleError> {
    BUILTIN_SCALES.interpolate(value, range_min, range_max, scale_name)
}

pub fn interpolate_rgb(scale: &ColorScale, value: f64, range_min: f64, range_max: f64) -> Rgb {
    if range_max <= range_min {
        return Rgb::BLACK;
    }
    let ratio = (value - range_min) / (range_max - range_min);
    scale.color_at(ratio)
}
