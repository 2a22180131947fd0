//! Shared legends: one colourbar sampled across a value range, drawn once for
//! several charts whose own colourbars are hidden.

use crate::interpolate::interpolate_rgb;
use crate::models::{scale::ColorScale, style::Rgb};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch {
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub scale: String,
    pub min: f64,
    pub max: f64,
    pub swatches: Vec<LegendSwatch>,
    pub ticks: Vec<f64>,
}

impl Legend {
    /// Samples `steps` swatches and `tick_count` ticks between `range_min`
    /// and `range_max`. Both counts are raised to at least two.
    pub fn build(
        scale: &ColorScale,
        range_min: f64,
        range_max: f64,
        steps: usize,
        tick_count: usize,
    ) -> Self {
        let swatches = spaced(range_min, range_max, steps.max(2))
            .into_iter()
            .map(|value| LegendSwatch {
                value,
                color: interpolate_rgb(scale, value, range_min, range_max).to_string(),
            })
            .collect();

        let ticks = if range_max <= range_min {
            vec![range_min]
        } else {
            spaced(range_min, range_max, tick_count.max(2))
        };

        Legend {
            scale: scale.name().to_string(),
            min: range_min,
            max: range_max,
            swatches,
            ticks,
        }
    }

    /// A horizontal CSS gradient, e.g. for a thin `<div>` under the charts.
    pub fn css_gradient(&self) -> String {
        let last = self.swatches.len().saturating_sub(1).max(1) as f64;
        let stops: Vec<String> = self
            .swatches
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{} {:.2}%", s.color, 100.0 * i as f64 / last))
            .collect();
        format!("linear-gradient(to right, {})", stops.join(", "))
    }

    pub fn ansi_bar(&self) -> String {
        self.swatches
            .iter()
            .filter_map(|s| s.color.parse::<Rgb>().ok())
            .map(ansi_block)
            .collect()
    }
}

pub fn ansi_block(color: Rgb) -> String {
    format!(
        "\x1b[38;2;{};{};{}m█\x1b[0m",
        color.red, color.green, color.blue
    )
}

/// `n` evenly spaced values from `min` to `max`, hitting both ends exactly.
fn spaced(min: f64, max: f64, n: usize) -> Vec<f64> {
    let last = (n - 1) as f64;
    (0..n)
        .map(|i| {
            if i + 1 == n {
                max
            } else {
                min + (max - min) * i as f64 / last
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::builtin_scales;

    fn blues() -> ColorScale {
        builtin_scales().get("Blues").unwrap().into_owned()
    }

    #[test]
    fn ends_match_scale_ends() {
        let legend = Legend::build(&blues(), 0.0, 322.0, 10, 5);
        assert_eq!(legend.swatches.len(), 10);
        assert_eq!(legend.swatches[0].color, "rgb(247,251,255)");
        assert_eq!(legend.swatches[9].color, "rgb(8,48,107)");
        assert_eq!(legend.swatches[9].value, 322.0);
        assert_eq!(legend.ticks, vec![0.0, 80.5, 161.0, 241.5, 322.0]);
    }

    #[test]
    fn degenerate_range_is_black() {
        let legend = Legend::build(&blues(), 5.0, 5.0, 4, 5);
        assert!(legend.swatches.iter().all(|s| s.color == "rgb(0,0,0)"));
        assert!(legend.swatches.iter().all(|s| s.value == 5.0));
        assert_eq!(legend.ticks, vec![5.0]);
    }

    #[test]
    fn counts_are_raised_to_two() {
        let legend = Legend::build(&blues(), 0.0, 1.0, 0, 1);
        assert_eq!(legend.swatches.len(), 2);
        assert_eq!(legend.ticks, vec![0.0, 1.0]);
    }

    #[test]
    fn css_gradient_spans_full_width() {
        let legend = Legend::build(&blues(), 0.0, 322.0, 3, 2);
        assert_eq!(
            legend.css_gradient(),
            "linear-gradient(to right, rgb(247,251,255) 0.00%, rgb(107,174,214) 50.00%, rgb(8,48,107) 100.00%)"
        );
    }

    #[test]
    fn css_gradient_without_swatches() {
        let legend = Legend {
            scale: "Blues".to_string(),
            min: 0.0,
            max: 1.0,
            swatches: Vec::new(),
            ticks: Vec::new(),
        };
        assert_eq!(legend.css_gradient(), "linear-gradient(to right, )");
    }

    #[test]
    fn ansi_bar_has_one_block_per_swatch() {
        let legend = Legend::build(&blues(), 0.0, 322.0, 7, 2);
        assert_eq!(legend.ansi_bar().matches('█').count(), 7);
    }

    #[test]
    fn serializes_to_json() {
        let legend = Legend::build(&blues(), 0.0, 1.0, 2, 2);
        let json = serde_json::to_value(&legend).unwrap();
        assert_eq!(json["scale"], "Blues");
        assert_eq!(json["swatches"][1]["color"], "rgb(8,48,107)");
    }
}
