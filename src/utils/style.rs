use crate::error::ScaleError;
use crate::models::{scale::ColorScale, style::Rgb};
use colorgrad::{Gradient, preset};

/// Knots sampled from each gradient preset.
pub const GRADIENT_SAMPLES: usize = 11;

const BLUES: [Rgb; 9] = [
    Rgb::new(247, 251, 255),
    Rgb::new(222, 235, 247),
    Rgb::new(198, 219, 239),
    Rgb::new(158, 202, 225),
    Rgb::new(107, 174, 214),
    Rgb::new(66, 146, 198),
    Rgb::new(33, 113, 181),
    Rgb::new(8, 81, 156),
    Rgb::new(8, 48, 107),
];

const GREENS: [Rgb; 9] = [
    Rgb::new(247, 252, 245),
    Rgb::new(229, 245, 224),
    Rgb::new(199, 233, 192),
    Rgb::new(161, 217, 155),
    Rgb::new(116, 196, 118),
    Rgb::new(65, 171, 93),
    Rgb::new(35, 139, 69),
    Rgb::new(0, 109, 44),
    Rgb::new(0, 68, 27),
];

const GREYS: [Rgb; 9] = [
    Rgb::new(255, 255, 255),
    Rgb::new(240, 240, 240),
    Rgb::new(217, 217, 217),
    Rgb::new(189, 189, 189),
    Rgb::new(150, 150, 150),
    Rgb::new(115, 115, 115),
    Rgb::new(82, 82, 82),
    Rgb::new(37, 37, 37),
    Rgb::new(0, 0, 0),
];

const ORANGES: [Rgb; 9] = [
    Rgb::new(255, 245, 235),
    Rgb::new(254, 230, 206),
    Rgb::new(253, 208, 162),
    Rgb::new(253, 174, 107),
    Rgb::new(253, 141, 60),
    Rgb::new(241, 105, 19),
    Rgb::new(217, 72, 1),
    Rgb::new(166, 54, 3),
    Rgb::new(127, 39, 4),
];

const PURPLES: [Rgb; 9] = [
    Rgb::new(252, 251, 253),
    Rgb::new(239, 237, 245),
    Rgb::new(218, 218, 235),
    Rgb::new(188, 189, 220),
    Rgb::new(158, 154, 200),
    Rgb::new(128, 125, 186),
    Rgb::new(106, 81, 163),
    Rgb::new(84, 39, 143),
    Rgb::new(63, 0, 125),
];

const REDS: [Rgb; 9] = [
    Rgb::new(255, 245, 240),
    Rgb::new(254, 224, 210),
    Rgb::new(252, 187, 161),
    Rgb::new(252, 146, 114),
    Rgb::new(251, 106, 74),
    Rgb::new(239, 59, 44),
    Rgb::new(203, 24, 29),
    Rgb::new(165, 15, 21),
    Rgb::new(103, 0, 13),
];

/// Sequential single-hue palettes, light at 0 and dark at 1.
pub const SEQUENTIAL_PALETTES: [(&str, &[Rgb]); 6] = [
    ("Blues", &BLUES),
    ("Greens", &GREENS),
    ("Greys", &GREYS),
    ("Oranges", &ORANGES),
    ("Purples", &PURPLES),
    ("Reds", &REDS),
];

pub const GRADIENT_PALETTES: [&str; 9] = [
    "Viridis",
    "Magma",
    "Plasma",
    "Inferno",
    "Turbo",
    "Cubehelix",
    "Rainbow",
    "Spectral",
    "Sinebow",
];

pub fn get_builtin_gradient(name: &str) -> Option<Box<dyn Gradient>> {
    Some(match name.to_ascii_lowercase().as_str() {
        "viridis" => Box::new(preset::viridis()),
        "magma" => Box::new(preset::magma()),
        "plasma" => Box::new(preset::plasma()),
        "inferno" => Box::new(preset::inferno()),
        "turbo" => Box::new(preset::turbo()),
        "cubehelix" => Box::new(preset::cubehelix_default()),
        "rainbow" => Box::new(preset::rainbow()),
        "spectral" => Box::new(preset::spectral()),
        "sinebow" => Box::new(preset::sinebow()),
        _ => return None,
    })
}

/// Samples a gradient preset into an evenly spaced [`ColorScale`].
pub fn gradient_scale(name: &str) -> Result<ColorScale, ScaleError> {
    let grad =
        get_builtin_gradient(name).ok_or_else(|| ScaleError::UnknownScale(name.to_string()))?;
    let colors: Vec<Rgb> = (0..GRADIENT_SAMPLES)
        .map(|i| {
            let t = i as f32 / (GRADIENT_SAMPLES - 1) as f32;
            let [r, g, b, _] = grad.at(t).to_rgba8();
            Rgb::new(r, g, b)
        })
        .collect();
    ColorScale::evenly_spaced(name, &colors)
}

pub fn sequential_scale(name: &str) -> Result<ColorScale, ScaleError> {
    let (name, colors) = SEQUENTIAL_PALETTES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .ok_or_else(|| ScaleError::UnknownScale(name.to_string()))?;
    ColorScale::evenly_spaced(*name, colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blues_matches_standard_palette() {
        let blues = sequential_scale("blues").unwrap();
        assert_eq!(blues.name(), "Blues");
        assert_eq!(blues.stops().len(), 9);
        assert_eq!(blues.first().to_string(), "rgb(247,251,255)");
        assert_eq!(blues.last().to_string(), "rgb(8,48,107)");
        assert_eq!(blues.stops()[1].position, 0.125);
    }

    #[test]
    fn sequential_palettes_darken() {
        let weight = |c: Rgb| c.channels().iter().map(|&v| v as u32).sum::<u32>();
        for (name, colors) in SEQUENTIAL_PALETTES {
            for pair in colors.windows(2) {
                assert!(
                    weight(pair[1]) < weight(pair[0]),
                    "{} does not darken monotonically at {} -> {}",
                    name,
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn every_gradient_preset_samples() {
        for name in GRADIENT_PALETTES {
            let scale = gradient_scale(name).unwrap();
            assert_eq!(scale.stops().len(), GRADIENT_SAMPLES);
        }
        assert!(matches!(
            gradient_scale("Blues"),
            Err(ScaleError::UnknownScale(_))
        ));
        assert!(matches!(
            sequential_scale("Nonexistent"),
            Err(ScaleError::UnknownScale(n)) if n == "Nonexistent"
        ));
    }
}
