use crate::error::ScaleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Blends each channel towards `other` by `t`, truncating to an integer.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).floor() as u8;
        Rgb {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// Accepts `rgb(r, g, b)` with any inner whitespace, or `#rrggbb`.
impl FromStr for Rgb {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ScaleError::InvalidColor(s.to_string());

        if let Some(hex) = text.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?));
        }

        let inner = text
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let channel = |p: &str| {
            if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            p.parse::<u8>().map_err(|_| invalid())
        };
        Ok(Rgb::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(position: f64, color: Rgb) -> Self {
        ColorStop { position, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn display_has_no_whitespace() {
        assert_eq!(Rgb::new(8, 48, 107).to_string(), "rgb(8,48,107)");
    }

    #[rstest]
    #[case("rgb(247,251,255)", Rgb::new(247, 251, 255))]
    #[case("rgb(8, 48, 107)", Rgb::new(8, 48, 107))]
    #[case("  rgb( 0 ,0, 0 ) ", Rgb::BLACK)]
    #[case("#08306b", Rgb::new(8, 48, 107))]
    #[case("#F7FBFF", Rgb::new(247, 251, 255))]
    fn parses_colour_strings(#[case] text: &str, #[case] expected: Rgb) {
        assert_eq!(text.parse::<Rgb>().unwrap(), expected);
    }

    #[rstest]
    #[case("rgb(256,0,0)")]
    #[case("rgb(1,2)")]
    #[case("rgba(1,2,3,0.5)")]
    #[case("#12345")]
    #[case("blue")]
    #[case("#+f+f+f")]
    #[case("rgb(+1,2,3)")]
    #[case("rgb(1,,3)")]
    #[case("rgb(-0,2,3)")]
    fn rejects_bad_colour_strings(#[case] text: &str) {
        assert!(matches!(
            text.parse::<Rgb>(),
            Err(ScaleError::InvalidColor(t)) if t == text
        ));
    }

    #[test]
    fn lerp_truncates() {
        let a = Rgb::new(0, 10, 255);
        let b = Rgb::new(3, 0, 0);
        // 0 + 3 * 0.5 = 1.5, 10 - 10 * 0.5 = 5, 255 - 255 * 0.5 = 127.5
        assert_eq!(a.lerp(b, 0.5), Rgb::new(1, 5, 127));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
