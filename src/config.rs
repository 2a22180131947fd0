use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub scales_dir: Option<PathBuf>,
    pub default_scale: String,
    pub legend_steps: usize,
    pub tick_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scales_dir: None,
            default_scale: "Blues".to_string(),
            legend_steps: 10,
            tick_count: 5,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        let mut config = Config {
            scales_dir: cli.scales_dir.clone(),
            ..Config::default()
        };
        if let Some(scale) = &cli.scale {
            config.default_scale = scale.clone();
        }
        config
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "evlegend",
    version,
    about = "Colour scales and shared legends for EV dashboard charts"
)]
pub struct Cli {
    /// Directory of extra scale files (.txt/.csv stop tables, .json colourscales)
    #[arg(long, global = true)]
    pub scales_dir: Option<PathBuf>,

    /// Scale used when a command does not name one
    #[arg(long, global = true)]
    pub scale: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the colour for a single value
    #[command(allow_negative_numbers = true)]
    Color {
        value: f64,
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        #[arg(long)]
        max: f64,
    },
    /// Sample a shared legend across a value range
    #[command(allow_negative_numbers = true)]
    Legend {
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        #[arg(long)]
        max: f64,
        #[arg(long)]
        steps: Option<usize>,
        #[arg(long)]
        ticks: Option<usize>,
        #[arg(long, value_enum, default_value_t = LegendFormat::Text)]
        format: LegendFormat,
    },
    /// List every known scale
    Scales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LegendFormat {
    Text,
    Css,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_defaults() {
        let cli = Cli::parse_from([
            "evlegend",
            "--scales-dir",
            "scales",
            "color",
            "161",
            "--max",
            "322",
            "--scale",
            "Greens",
        ]);
        let config = Config::from(&cli);
        assert_eq!(config.scales_dir, Some(PathBuf::from("scales")));
        assert_eq!(config.default_scale, "Greens");
        assert_eq!(config.legend_steps, 10);
        assert!(matches!(
            cli.command,
            Command::Color { value, min, max } if value == 161.0 && min == 0.0 && max == 322.0
        ));
    }

    #[test]
    fn negative_ranges_parse() {
        let cli = Cli::parse_from([
            "evlegend", "legend", "--min", "-5", "--max", "5", "--format", "css",
        ]);
        assert!(matches!(
            cli.command,
            Command::Legend { min, format: LegendFormat::Css, .. } if min == -5.0
        ));
        assert_eq!(Config::from(&cli).default_scale, "Blues");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
