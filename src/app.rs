use crate::config::{Command, Config, LegendFormat};
use crate::legend::Legend;
use crate::registry::ScaleRegistry;
use crate::utils::status::write_scale_summary;
use anyhow::Context;
use std::io::{self, Write};

pub struct LegendApp {
    config: Config,
    registry: ScaleRegistry,
}

impl LegendApp {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut registry = ScaleRegistry::builtin();

        if let Some(dir) = &config.scales_dir {
            let loaded = registry
                .load_dir(dir)
                .with_context(|| format!("Failed to load scales from {}", dir.display()))?;
            eprintln!("📦 Loaded {} scale(s) from {}", loaded.len(), dir.display());
        }

        // Surface a bad default now rather than on first use
        registry
            .get(&config.default_scale)
            .context("Invalid default scale")?;

        Ok(Self { config, registry })
    }

    pub fn registry(&self) -> &ScaleRegistry {
        &self.registry
    }

    pub fn run(&self, command: Command) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(command, &mut out)
    }

    pub fn run_to<W: Write>(&self, command: Command, out: &mut W) -> anyhow::Result<()> {
        let scale_name = self.config.default_scale.as_str();

        match command {
            Command::Color { value, min, max } => {
                let color = self.registry.interpolate(value, min, max, scale_name)?;
                writeln!(out, "{}", color)?;
            }
            Command::Legend {
                min,
                max,
                steps,
                ticks,
                format,
            } => {
                let scale = self.registry.get(scale_name)?;
                let legend = Legend::build(
                    &scale,
                    min,
                    max,
                    steps.unwrap_or(self.config.legend_steps),
                    ticks.unwrap_or(self.config.tick_count),
                );
                match format {
                    LegendFormat::Text => write_legend_text(&legend, out)?,
                    LegendFormat::Css => writeln!(out, "{}", legend.css_gradient())?,
                    LegendFormat::Json => {
                        serde_json::to_writer_pretty(&mut *out, &legend)?;
                        writeln!(out)?;
                    }
                }
            }
            Command::Scales => write_scale_summary(&self.registry, out)?,
        }

        Ok(())
    }
}

fn write_legend_text<W: Write>(legend: &Legend, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} [{} … {}]", legend.scale, legend.min, legend.max)?;
    writeln!(out, "{}", legend.ansi_bar())?;
    for swatch in &legend.swatches {
        writeln!(out, "{:>12.2}  {}", swatch.value, swatch.color)?;
    }
    let ticks: Vec<String> = legend.ticks.iter().map(|t| format!("{}", t)).collect();
    writeln!(out, "ticks: {}", ticks.join(", "))
}
