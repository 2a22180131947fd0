use crate::legend::ansi_block;
use crate::registry::ScaleRegistry;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use std::io::{self, Write};

/// Blocks drawn per colourbar.
const BAR_WIDTH: usize = 10;

fn header(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

/// One row per registered scale, plus warnings for scales with hard breaks.
pub fn scale_summary(registry: &ScaleRegistry) -> (Table, Vec<String>) {
    let mut table = Table::new();
    table
        .set_header(vec![
            header(""),
            header("Scale"),
            header("Stops"),
            header("Source"),
            Cell::new("Colourbar").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    let mut warnings = Vec::new();
    for (scale, source) in registry.iter() {
        let bar: String = (0..BAR_WIDTH)
            .map(|i| ansi_block(scale.color_at(i as f64 / (BAR_WIDTH - 1) as f64)))
            .collect();

        let mut status = Cell::new("✅").set_alignment(CellAlignment::Center);
        let breaks = scale.hard_breaks();
        if breaks > 0 {
            warnings.push(format!(
                "  ⚠️{}: {} zero-width segment(s), colours jump instead of blending",
                scale.name(),
                breaks
            ));
            status = Cell::new("⚠️").set_alignment(CellAlignment::Center);
        }

        table.add_row(vec![
            status,
            Cell::new(scale.name()),
            Cell::new(scale.stops().len()).set_alignment(CellAlignment::Center),
            Cell::new(source.to_string()),
            Cell::new(bar),
        ]);
    }

    (table, warnings)
}

pub fn write_scale_summary<W: Write>(registry: &ScaleRegistry, out: &mut W) -> io::Result<()> {
    let (table, warnings) = scale_summary(registry);
    writeln!(out, "\nScale summary:\n{}", table)?;

    if !warnings.is_empty() {
        writeln!(out, "\nWarnings:")?;
        for warning in warnings {
            writeln!(out, "{}", warning)?;
        }
    }

    writeln!(out)
}
