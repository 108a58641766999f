//! Instance listings: engines table and categories list.

use crate::cli::presentation::shared::bold;
use crate::models::EngineInfo;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Cell, Color, Table};

/// Engines table sorted by name. The input order is left untouched.
pub fn format_engines_text(engines: &[EngineInfo]) -> String {
    let mut sorted: Vec<&EngineInfo> = engines.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Shortcut", "Categories", "Enabled"]);
    for engine in sorted {
        // Colored through comfy-table so escapes do not count toward column width.
        let enabled = if engine.enabled {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&engine.name),
            Cell::new(&engine.shortcut),
            Cell::new(engine.categories.join(", ")),
            enabled,
        ]);
    }
    format!("{}\n{}", bold("Available Engines"), table)
}

pub fn format_categories_text(categories: &[String]) -> String {
    let mut sorted: Vec<&String> = categories.iter().collect();
    sorted.sort();

    let mut output = bold("Available Categories:");
    for category in sorted {
        output.push_str(&format!("\n  • {}", category));
    }
    output
}
