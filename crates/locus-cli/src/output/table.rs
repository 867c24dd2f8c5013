//! Table formatting utilities for CLI output.

use comfy_table::{CellAlignment, ContentArrangement, Table, presets};

/// Coverage data for a single locale.
pub struct LocaleCoverage {
    /// Locale id (e.g., "es", "pt-BR").
    pub locale: String,
    /// Number of source keys the locale translates.
    pub translated: usize,
    /// Source keys the locale lacks, in source order.
    pub missing: Vec<String>,
    /// Keys the locale has that the source does not.
    pub extra: usize,
}

impl LocaleCoverage {
    /// Translated share of `total` source keys, in percent.
    pub fn percent(&self, total: usize) -> f64 {
        if total == 0 {
            return 100.0;
        }
        self.translated as f64 * 100.0 / total as f64
    }
}

/// Format coverage data as a table.
pub fn format_coverage_table(source_count: usize, coverage: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Coverage", "Percent", "Missing", "Extra"]);

    for entry in coverage {
        table.add_row(vec![
            entry.locale.clone(),
            format!("{}/{}", entry.translated, source_count),
            format!("{:.1}%", entry.percent(source_count)),
            entry.missing.len().to_string(),
            entry.extra.to_string(),
        ]);
    }
    for index in 1..=4 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}
