//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use vocative::NameEntry;

/// Format dictionary entries as an ASCII table.
pub fn format_dictionary_table<'a>(entries: impl IntoIterator<Item = &'a NameEntry>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Vocative", "Gender"]);

    for entry in entries {
        table.add_row(vec![
            entry.name.clone(),
            entry.vocative.clone(),
            entry.gender.to_string(),
        ]);
    }

    table
}
