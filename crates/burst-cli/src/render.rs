//! Terminal rendering for command output.

use burst_complete::DocumentRegistry;
use burst_model::{Insertion, LoadStatus, PopupState, placeholder, vocabulary_entry};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::session::LoadReport;

/// Marks the cursor position in rendered buffers.
pub const CURSOR_MARK: char = '|';

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// One row per vocabulary entry, grouped by document.
pub fn vocabulary_table(registry: &DocumentRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Document"),
        header_cell("Field"),
        header_cell("Placeholder"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    let mut index = 0usize;
    for (name, source) in registry.documents() {
        for field in source.fields().unwrap_or_default() {
            table.add_row(vec![
                dim_cell(index),
                Cell::new(name),
                Cell::new(field),
                Cell::new(placeholder(&vocabulary_entry(name, field))).fg(Color::Green),
            ]);
            index += 1;
        }
    }
    table
}

/// Load outcome per requested document.
pub fn load_table(reports: &[LoadReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Path"),
        header_cell("Kind"),
        header_cell("Status"),
        header_cell("Fields"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for report in reports {
        table.add_row(vec![
            Cell::new(&report.document.name).add_attribute(Attribute::Bold),
            Cell::new(report.document.path.display()),
            dim_cell(report.document.kind.label()),
            status_cell(report),
            Cell::new(report.fields),
        ]);
    }
    table
}

/// Plain-text popup: one candidate per line, the highlighted one marked.
pub fn render_popup(popup: Option<&PopupState>) -> String {
    let Some(popup) = popup else {
        return "popup hidden\n".to_string();
    };
    let mut out = format!("query: {:?}\n", popup.query);
    for (index, candidate) in popup.candidates.iter().enumerate() {
        out.push(if index == popup.highlighted_index {
            '>'
        } else {
            ' '
        });
        out.push(' ');
        out.push_str(candidate);
        out.push('\n');
    }
    out
}

/// The rewritten buffer with [`CURSOR_MARK`] at the new cursor.
pub fn render_insertion(insertion: &Insertion) -> String {
    let mut out = String::with_capacity(insertion.text.len() + 1);
    let mut marked = false;
    for (offset, ch) in insertion.text.chars().enumerate() {
        if offset == insertion.cursor {
            out.push(CURSOR_MARK);
            marked = true;
        }
        out.push(ch);
    }
    if !marked {
        out.push(CURSOR_MARK);
    }
    out
}

fn status_cell(report: &LoadReport) -> Cell {
    match &report.outcome {
        Ok(LoadStatus::Loaded) => Cell::new("loaded").fg(Color::Green),
        Ok(LoadStatus::MissingSource) => Cell::new("missing").fg(Color::Yellow),
        Ok(LoadStatus::EmptySource) => Cell::new("empty").fg(Color::Yellow),
        Err(error) => Cell::new(error).fg(Color::Red),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
