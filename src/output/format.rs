use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// ANSI foreground colors used by the panels
#[derive(Debug, Clone, Copy)]
pub(super) enum Tone {
    Green,
    Red,
    Yellow,
    Cyan,
    Dim,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Green => "32",
            Tone::Red => "31",
            Tone::Yellow => "33",
            Tone::Cyan => "36",
            Tone::Dim => "2",
        }
    }
}

/// Wrap `text` in an ANSI color when colors are enabled
pub(super) fn paint(text: &str, tone: Tone, use_color: bool) -> String {
    if use_color {
        format!("\x1b[{}m{}\x1b[0m", tone.code(), text)
    } else {
        text.to_string()
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}
