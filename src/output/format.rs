use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::store::Theme;

/// How tables and notices are styled for this run
#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderOptions {
    pub(crate) use_color: bool,
    pub(crate) theme: Theme,
}

impl RenderOptions {
    /// Header color for the active theme, or none when colors are off
    pub(crate) fn header_color(&self) -> Option<Color> {
        if !self.use_color {
            return None;
        }
        Some(match self.theme {
            Theme::Light => Color::DarkBlue,
            Theme::Dark => Color::Cyan,
        })
    }

    pub(crate) fn accent_color(&self) -> Option<Color> {
        if !self.use_color {
            return None;
        }
        Some(match self.theme {
            Theme::Light => Color::DarkGreen,
            Theme::Dark => Color::Green,
        })
    }

    pub(crate) fn error_color(&self) -> Option<Color> {
        self.use_color.then_some(Color::Red)
    }

    pub(crate) fn muted_color(&self) -> Option<Color> {
        self.use_color.then_some(Color::DarkGrey)
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

pub(super) fn header_cell(text: &str, opts: &RenderOptions) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if let Some(c) = opts.header_color() {
        cell = cell.fg(c);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
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

/// Two-column key/value table
pub(super) fn key_value_table(title: &str, rows: &[(&str, String)], opts: &RenderOptions) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![header_cell(title, opts), header_cell("", opts)]);
    for (key, value) in rows {
        table.add_row(vec![
            styled_cell(key, None, false),
            right_cell(value, opts.accent_color(), false),
        ]);
    }
    table
}

/// Group thousands with commas
pub(super) fn format_number(n: i64) -> String {
    let (sign, digits) = if n < 0 {
        ("-", n.unsigned_abs().to_string())
    } else {
        ("", n.to_string())
    };
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let formatted: String = result.chars().rev().collect();
    format!("{sign}{formatted}")
}
