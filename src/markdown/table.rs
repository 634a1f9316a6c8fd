//! HTML table to GFM table conversion.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::WHITESPACE_NORMALIZE;

/// Convert a `<table>` element to a GFM pipe table.
///
/// The first row is the header when it holds `<th>` cells; otherwise
/// `Column 1..N` placeholders are generated, N being the cell count of the
/// first body row. The header and every row are padded with empty cells to
/// the widest row. Returns an empty string for a table without rows.
#[must_use]
pub fn table_to_markdown(table: &NodeRef) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut headers: Vec<String> = Vec::new();

    for (index, row) in dom::find_all(table, "tr").iter().enumerate() {
        let header_cells = dom::child_elements(row, &["th"]);
        if index == 0 && !header_cells.is_empty() {
            headers = header_cells.iter().map(cell_text).collect();
            continue;
        }
        rows.push(dom::child_elements(row, &["td", "th"]).iter().map(cell_text).collect());
    }

    if headers.is_empty() && rows.is_empty() {
        return String::new();
    }

    if headers.is_empty() {
        let first_len = rows.first().map_or(0, Vec::len);
        headers = (1..=first_len).map(|i| format!("Column {i}")).collect();
    }

    let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
    let col_count = headers.len().max(widest);
    headers.resize(col_count, String::new());
    for row in &mut rows {
        row.resize(col_count, String::new());
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&headers));
    lines.push(format_separator(&headers));
    lines.extend(rows.iter().map(|row| format_row(row)));
    lines.join("\n")
}

fn cell_text(cell: &NodeRef) -> String {
    WHITESPACE_NORMALIZE
        .replace_all(&dom::text_content(cell), " ")
        .trim()
        .replace('|', "\\|")
}

fn format_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

// Each separator cell spans its header text plus the two padding spaces.
fn format_separator(headers: &[String]) -> String {
    let cells: Vec<String> = headers
        .iter()
        .map(|header| "-".repeat(header.chars().count() + 2))
        .collect();
    format!("|{}|", cells.join("|"))
}
