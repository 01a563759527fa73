//! Column-aligned table rendering.
//!
//! Recipe listings mix short fields (ids, times) with long free text
//! (instructions, descriptions), so cells are truncated to a per-table
//! maximum width before column widths are computed.

/// A padded, left-aligned table without borders.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_cell_width: usize,
}

/// Default cap on cell width, keeps free-text columns readable.
const DEFAULT_MAX_CELL_WIDTH: usize = 48;

/// Gap between columns.
const COLUMN_GAP: &str = "  ";

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
        }
    }

    /// Override the maximum cell width.
    pub fn max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = width.max(1);
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let clipped = row.iter().map(|cell| self.clip(cell)).collect();
        self.rows.push(clipped);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        output.push_str(&render_line(&self.headers, &widths));
        output.push('\n');

        let underline: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        output.push_str(&render_line(&underline, &widths));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&render_line(row, &widths));
            output.push('\n');
        }

        output
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        widths
    }

    /// Collapse newlines and truncate with an ellipsis.
    fn clip(&self, cell: &str) -> String {
        let flat: String = cell
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if flat.chars().count() <= self.max_cell_width {
            return flat;
        }

        let mut clipped: String = flat.chars().take(self.max_cell_width - 1).collect();
        clipped.push('…');
        clipped
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();

    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);

        // Pad every column but the last.
        if i + 1 < widths.len() {
            let pad = widths[i].saturating_sub(cell.chars().count());
            line.extend(std::iter::repeat_n(' ', pad));
        }
    }

    line
}
