//! Column-aligned text tables.
//!
//! Layout happens in two passes over the collected rows: the first
//! measures each column, the second pads and writes. Every cell except
//! the last one of a line is left-aligned and padded to the column width
//! plus [`CELL_PADDING`]; the last cell is written as is, so lines carry
//! no trailing whitespace.

use std::fmt::Write;

/// Minimum number of spaces between two columns.
pub const CELL_PADDING: usize = 3;

/// Rows of cells awaiting layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Appends a row.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no row was pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest cell per column, in characters. Last cells of a line do not
    /// take part in alignment and are not measured.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            let aligned = row.len().saturating_sub(1);
            for (i, cell) in row.iter().take(aligned).enumerate() {
                let w = cell.chars().count();
                match widths.get_mut(i) {
                    Some(max) => *max = (*max).max(w),
                    None => widths.push(w),
                }
            }
        }
        widths
    }

    /// Lays the table out as newline-terminated lines.
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();
        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                if i == last {
                    out.push_str(cell);
                } else {
                    let width = widths[i] + CELL_PADDING;
                    let _ = write!(out, "{cell:<width$}");
                }
            }
            out.push('\n');
        }
        out
    }
}
