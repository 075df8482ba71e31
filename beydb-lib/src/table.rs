//! Grid table rendering.
//!
//! ```text
//! +----+---------+
//! | ID | Name    |
//! +====+=========+
//! |  1 | Pegasus |
//! +----+---------+
//! ```
//!
//! Columns whose every cell is numeric are right-aligned; the rest are
//! left-aligned.

use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with empty cells, long rows truncated.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn numeric_columns(&self) -> Vec<bool> {
        (0..self.headers.len())
            .map(|i| {
                !self.rows.is_empty()
                    && self
                        .rows
                        .iter()
                        .all(|r| !r[i].is_empty() && r[i].parse::<f64>().is_ok())
            })
            .collect()
    }

    /// Render the full grid, one line per text line, ending with a newline.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let numeric = self.numeric_columns();
        let mut out = String::new();

        push_rule(&mut out, &widths, '-');
        push_cells(&mut out, &self.headers, &widths, &vec![false; widths.len()]);
        // A header with no rows underneath is closed like a plain row.
        push_rule(&mut out, &widths, if self.rows.is_empty() { '-' } else { '=' });
        for row in &self.rows {
            push_cells(&mut out, row, &widths, &numeric);
            push_rule(&mut out, &widths, '-');
        }
        out
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn push_rule(out: &mut String, widths: &[usize], fill: char) {
    out.push('+');
    for w in widths {
        out.extend(std::iter::repeat_n(fill, w + 2));
        out.push('+');
    }
    out.push('\n');
}

fn push_cells(out: &mut String, cells: &[String], widths: &[usize], right: &[bool]) {
    out.push('|');
    for ((cell, &w), &r) in cells.iter().zip(widths).zip(right) {
        let _ = if r {
            write!(out, " {:>w$} |", cell, w = w)
        } else {
            write!(out, " {:<w$} |", cell, w = w)
        };
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
