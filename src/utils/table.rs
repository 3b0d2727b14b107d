//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{paint, paint_bold};
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern is valid")
});

/// Remove ANSI escape sequences, so widths are computed on visible text only.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Visible width of `s` in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Column {
    pub header: String,
    pub style: Option<Colour>,
}

impl Column {
    pub fn new(header: &str, style: Option<Colour>) -> Self {
        Self {
            header: header.to_string(),
            style,
        }
    }
}

pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            title: None,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| display_width(c))
                    .chain(std::iter::once(display_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render the table with box-drawing borders. Cells are never wrapped.
    pub fn render(&self, color: bool) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let rule = |left: &str, fill: &str, mid: &str, right: &str| -> String {
            let inner: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
            format!("{left}{}{right}\n", inner.join(mid))
        };

        // Title, centred on the table width
        if let Some(title) = &self.title {
            let total = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
            let pad = total.saturating_sub(display_width(title)) / 2;
            out.push_str(&" ".repeat(pad));
            out.push_str(&paint_bold(title, None, color));
            out.push('\n');
        }

        // Header
        out.push_str(&rule("┏", "━", "┳", "┓"));
        out.push('┃');
        for (col, w) in self.columns.iter().zip(&widths) {
            let padding = " ".repeat(w - display_width(&col.header));
            out.push_str(&format!(
                " {}{} ┃",
                paint_bold(&col.header, None, color),
                padding
            ));
        }
        out.push('\n');
        out.push_str(&rule("┡", "━", "╇", "┩"));

        // Rows
        for row in &self.rows {
            out.push('│');
            for (i, (col, w)) in self.columns.iter().zip(&widths).enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let padding = " ".repeat(w - display_width(cell));
                let styled = match col.style {
                    Some(c) => paint(cell, c, color),
                    None => cell.to_string(),
                };
                out.push_str(&format!(" {styled}{padding} │"));
            }
            out.push('\n');
        }

        out.push_str(&rule("└", "─", "┴", "┘"));
        out
    }
}
