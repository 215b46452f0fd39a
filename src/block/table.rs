//! Sectioned tables.
//!
//! ```text
//! |table>
//! H1|H2
//! ---|---
//! a|b
//! |<table
//! ```
//!
//! Separator rows split the table into sections. Section roles are decided
//! positionally when the table is rendered: with two or more sections the
//! first is the header, with three or more the last is the footer, and every
//! other section is a body.

use smallvec::SmallVec;

use crate::render::HtmlWriter;

use super::{Context, Feed};

/// Line that opens a table.
pub const OPEN_MARKER: &str = "|table>";

/// Line that closes a table.
pub const CLOSE_MARKER: &str = "|<table";

/// Rows that start the next section. Matched exactly.
pub const SECTION_SEPARATORS: [&str; 3] = ["- | - | -", "---|---", "-|-|-"];

/// Column delimiter.
const DELIMITER: char = '|';

/// One row of already-transformed cells.
type Row = SmallVec<[String; 8]>;

/// Rendering role of a table section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRole {
    Head,
    Body,
    Foot,
}

impl SectionRole {
    /// Role of section `index` in a table of `count` sections.
    pub fn for_position(index: usize, count: usize) -> Self {
        if count > 1 && index == 0 {
            SectionRole::Head
        } else if count >= 3 && index == count - 1 {
            SectionRole::Foot
        } else {
            SectionRole::Body
        }
    }

    fn tag(self) -> &'static str {
        match self {
            SectionRole::Head => "thead",
            SectionRole::Body => "tbody",
            SectionRole::Foot => "tfoot",
        }
    }
}

/// Table parser state.
#[derive(Debug, Default)]
pub struct TableBlock {
    started: bool,
    finished: bool,
    /// Index of the section receiving rows.
    section: usize,
    /// Index of the next row within the current section.
    row: usize,
    /// Sections, created lazily when their first row arrives.
    sections: Vec<Vec<Row>>,
    out: HtmlWriter,
}

impl TableBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table starts with a line that is exactly `|table>`.
    pub fn is_starting_line(line: &str) -> bool {
        line == OPEN_MARKER
    }

    pub fn is_section_separator(line: &str) -> bool {
        SECTION_SEPARATORS.contains(&line)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of sections seen so far.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn add_line(&mut self, line: &str, cx: &Context<'_>) -> Feed {
        debug_assert!(!self.finished, "line fed to a finished table");

        if !self.started {
            self.started = true;
            if Self::is_starting_line(line) {
                return Feed::Continue;
            }
        }

        if Self::is_section_separator(line) {
            // Separators only advance past a section that has rows.
            if self.sections.len() > self.section {
                self.section += 1;
                self.row = 0;
            }
            return Feed::Continue;
        }

        if line == CLOSE_MARKER {
            self.render();
            return Feed::Done;
        }

        self.push_row(line, cx);
        Feed::Continue
    }

    /// Render whatever has accumulated. Used for tables left open at end of input.
    pub fn finish(&mut self) {
        if !self.finished {
            self.render();
        }
    }

    pub fn into_html(self) -> String {
        self.out.into_string()
    }

    fn push_row(&mut self, line: &str, cx: &Context<'_>) {
        if self.sections.len() == self.section {
            self.sections.push(Vec::new());
        }
        // A blank line is a row without cells.
        let row: Row = if line.trim().is_empty() {
            Row::new()
        } else {
            split_cells(line)
                .map(|cell| cx.inline.transform(cell))
                .collect()
        };
        let section = &mut self.sections[self.section];
        debug_assert_eq!(section.len(), self.row);
        section.push(row);
        self.row += 1;
    }

    fn render(&mut self) {
        let sections = std::mem::take(&mut self.sections);
        let count = sections.len();

        self.out.table_start();
        for (index, rows) in sections.iter().enumerate() {
            let role = SectionRole::for_position(index, count);
            self.out.table_section_start(role.tag());
            for row in rows {
                self.out.table_row_start();
                for cell in row {
                    self.out.table_cell(role == SectionRole::Head, cell);
                }
                self.out.table_row_end();
            }
            self.out.table_section_end(role.tag());
        }
        self.out.table_end();

        self.finished = true;
        trace!(sections = count, "table rendered");
    }
}

/// Split a data row into trimmed cells.
///
/// One leading and one trailing delimiter are dropped first, so
/// `| a | b |` yields exactly `a` and `b`.
pub fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    let line = line.strip_prefix(DELIMITER).unwrap_or(line);
    let line = line.strip_suffix(DELIMITER).unwrap_or(line);
    line.split(DELIMITER).map(str::trim)
}
