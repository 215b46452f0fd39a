//! Single-line blocks: ATX headings and horizontal rules.

use crate::limits::MAX_HEADING_LEVEL;
use crate::render::HtmlWriter;

use super::{Context, Feed};

/// `# Title` through `###### Title`.
#[derive(Debug, Default)]
pub struct HeadingBlock {
    finished: bool,
    out: HtmlWriter,
}

impl HeadingBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_starting_line(line: &str) -> bool {
        Self::parse(line).is_some()
    }

    /// Split a heading line into its level and text.
    ///
    /// The marker run must be followed by a space. A closing run of `#`
    /// after a space is dropped.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.bytes().take_while(|&b| b == b'#').count();
        if level == 0 || level > MAX_HEADING_LEVEL {
            return None;
        }
        let rest = &line[level..];
        if !rest.starts_with(' ') {
            return None;
        }

        let mut text = rest.trim();
        let without_closing = text.trim_end_matches('#');
        if without_closing.is_empty() {
            text = without_closing;
        } else if without_closing.ends_with(' ') {
            text = without_closing.trim_end();
        }
        Some((level as u8, text))
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Render the heading. A heading is always exactly one line.
    pub fn add_line(&mut self, line: &str, cx: &Context<'_>) -> Feed {
        debug_assert!(!self.finished, "line fed to a finished heading");
        if let Some((level, text)) = Self::parse(line) {
            self.out.heading_start(level);
            self.out.write_str(&cx.inline.transform(text));
            self.out.heading_end(level);
        }
        self.finished = true;
        Feed::Done
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn into_html(self) -> String {
        self.out.into_string()
    }
}

/// `---`, `***` or `___` (three or more of the same character).
#[derive(Debug, Default)]
pub struct RuleBlock {
    finished: bool,
    out: HtmlWriter,
}

impl RuleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_starting_line(line: &str) -> bool {
        let bytes = line.as_bytes();
        match bytes.first() {
            Some(&c @ (b'-' | b'*' | b'_')) => {
                bytes.len() >= 3 && bytes.iter().all(|&b| b == c)
            }
            _ => false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn add_line(&mut self, _line: &str) -> Feed {
        debug_assert!(!self.finished, "line fed to a finished rule");
        self.out.thematic_break();
        self.finished = true;
        Feed::Done
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn into_html(self) -> String {
        self.out.into_string()
    }
}
