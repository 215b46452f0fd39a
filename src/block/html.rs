//! Raw HTML blocks, passed through untouched until a blank line.

use crate::render::HtmlWriter;

use super::Feed;

#[derive(Debug, Default)]
pub struct HtmlBlock {
    finished: bool,
    out: HtmlWriter,
}

impl HtmlBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<` followed by a letter, `/` or `!`, after optional indentation.
    pub fn is_starting_line(line: &str) -> bool {
        let bytes = line.trim_start().as_bytes();
        bytes.len() >= 2
            && bytes[0] == b'<'
            && (bytes[1].is_ascii_alphabetic() || bytes[1] == b'/' || bytes[1] == b'!')
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn add_line(&mut self, line: &str) -> Feed {
        debug_assert!(!self.finished, "line fed to a finished html block");
        if line.trim().is_empty() {
            self.finished = true;
            return Feed::Done;
        }
        self.out.write_str(line);
        self.out.newline();
        Feed::Continue
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn into_html(self) -> String {
        self.out.into_string()
    }
}
