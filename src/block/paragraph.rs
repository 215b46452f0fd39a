//! Paragraphs: runs of consecutive running-text lines.

use crate::render::HtmlWriter;

use super::{Context, Feed};

#[derive(Debug, Default)]
pub struct ParagraphBlock {
    started: bool,
    finished: bool,
    out: HtmlWriter,
}

impl ParagraphBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed one line.
    ///
    /// A blank line ends the paragraph and is consumed. Once the paragraph
    /// has text, a line that starts another block ends it and is handed back.
    pub fn add_line(&mut self, line: &str, cx: &Context<'_>) -> Feed {
        debug_assert!(!self.finished, "line fed to a finished paragraph");

        if line.trim().is_empty() {
            self.close();
            return Feed::Done;
        }

        if self.started {
            if cx.factory.classify(line).is_some() {
                self.close();
                return Feed::Handback;
            }
            self.out.write_str(" ");
        } else {
            self.out.paragraph_start();
            self.started = true;
        }
        self.out.write_str(&cx.inline.transform(line.trim_start()));
        Feed::Continue
    }

    pub fn finish(&mut self) {
        if !self.finished {
            self.close();
        }
    }

    pub fn into_html(self) -> String {
        self.out.into_string()
    }

    fn close(&mut self) {
        if self.started {
            self.out.paragraph_end();
        }
        self.finished = true;
    }
}
