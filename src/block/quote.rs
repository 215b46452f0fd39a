//! Blockquotes with unbounded nesting.
//!
//! Each nesting level is one [`QuoteBlock`]. A level strips exactly one
//! `>` marker (plus one following space) and either renders the remaining
//! content or hands it to its child, which handles the next level down.

use crate::limits;
use crate::render::HtmlWriter;

use super::{Context, Feed};

/// The quote marker.
const MARKER: char = '>';

/// One level of a (possibly nested) blockquote.
#[derive(Debug)]
pub struct QuoteBlock {
    started: bool,
    finished: bool,
    /// Nesting level, 1 for the outermost quote.
    depth: usize,
    /// The active deeper level, if any. Released as soon as it finishes.
    child: Option<Box<QuoteBlock>>,
    out: HtmlWriter,
}

impl Default for QuoteBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteBlock {
    pub fn new() -> Self {
        Self::at_depth(1)
    }

    fn at_depth(depth: usize) -> Self {
        Self {
            started: false,
            finished: false,
            depth,
            child: None,
            out: HtmlWriter::new(),
        }
    }

    /// A quote starts with `>`.
    pub fn is_starting_line(line: &str) -> bool {
        line.starts_with(MARKER)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed one line to this level.
    ///
    /// A line without the marker terminates this level (and every active
    /// level below it) and is handed back unrendered. Blank lines included.
    pub fn add_line(&mut self, line: &str, cx: &Context<'_>) -> Feed {
        debug_assert!(!self.finished, "line fed to a finished blockquote");
        self.ensure_started();

        if !Self::is_starting_line(line) {
            self.terminate(line, cx);
            return Feed::Handback;
        }

        let content = dequote(line);

        if let Some(child) = self.child.as_mut() {
            if child.add_line(content, cx) == Feed::Continue {
                return Feed::Continue;
            }
            // The child closed on `content`, which belongs to this level.
            self.flush_child();
        }

        if Self::is_starting_line(content) && self.depth < limits::MAX_BLOCK_NESTING {
            let mut child = Box::new(Self::at_depth(self.depth + 1));
            let feed = child.add_line(content, cx);
            debug_assert_eq!(feed, Feed::Continue);
            trace!(depth = self.depth + 1, "nested blockquote opened");
            self.child = Some(child);
        } else {
            self.out.write_str(&cx.inline.transform(content));
            self.out.line_break();
        }
        Feed::Continue
    }

    /// Close this level as if an empty line had been fed.
    pub fn finish(&mut self, cx: &Context<'_>) {
        if !self.finished {
            self.ensure_started();
            self.terminate("", cx);
        }
    }

    pub fn into_html(self) -> String {
        debug_assert!(self.child.is_none());
        self.out.into_string()
    }

    fn ensure_started(&mut self) {
        if !self.started {
            self.out.blockquote_start();
            self.started = true;
        }
    }

    /// Forward the terminator to the active child, then close this level.
    fn terminate(&mut self, line: &str, cx: &Context<'_>) {
        if let Some(child) = self.child.as_mut() {
            let feed = child.add_line(line, cx);
            debug_assert_eq!(feed, Feed::Handback);
            self.flush_child();
        }
        self.out.blockquote_end();
        self.finished = true;
        trace!(depth = self.depth, "blockquote closed");
    }

    /// Append the finished child's fragment exactly once and release it.
    fn flush_child(&mut self) {
        if let Some(child) = self.child.take() {
            debug_assert!(child.finished);
            self.out.write_str(&child.into_html());
        }
    }
}

/// Strip one quote level: the marker plus one following space, if present.
fn dequote(line: &str) -> &str {
    let rest = &line[MARKER.len_utf8()..];
    rest.strip_prefix(' ').unwrap_or(rest)
}
