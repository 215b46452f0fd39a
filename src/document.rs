//! The document engine: drives block parsers over the lines of a document.
//!
//! At most one top-level block is active at a time. A line goes to the
//! active block if there is one, otherwise to a block opened for it by the
//! factory. When a block finishes its fragment is appended to the document
//! output. A line handed back by a finishing block is dispatched again.

use crate::Options;
use crate::block::{Block, BlockFactory, Context, Feed};
use crate::inline::LineTransformer;
use crate::render::HtmlWriter;

/// One document being rendered.
///
/// # Example
/// ```
/// use blockmark::{Document, Options};
///
/// let mut doc = Document::new(&Options::default());
/// doc.push_line("> quoted");
/// doc.push_line("plain");
/// assert_eq!(
///     doc.finish(),
///     "<blockquote>\nquoted<br />\n</blockquote>\n<p>plain</p>\n"
/// );
/// ```
#[derive(Debug)]
pub struct Document {
    factory: BlockFactory,
    inline: LineTransformer,
    active: Option<Block>,
    out: HtmlWriter,
}

impl Document {
    pub fn new(options: &Options) -> Self {
        Self::with_writer(options, HtmlWriter::new())
    }

    /// Render into an existing writer, keeping anything already in it.
    pub fn with_writer(options: &Options, out: HtmlWriter) -> Self {
        Self {
            factory: BlockFactory::new(options.capabilities),
            inline: LineTransformer::new(options.capabilities),
            active: None,
            out,
        }
    }

    /// Feed the next line. A trailing `\n` or `\r\n` is stripped.
    pub fn push_line(&mut self, line: &str) {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        loop {
            let fresh = self.active.is_none();
            if fresh {
                match self.factory.open(line) {
                    Some(block) => {
                        trace!(block = block.name(), "block opened");
                        self.active = Some(block);
                    }
                    // Blank line between blocks.
                    None => return,
                }
            }

            let Some(block) = self.active.as_mut() else {
                return;
            };
            let cx = Context::new(&self.inline, &self.factory);
            match block.add_line(line, &cx) {
                Feed::Continue => return,
                Feed::Done => {
                    self.flush();
                    return;
                }
                Feed::Handback => {
                    self.flush();
                    debug_assert!(!fresh, "block handed back its own starting line");
                    if fresh {
                        return;
                    }
                    trace!("line handed back");
                }
            }
        }
    }

    /// Force-finish the active block and return the rendered document.
    pub fn finish(mut self) -> String {
        if let Some(mut block) = self.active.take() {
            trace!(block = block.name(), "block closed at end of input");
            let cx = Context::new(&self.inline, &self.factory);
            block.finish(&cx);
            self.out.write_str(&block.into_html());
        }
        self.out.into_string()
    }

    /// Whether a block is still open.
    pub fn has_open_block(&self) -> bool {
        self.active.is_some()
    }

    fn flush(&mut self) {
        if let Some(block) = self.active.take() {
            debug_assert!(block.is_finished());
            trace!(block = block.name(), "block finished");
            self.out.write_str(&block.into_html());
        }
    }
}
