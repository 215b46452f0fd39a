//! blockmark: line-oriented Markdown to HTML block engine
//!
//! A document is consumed one line at a time. Each line is classified into
//! a block kind (blockquote, table, list, paragraph, ...) and fed to a
//! block parser, which accumulates its own HTML fragment until it finishes.
//! Blockquotes and lists nest by owning a child parser of the same kind.
//!
//! # Design Principles
//! - Closed set of block kinds, dispatched through one enum
//! - Fixed classification priority, gated by per-document capabilities
//! - Total: every input renders to some HTML, unterminated blocks are closed
//! - Inline transformation injected into block parsers, never constructed by them

// Internal logging. Expands to nothing unless the `trace` feature is on.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        ::tracing::trace!($($arg)*);
    };
}

pub mod block;
pub mod capability;
pub mod document;
pub mod inline;
pub mod limits;
pub mod render;

// Re-export primary types
pub use block::{Block, BlockFactory, BlockKind, Context, Feed};
pub use capability::Capabilities;
pub use document::Document;
pub use inline::{InlineTransform, LineTransformer};
pub use render::HtmlWriter;

/// Parsing/rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Enabled block and line capabilities. Everything by default.
    pub capabilities: Capabilities,
}

impl Options {
    /// Enable `capability` in addition to the current set.
    #[must_use]
    pub fn with(mut self, capability: Capabilities) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Disable `capability`.
    #[must_use]
    pub fn without(mut self, capability: Capabilities) -> Self {
        self.capabilities.remove(capability);
        self
    }
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = blockmark::to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    render(input, options, HtmlWriter::with_capacity_for(input.len()))
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its allocation is reused.
pub fn to_html_into(input: &str, out: &mut String) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML into a provided buffer with options.
pub fn to_html_into_with_options(input: &str, out: &mut String, options: &Options) {
    let mut buffer = std::mem::take(out);
    buffer.reserve(input.len() + input.len() / 4);
    *out = render(input, options, HtmlWriter::from_buffer(buffer));
}

fn render(input: &str, options: &Options, out: HtmlWriter) -> String {
    let mut document = Document::with_writer(options, out);
    for line in input.lines() {
        document.push_line(line);
    }
    document.finish()
}
