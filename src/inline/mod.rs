//! Line-level inline transformation.
//!
//! A line goes through a fixed sequence of substitution passes:
//! 1. Code spans (content escaped and shielded from later passes)
//! 2. Strong (`**`, `__`), then strikethrough (`~~`)
//! 3. Emphasis (`*`, `_`)
//! 4. Images, then links
//! 5. Hard line break from trailing spaces
//!
//! Running text is not escaped, so inline HTML passes through untouched.
//! The transformation is not idempotent: never feed it its own output.

mod code_span;
mod emphasis;
mod links;

pub use code_span::{Segment, Segments, split_code_spans};

use std::borrow::Cow;

use crate::capability::Capabilities;
use crate::render::HtmlWriter;

/// Anything that can rewrite one line of inline Markdown into HTML.
///
/// Block parsers receive this as an injected capability, so tests can
/// substitute a closure for the real [`LineTransformer`].
pub trait InlineTransform {
    fn transform(&self, line: &str) -> String;
}

impl<F> InlineTransform for F
where
    F: Fn(&str) -> String,
{
    fn transform(&self, line: &str) -> String {
        self(line)
    }
}

/// The inline substitution pipeline, gated by line capabilities.
#[derive(Debug, Clone, Copy)]
pub struct LineTransformer {
    capabilities: Capabilities,
}

impl Default for LineTransformer {
    fn default() -> Self {
        Self::new(Capabilities::all())
    }
}

impl LineTransformer {
    /// Create a transformer; block capabilities in the set are ignored.
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities: capabilities.line_only(),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Transform one line.
    ///
    /// # Example
    /// ```
    /// use blockmark::LineTransformer;
    ///
    /// let t = LineTransformer::default();
    /// assert_eq!(t.transform("**a** `b*`"), "<strong>a</strong> <code>b*</code>");
    /// assert_eq!(t.transform("plain"), "plain");
    /// ```
    pub fn transform(&self, line: &str) -> String {
        if self.capabilities.is_empty() {
            return line.to_owned();
        }

        let mut writer = HtmlWriter::with_capacity_for(line.len());
        if self.capabilities.contains(Capabilities::INLINE_CODE) {
            for segment in split_code_spans(line) {
                match segment {
                    Segment::Text(text) => writer.write_str(&self.transform_text(text)),
                    Segment::Code(code) => writer.inline_code(code),
                }
            }
        } else {
            writer.write_str(&self.transform_text(line));
        }

        let mut out = writer.into_string();
        if self.capabilities.contains(Capabilities::BREAK_LINE) {
            apply_break_line(&mut out);
        }
        out
    }

    /// Run the delimiter and link passes over a text segment.
    fn transform_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let caps = self.capabilities;
        let mut current = Cow::Borrowed(text);

        if caps.contains(Capabilities::STRONG) {
            for delim in &emphasis::STRONG {
                if let Some(next) = emphasis::replace_pairs(&current, delim) {
                    current = Cow::Owned(next);
                }
            }
        }
        if caps.contains(Capabilities::STRIKETHROUGH) {
            if let Some(next) = emphasis::replace_pairs(&current, &emphasis::STRIKETHROUGH) {
                current = Cow::Owned(next);
            }
        }
        if caps.contains(Capabilities::EMPHASIS) {
            for delim in &emphasis::EMPHASIS {
                if let Some(next) = emphasis::replace_pairs(&current, delim) {
                    current = Cow::Owned(next);
                }
            }
        }
        if caps.contains(Capabilities::IMAGE) {
            if let Some(next) = links::replace_images(&current) {
                current = Cow::Owned(next);
            }
        }
        if caps.contains(Capabilities::LINK) {
            if let Some(next) = links::replace_links(&current) {
                current = Cow::Owned(next);
            }
        }
        current
    }
}

impl InlineTransform for LineTransformer {
    fn transform(&self, line: &str) -> String {
        LineTransformer::transform(self, line)
    }
}

/// Two or more trailing spaces after some content become `<br />`.
fn apply_break_line(line: &mut String) {
    let content_len = line.trim_end_matches(' ').len();
    if content_len > 0 && line.len() - content_len >= 2 {
        line.truncate(content_len);
        line.push_str("<br />");
    }
}
