//! Backtick code fences.
//!
//! Content lines are escaped verbatim and never inline-transformed.

use crate::render::HtmlWriter;

use super::Feed;

/// Opening and closing fence.
const FENCE: &str = "```";

#[derive(Debug, Default)]
pub struct CodeFenceBlock {
    started: bool,
    finished: bool,
    out: HtmlWriter,
}

impl CodeFenceBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_starting_line(line: &str) -> bool {
        line.starts_with(FENCE)
    }

    /// Language named by an opening fence line: the first word of its info string.
    pub fn language(line: &str) -> Option<&str> {
        line.strip_prefix(FENCE)?.split_whitespace().next()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn add_line(&mut self, line: &str) -> Feed {
        debug_assert!(!self.finished, "line fed to a finished code fence");

        if !self.started {
            self.out.code_block_start(Self::language(line));
            self.started = true;
            return Feed::Continue;
        }

        if line.starts_with(FENCE) {
            self.close();
            return Feed::Done;
        }

        self.out.write_escaped_text(line);
        self.out.newline();
        Feed::Continue
    }

    /// Close a fence left open at end of input.
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
            self.out.code_block_end();
        }
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language() {
        assert_eq!(CodeFenceBlock::language("```rust"), Some("rust"));
        assert_eq!(CodeFenceBlock::language("``` js title=x"), Some("js"));
        assert_eq!(CodeFenceBlock::language("```"), None);
        assert_eq!(CodeFenceBlock::language("text"), None);
    }

    #[test]
    fn test_content_is_escaped_not_transformed() {
        let mut block = CodeFenceBlock::new();
        for line in ["```html", "<b>**x**</b>", "", "```"] {
            let _ = block.add_line(line);
        }
        assert!(block.is_finished());
        assert_eq!(
            block.into_html(),
            "<pre><code class=\"language-html\">&lt;b&gt;**x**&lt;/b&gt;\n\n</code></pre>\n"
        );
    }

    #[test]
    fn test_unclosed_fence() {
        let mut block = CodeFenceBlock::new();
        let _ = block.add_line("```");
        let _ = block.add_line("a");
        block.finish();
        assert_eq!(block.into_html(), "<pre><code>a\n</code></pre>\n");
    }
}
