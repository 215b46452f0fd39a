//! HTML output writer.
//!
//! Every block parser accumulates its fragment in its own [`HtmlWriter`];
//! the document engine appends finished fragments to the document writer.

/// Append-only HTML buffer with tag helpers.
///
/// # Example
/// ```
/// use blockmark::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.paragraph_start();
/// writer.write_escaped_text("Hello <World>");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "<p>Hello &lt;World&gt;</p>\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with a small default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(128),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical HTML is ~1.25x input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Wrap an existing buffer, keeping its allocation.
    #[inline]
    pub fn from_buffer(mut out: String) -> Self {
        out.clear();
        Self { out }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text with HTML escaping (for text content).
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        html_escape::encode_text_to_string(text, &mut self.out);
    }

    /// Write a double-quoted attribute value with escaping.
    #[inline]
    pub fn write_escaped_attr(&mut self, attr: &str) {
        html_escape::encode_double_quoted_attribute_to_string(attr, &mut self.out);
    }

    /// Write a decimal number.
    #[inline]
    pub fn write_u32(&mut self, n: u32) {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.out, "{n}");
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Block elements ---

    /// `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// `</p>\n`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>\n");
    }

    /// `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// `</hN>\n`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("</h");
        self.out.push(char::from(b'0' + level));
        self.write_str(">\n");
    }

    /// Code block start with optional language class.
    #[inline]
    pub fn code_block_start(&mut self, lang: Option<&str>) {
        match lang {
            Some(l) if !l.is_empty() => {
                self.write_str("<pre><code class=\"language-");
                self.write_escaped_attr(l);
                self.write_str("\">");
            }
            _ => self.write_str("<pre><code>"),
        }
    }

    /// `</code></pre>\n`
    #[inline]
    pub fn code_block_end(&mut self) {
        self.write_str("</code></pre>\n");
    }

    /// `<hr />\n`
    #[inline]
    pub fn thematic_break(&mut self) {
        self.write_str("<hr />\n");
    }

    /// `<blockquote>\n`
    #[inline]
    pub fn blockquote_start(&mut self) {
        self.write_str("<blockquote>\n");
    }

    /// `</blockquote>\n`
    #[inline]
    pub fn blockquote_end(&mut self) {
        self.write_str("</blockquote>\n");
    }

    /// `<br />\n`
    #[inline]
    pub fn line_break(&mut self) {
        self.write_str("<br />\n");
    }

    /// `<ul>\n`, or the checklist variant.
    #[inline]
    pub fn ul_start(&mut self, checklist: bool) {
        if checklist {
            self.write_str("<ul class=\"checklist\">\n");
        } else {
            self.write_str("<ul>\n");
        }
    }

    /// `</ul>\n`
    #[inline]
    pub fn ul_end(&mut self) {
        self.write_str("</ul>\n");
    }

    /// `<ol>\n` or `<ol start="N">\n`
    #[inline]
    pub fn ol_start(&mut self, start: Option<u32>) {
        match start {
            Some(n) if n != 1 => {
                self.write_str("<ol start=\"");
                self.write_u32(n);
                self.write_str("\">\n");
            }
            _ => self.write_str("<ol>\n"),
        }
    }

    /// `</ol>\n`
    #[inline]
    pub fn ol_end(&mut self) {
        self.write_str("</ol>\n");
    }

    /// `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.write_str("<li>");
    }

    /// `</li>\n`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>\n");
    }

    /// Checklist item prefix: label plus a checkbox.
    #[inline]
    pub fn checkbox(&mut self, checked: bool) {
        if checked {
            self.write_str("<label><input type=\"checkbox\" checked=\"checked\"/> ");
        } else {
            self.write_str("<label><input type=\"checkbox\"/> ");
        }
    }

    /// `</label>`
    #[inline]
    pub fn checkbox_end(&mut self) {
        self.write_str("</label>");
    }

    // --- Tables ---

    /// `<table>\n`
    #[inline]
    pub fn table_start(&mut self) {
        self.write_str("<table>\n");
    }

    /// `</table>\n`
    #[inline]
    pub fn table_end(&mut self) {
        self.write_str("</table>\n");
    }

    /// `<thead>\n`, `<tbody>\n` or `<tfoot>\n`.
    #[inline]
    pub fn table_section_start(&mut self, tag: &'static str) {
        self.out.push('<');
        self.write_str(tag);
        self.write_str(">\n");
    }

    /// Matching close for [`table_section_start`](Self::table_section_start).
    #[inline]
    pub fn table_section_end(&mut self, tag: &'static str) {
        self.write_str("</");
        self.write_str(tag);
        self.write_str(">\n");
    }

    /// `<tr>\n`
    #[inline]
    pub fn table_row_start(&mut self) {
        self.write_str("<tr>\n");
    }

    /// `</tr>\n`
    #[inline]
    pub fn table_row_end(&mut self) {
        self.write_str("</tr>\n");
    }

    /// A complete `<th>` or `<td>` cell with already-transformed content.
    #[inline]
    pub fn table_cell(&mut self, header: bool, content: &str) {
        let tag = if header { "th" } else { "td" };
        self.out.push('<');
        self.write_str(tag);
        self.out.push('>');
        self.write_str(content);
        self.write_str("</");
        self.write_str(tag);
        self.write_str(">\n");
    }

    // --- Inline elements ---

    /// `<code>escaped_content</code>`
    #[inline]
    pub fn inline_code(&mut self, content: &str) {
        self.write_str("<code>");
        self.write_escaped_text(content);
        self.write_str("</code>");
    }

    /// `<a href="url">` or `<a href="url" title="title">`
    #[inline]
    pub fn link_start(&mut self, url: &str, title: Option<&str>) {
        self.write_str("<a href=\"");
        self.write_escaped_attr(url);
        self.write_str("\"");
        if let Some(t) = title {
            self.write_str(" title=\"");
            self.write_escaped_attr(t);
            self.write_str("\"");
        }
        self.write_str(">");
    }

    /// `</a>`
    #[inline]
    pub fn link_end(&mut self) {
        self.write_str("</a>");
    }

    /// `<img src="src" alt="alt" />`
    #[inline]
    pub fn image(&mut self, src: &str, alt: &str) {
        self.write_str("<img src=\"");
        self.write_escaped_attr(src);
        self.write_str("\" alt=\"");
        self.write_escaped_attr(alt);
        self.write_str("\" />");
    }
}
