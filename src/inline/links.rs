//! Link and image substitution.
//!
//! Handles:
//! - Inline links: `[text](url)` and `[text](url "title")`
//! - Images: `![alt](src)`
//!
//! The closing `]` must be followed directly by `(`. Anything that does not
//! form a complete target is left untouched.

use memchr::{memchr, memmem};

use crate::render::HtmlWriter;

/// Byte positions of one `[label](destination)` construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Target {
    /// Start of the construct (`[` or `!`).
    start: usize,
    label_start: usize,
    label_end: usize,
    dest_start: usize,
    dest_end: usize,
    /// One past the closing `)`.
    end: usize,
}

/// Parse a target whose `[` is at `open`.
fn parse_target(bytes: &[u8], start: usize, open: usize) -> Option<Target> {
    let label_start = open + 1;
    let label_end = memchr(b']', &bytes[label_start..])? + label_start;
    if bytes.get(label_end + 1) != Some(&b'(') {
        return None;
    }
    let dest_start = label_end + 2;
    let dest_end = memchr(b')', &bytes[dest_start..])? + dest_start;
    Some(Target {
        start,
        label_start,
        label_end,
        dest_start,
        dest_end,
        end: dest_end + 1,
    })
}

/// Split a destination into URL and optional quoted title.
fn split_title(dest: &str) -> (&str, Option<&str>) {
    let dest = dest.trim();
    if let Some(stripped) = dest.strip_suffix('"') {
        if let Some(quote) = stripped.rfind(" \"") {
            return (stripped[..quote].trim_end(), Some(&stripped[quote + 2..]));
        }
    }
    (dest, None)
}

/// Replace `![alt](src)` with `<img>` tags.
pub fn replace_images(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let finder = memmem::Finder::new(b"![");
    let mut out: Option<HtmlWriter> = None;
    let mut copied = 0;
    let mut search = 0;

    while let Some(bang) = finder.find(&bytes[search..]).map(|i| search + i) {
        let Some(target) = parse_target(bytes, bang, bang + 1) else {
            search = bang + 1;
            continue;
        };
        let writer = out.get_or_insert_with(|| HtmlWriter::with_capacity_for(text.len()));
        writer.write_str(&text[copied..target.start]);
        let (src, _) = split_title(&text[target.dest_start..target.dest_end]);
        writer.image(src, &text[target.label_start..target.label_end]);
        copied = target.end;
        search = target.end;
    }

    let mut writer = out?;
    writer.write_str(&text[copied..]);
    Some(writer.into_string())
}

/// Replace `[text](url)` with anchors.
pub fn replace_links(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out: Option<HtmlWriter> = None;
    let mut copied = 0;
    let mut search = 0;

    while let Some(open) = memchr(b'[', &bytes[search..]).map(|i| search + i) {
        let Some(target) = parse_target(bytes, open, open) else {
            search = open + 1;
            continue;
        };
        let writer = out.get_or_insert_with(|| HtmlWriter::with_capacity_for(text.len()));
        writer.write_str(&text[copied..target.start]);
        let (url, title) = split_title(&text[target.dest_start..target.dest_end]);
        writer.link_start(url, title);
        writer.write_str(&text[target.label_start..target.label_end]);
        writer.link_end();
        copied = target.end;
        search = target.end;
    }

    let mut writer = out?;
    writer.write_str(&text[copied..]);
    Some(writer.into_string())
}
