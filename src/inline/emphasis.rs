//! Delimiter pair substitution for strong, emphasis and strikethrough.
//!
//! Each pass scans left to right for an opening marker and the next
//! occurrence of the same marker. Pairs that do not qualify are skipped one
//! byte at a time, so an unmatched opener is left as literal text. Markers
//! inside a link destination (`](...)`) are never touched.

use std::ops::Range;

use memchr::memchr;
use memchr::memmem::{self, Finder};
use smallvec::SmallVec;

/// A symmetric inline delimiter and the tags it becomes.
#[derive(Debug, Clone, Copy)]
pub struct Delimiter {
    /// Marker text, e.g. `**`.
    pub marker: &'static str,
    /// Opening HTML tag.
    pub open: &'static str,
    /// Closing HTML tag.
    pub close: &'static str,
    /// Whether the pair may touch alphanumerics on its outer sides.
    pub intraword: bool,
}

/// `**strong**` then `__strong__`.
pub const STRONG: [Delimiter; 2] = [
    Delimiter {
        marker: "**",
        open: "<strong>",
        close: "</strong>",
        intraword: true,
    },
    Delimiter {
        marker: "__",
        open: "<strong>",
        close: "</strong>",
        intraword: false,
    },
];

/// `~~struck~~`
pub const STRIKETHROUGH: Delimiter = Delimiter {
    marker: "~~",
    open: "<s>",
    close: "</s>",
    intraword: true,
};

/// `*emphasis*` then `_emphasis_`.
pub const EMPHASIS: [Delimiter; 2] = [
    Delimiter {
        marker: "*",
        open: "<em>",
        close: "</em>",
        intraword: true,
    },
    Delimiter {
        marker: "_",
        open: "<em>",
        close: "</em>",
        intraword: false,
    },
];

/// Replace every qualifying marker pair in `text`.
///
/// Returns `None` when nothing was replaced.
pub fn replace_pairs(text: &str, delim: &Delimiter) -> Option<String> {
    let bytes = text.as_bytes();
    let marker_len = delim.marker.len();
    let finder = Finder::new(delim.marker.as_bytes());

    let shielded = destinations(bytes);

    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut search = 0;

    while let Some(open) = find_unshielded(&finder, bytes, search, &shielded) {
        let content_start = open + marker_len;
        let Some(close) = find_unshielded(&finder, bytes, content_start, &shielded) else {
            break;
        };
        let after = close + marker_len;

        if !qualifies(bytes, open, content_start, close, after, delim) {
            search = open + 1;
            continue;
        }

        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
        buf.push_str(&text[copied..open]);
        buf.push_str(delim.open);
        buf.push_str(&text[content_start..close]);
        buf.push_str(delim.close);
        copied = after;
        search = after;
    }

    let mut buf = out?;
    buf.push_str(&text[copied..]);
    Some(buf)
}

/// Byte ranges of `(...)` link destinations that follow a `]`.
fn destinations(bytes: &[u8]) -> SmallVec<[Range<usize>; 4]> {
    let mut spans = SmallVec::new();
    let mut pos = 0;
    for bracket in memmem::find_iter(bytes, b"](") {
        if bracket < pos {
            continue;
        }
        let paren = bracket + 1;
        let Some(end) = memchr(b')', &bytes[paren..]).map(|i| paren + i + 1) else {
            break;
        };
        spans.push(paren..end);
        pos = end;
    }
    spans
}

/// Next marker at or after `from` that is not inside a shielded range.
fn find_unshielded(
    finder: &Finder<'_>,
    bytes: &[u8],
    mut from: usize,
    shielded: &[Range<usize>],
) -> Option<usize> {
    loop {
        let found = finder.find(&bytes[from..])? + from;
        match shielded.iter().find(|span| span.contains(&found)) {
            Some(span) => from = span.end,
            None => return Some(found),
        }
    }
}

/// Content must be non-empty, must not start or end with whitespace or the
/// marker byte, and non-intraword markers need non-alphanumeric neighbours.
/// A one-byte marker must not touch another copy of itself, so `**x**` is
/// never read as emphasis around inner stars.
fn qualifies(
    bytes: &[u8],
    open: usize,
    content_start: usize,
    close: usize,
    after: usize,
    delim: &Delimiter,
) -> bool {
    if close == content_start {
        return false;
    }
    let marker_byte = delim.marker.as_bytes()[0];
    let first = bytes[content_start];
    let last = bytes[close - 1];
    if first.is_ascii_whitespace() || last.is_ascii_whitespace() {
        return false;
    }
    if first == marker_byte || last == marker_byte {
        return false;
    }
    if delim.marker.len() == 1 {
        if open > 0 && bytes[open - 1] == marker_byte {
            return false;
        }
        if bytes.get(after) == Some(&marker_byte) {
            return false;
        }
    }
    if !delim.intraword {
        if open > 0 && bytes[open - 1].is_ascii_alphanumeric() {
            return false;
        }
        if after < bytes.len() && bytes[after].is_ascii_alphanumeric() {
            return false;
        }
    }
    true
}
