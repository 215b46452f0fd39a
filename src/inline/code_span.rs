//! Code span splitting.
//!
//! Code spans have highest precedence among inline elements: the line is
//! cut into text and code segments first, and only text segments see the
//! later substitution passes.

use memchr::memchr;
use smallvec::SmallVec;

/// A piece of a line after code span splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Running text, still subject to inline substitutions.
    Text(&'a str),
    /// Content between a pair of backticks (without the backticks).
    Code(&'a str),
}

/// Segments of one line; most lines have at most a couple of code spans.
pub type Segments<'a> = SmallVec<[Segment<'a>; 4]>;

/// Split a line on matched backtick pairs.
///
/// An opening backtick without a closing one stays in the text.
pub fn split_code_spans(line: &str) -> Segments<'_> {
    let bytes = line.as_bytes();
    let mut segments = Segments::new();
    let mut pos = 0;

    while let Some(open) = memchr(b'`', &bytes[pos..]).map(|i| pos + i) {
        let Some(close) = memchr(b'`', &bytes[open + 1..]).map(|i| open + 1 + i) else {
            break;
        };
        if open > pos {
            segments.push(Segment::Text(&line[pos..open]));
        }
        segments.push(Segment::Code(&line[open + 1..close]));
        pos = close + 1;
    }

    if pos < line.len() {
        segments.push(Segment::Text(&line[pos..]));
    }
    segments
}
