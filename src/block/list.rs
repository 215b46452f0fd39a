//! Ordered, unordered and checklist lists.
//!
//! Nesting follows the blockquote pattern: a line indented by two spaces or
//! a tab is dedented once and either opens/feeds a child list inside the
//! current item or continues the item's text.

use crate::limits;
use crate::render::HtmlWriter;

use super::{Context, Feed};

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item`, `* item`, `+ item`
    Unordered,
    /// `1. item`
    Ordered,
    /// `- [ ] item`, `- [x] item`
    Checklist,
}

/// A line recognized as an item of some list kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Item number for ordered lists.
    pub number: Option<u32>,
    /// Checkbox state for checklists.
    pub checked: Option<bool>,
    /// Text after the marker.
    pub content: &'a str,
}

impl ListKind {
    /// Parse `line` as an item of this kind.
    pub fn parse_item(self, line: &str) -> Option<ListItem<'_>> {
        match self {
            ListKind::Unordered => {
                let bytes = line.as_bytes();
                if bytes.len() >= 2 && matches!(bytes[0], b'-' | b'*' | b'+') && bytes[1] == b' ' {
                    Some(ListItem {
                        number: None,
                        checked: None,
                        content: &line[2..],
                    })
                } else {
                    None
                }
            }
            ListKind::Ordered => {
                let digits = line.bytes().take_while(u8::is_ascii_digit).count();
                if digits == 0 || digits > limits::MAX_LIST_MARKER_DIGITS {
                    return None;
                }
                let content = line[digits..].strip_prefix(". ")?;
                let number = line[..digits].parse().ok()?;
                Some(ListItem {
                    number: Some(number),
                    checked: None,
                    content,
                })
            }
            ListKind::Checklist => {
                let rest = line.strip_prefix("- [")?;
                let checked = match rest.as_bytes().first()? {
                    b' ' => false,
                    b'x' | b'X' => true,
                    _ => return None,
                };
                let content = rest[1..].strip_prefix("] ")?;
                Some(ListItem {
                    number: None,
                    checked: Some(checked),
                    content,
                })
            }
        }
    }
}

/// List parser state for one nesting level.
#[derive(Debug)]
pub struct ListBlock {
    kind: ListKind,
    started: bool,
    finished: bool,
    item_open: bool,
    /// Nesting level, 1 for a top-level list.
    depth: usize,
    child: Option<Box<ListBlock>>,
    out: HtmlWriter,
}

impl ListBlock {
    pub fn new(kind: ListKind) -> Self {
        Self::at_depth(kind, 1)
    }

    fn at_depth(kind: ListKind, depth: usize) -> Self {
        Self {
            kind,
            started: false,
            finished: false,
            item_open: false,
            depth,
            child: None,
            out: HtmlWriter::new(),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed one line.
    ///
    /// An unindented line that is not an item of this list's kind closes the
    /// list and is handed back.
    pub fn add_line(&mut self, line: &str, cx: &Context<'_>) -> Feed {
        debug_assert!(!self.finished, "line fed to a finished list");

        if self.item_open {
            if let Some(inner) = dedent(line) {
                self.add_nested(inner, cx);
                return Feed::Continue;
            }
        }

        self.close_child(cx);
        match self.kind.parse_item(line) {
            Some(item) => {
                self.open_item(item, cx);
                Feed::Continue
            }
            None => {
                self.close();
                Feed::Handback
            }
        }
    }

    /// Close the list (and any nested list) at end of input.
    pub fn finish(&mut self, cx: &Context<'_>) {
        if !self.finished {
            self.close_child(cx);
            self.close();
        }
    }

    pub fn into_html(self) -> String {
        debug_assert!(self.child.is_none());
        self.out.into_string()
    }

    fn add_nested(&mut self, inner: &str, cx: &Context<'_>) {
        if let Some(child) = self.child.as_mut() {
            if child.add_line(inner, cx) == Feed::Continue {
                return;
            }
            self.flush_child();
        }

        let nested = if self.depth < limits::MAX_BLOCK_NESTING {
            cx.factory.list_kind(inner)
        } else {
            None
        };

        match nested {
            Some(kind) => {
                let mut child = Box::new(Self::at_depth(kind, self.depth + 1));
                let feed = child.add_line(inner, cx);
                debug_assert_eq!(feed, Feed::Continue);
                self.out.newline();
                self.child = Some(child);
            }
            None => {
                self.out.write_str(" ");
                self.out.write_str(&cx.inline.transform(inner.trim_start()));
            }
        }
    }

    fn open_item(&mut self, item: ListItem<'_>, cx: &Context<'_>) {
        if !self.started {
            match self.kind {
                ListKind::Unordered => self.out.ul_start(false),
                ListKind::Checklist => self.out.ul_start(true),
                ListKind::Ordered => self.out.ol_start(item.number),
            }
            self.started = true;
        }
        if self.item_open {
            self.out.li_end();
        }

        self.out.li_start();
        let content = cx.inline.transform(item.content);
        match item.checked {
            Some(checked) => {
                self.out.checkbox(checked);
                self.out.write_str(&content);
                self.out.checkbox_end();
            }
            None => self.out.write_str(&content),
        }
        self.item_open = true;
    }

    fn close_child(&mut self, cx: &Context<'_>) {
        if let Some(child) = self.child.as_mut() {
            child.finish(cx);
            self.flush_child();
        }
    }

    fn flush_child(&mut self) {
        if let Some(child) = self.child.take() {
            debug_assert!(child.finished);
            self.out.write_str(&child.into_html());
        }
    }

    fn close(&mut self) {
        if self.started {
            if self.item_open {
                self.out.li_end();
                self.item_open = false;
            }
            match self.kind {
                ListKind::Unordered | ListKind::Checklist => self.out.ul_end(),
                ListKind::Ordered => self.out.ol_end(),
            }
        }
        self.finished = true;
    }
}

/// Remove one indentation level (two spaces or a tab).
fn dedent(line: &str) -> Option<&str> {
    line.strip_prefix("  ").or_else(|| line.strip_prefix('\t'))
}
