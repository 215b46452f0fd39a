//! Block-level parsers.
//!
//! The block layer is line-oriented. Every block kind is a variant of the
//! closed [`Block`] enum and follows the same contract:
//! - created by [`BlockFactory`] when a line satisfies its starting predicate
//! - fed lines through `add_line` until it reports a finished [`Feed`]
//! - force-closed with `finish` at end of input
//! - consumed once with `into_html`
//!
//! Container blocks (blockquotes, lists) delegate deeper nesting levels to
//! an exclusively owned child of the same kind.

mod code_fence;
mod html;
mod leaf;
mod list;
mod paragraph;
mod quote;
mod table;

pub use code_fence::CodeFenceBlock;
pub use html::HtmlBlock;
pub use leaf::{HeadingBlock, RuleBlock};
pub use list::{ListBlock, ListItem, ListKind};
pub use paragraph::ParagraphBlock;
pub use quote::QuoteBlock;
pub use table::{SectionRole, TableBlock};

use crate::capability::Capabilities;
use crate::inline::InlineTransform;

/// Outcome of feeding one line to a block parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Feed {
    /// Line absorbed; the block is still open.
    Continue,
    /// Line absorbed; the block is finished.
    Done,
    /// The block finished without rendering the line. The caller must
    /// dispatch the same line elsewhere.
    Handback,
}

impl Feed {
    #[inline]
    pub fn is_finished(self) -> bool {
        !matches!(self, Feed::Continue)
    }
}

/// Capabilities injected into block parsers on every call.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Inline transformation applied to literal content.
    pub inline: &'a dyn InlineTransform,
    /// Starting-line classification, used by paragraphs to detect
    /// interruptions and by lists to open nested lists.
    pub factory: &'a BlockFactory,
}

impl<'a> Context<'a> {
    pub fn new(inline: &'a dyn InlineTransform, factory: &'a BlockFactory) -> Self {
        Self { inline, factory }
    }
}

/// Block kinds that have a starting-line predicate.
///
/// Paragraphs are absent: a line no predicate claims is paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    CodeFence,
    Heading,
    HorizontalRule,
    Quote,
    Table,
    Checklist,
    OrderedList,
    UnorderedList,
    Html,
}

impl BlockKind {
    /// Classification order, most specific marker first.
    pub const PRIORITY: [BlockKind; 9] = [
        BlockKind::CodeFence,
        BlockKind::Heading,
        BlockKind::HorizontalRule,
        BlockKind::Quote,
        BlockKind::Table,
        BlockKind::Checklist,
        BlockKind::OrderedList,
        BlockKind::UnorderedList,
        BlockKind::Html,
    ];

    /// The capability that gates this kind.
    pub const fn capability(self) -> Capabilities {
        match self {
            BlockKind::CodeFence => Capabilities::CODE_FENCE,
            BlockKind::Heading => Capabilities::HEADING,
            BlockKind::HorizontalRule => Capabilities::HORIZONTAL_RULE,
            BlockKind::Quote => Capabilities::QUOTE,
            BlockKind::Table => Capabilities::TABLE,
            BlockKind::Checklist => Capabilities::CHECKLIST,
            BlockKind::OrderedList => Capabilities::ORDERED_LIST,
            BlockKind::UnorderedList => Capabilities::UNORDERED_LIST,
            BlockKind::Html => Capabilities::HTML_BLOCK,
        }
    }

    /// The starting-line predicate of this kind.
    pub fn is_starting_line(self, line: &str) -> bool {
        match self {
            BlockKind::CodeFence => CodeFenceBlock::is_starting_line(line),
            BlockKind::Heading => HeadingBlock::is_starting_line(line),
            BlockKind::HorizontalRule => RuleBlock::is_starting_line(line),
            BlockKind::Quote => QuoteBlock::is_starting_line(line),
            BlockKind::Table => TableBlock::is_starting_line(line),
            BlockKind::Checklist => ListKind::Checklist.parse_item(line).is_some(),
            BlockKind::OrderedList => ListKind::Ordered.parse_item(line).is_some(),
            BlockKind::UnorderedList => ListKind::Unordered.parse_item(line).is_some(),
            BlockKind::Html => HtmlBlock::is_starting_line(line),
        }
    }
}

/// Decides which block parser a line starts, honoring enabled capabilities.
#[derive(Debug, Clone, Copy)]
pub struct BlockFactory {
    capabilities: Capabilities,
}

impl Default for BlockFactory {
    fn default() -> Self {
        Self::new(Capabilities::all())
    }
}

impl BlockFactory {
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Classify a line. `None` means ordinary running text (or blank).
    ///
    /// Disabled kinds are skipped without consulting their predicate.
    pub fn classify(&self, line: &str) -> Option<BlockKind> {
        BlockKind::PRIORITY.into_iter().find(|kind| {
            self.capabilities.contains(kind.capability()) && kind.is_starting_line(line)
        })
    }

    /// Construct an empty parser for `kind`.
    pub fn start(&self, kind: BlockKind) -> Block {
        match kind {
            BlockKind::CodeFence => Block::CodeFence(CodeFenceBlock::new()),
            BlockKind::Heading => Block::Heading(HeadingBlock::new()),
            BlockKind::HorizontalRule => Block::Rule(RuleBlock::new()),
            BlockKind::Quote => Block::Quote(QuoteBlock::new()),
            BlockKind::Table => Block::Table(TableBlock::new()),
            BlockKind::Checklist => Block::List(ListBlock::new(ListKind::Checklist)),
            BlockKind::OrderedList => Block::List(ListBlock::new(ListKind::Ordered)),
            BlockKind::UnorderedList => Block::List(ListBlock::new(ListKind::Unordered)),
            BlockKind::Html => Block::Html(HtmlBlock::new()),
        }
    }

    /// The parser a top-level line should be fed to, if any.
    ///
    /// Classified lines get their block; other non-blank lines open an
    /// implicit paragraph; blank lines open nothing.
    pub fn open(&self, line: &str) -> Option<Block> {
        match self.classify(line) {
            Some(kind) => Some(self.start(kind)),
            None if !line.trim().is_empty() => Some(Block::Paragraph(ParagraphBlock::new())),
            None => None,
        }
    }

    /// The list kind a line starts, if list kinds are enabled for it.
    pub fn list_kind(&self, line: &str) -> Option<ListKind> {
        const LIST_KINDS: [(BlockKind, ListKind); 3] = [
            (BlockKind::Checklist, ListKind::Checklist),
            (BlockKind::OrderedList, ListKind::Ordered),
            (BlockKind::UnorderedList, ListKind::Unordered),
        ];
        LIST_KINDS
            .into_iter()
            .find(|(block, list)| {
                self.capabilities.contains(block.capability()) && list.parse_item(line).is_some()
            })
            .map(|(_, list)| list)
    }
}

/// A block parser of any kind.
#[derive(Debug)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading(HeadingBlock),
    Rule(RuleBlock),
    CodeFence(CodeFenceBlock),
    Quote(QuoteBlock),
    Table(TableBlock),
    List(ListBlock),
    Html(HtmlBlock),
}

impl Block {
    /// Feed one line (terminators already stripped).
    ///
    /// # Panics
    /// If the block is already finished.
    pub fn add_line(&mut self, line: &str, cx: &Context<'_>) -> Feed {
        assert!(
            !self.is_finished(),
            "line fed to a finished {} block",
            self.name()
        );
        match self {
            Block::Paragraph(b) => b.add_line(line, cx),
            Block::Heading(b) => b.add_line(line, cx),
            Block::Rule(b) => b.add_line(line),
            Block::CodeFence(b) => b.add_line(line),
            Block::Quote(b) => b.add_line(line, cx),
            Block::Table(b) => b.add_line(line, cx),
            Block::List(b) => b.add_line(line, cx),
            Block::Html(b) => b.add_line(line),
        }
    }

    /// Close the block at end of input. No-op if already finished.
    pub fn finish(&mut self, cx: &Context<'_>) {
        match self {
            Block::Paragraph(b) => b.finish(),
            Block::Heading(b) => b.finish(),
            Block::Rule(b) => b.finish(),
            Block::CodeFence(b) => b.finish(),
            Block::Quote(b) => b.finish(cx),
            Block::Table(b) => b.finish(),
            Block::List(b) => b.finish(cx),
            Block::Html(b) => b.finish(),
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Block::Paragraph(b) => b.is_finished(),
            Block::Heading(b) => b.is_finished(),
            Block::Rule(b) => b.is_finished(),
            Block::CodeFence(b) => b.is_finished(),
            Block::Quote(b) => b.is_finished(),
            Block::Table(b) => b.is_finished(),
            Block::List(b) => b.is_finished(),
            Block::Html(b) => b.is_finished(),
        }
    }

    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading(_) => "heading",
            Block::Rule(_) => "horizontal rule",
            Block::CodeFence(_) => "code fence",
            Block::Quote(_) => "blockquote",
            Block::Table(_) => "table",
            Block::List(_) => "list",
            Block::Html(_) => "html",
        }
    }

    /// The rendered fragment.
    pub fn into_html(self) -> String {
        match self {
            Block::Paragraph(b) => b.into_html(),
            Block::Heading(b) => b.into_html(),
            Block::Rule(b) => b.into_html(),
            Block::CodeFence(b) => b.into_html(),
            Block::Quote(b) => b.into_html(),
            Block::Table(b) => b.into_html(),
            Block::List(b) => b.into_html(),
            Block::Html(b) => b.into_html(),
        }
    }
}
