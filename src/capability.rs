//! Per-document parsing capabilities.
//!
//! A [`Capabilities`] value is a `bitflags` set. Each block capability gates a
//! starting-line predicate in the block factory; each line capability gates
//! one substitution pass of the line transformer.

use bitflags::bitflags;

bitflags! {
    /// Set of enabled block and line capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Fenced code blocks (```` ``` ````).
        const CODE_FENCE = 1 << 0;
        /// ATX headings (`# Title`).
        const HEADING = 1 << 1;
        /// Horizontal rules (`---`).
        const HORIZONTAL_RULE = 1 << 2;
        /// Blockquotes (`>`), including nesting.
        const QUOTE = 1 << 3;
        /// Sectioned tables (`|table>` ... `|<table`).
        const TABLE = 1 << 4;
        /// Checklists (`- [ ] item`).
        const CHECKLIST = 1 << 5;
        /// Ordered lists (`1. item`).
        const ORDERED_LIST = 1 << 6;
        /// Unordered lists (`- item`).
        const UNORDERED_LIST = 1 << 7;
        /// Raw HTML blocks passed through without a paragraph wrapper.
        const HTML_BLOCK = 1 << 8;

        /// Inline code spans (`` `code` ``).
        const INLINE_CODE = 1 << 16;
        /// Strong emphasis (`**x**`, `__x__`).
        const STRONG = 1 << 17;
        /// Strikethrough (`~~x~~`).
        const STRIKETHROUGH = 1 << 18;
        /// Emphasis (`*x*`, `_x_`).
        const EMPHASIS = 1 << 19;
        /// Images (`![alt](src)`).
        const IMAGE = 1 << 20;
        /// Links (`[text](url)`).
        const LINK = 1 << 21;
        /// Hard line breaks from two or more trailing spaces.
        const BREAK_LINE = 1 << 22;
    }
}

impl Capabilities {
    /// Every line (inline) capability.
    pub const LINE: Self = Self::INLINE_CODE
        .union(Self::STRONG)
        .union(Self::STRIKETHROUGH)
        .union(Self::EMPHASIS)
        .union(Self::IMAGE)
        .union(Self::LINK)
        .union(Self::BREAK_LINE);

    /// Every capability, keyed by its command-line name.
    pub const NAMED: [(&'static str, Self); 16] = [
        ("code-fence", Self::CODE_FENCE),
        ("heading", Self::HEADING),
        ("horizontal-rule", Self::HORIZONTAL_RULE),
        ("quote", Self::QUOTE),
        ("table", Self::TABLE),
        ("checklist", Self::CHECKLIST),
        ("ordered-list", Self::ORDERED_LIST),
        ("unordered-list", Self::UNORDERED_LIST),
        ("html-block", Self::HTML_BLOCK),
        ("inline-code", Self::INLINE_CODE),
        ("strong", Self::STRONG),
        ("strikethrough", Self::STRIKETHROUGH),
        ("emphasis", Self::EMPHASIS),
        ("image", Self::IMAGE),
        ("link", Self::LINK),
        ("break-line", Self::BREAK_LINE),
    ];

    /// Only the line (inline) capabilities of this set.
    #[inline]
    pub const fn line_only(self) -> Self {
        self.intersection(Self::LINE)
    }

    /// Look up a capability by its kebab-case command-line name.
    pub fn from_cli_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, cap)| cap)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}
