//! Document engine tests: dispatch, hand-back, buffers and block plumbing.

use blockmark::block::{ListKind, QuoteBlock, TableBlock};
use blockmark::{
    Block, BlockFactory, BlockKind, Context, Document, Feed, Options, to_html, to_html_into,
};

/// Every call is independent of the previous one.
#[test]
fn document_render_is_stateless() {
    let first = to_html("> open quote");
    let second = to_html("text");
    assert!(first.ends_with("</blockquote>\n"));
    assert_eq!(second, "<p>text</p>\n");
}

/// Each block kind in sequence, with the hand-back line starting the next.
#[test]
fn document_block_sequence() {
    let input = "intro\n> quote\n|table>\nc\n|<table\n- item\n# Head\n";
    let expected = "<p>intro</p>\n\
                    <blockquote>\nquote<br />\n</blockquote>\n\
                    <table>\n<tbody>\n<tr>\n<td>c</td>\n</tr>\n</tbody>\n</table>\n\
                    <ul>\n<li>item</li>\n</ul>\n\
                    <h1>Head</h1>\n";
    assert_eq!(to_html(input), expected);
}

/// CRLF input renders like LF input.
#[test]
fn document_crlf_input() {
    assert_eq!(to_html("> a\r\n>> b\r\n"), to_html("> a\n>> b\n"));
}

/// `to_html_into` clears and reuses the caller's buffer.
#[test]
fn document_render_into_buffer() {
    let mut out = String::with_capacity(1024);
    to_html_into("# a", &mut out);
    assert_eq!(out, "<h1>a</h1>\n");
    to_html_into("b", &mut out);
    assert_eq!(out, "<p>b</p>\n");
}

/// Lines pushed one at a time match a whole-document render.
#[test]
fn document_push_line_matches_to_html() {
    let input = "> a\n>> b\n\n1. x\n  2. y\ntext\n";
    let mut doc = Document::new(&Options::default());
    for line in input.lines() {
        doc.push_line(line);
    }
    assert_eq!(doc.finish(), to_html(input));
}

/// Block parsers can be driven in isolation with a stub transformer.
#[test]
fn document_block_with_stub_transformer() {
    let factory = BlockFactory::default();
    let stub = |line: &str| format!("[{line}]");
    let cx = Context::new(&stub, &factory);

    let mut quote = QuoteBlock::new();
    assert_eq!(quote.add_line("> x", &cx), Feed::Continue);
    assert_eq!(quote.add_line("y", &cx), Feed::Handback);
    assert_eq!(quote.into_html(), "<blockquote>\n[x]<br />\n</blockquote>\n");

    let mut table = TableBlock::new();
    for line in ["|table>", "a|b"] {
        assert_eq!(table.add_line(line, &cx), Feed::Continue);
    }
    assert_eq!(table.add_line("|<table", &cx), Feed::Done);
    assert!(table.into_html().contains("<td>[a]</td>\n<td>[b]</td>"));
}

/// A factory with nothing enabled classifies nothing.
#[test]
fn document_stub_factory() {
    let factory = BlockFactory::new(blockmark::Capabilities::empty());
    for line in ["> q", "|table>", "- a", "# h", "```"] {
        assert_eq!(factory.classify(line), None, "{line}");
    }
    assert_eq!(factory.list_kind("- a"), None);
}

/// Generic `Block` dispatch works for every kind.
#[test]
fn document_block_enum_dispatch() {
    let factory = BlockFactory::default();
    let inline = |line: &str| line.to_owned();
    let cx = Context::new(&inline, &factory);

    for kind in BlockKind::PRIORITY {
        let mut block = factory.start(kind);
        assert!(!block.is_finished(), "{}", block.name());
        block.finish(&cx);
        assert!(block.is_finished(), "{}", block.name());
    }
}

#[test]
fn document_factory_start_matches_kind() {
    let factory = BlockFactory::default();
    assert!(matches!(factory.start(BlockKind::Quote), Block::Quote(_)));
    assert!(matches!(factory.start(BlockKind::Table), Block::Table(_)));
    match factory.start(BlockKind::Checklist) {
        Block::List(list) => assert_eq!(list.kind(), ListKind::Checklist),
        other => panic!("unexpected block {}", other.name()),
    }
}

/// Feeding a finished block is a contract violation.
#[test]
#[should_panic(expected = "finished table")]
fn document_feed_after_finish_panics() {
    let factory = BlockFactory::default();
    let inline = |line: &str| line.to_owned();
    let cx = Context::new(&inline, &factory);
    let mut block = factory.start(BlockKind::Table);
    let _ = block.add_line("|table>", &cx);
    let _ = block.add_line("|<table", &cx);
    let _ = block.add_line("more", &cx);
}
