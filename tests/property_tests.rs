//! Property tests over generated documents.

use blockmark::{LineTransformer, to_html};
use proptest::prelude::*;

/// Lines built from block markers and plain words.
fn markdown_line() -> impl Strategy<Value = String> {
    let prefix = prop_oneof![
        Just(""),
        Just("> "),
        Just(">> "),
        Just(">>> "),
        Just("- "),
        Just("  - "),
        Just("* "),
        Just("1. "),
        Just("  2. "),
        Just("- [ ] "),
        Just("- [x] "),
        Just("# "),
        Just("|"),
    ];
    let line = (prefix, "[a-z]{1,6}( [a-z]{1,6}){0,2}").prop_map(|(p, w)| format!("{p}{w}"));
    prop_oneof![
        4 => line,
        1 => Just(String::new()),
        1 => Just("|table>".to_owned()),
        1 => Just("|<table".to_owned()),
        1 => Just("---|---".to_owned()),
        1 => Just("```".to_owned()),
        1 => Just("---".to_owned()),
        1 => Just("<div>".to_owned()),
    ]
}

fn assert_balanced(html: &str, open: &str, close: &str) -> Result<(), TestCaseError> {
    prop_assert_eq!(
        html.matches(open).count(),
        html.matches(close).count(),
        "{} vs {} in {}",
        open,
        close,
        html
    );
    Ok(())
}

proptest! {
    #[test]
    fn prop_block_tags_are_balanced(lines in prop::collection::vec(markdown_line(), 0..40)) {
        let html = to_html(&lines.join("\n"));
        for (open, close) in [
            ("<blockquote>", "</blockquote>"),
            ("<ul", "</ul>"),
            ("<ol", "</ol>"),
            ("<li>", "</li>"),
            ("<p>", "</p>"),
            ("<table>", "</table>"),
            ("<thead>", "</thead>"),
            ("<tbody>", "</tbody>"),
            ("<tfoot>", "</tfoot>"),
            ("<tr>", "</tr>"),
            ("<pre>", "</pre>"),
        ] {
            assert_balanced(&html, open, close)?;
        }
    }

    #[test]
    fn prop_quote_depth_matches_markers(depth in 1usize..=32, text in "[a-z]{1,10}") {
        let html = to_html(&format!("{} {text}\n", ">".repeat(depth)));
        prop_assert_eq!(html.matches("<blockquote>").count(), depth);
        prop_assert_eq!(html.matches("</blockquote>").count(), depth);
        let innermost = format!("{}{text}<br />\n</blockquote>", "<blockquote>\n".repeat(depth));
        prop_assert!(html.starts_with(&innermost), "{}", html);
    }

    #[test]
    fn prop_plain_text_is_wrapped_in_paragraphs(
        lines in prop::collection::vec(prop::option::weighted(0.8, "[a-z]{1,8}( [a-z]{1,8}){0,3}"), 0..20)
    ) {
        let input = lines
            .iter()
            .map(|line| line.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n");

        let mut expected = String::new();
        for group in lines.split(Option::is_none).filter(|group| !group.is_empty()) {
            let text: Vec<&str> = group.iter().flatten().map(String::as_str).collect();
            expected.push_str("<p>");
            expected.push_str(&text.join(" "));
            expected.push_str("</p>\n");
        }

        prop_assert_eq!(to_html(&input), expected);
    }

    #[test]
    fn prop_line_without_markers_is_unchanged(line in "[a-zA-Z0-9,.]{1,8}( [a-zA-Z0-9,.]{1,8}){0,6}") {
        prop_assert_eq!(LineTransformer::default().transform(&line), line);
    }

    #[test]
    fn prop_table_section_roles(sections in prop::collection::vec(1usize..4, 1..7)) {
        let mut input = String::from("|table>\n");
        for (index, rows) in sections.iter().enumerate() {
            if index > 0 {
                input.push_str("-|-|-\n");
            }
            for row in 0..*rows {
                input.push_str(&format!("c{row}|d{row}\n"));
            }
        }
        input.push_str("|<table\n");

        let html = to_html(&input);
        let count = sections.len();
        let head = usize::from(count > 1);
        let foot = usize::from(count >= 3);
        prop_assert_eq!(html.matches("<thead>").count(), head);
        prop_assert_eq!(html.matches("<tfoot>").count(), foot);
        prop_assert_eq!(html.matches("<tbody>").count(), count - head - foot);
        prop_assert_eq!(html.matches("<tr>").count(), sections.iter().sum::<usize>());
    }
}
