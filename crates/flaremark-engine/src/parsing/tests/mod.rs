//! Tree-level tests for the parsing module.
//!
//! Each test parses with the standard registry and compares the whole
//! document tree, so coalescing and nesting are checked along the way.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::ast::Node;
use crate::parsing::{
    Category, CursorMut, MAX_NESTING, ParseError, Reader, Registry, RuleId, parse_document,
    rules::{DocumentRule, EscapeRule, TextRule},
    standard_registry,
};

fn parse(text: &str) -> Node {
    parse_document(&standard_registry(), text).unwrap()
}

fn text(value: &str) -> Node {
    Node::Text(value.to_string())
}

fn tag(name: &'static str, children: Vec<Node>) -> Node {
    Node::Tag { name, children }
}

fn para(children: Vec<Node>) -> Node {
    Node::Paragraph {
        children,
        indent: 0,
    }
}

fn single_block(doc: Node) -> Node {
    match doc {
        Node::Document(mut blocks) => {
            assert_eq!(blocks.len(), 1, "expected one block in {blocks:?}");
            blocks.remove(0)
        }
        other => panic!("expected document, got {other:?}"),
    }
}

// Blocks

#[test]
fn plain_line_is_one_paragraph() {
    assert_eq!(
        parse("hello world"),
        Node::Document(vec![para(vec![text("hello world")])])
    );
}

#[test]
fn empty_input_is_an_empty_document() {
    assert_eq!(parse(""), Node::Document(vec![]));
}

#[test]
fn header_takes_line_verbatim() {
    assert_eq!(
        parse("### Title\n"),
        Node::Document(vec![Node::Title {
            level: 3,
            content: vec![text("Title")],
        }])
    );
    assert_eq!(
        single_block(parse("#   **not bold**")),
        Node::Title {
            level: 1,
            content: vec![text("**not bold**")],
        }
    );
}

#[test]
fn header_markers_alone_stay_literal() {
    assert_eq!(single_block(parse("###\n")), text("###"));
    assert_eq!(single_block(parse("##   \n")), text("##"));
}

#[test]
fn six_markers_fall_through_to_paragraph() {
    assert_eq!(
        single_block(parse("###### six")),
        para(vec![text("###### six")])
    );
}

#[test]
fn one_block_per_line() {
    assert_eq!(
        parse("# Head\nplain\n\n  indented"),
        Node::Document(vec![
            Node::Title {
                level: 1,
                content: vec![text("Head")],
            },
            para(vec![text("plain")]),
            para(vec![]),
            Node::Paragraph {
                children: vec![text("indented")],
                indent: 2,
            },
        ])
    );
}

#[test]
fn crlf_is_normalised() {
    assert_eq!(parse("a\r\nb\r\n"), parse("a\nb\n"));
    assert_eq!(
        parse("a\r\nb"),
        Node::Document(vec![para(vec![text("a")]), para(vec![text("b")])])
    );
}

#[test]
fn trailing_newline_adds_no_block() {
    assert_eq!(parse("a\n"), Node::Document(vec![para(vec![text("a")])]));
}

// Inline spans

#[rstest]
#[case("*a*", tag("i", vec![text("a")]))]
#[case("_a_", tag("i", vec![text("a")]))]
#[case("**a**", tag("b", vec![text("a")]))]
#[case("__a__", tag("u", vec![text("a")]))]
#[case("~~a~~", tag("del", vec![text("a")]))]
fn delimited_spans(#[case] input: &str, #[case] expected: Node) {
    assert_eq!(single_block(parse(input)), para(vec![expected]));
}

#[test]
fn mismatched_italic_marker_does_not_close() {
    assert_eq!(
        single_block(parse("*a_ b")),
        para(vec![tag("i", vec![text("a_ b")])])
    );
}

#[test]
fn span_left_open_ends_at_line_break() {
    assert_eq!(
        parse("**bold\nnext"),
        Node::Document(vec![
            para(vec![tag("b", vec![text("bold")])]),
            para(vec![text("next")]),
        ])
    );
}

#[test]
fn delimiter_at_end_of_input_terminates() {
    assert_eq!(single_block(parse("**")), para(vec![tag("b", vec![])]));
    assert_eq!(single_block(parse("a*")), para(vec![text("a"), tag("i", vec![])]));
}

#[test]
fn spans_nest() {
    assert_eq!(
        single_block(parse("x **a *b* c** y")),
        para(vec![
            text("x "),
            tag(
                "b",
                vec![text("a "), tag("i", vec![text("b")]), text(" c")]
            ),
            text(" y"),
        ])
    );
}

#[test]
fn doubled_other_marker_opens_span_inside_italic() {
    assert_eq!(
        single_block(parse("*a __u__*")),
        para(vec![tag(
            "i",
            vec![text("a "), tag("u", vec![text("u")])]
        )])
    );
}

fn tag_depth(node: &Node) -> usize {
    let below = node.children().iter().map(tag_depth).max().unwrap_or(0);
    match node {
        Node::Tag { .. } => below + 1,
        _ => below,
    }
}

#[test]
fn span_nesting_is_capped() {
    let doc = parse(&"**__".repeat(200));
    // The paragraph holds one open dispatch, every span above it another.
    assert_eq!(tag_depth(&doc), MAX_NESTING - 1);
    assert_eq!(doc.errors().count(), 0);
}

#[test]
fn delimiters_past_the_cap_are_text() {
    let open = "**__".repeat(MAX_NESTING / 2);
    let doc = parse(&open);
    let mut node = &doc;
    while let Some(child) = node.children().last() {
        node = child;
    }
    assert_eq!(*node, text("__"));
}

#[test]
fn reader_depth_unwinds_after_parse() {
    let registry = standard_registry();
    let reader = Reader::new(&registry);
    let src: Vec<char> = "**a *b* c**".chars().collect();
    let mut cur = CursorMut::new(&src);
    cur.step_forward();

    assert!(reader.try_parse(Category::Text, &mut cur).unwrap().is_some());
    assert_eq!(reader.depth(), 0);
    assert!(cur.at_end());
}

// Text, coalescing and escapes

#[test]
fn characters_coalesce_into_one_text() {
    let children = match single_block(parse("ab")) {
        Node::Paragraph { children, .. } => children,
        other => panic!("expected paragraph, got {other:?}"),
    };
    assert_eq!(children, vec![text("ab")]);
}

#[test]
fn markup_characters_are_escaped() {
    assert_eq!(
        single_block(parse("a < b & c")),
        para(vec![text("a &lt; b &amp; c")])
    );
}

#[rstest]
#[case(r"\u0041", "A")]
#[case(r"\x41", "A")]
#[case(r"x\x41y", "xAy")]
#[case(r"\*not italic\*", "*not italic*")]
#[case(r"\x3c", "&lt;")]
#[case("end\\", "end\\")]
fn escapes_merge_into_text(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(single_block(parse(input)), para(vec![text(expected)]));
}

#[test]
fn escaped_n_is_a_line_break_node() {
    assert_eq!(
        single_block(parse(r"a\nb")),
        para(vec![text("a"), Node::LineBreak, text("b")])
    );
}

#[test]
fn malformed_escape_is_contained() {
    let block = single_block(parse(r"a\u12zz b"));
    let Node::Paragraph { children, .. } = &block else {
        panic!("expected paragraph, got {block:?}");
    };
    assert_eq!(children.len(), 3);
    assert_eq!(children[0], text("a"));
    assert!(matches!(children[1], Node::Error { .. }));
    assert_eq!(children[2], text("12zz b"));
    assert_eq!(block.errors().count(), 1);
}

#[test]
fn error_inside_span_keeps_span() {
    let block = single_block(parse(r"**a\xq**"));
    let Node::Paragraph { children, .. } = &block else {
        panic!("expected paragraph, got {block:?}");
    };
    let Node::Tag { name, children } = &children[0] else {
        panic!("expected tag, got {children:?}");
    };
    assert_eq!(*name, "b");
    assert_eq!(children[0], text("a"));
    assert!(matches!(children[1], Node::Error { .. }));
    assert_eq!(children[2], text("q"));
}

// Dispatcher

#[test]
fn matches_does_not_consume() {
    let registry = standard_registry();
    let reader = Reader::new(&registry);
    let src: Vec<char> = "**x".chars().collect();
    let mut cur = CursorMut::new(&src);
    cur.step_forward();

    assert!(reader.matches(Category::Text, &cur));
    assert!(reader.matches(Category::Document, &cur));
    assert!(!reader.matches(Category::Paragraph, &cur));
    assert_eq!(cur.position(), Some(0));
}

#[test]
fn try_parse_returns_none_without_match() {
    let registry = standard_registry();
    let reader = Reader::new(&registry);
    let src: Vec<char> = "plain".chars().collect();
    let mut cur = CursorMut::new(&src);
    cur.step_forward();

    assert!(reader.try_parse(Category::Text, &mut cur).unwrap().is_none());
    assert_eq!(cur.position(), Some(0));
}

#[test]
fn missing_block_rules_is_fatal() {
    let registry = Registry::builder()
        .register(DocumentRule)
        .register(TextRule)
        .register(EscapeRule)
        .build();
    let err = parse_document(&registry, "x").unwrap_err();
    assert!(matches!(err, ParseError::InvalidDocument { offset: 0 }));
    assert!(!err.is_recoverable());
}

#[test]
fn unknown_rule_is_fatal() {
    let registry = Registry::builder().build();
    let err = parse_document(&registry, "x").unwrap_err();
    assert!(matches!(err, ParseError::UnknownRule(RuleId("document"))));
}

#[test]
fn registry_serves_concurrent_parses() {
    let registry = &standard_registry();
    let inputs = ["# one", "**two**", "three\nfour"];
    let results: Vec<Node> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || parse_document(registry, input).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for (input, result) in inputs.iter().zip(results) {
        assert_eq!(result, parse(input));
    }
}
