//! Highlighting Tests
//!
//! Category priority, word boundaries, and lossless span coverage for both
//! editing modes.

#![allow(clippy::unwrap_used)]

use cryptol_mode::ide::{HighlightSpan, highlight, highlight_mode};
use cryptol_mode::keywords::{
    BATCH_KEYWORDS, BUILTIN_SYMBOLS, OPERATOR_SYMBOLS, category_tables,
};
use cryptol_mode::{Mode, TokenCategory};
use rstest::rstest;

fn categorized<'a>(source: &'a str, spans: &[HighlightSpan]) -> Vec<(&'a str, TokenCategory)> {
    spans
        .iter()
        .filter_map(|s| s.category.map(|c| (s.text(source), c)))
        .collect()
}

fn rebuild(source: &str, spans: &[HighlightSpan]) -> String {
    spans.iter().map(|s| s.text(source)).collect()
}

// ============================================================================
// Keyword categories
// ============================================================================

#[rstest]
#[case("module")]
#[case("theorem")]
#[case("where")]
#[case("include")]
#[case("let")]
#[case("if")]
#[case("else")]
#[case("then")]
#[case("type")]
fn test_control_keyword_standalone(#[case] keyword: &str) {
    let source = format!("x {keyword} y");
    let spans = highlight(&source);
    assert_eq!(
        categorized(&source, &spans),
        vec![(keyword, TokenCategory::ControlKeyword)]
    );

    let span = spans.iter().find(|s| !s.is_plain()).unwrap();
    assert_eq!(usize::from(span.range.start()), 2);
    assert_eq!(usize::from(span.range.len()), keyword.len());
}

#[rstest]
#[case("True", TokenCategory::ConstantKeyword)]
#[case("False", TokenCategory::ConstantKeyword)]
#[case("Bit", TokenCategory::TypeKeyword)]
#[case("inf", TokenCategory::TypeKeyword)]
#[case("fin", TokenCategory::TypeKeyword)]
fn test_value_and_type_keywords(#[case] keyword: &str, #[case] expected: TokenCategory) {
    let source = format!("({keyword})");
    assert_eq!(
        categorized(&source, &highlight(&source)),
        vec![(keyword, expected)]
    );
}

#[rstest]
#[case("Truex")]
#[case("xTrue")]
#[case("Bits")]
#[case("infinite")]
#[case("final")]
#[case("modules")]
#[case("elsewhere")]
#[case("if'")]
#[case("then_")]
fn test_keywords_respect_word_boundaries(#[case] word: &str) {
    let source = format!(" {word} ");
    assert!(categorized(&source, &highlight(&source)).is_empty());
}

// ============================================================================
// Symbols and operators
// ============================================================================

#[test]
fn test_every_symbol_literal() {
    for literal in BUILTIN_SYMBOLS {
        let source = format!("a{literal}b");
        assert_eq!(
            categorized(&source, &highlight(&source)),
            vec![(*literal, TokenCategory::BuiltinSymbol)]
        );
    }
    for literal in OPERATOR_SYMBOLS {
        let source = format!("a{literal}b");
        assert_eq!(
            categorized(&source, &highlight(&source)),
            vec![(*literal, TokenCategory::OperatorSymbol)]
        );
    }
}

#[test]
fn test_type_signature() {
    let source = "f : {n} (fin n) => [n] -> Bit";
    let spans = highlight(source);
    assert_eq!(
        categorized(source, &spans),
        vec![
            (":", TokenCategory::OperatorSymbol),
            ("{", TokenCategory::BuiltinSymbol),
            ("}", TokenCategory::BuiltinSymbol),
            ("fin", TokenCategory::TypeKeyword),
            ("=>", TokenCategory::OperatorSymbol),
            ("[", TokenCategory::BuiltinSymbol),
            ("]", TokenCategory::BuiltinSymbol),
            ("->", TokenCategory::OperatorSymbol),
            ("Bit", TokenCategory::TypeKeyword),
        ]
    );
}

#[test]
fn test_string_marker_is_a_single_quote() {
    let source = r#"x = "a \" b""#;
    let markers: Vec<_> = categorized(source, &highlight(source))
        .into_iter()
        .filter(|(_, c)| *c == TokenCategory::StringMarker)
        .collect();
    // Escapes are not understood: every quote is a marker
    assert_eq!(markers.len(), 3);
    assert!(markers.iter().all(|(text, _)| *text == "\""));
}

// ============================================================================
// Priority across tables
// ============================================================================

#[test]
fn test_contained_literals_resolve_to_the_listed_category() {
    for (category, table) in category_tables() {
        for literal in table {
            let source = format!(" {literal} ");
            let found = categorized(&source, &highlight(&source));
            assert_eq!(found, vec![(*literal, category)], "literal {literal:?}");
        }
    }
}

// ============================================================================
// Round trip
// ============================================================================

const SAMPLE: &str = r#"module Cipher where

include "Util.cry"

type Block = [128]

theorem encDec: {k p} (enc (k, p)) == p where
  enc : ([128], Block) -> Block
  enc (k, p) = if k @ 0 then p # zero else ~p

// 🙂 non-ascii comment | with operators
"#;

#[rstest]
#[case(SAMPLE, Mode::Cryptol)]
#[case(SAMPLE, Mode::Batch)]
#[case("", Mode::Cryptol)]
#[case("\n\n\t", Mode::Cryptol)]
#[case("load AES.cry # comment\n:set base=16\nprove @x\n", Mode::Batch)]
fn test_round_trip(#[case] source: &str, #[case] mode: Mode) {
    let spans = highlight_mode(source, mode);
    assert_eq!(rebuild(source, &spans), source);

    for pair in spans.windows(2) {
        assert_eq!(pair[0].range.end(), pair[1].range.start());
        assert!(!(pair[0].is_plain() && pair[1].is_plain()));
    }
}

#[test]
fn test_highlight_is_idempotent() {
    assert_eq!(highlight(SAMPLE), highlight(SAMPLE));
}

// ============================================================================
// Batch mode
// ============================================================================

#[test]
fn test_batch_vocabulary() {
    for command in BATCH_KEYWORDS {
        let source = format!("{command} arg\n");
        let spans = highlight_mode(&source, Mode::Batch);
        assert_eq!(
            categorized(&source, &spans),
            vec![(*command, TokenCategory::ControlKeyword)],
            "command {command:?}"
        );
    }
}

#[test]
fn test_batch_symbols_and_comment() {
    let source = ":load x # trailing @ note\n@y";
    let spans = highlight_mode(source, Mode::Batch);
    assert_eq!(
        categorized(source, &spans),
        vec![
            (":", TokenCategory::BuiltinSymbol),
            ("load", TokenCategory::ControlKeyword),
            ("# trailing @ note", TokenCategory::Comment),
            ("@", TokenCategory::OperatorSymbol),
        ]
    );
}

#[test]
fn test_full_mode_has_no_comment_category() {
    let spans = highlight("# x");
    assert_eq!(
        categorized("# x", &spans),
        vec![("#", TokenCategory::BuiltinSymbol)]
    );
}
