//! Outline Tests
//!
//! Theorem declaration scanning as consumed by an outline view.

use cryptol_mode::LineCol;
use cryptol_mode::ide::{Declaration, document_outline, scan_declarations};
use rstest::rstest;

fn names_and_offsets(text: &str) -> Vec<(String, u32)> {
    scan_declarations(text)
        .into_iter()
        .map(|d: Declaration| (d.name.to_string(), u32::from(d.offset)))
        .collect()
}

#[test]
fn test_single_theorem() {
    assert_eq!(
        names_and_offsets("theorem foo: True\n"),
        vec![("foo".to_string(), 8)]
    );
}

#[test]
fn test_two_theorems_in_order() {
    assert_eq!(
        names_and_offsets("theorem a: True\ntheorem b: False\n"),
        vec![("a".to_string(), 8), ("b".to_string(), 24)]
    );
}

#[test]
fn test_duplicates_are_kept() {
    let decls = scan_declarations("theorem p: True\ntheorem p: True\n");
    assert_eq!(decls.len(), 2);
    assert!(decls[0].offset < decls[1].offset);
}

#[rstest]
#[case("")]
#[case("module M where\nf x = x\n")]
#[case("  theorem indented: True\n")]
#[case("-- theorem commented: True\n")]
#[case("theorem missingColon True\n")]
#[case("theorems plural: True\n")]
#[case("theorem\ttabbed: True\n")]
#[case("theorem\nsplit: True\n")]
fn test_no_declarations(#[case] text: &str) {
    assert!(scan_declarations(text).is_empty());
}

#[test]
fn test_last_line_without_newline() {
    assert_eq!(
        names_and_offsets("x = 1\ntheorem last: x == 1"),
        vec![("last".to_string(), 14)]
    );
}

#[test]
fn test_scan_is_idempotent() {
    let text = "theorem a: True\nfoo\ntheorem b: False\ntheorem a: x\n";
    assert_eq!(scan_declarations(text), scan_declarations(text));
}

#[test]
fn test_offsets_point_at_names() {
    let text = "module M where\ntheorem   spaced: True\ntheorem ünï: True\ntheorem tail: x\n";
    for decl in scan_declarations(text) {
        assert_eq!(&text[decl.range()], decl.name.as_str());
    }
}

#[test]
fn test_outline_positions() {
    let text = "module M where\n\ntheorem a: True\nx = 2\ntheorem  b: False\n";
    let outline = document_outline(text);
    let positions: Vec<_> = outline.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![LineCol::new(2, 8), LineCol::new(4, 9)]);
}
