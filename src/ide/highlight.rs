//! Highlight spans — lexical syntax highlighting.
//!
//! The lexer output is turned into a gap-free list of spans: every byte of
//! the input belongs to exactly one span, and runs of uncategorized tokens
//! are merged into a single plain span.

use text_size::{TextRange, TextSize};

use crate::parser::{Token, TokenCategory, tokenize, tokenize_batch};
use crate::syntax::Mode;

/// A highlighted region of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Byte range in the source
    pub range: TextRange,
    /// The category, or `None` for plain text
    pub category: Option<TokenCategory>,
}

impl HighlightSpan {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range]
    }

    pub fn is_plain(&self) -> bool {
        self.category.is_none()
    }
}

/// Highlight a full Cryptol source.
pub fn highlight(text: &str) -> Vec<HighlightSpan> {
    highlight_mode(text, Mode::Cryptol)
}

/// Highlight `text` using the lexer of `mode`.
pub fn highlight_mode(text: &str, mode: Mode) -> Vec<HighlightSpan> {
    let spans = coalesce(lex(text, mode), TextSize::new(0));
    tracing::trace!(mode = mode.name(), spans = spans.len(), "highlighted buffer");
    spans
}

/// Highlight only `range` of `text`.
///
/// Span offsets stay relative to the whole of `text`. A range that is out of
/// bounds or does not fall on character boundaries yields no spans.
pub fn highlight_range(text: &str, range: TextRange, mode: Mode) -> Vec<HighlightSpan> {
    let Some(slice) = text.get(std::ops::Range::<usize>::from(range)) else {
        return Vec::new();
    };
    coalesce(lex(slice, mode), range.start())
}

/// Category of `text` when the whole input is a single categorized token.
pub fn classify_literal(text: &str, mode: Mode) -> Option<TokenCategory> {
    match lex(text, mode).as_slice() {
        [token] => token.category,
        _ => None,
    }
}

fn lex(text: &str, mode: Mode) -> Vec<Token> {
    match mode {
        Mode::Cryptol => tokenize(text),
        Mode::Batch => tokenize_batch(text),
    }
}

fn coalesce(tokens: Vec<Token>, base: TextSize) -> Vec<HighlightSpan> {
    let mut spans: Vec<HighlightSpan> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let range = token.range + base;
        match spans.last_mut() {
            Some(last) if last.is_plain() && token.category.is_none() => {
                last.range = last.range.cover(range);
            }
            _ => spans.push(HighlightSpan {
                range,
                category: token.category,
            }),
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(source: &str, spans: &[HighlightSpan]) -> String {
        spans.iter().map(|s| s.text(source)).collect()
    }

    #[test]
    fn test_plain_runs_are_merged() {
        let source = "foo bar baz";
        let spans = highlight(source);
        assert_eq!(spans.len(), 1);
        assert!(spans[0].is_plain());
        assert_eq!(spans[0].text(source), source);
    }

    #[test]
    fn test_spans_alternate_around_keywords() {
        let source = "let x = True";
        let spans = highlight(source);
        let shape: Vec<_> = spans.iter().map(|s| (s.text(source), s.category)).collect();
        assert_eq!(
            shape,
            vec![
                ("let", Some(TokenCategory::ControlKeyword)),
                (" x = ", None),
                ("True", Some(TokenCategory::ConstantKeyword)),
            ]
        );
    }

    #[test]
    fn test_adjacent_symbols_stay_separate() {
        let source = "[]";
        let spans = highlight(source);
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.category == Some(TokenCategory::BuiltinSymbol)));
    }

    #[test]
    fn test_round_trip_with_non_ascii() {
        let source = "theorem ünïcode: \"∀x\" -> x\n";
        let spans = highlight(source);
        assert_eq!(rebuild(source, &spans), source);
    }

    #[test]
    fn test_highlight_range_keeps_absolute_offsets() {
        let source = "x = 1\nif y then True else False";
        let start = TextSize::new(6);
        let range = TextRange::new(start, TextSize::of(source));
        let spans = highlight_range(source, range, Mode::Cryptol);
        assert_eq!(spans[0].range.start(), start);
        assert_eq!(spans[0].text(source), "if");
        assert_eq!(spans.last().unwrap().range.end(), TextSize::of(source));
    }

    #[test]
    fn test_highlight_range_out_of_bounds() {
        let range = TextRange::new(TextSize::new(2), TextSize::new(50));
        assert!(highlight_range("abc", range, Mode::Cryptol).is_empty());
    }

    #[test]
    fn test_classify_literal() {
        assert_eq!(
            classify_literal("where", Mode::Cryptol),
            Some(TokenCategory::ControlKeyword)
        );
        assert_eq!(classify_literal("where x", Mode::Cryptol), None);
        assert_eq!(classify_literal("foo", Mode::Cryptol), None);
        assert_eq!(
            classify_literal("prove", Mode::Batch),
            Some(TokenCategory::ControlKeyword)
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(highlight("").is_empty());
    }
}
