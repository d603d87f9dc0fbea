//! Logos-based lexer for Cryptol source files
//!
//! Tokenizes the whole input, trivia included, so the token ranges tile the
//! source exactly. Keywords are only recognised as whole words: any run of
//! word characters is lexed as one token first, and a keyword literal only
//! wins when it covers the entire run.

use super::token_category::TokenCategory;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its category and position
///
/// `category` is `None` for uncategorized text (whitespace, identifiers,
/// numbers, punctuation outside the symbol tables, unlexable input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub category: Option<TokenCategory>,
    pub range: TextRange,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range]
    }
}

/// Maps a mode's logos token to its highlighting category.
pub trait Classify {
    fn category(self) -> Option<TokenCategory>;
}

/// Lexer wrapping a logos-generated tokenizer
pub struct Lexer<'a, T: Logos<'a>> {
    inner: logos::Lexer<'a, T>,
}

impl<'a, T> Lexer<'a, T>
where
    T: Logos<'a, Source = str>,
    T::Extras: Default,
{
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: T::lexer(input),
        }
    }
}

impl<'a, T> Iterator for Lexer<'a, T>
where
    T: Logos<'a, Source = str> + Classify,
{
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let range = TextRange::new(TextSize::new(span.start as u32), TextSize::new(span.end as u32));

        Some(Token {
            category: result.ok().and_then(Classify::category),
            range,
        })
    }
}

/// Tokenize a full Cryptol source into a Vec
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::<CryptolToken>::new(input).collect()
}

/// Logos token enum for full Cryptol sources
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptolToken {
    // =========================================================================
    // TRIVIA AND WORDS
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"[A-Za-z0-9_][A-Za-z0-9_']*")]
    Word,

    // =========================================================================
    // STRING MARKER
    // =========================================================================
    #[token("\"")]
    Quote,

    // =========================================================================
    // BUILTIN SYMBOLS
    // =========================================================================
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("@")]
    At,
    #[token("#")]
    Hash,

    // =========================================================================
    // OPERATOR SYMBOLS
    // =========================================================================
    #[token("=>")]
    FatArrow,
    #[token("->")]
    Arrow,
    #[token("|")]
    Pipe,
    #[token(":")]
    Colon,

    // =========================================================================
    // CONSTANT KEYWORDS
    // =========================================================================
    #[token("True")]
    TrueKw,
    #[token("False")]
    FalseKw,

    // =========================================================================
    // TYPE KEYWORDS
    // =========================================================================
    #[token("Bit")]
    BitKw,
    #[token("inf")]
    InfKw,
    #[token("fin")]
    FinKw,

    // =========================================================================
    // CONTROL KEYWORDS
    // =========================================================================
    #[token("module")]
    ModuleKw,
    #[token("theorem")]
    TheoremKw,
    #[token("where")]
    WhereKw,
    #[token("include")]
    IncludeKw,
    #[token("let")]
    LetKw,
    #[token("if")]
    IfKw,
    #[token("else")]
    ElseKw,
    #[token("then")]
    ThenKw,
    #[token("type")]
    TypeKw,
}

impl Classify for CryptolToken {
    fn category(self) -> Option<TokenCategory> {
        use CryptolToken::*;
        match self {
            Whitespace | Word => None,

            Quote => Some(TokenCategory::StringMarker),

            LBracket | RBracket | Comma | LBrace | RBrace | At | Hash => {
                Some(TokenCategory::BuiltinSymbol)
            }

            FatArrow | Arrow | Pipe | Colon => Some(TokenCategory::OperatorSymbol),

            TrueKw | FalseKw => Some(TokenCategory::ConstantKeyword),

            BitKw | InfKw | FinKw => Some(TokenCategory::TypeKeyword),

            ModuleKw | TheoremKw | WhereKw | IncludeKw | LetKw | IfKw | ElseKw | ThenKw
            | TypeKw => Some(TokenCategory::ControlKeyword),
        }
    }
}
